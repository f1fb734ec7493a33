//! # Producto Entity
//!
//! Products with a price, a stock level, and an optional supplier
//! reference. A product without a proveedor is a valid state.

use serde::{Deserialize, Serialize};

use super::validate::{require_text, ValidationError};

/// Fields the caller supplies when creating a producto.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductoCreate {
    pub nombre: String,
    #[serde(default)]
    pub descripcion: Option<String>,
    pub precio: f64,
    #[serde(default)]
    pub stock: i32,
    #[serde(default)]
    pub proveedor_id: Option<i32>,
}

/// A producto as stored, including its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Producto {
    pub producto_id: i32,
    pub nombre: String,
    pub descripcion: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub proveedor_id: Option<i32>,
}

impl ProductoCreate {
    /// Check structural constraints before any store access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.nombre)
    }

    /// Attach the identifier assigned by the store.
    pub fn into_full(self, producto_id: i32) -> Producto {
        Producto {
            producto_id,
            nombre: self.nombre,
            descripcion: self.descripcion,
            precio: self.precio,
            stock: self.stock,
            proveedor_id: self.proveedor_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_defaults_to_zero() {
        let producto: ProductoCreate =
            serde_json::from_str(r#"{"nombre": "Teclado", "precio": 49.9}"#).unwrap();
        assert_eq!(producto.stock, 0);
        assert!(producto.proveedor_id.is_none());
    }

    #[test]
    fn test_precio_must_be_numeric() {
        let result =
            serde_json::from_str::<ProductoCreate>(r#"{"nombre": "Teclado", "precio": "caro"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_precio_fails_deserialization() {
        let result = serde_json::from_str::<ProductoCreate>(r#"{"nombre": "Teclado"}"#);
        assert!(result.is_err());
    }
}
