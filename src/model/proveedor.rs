//! # Proveedor Entity
//!
//! Suppliers of products.

use serde::{Deserialize, Serialize};

use super::validate::{require_text, ValidationError};

/// Fields the caller supplies when creating a proveedor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProveedorCreate {
    pub nombre: String,
    #[serde(default)]
    pub contacto: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
}

/// A proveedor as stored, including its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proveedor {
    pub proveedor_id: i32,
    pub nombre: String,
    pub contacto: Option<String>,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
}

impl ProveedorCreate {
    /// Check structural constraints before any store access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.nombre)
    }

    /// Attach the identifier assigned by the store.
    pub fn into_full(self, proveedor_id: i32) -> Proveedor {
        Proveedor {
            proveedor_id,
            nombre: self.nombre,
            contacto: self.contacto,
            telefono: self.telefono,
            direccion: self.direccion,
        }
    }
}
