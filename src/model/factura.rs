//! # Facturacion Entity
//!
//! Invoices. Both party references are soft; an invoice may exist
//! without a cliente or an empleado.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::validate::ValidationError;

/// Fields the caller supplies when creating a factura.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacturacionCreate {
    #[serde(default)]
    pub cliente_id: Option<i32>,
    #[serde(default)]
    pub empleado_id: Option<i32>,
    #[serde(default)]
    pub fecha_factura: Option<NaiveDateTime>,
    pub total: f64,
}

/// A factura as stored, including its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facturacion {
    pub factura_id: i32,
    pub cliente_id: Option<i32>,
    pub empleado_id: Option<i32>,
    pub fecha_factura: Option<NaiveDateTime>,
    pub total: f64,
}

impl FacturacionCreate {
    /// Check structural constraints before any store access.
    ///
    /// Beyond the type-level checks serde already performs there is
    /// nothing to verify, but every create shape exposes the same
    /// entry point.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    /// Attach the identifier assigned by the store.
    pub fn into_full(self, factura_id: i32) -> Facturacion {
        Facturacion {
            factura_id,
            cliente_id: self.cliente_id,
            empleado_id: self.empleado_id,
            fecha_factura: self.fecha_factura,
            total: self.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fecha_factura_accepts_iso_datetime() {
        let factura: FacturacionCreate = serde_json::from_str(
            r#"{"total": 120.5, "fecha_factura": "2024-05-01T12:30:00"}"#,
        )
        .unwrap();
        assert_eq!(
            factura.fecha_factura.map(|f| f.to_string()),
            Some("2024-05-01 12:30:00".to_string())
        );
    }

    #[test]
    fn test_total_is_required() {
        assert!(serde_json::from_str::<FacturacionCreate>(r#"{"cliente_id": 1}"#).is_err());
    }
}
