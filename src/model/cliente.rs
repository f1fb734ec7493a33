//! # Cliente Entity
//!
//! Customers. `email` is required and must be syntactically valid;
//! `fecha_registro` is an optional ISO-8601 date.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::validate::{require_email, require_text, ValidationError};

/// Fields the caller supplies when creating a cliente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClienteCreate {
    pub nombre: String,
    pub email: String,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub fecha_registro: Option<NaiveDate>,
}

/// A cliente as stored, including its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cliente {
    pub cliente_id: i32,
    pub nombre: String,
    pub email: String,
    pub telefono: Option<String>,
    pub direccion: Option<String>,
    pub fecha_registro: Option<NaiveDate>,
}

impl ClienteCreate {
    /// Check structural constraints before any store access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.nombre)?;
        require_email("email", &self.email)
    }

    /// Attach the identifier assigned by the store.
    pub fn into_full(self, cliente_id: i32) -> Cliente {
        Cliente {
            cliente_id,
            nombre: self.nombre,
            email: self.email,
            telefono: self.telefono,
            direccion: self.direccion,
            fecha_registro: self.fecha_registro,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ClienteCreate {
        ClienteCreate {
            nombre: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            telefono: None,
            direccion: None,
            fecha_registro: None,
        }
    }

    #[test]
    fn test_valid_cliente_passes() {
        assert!(base().validate().is_ok());
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let mut cliente = base();
        cliente.email = "no-es-un-correo".to_string();
        assert!(cliente.validate().is_err());
    }

    #[test]
    fn test_empty_nombre_is_rejected() {
        let mut cliente = base();
        cliente.nombre = "  ".to_string();
        assert!(cliente.validate().is_err());
    }

    #[test]
    fn test_fecha_registro_accepts_iso_date() {
        let cliente: ClienteCreate = serde_json::from_str(
            r#"{"nombre": "Ana", "email": "ana@example.com", "fecha_registro": "2024-05-01"}"#,
        )
        .unwrap();
        assert_eq!(
            cliente.fecha_registro,
            Some(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
    }

    #[test]
    fn test_missing_email_fails_deserialization() {
        let result = serde_json::from_str::<ClienteCreate>(r#"{"nombre": "Ana"}"#);
        assert!(result.is_err());
    }
}
