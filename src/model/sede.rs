//! # Sede Entity
//!
//! A sede is a physical business location.

use serde::{Deserialize, Serialize};

use super::validate::{require_text, ValidationError};

/// Fields the caller supplies when creating a sede.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SedeCreate {
    pub nombre: String,
    #[serde(default)]
    pub direccion: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
}

/// A sede as stored, including its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sede {
    pub sede_id: i32,
    pub nombre: String,
    pub direccion: Option<String>,
    pub telefono: Option<String>,
}

impl SedeCreate {
    /// Check structural constraints before any store access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.nombre)
    }

    /// Attach the identifier assigned by the store.
    pub fn into_full(self, sede_id: i32) -> Sede {
        Sede {
            sede_id,
            nombre: self.nombre,
            direccion: self.direccion,
            telefono: self.telefono,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_fields_default_to_null() {
        let sede: SedeCreate = serde_json::from_str(r#"{"nombre": "Centro"}"#).unwrap();
        assert_eq!(sede.nombre, "Centro");
        assert!(sede.direccion.is_none());
        assert!(sede.telefono.is_none());
    }

    #[test]
    fn test_into_full_preserves_payload() {
        let sede = SedeCreate {
            nombre: "Norte".to_string(),
            direccion: Some("Calle 1".to_string()),
            telefono: None,
        };
        let full = sede.into_full(7);
        assert_eq!(full.sede_id, 7);
        assert_eq!(full.nombre, "Norte");
        assert_eq!(full.direccion.as_deref(), Some("Calle 1"));
    }
}
