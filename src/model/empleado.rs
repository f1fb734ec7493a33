//! # Empleado Entity
//!
//! Employees, optionally attached to a sede. The email is optional but
//! must be well-formed when present.

use serde::{Deserialize, Serialize};

use super::validate::{optional_email, require_text, ValidationError};

/// Fields the caller supplies when creating an empleado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmpleadoCreate {
    pub nombre: String,
    #[serde(default)]
    pub cargo: Option<String>,
    #[serde(default)]
    pub telefono: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sede_id: Option<i32>,
}

/// An empleado as stored, including its assigned identifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Empleado {
    pub empleado_id: i32,
    pub nombre: String,
    pub cargo: Option<String>,
    pub telefono: Option<String>,
    pub email: Option<String>,
    pub sede_id: Option<i32>,
}

impl EmpleadoCreate {
    /// Check structural constraints before any store access.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("nombre", &self.nombre)?;
        optional_email("email", self.email.as_deref())
    }

    /// Attach the identifier assigned by the store.
    pub fn into_full(self, empleado_id: i32) -> Empleado {
        Empleado {
            empleado_id,
            nombre: self.nombre,
            cargo: self.cargo,
            telefono: self.telefono,
            email: self.email,
            sede_id: self.sede_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_optional() {
        let empleado: EmpleadoCreate = serde_json::from_str(r#"{"nombre": "Luis"}"#).unwrap();
        assert!(empleado.validate().is_ok());
    }

    #[test]
    fn test_present_email_must_be_valid() {
        let empleado: EmpleadoCreate =
            serde_json::from_str(r#"{"nombre": "Luis", "email": "roto"}"#).unwrap();
        assert!(empleado.validate().is_err());
    }
}
