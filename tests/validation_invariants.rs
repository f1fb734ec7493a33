//! Validation Invariant Tests
//!
//! Structural validation of create payloads:
//! - required string fields reject empty/missing input
//! - email fields must match standard address syntax
//! - date fields accept ISO-8601 and default to null
//! - validation is deterministic

use nagga_api::model::{
    ClienteCreate, EmpleadoCreate, FacturacionCreate, ProductoCreate, ProveedorCreate, SedeCreate,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn valid_cliente() -> ClienteCreate {
    serde_json::from_str(r#"{"nombre": "Ana", "email": "ana@example.com"}"#).unwrap()
}

// =============================================================================
// Required Field Tests
// =============================================================================

#[test]
fn test_every_entity_rejects_empty_nombre() {
    let sede: SedeCreate = serde_json::from_str(r#"{"nombre": ""}"#).unwrap();
    assert!(sede.validate().is_err());

    let mut cliente = valid_cliente();
    cliente.nombre = String::new();
    assert!(cliente.validate().is_err());

    let empleado: EmpleadoCreate = serde_json::from_str(r#"{"nombre": ""}"#).unwrap();
    assert!(empleado.validate().is_err());

    let proveedor: ProveedorCreate = serde_json::from_str(r#"{"nombre": " "}"#).unwrap();
    assert!(proveedor.validate().is_err());

    let producto: ProductoCreate =
        serde_json::from_str(r#"{"nombre": "", "precio": 1.0}"#).unwrap();
    assert!(producto.validate().is_err());
}

#[test]
fn test_missing_required_fields_fail_deserialization() {
    assert!(serde_json::from_str::<SedeCreate>(r#"{}"#).is_err());
    assert!(serde_json::from_str::<ClienteCreate>(r#"{"nombre": "Ana"}"#).is_err());
    assert!(serde_json::from_str::<ProductoCreate>(r#"{"nombre": "Mesa"}"#).is_err());
    assert!(serde_json::from_str::<FacturacionCreate>(r#"{"cliente_id": 1}"#).is_err());
}

// =============================================================================
// Email Syntax Tests
// =============================================================================

#[test]
fn test_cliente_email_syntax() {
    let mut cliente = valid_cliente();
    assert!(cliente.validate().is_ok());

    for bad in ["", "plano", "a@b", "a b@c.d", "x@@y.z"] {
        cliente.email = bad.to_string();
        assert!(cliente.validate().is_err(), "accepted {:?}", bad);
    }
}

#[test]
fn test_empleado_email_only_checked_when_present() {
    let sin_email: EmpleadoCreate = serde_json::from_str(r#"{"nombre": "Luis"}"#).unwrap();
    assert!(sin_email.validate().is_ok());

    let con_email: EmpleadoCreate =
        serde_json::from_str(r#"{"nombre": "Luis", "email": "luis@example.com"}"#).unwrap();
    assert!(con_email.validate().is_ok());

    let roto: EmpleadoCreate =
        serde_json::from_str(r#"{"nombre": "Luis", "email": "luis"}"#).unwrap();
    assert!(roto.validate().is_err());
}

// =============================================================================
// Date Handling Tests
// =============================================================================

#[test]
fn test_dates_default_to_null() {
    let cliente = valid_cliente();
    assert!(cliente.fecha_registro.is_none());

    let factura: FacturacionCreate = serde_json::from_str(r#"{"total": 10.0}"#).unwrap();
    assert!(factura.fecha_factura.is_none());
}

#[test]
fn test_dates_accept_iso_8601() {
    let cliente: ClienteCreate = serde_json::from_str(
        r#"{"nombre": "Ana", "email": "a@b.co", "fecha_registro": "2023-11-30"}"#,
    )
    .unwrap();
    assert!(cliente.fecha_registro.is_some());

    let factura: FacturacionCreate =
        serde_json::from_str(r#"{"total": 10.0, "fecha_factura": "2023-11-30T08:15:00"}"#).unwrap();
    assert!(factura.fecha_factura.is_some());
}

// =============================================================================
// Determinism
// =============================================================================

#[test]
fn test_validation_is_deterministic() {
    let mut cliente = valid_cliente();
    cliente.email = "rotisimo".to_string();
    for _ in 0..100 {
        assert!(cliente.validate().is_err());
    }
}

// =============================================================================
// Full-Shape Construction
// =============================================================================

#[test]
fn test_into_full_equals_payload_plus_id() {
    let producto: ProductoCreate = serde_json::from_str(
        r#"{"nombre": "Mesa", "precio": 120.0, "stock": 3, "proveedor_id": 9}"#,
    )
    .unwrap();
    let full = producto.clone().into_full(42);

    assert_eq!(full.producto_id, 42);
    assert_eq!(full.nombre, producto.nombre);
    assert_eq!(full.precio, producto.precio);
    assert_eq!(full.stock, producto.stock);
    assert_eq!(full.proveedor_id, producto.proveedor_id);
}
