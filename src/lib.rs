//! nagga-api - CRUD and reporting HTTP API for the NAGGA retail schema
//!
//! Six entities (sedes, clientes, empleados, proveedores, productos,
//! facturacion) with create, bulk-create, and list endpoints, plus
//! fifteen fixed analytical reports. All state lives in the backing
//! relational store; handlers are stateless translators between JSON
//! payloads and SQL statements.

pub mod cli;
pub mod config;
pub mod http_server;
pub mod model;
pub mod reports;
pub mod store;
