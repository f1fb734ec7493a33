//! # Store Layer
//!
//! Thin translation between entity payloads and SQL statements against
//! the relational store. No caching, no derived state; bulk inserts run
//! inside a single transaction and everything else is one statement per
//! call. All durability and isolation is the store's job.

pub mod clientes;
pub mod empleados;
pub mod errors;
pub mod facturacion;
pub mod pool;
pub mod productos;
pub mod proveedores;
pub mod sedes;

pub use errors::{StoreError, StoreResult};
pub use pool::StorePool;
