//! # HTTP Server
//!
//! Stateless axum handlers over the store pool: one router per entity
//! plus the report router, combined by [`server::HttpServer`].

pub mod cliente_routes;
pub mod empleado_routes;
pub mod errors;
pub mod facturacion_routes;
pub mod producto_routes;
pub mod proveedor_routes;
pub mod report_routes;
pub mod sede_routes;
pub mod server;

pub use errors::{ApiError, ApiResult};
pub use server::HttpServer;

use crate::store::StorePool;

/// State shared across all handlers. Only the pool lives here; no
/// caches, counters, or locks.
pub struct ApiState {
    pub pool: StorePool,
}

impl ApiState {
    pub fn new(pool: StorePool) -> Self {
        Self { pool }
    }
}
