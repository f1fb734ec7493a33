//! # Proveedor Routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::model::{Proveedor, ProveedorCreate};
use crate::store::proveedores;

use super::errors::ApiResult;
use super::ApiState;

/// Create proveedor routes
pub fn proveedor_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/proveedores/",
            post(create_proveedor_handler).get(list_proveedores_handler),
        )
        .route("/proveedores/bulk/", post(create_proveedores_bulk_handler))
        .with_state(state)
}

async fn create_proveedor_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ProveedorCreate>,
) -> ApiResult<Json<Proveedor>> {
    payload.validate()?;
    let proveedor = proveedores::insert(&state.pool, payload).await?;
    Ok(Json(proveedor))
}

async fn list_proveedores_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Proveedor>>> {
    Ok(Json(proveedores::list(&state.pool).await?))
}

async fn create_proveedores_bulk_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<ProveedorCreate>>,
) -> ApiResult<Json<Vec<Proveedor>>> {
    for proveedor in &payload {
        proveedor.validate()?;
    }
    Ok(Json(proveedores::insert_bulk(&state.pool, payload).await?))
}
