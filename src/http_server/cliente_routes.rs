//! # Cliente Routes
//!
//! Create, bulk-create, and list endpoints for clientes. A malformed
//! email rejects the request before any row is persisted.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::model::{Cliente, ClienteCreate};
use crate::store::clientes;

use super::errors::ApiResult;
use super::ApiState;

/// Create cliente routes
pub fn cliente_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/clientes/",
            post(create_cliente_handler).get(list_clientes_handler),
        )
        .route("/clientes/bulk/", post(create_clientes_bulk_handler))
        .with_state(state)
}

async fn create_cliente_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ClienteCreate>,
) -> ApiResult<Json<Cliente>> {
    payload.validate()?;
    let cliente = clientes::insert(&state.pool, payload).await?;
    Ok(Json(cliente))
}

async fn list_clientes_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Cliente>>> {
    Ok(Json(clientes::list(&state.pool).await?))
}

async fn create_clientes_bulk_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<ClienteCreate>>,
) -> ApiResult<Json<Vec<Cliente>>> {
    for cliente in &payload {
        cliente.validate()?;
    }
    Ok(Json(clientes::insert_bulk(&state.pool, payload).await?))
}
