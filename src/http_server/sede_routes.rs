//! # Sede Routes
//!
//! Create, bulk-create, and list endpoints for sedes.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::model::{Sede, SedeCreate};
use crate::store::sedes;

use super::errors::ApiResult;
use super::ApiState;

/// Create sede routes
pub fn sede_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/sedes/", post(create_sede_handler).get(list_sedes_handler))
        .route("/sedes/bulk/", post(create_sedes_bulk_handler))
        .with_state(state)
}

async fn create_sede_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<SedeCreate>,
) -> ApiResult<Json<Sede>> {
    payload.validate()?;
    let sede = sedes::insert(&state.pool, payload).await?;
    Ok(Json(sede))
}

async fn list_sedes_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Sede>>> {
    Ok(Json(sedes::list(&state.pool).await?))
}

async fn create_sedes_bulk_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<SedeCreate>>,
) -> ApiResult<Json<Vec<Sede>>> {
    for sede in &payload {
        sede.validate()?;
    }
    Ok(Json(sedes::insert_bulk(&state.pool, payload).await?))
}
