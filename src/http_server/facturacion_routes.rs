//! # Facturacion Routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::model::{Facturacion, FacturacionCreate};
use crate::store::facturacion;

use super::errors::ApiResult;
use super::ApiState;

/// Create facturacion routes
pub fn facturacion_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/facturacion/",
            post(create_factura_handler).get(list_facturas_handler),
        )
        .route("/facturacion/bulk/", post(create_facturas_bulk_handler))
        .with_state(state)
}

async fn create_factura_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<FacturacionCreate>,
) -> ApiResult<Json<Facturacion>> {
    payload.validate()?;
    let factura = facturacion::insert(&state.pool, payload).await?;
    Ok(Json(factura))
}

async fn list_facturas_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Facturacion>>> {
    Ok(Json(facturacion::list(&state.pool).await?))
}

async fn create_facturas_bulk_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<FacturacionCreate>>,
) -> ApiResult<Json<Vec<Facturacion>>> {
    for factura in &payload {
        factura.validate()?;
    }
    Ok(Json(facturacion::insert_bulk(&state.pool, payload).await?))
}
