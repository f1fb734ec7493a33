//! # Producto Routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::model::{Producto, ProductoCreate};
use crate::store::productos;

use super::errors::ApiResult;
use super::ApiState;

/// Create producto routes
pub fn producto_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/productos/",
            post(create_producto_handler).get(list_productos_handler),
        )
        .route("/productos/bulk/", post(create_productos_bulk_handler))
        .with_state(state)
}

async fn create_producto_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<ProductoCreate>,
) -> ApiResult<Json<Producto>> {
    payload.validate()?;
    let producto = productos::insert(&state.pool, payload).await?;
    Ok(Json(producto))
}

async fn list_productos_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Producto>>> {
    Ok(Json(productos::list(&state.pool).await?))
}

async fn create_productos_bulk_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<ProductoCreate>>,
) -> ApiResult<Json<Vec<Producto>>> {
    for producto in &payload {
        producto.validate()?;
    }
    Ok(Json(productos::insert_bulk(&state.pool, payload).await?))
}
