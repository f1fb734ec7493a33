//! # Empleado Routes

use std::sync::Arc;

use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};

use crate::model::{Empleado, EmpleadoCreate};
use crate::store::empleados;

use super::errors::ApiResult;
use super::ApiState;

/// Create empleado routes
pub fn empleado_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route(
            "/empleados/",
            post(create_empleado_handler).get(list_empleados_handler),
        )
        .route("/empleados/bulk/", post(create_empleados_bulk_handler))
        .with_state(state)
}

async fn create_empleado_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<EmpleadoCreate>,
) -> ApiResult<Json<Empleado>> {
    payload.validate()?;
    let empleado = empleados::insert(&state.pool, payload).await?;
    Ok(Json(empleado))
}

async fn list_empleados_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<Empleado>>> {
    Ok(Json(empleados::list(&state.pool).await?))
}

async fn create_empleados_bulk_handler(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<Vec<EmpleadoCreate>>,
) -> ApiResult<Json<Vec<Empleado>>> {
    for empleado in &payload {
        empleado.validate()?;
    }
    Ok(Json(empleados::insert_bulk(&state.pool, payload).await?))
}
