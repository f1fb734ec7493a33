//! # Report Routes
//!
//! `/query1/` through `/query15/`, each a read-only handler with no
//! input that runs one fixed aggregation. Query 13 intentionally
//! serves the same aggregation as query 9; query 15 ranks products by
//! inventory value (see DESIGN.md).

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};

use crate::model::{Cliente, Producto};
use crate::reports::exec;
use crate::reports::{
    EmployeePerformance, EmployeeSales, FrequentCustomer, LowStockProduct, SedeRevenue,
    SedeStaffing, SupplierPriceBands, SupplierProductStats, SupplierTopProduct, TopCustomer,
    TopInventoryProduct,
};

use super::errors::ApiResult;
use super::ApiState;

/// Create report routes
pub fn report_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/query1/", get(query1_handler))
        .route("/query2/", get(query2_handler))
        .route("/query3/", get(query3_handler))
        .route("/query4/", get(query4_handler))
        .route("/query5/", get(query5_handler))
        .route("/query6/", get(query6_handler))
        .route("/query7/", get(query7_handler))
        .route("/query8/", get(query8_handler))
        .route("/query9/", get(query9_handler))
        .route("/query10/", get(query10_handler))
        .route("/query11/", get(query11_handler))
        .route("/query12/", get(query12_handler))
        .route("/query13/", get(query13_handler))
        .route("/query14/", get(query14_handler))
        .route("/query15/", get(query15_handler))
        .with_state(state)
}

async fn query1_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Producto>>> {
    Ok(Json(exec::all_products(&state.pool).await?))
}

async fn query2_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<SupplierProductStats>>> {
    Ok(Json(exec::products_per_supplier(&state.pool).await?))
}

async fn query3_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<SedeStaffing>>> {
    Ok(Json(exec::staffing_per_sede(&state.pool).await?))
}

async fn query4_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<TopCustomer>>> {
    Ok(Json(exec::top_customer(&state.pool).await?))
}

async fn query5_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Producto>>> {
    Ok(Json(exec::products_without_supplier(&state.pool).await?))
}

async fn query6_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<EmployeeSales>>> {
    Ok(Json(exec::top_employees_by_sales(&state.pool).await?))
}

async fn query7_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<SupplierTopProduct>>> {
    Ok(Json(exec::supplier_top_products(&state.pool).await?))
}

async fn query8_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<LowStockProduct>>> {
    Ok(Json(exec::low_stock_products(&state.pool).await?))
}

async fn query9_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<EmployeePerformance>>> {
    Ok(Json(exec::employee_performance(&state.pool).await?))
}

async fn query10_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<SedeRevenue>>> {
    Ok(Json(exec::revenue_per_sede(&state.pool).await?))
}

async fn query11_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<SupplierPriceBands>>> {
    Ok(Json(exec::supplier_price_bands(&state.pool).await?))
}

async fn query12_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<FrequentCustomer>>> {
    Ok(Json(exec::frequent_customers(&state.pool).await?))
}

// Same aggregation as query 9; the surface keeps both paths.
async fn query13_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<EmployeePerformance>>> {
    Ok(Json(exec::employee_performance(&state.pool).await?))
}

async fn query14_handler(State(state): State<Arc<ApiState>>) -> ApiResult<Json<Vec<Cliente>>> {
    Ok(Json(exec::customers_without_purchases(&state.pool).await?))
}

async fn query15_handler(
    State(state): State<Arc<ApiState>>,
) -> ApiResult<Json<Vec<TopInventoryProduct>>> {
    Ok(Json(exec::top_products_by_inventory_value(&state.pool).await?))
}
