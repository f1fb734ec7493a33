//! # Report Row Shapes
//!
//! One struct per report, mapped field-by-field from result rows.
//! Counts arrive as SQL bigint, monetary aggregates as double
//! precision; fields produced by an outer join are nullable.

use chrono::NaiveDateTime;
use serde::Serialize;
use tokio_postgres::Row;

use crate::store::StoreResult;

/// Per supplier: product count and average price (query 2).
#[derive(Debug, Clone, Serialize)]
pub struct SupplierProductStats {
    pub proveedor: String,
    pub total_productos: i64,
    pub precio_promedio: Option<f64>,
}

pub(crate) fn supplier_product_stats(row: &Row) -> StoreResult<SupplierProductStats> {
    Ok(SupplierProductStats {
        proveedor: row.try_get("proveedor")?,
        total_productos: row.try_get("total_productos")?,
        precio_promedio: row.try_get("precio_promedio")?,
    })
}

/// Per location: distinct employees and invoices reached through them (query 3).
#[derive(Debug, Clone, Serialize)]
pub struct SedeStaffing {
    pub sede: String,
    pub total_empleados: i64,
    pub total_facturas: i64,
}

pub(crate) fn sede_staffing(row: &Row) -> StoreResult<SedeStaffing> {
    Ok(SedeStaffing {
        sede: row.try_get("sede")?,
        total_empleados: row.try_get("total_empleados")?,
        total_facturas: row.try_get("total_facturas")?,
    })
}

/// The customer with the highest summed invoice total (query 4).
#[derive(Debug, Clone, Serialize)]
pub struct TopCustomer {
    pub cliente: String,
    pub total_gastado: f64,
}

pub(crate) fn top_customer(row: &Row) -> StoreResult<TopCustomer> {
    Ok(TopCustomer {
        cliente: row.try_get("cliente")?,
        total_gastado: row.try_get("total_gastado")?,
    })
}

/// Per (sede, empleado) with at least one invoice (query 6).
#[derive(Debug, Clone, Serialize)]
pub struct EmployeeSales {
    pub sede: String,
    pub empleado: String,
    pub total_facturas: i64,
    pub total_ventas: f64,
}

pub(crate) fn employee_sales(row: &Row) -> StoreResult<EmployeeSales> {
    Ok(EmployeeSales {
        sede: row.try_get("sede")?,
        empleado: row.try_get("empleado")?,
        total_facturas: row.try_get("total_facturas")?,
        total_ventas: row.try_get("total_ventas")?,
    })
}

/// A supplier's product(s) at that supplier's maximum price (query 7).
#[derive(Debug, Clone, Serialize)]
pub struct SupplierTopProduct {
    pub proveedor: String,
    pub producto: String,
    pub precio: f64,
}

pub(crate) fn supplier_top_product(row: &Row) -> StoreResult<SupplierTopProduct> {
    Ok(SupplierTopProduct {
        proveedor: row.try_get("proveedor")?,
        producto: row.try_get("producto")?,
        precio: row.try_get("precio")?,
    })
}

/// A product whose stock dropped below the alert threshold (query 8).
#[derive(Debug, Clone, Serialize)]
pub struct LowStockProduct {
    pub producto: String,
    pub stock: i32,
    pub proveedor: Option<String>,
}

pub(crate) fn low_stock_product(row: &Row) -> StoreResult<LowStockProduct> {
    Ok(LowStockProduct {
        producto: row.try_get("producto")?,
        stock: row.try_get("stock")?,
        proveedor: row.try_get("proveedor")?,
    })
}

/// Per (sede, empleado) including zero-invoice employees (queries 9 and 13).
///
/// `sede` is null for employees without a location; `promedio_venta`
/// is null at zero invoices.
#[derive(Debug, Clone, Serialize)]
pub struct EmployeePerformance {
    pub sede: Option<String>,
    pub empleado: String,
    pub total_facturas: i64,
    pub promedio_venta: Option<f64>,
}

pub(crate) fn employee_performance(row: &Row) -> StoreResult<EmployeePerformance> {
    Ok(EmployeePerformance {
        sede: row.try_get("sede")?,
        empleado: row.try_get("empleado")?,
        total_facturas: row.try_get("total_facturas")?,
        promedio_venta: row.try_get("promedio_venta")?,
    })
}

/// Per location with at least one staffed sale (query 10).
#[derive(Debug, Clone, Serialize)]
pub struct SedeRevenue {
    pub sede: String,
    pub total_facturas: i64,
    pub ingresos_totales: f64,
    pub promedio_factura: f64,
}

pub(crate) fn sede_revenue(row: &Row) -> StoreResult<SedeRevenue> {
    Ok(SedeRevenue {
        sede: row.try_get("sede")?,
        total_facturas: row.try_get("total_facturas")?,
        ingresos_totales: row.try_get("ingresos_totales")?,
        promedio_factura: row.try_get("promedio_factura")?,
    })
}

/// Per supplier: product counts by price band (query 11).
#[derive(Debug, Clone, Serialize)]
pub struct SupplierPriceBands {
    pub proveedor: String,
    pub productos_bajo_precio: i64,
    pub productos_precio_medio: i64,
    pub productos_precio_alto: i64,
}

pub(crate) fn supplier_price_bands(row: &Row) -> StoreResult<SupplierPriceBands> {
    Ok(SupplierPriceBands {
        proveedor: row.try_get("proveedor")?,
        productos_bajo_precio: row.try_get("productos_bajo_precio")?,
        productos_precio_medio: row.try_get("productos_precio_medio")?,
        productos_precio_alto: row.try_get("productos_precio_alto")?,
    })
}

/// A customer with three or more invoices (query 12).
#[derive(Debug, Clone, Serialize)]
pub struct FrequentCustomer {
    pub cliente: String,
    pub total_compras: i64,
    pub total_gastado: f64,
    pub promedio_compra: f64,
    pub ultima_compra: Option<NaiveDateTime>,
}

pub(crate) fn frequent_customer(row: &Row) -> StoreResult<FrequentCustomer> {
    Ok(FrequentCustomer {
        cliente: row.try_get("cliente")?,
        total_compras: row.try_get("total_compras")?,
        total_gastado: row.try_get("total_gastado")?,
        promedio_compra: row.try_get("promedio_compra")?,
        ultima_compra: row.try_get("ultima_compra")?,
    })
}

/// A product ranked by inventory value (query 15).
#[derive(Debug, Clone, Serialize)]
pub struct TopInventoryProduct {
    pub producto: String,
    pub proveedor: Option<String>,
    pub precio: f64,
    pub stock: i32,
    pub valor_inventario: f64,
}

pub(crate) fn top_inventory_product(row: &Row) -> StoreResult<TopInventoryProduct> {
    Ok(TopInventoryProduct {
        producto: row.try_get("producto")?,
        proveedor: row.try_get("proveedor")?,
        precio: row.try_get("precio")?,
        stock: row.try_get("stock")?,
        valor_inventario: row.try_get("valor_inventario")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_band_row_serializes_with_wire_names() {
        let row = SupplierPriceBands {
            proveedor: "Acme".to_string(),
            productos_bajo_precio: 1,
            productos_precio_medio: 0,
            productos_precio_alto: 1,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["productos_bajo_precio"], 1);
        assert_eq!(value["productos_precio_medio"], 0);
        assert_eq!(value["productos_precio_alto"], 1);
    }

    #[test]
    fn test_null_average_serializes_as_null() {
        let row = EmployeePerformance {
            sede: None,
            empleado: "Luis".to_string(),
            total_facturas: 0,
            promedio_venta: None,
        };
        let value = serde_json::to_value(&row).unwrap();
        assert!(value["sede"].is_null());
        assert!(value["promedio_venta"].is_null());
    }
}
