//! # Report Execution
//!
//! Fifteen fixed read-only aggregations. Each function runs one SELECT
//! over a pooled connection and maps the rows onto its report shape.
//! Reports 1, 5 and 14 reuse the entity shapes; the rest have their own.

use crate::model::{Cliente, Producto};
use crate::store::{clientes, productos, StorePool, StoreResult};

use super::row::{
    self, EmployeePerformance, EmployeeSales, FrequentCustomer, LowStockProduct, SedeRevenue,
    SedeStaffing, SupplierPriceBands, SupplierProductStats, SupplierTopProduct, TopCustomer,
    TopInventoryProduct,
};

const PRODUCTS_PER_SUPPLIER: &str = "\
SELECT pr.nombre AS proveedor, \
       COUNT(p.producto_id) AS total_productos, \
       AVG(p.precio) AS precio_promedio \
  FROM proveedores pr \
  LEFT JOIN productos p ON p.proveedor_id = pr.proveedor_id \
 GROUP BY pr.proveedor_id, pr.nombre";

const STAFFING_PER_SEDE: &str = "\
SELECT s.nombre AS sede, \
       COUNT(DISTINCT e.empleado_id) AS total_empleados, \
       COUNT(f.factura_id) AS total_facturas \
  FROM sedes s \
  LEFT JOIN empleados e ON e.sede_id = s.sede_id \
  LEFT JOIN facturacion f ON f.empleado_id = e.empleado_id \
 GROUP BY s.sede_id, s.nombre";

const TOP_CUSTOMER: &str = "\
SELECT c.nombre AS cliente, SUM(f.total) AS total_gastado \
  FROM clientes c \
  JOIN facturacion f ON f.cliente_id = c.cliente_id \
 GROUP BY c.cliente_id, c.nombre \
 ORDER BY total_gastado DESC \
 LIMIT 1";

const PRODUCTS_WITHOUT_SUPPLIER: &str = "\
SELECT producto_id, nombre, descripcion, precio, stock, proveedor_id \
  FROM productos \
 WHERE proveedor_id IS NULL";

const TOP_EMPLOYEES_BY_SALES: &str = "\
SELECT s.nombre AS sede, e.nombre AS empleado, \
       COUNT(f.factura_id) AS total_facturas, \
       SUM(f.total) AS total_ventas \
  FROM sedes s \
  JOIN empleados e ON e.sede_id = s.sede_id \
  JOIN facturacion f ON f.empleado_id = e.empleado_id \
 GROUP BY s.sede_id, s.nombre, e.empleado_id, e.nombre \
 ORDER BY total_ventas DESC";

const SUPPLIER_TOP_PRODUCTS: &str = "\
SELECT pr.nombre AS proveedor, p.nombre AS producto, p.precio \
  FROM productos p \
  JOIN proveedores pr ON pr.proveedor_id = p.proveedor_id \
 WHERE p.precio = (SELECT MAX(p2.precio) \
                     FROM productos p2 \
                    WHERE p2.proveedor_id = p.proveedor_id) \
 ORDER BY p.precio DESC";

const LOW_STOCK_PRODUCTS: &str = "\
SELECT p.nombre AS producto, p.stock, pr.nombre AS proveedor \
  FROM productos p \
  LEFT JOIN proveedores pr ON pr.proveedor_id = p.proveedor_id \
 WHERE p.stock < 10 \
 ORDER BY p.stock ASC";

const EMPLOYEE_PERFORMANCE: &str = "\
SELECT s.nombre AS sede, e.nombre AS empleado, \
       COUNT(f.factura_id) AS total_facturas, \
       AVG(f.total) AS promedio_venta \
  FROM empleados e \
  LEFT JOIN sedes s ON s.sede_id = e.sede_id \
  LEFT JOIN facturacion f ON f.empleado_id = e.empleado_id \
 GROUP BY s.sede_id, s.nombre, e.empleado_id, e.nombre \
 ORDER BY total_facturas DESC";

const REVENUE_PER_SEDE: &str = "\
SELECT s.nombre AS sede, \
       COUNT(f.factura_id) AS total_facturas, \
       SUM(f.total) AS ingresos_totales, \
       AVG(f.total) AS promedio_factura \
  FROM sedes s \
  JOIN empleados e ON e.sede_id = s.sede_id \
  JOIN facturacion f ON f.empleado_id = e.empleado_id \
 GROUP BY s.sede_id, s.nombre \
 ORDER BY ingresos_totales DESC";

const SUPPLIER_PRICE_BANDS: &str = "\
SELECT pr.nombre AS proveedor, \
       COUNT(p.producto_id) FILTER (WHERE p.precio < 100) AS productos_bajo_precio, \
       COUNT(p.producto_id) FILTER (WHERE p.precio >= 100 AND p.precio < 500) AS productos_precio_medio, \
       COUNT(p.producto_id) FILTER (WHERE p.precio >= 500) AS productos_precio_alto \
  FROM proveedores pr \
  LEFT JOIN productos p ON p.proveedor_id = pr.proveedor_id \
 GROUP BY pr.proveedor_id, pr.nombre";

const FREQUENT_CUSTOMERS: &str = "\
SELECT c.nombre AS cliente, \
       COUNT(f.factura_id) AS total_compras, \
       SUM(f.total) AS total_gastado, \
       AVG(f.total) AS promedio_compra, \
       MAX(f.fecha_factura) AS ultima_compra \
  FROM clientes c \
  JOIN facturacion f ON f.cliente_id = c.cliente_id \
 GROUP BY c.cliente_id, c.nombre \
HAVING COUNT(f.factura_id) >= 3 \
 ORDER BY total_compras DESC";

const CUSTOMERS_WITHOUT_PURCHASES: &str = "\
SELECT c.cliente_id, c.nombre, c.email, c.telefono, c.direccion, c.fecha_registro \
  FROM clientes c \
  LEFT JOIN facturacion f ON f.cliente_id = c.cliente_id \
 WHERE f.factura_id IS NULL";

const TOP_PRODUCTS_BY_INVENTORY_VALUE: &str = "\
SELECT p.nombre AS producto, pr.nombre AS proveedor, p.precio, p.stock, \
       p.precio * p.stock AS valor_inventario \
  FROM productos p \
  LEFT JOIN proveedores pr ON pr.proveedor_id = p.proveedor_id \
 ORDER BY valor_inventario DESC \
 LIMIT 5";

/// Query 1: the full product list.
pub async fn all_products(pool: &StorePool) -> StoreResult<Vec<Producto>> {
    productos::list(pool).await
}

/// Query 2: product count and average price per supplier. Suppliers
/// with no products appear with a zero count and a null average.
pub async fn products_per_supplier(pool: &StorePool) -> StoreResult<Vec<SupplierProductStats>> {
    let conn = pool.get().await?;
    let rows = conn.query(PRODUCTS_PER_SUPPLIER, &[]).await?;
    rows.iter().map(row::supplier_product_stats).collect()
}

/// Query 3: distinct employees and invoices per location.
pub async fn staffing_per_sede(pool: &StorePool) -> StoreResult<Vec<SedeStaffing>> {
    let conn = pool.get().await?;
    let rows = conn.query(STAFFING_PER_SEDE, &[]).await?;
    rows.iter().map(row::sede_staffing).collect()
}

/// Query 4: the customer with the highest summed invoice total.
/// At most one row; customers without invoices never qualify.
pub async fn top_customer(pool: &StorePool) -> StoreResult<Vec<TopCustomer>> {
    let conn = pool.get().await?;
    let rows = conn.query(TOP_CUSTOMER, &[]).await?;
    rows.iter().map(row::top_customer).collect()
}

/// Query 5: products whose supplier reference is absent.
pub async fn products_without_supplier(pool: &StorePool) -> StoreResult<Vec<Producto>> {
    let conn = pool.get().await?;
    let rows = conn.query(PRODUCTS_WITHOUT_SUPPLIER, &[]).await?;
    rows.iter().map(productos::from_row).collect()
}

/// Query 6: invoice count and summed total per (sede, empleado),
/// limited to employees with at least one invoice.
pub async fn top_employees_by_sales(pool: &StorePool) -> StoreResult<Vec<EmployeeSales>> {
    let conn = pool.get().await?;
    let rows = conn.query(TOP_EMPLOYEES_BY_SALES, &[]).await?;
    rows.iter().map(row::employee_sales).collect()
}

/// Query 7: each supplier's product(s) at that supplier's maximum
/// price. Ties at the max all appear.
pub async fn supplier_top_products(pool: &StorePool) -> StoreResult<Vec<SupplierTopProduct>> {
    let conn = pool.get().await?;
    let rows = conn.query(SUPPLIER_TOP_PRODUCTS, &[]).await?;
    rows.iter().map(row::supplier_top_product).collect()
}

/// Query 8: products with stock below 10, cheapest stock first.
pub async fn low_stock_products(pool: &StorePool) -> StoreResult<Vec<LowStockProduct>> {
    let conn = pool.get().await?;
    let rows = conn.query(LOW_STOCK_PRODUCTS, &[]).await?;
    rows.iter().map(row::low_stock_product).collect()
}

/// Queries 9 and 13: invoice count and average total per
/// (sede, empleado), keeping zero-invoice employees.
pub async fn employee_performance(pool: &StorePool) -> StoreResult<Vec<EmployeePerformance>> {
    let conn = pool.get().await?;
    let rows = conn.query(EMPLOYEE_PERFORMANCE, &[]).await?;
    rows.iter().map(row::employee_performance).collect()
}

/// Query 10: invoice count, summed and average total per location,
/// limited to locations with staffed sales.
pub async fn revenue_per_sede(pool: &StorePool) -> StoreResult<Vec<SedeRevenue>> {
    let conn = pool.get().await?;
    let rows = conn.query(REVENUE_PER_SEDE, &[]).await?;
    rows.iter().map(row::sede_revenue).collect()
}

/// Query 11: product counts per supplier in the <100, [100,500) and
/// >=500 price bands. Zero-product suppliers appear with zero counts.
pub async fn supplier_price_bands(pool: &StorePool) -> StoreResult<Vec<SupplierPriceBands>> {
    let conn = pool.get().await?;
    let rows = conn.query(SUPPLIER_PRICE_BANDS, &[]).await?;
    rows.iter().map(row::supplier_price_bands).collect()
}

/// Query 12: customers with three or more invoices, most frequent
/// first.
pub async fn frequent_customers(pool: &StorePool) -> StoreResult<Vec<FrequentCustomer>> {
    let conn = pool.get().await?;
    let rows = conn.query(FREQUENT_CUSTOMERS, &[]).await?;
    rows.iter().map(row::frequent_customer).collect()
}

/// Query 14: customers with zero invoices.
pub async fn customers_without_purchases(pool: &StorePool) -> StoreResult<Vec<Cliente>> {
    let conn = pool.get().await?;
    let rows = conn.query(CUSTOMERS_WITHOUT_PURCHASES, &[]).await?;
    rows.iter().map(clientes::from_row).collect()
}

/// Query 15: the five products with the highest inventory value
/// (precio x stock).
pub async fn top_products_by_inventory_value(
    pool: &StorePool,
) -> StoreResult<Vec<TopInventoryProduct>> {
    let conn = pool.get().await?;
    let rows = conn.query(TOP_PRODUCTS_BY_INVENTORY_VALUE, &[]).await?;
    rows.iter().map(row::top_inventory_product).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_SQL: &[&str] = &[
        PRODUCTS_PER_SUPPLIER,
        STAFFING_PER_SEDE,
        TOP_CUSTOMER,
        PRODUCTS_WITHOUT_SUPPLIER,
        TOP_EMPLOYEES_BY_SALES,
        SUPPLIER_TOP_PRODUCTS,
        LOW_STOCK_PRODUCTS,
        EMPLOYEE_PERFORMANCE,
        REVENUE_PER_SEDE,
        SUPPLIER_PRICE_BANDS,
        FREQUENT_CUSTOMERS,
        CUSTOMERS_WITHOUT_PURCHASES,
        TOP_PRODUCTS_BY_INVENTORY_VALUE,
    ];

    #[test]
    fn test_reports_are_single_read_only_statements() {
        for sql in ALL_SQL {
            assert!(sql.starts_with("SELECT"), "not a SELECT: {sql}");
            assert!(!sql.contains(';'), "multiple statements: {sql}");
        }
    }

    #[test]
    fn test_top_customer_returns_at_most_one_row() {
        assert!(TOP_CUSTOMER.ends_with("LIMIT 1"));
    }

    #[test]
    fn test_frequent_customers_require_three_invoices() {
        assert!(FREQUENT_CUSTOMERS.contains("HAVING COUNT(f.factura_id) >= 3"));
    }

    #[test]
    fn test_inventory_ranking_is_capped_at_five() {
        assert!(TOP_PRODUCTS_BY_INVENTORY_VALUE.ends_with("LIMIT 5"));
    }
}
