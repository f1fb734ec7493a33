//! # Analytical Reports
//!
//! Fifteen fixed read-only aggregations over the entity tables. Each
//! report is one SQL statement plus an explicit row mapping; none of
//! them take request parameters.

pub mod exec;
pub mod row;

pub use row::{
    EmployeePerformance, EmployeeSales, FrequentCustomer, LowStockProduct, SedeRevenue,
    SedeStaffing, SupplierPriceBands, SupplierProductStats, SupplierTopProduct, TopCustomer,
    TopInventoryProduct,
};
