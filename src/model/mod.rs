//! # Entity Model
//!
//! The six retail entities. Each has a create shape (caller-supplied
//! fields) and a full shape (create shape plus the store-assigned
//! identifier), with structural validation at the boundary.

pub mod cliente;
pub mod empleado;
pub mod factura;
pub mod producto;
pub mod proveedor;
pub mod sede;
pub mod validate;

pub use cliente::{Cliente, ClienteCreate};
pub use empleado::{Empleado, EmpleadoCreate};
pub use factura::{Facturacion, FacturacionCreate};
pub use producto::{Producto, ProductoCreate};
pub use proveedor::{Proveedor, ProveedorCreate};
pub use sede::{Sede, SedeCreate};
pub use validate::ValidationError;
