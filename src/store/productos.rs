//! # Producto Persistence

use tokio_postgres::Row;

use crate::model::{Producto, ProductoCreate};

use super::errors::StoreResult;
use super::pool::StorePool;

const INSERT: &str = "INSERT INTO productos (nombre, descripcion, precio, stock, proveedor_id) \
     VALUES ($1, $2, $3, $4, $5) RETURNING producto_id";

const SELECT_ALL: &str =
    "SELECT producto_id, nombre, descripcion, precio, stock, proveedor_id FROM productos";

/// Map one result row onto the full shape.
pub(crate) fn from_row(row: &Row) -> StoreResult<Producto> {
    Ok(Producto {
        producto_id: row.try_get("producto_id")?,
        nombre: row.try_get("nombre")?,
        descripcion: row.try_get("descripcion")?,
        precio: row.try_get("precio")?,
        stock: row.try_get("stock")?,
        proveedor_id: row.try_get("proveedor_id")?,
    })
}

/// Insert one producto and return it with its assigned identifier.
pub async fn insert(pool: &StorePool, producto: ProductoCreate) -> StoreResult<Producto> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(
            INSERT,
            &[
                &producto.nombre,
                &producto.descripcion,
                &producto.precio,
                &producto.stock,
                &producto.proveedor_id,
            ],
        )
        .await?;
    Ok(producto.into_full(row.try_get(0)?))
}

/// Insert a batch inside one transaction; all rows persist or none do.
pub async fn insert_bulk(
    pool: &StorePool,
    productos: Vec<ProductoCreate>,
) -> StoreResult<Vec<Producto>> {
    let mut conn = pool.get().await?;
    let tx = conn.transaction().await?;
    let mut created = Vec::with_capacity(productos.len());
    for producto in productos {
        let row = tx
            .query_one(
                INSERT,
                &[
                    &producto.nombre,
                    &producto.descripcion,
                    &producto.precio,
                    &producto.stock,
                    &producto.proveedor_id,
                ],
            )
            .await?;
        created.push(producto.into_full(row.try_get(0)?));
    }
    tx.commit().await?;
    Ok(created)
}

/// Read every producto row.
pub async fn list(pool: &StorePool) -> StoreResult<Vec<Producto>> {
    let conn = pool.get().await?;
    let rows = conn.query(SELECT_ALL, &[]).await?;
    rows.iter().map(from_row).collect()
}
