//! # Proveedor Persistence

use tokio_postgres::Row;

use crate::model::{Proveedor, ProveedorCreate};

use super::errors::StoreResult;
use super::pool::StorePool;

const INSERT: &str = "INSERT INTO proveedores (nombre, contacto, telefono, direccion) \
     VALUES ($1, $2, $3, $4) RETURNING proveedor_id";

const SELECT_ALL: &str =
    "SELECT proveedor_id, nombre, contacto, telefono, direccion FROM proveedores";

/// Map one result row onto the full shape.
pub(crate) fn from_row(row: &Row) -> StoreResult<Proveedor> {
    Ok(Proveedor {
        proveedor_id: row.try_get("proveedor_id")?,
        nombre: row.try_get("nombre")?,
        contacto: row.try_get("contacto")?,
        telefono: row.try_get("telefono")?,
        direccion: row.try_get("direccion")?,
    })
}

/// Insert one proveedor and return it with its assigned identifier.
pub async fn insert(pool: &StorePool, proveedor: ProveedorCreate) -> StoreResult<Proveedor> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(
            INSERT,
            &[
                &proveedor.nombre,
                &proveedor.contacto,
                &proveedor.telefono,
                &proveedor.direccion,
            ],
        )
        .await?;
    Ok(proveedor.into_full(row.try_get(0)?))
}

/// Insert a batch inside one transaction; all rows persist or none do.
pub async fn insert_bulk(
    pool: &StorePool,
    proveedores: Vec<ProveedorCreate>,
) -> StoreResult<Vec<Proveedor>> {
    let mut conn = pool.get().await?;
    let tx = conn.transaction().await?;
    let mut created = Vec::with_capacity(proveedores.len());
    for proveedor in proveedores {
        let row = tx
            .query_one(
                INSERT,
                &[
                    &proveedor.nombre,
                    &proveedor.contacto,
                    &proveedor.telefono,
                    &proveedor.direccion,
                ],
            )
            .await?;
        created.push(proveedor.into_full(row.try_get(0)?));
    }
    tx.commit().await?;
    Ok(created)
}

/// Read every proveedor row.
pub async fn list(pool: &StorePool) -> StoreResult<Vec<Proveedor>> {
    let conn = pool.get().await?;
    let rows = conn.query(SELECT_ALL, &[]).await?;
    rows.iter().map(from_row).collect()
}
