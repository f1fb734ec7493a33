//! # Cliente Persistence

use tokio_postgres::Row;

use crate::model::{Cliente, ClienteCreate};

use super::errors::StoreResult;
use super::pool::StorePool;

const INSERT: &str = "INSERT INTO clientes (nombre, email, telefono, direccion, fecha_registro) \
     VALUES ($1, $2, $3, $4, $5) RETURNING cliente_id";

const SELECT_ALL: &str =
    "SELECT cliente_id, nombre, email, telefono, direccion, fecha_registro FROM clientes";

/// Map one result row onto the full shape.
pub(crate) fn from_row(row: &Row) -> StoreResult<Cliente> {
    Ok(Cliente {
        cliente_id: row.try_get("cliente_id")?,
        nombre: row.try_get("nombre")?,
        email: row.try_get("email")?,
        telefono: row.try_get("telefono")?,
        direccion: row.try_get("direccion")?,
        fecha_registro: row.try_get("fecha_registro")?,
    })
}

/// Insert one cliente and return it with its assigned identifier.
pub async fn insert(pool: &StorePool, cliente: ClienteCreate) -> StoreResult<Cliente> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(
            INSERT,
            &[
                &cliente.nombre,
                &cliente.email,
                &cliente.telefono,
                &cliente.direccion,
                &cliente.fecha_registro,
            ],
        )
        .await?;
    Ok(cliente.into_full(row.try_get(0)?))
}

/// Insert a batch inside one transaction; all rows persist or none do.
pub async fn insert_bulk(
    pool: &StorePool,
    clientes: Vec<ClienteCreate>,
) -> StoreResult<Vec<Cliente>> {
    let mut conn = pool.get().await?;
    let tx = conn.transaction().await?;
    let mut created = Vec::with_capacity(clientes.len());
    for cliente in clientes {
        let row = tx
            .query_one(
                INSERT,
                &[
                    &cliente.nombre,
                    &cliente.email,
                    &cliente.telefono,
                    &cliente.direccion,
                    &cliente.fecha_registro,
                ],
            )
            .await?;
        created.push(cliente.into_full(row.try_get(0)?));
    }
    tx.commit().await?;
    Ok(created)
}

/// Read every cliente row.
pub async fn list(pool: &StorePool) -> StoreResult<Vec<Cliente>> {
    let conn = pool.get().await?;
    let rows = conn.query(SELECT_ALL, &[]).await?;
    rows.iter().map(from_row).collect()
}
