//! # Sede Persistence
//!
//! One SQL statement per operation; the store assigns identifiers.

use tokio_postgres::Row;

use crate::model::{Sede, SedeCreate};

use super::errors::StoreResult;
use super::pool::StorePool;

const INSERT: &str =
    "INSERT INTO sedes (nombre, direccion, telefono) VALUES ($1, $2, $3) RETURNING sede_id";

const SELECT_ALL: &str = "SELECT sede_id, nombre, direccion, telefono FROM sedes";

/// Map one result row onto the full shape.
pub(crate) fn from_row(row: &Row) -> StoreResult<Sede> {
    Ok(Sede {
        sede_id: row.try_get("sede_id")?,
        nombre: row.try_get("nombre")?,
        direccion: row.try_get("direccion")?,
        telefono: row.try_get("telefono")?,
    })
}

/// Insert one sede and return it with its assigned identifier.
pub async fn insert(pool: &StorePool, sede: SedeCreate) -> StoreResult<Sede> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(INSERT, &[&sede.nombre, &sede.direccion, &sede.telefono])
        .await?;
    Ok(sede.into_full(row.try_get(0)?))
}

/// Insert a batch inside one transaction; all rows persist or none do.
pub async fn insert_bulk(pool: &StorePool, sedes: Vec<SedeCreate>) -> StoreResult<Vec<Sede>> {
    let mut conn = pool.get().await?;
    let tx = conn.transaction().await?;
    let mut created = Vec::with_capacity(sedes.len());
    for sede in sedes {
        let row = tx
            .query_one(INSERT, &[&sede.nombre, &sede.direccion, &sede.telefono])
            .await?;
        created.push(sede.into_full(row.try_get(0)?));
    }
    tx.commit().await?;
    Ok(created)
}

/// Read every sede row.
pub async fn list(pool: &StorePool) -> StoreResult<Vec<Sede>> {
    let conn = pool.get().await?;
    let rows = conn.query(SELECT_ALL, &[]).await?;
    rows.iter().map(from_row).collect()
}
