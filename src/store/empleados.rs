//! # Empleado Persistence

use tokio_postgres::Row;

use crate::model::{Empleado, EmpleadoCreate};

use super::errors::StoreResult;
use super::pool::StorePool;

const INSERT: &str = "INSERT INTO empleados (nombre, cargo, telefono, email, sede_id) \
     VALUES ($1, $2, $3, $4, $5) RETURNING empleado_id";

const SELECT_ALL: &str =
    "SELECT empleado_id, nombre, cargo, telefono, email, sede_id FROM empleados";

/// Map one result row onto the full shape.
pub(crate) fn from_row(row: &Row) -> StoreResult<Empleado> {
    Ok(Empleado {
        empleado_id: row.try_get("empleado_id")?,
        nombre: row.try_get("nombre")?,
        cargo: row.try_get("cargo")?,
        telefono: row.try_get("telefono")?,
        email: row.try_get("email")?,
        sede_id: row.try_get("sede_id")?,
    })
}

/// Insert one empleado and return it with its assigned identifier.
pub async fn insert(pool: &StorePool, empleado: EmpleadoCreate) -> StoreResult<Empleado> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(
            INSERT,
            &[
                &empleado.nombre,
                &empleado.cargo,
                &empleado.telefono,
                &empleado.email,
                &empleado.sede_id,
            ],
        )
        .await?;
    Ok(empleado.into_full(row.try_get(0)?))
}

/// Insert a batch inside one transaction; all rows persist or none do.
pub async fn insert_bulk(
    pool: &StorePool,
    empleados: Vec<EmpleadoCreate>,
) -> StoreResult<Vec<Empleado>> {
    let mut conn = pool.get().await?;
    let tx = conn.transaction().await?;
    let mut created = Vec::with_capacity(empleados.len());
    for empleado in empleados {
        let row = tx
            .query_one(
                INSERT,
                &[
                    &empleado.nombre,
                    &empleado.cargo,
                    &empleado.telefono,
                    &empleado.email,
                    &empleado.sede_id,
                ],
            )
            .await?;
        created.push(empleado.into_full(row.try_get(0)?));
    }
    tx.commit().await?;
    Ok(created)
}

/// Read every empleado row.
pub async fn list(pool: &StorePool) -> StoreResult<Vec<Empleado>> {
    let conn = pool.get().await?;
    let rows = conn.query(SELECT_ALL, &[]).await?;
    rows.iter().map(from_row).collect()
}
