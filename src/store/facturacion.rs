//! # Facturacion Persistence

use tokio_postgres::Row;

use crate::model::{Facturacion, FacturacionCreate};

use super::errors::StoreResult;
use super::pool::StorePool;

const INSERT: &str =
    "INSERT INTO facturacion (cliente_id, empleado_id, fecha_factura, total) \
     VALUES ($1, $2, $3, $4) RETURNING factura_id";

const SELECT_ALL: &str =
    "SELECT factura_id, cliente_id, empleado_id, fecha_factura, total FROM facturacion";

/// Map one result row onto the full shape.
pub(crate) fn from_row(row: &Row) -> StoreResult<Facturacion> {
    Ok(Facturacion {
        factura_id: row.try_get("factura_id")?,
        cliente_id: row.try_get("cliente_id")?,
        empleado_id: row.try_get("empleado_id")?,
        fecha_factura: row.try_get("fecha_factura")?,
        total: row.try_get("total")?,
    })
}

/// Insert one factura and return it with its assigned identifier.
pub async fn insert(pool: &StorePool, factura: FacturacionCreate) -> StoreResult<Facturacion> {
    let conn = pool.get().await?;
    let row = conn
        .query_one(
            INSERT,
            &[
                &factura.cliente_id,
                &factura.empleado_id,
                &factura.fecha_factura,
                &factura.total,
            ],
        )
        .await?;
    Ok(factura.into_full(row.try_get(0)?))
}

/// Insert a batch inside one transaction; all rows persist or none do.
pub async fn insert_bulk(
    pool: &StorePool,
    facturas: Vec<FacturacionCreate>,
) -> StoreResult<Vec<Facturacion>> {
    let mut conn = pool.get().await?;
    let tx = conn.transaction().await?;
    let mut created = Vec::with_capacity(facturas.len());
    for factura in facturas {
        let row = tx
            .query_one(
                INSERT,
                &[
                    &factura.cliente_id,
                    &factura.empleado_id,
                    &factura.fecha_factura,
                    &factura.total,
                ],
            )
            .await?;
        created.push(factura.into_full(row.try_get(0)?));
    }
    tx.commit().await?;
    Ok(created)
}

/// Read every factura row.
pub async fn list(pool: &StorePool) -> StoreResult<Vec<Facturacion>> {
    let conn = pool.get().await?;
    let rows = conn.query(SELECT_ALL, &[]).await?;
    rows.iter().map(from_row).collect()
}
