//! # Connection Pool
//!
//! The pool is the only store collaborator handlers see. Each request
//! takes one connection and the guard returns it on drop, success or
//! failure.

use deadpool_postgres::{
    Config, ManagerConfig, Object, PoolConfig, RecyclingMethod, Runtime,
};
use tokio_postgres::NoTls;

use crate::config::StoreConfig;

use super::errors::{StoreError, StoreResult};

/// Shared handle to the backing store.
#[derive(Clone)]
pub struct StorePool {
    pool: deadpool_postgres::Pool,
}

impl StorePool {
    /// Build a pool from configuration.
    ///
    /// Connections are opened lazily on first use, so this succeeds
    /// even while the store is unreachable.
    pub fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let mut cfg = Config::new();
        cfg.host = Some(config.host.clone());
        cfg.port = Some(config.port);
        cfg.user = Some(config.user.clone());
        cfg.password = Some(config.password.clone());
        cfg.dbname = Some(config.dbname.clone());
        cfg.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        cfg.pool = Some(PoolConfig::new(config.pool_size));

        let pool = cfg
            .create_pool(Some(Runtime::Tokio1), NoTls)
            .map_err(|e| StoreError::Pool(e.to_string()))?;
        Ok(Self { pool })
    }

    /// Take one connection; returned to the pool when the guard drops.
    pub async fn get(&self) -> StoreResult<Object> {
        self.pool
            .get()
            .await
            .map_err(|e| StoreError::Pool(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_builds_without_reaching_the_store() {
        // Lazy connections: building the pool must not require a live server.
        let config = StoreConfig::default();
        assert!(StorePool::connect(&config).is_ok());
    }
}
