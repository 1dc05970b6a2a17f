//! Transaction support for GenericStore
//!
//! This module provides database transaction functionality for GenericStore,
//! allowing multiple operations to be executed atomically.

use super::GenericStore;
use crate::errors::StoreError;
use crate::traits::TableMetadata;
use sqlx::{Postgres, Transaction};
use std::marker::PhantomData;

/// A transactional context for GenericStore operations
///
/// Wraps a sqlx transaction. Dropping it without `commit` rolls back.
///
/// # Example
/// ```ignore
/// let mut tx = enrollment_store.begin_transaction().await?;
/// tx.create(enrollment).await?;
/// tx.commit().await?;
/// ```
pub struct GenericStoreTransaction<'a, T: TableMetadata> {
    tx: Transaction<'a, Postgres>,
    _phantom: PhantomData<T>,
}

impl<T: TableMetadata> GenericStore<T> {
    /// Begin a new database transaction
    pub async fn begin_transaction(&self) -> Result<GenericStoreTransaction<'static, T>, StoreError> {
        let tx = self
            .db_pool
            .begin()
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "begin_transaction", e))?;

        Ok(GenericStoreTransaction {
            tx,
            _phantom: PhantomData,
        })
    }
}

impl<'a, T: TableMetadata> GenericStoreTransaction<'a, T> {
    /// Insert a row inside the transaction
    pub async fn create(&mut self, data: T) -> Result<T, StoreError> {
        let sql = T::create_sql();

        data.bind_create_params(sqlx::query_as::<_, T>(&sql))
            .fetch_one(&mut *self.tx)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "create", e))
    }

    /// Commit the transaction
    pub async fn commit(self) -> Result<(), StoreError> {
        self.tx
            .commit()
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "commit", e))
    }

    /// Rollback the transaction
    pub async fn rollback(self) -> Result<(), StoreError> {
        self.tx
            .rollback()
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "rollback", e))
    }
}
