//! Generic store implementations
//!
//! This module provides generic database store functionality.

use super::core::{bind_params, bind_params_raw, GenericStore};
use crate::errors::StoreError;
use crate::query_builder::{QueryBuilder, UpdateSet};
use crate::traits::TableMetadata;
use crate::traits::StoreObject;
use crate::RecordId;
use async_trait::async_trait;
use sqlx::Row;

#[async_trait]
impl<T> StoreObject for GenericStore<T>
where
    T: TableMetadata,
{
    type Model = T;
    type Id = RecordId;

    async fn create(&self, data: Self::Model) -> Result<Self::Model, StoreError> {
        let sql = T::create_sql();
        debug_log!(table = T::table_name(), %sql, "create");

        data.bind_create_params(sqlx::query_as::<_, T>(&sql))
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "create", e))
    }

    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Model>, StoreError> {
        sqlx::query_as::<_, T>(&T::get_by_id_sql())
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "get_by_id", e))
    }

    async fn list_all(&self) -> Result<Vec<Self::Model>, StoreError> {
        sqlx::query_as::<_, T>(&T::list_all_sql())
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "list_all", e))
    }

    async fn update(&self, id: Self::Id, data: Self::Model) -> Result<Self::Model, StoreError> {
        let sql = T::update_sql();
        debug_log!(table = T::table_name(), id, %sql, "update");

        data.bind_update_params(sqlx::query_as::<_, T>(&sql))
            .bind(id)
            .fetch_optional(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "update", e))?
            .ok_or_else(|| StoreError::not_found(T::table_name(), id))
    }

    async fn delete(&self, id: Self::Id) -> Result<bool, StoreError> {
        let result = sqlx::query(&T::delete_by_id_sql())
            .bind(id)
            .execute(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "delete", e))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let row = sqlx::query(&T::count_all_sql())
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "count", e))?;

        Ok(row.get("total"))
    }

    async fn find(&self, query: QueryBuilder) -> Result<Vec<Self::Model>, StoreError> {
        let (sql, params) = query.build_select(T::table_name());
        debug_log!(table = T::table_name(), %sql, params = params.len(), "find");

        bind_params(sqlx::query_as::<_, T>(&sql), params)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "find", e))
    }

    async fn find_one(&self, query: QueryBuilder) -> Result<Option<Self::Model>, StoreError> {
        let mut results = self.find(query.limit(1)).await?;
        Ok(results.pop())
    }

    async fn update_where(
        &self,
        query: QueryBuilder,
        set: UpdateSet,
    ) -> Result<Vec<Self::Model>, StoreError> {
        if set.is_empty() {
            return Err(StoreError::validation(
                T::table_name(),
                "update_where",
                "UpdateSet has no assignments",
            ));
        }

        let (sql, params) = query.build_update(T::table_name(), &set);
        debug_log!(table = T::table_name(), %sql, params = params.len(), "update_where");

        bind_params(sqlx::query_as::<_, T>(&sql), params)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "update_where", e))
    }

    async fn count_where(&self, query: QueryBuilder) -> Result<i64, StoreError> {
        let (sql, params) = query.build_count(T::table_name());
        debug_log!(table = T::table_name(), %sql, "count_where");

        let row = bind_params_raw(sqlx::query(&sql), params)
            .fetch_one(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "count_where", e))?;

        Ok(row.get("total"))
    }
}
