use super::core::GenericStore;
use crate::errors::StoreError;
use crate::query_builder::{QueryBuilder, QueryFilter, QueryValue, SortOrder, UpdateSet};
use crate::traits::SoftDeletable;
use crate::traits::StoreObject;
use crate::traits::TableMetadata;
use crate::RecordId;
use async_trait::async_trait;
use chrono::Utc;

impl<T: TableMetadata> GenericStore<T> {
    fn soft_delete_column() -> Result<&'static str, StoreError> {
        T::soft_delete_field().ok_or_else(|| {
            StoreError::validation(
                T::table_name(),
                "soft_delete",
                "Entity does not support soft deletion",
            )
        })
    }

    /// Write only the marker column of one row
    async fn set_marker(&self, id: RecordId, marker: QueryValue) -> Result<bool, StoreError> {
        let column = Self::soft_delete_column()?;
        let query = QueryBuilder::new().filter(QueryFilter::eq(T::primary_key_field(), id));

        let updated = self
            .update_where(query, UpdateSet::new().set(column, marker))
            .await?;
        Ok(!updated.is_empty())
    }

    fn active_query() -> Result<QueryBuilder, StoreError> {
        let column = Self::soft_delete_column()?;
        Ok(QueryBuilder::new().filter(QueryFilter::is_null(column)))
    }
}

#[async_trait]
impl<T> SoftDeletable for GenericStore<T>
where
    T: TableMetadata,
{
    async fn soft_delete(&self, id: Self::Id) -> Result<bool, StoreError> {
        self.set_marker(id, QueryValue::Timestamp(Utc::now())).await
    }

    async fn restore(&self, id: Self::Id) -> Result<bool, StoreError> {
        self.set_marker(id, QueryValue::Null).await
    }

    async fn list_active(&self) -> Result<Vec<Self::Model>, StoreError> {
        let query = Self::active_query()?.order_by(T::primary_key_field(), SortOrder::Asc);
        self.find(query).await
    }

    async fn count_active(&self) -> Result<i64, StoreError> {
        self.count_where(Self::active_query()?).await
    }
}
