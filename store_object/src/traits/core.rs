//! Trait definitions
//!
//! This module defines core traits for database operations.

use crate::query_builder::{QueryBuilder, UpdateSet};
use crate::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait that defines common database operations for all entities
#[async_trait]
pub trait StoreObject: Clone + Send + Sync + Debug {
    /// The model type that this object represents
    type Model: Clone + Send + Sync + Debug + Serialize + for<'de> Deserialize<'de>;

    /// The ID type used for this object
    type Id: Copy + Send + Sync + Debug;

    /// Insert a new row; the store assigns the id
    async fn create(&self, data: Self::Model) -> Result<Self::Model, StoreError>;

    /// Get an object by its ID
    async fn get_by_id(&self, id: Self::Id) -> Result<Option<Self::Model>, StoreError>;

    /// List all objects of this type, ordered by primary key
    async fn list_all(&self) -> Result<Vec<Self::Model>, StoreError>;

    /// Overwrite the updatable columns of the row with this ID.
    /// Fails with `NotFound` when no row matched.
    async fn update(&self, id: Self::Id, data: Self::Model) -> Result<Self::Model, StoreError>;

    /// Hard delete by ID; `false` when no row matched
    async fn delete(&self, id: Self::Id) -> Result<bool, StoreError>;

    /// Count total objects of this type
    async fn count(&self) -> Result<i64, StoreError>;

    /// Find records matching query conditions
    async fn find(&self, query: QueryBuilder) -> Result<Vec<Self::Model>, StoreError>;

    /// Find first record matching query conditions
    async fn find_one(&self, query: QueryBuilder) -> Result<Option<Self::Model>, StoreError>;

    /// Apply `set` to every record matching the query and return the updated rows
    async fn update_where(
        &self,
        query: QueryBuilder,
        set: UpdateSet,
    ) -> Result<Vec<Self::Model>, StoreError>;

    /// Count records matching query conditions
    async fn count_where(&self, query: QueryBuilder) -> Result<i64, StoreError>;
}
