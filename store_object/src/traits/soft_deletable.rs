//! Soft deletion
//!
//! A soft-deletable table carries a nullable timestamp column. A row whose
//! marker is set is excluded from the "active" queries but stays in the table.

use super::core::StoreObject;
use crate::StoreError;
use async_trait::async_trait;

/// Trait for objects whose table declares a soft delete column
#[async_trait]
pub trait SoftDeletable: StoreObject {
    /// Set the marker to the current time. Only the marker column is written.
    /// Returns `false` when no row matched.
    async fn soft_delete(&self, id: Self::Id) -> Result<bool, StoreError>;

    /// Clear the marker. Returns `false` when no row matched.
    async fn restore(&self, id: Self::Id) -> Result<bool, StoreError>;

    /// List rows whose marker is not set
    async fn list_active(&self) -> Result<Vec<Self::Model>, StoreError>;

    /// Count rows whose marker is not set
    async fn count_active(&self) -> Result<i64, StoreError>;
}
