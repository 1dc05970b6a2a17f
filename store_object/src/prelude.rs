//! Convenience re-exports for common store-object usage

pub use crate::traits::{PgQueryAs, SoftDeletable, StoreObject, TableMetadata};

pub use crate::errors::StoreError;

pub use crate::generic_store::{GenericStore, GenericStoreTransaction};

pub use crate::query_builder::{
    JoinClause, JoinType, QueryBuilder, QueryFilter, QueryValue, SelectField, SortOrder, UpdateSet,
};

pub use crate::{DbPool, RecordId};

pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::{FromRow, PgPool, Row};
