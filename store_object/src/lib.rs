//! Store Object - generic database abstraction layer for the registrar
//!
//! This crate provides the foundational types and traits for database operations,
//! including generic stores, the query builder, soft deletion and transactions.

/// Debug logging compiled in only with the `debug-logging` feature
#[cfg(feature = "debug-logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod generic_store;
pub mod prelude;
pub mod query_builder;
pub mod traits;

pub use errors::StoreError;
pub use generic_store::{GenericStore, GenericStoreTransaction};
pub use query_builder::{
    JoinClause, JoinType, QueryBuilder, QueryFilter, QueryValue, SelectField, SortOrder, UpdateSet,
};
pub use traits::{PgQueryAs, SoftDeletable, StoreObject, TableMetadata};

use sqlx::PgPool;

pub type DbPool = PgPool;

/// Surrogate primary key type (`BIGSERIAL`)
pub type RecordId = i64;
