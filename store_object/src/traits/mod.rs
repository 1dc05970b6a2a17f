//! Traits for database operations
//!
//! This module contains all the traits that define the interface for database operations
//! in the store-object layer.

pub mod core;
pub mod soft_deletable;
pub mod table_metadata;

pub use self::core::StoreObject;
pub use soft_deletable::SoftDeletable;
pub use table_metadata::{PgQueryAs, TableMetadata};
