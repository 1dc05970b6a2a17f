//! Error types for the registrar crate
//!
//! Entity operations return `store_object::StoreError` directly. The variants
//! here cover connecting, migrating and configuring.

use store_object::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistrarError {
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
