//! # Registrar
//!
//! PostgreSQL data access for a university registrar: departments,
//! instructors, courses, students and their enrollments.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use registrar::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::new(
//!         "localhost".to_string(), 5432, "registrar".to_string(),
//!         "postgres".to_string(), "password".to_string(),
//!         1, 5, 30, 600, 3600,
//!     );
//!
//!     let registrar = Registrar::connect(&config).await?;
//!     registrar.migrate().await?;
//!
//!     let science = registrar.create_department("Science").await?;
//!     let alice = registrar
//!         .create_student("Alice", "alice@example.com", science.id)
//!         .await?;
//!
//!     registrar.soft_delete_student(alice.id).await?;
//!     assert!(registrar.list_active_students().await?.is_empty());
//!     assert_eq!(registrar.count_students_in_department(science.id).await?, 1);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod core;
pub mod errors;
pub mod migration;
pub mod models;
pub mod operations;
pub mod prelude;

// Re-export the main public types for convenience
pub use crate::core::Registrar;
pub use crate::errors::RegistrarError;
pub use crate::migration::MIGRATOR;

// Re-export centralized config
pub use config::{AppConfig, ConfigError, DatabaseConfig};

pub use store_object;
pub use store_object::{RecordId, StoreError};

// Re-export external dependencies used in public API
pub use sqlx;
pub use async_trait;
