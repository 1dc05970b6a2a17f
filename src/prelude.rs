//! Convenience re-exports for common registrar usage
//!
//! ```rust
//! use registrar::prelude::*;
//! ```

pub use crate::core::Registrar;
pub use crate::errors::RegistrarError;
pub use crate::migration::MIGRATOR;
pub use crate::models::{
    Course, CourseEnrollmentCount, Department, Enrollment, Instructor, Student,
};

pub use config::{AppConfig, ConfigError, DatabaseConfig};

// Store traits are needed to call the per-entity stores directly
pub use store_object::prelude::*;

pub use anyhow;
pub use tokio;
