//! Core Registrar functionality
//!
//! The `Registrar` owns the connection pool and one typed store per entity.
//! Entity operations live in `crate::operations`.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;
use store_object::GenericStore;

use crate::errors::RegistrarError;
use crate::models::{Course, Department, Enrollment, Instructor, Student};
use config::DatabaseConfig;

/// Data access layer for the registrar schema
#[derive(Debug, Clone)]
pub struct Registrar {
    pool: PgPool,
    students: GenericStore<Student>,
    courses: GenericStore<Course>,
    departments: GenericStore<Department>,
    instructors: GenericStore<Instructor>,
    enrollments: GenericStore<Enrollment>,
}

impl Registrar {
    /// Open a pool described by `config`
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, RegistrarError> {
        let mut pool_options = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout_seconds))
            .idle_timeout(Duration::from_secs(config.idle_timeout_seconds));

        if config.max_lifetime_seconds > 0 {
            pool_options =
                pool_options.max_lifetime(Duration::from_secs(config.max_lifetime_seconds));
        }

        let pool = pool_options.connect(&config.connection_string()).await?;
        tracing::info!(
            host = %config.host,
            database = %config.database,
            max_connections = config.max_connections,
            "Connected to database"
        );

        Ok(Self::from_pool(pool))
    }

    /// Wrap an existing pool
    pub fn from_pool(pool: PgPool) -> Self {
        Self {
            students: GenericStore::new(pool.clone()),
            courses: GenericStore::new(pool.clone()),
            departments: GenericStore::new(pool.clone()),
            instructors: GenericStore::new(pool.clone()),
            enrollments: GenericStore::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn students(&self) -> &GenericStore<Student> {
        &self.students
    }

    pub fn courses(&self) -> &GenericStore<Course> {
        &self.courses
    }

    pub fn departments(&self) -> &GenericStore<Department> {
        &self.departments
    }

    pub fn instructors(&self) -> &GenericStore<Instructor> {
        &self.instructors
    }

    pub fn enrollments(&self) -> &GenericStore<Enrollment> {
        &self.enrollments
    }

    /// Check database connection health
    pub async fn health_check(&self) -> Result<(), RegistrarError> {
        sqlx::query("SELECT 1").fetch_one(&self.pool).await?;
        Ok(())
    }

    /// Close every pooled connection
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database pool closed");
    }
}
