//! Schema migrations
//!
//! Tables are defined by the versioned SQL files under `migrations/`, embedded
//! at compile time. The same migrator backs `#[sqlx::test]` databases.

use crate::core::Registrar;
use crate::errors::RegistrarError;

pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

impl Registrar {
    /// Apply every pending migration
    pub async fn migrate(&self) -> Result<(), RegistrarError> {
        tracing::info!(migrations = MIGRATOR.iter().count(), "Running database migrations");
        MIGRATOR.run(self.pool()).await?;
        tracing::info!("Database migrations complete");
        Ok(())
    }
}
