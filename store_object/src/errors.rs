use thiserror::Error;

use crate::RecordId;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Not found: {table} with id {id}")]
    NotFound { table: &'static str, id: RecordId },

    #[error("Database error during {operation} on {table}: {source}")]
    Database {
        table: &'static str,
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Validation error on {table}.{field}: {message}")]
    Validation {
        table: &'static str,
        field: &'static str,
        message: String,
    },
}

impl StoreError {
    pub fn not_found(table: &'static str, id: RecordId) -> Self {
        Self::NotFound { table, id }
    }

    pub fn database_operation(
        table: &'static str,
        operation: &'static str,
        source: sqlx::Error,
    ) -> Self {
        Self::Database {
            table,
            operation,
            source,
        }
    }

    pub fn validation(table: &'static str, field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            table,
            field,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the store rejected the statement because of a foreign key constraint
    pub fn is_foreign_key_violation(&self) -> bool {
        match self {
            Self::Database {
                source: sqlx::Error::Database(db_err),
                ..
            } => db_err.is_foreign_key_violation(),
            _ => false,
        }
    }
}
