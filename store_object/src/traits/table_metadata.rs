//! Table metadata
//!
//! Describes how an entity maps onto its table. Implemented by hand for each
//! model; the table itself is created by versioned migrations, not from this
//! trait.

use crate::query_builder::SqlGenerator;
use crate::RecordId;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::{PgArguments, PgRow};
use sqlx::Postgres;
use std::fmt::Debug;

/// `query_as` over Postgres decoding into `T`
pub type PgQueryAs<'q, T> = sqlx::query::QueryAs<'q, Postgres, T, PgArguments>;

/// Metadata about a table and how a model binds to its statements
///
/// ```ignore
/// impl TableMetadata for Department {
///     fn table_name() -> &'static str { "departments" }
///     fn extract_id(&self) -> RecordId { self.id }
///     fn create_fields() -> &'static [&'static str] { &["name"] }
///     fn update_fields() -> &'static [&'static str] { &["name"] }
///     fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
///         query.bind(&self.name)
///     }
///     fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
///         query.bind(&self.name)
///     }
/// }
/// ```
pub trait TableMetadata:
    Clone
    + Send
    + Sync
    + Debug
    + Unpin
    + Serialize
    + DeserializeOwned
    + for<'r> sqlx::FromRow<'r, PgRow>
{
    /// The table name in the database
    fn table_name() -> &'static str;

    /// The primary key column
    fn primary_key_field() -> &'static str {
        "id"
    }

    /// Extract ID from model instance
    fn extract_id(&self) -> RecordId;

    /// Columns written by INSERT, in bind order
    fn create_fields() -> &'static [&'static str];

    /// Columns written by UPDATE, in bind order
    fn update_fields() -> &'static [&'static str];

    /// Nullable timestamp column marking a row as soft deleted
    fn soft_delete_field() -> Option<&'static str> {
        None
    }

    fn supports_soft_delete() -> bool {
        Self::soft_delete_field().is_some()
    }

    /// Bind the `create_fields` values, in order
    fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    /// Bind the `update_fields` values, in order
    fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self>;

    fn create_sql() -> String {
        SqlGenerator::insert_sql(Self::table_name(), Self::create_fields())
    }

    /// Update by id; the id is the last placeholder
    fn update_sql() -> String {
        SqlGenerator::update_by_id_sql(
            Self::table_name(),
            Self::update_fields(),
            Self::primary_key_field(),
        )
    }

    fn get_by_id_sql() -> String {
        format!(
            "SELECT * FROM {} WHERE {} = $1",
            Self::table_name(),
            Self::primary_key_field()
        )
    }

    fn delete_by_id_sql() -> String {
        format!(
            "DELETE FROM {} WHERE {} = $1",
            Self::table_name(),
            Self::primary_key_field()
        )
    }

    fn list_all_sql() -> String {
        format!(
            "SELECT * FROM {} ORDER BY {} ASC",
            Self::table_name(),
            Self::primary_key_field()
        )
    }

    fn count_all_sql() -> String {
        format!("SELECT COUNT(*) AS total FROM {}", Self::table_name())
    }
}
