//! Projections
//!
//! Queries whose rows are not the store's model: custom select lists, joins
//! and aggregates rooted at the store's table.

use super::core::{bind_params, GenericStore};
use crate::errors::StoreError;
use crate::query_builder::QueryBuilder;
use crate::traits::TableMetadata;
use sqlx::postgres::PgRow;

impl<T: TableMetadata> GenericStore<T> {
    /// Run `query` against this store's table and decode each row as `R`
    ///
    /// ```ignore
    /// let counts: Vec<CourseEnrollmentCount> = course_store
    ///     .project(
    ///         QueryBuilder::new()
    ///             .alias("c")
    ///             .select_fields(vec![
    ///                 SelectField::field_as("c.id", "course_id"),
    ///                 SelectField::count("e.student_id").with_alias("enrolled"),
    ///             ])
    ///             .join(JoinClause::new_on(JoinType::Left, "enrollments", "c.id", "e.course_id").with_alias("e"))
    ///             .group_by(&["c.id"]),
    ///     )
    ///     .await?;
    /// ```
    pub async fn project<R>(&self, query: QueryBuilder) -> Result<Vec<R>, StoreError>
    where
        R: for<'r> sqlx::FromRow<'r, PgRow> + Send + Unpin,
    {
        let (sql, params) = query.build_select(T::table_name());
        debug_log!(table = T::table_name(), %sql, params = params.len(), "project");

        bind_params(sqlx::query_as::<_, R>(&sql), params)
            .fetch_all(&self.db_pool)
            .await
            .map_err(|e| StoreError::database_operation(T::table_name(), "project", e))
    }
}
