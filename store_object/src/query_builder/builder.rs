//! Fluent query builder

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::select::{JoinClause, SelectField};
use crate::query_builder::sql_generation::SqlGenerator;
use crate::query_builder::update::UpdateSet;
use crate::query_builder::value::QueryValue;

/// Query builder for constructing database queries against one base table
#[derive(Debug, Clone, Default)]
pub struct QueryBuilder {
    pub(crate) select: Vec<SelectField>,
    pub(crate) alias: Option<String>,
    pub(crate) joins: Vec<JoinClause>,
    pub(crate) conditions: Vec<QueryFilter>,
    pub(crate) group_by: Vec<String>,
    pub(crate) order_by: Vec<(String, SortOrder)>,
    pub(crate) limit: Option<i64>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the SELECT list (default is `*`)
    pub fn select_fields(mut self, fields: Vec<SelectField>) -> Self {
        self.select = fields;
        self
    }

    /// Alias for the base table: `FROM table AS alias`
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn join(mut self, join: JoinClause) -> Self {
        self.joins.push(join);
        self
    }

    /// Add a filter condition; conditions are combined with AND
    pub fn filter(mut self, filter: QueryFilter) -> Self {
        self.conditions.push(filter);
        self
    }

    pub fn group_by(mut self, fields: &[&str]) -> Self {
        self.group_by = fields.iter().map(|field| field.to_string()).collect();
        self
    }

    pub fn order_by(mut self, field: &str, order: SortOrder) -> Self {
        self.order_by.push((field.to_string(), order));
        self
    }

    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build WHERE clause
    pub fn build_where_clause(&self) -> (String, Vec<QueryValue>) {
        let mut values = Vec::new();
        let where_clause = SqlGenerator::build_where_clause(&self.conditions, &mut values);
        (where_clause, values)
    }

    fn from_clause(&self, table: &str) -> String {
        match &self.alias {
            Some(alias) => format!("FROM {} AS {}", table, alias),
            None => format!("FROM {}", table),
        }
    }

    /// Complete SELECT statement against `table`
    pub fn build_select(&self, table: &str) -> (String, Vec<QueryValue>) {
        let mut values = Vec::new();
        let select = format!("SELECT {}", SqlGenerator::build_select_clause(&self.select));
        let from = self.from_clause(table);
        let joins = SqlGenerator::build_join_clause(&self.joins);
        let where_clause = SqlGenerator::build_where_clause(&self.conditions, &mut values);
        let group_by = SqlGenerator::build_group_by_clause(&self.group_by);
        let order = SqlGenerator::build_order_clause(&self.order_by);
        let limit = SqlGenerator::build_limit_clause(self.limit);

        let sql = SqlGenerator::assemble(&[
            select.as_str(),
            from.as_str(),
            joins.as_str(),
            where_clause.as_str(),
            group_by.as_str(),
            order.as_str(),
            limit.as_str(),
        ]);
        (sql, values)
    }

    /// `SELECT COUNT(*) AS total` over the same FROM/JOIN/WHERE; select list,
    /// grouping, ordering and limit are ignored
    pub fn build_count(&self, table: &str) -> (String, Vec<QueryValue>) {
        let mut values = Vec::new();
        let from = self.from_clause(table);
        let joins = SqlGenerator::build_join_clause(&self.joins);
        let where_clause = SqlGenerator::build_where_clause(&self.conditions, &mut values);

        let sql = SqlGenerator::assemble(&[
            "SELECT COUNT(*) AS total",
            from.as_str(),
            joins.as_str(),
            where_clause.as_str(),
        ]);
        (sql, values)
    }

    /// `UPDATE table SET ... WHERE ... RETURNING *`; SET placeholders come first
    pub fn build_update(&self, table: &str, set: &UpdateSet) -> (String, Vec<QueryValue>) {
        let mut values = Vec::new();
        let assignments = SqlGenerator::build_set_clause(set, &mut values);
        let where_clause = SqlGenerator::build_where_clause(&self.conditions, &mut values);

        let head = format!("UPDATE {} SET {}", table, assignments);
        let sql = SqlGenerator::assemble(&[head.as_str(), where_clause.as_str(), "RETURNING *"]);
        (sql, values)
    }
}
