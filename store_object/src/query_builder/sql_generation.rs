//! SQL text generation
//!
//! Builders that emit placeholders take the shared `values` vector and number
//! their placeholders after the values already in it, so the SET and WHERE
//! parameters of one statement never collide. Nulls are written inline and
//! never bound.

use crate::query_builder::filter::QueryFilter;
use crate::query_builder::ordering::SortOrder;
use crate::query_builder::select::{JoinClause, SelectField};
use crate::query_builder::update::UpdateSet;
use crate::query_builder::value::QueryValue;

pub struct SqlGenerator;

impl SqlGenerator {
    /// `INSERT INTO table (a, b) VALUES ($1, $2) RETURNING *`
    pub fn insert_sql(table: &str, fields: &[&str]) -> String {
        let placeholders = (1..=fields.len())
            .map(|i| format!("${}", i))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING *",
            table,
            fields.join(", "),
            placeholders
        )
    }

    /// `UPDATE table SET a = $1, b = $2 WHERE pk = $3 RETURNING *`
    pub fn update_by_id_sql(table: &str, fields: &[&str], primary_key: &str) -> String {
        let assignments = fields
            .iter()
            .enumerate()
            .map(|(i, field)| format!("{} = ${}", field, i + 1))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            "UPDATE {} SET {} WHERE {} = ${} RETURNING *",
            table,
            assignments,
            primary_key,
            fields.len() + 1
        )
    }

    /// Build WHERE clause from conditions (AND-combined)
    pub fn build_where_clause(conditions: &[QueryFilter], values: &mut Vec<QueryValue>) -> String {
        if conditions.is_empty() {
            return String::new();
        }

        let conditions_sql = conditions
            .iter()
            .map(|condition| Self::build_condition_sql(condition, values))
            .collect::<Vec<_>>()
            .join(" AND ");
        format!("WHERE {}", conditions_sql)
    }

    fn build_condition_sql(filter: &QueryFilter, values: &mut Vec<QueryValue>) -> String {
        match filter {
            QueryFilter::IsNull { field } => format!("{} IS NULL", field),
            QueryFilter::Eq { field, value } if value.is_null() => format!("{} IS NULL", field),
            QueryFilter::Eq { field, value } => {
                values.push(value.clone());
                format!("{} = ${}", field, values.len())
            }
        }
    }

    /// Build the assignment list of an UPDATE (without the SET keyword)
    pub fn build_set_clause(set: &UpdateSet, values: &mut Vec<QueryValue>) -> String {
        set.assignments
            .iter()
            .map(|(field, value)| {
                if value.is_null() {
                    format!("{} = NULL", field)
                } else {
                    values.push(value.clone());
                    format!("{} = ${}", field, values.len())
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Build ORDER BY clause
    pub fn build_order_clause(order_by: &[(String, SortOrder)]) -> String {
        if order_by.is_empty() {
            return String::new();
        }

        let order_items: Vec<String> = order_by
            .iter()
            .map(|(field, order)| format!("{} {}", field, order.to_sql()))
            .collect();

        format!("ORDER BY {}", order_items.join(", "))
    }

    pub fn build_limit_clause(limit: Option<i64>) -> String {
        limit.map(|limit| format!("LIMIT {}", limit)).unwrap_or_default()
    }

    /// Build the SELECT list; empty means `*`
    pub fn build_select_clause(fields: &[SelectField]) -> String {
        if fields.is_empty() {
            return "*".to_string();
        }

        fields
            .iter()
            .map(SelectField::to_sql)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn build_join_clause(joins: &[JoinClause]) -> String {
        joins
            .iter()
            .map(JoinClause::to_sql)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn build_group_by_clause(fields: &[String]) -> String {
        if fields.is_empty() {
            String::new()
        } else {
            format!("GROUP BY {}", fields.join(", "))
        }
    }

    /// Join non-empty SQL fragments with single spaces
    pub fn assemble(parts: &[&str]) -> String {
        parts
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
    }
}
