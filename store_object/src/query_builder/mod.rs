//! Query builder utilities
//!
//! This module provides SQL query construction utilities.

pub mod builder;
pub mod filter;
pub mod ordering;
pub mod select;
pub mod sql_generation;
pub mod update;
pub mod value;


pub use builder::QueryBuilder;
pub use filter::QueryFilter;
pub use ordering::SortOrder;
pub use select::{JoinClause, JoinType, SelectField};
pub use sql_generation::SqlGenerator;
pub use update::UpdateSet;
pub use value::QueryValue;
