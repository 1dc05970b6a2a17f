//! WHERE conditions

use super::value::QueryValue;

/// One WHERE condition; a builder's conditions are joined with AND
#[derive(Debug, Clone, PartialEq)]
pub enum QueryFilter {
    /// `field = $N`, or `field IS NULL` for a null value
    Eq { field: String, value: QueryValue },
    /// `field IS NULL`
    IsNull { field: String },
}

impl QueryFilter {
    pub fn eq(field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        Self::Eq {
            field: field.into(),
            value: value.into(),
        }
    }

    pub fn is_null(field: impl Into<String>) -> Self {
        Self::IsNull {
            field: field.into(),
        }
    }
}
