//! SELECT lists and JOINs for projections

/// One entry of a SELECT list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectField {
    /// `field [AS alias]`
    Column { field: String, alias: Option<String> },
    /// `COUNT(field) [AS alias]`, NULLs are not counted
    Count { field: String, alias: Option<String> },
}

impl SelectField {
    pub fn field_as(field: impl Into<String>, alias: impl Into<String>) -> Self {
        SelectField::Column {
            field: field.into(),
            alias: Some(alias.into()),
        }
    }

    pub fn count(field: impl Into<String>) -> Self {
        SelectField::Count {
            field: field.into(),
            alias: None,
        }
    }

    pub fn with_alias(self, alias: impl Into<String>) -> Self {
        match self {
            SelectField::Column { field, .. } => SelectField::Column {
                field,
                alias: Some(alias.into()),
            },
            SelectField::Count { field, .. } => SelectField::Count {
                field,
                alias: Some(alias.into()),
            },
        }
    }

    pub fn to_sql(&self) -> String {
        let (expression, alias) = match self {
            SelectField::Column { field, alias } => (field.clone(), alias),
            SelectField::Count { field, alias } => (format!("COUNT({})", field), alias),
        };
        match alias {
            Some(alias) => format!("{} AS {}", expression, alias),
            None => expression,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinType {
    Inner,
    /// Keeps base rows without a match, filling the joined columns with NULL
    Left,
}

impl JoinType {
    pub fn to_sql(&self) -> &'static str {
        match self {
            JoinType::Inner => "INNER JOIN",
            JoinType::Left => "LEFT JOIN",
        }
    }
}

/// `<type> JOIN table [AS alias] ON left_field = right_field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinClause {
    pub join_type: JoinType,
    pub table: String,
    pub alias: Option<String>,
    pub left_field: String,
    pub right_field: String,
}

impl JoinClause {
    pub fn new_on(
        join_type: JoinType,
        table: impl Into<String>,
        left_field: impl Into<String>,
        right_field: impl Into<String>,
    ) -> Self {
        Self {
            join_type,
            table: table.into(),
            alias: None,
            left_field: left_field.into(),
            right_field: right_field.into(),
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn to_sql(&self) -> String {
        let table = match &self.alias {
            Some(alias) => format!("{} AS {}", self.table, alias),
            None => self.table.clone(),
        };
        format!(
            "{} {} ON {} = {}",
            self.join_type.to_sql(),
            table,
            self.left_field,
            self.right_field
        )
    }
}
