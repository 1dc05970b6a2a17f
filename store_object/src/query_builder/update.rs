use super::value::QueryValue;

/// Ordered column assignments for `update_where`. Setting the same column
/// twice keeps the last value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateSet {
    pub assignments: Vec<(String, QueryValue)>,
}

impl UpdateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        let field = field.into();
        self.assignments.retain(|(existing, _)| *existing != field);
        self.assignments.push((field, value.into()));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.assignments.len()
    }
}
