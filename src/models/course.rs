use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::{PgQueryAs, RecordId, TableMetadata};

use super::UNSAVED_ID;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Course {
    pub id: RecordId,
    pub name: String,
    pub department_id: RecordId,
    pub instructor_id: RecordId,
}

impl Course {
    pub fn new(name: impl Into<String>, department_id: RecordId, instructor_id: RecordId) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            department_id,
            instructor_id,
        }
    }
}

impl TableMetadata for Course {
    fn table_name() -> &'static str {
        "courses"
    }

    fn extract_id(&self) -> RecordId {
        self.id
    }

    fn create_fields() -> &'static [&'static str] {
        &["name", "department_id", "instructor_id"]
    }

    fn update_fields() -> &'static [&'static str] {
        &["name", "department_id", "instructor_id"]
    }

    fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(self.department_id)
            .bind(self.instructor_id)
    }

    fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        self.bind_create_params(query)
    }
}

/// One row of the per-course enrollment report. Courses without enrollments
/// report `enrolled == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CourseEnrollmentCount {
    pub course_id: RecordId,
    pub course_name: String,
    pub enrolled: i64,
}
