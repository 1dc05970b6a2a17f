use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::{PgQueryAs, RecordId, TableMetadata};

use super::UNSAVED_ID;

/// Join row linking a student to a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Enrollment {
    pub id: RecordId,
    pub student_id: RecordId,
    pub course_id: RecordId,
    pub grade: String,
}

impl Enrollment {
    pub fn new(student_id: RecordId, course_id: RecordId, grade: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            student_id,
            course_id,
            grade: grade.into(),
        }
    }
}

impl TableMetadata for Enrollment {
    fn table_name() -> &'static str {
        "enrollments"
    }

    fn extract_id(&self) -> RecordId {
        self.id
    }

    fn create_fields() -> &'static [&'static str] {
        &["student_id", "course_id", "grade"]
    }

    fn update_fields() -> &'static [&'static str] {
        &["grade"]
    }

    fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.student_id)
            .bind(self.course_id)
            .bind(&self.grade)
    }

    fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.grade)
    }
}
