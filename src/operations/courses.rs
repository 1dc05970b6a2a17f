use store_object::{
    JoinClause, JoinType, QueryBuilder, QueryFilter, RecordId, SelectField, SortOrder,
    StoreError, StoreObject, TableMetadata,
};

use crate::core::Registrar;
use crate::models::{Course, CourseEnrollmentCount};

/// Per-course enrollment counts, rooted at `courses`
///
/// The LEFT JOIN keeps courses without enrollments; counting
/// `e.student_id` ignores the NULLs it produces, so those courses report 0.
pub fn enrolled_counts_query() -> QueryBuilder {
    QueryBuilder::new()
        .alias("c")
        .select_fields(vec![
            SelectField::field_as("c.id", "course_id"),
            SelectField::field_as("c.name", "course_name"),
            SelectField::count("e.student_id").with_alias("enrolled"),
        ])
        .join(JoinClause::new_on(JoinType::Left, "enrollments", "c.id", "e.course_id").with_alias("e"))
        .group_by(&["c.id", "c.name"])
        .order_by("c.id", SortOrder::Asc)
}

impl Registrar {
    pub async fn create_course(
        &self,
        name: &str,
        department_id: RecordId,
        instructor_id: RecordId,
    ) -> Result<Course, StoreError> {
        self.courses()
            .create(Course::new(name, department_id, instructor_id))
            .await
    }

    /// Look up a course and return its id
    ///
    /// Use `courses().get_by_id` when the full row is needed.
    pub async fn get_course_by_id(&self, id: RecordId) -> Result<RecordId, StoreError> {
        self.courses()
            .get_by_id(id)
            .await?
            .map(|course| course.id)
            .ok_or_else(|| StoreError::not_found(Course::table_name(), id))
    }

    pub async fn list_courses(&self) -> Result<Vec<Course>, StoreError> {
        self.courses().list_all().await
    }

    pub async fn list_courses_by_instructor(
        &self,
        instructor_id: RecordId,
    ) -> Result<Vec<Course>, StoreError> {
        let query = QueryBuilder::new()
            .filter(QueryFilter::eq("instructor_id", instructor_id))
            .order_by("id", SortOrder::Asc);

        self.courses().find(query).await
    }

    pub async fn enrolled_counts_per_course(
        &self,
    ) -> Result<Vec<CourseEnrollmentCount>, StoreError> {
        self.courses().project(enrolled_counts_query()).await
    }
}
