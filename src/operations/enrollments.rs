use store_object::{QueryBuilder, QueryFilter, RecordId, SortOrder, StoreError, StoreObject};

use crate::core::Registrar;
use crate::models::Enrollment;

impl Registrar {
    /// Enroll a student in a course inside a transaction
    ///
    /// The insert is committed only when it succeeds. Any failure rolls the
    /// transaction back and is returned unchanged, so a failed enrollment
    /// leaves no row behind.
    pub async fn enroll_student_in_course(
        &self,
        student_id: RecordId,
        course_id: RecordId,
        grade: &str,
    ) -> Result<Enrollment, StoreError> {
        let mut tx = self.enrollments().begin_transaction().await?;

        let created = tx.create(Enrollment::new(student_id, course_id, grade)).await;

        match created {
            Ok(enrollment) => {
                tx.commit().await?;
                debug_log!(id = enrollment.id, student_id, course_id, "enrolled student");
                Ok(enrollment)
            }
            Err(e) => {
                tracing::warn!(student_id, course_id, error = %e, "Enrollment failed, rolling back");
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Enrollment rollback failed");
                }
                Err(e)
            }
        }
    }

    pub async fn list_enrollments_by_student(
        &self,
        student_id: RecordId,
    ) -> Result<Vec<Enrollment>, StoreError> {
        let query = QueryBuilder::new()
            .filter(QueryFilter::eq("student_id", student_id))
            .order_by("id", SortOrder::Asc);

        self.enrollments().find(query).await
    }
}
