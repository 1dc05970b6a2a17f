use chrono::Utc;
use store_object::{
    QueryBuilder, QueryFilter, RecordId, SoftDeletable, SortOrder, StoreError, StoreObject,
    UpdateSet,
};

use crate::core::Registrar;
use crate::models::Student;

fn department_filter(department_id: RecordId) -> QueryFilter {
    QueryFilter::eq("department_id", department_id)
}

impl Registrar {
    /// Insert a student with `created_at` and `updated_at` set to now
    pub async fn create_student(
        &self,
        name: &str,
        email: &str,
        department_id: RecordId,
    ) -> Result<Student, StoreError> {
        let student = Student::new(name, email, department_id, Utc::now());
        let created = self.students().create(student).await?;
        debug_log!(id = created.id, department_id, "created student");
        Ok(created)
    }

    /// Direct lookup; soft deleted students are still returned
    pub async fn get_student_by_id(&self, id: RecordId) -> Result<Option<Student>, StoreError> {
        self.students().get_by_id(id).await
    }

    pub async fn list_students(&self) -> Result<Vec<Student>, StoreError> {
        self.students().list_all().await
    }

    /// Students of a department, soft deleted ones included
    pub async fn list_students_by_department(
        &self,
        department_id: RecordId,
    ) -> Result<Vec<Student>, StoreError> {
        let query = QueryBuilder::new()
            .filter(department_filter(department_id))
            .order_by("id", SortOrder::Asc);

        self.students().find(query).await
    }

    /// Number of students in a department, soft deleted ones included
    pub async fn count_students_in_department(
        &self,
        department_id: RecordId,
    ) -> Result<i64, StoreError> {
        self.students()
            .count_where(QueryBuilder::new().filter(department_filter(department_id)))
            .await
    }

    /// Rename every student currently called `current_name`; returns how
    /// many rows changed
    pub async fn rename_students(
        &self,
        current_name: &str,
        new_name: &str,
    ) -> Result<u64, StoreError> {
        let set = UpdateSet::new()
            .set("name", new_name)
            .set("updated_at", Utc::now());
        let query = QueryBuilder::new().filter(QueryFilter::eq("name", current_name));

        let updated = self.students().update_where(query, set).await?;
        Ok(updated.len() as u64)
    }

    /// Mark a student as deleted without removing the row
    ///
    /// Only `deleted_at` is written. Returns `false` when no student has
    /// this id.
    pub async fn soft_delete_student(&self, id: RecordId) -> Result<bool, StoreError> {
        let marked = self.students().soft_delete(id).await?;
        debug_log!(id, marked, "soft deleted student");
        Ok(marked)
    }

    /// Clear the soft delete marker
    pub async fn restore_student(&self, id: RecordId) -> Result<bool, StoreError> {
        self.students().restore(id).await
    }

    pub async fn list_active_students(&self) -> Result<Vec<Student>, StoreError> {
        self.students().list_active().await
    }

    pub async fn count_active_students(&self) -> Result<i64, StoreError> {
        self.students().count_active().await
    }

    /// Remove the row; `false` when no student has this id
    pub async fn delete_student(&self, id: RecordId) -> Result<bool, StoreError> {
        self.students().delete(id).await
    }
}
