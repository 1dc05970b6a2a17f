use chrono::Utc;
use store_object::{RecordId, StoreError, StoreObject, TableMetadata};

use crate::core::Registrar;
use crate::models::Instructor;

impl Registrar {
    pub async fn create_instructor(
        &self,
        name: &str,
        department_id: RecordId,
    ) -> Result<Instructor, StoreError> {
        let instructor = Instructor::new(name, department_id, Utc::now());
        self.instructors().create(instructor).await
    }

    pub async fn list_instructors(&self) -> Result<Vec<Instructor>, StoreError> {
        self.instructors().list_all().await
    }

    /// Read the instructor, change the name, refresh `updated_at` and save
    pub async fn update_instructor_name(
        &self,
        id: RecordId,
        new_name: &str,
    ) -> Result<Instructor, StoreError> {
        let mut instructor = self
            .instructors()
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found(Instructor::table_name(), id))?;

        instructor.rename(new_name, Utc::now());
        let updated = self.instructors().update(id, instructor).await?;

        debug_log!(id, name = %updated.name, "renamed instructor");
        Ok(updated)
    }
}
