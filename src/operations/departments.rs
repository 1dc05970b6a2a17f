use store_object::{RecordId, StoreError, StoreObject, TableMetadata};

use crate::core::Registrar;
use crate::models::Department;

impl Registrar {
    pub async fn create_department(&self, name: &str) -> Result<Department, StoreError> {
        let department = self.departments().create(Department::new(name)).await?;
        debug_log!(id = department.id, "created department");
        Ok(department)
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, StoreError> {
        self.departments().list_all().await
    }

    /// Hard delete a department
    ///
    /// Fails with `NotFound` when the department does not exist. Departments
    /// still referenced by students, instructors or courses are not removed:
    /// the foreign key rejects the delete and the error reports
    /// `is_foreign_key_violation()`.
    pub async fn delete_department(&self, id: RecordId) -> Result<(), StoreError> {
        let department = self
            .departments()
            .get_by_id(id)
            .await?
            .ok_or_else(|| StoreError::not_found(Department::table_name(), id))?;

        if !self.departments().delete(department.id).await? {
            return Err(StoreError::not_found(Department::table_name(), id));
        }

        debug_log!(id, "deleted department");
        Ok(())
    }
}
