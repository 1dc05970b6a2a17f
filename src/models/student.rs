use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::{PgQueryAs, RecordId, TableMetadata};

use super::UNSAVED_ID;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: RecordId,
    pub name: String,
    pub age: i32,
    pub email: String,
    pub department_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Soft delete marker
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Student {
    /// Unsaved student with both timestamps set to `now`
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department_id: RecordId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            age: 0,
            email: email.into(),
            department_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl TableMetadata for Student {
    fn table_name() -> &'static str {
        "students"
    }

    fn extract_id(&self) -> RecordId {
        self.id
    }

    fn create_fields() -> &'static [&'static str] {
        &[
            "name",
            "age",
            "email",
            "department_id",
            "created_at",
            "updated_at",
        ]
    }

    // deleted_at only changes through soft_delete/restore
    fn update_fields() -> &'static [&'static str] {
        &["name", "age", "email", "department_id", "updated_at"]
    }

    fn soft_delete_field() -> Option<&'static str> {
        Some("deleted_at")
    }

    fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(self.age)
            .bind(&self.email)
            .bind(self.department_id)
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(self.age)
            .bind(&self.email)
            .bind(self.department_id)
            .bind(self.updated_at)
    }
}
