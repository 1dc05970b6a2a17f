use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::{PgQueryAs, RecordId, TableMetadata};

use super::UNSAVED_ID;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Instructor {
    pub id: RecordId,
    pub name: String,
    pub department_id: RecordId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Instructor {
    /// Unsaved instructor with both timestamps set to `now`
    pub fn new(name: impl Into<String>, department_id: RecordId, now: DateTime<Utc>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
            department_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Change the name and refresh `updated_at`
    pub fn rename(&mut self, name: impl Into<String>, now: DateTime<Utc>) {
        self.name = name.into();
        self.updated_at = now;
    }
}

impl TableMetadata for Instructor {
    fn table_name() -> &'static str {
        "instructors"
    }

    fn extract_id(&self) -> RecordId {
        self.id
    }

    fn create_fields() -> &'static [&'static str] {
        &["name", "department_id", "created_at", "updated_at"]
    }

    // created_at is written once
    fn update_fields() -> &'static [&'static str] {
        &["name", "department_id", "updated_at"]
    }

    fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(self.department_id)
            .bind(self.created_at)
            .bind(self.updated_at)
    }

    fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(self.department_id)
            .bind(self.updated_at)
    }
}
