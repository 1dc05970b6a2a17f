use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use store_object::{PgQueryAs, RecordId, TableMetadata};

use super::UNSAVED_ID;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Department {
    pub id: RecordId,
    pub name: String,
}

impl Department {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UNSAVED_ID,
            name: name.into(),
        }
    }
}

impl TableMetadata for Department {
    fn table_name() -> &'static str {
        "departments"
    }

    fn extract_id(&self) -> RecordId {
        self.id
    }

    fn create_fields() -> &'static [&'static str] {
        &["name"]
    }

    fn update_fields() -> &'static [&'static str] {
        &["name"]
    }

    fn bind_create_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name)
    }

    fn bind_update_params<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name)
    }
}
