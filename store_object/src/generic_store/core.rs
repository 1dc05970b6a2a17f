use crate::traits::TableMetadata;
use crate::DbPool;
use crate::query_builder::QueryValue;
use sqlx::postgres::PgArguments;
use sqlx::Postgres;
use std::marker::PhantomData;

/// Generic database store that provides default implementations for all database operations
#[derive(Clone)]
pub struct GenericStore<T: TableMetadata> {
    pub(crate) db_pool: DbPool,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T: TableMetadata> std::fmt::Debug for GenericStore<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenericStore")
            .field("table", &T::table_name())
            .field("pool_size", &self.db_pool.size())
            .finish()
    }
}

impl<T: TableMetadata> GenericStore<T> {
    pub fn new(db_pool: DbPool) -> Self {
        Self {
            db_pool,
            _phantom: PhantomData,
        }
    }

    /// Get a reference to the underlying pool
    pub fn pool(&self) -> &DbPool {
        &self.db_pool
    }
}

// Shared parameter binding for query-builder values. The variant picks the
// Postgres type; nulls never reach here because the generator inlines them.
macro_rules! bind_query_value {
    ($query:expr, $value:expr) => {
        match $value {
            QueryValue::Null => $query.bind(Option::<String>::None),
            QueryValue::Bool(b) => $query.bind(b),
            QueryValue::Int(i) => $query.bind(i),
            QueryValue::Float(f) => $query.bind(f),
            QueryValue::Text(s) => $query.bind(s),
            QueryValue::Timestamp(ts) => $query.bind(ts),
        }
    };
}

pub(crate) fn bind_params<'q, O>(
    mut query: sqlx::query::QueryAs<'q, Postgres, O, PgArguments>,
    params: Vec<QueryValue>,
) -> sqlx::query::QueryAs<'q, Postgres, O, PgArguments> {
    for param in params {
        query = bind_query_value!(query, param);
    }
    query
}

pub(crate) fn bind_params_raw<'q>(
    mut query: sqlx::query::Query<'q, Postgres, PgArguments>,
    params: Vec<QueryValue>,
) -> sqlx::query::Query<'q, Postgres, PgArguments> {
    for param in params {
        query = bind_query_value!(query, param);
    }
    query
}
