//! Entity operations
//!
//! Each file adds the operations for one entity to `Registrar`. All of them
//! return `StoreError`: `NotFound` when a point lookup matches nothing,
//! `Database` for any failure reported by PostgreSQL.

mod courses;
mod departments;
mod enrollments;
mod instructors;
mod students;

pub use courses::enrolled_counts_query;
