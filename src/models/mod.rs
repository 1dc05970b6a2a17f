//! Entity definitions
//!
//! Each model maps one table of the registrar schema. Tables themselves are
//! defined by the SQL migrations; these types only describe how rows are read
//! and written.

mod course;
mod department;
mod enrollment;
mod instructor;
mod student;

pub use course::{Course, CourseEnrollmentCount};
pub use department::Department;
pub use enrollment::Enrollment;
pub use instructor::Instructor;
pub use student::Student;

use store_object::RecordId;

/// Id carried by a model that has not been inserted yet. INSERT statements
/// never write the id column, the store assigns it.
pub const UNSAVED_ID: RecordId = 0;
