//! Registrar walkthrough
//!
//! Connects using `registrar.toml` (or the file named by `REGISTRAR_CONFIG`),
//! applies migrations, seeds a department, instructor and course, then runs
//! every registrar operation once.
//!
//! ```text
//! RUST_LOG=info cargo run --example walkthrough
//! ```

use anyhow::Context;
use registrar::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walkthrough=info,registrar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load().context("loading registrar configuration")?;
    let registrar = Registrar::connect(&config.database).await?;
    registrar.health_check().await?;
    registrar.migrate().await?;

    // Seed
    let science = registrar.create_department("Science").await?;
    let mars = registrar.create_instructor("mars", science.id).await?;
    let math = registrar.create_course("Math", science.id, mars.id).await?;

    let alice = registrar
        .create_student("Alice", "alice@example.com", science.id)
        .await?;
    tracing::info!(id = alice.id, created_at = %alice.created_at, "Created student");

    let course_id = registrar.get_course_by_id(math.id).await?;
    tracing::info!(course_id, "Found course");

    let renamed = registrar.update_instructor_name(mars.id, "Mars").await?;
    tracing::info!(id = renamed.id, name = %renamed.name, "Updated instructor");

    let scratch = registrar.create_department("Scratch").await?;
    registrar.delete_department(scratch.id).await?;
    tracing::info!(id = scratch.id, "Deleted department");

    match registrar.delete_department(science.id).await {
        Ok(()) => tracing::warn!("Deleted a department that still has students"),
        Err(e) if e.is_foreign_key_violation() => {
            tracing::info!(id = science.id, "Department still referenced, not deleted")
        }
        Err(e) => return Err(e.into()),
    }

    match registrar.list_students_by_department(science.id).await {
        Ok(students) => tracing::info!(count = students.len(), "Students in department"),
        Err(e) => tracing::error!(error = %e, "Listing students failed"),
    }

    match registrar.list_courses_by_instructor(mars.id).await {
        Ok(courses) => tracing::info!(count = courses.len(), "Courses taught by instructor"),
        Err(e) => tracing::error!(error = %e, "Listing courses failed"),
    }

    let enrollment = registrar
        .enroll_student_in_course(alice.id, math.id, "A")
        .await?;
    tracing::info!(id = enrollment.id, grade = %enrollment.grade, "Enrolled student");

    match registrar.list_enrollments_by_student(alice.id).await {
        Ok(enrollments) => tracing::info!(count = enrollments.len(), "Enrollments for student"),
        Err(e) => tracing::error!(error = %e, "Listing enrollments failed"),
    }

    let changed = registrar.rename_students("Alice", "Alice Liddell").await?;
    tracing::info!(changed, "Renamed students");

    registrar
        .soft_delete_student(alice.id)
        .await
        .context("soft deleting student")?;

    let active = registrar.list_active_students().await?;
    tracing::info!(count = active.len(), "Active students");

    let in_science = registrar.count_students_in_department(science.id).await?;
    tracing::info!(count = in_science, "Students counted in department");

    let report = registrar.enrolled_counts_per_course().await?;
    tracing::info!(
        report = %serde_json::to_string(&report)?,
        "Enrollment counts per course"
    );

    registrar.close().await;
    Ok(())
}
