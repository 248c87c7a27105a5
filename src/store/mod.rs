//! Student persistence behind one trait, so handlers never see the backend.

mod memory;
mod postgres;

pub use memory::MemoryStudentStore;
pub use postgres::{ensure_database_exists, ensure_students_table, PgStudentStore, STUDENTS_TABLE};

use crate::error::AppError;
use crate::model::{Student, StudentChanges};
use async_trait::async_trait;

/// Each call is one unit of work: the backend acquires and releases its own
/// connection (or lock) inside the call, on success and error paths alike.
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// Insert a new record. `AppError::Conflict` if the id is taken; the stored row is untouched.
    async fn create(&self, student: &Student) -> Result<(), AppError>;

    /// Overwrite name, score and address. `AppError::NotFound` if the id is absent.
    async fn update(&self, student_id: i32, changes: &StudentChanges) -> Result<(), AppError>;

    /// Every stored record, in backend order.
    async fn list(&self) -> Result<Vec<Student>, AppError>;

    async fn get(&self, student_id: i32) -> Result<Option<Student>, AppError>;

    /// Remove every record. `AppError::EmptyStore` if there was nothing to remove.
    async fn delete_all(&self) -> Result<u64, AppError>;

    async fn delete(&self, student_id: i32) -> Result<(), AppError>;

    /// Readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
