//! Student registry: CRUD over a single `students` table, served with axum.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod openapi;
pub mod response;
pub mod routes;
pub mod state;
pub mod store;

pub use config::{ServerConfig, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Student, StudentChanges, StudentList};
pub use routes::{app, common_routes, student_routes};
pub use state::AppState;
pub use store::{
    ensure_database_exists, ensure_students_table, MemoryStudentStore, PgStudentStore, StudentStore,
};
