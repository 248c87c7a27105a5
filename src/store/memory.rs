//! In-process store used by tests and by `STUDENTS_STORE=memory`.

use super::StudentStore;
use crate::error::AppError;
use crate::model::{Student, StudentChanges};
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStudentStore {
    rows: RwLock<BTreeMap<i32, Student>>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn create(&self, student: &Student) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        if rows.contains_key(&student.student_id) {
            return Err(AppError::Conflict(student.student_id));
        }
        rows.insert(student.student_id, student.clone());
        Ok(())
    }

    async fn update(&self, student_id: i32, changes: &StudentChanges) -> Result<(), AppError> {
        let mut rows = self.rows.write().await;
        let row = rows.get_mut(&student_id).ok_or(AppError::NotFound(student_id))?;
        row.apply(changes.clone());
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Student>, AppError> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn get(&self, student_id: i32) -> Result<Option<Student>, AppError> {
        Ok(self.rows.read().await.get(&student_id).cloned())
    }

    async fn delete_all(&self) -> Result<u64, AppError> {
        let mut rows = self.rows.write().await;
        if rows.is_empty() {
            return Err(AppError::EmptyStore);
        }
        let removed = rows.len() as u64;
        rows.clear();
        Ok(removed)
    }

    async fn delete(&self, student_id: i32) -> Result<(), AppError> {
        self.rows
            .write()
            .await
            .remove(&student_id)
            .map(|_| ())
            .ok_or(AppError::NotFound(student_id))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
