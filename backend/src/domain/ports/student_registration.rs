//! Driving port for registering students.

use async_trait::async_trait;

use crate::domain::{Error, Student};

/// Raw registration input as submitted by a caller; validated by the
/// implementation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddStudentRequest {
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub address: String,
    pub department_id: String,
}

/// Domain use-case port for student registration.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRegistration: Send + Sync {
    /// Validate and store a new student.
    ///
    /// # Errors
    ///
    /// Returns an `invalid_request` error naming every blank field, or a
    /// storage-derived error when the insert fails.
    async fn add_student(&self, request: AddStudentRequest) -> Result<Student, Error>;
}
