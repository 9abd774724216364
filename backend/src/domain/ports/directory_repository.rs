//! Port for directory persistence.
//!
//! The [`DirectoryRepository`] trait is the driven edge for department and
//! student storage. Adapters return raw rows; shaping them into API responses
//! belongs to the directory service.

use async_trait::async_trait;

use crate::domain::{DepartmentId, NewStudent};

use super::define_port_error;

define_port_error! {
    /// Errors raised by directory repository adapters.
    pub enum DirectoryRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "directory repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "directory repository query failed: {message}",
        /// The store rejected a write because it violates a constraint.
        Constraint { message: String } =>
            "directory repository constraint violated: {message}",
    }
}

/// Department row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRecord {
    pub id: String,
    pub name: String,
    pub address: String,
}

/// Student row left-joined with its department.
///
/// `department_id` is the student's stored reference. The `department_*`
/// columns come from the joined department and are `None` when no department
/// row matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDepartmentRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub address: String,
    pub department_id: Option<String>,
    pub department_name: Option<String>,
    pub department_address: Option<String>,
}

/// Port for department and student storage.
///
/// Each method performs a single round trip. Row order is whatever the store
/// returns; callers must not rely on a particular sort.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Fetch every department.
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DirectoryRepositoryError>;

    /// Fetch the students whose stored department reference equals
    /// `department_id`, left-joined with the referenced department.
    async fn list_students_by_department(
        &self,
        department_id: &DepartmentId,
    ) -> Result<Vec<StudentDepartmentRecord>, DirectoryRepositoryError>;

    /// Insert a student and return the identifier assigned by storage.
    ///
    /// The department reference is stored as given; its existence is not
    /// checked here.
    async fn insert_student(&self, student: &NewStudent) -> Result<i64, DirectoryRepositoryError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        DirectoryRepositoryError::connection("timed out"),
        "directory repository connection failed: timed out"
    )]
    #[case(
        DirectoryRepositoryError::query("syntax error"),
        "directory repository query failed: syntax error"
    )]
    #[case(
        DirectoryRepositoryError::constraint("students_pkey"),
        "directory repository constraint violated: students_pkey"
    )]
    fn errors_render_messages(#[case] err: DirectoryRepositoryError, #[case] expected: &str) {
        assert_eq!(err.to_string(), expected);
    }

    #[rstest]
    fn constructors_accept_borrowed_and_owned_messages() {
        let owned = format!("constraint {}", "students_pkey");

        assert_eq!(
            DirectoryRepositoryError::constraint(owned),
            DirectoryRepositoryError::Constraint {
                message: "constraint students_pkey".to_owned(),
            }
        );
        assert_eq!(
            DirectoryRepositoryError::connection("refused"),
            DirectoryRepositoryError::Connection {
                message: "refused".to_owned(),
            }
        );
    }

    #[rstest]
    fn variants_are_distinct_for_the_same_message() {
        assert_ne!(
            DirectoryRepositoryError::query("boom"),
            DirectoryRepositoryError::constraint("boom")
        );
    }
}
