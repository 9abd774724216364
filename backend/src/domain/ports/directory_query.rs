//! Driving port for directory reads.
//!
//! Inbound adapters use this port to list departments and the students of a
//! department without importing persistence concerns.

use async_trait::async_trait;

use crate::domain::{Department, Error, Student};

/// Domain use-case port for directory queries.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DirectoryQuery: Send + Sync {
    /// List every department in storage order.
    async fn departments(&self) -> Result<Vec<Department>, Error>;

    /// List the students of a department.
    ///
    /// An absent or blank `department_id` yields an empty list without
    /// consulting storage.
    async fn students_by_department(
        &self,
        department_id: Option<String>,
    ) -> Result<Vec<Student>, Error>;
}
