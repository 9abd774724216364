//! Directory domain service.
//!
//! Implements the [`DirectoryQuery`] and [`StudentRegistration`] driving ports
//! over a [`DirectoryRepository`], shaping raw rows into API responses and
//! applying the missing-department substitution.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{info, warn};

use crate::domain::ports::{
    AddStudentRequest, DepartmentRecord, DirectoryQuery, DirectoryRepository,
    DirectoryRepositoryError, StudentDepartmentRecord, StudentRegistration,
};
use crate::domain::{
    Department, DepartmentId, DirectoryValidationError, Error, NewStudent, Student,
    StudentDepartment, UNKNOWN_DEPARTMENT_ADDRESS, UNKNOWN_DEPARTMENT_NAME,
};

/// Directory service implementing the query and registration ports.
#[derive(Clone)]
pub struct DirectoryService<R> {
    repository: Arc<R>,
}

impl<R> DirectoryService<R> {
    /// Create a new service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_repository_error(error: DirectoryRepositoryError) -> Error {
    match error {
        DirectoryRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("directory storage unavailable: {message}"))
        }
        DirectoryRepositoryError::Query { message } => {
            Error::internal(format!("directory storage error: {message}"))
        }
        DirectoryRepositoryError::Constraint { message } => {
            Error::conflict("student rejected by storage constraint")
                .with_details(json!({ "reason": message, "code": "constraint_violation" }))
        }
    }
}

fn map_validation_error(error: DirectoryValidationError) -> Error {
    let details = match &error {
        DirectoryValidationError::MissingFields { fields } => json!({ "fields": fields }),
        DirectoryValidationError::EmptyDepartmentId => json!({ "fields": ["department_id"] }),
    };
    Error::invalid_request(error.to_string()).with_details(details)
}

fn department_from_record(record: DepartmentRecord) -> Department {
    Department {
        id: record.id,
        name: record.name,
        address: record.address,
    }
}

/// Shape a joined row, substituting placeholders for a dangling reference.
fn student_from_record(record: StudentDepartmentRecord) -> Student {
    let StudentDepartmentRecord {
        id,
        first_name,
        last_name,
        student_id,
        address,
        department_id,
        department_name,
        department_address,
    } = record;

    let department = department_id.map(|department_id| {
        if department_name.is_none() || department_address.is_none() {
            warn!(
                student = id,
                department_id = %department_id,
                "student references a missing department; substituting placeholders"
            );
        }
        StudentDepartment {
            id: department_id,
            name: Some(department_name.unwrap_or_else(|| UNKNOWN_DEPARTMENT_NAME.to_owned())),
            address: Some(
                department_address.unwrap_or_else(|| UNKNOWN_DEPARTMENT_ADDRESS.to_owned()),
            ),
        }
    });

    Student {
        id: id.to_string(),
        first_name,
        last_name,
        student_id,
        address,
        department,
    }
}

#[async_trait]
impl<R> DirectoryQuery for DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn departments(&self) -> Result<Vec<Department>, Error> {
        let records = self
            .repository
            .list_departments()
            .await
            .map_err(map_repository_error)?;
        Ok(records.into_iter().map(department_from_record).collect())
    }

    async fn students_by_department(
        &self,
        department_id: Option<String>,
    ) -> Result<Vec<Student>, Error> {
        let Some(department_id) = department_id.and_then(|raw| DepartmentId::new(raw).ok())
        else {
            return Ok(Vec::new());
        };

        let records = self
            .repository
            .list_students_by_department(&department_id)
            .await
            .map_err(map_repository_error)?;
        Ok(records.into_iter().map(student_from_record).collect())
    }
}

#[async_trait]
impl<R> StudentRegistration for DirectoryService<R>
where
    R: DirectoryRepository,
{
    async fn add_student(&self, request: AddStudentRequest) -> Result<Student, Error> {
        let AddStudentRequest {
            first_name,
            last_name,
            student_id,
            address,
            department_id,
        } = request;
        let new_student = NewStudent::try_new(first_name, last_name, student_id, address, department_id)
            .map_err(map_validation_error)?;

        let id = self
            .repository
            .insert_student(&new_student)
            .await
            .map_err(map_repository_error)?;
        info!(
            student = id,
            department_id = %new_student.department_id(),
            "student registered"
        );

        Ok(Student {
            id: id.to_string(),
            first_name: new_student.first_name().to_owned(),
            last_name: new_student.last_name().to_owned(),
            student_id: new_student.student_id().to_owned(),
            address: new_student.address().to_owned(),
            department: Some(StudentDepartment::id_only(
                new_student.department_id().as_ref(),
            )),
        })
    }
}

#[cfg(test)]
#[path = "directory_service_tests.rs"]
mod tests;
