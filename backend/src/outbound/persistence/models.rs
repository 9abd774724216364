//! Internal Diesel row structs for directory queries.
//!
//! These types never leave the persistence layer; the repository converts
//! them into port records before returning.

use diesel::prelude::*;

use crate::domain::ports::{DepartmentRecord, StudentDepartmentRecord};

use super::schema::{departments, students};

/// Row struct for reading from the departments table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct DepartmentRow {
    pub id: String,
    pub name: String,
    pub address: String,
}

impl From<DepartmentRow> for DepartmentRecord {
    fn from(row: DepartmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            address: row.address,
        }
    }
}

/// Student columns followed by the nullable columns of the left-joined
/// department. Field order must match the select tuple in the repository.
#[derive(Debug, Clone, Queryable)]
pub(crate) struct StudentWithDepartmentRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub student_id: String,
    pub address: String,
    pub department_id: Option<String>,
    pub department_name: Option<String>,
    pub department_address: Option<String>,
}

impl From<StudentWithDepartmentRow> for StudentDepartmentRecord {
    fn from(row: StudentWithDepartmentRow) -> Self {
        Self {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            student_id: row.student_id,
            address: row.address,
            department_id: row.department_id,
            department_name: row.department_name,
            department_address: row.department_address,
        }
    }
}

/// Insertable struct for registering a student.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = students)]
pub(crate) struct NewStudentRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub student_id: &'a str,
    pub address: &'a str,
    pub department_id: Option<&'a str>,
}
