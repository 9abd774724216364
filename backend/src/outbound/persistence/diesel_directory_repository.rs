//! PostgreSQL-backed `DirectoryRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{
    DepartmentRecord, DirectoryRepository, DirectoryRepositoryError, StudentDepartmentRecord,
};
use crate::domain::{DepartmentId, NewStudent};

use super::models::{DepartmentRow, NewStudentRow, StudentWithDepartmentRow};
use super::pool::{DbPool, PoolError};
use super::schema::{departments, students};

/// Diesel-backed implementation of the `DirectoryRepository` port.
#[derive(Clone)]
pub struct DieselDirectoryRepository {
    pool: DbPool,
}

impl DieselDirectoryRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> DirectoryRepositoryError {
    DirectoryRepositoryError::connection(error.into_message())
}

/// Map Diesel errors to directory repository errors.
///
/// Closed connections are connection failures; integrity violations raised by
/// the store are constraint failures; everything else is a query failure.
fn map_diesel_error(error: diesel::result::Error) -> DirectoryRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::NotFound => DirectoryRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => {
            DirectoryRepositoryError::query("database query error")
        }
        DieselError::DatabaseError(kind, info) => match kind {
            DatabaseErrorKind::ClosedConnection => {
                DirectoryRepositoryError::connection("database connection error")
            }
            DatabaseErrorKind::UniqueViolation
            | DatabaseErrorKind::ForeignKeyViolation
            | DatabaseErrorKind::NotNullViolation
            | DatabaseErrorKind::CheckViolation => DirectoryRepositoryError::constraint(
                info.constraint_name()
                    .map_or_else(|| info.message().to_owned(), str::to_owned),
            ),
            _ => DirectoryRepositoryError::query("database error"),
        },
        _ => DirectoryRepositoryError::query("database error"),
    }
}

#[async_trait]
impl DirectoryRepository for DieselDirectoryRepository {
    async fn list_departments(&self) -> Result<Vec<DepartmentRecord>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<DepartmentRow> = departments::table
            .select(DepartmentRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(DepartmentRecord::from).collect())
    }

    async fn list_students_by_department(
        &self,
        department_id: &DepartmentId,
    ) -> Result<Vec<StudentDepartmentRecord>, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StudentWithDepartmentRow> = students::table
            .left_join(
                departments::table.on(students::department_id.eq(departments::id.nullable())),
            )
            .filter(students::department_id.eq(department_id.as_ref()))
            .select((
                students::id,
                students::first_name,
                students::last_name,
                students::student_id,
                students::address,
                students::department_id,
                departments::name.nullable(),
                departments::address.nullable(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(StudentDepartmentRecord::from).collect())
    }

    async fn insert_student(&self, student: &NewStudent) -> Result<i64, DirectoryRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewStudentRow {
            first_name: student.first_name(),
            last_name: student.last_name(),
            student_id: student.student_id(),
            address: student.address(),
            department_id: Some(student.department_id().as_ref()),
        };

        diesel::insert_into(students::table)
            .values(&row)
            .returning(students::id)
            .get_result::<i64>(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
