//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports describe how the domain reaches storage and expose strongly
//! typed errors so adapters map their failures into predictable variants.
//! Driving ports are the use-cases inbound adapters call.

mod macros;
pub(crate) use macros::define_port_error;

mod directory_query;
mod directory_repository;
mod student_registration;

#[cfg(test)]
pub use directory_query::MockDirectoryQuery;
pub use directory_query::DirectoryQuery;
#[cfg(test)]
pub use directory_repository::MockDirectoryRepository;
pub use directory_repository::{
    DepartmentRecord, DirectoryRepository, DirectoryRepositoryError, StudentDepartmentRecord,
};
#[cfg(test)]
pub use student_registration::MockStudentRegistration;
pub use student_registration::{AddStudentRequest, StudentRegistration};
