//! Domain primitives, services, and ports.
//!
//! Purpose: Define the directory's typed contract (departments, students, and
//! the registration command) independently of HTTP and persistence concerns.
//! Keep types immutable and document serialisation contracts in each type's
//! Rustdoc.
//!
//! Public surface:
//! - Error (alias to `error::Error`) — API error response payload.
//! - ErrorCode (alias to `error::ErrorCode`) — stable error identifier.
//! - Department / Student — response shapes exposed by the directory.
//! - DirectoryService — query and registration use-cases over a repository.

pub mod directory;
pub mod directory_service;
pub mod error;
pub mod ports;
pub mod trace_id;

pub use self::directory::{
    Department, DepartmentId, DirectoryValidationError, NewStudent, Student, StudentDepartment,
    UNKNOWN_DEPARTMENT_ADDRESS, UNKNOWN_DEPARTMENT_NAME,
};
pub use self::directory_service::DirectoryService;
pub use self::error::{Error, ErrorCode};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
