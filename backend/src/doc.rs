//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every directory endpoint and the schema wrappers from
//! [`crate::inbound::http::schemas`]. The document backs Swagger UI in debug
//! builds and is printed by the `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    DepartmentSchema, ErrorCodeSchema, ErrorSchema, StudentDepartmentSchema, StudentSchema,
};
use crate::inbound::http::students::AddStudentBody;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Directory API",
        description = "Departments, the students enrolled in them, and student registration."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::departments::list_departments,
        crate::inbound::http::students::list_students,
        crate::inbound::http::students::add_student,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        DepartmentSchema,
        StudentSchema,
        StudentDepartmentSchema,
        AddStudentBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "departments", description = "Read-only department listing"),
        (name = "students", description = "Student listing and registration"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
