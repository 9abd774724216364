//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay framework-agnostic by not deriving `ToSchema`. The
//! wrappers here mirror their structure and register under the domain names.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
#[derive(ToSchema)]
#[schema(as = ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The store rejected a write because it violates a constraint.
    #[schema(rename = "conflict")]
    Conflict,
    /// The backing store could not be reached.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
#[derive(ToSchema)]
#[schema(as = Error, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "missing required fields: address")]
    message: String,
    /// Correlation identifier echoed in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details, such as the offending field names.
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::Department`].
#[derive(ToSchema)]
#[schema(as = Department)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct DepartmentSchema {
    #[schema(example = "1")]
    id: String,
    #[schema(example = "CS")]
    name: String,
    #[schema(example = "Bldg A")]
    address: String,
}

/// OpenAPI schema for [`crate::domain::StudentDepartment`].
///
/// Name and address are null in registration responses.
#[derive(ToSchema)]
#[schema(as = StudentDepartment)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentDepartmentSchema {
    #[schema(example = "1")]
    id: String,
    #[schema(example = "CS")]
    name: Option<String>,
    #[schema(example = "Bldg A")]
    address: Option<String>,
}

/// OpenAPI schema for [`crate::domain::Student`].
#[derive(ToSchema)]
#[schema(as = Student)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct StudentSchema {
    /// Storage-assigned identifier rendered as a string.
    #[schema(example = "42")]
    id: String,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    /// External student code supplied at registration.
    #[schema(example = "S100")]
    student_id: String,
    #[schema(example = "1 Main St")]
    address: String,
    department: Option<StudentDepartmentSchema>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn error_code_schema_variants_match_domain() {
        let schema_json = schema_to_json::<ErrorCodeSchema>();
        for code in [
            "invalid_request",
            "conflict",
            "service_unavailable",
            "internal_error",
        ] {
            assert!(schema_json.contains(code), "missing {code}");
        }
        assert!(!schema_json.contains("not_found"));
    }

    #[test]
    fn error_schema_uses_camel_case_trace_id() {
        let schema_json = schema_to_json::<ErrorSchema>();
        assert!(schema_json.contains("traceId"));
        assert!(!schema_json.contains("trace_id"));
    }

    #[test]
    fn student_schema_keeps_snake_case_fields() {
        let schema_json = schema_to_json::<StudentSchema>();
        for field in ["first_name", "last_name", "student_id", "department"] {
            assert!(schema_json.contains(field), "missing {field}");
        }
    }

    #[test]
    fn schemas_register_under_domain_names() {
        assert_eq!(DepartmentSchema::name(), "Department");
        assert_eq!(StudentSchema::name(), "Student");
        assert_eq!(ErrorSchema::name(), "Error");
    }
}
