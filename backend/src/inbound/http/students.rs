//! Student API handlers.
//!
//! ```text
//! GET /api/v1/students?departmentId=1
//! POST /api/v1/students {"first_name":"Ada","last_name":"Lovelace","student_id":"S100","address":"1 Main St","department_id":"1"}
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{Error, Student};
use crate::domain::ports::AddStudentRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, StudentSchema};
use crate::inbound::http::state::HttpState;

/// Query parameters for `GET /api/v1/students`.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct StudentsQuery {
    /// Department to list. Missing or blank yields an empty list.
    pub department_id: Option<String>,
}

/// Registration body for `POST /api/v1/students`.
///
/// Omitted fields deserialise as empty strings and are rejected alongside
/// blank ones.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(default)]
pub struct AddStudentBody {
    #[schema(example = "Ada")]
    pub first_name: String,
    #[schema(example = "Lovelace")]
    pub last_name: String,
    #[schema(example = "S100")]
    pub student_id: String,
    #[schema(example = "1 Main St")]
    pub address: String,
    #[schema(example = "1")]
    pub department_id: String,
}

impl From<AddStudentBody> for AddStudentRequest {
    fn from(body: AddStudentBody) -> Self {
        Self {
            first_name: body.first_name,
            last_name: body.last_name,
            student_id: body.student_id,
            address: body.address,
            department_id: body.department_id,
        }
    }
}

/// JSON extractor settings for registration bodies.
///
/// Malformed JSON and explicit `null` fields are reported as
/// `invalid_request` errors in the standard error shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(json_error)
}

fn json_error(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    Error::invalid_request("request body is not a valid student registration")
        .with_details(serde_json::json!({ "reason": error.to_string() }))
        .into()
}

/// List the students of a department.
///
/// Students whose department no longer exists are returned with a
/// placeholder department carrying the dangling identifier.
#[utoipa::path(
    get,
    path = "/api/v1/students",
    params(StudentsQuery),
    responses(
        (status = 200, description = "Students of the department", body = [StudentSchema]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "listStudentsByDepartment"
)]
#[get("/students")]
pub async fn list_students(
    state: web::Data<HttpState>,
    query: web::Query<StudentsQuery>,
) -> ApiResult<web::Json<Vec<Student>>> {
    let StudentsQuery { department_id } = query.into_inner();
    let students = state.directory.students_by_department(department_id).await?;
    Ok(web::Json(students))
}

/// Register a student.
///
/// The response echoes the submitted fields with the assigned identifier; its
/// department carries only the submitted id.
#[utoipa::path(
    post,
    path = "/api/v1/students",
    request_body = AddStudentBody,
    responses(
        (status = 201, description = "Student registered", body = StudentSchema),
        (status = 400, description = "Blank, missing, or unreadable fields", body = ErrorSchema),
        (status = 409, description = "Rejected by a storage constraint", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["students"],
    operation_id = "addStudent"
)]
#[post("/students")]
pub async fn add_student(
    state: web::Data<HttpState>,
    payload: web::Json<AddStudentBody>,
) -> ApiResult<HttpResponse> {
    let student = state
        .registration
        .add_student(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(student))
}
