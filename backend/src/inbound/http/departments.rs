//! Department API handlers.
//!
//! ```text
//! GET /api/v1/departments
//! ```

use actix_web::{get, web};

use crate::domain::Department;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{DepartmentSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;

/// List every department in storage order.
#[utoipa::path(
    get,
    path = "/api/v1/departments",
    responses(
        (status = 200, description = "Departments", body = [DepartmentSchema]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["departments"],
    operation_id = "listDepartments"
)]
#[get("/departments")]
pub async fn list_departments(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<Department>>> {
    let departments = state.directory.departments().await?;
    Ok(web::Json(departments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Error;
    use crate::domain::ports::{MockDirectoryQuery, MockStudentRegistration};
    use crate::inbound::http::test_utils::directory_test_app;
    use actix_web::http::StatusCode;
    use actix_web::test as actix_test;
    use serde_json::{Value, json};

    #[actix_web::test]
    async fn lists_departments_as_json() {
        let mut directory = MockDirectoryQuery::new();
        directory.expect_departments().times(1).return_once(|| {
            Ok(vec![Department {
                id: "1".to_owned(),
                name: "CS".to_owned(),
                address: "Bldg A".to_owned(),
            }])
        });
        let app =
            actix_test::init_service(directory_test_app(directory, MockStudentRegistration::new()))
                .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/departments")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body, json!([{"id": "1", "name": "CS", "address": "Bldg A"}]));
    }

    #[actix_web::test]
    async fn storage_outage_maps_to_service_unavailable() {
        let mut directory = MockDirectoryQuery::new();
        directory
            .expect_departments()
            .times(1)
            .return_once(|| Err(Error::service_unavailable("directory storage unavailable")));
        let app =
            actix_test::init_service(directory_test_app(directory, MockStudentRegistration::new()))
                .await;

        let request = actix_test::TestRequest::get()
            .uri("/api/v1/departments")
            .to_request();
        let response = actix_test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body: Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "service_unavailable");
    }
}
