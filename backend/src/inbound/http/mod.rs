//! HTTP inbound adapter exposing REST endpoints.

use actix_web::{Scope, web};

pub mod departments;
pub mod error;
pub mod health;
pub mod schemas;
pub mod state;
pub mod students;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;

/// Versioned API scope with every directory endpoint registered.
pub fn api_scope() -> Scope {
    web::scope("/api/v1")
        .app_data(students::json_config())
        .service(departments::list_departments)
        .service(students::list_students)
        .service(students::add_student)
}
