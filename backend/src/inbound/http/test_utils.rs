//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::Trace;
use crate::domain::ports::{MockDirectoryQuery, MockStudentRegistration};

use super::state::HttpState;

/// Build an app exposing the directory handlers over the supplied mocks.
///
/// Routes are mounted under `/api/v1` behind the trace middleware, matching
/// the production layout.
pub fn directory_test_app(
    directory: MockDirectoryQuery,
    registration: MockStudentRegistration,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(directory), Arc::new(registration));
    App::new()
        .app_data(web::Data::new(state))
        .wrap(Trace)
        .service(super::api_scope())
}
