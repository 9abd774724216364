//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{DirectoryQuery, StudentRegistration};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub directory: Arc<dyn DirectoryQuery>,
    pub registration: Arc<dyn StudentRegistration>,
}

impl HttpState {
    /// Bundle the driving ports used by the directory handlers.
    pub fn new(
        directory: Arc<dyn DirectoryQuery>,
        registration: Arc<dyn StudentRegistration>,
    ) -> Self {
        Self {
            directory,
            registration,
        }
    }
}
