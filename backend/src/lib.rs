//! Department and student directory service.
//!
//! The domain layer owns the directory contract and its ports; inbound HTTP
//! and outbound Diesel adapters sit at the edges.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
