//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: PostgreSQL-backed directory repository using Diesel ORM
//!
//! Adapters translate between domain records and infrastructure-specific
//! representations. They contain no business logic.

pub mod persistence;
