//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel row structs and
//! port records. Row structs (`models.rs`) and table definitions (`schema.rs`)
//! stay private to this module. Connections come from a `bb8` pool driven by
//! `diesel-async`.
//!
//! # Example
//!
//! ```no_run
//! use directory::outbound::persistence::{DbPool, DieselDirectoryRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), directory::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/directory")).await?;
//! let repository = DieselDirectoryRepository::new(pool);
//! # let _ = repository;
//! # Ok(())
//! # }
//! ```

mod diesel_directory_repository;
mod models;
mod pool;
mod schema;

pub use diesel_directory_repository::DieselDirectoryRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
