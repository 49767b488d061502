//! Repository implementations.
//!
//! - `local`: in-memory implementation for tests and local development
//! - `postgres`: Diesel/Postgres implementation (feature `postgres-repo`)

pub mod local;
#[cfg(feature = "postgres-repo")]
pub mod postgres;

pub use local::LocalRepository;
#[cfg(feature = "postgres-repo")]
pub use postgres::{PostgresConfig, PostgresRepository};
