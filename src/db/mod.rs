//! Reservation storage.
//!
//! The store is abstracted behind [`ReservationRepository`]; two
//! implementations exist, an in-memory one for tests and local runs and a
//! Diesel/Postgres one behind the `postgres-repo` feature. The store owns
//! the identity and lifecycle columns; see the trait docs.

#[cfg(not(any(feature = "postgres-repo", feature = "local-repo")))]
compile_error!("Enable at least one repository backend feature.");

pub mod error;
pub mod factory;
pub mod repositories;
pub mod repository;

pub use error::{RepositoryError, RepositoryResult};
pub use factory::{RepositoryFactory, RepositoryType};
pub use repositories::LocalRepository;
pub use repository::ReservationRepository;
