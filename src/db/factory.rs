//! Factory for creating repository instances.

use std::str::FromStr;
use std::sync::Arc;

use super::error::{RepositoryError, RepositoryResult};
use super::repositories::LocalRepository;
use super::repository::ReservationRepository;

/// Which repository backend to construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryType {
    /// In-memory store, data lost on restart.
    Local,
    /// PostgreSQL via Diesel.
    #[cfg(feature = "postgres-repo")]
    Postgres,
}

impl FromStr for RepositoryType {
    type Err = RepositoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(Self::Local),
            #[cfg(feature = "postgres-repo")]
            "postgres" => Ok(Self::Postgres),
            other => Err(RepositoryError::configuration(format!(
                "unknown repository type '{other}'"
            ))),
        }
    }
}

pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create the repository selected by `REPOSITORY_TYPE` (default
    /// "local"; "postgres" requires the `postgres-repo` feature).
    pub async fn from_env() -> RepositoryResult<Arc<dyn ReservationRepository>> {
        let kind = std::env::var("REPOSITORY_TYPE").unwrap_or_else(|_| "local".to_string());
        Self::create(kind.parse()?).await
    }

    pub async fn create(kind: RepositoryType) -> RepositoryResult<Arc<dyn ReservationRepository>> {
        match kind {
            RepositoryType::Local => Ok(Self::create_local()),
            #[cfg(feature = "postgres-repo")]
            RepositoryType::Postgres => {
                let config = super::repositories::PostgresConfig::from_env()?;
                let repo = super::repositories::PostgresRepository::connect(&config).await?;
                Ok(Arc::new(repo))
            }
        }
    }

    /// Create an in-memory repository.
    pub fn create_local() -> Arc<dyn ReservationRepository> {
        Arc::new(LocalRepository::new())
    }
}
