//! Postgres repository implementation using Diesel.
//!
//! Connection pooling with r2d2; Diesel's blocking queries run on the
//! tokio blocking pool. Embedded migrations run once at connect time.
//!
//! Configuration comes from the environment:
//! - `DATABASE_URL`: connection string (required)
//! - `PG_POOL_MAX`: maximum pool size (default: 10)
//! - `PG_CONN_TIMEOUT_SEC`: connection timeout in seconds (default: 30)

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use tokio::task;

use crate::db::error::{RepositoryError, RepositoryResult};
use crate::db::repository::ReservationRepository;
use crate::model::{generate_confirmation_code, Reservation, ReservationDraft, ReservationStatus};

mod models;
mod schema;

use models::{NewReservationRow, ReservationRow, UpdateReservationRow};
use schema::reservations;

use super::local::CODE_RETRIES;

type PgPool = Pool<ConnectionManager<PgConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Configuration for connecting to Postgres.
#[derive(Debug, Clone)]
pub struct PostgresConfig {
    pub database_url: String,
    pub max_pool_size: u32,
    pub connection_timeout_sec: u64,
}

impl PostgresConfig {
    /// Read connection settings from the environment.
    pub fn from_env() -> RepositoryResult<Self> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| RepositoryError::configuration("DATABASE_URL must be set"))?;

        let max_pool_size = std::env::var("PG_POOL_MAX")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let connection_timeout_sec = std::env::var("PG_CONN_TIMEOUT_SEC")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            max_pool_size,
            connection_timeout_sec,
        })
    }
}

/// Diesel-backed reservation store.
pub struct PostgresRepository {
    pool: Arc<PgPool>,
}

impl PostgresRepository {
    /// Connect, build the pool and run pending migrations.
    pub async fn connect(config: &PostgresConfig) -> RepositoryResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);
        let pool = Pool::builder()
            .max_size(config.max_pool_size)
            .connection_timeout(Duration::from_secs(config.connection_timeout_sec))
            .build(manager)
            .map_err(|e| RepositoryError::connection(e.to_string()))?;

        let repo = Self {
            pool: Arc::new(pool),
        };

        repo.with_conn(|conn| {
            conn.run_pending_migrations(MIGRATIONS)
                .map_err(|e| RepositoryError::configuration(format!("migrations failed: {e}")))?;
            Ok(())
        })
        .await?;

        Ok(repo)
    }

    /// Run a blocking Diesel operation on the blocking pool.
    async fn with_conn<T, F>(&self, f: F) -> RepositoryResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&mut PgConnection) -> RepositoryResult<T> + Send + 'static,
    {
        let pool = Arc::clone(&self.pool);
        task::spawn_blocking(move || {
            let mut conn = pool.get()?;
            f(&mut conn)
        })
        .await
        .map_err(|e| RepositoryError::internal(format!("task join error: {e}")))?
    }
}

#[async_trait]
impl ReservationRepository for PostgresRepository {
    async fn list(&self) -> RepositoryResult<Vec<Reservation>> {
        self.with_conn(|conn| {
            let rows: Vec<ReservationRow> = reservations::table
                .order(reservations::id.asc())
                .load(conn)?;
            rows.into_iter().map(ReservationRow::into_entity).collect()
        })
        .await
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Reservation>> {
        self.with_conn(move |conn| {
            let row: Option<ReservationRow> = reservations::table
                .find(id)
                .first(conn)
                .optional()?;
            row.map(ReservationRow::into_entity).transpose()
        })
        .await
    }

    async fn insert(&self, draft: ReservationDraft) -> RepositoryResult<Reservation> {
        self.with_conn(move |conn| {
            // The confirmation code is unique-constrained; re-roll on a
            // collision instead of failing the submission.
            let mut last_err = None;
            for _ in 0..CODE_RETRIES {
                let row = NewReservationRow::from_draft(
                    &draft,
                    generate_confirmation_code(),
                    Local::now().naive_local(),
                );
                match diesel::insert_into(reservations::table)
                    .values(&row)
                    .get_result::<ReservationRow>(conn)
                {
                    Ok(saved) => return saved.into_entity(),
                    Err(e) => {
                        let err = RepositoryError::from(e);
                        if !err.is_conflict() {
                            return Err(err);
                        }
                        last_err = Some(err);
                    }
                }
            }
            Err(last_err.unwrap_or_else(|| {
                RepositoryError::conflict("could not allocate a unique confirmation code")
            }))
        })
        .await
    }

    async fn update(&self, id: i64, draft: ReservationDraft) -> RepositoryResult<Reservation> {
        self.with_conn(move |conn| {
            let changes = UpdateReservationRow::from_draft(&draft, Local::now().naive_local());
            let row: ReservationRow = diesel::update(reservations::table.find(id))
                .set(&changes)
                .get_result(conn)
                .optional()?
                .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?;
            row.into_entity()
        })
        .await
    }

    async fn set_status(
        &self,
        id: i64,
        status: ReservationStatus,
        confirmed_by: Option<String>,
    ) -> RepositoryResult<Reservation> {
        self.with_conn(move |conn| {
            let now = Local::now().naive_local();
            let confirmed_by = confirmed_by.filter(|_| status == ReservationStatus::Confirmed);
            let row: Option<ReservationRow> = match confirmed_by {
                Some(name) => diesel::update(reservations::table.find(id))
                    .set((
                        reservations::status.eq(status.token()),
                        reservations::confirmed_by.eq(name),
                        reservations::updated_at.eq(now),
                    ))
                    .get_result(conn)
                    .optional()?,
                None => diesel::update(reservations::table.find(id))
                    .set((
                        reservations::status.eq(status.token()),
                        reservations::updated_at.eq(now),
                    ))
                    .get_result(conn)
                    .optional()?,
            };
            row.ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?
                .into_entity()
        })
        .await
    }

    async fn set_internal_notes(&self, id: i64, notes: String) -> RepositoryResult<Reservation> {
        self.with_conn(move |conn| {
            let row: Option<ReservationRow> = diesel::update(reservations::table.find(id))
                .set((
                    reservations::internal_notes.eq(notes),
                    reservations::updated_at.eq(Local::now().naive_local()),
                ))
                .get_result(conn)
                .optional()?;
            row.ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?
                .into_entity()
        })
        .await
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        self.with_conn(move |conn| {
            let deleted = diesel::delete(reservations::table.find(id)).execute(conn)?;
            if deleted == 0 {
                Err(RepositoryError::not_found(format!("reservation {id}")))
            } else {
                Ok(())
            }
        })
        .await
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        self.with_conn(|conn| {
            diesel::sql_query("SELECT 1").execute(conn)?;
            Ok(true)
        })
        .await
    }
}
