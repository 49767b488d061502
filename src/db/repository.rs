//! Repository trait for reservation storage.

use async_trait::async_trait;

use super::error::RepositoryResult;
use crate::model::{Reservation, ReservationDraft, ReservationStatus};

/// Storage interface for reservations.
///
/// The store owns the identity and lifecycle columns: `insert` assigns the
/// id, generates the confirmation code, stamps `created_at`/`updated_at`
/// and forces the initial `Pending` status; every other write refreshes
/// `updated_at`. Drafts can never set any of these columns.
///
/// # Thread safety
/// Implementations must be `Send + Sync` so a single instance can be
/// shared across request handlers.
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// All reservations, in store iteration order (ascending id).
    async fn list(&self) -> RepositoryResult<Vec<Reservation>>;

    /// Fetch a single reservation, `None` when the id is unknown.
    async fn find(&self, id: i64) -> RepositoryResult<Option<Reservation>>;

    /// Insert a new reservation. The confirmation code is re-rolled a
    /// bounded number of times on a collision before the insert fails
    /// with a conflict.
    async fn insert(&self, draft: ReservationDraft) -> RepositoryResult<Reservation>;

    /// Replace the form-supplied fields of an existing reservation,
    /// preserving status, creation timestamp and confirmation code.
    async fn update(&self, id: i64, draft: ReservationDraft) -> RepositoryResult<Reservation>;

    /// Set the lifecycle status. A transition to `Confirmed` records the
    /// confirming staff member when one is given.
    async fn set_status(
        &self,
        id: i64,
        status: ReservationStatus,
        confirmed_by: Option<String>,
    ) -> RepositoryResult<Reservation>;

    /// Replace the staff-only internal notes.
    async fn set_internal_notes(&self, id: i64, notes: String) -> RepositoryResult<Reservation>;

    /// Hard delete. Fails with `NotFound` for an unknown id.
    async fn delete(&self, id: i64) -> RepositoryResult<()>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;
}
