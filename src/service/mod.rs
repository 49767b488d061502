//! Business operations over the repository.
//!
//! Handlers delegate here. Every function performs the store mutation
//! first and only then hands the result to the notifier, so a failed
//! email can never roll back or fail a committed change.

use crate::db::{RepositoryError, RepositoryResult, ReservationRepository};
use crate::mail::{Notifier, SendOutcome};
use crate::model::{Reservation, ReservationDraft, ReservationStatus};

/// Create a reservation. The store assigns id, confirmation code,
/// timestamps and the initial `Pending` status.
pub async fn create_reservation(
    repo: &dyn ReservationRepository,
    notifier: &Notifier,
    draft: ReservationDraft,
    send_email: bool,
) -> RepositoryResult<Reservation> {
    let saved = repo.insert(draft).await?;
    tracing::info!(
        id = saved.id,
        code = %saved.confirmation_code,
        location = %saved.location,
        "created reservation"
    );
    if send_email {
        notifier.reservation_submitted(&saved);
    }
    Ok(saved)
}

/// Full staff update. Existing status and creation timestamp survive
/// whatever the submitted payload contains.
pub async fn update_reservation(
    repo: &dyn ReservationRepository,
    notifier: &Notifier,
    id: i64,
    draft: ReservationDraft,
    send_email: bool,
) -> RepositoryResult<Reservation> {
    let saved = repo.update(id, draft).await?;
    tracing::info!(id, "updated reservation");
    if send_email {
        notifier.reservation_updated(&saved);
    }
    Ok(saved)
}

/// Hard delete. The cancellation email goes out before the row
/// disappears; its failure never blocks the delete.
pub async fn delete_reservation(
    repo: &dyn ReservationRepository,
    notifier: &Notifier,
    id: i64,
    send_email: bool,
) -> RepositoryResult<()> {
    let Some(existing) = repo.find(id).await? else {
        return Err(RepositoryError::not_found(format!("reservation {id}")));
    };
    if send_email {
        notifier.reservation_cancelled(&existing);
    }
    repo.delete(id).await?;
    tracing::info!(id, "deleted reservation");
    Ok(())
}

/// Apply a status transition.
///
/// Transitions are deliberately permissive: staff may move a reservation
/// from any status to any other. A transition to `Confirmed` records the
/// confirming staff member when given; every transition notifies the
/// requester (if enabled) with the old and new status.
pub async fn change_status(
    repo: &dyn ReservationRepository,
    notifier: &Notifier,
    id: i64,
    status: ReservationStatus,
    confirmed_by: Option<String>,
    send_email: bool,
) -> RepositoryResult<Reservation> {
    let Some(existing) = repo.find(id).await? else {
        return Err(RepositoryError::not_found(format!("reservation {id}")));
    };
    let old_status = existing.status;
    let saved = repo.set_status(id, status, confirmed_by).await?;
    tracing::info!(id, from = %old_status, to = %status, "updated reservation status");
    if send_email {
        notifier.status_changed(&saved, old_status);
    }
    Ok(saved)
}

/// Replace the staff-only internal notes. No notification is sent.
pub async fn update_notes(
    repo: &dyn ReservationRepository,
    id: i64,
    notes: String,
) -> RepositoryResult<Reservation> {
    let saved = repo.set_internal_notes(id, notes).await?;
    tracing::info!(id, "updated internal notes");
    Ok(saved)
}

/// Send an operator-authored email about a reservation. Unlike the
/// lifecycle notifications the outcome is reported to the caller.
pub async fn send_custom_email(
    repo: &dyn ReservationRepository,
    notifier: &Notifier,
    id: i64,
    subject: &str,
    message: &str,
) -> RepositoryResult<SendOutcome> {
    let Some(existing) = repo.find(id).await? else {
        return Err(RepositoryError::not_found(format!("reservation {id}")));
    };
    Ok(notifier.send_custom(&existing, subject, message).await)
}

#[cfg(test)]
#[path = "service_tests.rs"]
mod service_tests;
