//! Outbound email.
//!
//! A [`Mailer`] is the transport; [`Notifier`] decides what to send and
//! isolates the rest of the system from delivery failures. Lifecycle
//! notifications are fire-and-forget: they run on a spawned task after the
//! store mutation has committed, and a failure is logged and swallowed.

pub mod graph;
pub mod templates;

use std::sync::Arc;

use async_trait::async_trait;

use crate::model::{Reservation, ReservationStatus};

/// Error from the mail transport.
#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("mail transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("authentication against the mail provider failed: {0}")]
    Auth(String),

    #[error("mail provider rejected the message: {0}")]
    Rejected(String),
}

/// A transport that can deliver one HTML message.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), MailError>;
}

/// Outcome of an awaited send, surfaced by the custom-email endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Sent,
    /// No transport configured; the send was a silent no-op.
    Disabled,
    Error(String),
}

/// Dispatches reservation notifications.
///
/// Holds an optional transport: when none is configured every lifecycle
/// notification is a no-op and the custom-email endpoint reports
/// `Disabled`.
#[derive(Clone)]
pub struct Notifier {
    mailer: Option<Arc<dyn Mailer>>,
    organization_name: String,
    staff_email: String,
}

impl Notifier {
    pub fn new(
        mailer: Option<Arc<dyn Mailer>>,
        organization_name: impl Into<String>,
        staff_email: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            organization_name: organization_name.into(),
            staff_email: staff_email.into(),
        }
    }

    /// A notifier without a transport; every send is a no-op.
    pub fn disabled() -> Self {
        Self::new(None, "", "")
    }

    pub fn is_disabled(&self) -> bool {
        self.mailer.is_none()
    }

    /// Requester confirmation plus the staff copy for a new submission.
    pub fn reservation_submitted(&self, reservation: &Reservation) {
        let subject = format!("Reservation Request Received - {}", reservation.event_title);
        let body = templates::submitted_body(reservation, &self.organization_name);
        self.dispatch(reservation.email.clone(), subject, body);

        if !self.staff_email.is_empty() {
            let subject = format!(
                "[New Reservation] {} - {}",
                reservation.event_title, reservation.contact_name
            );
            let body = templates::staff_copy_body(reservation);
            self.dispatch(self.staff_email.clone(), subject, body);
        }
    }

    pub fn status_changed(&self, reservation: &Reservation, old_status: ReservationStatus) {
        tracing::info!(
            id = reservation.id,
            from = %old_status,
            to = %reservation.status,
            "queueing status change notification"
        );
        let subject = templates::status_change_subject(reservation);
        let body = templates::status_change_body(reservation, &self.organization_name);
        self.dispatch(reservation.email.clone(), subject, body);
    }

    pub fn reservation_updated(&self, reservation: &Reservation) {
        let subject = format!("Reservation Updated - {}", reservation.event_title);
        let body = templates::updated_body(reservation, &self.organization_name);
        self.dispatch(reservation.email.clone(), subject, body);
    }

    pub fn reservation_cancelled(&self, reservation: &Reservation) {
        let subject = format!("Reservation Cancelled - {}", reservation.event_title);
        let body =
            templates::cancelled_body(reservation, &self.staff_email, &self.organization_name);
        self.dispatch(reservation.email.clone(), subject, body);
    }

    /// Awaited send used by the custom-email endpoint; unlike the
    /// lifecycle notifications the caller needs the outcome.
    pub async fn send_custom(
        &self,
        reservation: &Reservation,
        subject: &str,
        message: &str,
    ) -> SendOutcome {
        let Some(mailer) = &self.mailer else {
            return SendOutcome::Disabled;
        };
        let body = templates::custom_body(
            reservation,
            message,
            &self.organization_name,
            &self.staff_email,
        );
        match mailer.send(&reservation.email, subject, &body).await {
            Ok(()) => SendOutcome::Sent,
            Err(e) => {
                tracing::error!(id = reservation.id, error = %e, "custom email failed");
                SendOutcome::Error(e.to_string())
            }
        }
    }

    /// Fire-and-forget: spawn the send and log the outcome. Never blocks
    /// and never propagates an error to the caller.
    fn dispatch(&self, to: String, subject: String, body: String) {
        let Some(mailer) = self.mailer.clone() else {
            return;
        };
        tokio::spawn(async move {
            if let Err(e) = mailer.send(&to, &subject, &body).await {
                tracing::error!(%to, %subject, error = %e, "email delivery failed");
            }
        });
    }
}
