//! Shared filter contract for the derived views.

use chrono::NaiveDate;

use crate::model::{Reservation, ReservationStatus};

/// Filters applied before rendering a feed.
///
/// An empty status set means "no status filter". The location filter
/// matches the wire token case-insensitively. `upcoming_only` keeps
/// events dated on or after the given day.
#[derive(Debug, Clone, Default)]
pub struct FeedFilter {
    pub statuses: Vec<ReservationStatus>,
    pub location: Option<String>,
    pub upcoming_only: bool,
}

impl FeedFilter {
    pub fn matches(&self, reservation: &Reservation, today: NaiveDate) -> bool {
        if !self.statuses.is_empty() && !self.statuses.contains(&reservation.status) {
            return false;
        }
        if let Some(location) = self.location.as_deref() {
            if !location.is_empty()
                && !reservation.location.token().eq_ignore_ascii_case(location)
            {
                return false;
            }
        }
        if self.upcoming_only && reservation.event_date < today {
            return false;
        }
        true
    }
}
