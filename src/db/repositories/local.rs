//! In-memory repository implementation.
//!
//! Keeps all rows in a map guarded by a `RwLock`. Used by the test suite
//! and for local development without a database; the semantics (id
//! assignment, code generation, timestamping) match the Postgres
//! implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use parking_lot::RwLock;

use crate::db::error::{RepositoryError, RepositoryResult};
use crate::db::repository::ReservationRepository;
use crate::model::{generate_confirmation_code, Reservation, ReservationDraft, ReservationStatus};

/// How many times a colliding confirmation code is re-rolled before the
/// insert is given up as a conflict.
pub(crate) const CODE_RETRIES: usize = 5;

#[derive(Default)]
struct LocalData {
    rows: BTreeMap<i64, Reservation>,
    next_id: i64,
}

/// In-memory reservation store.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

impl LocalRepository {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored reservations.
    pub fn len(&self) -> usize {
        self.data.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn now() -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn unique_code(rows: &BTreeMap<i64, Reservation>) -> RepositoryResult<String> {
        for _ in 0..CODE_RETRIES {
            let code = generate_confirmation_code();
            if !rows.values().any(|r| r.confirmation_code == code) {
                return Ok(code);
            }
        }
        Err(RepositoryError::conflict(
            "could not allocate a unique confirmation code",
        ))
    }
}

#[async_trait]
impl ReservationRepository for LocalRepository {
    async fn list(&self) -> RepositoryResult<Vec<Reservation>> {
        Ok(self.data.read().rows.values().cloned().collect())
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Reservation>> {
        Ok(self.data.read().rows.get(&id).cloned())
    }

    async fn insert(&self, draft: ReservationDraft) -> RepositoryResult<Reservation> {
        let mut data = self.data.write();
        data.next_id += 1;
        let id = data.next_id;
        let code = Self::unique_code(&data.rows)?;
        let now = Self::now();

        let reservation = Reservation {
            id,
            confirmation_code: code,
            contact_name: draft.contact_name,
            email: draft.email,
            phone_number: draft.phone_number,
            organization_name: draft.organization_name,
            event_title: draft.event_title,
            description: draft.description,
            event_type: draft.event_type,
            organizer_type: draft.organizer_type,
            expected_guests: draft.expected_guests,
            event_date: draft.event_date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            setup_time_minutes: draft.setup_time_minutes,
            location: draft.location,
            seating_area: draft.seating_area,
            specific_area: draft.specific_area,
            payment_option: draft.payment_option,
            cost_center: draft.cost_center,
            invoice_name: draft.invoice_name,
            invoice_address: draft.invoice_address,
            vat_number: draft.vat_number,
            food_required: draft.food_required,
            dietary_preference: draft.dietary_preference,
            dietary_notes: draft.dietary_notes,
            drinks_included: draft.drinks_included,
            budget_per_person: draft.budget_per_person,
            comments: draft.comments,
            terms_accepted: draft.terms_accepted,
            referral_source: draft.referral_source,
            status: ReservationStatus::Pending,
            internal_notes: None,
            created_at: now,
            updated_at: now,
            confirmed_by: None,
        };
        data.rows.insert(id, reservation.clone());
        Ok(reservation)
    }

    async fn update(&self, id: i64, draft: ReservationDraft) -> RepositoryResult<Reservation> {
        let mut data = self.data.write();
        let row = data
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?;
        draft.apply_to(row);
        row.updated_at = Self::now();
        Ok(row.clone())
    }

    async fn set_status(
        &self,
        id: i64,
        status: ReservationStatus,
        confirmed_by: Option<String>,
    ) -> RepositoryResult<Reservation> {
        let mut data = self.data.write();
        let row = data
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?;
        row.status = status;
        if status == ReservationStatus::Confirmed {
            if let Some(name) = confirmed_by {
                row.confirmed_by = Some(name);
            }
        }
        row.updated_at = Self::now();
        Ok(row.clone())
    }

    async fn set_internal_notes(&self, id: i64, notes: String) -> RepositoryResult<Reservation> {
        let mut data = self.data.write();
        let row = data
            .rows
            .get_mut(&id)
            .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))?;
        row.internal_notes = Some(notes);
        row.updated_at = Self::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: i64) -> RepositoryResult<()> {
        let mut data = self.data.write();
        data.rows
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::not_found(format!("reservation {id}")))
    }

    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }
}

#[cfg(test)]
#[path = "local_tests.rs"]
mod local_tests;
