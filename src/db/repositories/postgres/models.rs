//! Row types mapping between Diesel and the domain entity.
//!
//! Enum columns are stored as their wire tokens; parsing back is
//! infallible for rows written by this crate, so a parse failure is
//! reported as an internal error.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use diesel::prelude::*;

use super::schema::reservations;
use crate::db::error::{RepositoryError, RepositoryResult};
use crate::model::{LabeledEnum, Reservation, ReservationDraft, ReservationStatus};

#[derive(Debug, Queryable)]
pub struct ReservationRow {
    pub id: i64,
    pub confirmation_code: String,
    pub contact_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub organization_name: Option<String>,
    pub event_title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub organizer_type: String,
    pub expected_guests: Option<i32>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub setup_time_minutes: Option<i32>,
    pub location: String,
    pub seating_area: Option<String>,
    pub specific_area: Option<String>,
    pub payment_option: String,
    pub cost_center: Option<String>,
    pub invoice_name: Option<String>,
    pub invoice_address: Option<String>,
    pub vat_number: Option<String>,
    pub food_required: Option<bool>,
    pub dietary_preference: Option<String>,
    pub dietary_notes: Option<String>,
    pub drinks_included: Option<bool>,
    pub budget_per_person: Option<f64>,
    pub comments: Option<String>,
    pub terms_accepted: Option<bool>,
    pub referral_source: Option<String>,
    pub status: String,
    pub internal_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub confirmed_by: Option<String>,
}

fn parse_column<T>(column: &str, value: &str) -> RepositoryResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| RepositoryError::internal(format!("bad {column} column: {e}")))
}

fn parse_opt_column<T>(column: &str, value: Option<String>) -> RepositoryResult<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.map(|v| parse_column(column, &v)).transpose()
}

impl ReservationRow {
    pub fn into_entity(self) -> RepositoryResult<Reservation> {
        Ok(Reservation {
            id: self.id,
            confirmation_code: self.confirmation_code,
            contact_name: self.contact_name,
            email: self.email,
            phone_number: self.phone_number,
            organization_name: self.organization_name,
            event_title: self.event_title,
            description: self.description,
            event_type: parse_column("event_type", &self.event_type)?,
            organizer_type: parse_column("organizer_type", &self.organizer_type)?,
            expected_guests: self.expected_guests,
            event_date: self.event_date,
            start_time: self.start_time,
            end_time: self.end_time,
            setup_time_minutes: self.setup_time_minutes,
            location: parse_column("location", &self.location)?,
            seating_area: parse_opt_column("seating_area", self.seating_area)?,
            specific_area: self.specific_area,
            payment_option: parse_column("payment_option", &self.payment_option)?,
            cost_center: self.cost_center,
            invoice_name: self.invoice_name,
            invoice_address: self.invoice_address,
            vat_number: self.vat_number,
            food_required: self.food_required,
            dietary_preference: parse_opt_column("dietary_preference", self.dietary_preference)?,
            dietary_notes: self.dietary_notes,
            drinks_included: self.drinks_included,
            budget_per_person: self.budget_per_person,
            comments: self.comments,
            terms_accepted: self.terms_accepted,
            referral_source: self.referral_source,
            status: parse_column("status", &self.status)?,
            internal_notes: self.internal_notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
            confirmed_by: self.confirmed_by,
        })
    }
}

/// Insertable row for a new reservation; the store-owned columns are
/// filled in by the caller.
#[derive(Debug, Insertable)]
#[diesel(table_name = reservations)]
pub struct NewReservationRow {
    pub confirmation_code: String,
    pub contact_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub organization_name: Option<String>,
    pub event_title: String,
    pub description: Option<String>,
    pub event_type: String,
    pub organizer_type: String,
    pub expected_guests: Option<i32>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub setup_time_minutes: Option<i32>,
    pub location: String,
    pub seating_area: Option<String>,
    pub specific_area: Option<String>,
    pub payment_option: String,
    pub cost_center: Option<String>,
    pub invoice_name: Option<String>,
    pub invoice_address: Option<String>,
    pub vat_number: Option<String>,
    pub food_required: Option<bool>,
    pub dietary_preference: Option<String>,
    pub dietary_notes: Option<String>,
    pub drinks_included: Option<bool>,
    pub budget_per_person: Option<f64>,
    pub comments: Option<String>,
    pub terms_accepted: Option<bool>,
    pub referral_source: Option<String>,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl NewReservationRow {
    pub fn from_draft(
        draft: &ReservationDraft,
        confirmation_code: String,
        now: NaiveDateTime,
    ) -> Self {
        Self {
            confirmation_code,
            contact_name: draft.contact_name.clone(),
            email: draft.email.clone(),
            phone_number: draft.phone_number.clone(),
            organization_name: draft.organization_name.clone(),
            event_title: draft.event_title.clone(),
            description: draft.description.clone(),
            event_type: draft.event_type.token().to_string(),
            organizer_type: draft.organizer_type.token().to_string(),
            expected_guests: draft.expected_guests,
            event_date: draft.event_date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            setup_time_minutes: draft.setup_time_minutes,
            location: draft.location.token().to_string(),
            seating_area: draft.seating_area.map(|s| s.token().to_string()),
            specific_area: draft.specific_area.clone(),
            payment_option: draft.payment_option.token().to_string(),
            cost_center: draft.cost_center.clone(),
            invoice_name: draft.invoice_name.clone(),
            invoice_address: draft.invoice_address.clone(),
            vat_number: draft.vat_number.clone(),
            food_required: draft.food_required,
            dietary_preference: draft.dietary_preference.map(|d| d.token().to_string()),
            dietary_notes: draft.dietary_notes.clone(),
            drinks_included: draft.drinks_included,
            budget_per_person: draft.budget_per_person,
            comments: draft.comments.clone(),
            terms_accepted: draft.terms_accepted,
            referral_source: draft.referral_source.clone(),
            status: ReservationStatus::Pending.token().to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Changeset for a full staff update; status, creation timestamp and
/// confirmation code are deliberately absent.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = reservations)]
pub struct UpdateReservationRow {
    pub contact_name: String,
    pub email: String,
    pub phone_number: Option<Option<String>>,
    pub organization_name: Option<Option<String>>,
    pub event_title: String,
    pub description: Option<Option<String>>,
    pub event_type: String,
    pub organizer_type: String,
    pub expected_guests: Option<Option<i32>>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub setup_time_minutes: Option<Option<i32>>,
    pub location: String,
    pub seating_area: Option<Option<String>>,
    pub specific_area: Option<Option<String>>,
    pub payment_option: String,
    pub cost_center: Option<Option<String>>,
    pub invoice_name: Option<Option<String>>,
    pub invoice_address: Option<Option<String>>,
    pub vat_number: Option<Option<String>>,
    pub food_required: Option<Option<bool>>,
    pub dietary_preference: Option<Option<String>>,
    pub dietary_notes: Option<Option<String>>,
    pub drinks_included: Option<Option<bool>>,
    pub budget_per_person: Option<Option<f64>>,
    pub comments: Option<Option<String>>,
    pub terms_accepted: Option<Option<bool>>,
    pub referral_source: Option<Option<String>>,
    pub updated_at: NaiveDateTime,
}

impl UpdateReservationRow {
    pub fn from_draft(draft: &ReservationDraft, now: NaiveDateTime) -> Self {
        Self {
            contact_name: draft.contact_name.clone(),
            email: draft.email.clone(),
            phone_number: Some(draft.phone_number.clone()),
            organization_name: Some(draft.organization_name.clone()),
            event_title: draft.event_title.clone(),
            description: Some(draft.description.clone()),
            event_type: draft.event_type.token().to_string(),
            organizer_type: draft.organizer_type.token().to_string(),
            expected_guests: Some(draft.expected_guests),
            event_date: draft.event_date,
            start_time: draft.start_time,
            end_time: draft.end_time,
            setup_time_minutes: Some(draft.setup_time_minutes),
            location: draft.location.token().to_string(),
            seating_area: Some(draft.seating_area.map(|s| s.token().to_string())),
            specific_area: Some(draft.specific_area.clone()),
            payment_option: draft.payment_option.token().to_string(),
            cost_center: Some(draft.cost_center.clone()),
            invoice_name: Some(draft.invoice_name.clone()),
            invoice_address: Some(draft.invoice_address.clone()),
            vat_number: Some(draft.vat_number.clone()),
            food_required: Some(draft.food_required),
            dietary_preference: Some(draft.dietary_preference.map(|d| d.token().to_string())),
            dietary_notes: Some(draft.dietary_notes.clone()),
            drinks_included: Some(draft.drinks_included),
            budget_per_person: Some(draft.budget_per_person),
            comments: Some(draft.comments.clone()),
            terms_accepted: Some(draft.terms_accepted),
            referral_source: Some(draft.referral_source.clone()),
            updated_at: now,
        }
    }
}
