//! Wire types for the REST API.
//!
//! The entity stays internal; everything crossing the HTTP boundary goes
//! through these camelCase DTOs. `ReservationForm` carries the validation
//! rules for submissions and staff writes; status, timestamps and the
//! confirmation code can never be set through it.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::model::{
    BarLocation, DietaryPreference, EventType, OrganizerType, PaymentOption, Reservation,
    ReservationDraft, ReservationStatus, SeatingArea,
};

/// Full reservation view returned to staff.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationDto {
    pub id: i64,
    pub confirmation_code: String,

    pub contact_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub organization_name: Option<String>,

    pub event_title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub organizer_type: OrganizerType,
    pub expected_guests: Option<i32>,

    pub event_date: NaiveDate,
    #[serde(with = "crate::model::timefmt::hm_time")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::model::timefmt::hm_time")]
    pub end_time: NaiveTime,
    pub setup_time_minutes: Option<i32>,

    pub location: BarLocation,
    pub seating_area: Option<SeatingArea>,
    pub specific_area: Option<String>,

    pub payment_option: PaymentOption,
    pub cost_center: Option<String>,
    pub invoice_name: Option<String>,
    pub invoice_address: Option<String>,
    pub vat_number: Option<String>,

    pub food_required: Option<bool>,
    pub dietary_preference: Option<DietaryPreference>,
    pub dietary_notes: Option<String>,
    pub drinks_included: Option<bool>,
    pub budget_per_person: Option<f64>,

    pub comments: Option<String>,
    pub terms_accepted: Option<bool>,
    pub referral_source: Option<String>,

    pub status: ReservationStatus,
    pub internal_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub confirmed_by: Option<String>,
}

impl From<&Reservation> for ReservationDto {
    fn from(r: &Reservation) -> Self {
        Self {
            id: r.id,
            confirmation_code: r.confirmation_code.clone(),
            contact_name: r.contact_name.clone(),
            email: r.email.clone(),
            phone_number: r.phone_number.clone(),
            organization_name: r.organization_name.clone(),
            event_title: r.event_title.clone(),
            description: r.description.clone(),
            event_type: r.event_type,
            organizer_type: r.organizer_type,
            expected_guests: r.expected_guests,
            event_date: r.event_date,
            start_time: r.start_time,
            end_time: r.end_time,
            setup_time_minutes: r.setup_time_minutes,
            location: r.location,
            seating_area: r.seating_area,
            specific_area: r.specific_area.clone(),
            payment_option: r.payment_option,
            cost_center: r.cost_center.clone(),
            invoice_name: r.invoice_name.clone(),
            invoice_address: r.invoice_address.clone(),
            vat_number: r.vat_number.clone(),
            food_required: r.food_required,
            dietary_preference: r.dietary_preference,
            dietary_notes: r.dietary_notes.clone(),
            drinks_included: r.drinks_included,
            budget_per_person: r.budget_per_person,
            comments: r.comments.clone(),
            terms_accepted: r.terms_accepted,
            referral_source: r.referral_source.clone(),
            status: r.status,
            internal_notes: r.internal_notes.clone(),
            created_at: r.created_at,
            updated_at: r.updated_at,
            confirmed_by: r.confirmed_by.clone(),
        }
    }
}

/// Validation-bearing form for submissions and staff writes.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub contact_name: String,
    #[validate(email(message = "Must be a valid email address"))]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub organization_name: Option<String>,

    #[validate(length(min = 1, message = "Event title is required"))]
    pub event_title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub event_type: EventType,
    pub organizer_type: OrganizerType,
    #[validate(range(min = 1, message = "Number of guests must be positive"))]
    #[serde(default)]
    pub expected_guests: Option<i32>,

    pub event_date: NaiveDate,
    #[serde(with = "crate::model::timefmt::hm_time")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::model::timefmt::hm_time")]
    pub end_time: NaiveTime,
    #[serde(default)]
    pub setup_time_minutes: Option<i32>,

    pub location: BarLocation,
    #[serde(default)]
    pub seating_area: Option<SeatingArea>,
    #[serde(default)]
    pub specific_area: Option<String>,

    pub payment_option: PaymentOption,
    #[serde(default)]
    pub cost_center: Option<String>,
    #[serde(default)]
    pub invoice_name: Option<String>,
    #[serde(default)]
    pub invoice_address: Option<String>,
    #[serde(default)]
    pub vat_number: Option<String>,

    #[serde(default)]
    pub food_required: Option<bool>,
    #[serde(default)]
    pub dietary_preference: Option<DietaryPreference>,
    #[serde(default)]
    pub dietary_notes: Option<String>,
    #[serde(default)]
    pub drinks_included: Option<bool>,
    #[serde(default)]
    pub budget_per_person: Option<f64>,

    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub terms_accepted: Option<bool>,
    #[serde(default)]
    pub referral_source: Option<String>,
}

impl ReservationForm {
    pub fn into_draft(self) -> ReservationDraft {
        ReservationDraft {
            contact_name: self.contact_name,
            email: self.email,
            phone_number: self.phone_number,
            organization_name: self.organization_name,
            event_title: self.event_title,
            description: self.description,
            event_type: self.event_type,
            organizer_type: self.organizer_type,
            expected_guests: self.expected_guests,
            event_date: self.event_date,
            start_time: self.start_time,
            end_time: self.end_time,
            setup_time_minutes: self.setup_time_minutes,
            location: self.location,
            seating_area: self.seating_area,
            specific_area: self.specific_area,
            payment_option: self.payment_option,
            cost_center: self.cost_center,
            invoice_name: self.invoice_name,
            invoice_address: self.invoice_address,
            vat_number: self.vat_number,
            food_required: self.food_required,
            dietary_preference: self.dietary_preference,
            dietary_notes: self.dietary_notes,
            drinks_included: self.drinks_included,
            budget_per_person: self.budget_per_person,
            comments: self.comments,
            terms_accepted: self.terms_accepted,
            referral_source: self.referral_source,
        }
    }
}

/// Reduced confirmation payload for public submissions. Never echoes
/// internal fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionResponse {
    pub confirmation_code: String,
    pub event_title: String,
    pub contact_name: String,
    pub email: String,
    pub message: String,
}

/// One selectable value for the reservation forms.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionItem {
    pub value: String,
    pub label: String,
}

/// Request body for the custom-email endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct EmailRequest {
    pub subject: String,
    pub message: String,
}

/// Tri-state result of the custom-email endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmailSendResponse {
    /// "sent", "disabled" or "error"
    pub status: String,
    pub message: String,
}

/// One subscribable calendar feed, as listed for admins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarFeedInfo {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Fully constructed URL with the token embedded, or `null` when the
    /// token is not configured.
    pub url: Option<String>,
    pub has_token: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterInfo {
    pub name: String,
    pub description: String,
    pub example: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarFeedsResponse {
    pub feeds: Vec<CalendarFeedInfo>,
    pub parameters: Vec<ParameterInfo>,
}

/// Health check payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
}
