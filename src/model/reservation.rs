//! The reservation entity and the draft used on the store-write path.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::enums::{
    BarLocation, DietaryPreference, EventType, OrganizerType, PaymentOption, ReservationStatus,
    SeatingArea,
};

/// A stored reservation.
///
/// Identity and lifecycle columns (`id`, `confirmation_code`, `status`,
/// `created_at`, `updated_at`) are owned by the store: they are assigned on
/// insert and cannot be set through a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    pub id: i64,
    /// Public-facing 6-character reference, distinct from the internal id.
    pub confirmation_code: String,

    // Contact
    pub contact_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub organization_name: Option<String>,

    // Event
    pub event_title: String,
    pub description: Option<String>,
    pub event_type: EventType,
    pub organizer_type: OrganizerType,
    pub expected_guests: Option<i32>,

    // Date and time
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub setup_time_minutes: Option<i32>,

    // Location
    pub location: BarLocation,
    pub seating_area: Option<SeatingArea>,
    pub specific_area: Option<String>,

    // Payment
    pub payment_option: PaymentOption,
    pub cost_center: Option<String>,
    pub invoice_name: Option<String>,
    pub invoice_address: Option<String>,
    pub vat_number: Option<String>,

    // Food and drinks
    pub food_required: Option<bool>,
    pub dietary_preference: Option<DietaryPreference>,
    pub dietary_notes: Option<String>,
    pub drinks_included: Option<bool>,
    pub budget_per_person: Option<f64>,

    // Additional
    pub comments: Option<String>,
    pub terms_accepted: Option<bool>,
    pub referral_source: Option<String>,

    // Lifecycle
    pub status: ReservationStatus,
    /// Staff-only notes, never exposed through public surfaces.
    pub internal_notes: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Staff member who confirmed the reservation.
    pub confirmed_by: Option<String>,
}

impl Reservation {
    /// Start of the event as a date-time.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.event_date.and_time(self.start_time)
    }

    /// Calendar end of the event. An end time numerically before the start
    /// time represents an overnight span ending the next day.
    pub fn calendar_end(&self) -> NaiveDateTime {
        let end = self.event_date.and_time(self.end_time);
        if self.end_time < self.start_time {
            end + Duration::days(1)
        } else {
            end
        }
    }
}

/// Form-supplied fields of a reservation, before the store assigns the
/// identity and lifecycle columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationDraft {
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
    pub start_time: NaiveTime,
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
}

impl ReservationDraft {
    /// Copy the draft fields over an existing reservation, leaving the
    /// store-owned columns untouched.
    pub fn apply_to(self, existing: &mut Reservation) {
        existing.contact_name = self.contact_name;
        existing.email = self.email;
        existing.phone_number = self.phone_number;
        existing.organization_name = self.organization_name;
        existing.event_title = self.event_title;
        existing.description = self.description;
        existing.event_type = self.event_type;
        existing.organizer_type = self.organizer_type;
        existing.expected_guests = self.expected_guests;
        existing.event_date = self.event_date;
        existing.start_time = self.start_time;
        existing.end_time = self.end_time;
        existing.setup_time_minutes = self.setup_time_minutes;
        existing.location = self.location;
        existing.seating_area = self.seating_area;
        existing.specific_area = self.specific_area;
        existing.payment_option = self.payment_option;
        existing.cost_center = self.cost_center;
        existing.invoice_name = self.invoice_name;
        existing.invoice_address = self.invoice_address;
        existing.vat_number = self.vat_number;
        existing.food_required = self.food_required;
        existing.dietary_preference = self.dietary_preference;
        existing.dietary_notes = self.dietary_notes;
        existing.drinks_included = self.drinks_included;
        existing.budget_per_person = self.budget_per_person;
        existing.comments = self.comments;
        existing.terms_accepted = self.terms_accepted;
        existing.referral_source = self.referral_source;
    }
}
