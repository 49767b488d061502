//! Shared fixtures for unit tests.

use chrono::{NaiveDate, NaiveTime};

use super::*;

pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A complete, valid draft for "Annual Borrel" at Hubble; tests tweak the
/// fields they care about.
pub fn draft(title: &str) -> ReservationDraft {
    ReservationDraft {
        contact_name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        phone_number: None,
        organization_name: None,
        event_title: title.to_string(),
        description: None,
        event_type: EventType::Borrel,
        organizer_type: OrganizerType::Association,
        expected_guests: Some(50),
        event_date: date(2026, 3, 15),
        start_time: time(16, 0),
        end_time: time(22, 0),
        setup_time_minutes: None,
        location: BarLocation::Hubble,
        seating_area: None,
        specific_area: None,
        payment_option: PaymentOption::Individual,
        cost_center: None,
        invoice_name: None,
        invoice_address: None,
        vat_number: None,
        food_required: None,
        dietary_preference: None,
        dietary_notes: None,
        drinks_included: None,
        budget_per_person: None,
        comments: None,
        terms_accepted: Some(true),
        referral_source: None,
    }
}

/// A stored reservation derived from [`draft`].
pub fn reservation(id: i64, title: &str) -> Reservation {
    let d = draft(title);
    let created = date(2026, 3, 1).and_time(time(10, 0));
    Reservation {
        id,
        confirmation_code: "A3X7K9".to_string(),
        contact_name: d.contact_name,
        email: d.email,
        phone_number: d.phone_number,
        organization_name: d.organization_name,
        event_title: d.event_title,
        description: d.description,
        event_type: d.event_type,
        organizer_type: d.organizer_type,
        expected_guests: d.expected_guests,
        event_date: d.event_date,
        start_time: d.start_time,
        end_time: d.end_time,
        setup_time_minutes: d.setup_time_minutes,
        location: d.location,
        seating_area: d.seating_area,
        specific_area: d.specific_area,
        payment_option: d.payment_option,
        cost_center: d.cost_center,
        invoice_name: d.invoice_name,
        invoice_address: d.invoice_address,
        vat_number: d.vat_number,
        food_required: d.food_required,
        dietary_preference: d.dietary_preference,
        dietary_notes: d.dietary_notes,
        drinks_included: d.drinks_included,
        budget_per_person: d.budget_per_person,
        comments: d.comments,
        terms_accepted: d.terms_accepted,
        referral_source: d.referral_source,
        status: ReservationStatus::Pending,
        internal_notes: None,
        created_at: created,
        updated_at: created,
        confirmed_by: None,
    }
}
