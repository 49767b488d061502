//! iCalendar feed builder.
//!
//! Renders reservations as an ICS document that any calendar app can
//! subscribe to (Google Calendar, Outlook, Apple Calendar). Two variants:
//! the staff feed carries contact details (email, phone), the public feed
//! does not.

use std::fmt::Write as _;

use chrono::{Local, NaiveDateTime};

use super::filter::FeedFilter;
use crate::model::{Reservation, ReservationStatus};

const TIMEZONE: &str = "Europe/Amsterdam";
const UID_DOMAIN: &str = "harrylist.hubble.cafe";
const ICS_DATE_FORMAT: &str = "%Y%m%dT%H%M%S";

/// Europe/Amsterdam with its DST rules spelled out, so clients do not
/// need their own timezone database entry. DST starts the last Sunday of
/// March and ends the last Sunday of October.
const TIMEZONE_DEFINITION: &str = "BEGIN:VTIMEZONE\r\n\
TZID:Europe/Amsterdam\r\n\
X-LIC-LOCATION:Europe/Amsterdam\r\n\
BEGIN:DAYLIGHT\r\n\
TZOFFSETFROM:+0100\r\n\
TZOFFSETTO:+0200\r\n\
TZNAME:CEST\r\n\
DTSTART:19700329T020000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=3;BYDAY=-1SU\r\n\
END:DAYLIGHT\r\n\
BEGIN:STANDARD\r\n\
TZOFFSETFROM:+0200\r\n\
TZOFFSETTO:+0100\r\n\
TZNAME:CET\r\n\
DTSTART:19701025T030000\r\n\
RRULE:FREQ=YEARLY;BYMONTH=10;BYDAY=-1SU\r\n\
END:STANDARD\r\n\
END:VTIMEZONE\r\n";

/// Confidentiality variant of a feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedMode {
    /// No email or phone; safe to hand to external partners.
    Public,
    /// Full contact details.
    Staff,
}

/// Render the calendar feed using the current wall clock.
pub fn render_feed(reservations: &[Reservation], filter: &FeedFilter, mode: FeedMode) -> String {
    render_feed_at(reservations, filter, mode, Local::now().naive_local())
}

/// Render with an explicit render time, for deterministic output. `now`
/// feeds both the DTSTAMP property and the upcoming-only cutoff.
pub fn render_feed_at(
    reservations: &[Reservation],
    filter: &FeedFilter,
    mode: FeedMode,
    now: NaiveDateTime,
) -> String {
    let today = now.date();
    let mut ics = String::new();

    let calendar_name = match mode {
        FeedMode::Staff => "The Harry List - Staff Reservations",
        FeedMode::Public => "The Harry List - Reservations",
    };

    ics.push_str("BEGIN:VCALENDAR\r\n");
    ics.push_str("VERSION:2.0\r\n");
    ics.push_str("PRODID:-//The Harry List//Reservation System//EN\r\n");
    ics.push_str("CALSCALE:GREGORIAN\r\n");
    ics.push_str("METHOD:PUBLISH\r\n");
    let _ = write!(ics, "X-WR-CALNAME:{calendar_name}\r\n");
    let _ = write!(ics, "X-WR-TIMEZONE:{TIMEZONE}\r\n");
    ics.push_str(TIMEZONE_DEFINITION);

    // Store iteration order, no re-sort.
    for reservation in reservations.iter().filter(|r| filter.matches(r, today)) {
        push_event(&mut ics, reservation, mode, now);
    }

    ics.push_str("END:VCALENDAR\r\n");
    ics
}

fn push_event(ics: &mut String, r: &Reservation, mode: FeedMode, now: NaiveDateTime) {
    ics.push_str("BEGIN:VEVENT\r\n");

    let _ = write!(ics, "UID:reservation-{}@{}\r\n", r.id, UID_DOMAIN);
    let _ = write!(ics, "DTSTAMP:{}\r\n", now.format(ICS_DATE_FORMAT));
    let _ = write!(ics, "CREATED:{}\r\n", r.created_at.format(ICS_DATE_FORMAT));
    let _ = write!(
        ics,
        "LAST-MODIFIED:{}\r\n",
        r.updated_at.format(ICS_DATE_FORMAT)
    );

    let _ = write!(
        ics,
        "DTSTART;TZID={}:{}\r\n",
        TIMEZONE,
        r.starts_at().format(ICS_DATE_FORMAT)
    );
    let _ = write!(
        ics,
        "DTEND;TZID={}:{}\r\n",
        TIMEZONE,
        r.calendar_end().format(ICS_DATE_FORMAT)
    );

    // Title: "Event Title! Pax: XX [STATUS]"
    let _ = write!(
        ics,
        "SUMMARY:{}! Pax: {} [{}]\r\n",
        escape_text(&r.event_title),
        r.expected_guests.unwrap_or(0),
        r.status.token()
    );

    let location = format_location(r);
    if !location.is_empty() {
        let _ = write!(ics, "LOCATION:{}\r\n", escape_text(&location));
    }

    let description = match mode {
        FeedMode::Staff => staff_description(r),
        FeedMode::Public => public_description(r),
    };
    let _ = write!(ics, "DESCRIPTION:{}\r\n", escape_text(&description));

    let _ = write!(ics, "STATUS:{}\r\n", calendar_status(r.status));
    let _ = write!(ics, "CATEGORIES:{}\r\n", r.location.display_name());

    ics.push_str("END:VEVENT\r\n");
}

/// Map the reservation lifecycle onto the three ICS event statuses.
fn calendar_status(status: ReservationStatus) -> &'static str {
    match status {
        ReservationStatus::Confirmed => "CONFIRMED",
        ReservationStatus::Cancelled | ReservationStatus::Rejected => "CANCELLED",
        _ => "TENTATIVE",
    }
}

/// "<venue> <seating?> - <specific area?>", trimmed.
fn format_location(r: &Reservation) -> String {
    let mut out = r.location.display_name().to_string();
    if let Some(area) = r.seating_area {
        out.push(' ');
        out.push_str(area.display_name());
    }
    if let Some(specific) = r.specific_area.as_deref().filter(|s| !s.is_empty()) {
        out.push_str(" - ");
        out.push_str(specific);
    }
    out.trim().to_string()
}

/// Description WITH confidential data (email, phone) - staff feed only.
fn staff_description(r: &Reservation) -> String {
    let mut sb = String::new();

    if let Some(description) = r.description.as_deref().filter(|s| !s.is_empty()) {
        sb.push_str(description);
        sb.push_str("\n\n");
    }

    sb.push_str("Personal Details:\n");
    let _ = writeln!(sb, "Name: {}", r.contact_name);
    if let Some(org) = r.organization_name.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Organization: {org}");
    }

    sb.push_str("\nEvent Details:\n");
    let _ = writeln!(sb, "Date: {}", r.event_date.format("%Y-%m-%d"));
    let _ = writeln!(
        sb,
        "Time: {} - {}",
        r.start_time.format("%H:%M"),
        r.end_time.format("%H:%M")
    );
    let _ = writeln!(sb, "Title: {}", r.event_title);
    let _ = writeln!(sb, "Pax: {}", r.expected_guests.unwrap_or(0));
    let _ = writeln!(sb, "Location: {}", format_location(r));
    let _ = writeln!(sb, "For: {}", r.organizer_type.display_name());
    let _ = writeln!(sb, "Event Type: {}", r.event_type.display_name());

    let _ = writeln!(sb, "\nPayment: {}", r.payment_option.display_name());
    if let Some(cost_center) = r.cost_center.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Kostenplaats: {cost_center}");
    }
    if let Some(invoice_name) = r.invoice_name.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Invoice Name: {invoice_name}");
    }
    if let Some(invoice_address) = r.invoice_address.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Invoice Address: {invoice_address}");
    }

    if r.food_required == Some(true) {
        sb.push_str("\nFood Required: Yes\n");
        if let Some(dietary) = r.dietary_preference {
            let _ = writeln!(sb, "Dietary: {}", dietary.display_name());
        }
        if let Some(notes) = r.dietary_notes.as_deref().filter(|s| !s.is_empty()) {
            let _ = writeln!(sb, "Dietary Notes: {notes}");
        }
    }

    if let Some(comments) = r.comments.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "\nComments: {comments}");
    }

    sb.push_str("\n─────────────────────────────\n");
    sb.push_str("Confidential Details:\n");
    let _ = writeln!(sb, "Email: {}", r.email);
    if let Some(phone) = r.phone_number.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Phone: {phone}");
    }

    sb.push_str("\n─────────────────────────────\n");
    let _ = writeln!(sb, "Status: {}", r.status.token());
    let _ = writeln!(sb, "Ref: {}", r.confirmation_code);
    if let Some(confirmed_by) = r.confirmed_by.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Confirmed by: {confirmed_by}");
    }

    sb
}

/// Description WITHOUT confidential data - for public/external use.
fn public_description(r: &Reservation) -> String {
    let mut sb = String::new();

    if let Some(description) = r.description.as_deref().filter(|s| !s.is_empty()) {
        sb.push_str(description);
        sb.push_str("\n\n");
    }

    let _ = writeln!(sb, "Contact: {}", r.contact_name);
    if let Some(org) = r.organization_name.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "Organization: {org}");
    }

    sb.push_str("\nEvent Details:\n");
    let _ = writeln!(sb, "Date: {}", r.event_date.format("%Y-%m-%d"));
    let _ = writeln!(
        sb,
        "Time: {} - {}",
        r.start_time.format("%H:%M"),
        r.end_time.format("%H:%M")
    );
    let _ = writeln!(sb, "Pax: {}", r.expected_guests.unwrap_or(0));
    let _ = writeln!(sb, "Location: {}", format_location(r));
    let _ = writeln!(sb, "For: {}", r.organizer_type.display_name());
    let _ = writeln!(sb, "Event Type: {}", r.event_type.display_name());

    let _ = writeln!(sb, "\nPayment: {}", r.payment_option.display_name());

    if r.food_required == Some(true) {
        sb.push_str("\nFood Required: Yes\n");
        if let Some(dietary) = r.dietary_preference {
            let _ = writeln!(sb, "Dietary: {}", dietary.display_name());
        }
    }

    if let Some(comments) = r.comments.as_deref().filter(|s| !s.is_empty()) {
        let _ = writeln!(sb, "\nComments: {comments}");
    }

    sb.push_str("\n---\n");
    let _ = writeln!(sb, "Status: {}", r.status.token());
    let _ = writeln!(sb, "Ref: {}", r.confirmation_code);

    sb.push_str("\n(Contact details available in admin portal)");

    sb
}

/// Escape per the iCalendar text-value grammar. CRLF/CR are normalized to
/// LF before the newline escape.
fn escape_text(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace(',', "\\,")
        .replace(';', "\\;")
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\n', "\\n")
}

#[cfg(test)]
#[path = "ics_tests.rs"]
mod ics_tests;
