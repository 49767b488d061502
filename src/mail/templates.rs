//! HTML email templates.
//!
//! All messages share one branded shell (colored header bar, detail
//! block, footer); the accent color and framing sentence are chosen per
//! message kind. Five kinds exist: submitted (plus the staff copy),
//! status-changed, updated, cancelled and custom.

use crate::model::{Reservation, ReservationStatus};

const DATE_FORMAT: &str = "%A, %B %-d, %Y";
const TIME_FORMAT: &str = "%H:%M";

const GREEN: &str = "#4CAF50";
const RED: &str = "#f44336";
const BLUE: &str = "#2196F3";
const ORANGE: &str = "#FF9800";
const PURPLE: &str = "#6b46c1";

/// The shared visual shell around every message.
fn wrap(accent: &str, heading: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <style>
        body {{ font-family: Arial, sans-serif; line-height: 1.6; color: #333; }}
        .container {{ max-width: 600px; margin: 0 auto; padding: 20px; }}
        .header {{ background-color: {accent}; color: white; padding: 20px; text-align: center; }}
        .content {{ padding: 20px; background-color: #f9f9f9; }}
        .details {{ background-color: white; padding: 15px; margin: 15px 0; border-left: 4px solid {accent}; }}
        .message {{ background-color: white; padding: 15px; margin: 15px 0; border-left: 4px solid {accent}; }}
        .footer {{ text-align: center; padding: 20px; color: #666; font-size: 12px; }}
        .confirmation-number {{ font-size: 24px; font-weight: bold; color: {accent}; }}
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>{heading}</h1>
        </div>
        <div class="content">
{content}
        </div>
    </div>
</body>
</html>
"#
    )
}

/// The reservation facts block repeated across the templates.
fn details_block(r: &Reservation) -> String {
    format!(
        r#"<div class="details">
    <p><strong>Confirmation Number:</strong> {code}</p>
    <p><strong>Event:</strong> {title}</p>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Time:</strong> {start} - {end}</p>
    <p><strong>Location:</strong> {location}</p>
    <p><strong>Guests:</strong> {guests}</p>
    <p><strong>Status:</strong> {status}</p>
</div>"#,
        code = r.confirmation_code,
        title = r.event_title,
        date = r.event_date.format(DATE_FORMAT),
        start = r.start_time.format(TIME_FORMAT),
        end = r.end_time.format(TIME_FORMAT),
        location = r.location.display_name(),
        guests = r.expected_guests.unwrap_or(0),
        status = r.status.display_name(),
    )
}

/// Requester confirmation for a fresh submission. Always "pending
/// review" framing, regardless of what the caller did to the record.
pub fn submitted_body(r: &Reservation, organization_name: &str) -> String {
    let content = format!(
        r#"<p>Dear {name},</p>
<p>Thank you for reaching out to us. Please consider that reservations made less than 72 hours in advance cannot always be confirmed or denied in time. If you don't receive a confirmation, you are still welcome to visit us if capacity allows!</p>
<p>This is not a confirmation, your reservation still awaits approval! Please note that we generally do not reply within 72 hours.</p>
<div class="details">
    <p><strong>Confirmation Number:</strong> <span class="confirmation-number">{code}</span></p>
    <p><strong>Event:</strong> {title}</p>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Time:</strong> {start} - {end}</p>
    <p><strong>Location:</strong> {location}</p>
    <p><strong>Expected Guests:</strong> {guests}</p>
    <p><strong>Status:</strong> <em>Pending Review</em></p>
</div>
<p>If you have any questions, please don't hesitate to contact us.</p>
<p>Best regards,<br>
{organization_name}</p>"#,
        name = r.contact_name,
        code = r.confirmation_code,
        title = r.event_title,
        date = r.event_date.format(DATE_FORMAT),
        start = r.start_time.format(TIME_FORMAT),
        end = r.end_time.format(TIME_FORMAT),
        location = r.location.display_name(),
        guests = r.expected_guests.unwrap_or(0),
    );
    wrap(GREEN, "Reservation Request Received", &content)
}

/// Staff copy of a new submission, with the full event facts including
/// the contact details.
pub fn staff_copy_body(r: &Reservation) -> String {
    let food = if r.food_required == Some(true) {
        let dietary = r
            .dietary_preference
            .map(|d| d.display_name())
            .unwrap_or("None");
        format!("<p><strong>Food Required:</strong> Yes (Dietary: {dietary})</p>")
    } else {
        String::new()
    };
    let description = match r.description.as_deref().filter(|s| !s.is_empty()) {
        Some(d) => format!("<p><strong>Description:</strong> {d}</p>"),
        None => String::new(),
    };
    let comments = match r.comments.as_deref().filter(|s| !s.is_empty()) {
        Some(c) => format!("<p><strong>Comments:</strong> {c}</p>"),
        None => String::new(),
    };

    let content = format!(
        r#"<p>A new reservation has been submitted and requires review:</p>
<div class="details">
    <p><strong>Reservation Number:</strong> {code}</p>
    <p><strong>Contact:</strong> {name}</p>
    <p><strong>Email:</strong> {email}</p>
    <p><strong>Phone:</strong> {phone}</p>
    <p><strong>Organization:</strong> {organization}</p>
    <hr>
    <p><strong>Event:</strong> {title}</p>
    <p><strong>Type:</strong> {event_type} ({organizer_type})</p>
    <p><strong>Date:</strong> {date}</p>
    <p><strong>Time:</strong> {start} - {end}</p>
    <p><strong>Location:</strong> {location}</p>
    <p><strong>Guests:</strong> {guests}</p>
    <p><strong>Payment:</strong> {payment}</p>
    {food}
    {description}
    {comments}
</div>
<p>Please review and respond to the customer as soon as possible.</p>"#,
        code = r.confirmation_code,
        name = r.contact_name,
        email = r.email,
        phone = r.phone_number.as_deref().unwrap_or("Not provided"),
        organization = r.organization_name.as_deref().unwrap_or("Not provided"),
        title = r.event_title,
        event_type = r.event_type.display_name(),
        organizer_type = r.organizer_type.display_name(),
        date = r.event_date.format(DATE_FORMAT),
        start = r.start_time.format(TIME_FORMAT),
        end = r.end_time.format(TIME_FORMAT),
        location = r.location.display_name(),
        guests = r.expected_guests.unwrap_or(0),
        payment = r.payment_option.display_name(),
    );
    wrap(BLUE, "New Reservation Request", &content)
}

/// Subject line for a status change, keyed off the *new* status.
pub fn status_change_subject(r: &Reservation) -> String {
    let prefix = match r.status {
        ReservationStatus::Confirmed => "Reservation Confirmed",
        ReservationStatus::Rejected => "Reservation Request",
        ReservationStatus::Cancelled => "Reservation Cancelled",
        ReservationStatus::Completed => "Thank You",
        _ => "Reservation Update",
    };
    format!("{prefix} - {}", r.event_title)
}

/// Body for a status change. Accent color and framing sentence depend on
/// the new status.
pub fn status_change_body(r: &Reservation, organization_name: &str) -> String {
    let (accent, message) = match r.status {
        ReservationStatus::Confirmed => (GREEN, "We're pleased to confirm your reservation!"),
        ReservationStatus::Rejected => (
            RED,
            "Unfortunately, we're unable to accommodate your reservation request at this time.",
        ),
        ReservationStatus::Cancelled => (RED, "Your reservation has been cancelled as requested."),
        ReservationStatus::Completed => (
            BLUE,
            "Thank you for choosing us! We hope you had a great event.",
        ),
        _ => (ORANGE, "Your reservation status has been updated."),
    };

    let content = format!(
        r#"<p>Dear {name},</p>
<p>{message}</p>
{details}
<p>Best regards,<br>
{organization_name}</p>"#,
        name = r.contact_name,
        details = details_block(r),
    );
    wrap(
        accent,
        &format!("Reservation {}", r.status.display_name()),
        &content,
    )
}

/// "Please review" message after a staff edit.
pub fn updated_body(r: &Reservation, organization_name: &str) -> String {
    let content = format!(
        r#"<p>Dear {name},</p>
<p>Your reservation has been updated. Please review the details below:</p>
{details}
<p>If you did not request this change or have any questions, please contact us immediately.</p>
<p>Best regards,<br>
{organization_name}</p>"#,
        name = r.contact_name,
        details = details_block(r),
    );
    wrap(ORANGE, "Reservation Updated", &content)
}

/// Sent to the requester when a reservation is removed.
pub fn cancelled_body(r: &Reservation, staff_email: &str, organization_name: &str) -> String {
    let content = format!(
        r#"<p>Dear {name},</p>
<p>Your reservation <strong>{title}</strong> (Confirmation #{code}) has been cancelled.</p>
<p>We hope to see you again in the future! If you'd like to make a new reservation, please visit our website.</p>
<p>If you have any questions, please contact us at {staff_email}.</p>
<p>Best regards,<br>
{organization_name}</p>
<div class="footer">
    <p>This is an automated message. Please do not reply to this email.</p>
</div>"#,
        name = r.contact_name,
        title = r.event_title,
        code = r.confirmation_code,
    );
    wrap(RED, "Reservation Cancelled", &content)
}

/// Operator-authored message wrapped in the branded shell. Line breaks in
/// the message become HTML breaks.
pub fn custom_body(
    r: &Reservation,
    message: &str,
    organization_name: &str,
    staff_email: &str,
) -> String {
    let html_message = message.replace('\n', "<br>");
    let content = format!(
        r#"<p>Dear {name},</p>
<div class="message">
    {html_message}
</div>
<div class="details">
    <p><strong>Regarding your reservation:</strong></p>
    <p>Event: {title}<br>
    Date: {date}<br>
    Location: {location}<br>
    Confirmation #: {code}</p>
</div>
<p>If you have any questions, please reply to this email or contact us at {staff_email}.</p>
<p>Best regards,<br>
{organization_name}</p>"#,
        name = r.contact_name,
        title = r.event_title,
        date = r.event_date.format(DATE_FORMAT),
        location = r.location.display_name(),
        code = r.confirmation_code,
    );
    wrap(PURPLE, &format!("Message from {organization_name}"), &content)
}

#[cfg(test)]
#[path = "templates_tests.rs"]
mod templates_tests;
