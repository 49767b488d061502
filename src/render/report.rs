//! Daily PDF report builder.
//!
//! One A4 page per reservation for a given date and venue, with a
//! venue-branded header, a two-column detail card and a summary line. The
//! staff print this at opening time, so the layout favours large print
//! over density.

use chrono::{Local, NaiveDate};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfLayerReference, Point, Rgb,
};

use super::RenderError;
use crate::model::{BarLocation, Reservation, ReservationStatus};

const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN: f64 = 20.0;
const LINE_STEP: f64 = 5.5;

const DATE_FORMAT: &str = "%A, %-d %B %Y";
const TIME_FORMAT: &str = "%H:%M";

/// Venue branding: (primary, accent) color pair.
fn venue_colors(location: BarLocation) -> (Color, Color) {
    match location {
        BarLocation::Hubble => (rgb(15, 77, 100), rgb(189, 232, 236)),
        BarLocation::Meteor => (rgb(5, 56, 38), rgb(155, 141, 111)),
    }
}

fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb(Rgb::new(
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        None,
    ))
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
}

/// Generate the daily report for `date` at `location`.
///
/// Selects matching reservations (optionally only confirmed ones), sorted
/// ascending by start time. A date with no matches still yields a
/// well-formed document with an explicit "no reservations" page.
pub fn generate_daily_report(
    reservations: &[Reservation],
    date: NaiveDate,
    location: BarLocation,
    confirmed_only: bool,
) -> Result<Vec<u8>, RenderError> {
    let mut selected: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.event_date == date && r.location == location)
        .filter(|r| !confirmed_only || r.status == ReservationStatus::Confirmed)
        .collect();
    selected.sort_by_key(|r| r.start_time);

    let (primary, accent) = venue_colors(location);
    let venue_name = location.display_name();

    let (doc, first_page, first_layer) = PdfDocument::new(
        format!("Reservations {} {}", venue_name, date.format("%Y-%m-%d")),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let fonts = Fonts {
        regular: doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
        bold: doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| RenderError::Pdf(e.to_string()))?,
    };

    let layer = doc.get_page(first_page).get_layer(first_layer);

    // Document header on the first page.
    layer.set_fill_color(primary.clone());
    centered_text(&layer, venue_name, 24.0, 272.0, &fonts.bold);
    layer.set_fill_color(rgb(64, 64, 64));
    centered_text(
        &layer,
        &format!("Reservations for {}", date.format(DATE_FORMAT)),
        14.0,
        262.0,
        &fonts.regular,
    );

    let total_guests: i64 = selected
        .iter()
        .map(|r| i64::from(r.expected_guests.unwrap_or(0)))
        .sum();
    layer.set_fill_color(rgb(128, 128, 128));
    centered_text(
        &layer,
        &format!(
            "Total reservations: {} | Total expected guests: {}",
            selected.len(),
            total_guests
        ),
        9.0,
        254.0,
        &fonts.regular,
    );

    let mut last_layer = layer;
    if selected.is_empty() {
        last_layer.set_fill_color(rgb(0, 0, 0));
        centered_text(
            &last_layer,
            "No reservations for this date.",
            10.0,
            220.0,
            &fonts.regular,
        );
    } else {
        let total = selected.len();
        for (index, reservation) in selected.iter().enumerate() {
            let (layer, card_top) = if index == 0 {
                (last_layer, 240.0)
            } else {
                // Each further reservation starts a fresh page with a
                // compact repeated header.
                let (page, layer_index) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                let layer = doc.get_page(page).get_layer(layer_index);
                layer.set_fill_color(rgb(64, 64, 64));
                centered_text(
                    &layer,
                    &format!("{} - {}", venue_name, date.format(DATE_FORMAT)),
                    14.0,
                    272.0,
                    &fonts.regular,
                );
                (layer, 258.0)
            };
            draw_reservation_card(
                &layer,
                &fonts,
                reservation,
                index + 1,
                total,
                card_top,
                &primary,
                &accent,
            );
            last_layer = layer;
        }
    }

    // Footer on the last page.
    last_layer.set_fill_color(rgb(128, 128, 128));
    centered_text(
        &last_layer,
        &format!(
            "Generated on {} | The Harry List",
            Local::now().date_naive().format(DATE_FORMAT)
        ),
        8.0,
        15.0,
        &fonts.regular,
    );

    doc.save_to_bytes().map_err(|e| RenderError::Pdf(e.to_string()))
}

#[allow(clippy::too_many_arguments)]
fn draw_reservation_card(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    r: &Reservation,
    number: usize,
    total: usize,
    top: f64,
    primary: &Color,
    accent: &Color,
) {
    let width = PAGE_WIDTH - 2.0 * MARGIN;

    // Colored header bar.
    layer.set_fill_color(primary.clone());
    filled_rect(layer, MARGIN, top - 12.0, width, 12.0);
    layer.set_fill_color(rgb(255, 255, 255));
    let header = format!(
        "Reservation {} of {} | {}  \u{2022}  {} - {}  \u{2022}  {} guests",
        number,
        total,
        r.event_title,
        r.start_time.format(TIME_FORMAT),
        r.end_time.format(TIME_FORMAT),
        r.expected_guests.unwrap_or(0)
    );
    layer.use_text(header, 11.0, Mm(MARGIN + 3.0), Mm(top - 8.0), &fonts.bold);

    // Accent rule under the header bar.
    layer.set_fill_color(accent.clone());
    filled_rect(layer, MARGIN, top - 13.2, width, 1.2);

    // Two-column body.
    let body_top = top - 21.0;
    let left_x = MARGIN + 5.0;
    let right_x = MARGIN + width / 2.0 + 5.0;

    let mut left_y = body_top;
    field(layer, fonts, left_x, &mut left_y, "Contact", Some(&r.contact_name));
    field(
        layer,
        fonts,
        left_x,
        &mut left_y,
        "Organization",
        r.organization_name.as_deref(),
    );
    field(layer, fonts, left_x, &mut left_y, "Email", Some(&r.email));
    field(layer, fonts, left_x, &mut left_y, "Phone", r.phone_number.as_deref());
    field(
        layer,
        fonts,
        left_x,
        &mut left_y,
        "Type",
        Some(r.organizer_type.display_name()),
    );
    field(
        layer,
        fonts,
        left_x,
        &mut left_y,
        "Event Type",
        Some(r.event_type.display_name()),
    );

    let mut right_y = body_top;
    field(layer, fonts, right_x, &mut right_y, "Status", Some(r.status.token()));
    field(
        layer,
        fonts,
        right_x,
        &mut right_y,
        "Seating",
        r.seating_area.map(|s| s.display_name()),
    );
    field(
        layer,
        fonts,
        right_x,
        &mut right_y,
        "Area Notes",
        r.specific_area.as_deref(),
    );
    field(
        layer,
        fonts,
        right_x,
        &mut right_y,
        "Payment",
        Some(r.payment_option.display_name()),
    );
    field(layer, fonts, right_x, &mut right_y, "Cost Center", r.cost_center.as_deref());
    field(
        layer,
        fonts,
        right_x,
        &mut right_y,
        "Invoice Name",
        r.invoice_name.as_deref(),
    );

    // Full-width blocks below the taller column.
    let mut y = left_y.min(right_y) - 4.0;
    if r.food_required == Some(true) {
        let mut food = "Yes".to_string();
        if let Some(dietary) = r.dietary_preference {
            food.push_str(" - ");
            food.push_str(dietary.display_name());
        }
        if let Some(notes) = r.dietary_notes.as_deref().filter(|s| !s.is_empty()) {
            food.push_str(&format!(" ({notes})"));
        }
        field(layer, fonts, left_x, &mut y, "Food Required", Some(&food));
    }
    wrapped_field(layer, fonts, left_x, &mut y, "Description", r.description.as_deref());
    wrapped_field(layer, fonts, left_x, &mut y, "Comments", r.comments.as_deref());
    wrapped_field(
        layer,
        fonts,
        left_x,
        &mut y,
        "Internal Notes",
        r.internal_notes.as_deref(),
    );

    // Footer line with the public reference.
    y -= 3.0;
    layer.set_fill_color(rgb(128, 128, 128));
    let mut footer = format!("Ref: {}", r.confirmation_code);
    if let Some(confirmed_by) = r.confirmed_by.as_deref().filter(|s| !s.is_empty()) {
        footer.push_str(&format!(" | Confirmed by: {confirmed_by}"));
    }
    layer.use_text(footer, 8.0, Mm(left_x), Mm(y), &fonts.regular);
}

/// One "Label: value" line; skipped when the value is absent or empty.
fn field(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    x: f64,
    y: &mut f64,
    label: &str,
    value: Option<&str>,
) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    layer.set_fill_color(rgb(64, 64, 64));
    layer.use_text(format!("{label}:"), 10.0, Mm(x), Mm(*y), &fonts.bold);
    layer.set_fill_color(rgb(0, 0, 0));
    layer.use_text(value, 10.0, Mm(x + 30.0), Mm(*y), &fonts.regular);
    *y -= LINE_STEP;
}

/// A labelled block whose value wraps over multiple lines.
fn wrapped_field(
    layer: &PdfLayerReference,
    fonts: &Fonts,
    x: f64,
    y: &mut f64,
    label: &str,
    value: Option<&str>,
) {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return;
    };
    layer.set_fill_color(rgb(64, 64, 64));
    layer.use_text(format!("{label}:"), 10.0, Mm(x), Mm(*y), &fonts.bold);
    layer.set_fill_color(rgb(0, 0, 0));
    for line in wrap_text(value, 85) {
        layer.use_text(line, 10.0, Mm(x + 30.0), Mm(*y), &fonts.regular);
        *y -= LINE_STEP;
    }
}

fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if !current.is_empty() && current.len() + 1 + word.len() > max_chars {
                lines.push(std::mem::take(&mut current));
            }
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}

/// Helvetica has no metrics at hand; half an em per character is close
/// enough for centering headings.
fn centered_text(
    layer: &PdfLayerReference,
    text: &str,
    size: f64,
    y: f64,
    font: &IndirectFontRef,
) {
    let width_mm = text.chars().count() as f64 * size * 0.5 * 0.352778;
    let x = (PAGE_WIDTH - width_mm).max(0.0) / 2.0;
    layer.use_text(text, size, Mm(x), Mm(y), font);
}

fn filled_rect(layer: &PdfLayerReference, x: f64, y: f64, w: f64, h: f64) {
    let rect = Line {
        points: vec![
            (Point::new(Mm(x), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y)), false),
            (Point::new(Mm(x + w), Mm(y + h)), false),
            (Point::new(Mm(x), Mm(y + h)), false),
        ],
        is_closed: true,
        has_fill: true,
        has_stroke: false,
        is_clipping_path: false,
    };
    layer.add_shape(rect);
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
