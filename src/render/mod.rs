//! Derived views over the reservation data: the ICS calendar feeds and
//! the daily PDF report. Both consume the same [`FeedFilter`] contract and
//! never mutate the store.

pub mod filter;
pub mod ics;
pub mod report;

pub use filter::FeedFilter;
pub use ics::{render_feed, render_feed_at, FeedMode};
pub use report::generate_daily_report;

/// Failure inside a renderer. The data is unaffected; the boundary
/// translates this into a generic server error.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),
}
