//! Reservation intake and management service for the Hubble and Meteor
//! community cafés.
//!
//! External visitors submit reservation requests through a public form;
//! staff review, confirm or reject them, annotate them with internal
//! notes, and consume the results through ICS calendar feeds and daily
//! PDF reports. Optional email notifications go out after mutations and
//! are strictly best-effort.
//!
//! Module map:
//! - [`model`]: the reservation entity, labeled enums, confirmation codes
//! - [`db`]: repository trait with in-memory and Postgres backends
//! - [`service`]: business operations (create/update/delete/status/notes)
//! - [`render`]: ICS feed builder and daily PDF report
//! - [`mail`]: notification dispatch and HTML templates
//! - [`http`]: axum router, handlers, auth and wire types

pub mod config;
pub mod db;
pub mod http;
pub mod mail;
pub mod model;
pub mod render;
pub mod service;
