//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::ReservationRepository;
use crate::mail::Notifier;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repository: Arc<dyn ReservationRepository>,
    pub notifier: Notifier,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn ReservationRepository>,
        notifier: Notifier,
        config: AppConfig,
    ) -> Self {
        Self {
            repository,
            notifier,
            config: Arc::new(config),
        }
    }
}
