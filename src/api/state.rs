//! Application state for Axum handlers.

use std::sync::Arc;

use metrics_exporter_prometheus::PrometheusHandle;

use crate::config::AppConfig;
use crate::service::UserService;
use crate::storage::UserStore;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Storage backend.
    pub storage: Arc<dyn UserStore>,
    /// User record service.
    pub user_service: Arc<UserService>,
    /// Installed Prometheus recorder, if metrics are enabled.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: Arc<AppConfig>, storage: Arc<dyn UserStore>) -> Self {
        let user_service = Arc::new(UserService::new(Arc::clone(&storage)));

        Self {
            config,
            storage,
            user_service,
            metrics: None,
        }
    }

    /// Attach a Prometheus handle to render on `/metrics`.
    #[must_use]
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}
