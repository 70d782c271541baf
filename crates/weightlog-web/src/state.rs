//! Application state shared across all handlers.

use std::fmt;
use std::sync::Arc;

use weightlog_core::config::AppConfig;
use weightlog_database::repositories::WeightStore;

use crate::views::ViewRenderer;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Weight storage.
    pub weights: Arc<dyn WeightStore>,
    /// Page renderer.
    pub views: Arc<dyn ViewRenderer>,
}

impl AppState {
    /// Bundle the shared dependencies.
    pub fn new(
        config: Arc<AppConfig>,
        weights: Arc<dyn WeightStore>,
        views: Arc<dyn ViewRenderer>,
    ) -> Self {
        Self {
            config,
            weights,
            views,
        }
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
