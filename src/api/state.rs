//! Application State
//!
//! Shared state accessible by all API handlers.
//! Holds only immutable configuration; every request recomputes its
//! projection from scratch.

use std::sync::Arc;
use std::time::Instant;

use crate::api::error::{ApiError, ApiResult};
pub use crate::config::ApiConfig;
use crate::config::{Config, DashboardDefaults};

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Values used for any input a request leaves out
    pub defaults: Arc<DashboardDefaults>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState with the built-in dashboard defaults
    pub fn new(config: ApiConfig) -> Self {
        Self::with_defaults(config, DashboardDefaults::default())
    }

    /// Create AppState with custom dashboard defaults
    pub fn with_defaults(config: ApiConfig, defaults: DashboardDefaults) -> Self {
        Self {
            config: Arc::new(config),
            defaults: Arc::new(defaults),
            start_time: Instant::now(),
        }
    }

    /// Create AppState from a loaded configuration file
    pub fn from_config(config: &Config) -> Self {
        Self::with_defaults(config.api.clone(), config.defaults.clone())
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Reject horizons above the configured cap
    pub fn check_horizon(&self, horizon: u32) -> ApiResult<()> {
        if horizon > self.config.max_horizon {
            return Err(ApiError::Validation(format!(
                "horizon {} exceeds the maximum of {} epochs",
                horizon, self.config.max_horizon
            )));
        }
        Ok(())
    }
}
