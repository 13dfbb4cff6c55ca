//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! Every query parameter is optional; missing values fall back to the
//! configured dashboard defaults.

use serde::{Deserialize, Serialize};

use crate::calculator::{EmissionScheduleParams, FarmingParams, PresaleEarningsParams};
use crate::config::DashboardDefaults;

// ============================================
// EMISSIONS DTOs
// ============================================

/// Query string of `GET /api/v1/emissions`
#[derive(Debug, Default, Deserialize)]
pub struct EmissionsQuery {
    pub base_emission: Option<f64>,
    pub decay_rate: Option<f64>,
    pub horizon: Option<u32>,
    pub token_price: Option<f64>,
    /// Service fee
    pub redemption_rate: Option<f64>,
}

/// Resolved inputs of an emissions projection
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct EmissionsInputs {
    pub schedule: EmissionScheduleParams,
    pub token_price: f64,
    pub redemption_rate: f64,
}

impl EmissionsQuery {
    pub fn resolve(&self, defaults: &DashboardDefaults) -> EmissionsInputs {
        EmissionsInputs {
            schedule: resolve_schedule(
                &defaults.schedule,
                self.base_emission,
                self.decay_rate,
                self.horizon,
            ),
            token_price: self.token_price.unwrap_or(defaults.emissions.token_price),
            redemption_rate: self
                .redemption_rate
                .unwrap_or(defaults.emissions.redemption_rate),
        }
    }
}

// ============================================
// PRESALE DTOs
// ============================================

/// Query string of `GET /api/v1/presale`
#[derive(Debug, Default, Deserialize)]
pub struct PresaleQuery {
    pub investment: Option<f64>,
    pub token_price: Option<f64>,
    pub fees_and_bribes: Option<f64>,
    pub locking_rate: Option<f64>,
    pub base_supply_offset: Option<f64>,
    pub base_emission: Option<f64>,
    pub decay_rate: Option<f64>,
    pub horizon: Option<u32>,
}

/// Resolved inputs of a presale projection
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PresaleInputs {
    pub schedule: EmissionScheduleParams,
    pub presale: PresaleEarningsParams,
}

impl PresaleQuery {
    pub fn resolve(&self, defaults: &DashboardDefaults) -> PresaleInputs {
        let base = &defaults.presale;
        PresaleInputs {
            schedule: resolve_schedule(
                &defaults.schedule,
                self.base_emission,
                self.decay_rate,
                self.horizon,
            ),
            presale: PresaleEarningsParams {
                investment: self.investment.unwrap_or(base.investment),
                token_price: self.token_price.unwrap_or(base.token_price),
                fees_and_bribes: self.fees_and_bribes.unwrap_or(base.fees_and_bribes),
                locking_rate: self.locking_rate.unwrap_or(base.locking_rate),
                base_supply_offset: self.base_supply_offset.unwrap_or(base.base_supply_offset),
            },
        }
    }
}

// ============================================
// FARMING DTOs
// ============================================

/// Query string of `GET /api/v1/farming`
#[derive(Debug, Default, Deserialize)]
pub struct FarmingQuery {
    pub total_tvl: Option<f64>,
    pub my_farm: Option<f64>,
    pub my_fees: Option<f64>,
    pub emissions_per_epoch: Option<f64>,
}

impl FarmingQuery {
    pub fn resolve(&self, defaults: &DashboardDefaults) -> FarmingParams {
        let base = &defaults.farming;
        FarmingParams {
            total_tvl: self.total_tvl.unwrap_or(base.total_tvl),
            my_farm: self.my_farm.unwrap_or(base.my_farm),
            my_fees: self.my_fees.unwrap_or(base.my_fees),
            emissions_per_epoch: self.emissions_per_epoch.unwrap_or(base.emissions_per_epoch),
        }
    }
}

fn resolve_schedule(
    base: &EmissionScheduleParams,
    base_emission: Option<f64>,
    decay_rate: Option<f64>,
    horizon: Option<u32>,
) -> EmissionScheduleParams {
    EmissionScheduleParams {
        base_emission: base_emission.unwrap_or(base.base_emission),
        decay_rate: decay_rate.unwrap_or(base.decay_rate),
        horizon: horizon.unwrap_or(base.horizon),
    }
}

// ============================================
// RESPONSE DTOs
// ============================================

/// A projection together with the inputs it was computed from
#[derive(Debug, Serialize)]
pub struct ProjectionResponse<I, P> {
    pub inputs: I,
    pub projection: P,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

// ============================================
// EXPORT DTOs
// ============================================

/// Which projection to export and how
#[derive(Debug, Deserialize)]
pub struct ExportParams {
    /// Report: emissions or presale
    #[serde(default = "default_report")]
    pub report: String,
    /// Format: csv, json or ndjson
    #[serde(default = "default_export_format")]
    pub format: String,
}

fn default_report() -> String {
    "presale".to_string()
}

fn default_export_format() -> String {
    "csv".to_string()
}
