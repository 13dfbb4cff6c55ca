//! # Solve3
//!
//! Investor calculator for the Solve3 protocol: projects token emissions,
//! presale earnings and farming returns, and serves them to the dashboard.
//!
//! ## Features
//!
//! - **Emission schedule**: geometric decay over a fixed number of epochs
//! - **Presale earnings**: weekly and cumulative earnings of a presale position
//! - **Farming calculator**: fee retention and pro-rata emission earnings
//! - **REST API**: every projection as JSON, plus CSV/NDJSON export
//!
//! ## Modules
//!
//! - [`calculator`]: Pure numeric core
//! - [`report`]: Per-epoch tables for export and printing
//! - [`config`]: TOML configuration with environment overrides
//! - [`api`]: REST API server with Axum
//!
//! ## Quick Start
//!
//! ```rust
//! use solve3::calculator::*;
//!
//! let projection = PresaleProjection::compute(
//!     &EmissionScheduleParams::default(),
//!     &PresaleEarningsParams::default(),
//! )
//! .unwrap();
//!
//! println!("First week: ${:.2}", projection.first_week());
//! println!("After {} weeks: ${:.2}", projection.epochs.len(), projection.total_earnings);
//! ```

pub mod api;
pub mod calculator;
pub mod config;
pub mod report;

// Re-export top-level types for convenience
pub use calculator::{
    adjusted_emissions, cumulative_sum, farming_split, generate_emission_series,
    weekly_earnings, CalcError, CalcResult, EmissionScheduleParams, EmissionsProjection,
    FarmingParams, FarmingProjection, FarmingResult, PresaleEarningsParams, PresaleProjection,
};

pub use report::{Report, ReportError, ReportFormat, ReportKind};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{
    ApiConfig, Config, ConfigError, DashboardDefaults, EmissionsDefaults, LoggingConfig,
};
