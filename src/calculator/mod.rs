//! Solve3 Calculator
//!
//! The numeric core of the dashboard. Everything here is a pure function of
//! its inputs:
//!
//! - **emission**: geometric decay emission schedule and dollar adjustment
//! - **cumulative**: running totals
//! - **earnings**: presale weekly earnings
//! - **farming**: fee and emission split for liquidity farmers
//! - **projection**: per-page bundles of the above
//! - **types** / **error**: parameters, results and validation
//!
//! # Pipeline
//!
//! ```text
//! EmissionScheduleParams → emissions → cumulative emissions ─┐
//!                                                            ├→ weekly earnings → cumulative earnings
//! PresaleEarningsParams ─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use solve3::calculator::{cumulative_sum, generate_emission_series, weekly_earnings};
//! use solve3::calculator::{EmissionScheduleParams, PresaleEarningsParams};
//!
//! let emissions = generate_emission_series(&EmissionScheduleParams::default());
//! let cumulative = cumulative_sum(&emissions);
//! let earnings = weekly_earnings(&PresaleEarningsParams::default(), &cumulative).unwrap();
//!
//! assert_eq!(earnings.len(), 50);
//! ```

pub mod cumulative;
pub mod earnings;
pub mod emission;
pub mod error;
pub mod farming;
pub mod projection;
pub mod types;

pub use cumulative::cumulative_sum;
pub use earnings::weekly_earnings;
pub use emission::{adjusted_ceiling, adjusted_emissions, emission_at, generate_emission_series};
pub use error::{CalcError, CalcResult};
pub use farming::{farming_split, fee_comparison, tvl_breakdown};
pub use projection::{EmissionsProjection, FarmingProjection, PresaleProjection};
pub use types::{
    EmissionScheduleParams, FarmingParams, FarmingResult, FeeComparison, PresaleEarningsParams,
    TvlBreakdown, DEFAULT_BASE_EMISSION, DEFAULT_BASE_SUPPLY_OFFSET, DEFAULT_DECAY_RATE,
    DEFAULT_HORIZON, ORCA_FEE_RETENTION, RAYDIUM_FEE_RETENTION, SOLVE3_FEE_RETENTION,
};
