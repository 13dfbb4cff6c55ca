//! Parameter and result types for the calculator
//!
//! All types are plain values recreated from the current inputs on every
//! recomputation:
//! - `EmissionScheduleParams`: geometric decay schedule
//! - `PresaleEarningsParams`: presale investor inputs
//! - `FarmingParams` / `FarmingResult`: liquidity farming inputs and splits
//! - `TvlBreakdown` and `FeeComparison`: data behind the farming charts

use serde::{Deserialize, Serialize};

use super::error::{CalcError, CalcResult};

/// Default first-epoch emission basis (tokens)
pub const DEFAULT_BASE_EMISSION: f64 = 2_000_000.0;

/// Default per-epoch decay factor
pub const DEFAULT_DECAY_RATE: f64 = 0.99;

/// Default number of projected epochs
pub const DEFAULT_HORIZON: u32 = 50;

/// Supply already in circulation before emissions start
pub const DEFAULT_BASE_SUPPLY_OFFSET: f64 = 25_000_000.0;

/// Share of trading fees a farmer keeps on Solve3
pub const SOLVE3_FEE_RETENTION: f64 = 0.75;

/// Share of trading fees a farmer keeps on Orca
pub const ORCA_FEE_RETENTION: f64 = 0.87;

/// Share of trading fees a farmer keeps on Raydium
pub const RAYDIUM_FEE_RETENTION: f64 = 0.84;

/// Geometric decay emission schedule
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EmissionScheduleParams {
    /// Emission basis; epoch 1 emits `base_emission * decay_rate`
    pub base_emission: f64,
    /// Per-epoch multiplier, strictly between 0 and 1
    pub decay_rate: f64,
    /// Number of epochs to project
    pub horizon: u32,
}

impl Default for EmissionScheduleParams {
    fn default() -> Self {
        Self {
            base_emission: DEFAULT_BASE_EMISSION,
            decay_rate: DEFAULT_DECAY_RATE,
            horizon: DEFAULT_HORIZON,
        }
    }
}

impl EmissionScheduleParams {
    pub fn new(base_emission: f64, decay_rate: f64, horizon: u32) -> Self {
        Self {
            base_emission,
            decay_rate,
            horizon,
        }
    }

    /// Builder method: set the horizon
    pub fn horizon(mut self, horizon: u32) -> Self {
        self.horizon = horizon;
        self
    }

    /// Check the schedule is inside its domain
    pub fn validate(&self) -> CalcResult<()> {
        ensure_positive("base_emission", self.base_emission)?;
        if !(self.decay_rate > 0.0 && self.decay_rate < 1.0) {
            return Err(CalcError::invalid(
                "decay_rate",
                self.decay_rate,
                "must be strictly between 0 and 1",
            ));
        }
        if self.horizon == 0 {
            return Err(CalcError::invalid(
                "horizon",
                0.0,
                "must be at least 1 epoch",
            ));
        }
        Ok(())
    }

    /// Epoch indices `1..=horizon`, used as the x axis of every chart
    pub fn epochs(&self) -> Vec<u32> {
        (1..=self.horizon).collect()
    }
}

/// Presale investor inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PresaleEarningsParams {
    /// Amount invested in the presale ($)
    pub investment: f64,
    /// Presale token price ($)
    pub token_price: f64,
    /// Fees and bribes distributed to lockers per epoch ($)
    pub fees_and_bribes: f64,
    /// Fraction of emitted supply that gets locked
    pub locking_rate: f64,
    /// Supply already locked before emissions start
    pub base_supply_offset: f64,
}

impl Default for PresaleEarningsParams {
    fn default() -> Self {
        Self {
            investment: 10_000.0,
            token_price: 0.17,
            fees_and_bribes: 200_000.0,
            locking_rate: 0.75,
            base_supply_offset: DEFAULT_BASE_SUPPLY_OFFSET,
        }
    }
}

impl PresaleEarningsParams {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("investment", self.investment)?;
        ensure_positive("token_price", self.token_price)?;
        ensure_non_negative("fees_and_bribes", self.fees_and_bribes)?;
        ensure_fraction("locking_rate", self.locking_rate)?;
        ensure_positive("base_supply_offset", self.base_supply_offset)?;
        Ok(())
    }

    /// Tokens bought in the presale, counted twice (presale bonus)
    pub fn locked_tokens(&self) -> f64 {
        self.investment / self.token_price * 2.0
    }
}

/// Liquidity farming inputs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FarmingParams {
    /// Total value locked across the pool ($)
    pub total_tvl: f64,
    /// Value of the user's own position ($)
    pub my_farm: f64,
    /// Fees the position usually earns per epoch ($)
    pub my_fees: f64,
    /// Dollar value of emissions directed to the pool per epoch
    pub emissions_per_epoch: f64,
}

impl Default for FarmingParams {
    fn default() -> Self {
        Self {
            total_tvl: 25_000_000.0,
            my_farm: 1_000_000.0,
            my_fees: 15_000.0,
            emissions_per_epoch: 300_000.0,
        }
    }
}

impl FarmingParams {
    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("total_tvl", self.total_tvl)?;
        ensure_non_negative("my_farm", self.my_farm)?;
        ensure_non_negative("my_fees", self.my_fees)?;
        ensure_non_negative("emissions_per_epoch", self.emissions_per_epoch)?;
        Ok(())
    }
}

/// Fee and emission split for a farming position
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FarmingResult {
    /// Fees retained after the protocol's cut
    pub fees_kept: f64,
    /// Emissions earned pro rata to the position
    pub additional_earnings: f64,
    /// Position as a fraction of TVL (0 when TVL is 0)
    pub farm_share: f64,
}

impl FarmingResult {
    /// Fees kept plus emission earnings
    pub fn total_earnings(&self) -> f64 {
        self.fees_kept + self.additional_earnings
    }
}

/// Data behind the "my farm vs. rest of TVL" pie chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TvlBreakdown {
    pub my_farm: f64,
    /// `total_tvl - my_farm`, negative when the farm exceeds the TVL
    pub rest_of_tvl: f64,
}

/// Data behind the fees comparison bar chart
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FeeComparison {
    pub total_fees: f64,
    pub orca: f64,
    pub raydium: f64,
    pub solve3_fees: f64,
    pub solve3_additional: f64,
    pub solve3_total: f64,
}

fn ensure_finite(name: &'static str, value: f64) -> CalcResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(CalcError::invalid(name, value, "must be a finite number"))
    }
}

/// Rejects a computed series holding NaN or an infinity, blaming `name`
pub(crate) fn ensure_finite_series(name: &'static str, series: &[f64]) -> CalcResult<()> {
    match series.iter().find(|value| !value.is_finite()) {
        Some(&value) => Err(CalcError::invalid(
            name,
            value,
            "inputs overflow to a non-finite result",
        )),
        None => Ok(()),
    }
}

pub(crate) fn ensure_non_negative(name: &'static str, value: f64) -> CalcResult<()> {
    ensure_finite(name, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid(name, value, "must not be negative"));
    }
    Ok(())
}

pub(crate) fn ensure_positive(name: &'static str, value: f64) -> CalcResult<()> {
    ensure_finite(name, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid(name, value, "must be greater than 0"));
    }
    Ok(())
}

pub(crate) fn ensure_fraction(name: &'static str, value: f64) -> CalcResult<()> {
    ensure_finite(name, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(CalcError::invalid(name, value, "must be between 0 and 1"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(EmissionScheduleParams::default().validate().is_ok());
        assert!(PresaleEarningsParams::default().validate().is_ok());
        assert!(FarmingParams::default().validate().is_ok());
    }

    #[test]
    fn test_schedule_rejects_bad_decay() {
        for rate in [0.0, 1.0, -0.5, 1.01, f64::NAN] {
            let params = EmissionScheduleParams::new(2_000_000.0, rate, 50);
            let err = params.validate().unwrap_err();
            assert_eq!(err.parameter(), "decay_rate");
        }
    }

    #[test]
    fn test_schedule_rejects_zero_horizon() {
        let params = EmissionScheduleParams::default().horizon(0);
        assert_eq!(params.validate().unwrap_err().parameter(), "horizon");
    }

    #[test]
    fn test_schedule_rejects_non_positive_base() {
        let params = EmissionScheduleParams::new(0.0, 0.99, 50);
        assert_eq!(params.validate().unwrap_err().parameter(), "base_emission");

        let params = EmissionScheduleParams::new(f64::INFINITY, 0.99, 50);
        assert_eq!(params.validate().unwrap_err().parameter(), "base_emission");
    }

    #[test]
    fn test_epochs_start_at_one() {
        let epochs = EmissionScheduleParams::default().horizon(3).epochs();
        assert_eq!(epochs, vec![1, 2, 3]);
    }

    #[test]
    fn test_presale_validation() {
        let params = PresaleEarningsParams {
            token_price: 0.0,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().parameter(), "token_price");

        let params = PresaleEarningsParams {
            locking_rate: 1.2,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().parameter(), "locking_rate");

        let params = PresaleEarningsParams {
            investment: -1.0,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().parameter(), "investment");
    }

    #[test]
    fn test_farming_allows_zero_tvl() {
        let params = FarmingParams {
            total_tvl: 0.0,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let params = FarmingParams {
            my_fees: -10.0,
            ..Default::default()
        };
        assert_eq!(params.validate().unwrap_err().parameter(), "my_fees");
    }

    #[test]
    fn test_locked_tokens() {
        let params = PresaleEarningsParams {
            investment: 17.0,
            token_price: 0.17,
            ..Default::default()
        };
        assert!((params.locked_tokens() - 200.0).abs() < 1e-9);
    }
}
