//! Dashboard projections
//!
//! Each projection validates its inputs, then rebuilds every series from
//! scratch. Nothing is cached or updated incrementally.

use serde::Serialize;

use super::cumulative::cumulative_sum;
use super::earnings::weekly_earnings;
use super::emission::{adjusted_ceiling, adjusted_emissions, generate_emission_series};
use super::error::CalcResult;
use super::farming::{farming_split, fee_comparison, tvl_breakdown};
use super::types::{
    ensure_finite_series, ensure_non_negative, EmissionScheduleParams, FarmingParams, FarmingResult, FeeComparison,
    PresaleEarningsParams, TvlBreakdown,
};

/// Series behind the presale earnings page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PresaleProjection {
    pub epochs: Vec<u32>,
    pub weekly_earnings: Vec<f64>,
    pub cumulative_earnings: Vec<f64>,
    /// Earnings summed over the whole horizon
    pub total_earnings: f64,
}

impl PresaleProjection {
    pub fn compute(
        schedule: &EmissionScheduleParams,
        presale: &PresaleEarningsParams,
    ) -> CalcResult<Self> {
        schedule.validate()?;
        presale.validate()?;

        let emissions = generate_emission_series(schedule);
        let cumulative_emissions = cumulative_sum(&emissions);
        let weekly_earnings = weekly_earnings(presale, &cumulative_emissions)?;
        let cumulative_earnings = cumulative_sum(&weekly_earnings);
        ensure_finite_series("investment", &cumulative_earnings)?;
        let total_earnings = cumulative_earnings.last().copied().unwrap_or(0.0);

        tracing::debug!(
            horizon = schedule.horizon,
            investment = presale.investment,
            total_earnings,
            "Computed presale projection"
        );

        Ok(Self {
            epochs: schedule.epochs(),
            weekly_earnings,
            cumulative_earnings,
            total_earnings,
        })
    }

    /// Earnings of the first epoch, the headline figure on the page
    pub fn first_week(&self) -> f64 {
        self.weekly_earnings.first().copied().unwrap_or(0.0)
    }
}

/// Series behind the emissions page
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmissionsProjection {
    pub epochs: Vec<u32>,
    pub emissions: Vec<f64>,
    pub cumulative_emissions: Vec<f64>,
    pub adjusted_emissions: Vec<f64>,
    /// Y axis upper bound for the adjusted chart
    pub adjusted_ceiling: f64,
}

impl EmissionsProjection {
    /// `redemption_rate` only has to be non-negative; values above 1 are
    /// passed through and produce negative dollar emissions.
    pub fn compute(
        schedule: &EmissionScheduleParams,
        token_price: f64,
        redemption_rate: f64,
    ) -> CalcResult<Self> {
        schedule.validate()?;
        ensure_non_negative("token_price", token_price)?;
        ensure_non_negative("redemption_rate", redemption_rate)?;

        if redemption_rate > 1.0 {
            tracing::warn!(redemption_rate, "Redemption rate above 1 yields negative emissions");
        }

        let emissions = generate_emission_series(schedule);
        let cumulative_emissions = cumulative_sum(&emissions);
        ensure_finite_series("base_emission", &cumulative_emissions)?;
        let adjusted_emissions = adjusted_emissions(&emissions, token_price, redemption_rate);
        let ceiling = adjusted_ceiling(schedule.base_emission, token_price, redemption_rate);
        ensure_finite_series("token_price", &adjusted_emissions)?;
        ensure_finite_series("token_price", &[ceiling])?;

        tracing::debug!(
            horizon = schedule.horizon,
            token_price,
            redemption_rate,
            "Computed emissions projection"
        );

        Ok(Self {
            epochs: schedule.epochs(),
            emissions,
            cumulative_emissions,
            adjusted_emissions,
            adjusted_ceiling: ceiling,
        })
    }

    /// Total tokens emitted over the horizon
    pub fn total_emitted(&self) -> f64 {
        self.cumulative_emissions.last().copied().unwrap_or(0.0)
    }
}

/// Figures behind the farming calculator
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FarmingProjection {
    #[serde(flatten)]
    pub result: FarmingResult,
    pub total_earnings: f64,
    /// Absent when the pool is empty
    pub tvl_breakdown: Option<TvlBreakdown>,
    /// Absent when the position earns no fees
    pub fee_comparison: Option<FeeComparison>,
}

impl FarmingProjection {
    pub fn compute(params: &FarmingParams) -> CalcResult<Self> {
        params.validate()?;

        let result = farming_split(params);

        Ok(Self {
            result,
            total_earnings: result.total_earnings(),
            tvl_breakdown: tvl_breakdown(params),
            fee_comparison: fee_comparison(params, &result),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::CalcError;

    #[test]
    fn test_presale_projection_defaults() {
        let projection = PresaleProjection::compute(
            &EmissionScheduleParams::default(),
            &PresaleEarningsParams::default(),
        )
        .unwrap();

        assert_eq!(projection.epochs.len(), 50);
        assert_eq!(projection.weekly_earnings.len(), 50);
        assert_eq!(projection.cumulative_earnings.len(), 50);
        assert!((projection.first_week() - 888.405_201_6).abs() < 1e-6);

        let summed: f64 = projection.weekly_earnings.iter().sum();
        assert!((projection.total_earnings - summed).abs() < 1e-6);
    }

    #[test]
    fn test_presale_projection_validates_inputs() {
        let presale = PresaleEarningsParams {
            token_price: -0.17,
            ..Default::default()
        };
        let err = PresaleProjection::compute(&EmissionScheduleParams::default(), &presale)
            .unwrap_err();
        assert!(matches!(err, CalcError::InvalidParameter { name: "token_price", .. }));

        let schedule = EmissionScheduleParams::default().horizon(0);
        assert!(PresaleProjection::compute(&schedule, &PresaleEarningsParams::default()).is_err());
    }

    #[test]
    fn test_presale_projection_rejects_overflowing_earnings() {
        let presale = PresaleEarningsParams {
            investment: 1e308,
            token_price: 1e-300,
            ..Default::default()
        };
        let schedule = EmissionScheduleParams::default().horizon(2);
        let err = PresaleProjection::compute(&schedule, &presale).unwrap_err();
        assert_eq!(err.parameter(), "investment");
    }

    #[test]
    fn test_presale_projection_rejects_overflowing_total() {
        // every week is finite, their sum is not
        let presale = PresaleEarningsParams {
            investment: 1e308,
            token_price: 2.0,
            fees_and_bribes: 1e7,
            ..Default::default()
        };
        let err = PresaleProjection::compute(&EmissionScheduleParams::default(), &presale)
            .unwrap_err();
        assert_eq!(err.parameter(), "investment");
    }

    #[test]
    fn test_emissions_projection_rejects_overflow() {
        let schedule = EmissionScheduleParams::new(1e308, 0.99, 2);
        let err = EmissionsProjection::compute(&schedule, 0.17, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "base_emission");

        let schedule = EmissionScheduleParams::new(1e300, 0.99, 1);
        let err = EmissionsProjection::compute(&schedule, 1e10, 0.0).unwrap_err();
        assert_eq!(err.parameter(), "token_price");
    }

    #[test]
    fn test_emissions_projection() {
        let projection =
            EmissionsProjection::compute(&EmissionScheduleParams::default(), 0.17, 0.0).unwrap();

        assert_eq!(projection.epochs.first(), Some(&1));
        assert_eq!(projection.epochs.last(), Some(&50));
        assert!((projection.adjusted_ceiling - 340_000.0).abs() < 1e-6);
        assert!((projection.adjusted_emissions[0] - 336_600.0).abs() < 1e-6);

        let summed: f64 = projection.emissions.iter().sum();
        assert!((projection.total_emitted() - summed).abs() < 1e-6);
    }

    #[test]
    fn test_emissions_projection_keeps_negative_adjustment() {
        let projection =
            EmissionsProjection::compute(&EmissionScheduleParams::default(), 0.17, 1.5).unwrap();

        assert!(projection.adjusted_emissions.iter().all(|v| *v < 0.0));
        assert!(projection.adjusted_ceiling < 0.0);
    }

    #[test]
    fn test_emissions_projection_rejects_negative_fee() {
        let err = EmissionsProjection::compute(&EmissionScheduleParams::default(), 0.17, -0.1)
            .unwrap_err();
        assert_eq!(err.parameter(), "redemption_rate");
    }

    #[test]
    fn test_farming_projection() {
        let projection = FarmingProjection::compute(&FarmingParams::default()).unwrap();

        assert!((projection.total_earnings - 23_250.0).abs() < 1e-9);
        assert!(projection.tvl_breakdown.is_some());
        assert!(projection.fee_comparison.is_some());
    }

    #[test]
    fn test_farming_projection_empty_pool() {
        let params = FarmingParams {
            total_tvl: 0.0,
            my_fees: 0.0,
            ..Default::default()
        };
        let projection = FarmingProjection::compute(&params).unwrap();

        assert_eq!(projection.result.additional_earnings, 0.0);
        assert!(projection.tvl_breakdown.is_none());
        assert!(projection.fee_comparison.is_none());
    }

    #[test]
    fn test_farming_projection_serializes_flat() {
        let projection = FarmingProjection::compute(&FarmingParams::default()).unwrap();
        let json = serde_json::to_value(&projection).unwrap();

        assert_eq!(json["fees_kept"], 11_250.0);
        assert_eq!(json["additional_earnings"], 12_000.0);
        assert!(json["tvl_breakdown"].is_object());
    }
}
