//! Presale earnings
//!
//! Presale tokens are locked with a 2x weight. Each epoch the fees and
//! bribes are shared between all locked tokens, whose supply grows as
//! emissions get locked:
//!
//! ```text
//! earnings[i] = investment / token_price * 2
//!             / (base_supply_offset + cumulative_emissions[i] * locking_rate)
//!             * fees_and_bribes
//! ```

use super::error::{CalcError, CalcResult};
use super::types::PresaleEarningsParams;

/// Weekly earnings for every epoch of `cumulative_emissions`.
///
/// Fails with `InvalidParameter` if any locked-supply denominator is zero,
/// negative or not finite, or if an epoch's earnings overflow.
pub fn weekly_earnings(
    params: &PresaleEarningsParams,
    cumulative_emissions: &[f64],
) -> CalcResult<Vec<f64>> {
    let locked_tokens = params.locked_tokens();

    cumulative_emissions
        .iter()
        .map(|cumulative| {
            let locked_supply = params.base_supply_offset + cumulative * params.locking_rate;
            if !locked_supply.is_finite() || locked_supply <= 0.0 {
                return Err(CalcError::invalid(
                    "base_supply_offset",
                    locked_supply,
                    "locked supply must be greater than 0",
                ));
            }
            let earnings = locked_tokens / locked_supply * params.fees_and_bribes;
            if !earnings.is_finite() {
                return Err(CalcError::invalid(
                    "investment",
                    earnings,
                    "earnings overflow to a non-finite value",
                ));
            }
            Ok(earnings)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculator::{cumulative_sum, generate_emission_series, EmissionScheduleParams};

    fn relative_error(actual: f64, expected: f64) -> f64 {
        ((actual - expected) / expected).abs()
    }

    #[test]
    fn test_first_epoch_matches_reference() {
        let params = PresaleEarningsParams::default();
        let earnings = weekly_earnings(&params, &[1_980_000.0]).unwrap();

        let expected = 10_000.0 / 0.17 * 2.0 / (25_000_000.0 + 1_980_000.0 * 0.75) * 200_000.0;
        assert!(relative_error(earnings[0], expected) < 1e-9);
        assert!((earnings[0] - 888.405_201_6).abs() < 1e-6);
    }

    #[test]
    fn test_earnings_decline_as_supply_is_locked() {
        let emissions = generate_emission_series(&EmissionScheduleParams::default());
        let cumulative = cumulative_sum(&emissions);
        let earnings = weekly_earnings(&PresaleEarningsParams::default(), &cumulative).unwrap();

        assert_eq!(earnings.len(), 50);
        for pair in earnings.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    #[test]
    fn test_zero_locking_rate_is_flat() {
        let params = PresaleEarningsParams {
            locking_rate: 0.0,
            ..Default::default()
        };
        let earnings = weekly_earnings(&params, &[1.0, 1_000_000.0]).unwrap();
        assert_eq!(earnings[0], earnings[1]);
    }

    #[test]
    fn test_empty_cumulative_series() {
        let earnings = weekly_earnings(&PresaleEarningsParams::default(), &[]).unwrap();
        assert!(earnings.is_empty());
    }

    #[test]
    fn test_zero_denominator_is_rejected() {
        let params = PresaleEarningsParams {
            base_supply_offset: 0.0,
            ..Default::default()
        };
        let err = weekly_earnings(&params, &[0.0]).unwrap_err();
        assert!(matches!(err, CalcError::InvalidParameter { .. }));
    }

    #[test]
    fn test_overflowing_earnings_are_rejected() {
        let params = PresaleEarningsParams {
            investment: 1e308,
            token_price: 1e-300,
            ..Default::default()
        };
        assert!(params.validate().is_ok());

        let err = weekly_earnings(&params, &[1_980_000.0, 3_940_200.0]).unwrap_err();
        assert_eq!(err.parameter(), "investment");
    }

    #[test]
    fn test_negative_denominator_is_rejected() {
        let params = PresaleEarningsParams {
            base_supply_offset: 100.0,
            locking_rate: 1.0,
            ..Default::default()
        };
        assert!(weekly_earnings(&params, &[50.0, -500.0]).is_err());
    }
}
