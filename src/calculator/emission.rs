//! # Emission Schedule
//!
//! Geometric decay emissions, one value per epoch:
//!
//! ```text
//! emissions[i] = base_emission * decay_rate^i     for i = 1..=horizon
//!
//! base 2,000,000 / rate 0.99:
//!   epoch  1: 1,980,000.00
//!   epoch 10: 1,808,764.15
//!   epoch 50: 1,210,012.13
//! ```
//!
//! Adjusted emissions convert the token amounts into dollars net of the
//! service fee (redemption rate).

use super::types::EmissionScheduleParams;

/// Generate the emission series for a schedule.
///
/// Expects validated params; no clamping is applied.
pub fn generate_emission_series(params: &EmissionScheduleParams) -> Vec<f64> {
    (1..=params.horizon)
        .map(|epoch| emission_at(params, epoch))
        .collect()
}

/// Emission for a single epoch (1-based)
pub fn emission_at(params: &EmissionScheduleParams, epoch: u32) -> f64 {
    params.base_emission * params.decay_rate.powf(epoch as f64)
}

/// Convert token emissions to dollars net of the redemption rate.
///
/// A redemption rate above 1 turns every value negative. That is kept
/// as-is rather than clamped.
pub fn adjusted_emissions(emissions: &[f64], token_price: f64, redemption_rate: f64) -> Vec<f64> {
    emissions
        .iter()
        .map(|e| e * token_price * (1.0 - redemption_rate))
        .collect()
}

/// Upper bound of the adjusted emissions chart
pub fn adjusted_ceiling(base_emission: f64, token_price: f64, redemption_rate: f64) -> f64 {
    base_emission * token_price * (1.0 - redemption_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> EmissionScheduleParams {
        EmissionScheduleParams::new(2_000_000.0, 0.99, 50)
    }

    #[test]
    fn test_series_length_matches_horizon() {
        assert_eq!(generate_emission_series(&reference()).len(), 50);
        assert_eq!(generate_emission_series(&reference().horizon(1)).len(), 1);
    }

    #[test]
    fn test_reference_values() {
        let series = generate_emission_series(&reference());

        assert!((series[0] - 1_980_000.0).abs() < 1e-6);
        assert!((series[49] - 1_210_012.134_275).abs() < 1e-3);
    }

    #[test]
    fn test_strictly_decreasing_and_positive() {
        for rate in [0.5, 0.9, 0.99, 0.999] {
            let params = EmissionScheduleParams::new(1_300_000.0, rate, 50);
            let series = generate_emission_series(&params);

            assert!(series.iter().all(|e| *e > 0.0));
            for pair in series.windows(2) {
                assert!(pair[1] < pair[0], "rate {} not decreasing", rate);
            }
        }
    }

    #[test]
    fn test_generation_is_idempotent() {
        let a = generate_emission_series(&reference());
        let b = generate_emission_series(&reference());

        let bits_a: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let bits_b: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn test_adjusted_emissions() {
        let adjusted = adjusted_emissions(&[1_000_000.0, 500_000.0], 0.17, 0.1);

        assert!((adjusted[0] - 153_000.0).abs() < 1e-6);
        assert!((adjusted[1] - 76_500.0).abs() < 1e-6);
    }

    #[test]
    fn test_adjusted_emissions_without_fee() {
        let series = generate_emission_series(&reference());
        let adjusted = adjusted_emissions(&series, 0.17, 0.0);

        assert_eq!(adjusted.len(), series.len());
        assert!((adjusted[0] - 1_980_000.0 * 0.17).abs() < 1e-6);
    }

    #[test]
    fn test_redemption_above_one_goes_negative() {
        let adjusted = adjusted_emissions(&[1_000.0], 1.0, 1.5);
        assert!((adjusted[0] + 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_adjusted_ceiling() {
        let ceiling = adjusted_ceiling(2_000_000.0, 0.17, 0.0);
        assert!((ceiling - 340_000.0).abs() < 1e-6);
    }
}
