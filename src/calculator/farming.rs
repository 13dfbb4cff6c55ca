//! Farming split
//!
//! Solve3 keeps a quarter of a farmer's trading fees and pays emissions pro
//! rata to the farmer's share of TVL. The comparison against other venues
//! uses their published fee retention.

use super::types::{
    FarmingParams, FarmingResult, FeeComparison, TvlBreakdown, ORCA_FEE_RETENTION,
    RAYDIUM_FEE_RETENTION, SOLVE3_FEE_RETENTION,
};

/// Split a farming position into kept fees and emission earnings.
///
/// An empty pool (`total_tvl <= 0`) earns no emissions and has no share.
pub fn farming_split(params: &FarmingParams) -> FarmingResult {
    let fees_kept = SOLVE3_FEE_RETENTION * params.my_fees;

    let (additional_earnings, farm_share) = if params.total_tvl > 0.0 {
        (
            params.emissions_per_epoch * params.my_farm / params.total_tvl,
            params.my_farm / params.total_tvl,
        )
    } else {
        (0.0, 0.0)
    };

    FarmingResult {
        fees_kept,
        additional_earnings,
        farm_share,
    }
}

/// Pie chart slices, `None` for an empty pool
pub fn tvl_breakdown(params: &FarmingParams) -> Option<TvlBreakdown> {
    if params.total_tvl <= 0.0 {
        return None;
    }
    Some(TvlBreakdown {
        my_farm: params.my_farm,
        rest_of_tvl: params.total_tvl - params.my_farm,
    })
}

/// Fee comparison bars, `None` when the position earns no fees
pub fn fee_comparison(params: &FarmingParams, result: &FarmingResult) -> Option<FeeComparison> {
    if params.my_fees <= 0.0 {
        return None;
    }
    Some(FeeComparison {
        total_fees: params.my_fees,
        orca: ORCA_FEE_RETENTION * params.my_fees,
        raydium: RAYDIUM_FEE_RETENTION * params.my_fees,
        solve3_fees: result.fees_kept,
        solve3_additional: result.additional_earnings,
        solve3_total: result.total_earnings(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_split() {
        let result = farming_split(&FarmingParams::default());

        assert!((result.fees_kept - 11_250.0).abs() < 1e-9);
        assert!((result.additional_earnings - 12_000.0).abs() < 1e-9);
        assert!((result.farm_share - 0.04).abs() < 1e-12);
        assert!((result.total_earnings() - 23_250.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_tvl_guard() {
        let params = FarmingParams {
            total_tvl: 0.0,
            my_farm: 5_000_000.0,
            ..Default::default()
        };
        let result = farming_split(&params);

        assert_eq!(result.additional_earnings, 0.0);
        assert_eq!(result.farm_share, 0.0);
        assert!((result.fees_kept - 11_250.0).abs() < 1e-9);
    }

    #[test]
    fn test_tvl_breakdown() {
        let slices = tvl_breakdown(&FarmingParams::default()).unwrap();
        assert_eq!(slices.my_farm, 1_000_000.0);
        assert_eq!(slices.rest_of_tvl, 24_000_000.0);

        let empty = FarmingParams {
            total_tvl: 0.0,
            ..Default::default()
        };
        assert!(tvl_breakdown(&empty).is_none());
    }

    #[test]
    fn test_oversized_farm_is_not_clamped() {
        let params = FarmingParams {
            total_tvl: 1_000.0,
            my_farm: 1_500.0,
            ..Default::default()
        };
        assert_eq!(tvl_breakdown(&params).unwrap().rest_of_tvl, -500.0);
    }

    #[test]
    fn test_fee_comparison() {
        let params = FarmingParams::default();
        let result = farming_split(&params);
        let bars = fee_comparison(&params, &result).unwrap();

        assert_eq!(bars.total_fees, 15_000.0);
        assert!((bars.orca - 13_050.0).abs() < 1e-9);
        assert!((bars.raydium - 12_600.0).abs() < 1e-9);
        assert!((bars.solve3_fees - 11_250.0).abs() < 1e-9);
        assert!((bars.solve3_total - 23_250.0).abs() < 1e-9);
    }

    #[test]
    fn test_fee_comparison_requires_fees() {
        let params = FarmingParams {
            my_fees: 0.0,
            ..Default::default()
        };
        let result = farming_split(&params);
        assert!(fee_comparison(&params, &result).is_none());
    }
}
