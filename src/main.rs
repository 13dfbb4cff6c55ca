//! Solve3 Calculator
//!
//! Prints the presale and farming projections for the configured defaults.

use solve3::calculator::{EmissionsProjection, FarmingProjection, PresaleProjection};
use solve3::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load_default();
    config.logging.init_tracing();

    tracing::info!("Solve3 Investor Calculator v{}", env!("CARGO_PKG_VERSION"));

    let defaults = &config.defaults;

    let presale = PresaleProjection::compute(&defaults.schedule, &defaults.presale)?;
    tracing::info!(
        "Presale: ${:.0} at ${:.2}/token, ${:.0} fees and bribes, {:.0}% locking",
        defaults.presale.investment,
        defaults.presale.token_price,
        defaults.presale.fees_and_bribes,
        defaults.presale.locking_rate * 100.0
    );
    tracing::info!(
        "Earnings: ${:.2} in week 1, ${:.2} after {} weeks",
        presale.first_week(),
        presale.total_earnings,
        presale.epochs.len()
    );

    let emissions = EmissionsProjection::compute(
        &defaults.schedule,
        defaults.emissions.token_price,
        defaults.emissions.redemption_rate,
    )?;
    tracing::info!(
        "Emissions: {:.0} tokens over {} epochs (${:.0} at epoch 1)",
        emissions.total_emitted(),
        emissions.epochs.len(),
        emissions.adjusted_emissions.first().copied().unwrap_or(0.0)
    );

    let farming = FarmingProjection::compute(&defaults.farming)?;
    tracing::info!(
        "Farming: ${:.2} fees kept + ${:.2} emissions = ${:.2} per epoch ({:.2}% of TVL)",
        farming.result.fees_kept,
        farming.result.additional_earnings,
        farming.total_earnings,
        farming.result.farm_share * 100.0
    );

    Ok(())
}
