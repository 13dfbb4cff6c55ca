//! Solve3 CLI
//!
//! Command-line interface for the calculator:
//! - Project emissions, presale earnings and farming returns
//! - Export projections
//! - Check a running API server
//! - Generate a config file

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use solve3::api::dto::{EmissionsQuery, FarmingQuery, PresaleQuery};
use solve3::calculator::{EmissionsProjection, FarmingProjection, PresaleProjection};
use solve3::config::{Config, DashboardDefaults};
use solve3::report::{Report, ReportFormat, ReportKind};

#[derive(Parser)]
#[command(name = "solve3")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Emission and earnings projections for Solve3")]
#[command(long_about = "Solve3 investor calculator.\nProject token emissions, presale earnings and farming returns from the command line.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search the usual locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// API server URL
    #[arg(long, default_value = "http://localhost:8090", global = true)]
    pub api_url: String,

    /// Output format (table, json, csv)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Token and dollar emissions per epoch
    Emissions {
        #[command(flatten)]
        schedule: ScheduleArgs,
        /// Token price in $
        #[arg(long)]
        token_price: Option<f64>,
        /// Service fee deducted from dollar emissions
        #[arg(long)]
        redemption_rate: Option<f64>,
    },

    /// Weekly and cumulative presale earnings
    Presale {
        #[command(flatten)]
        schedule: ScheduleArgs,
        #[command(flatten)]
        presale: PresaleArgs,
    },

    /// Fee split and emission earnings of a farm
    Farming {
        /// Total value locked in $
        #[arg(long)]
        total_tvl: Option<f64>,
        /// Your farm in $
        #[arg(long)]
        my_farm: Option<f64>,
        /// Your usual fees in $
        #[arg(long)]
        my_fees: Option<f64>,
        /// Emissions per epoch in $
        #[arg(long)]
        emissions_per_epoch: Option<f64>,
    },

    /// Export a projection (emissions or presale)
    Export {
        /// Report to export
        #[arg(default_value = "presale")]
        report: String,
        #[command(flatten)]
        schedule: ScheduleArgs,
        #[command(flatten)]
        presale: PresaleArgs,
        /// Service fee (emissions report)
        #[arg(long)]
        redemption_rate: Option<f64>,
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the default inputs
    Defaults,

    /// Show API server status
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Emission schedule flags shared by several commands
#[derive(Args, Clone, Copy)]
pub struct ScheduleArgs {
    /// Emission basis (epoch 1 emits base * decay)
    #[arg(long)]
    base_emission: Option<f64>,
    /// Per-epoch decay factor
    #[arg(long)]
    decay_rate: Option<f64>,
    /// Number of epochs
    #[arg(long)]
    horizon: Option<u32>,
}

/// Presale investor flags
#[derive(Args, Clone, Copy)]
pub struct PresaleArgs {
    /// Amount invested in $
    #[arg(long)]
    investment: Option<f64>,
    /// Token price in $
    #[arg(long)]
    token_price: Option<f64>,
    /// Fees and bribes per epoch in $
    #[arg(long)]
    fees_and_bribes: Option<f64>,
    /// Fraction of emissions that gets locked
    #[arg(long)]
    locking_rate: Option<f64>,
    /// Supply locked before emissions start
    #[arg(long)]
    base_supply_offset: Option<f64>,
}

impl PresaleArgs {
    fn query(&self, schedule: &ScheduleArgs) -> PresaleQuery {
        PresaleQuery {
            investment: self.investment,
            token_price: self.token_price,
            fees_and_bribes: self.fees_and_bribes,
            locking_rate: self.locking_rate,
            base_supply_offset: self.base_supply_offset,
            base_emission: schedule.base_emission,
            decay_rate: schedule.decay_rate,
            horizon: schedule.horizon,
        }
    }
}

impl ScheduleArgs {
    fn emissions_query(&self, token_price: Option<f64>, redemption_rate: Option<f64>) -> EmissionsQuery {
        EmissionsQuery {
            base_emission: self.base_emission,
            decay_rate: self.decay_rate,
            horizon: self.horizon,
            token_price,
            redemption_rate,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::resolve(cli.config.as_deref())?;
    // stdout carries the report itself
    config.logging.init_tracing_with(std::io::stderr);
    let defaults = &config.defaults;

    match cli.command {
        Commands::Emissions {
            schedule,
            token_price,
            redemption_rate,
        } => {
            let projection = emissions_projection(
                defaults,
                &schedule.emissions_query(token_price, redemption_rate),
            )?;
            print_report(&cli.format, &Report::from_emissions(&projection), &projection)?;
        }

        Commands::Presale { schedule, presale } => {
            let projection = presale_projection(defaults, &presale.query(&schedule))?;
            print_report(&cli.format, &Report::from_presale(&projection), &projection)?;

            if cli.format == "table" {
                println!();
                println!("First week:   ${:>12.2}", projection.first_week());
                println!("Total:        ${:>12.2}", projection.total_earnings);
            }
        }

        Commands::Farming {
            total_tvl,
            my_farm,
            my_fees,
            emissions_per_epoch,
        } => {
            let query = FarmingQuery {
                total_tvl,
                my_farm,
                my_fees,
                emissions_per_epoch,
            };
            let params = query.resolve(defaults);
            let projection = FarmingProjection::compute(&params)?;

            match cli.format.as_str() {
                "json" => println!("{}", serde_json::to_string_pretty(&projection)?),
                _ => print_farming(&projection),
            }
        }

        Commands::Export {
            report,
            schedule,
            presale,
            redemption_rate,
            output,
        } => {
            let kind = match ReportKind::parse(&report) {
                Some(kind) => kind,
                None => bail!("Unknown report '{}', expected emissions or presale", report),
            };

            let report = match kind {
                ReportKind::Emissions => {
                    let query = schedule.emissions_query(presale.token_price, redemption_rate);
                    Report::from_emissions(&emissions_projection(defaults, &query)?)
                }
                ReportKind::Presale => {
                    Report::from_presale(&presale_projection(defaults, &presale.query(&schedule))?)
                }
            };

            // "table" is not an export format
            let format = match cli.format.as_str() {
                "table" => ReportFormat::Csv,
                other => ReportFormat::parse(other).with_context(|| {
                    format!("Unknown format '{}', expected csv, json or ndjson", other)
                })?,
            };
            let data = report.render(format)?;

            match output {
                Some(path) => {
                    std::fs::write(&path, &data)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Exported {} epochs to {:?}", report.rows.len(), path);
                }
                None => {
                    print!("{}", data);
                }
            }
        }

        Commands::Defaults => match cli.format.as_str() {
            "json" => println!("{}", serde_json::to_string_pretty(defaults)?),
            _ => print_defaults(defaults),
        },

        Commands::Status => {
            let client = reqwest::Client::new();
            let response = client.get(format!("{}/health", cli.api_url)).send().await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let health: serde_json::Value = resp.json().await?;

                    println!("Solve3 v{}", env!("CARGO_PKG_VERSION"));
                    println!();
                    println!(
                        "API Status: {}",
                        health["status"].as_str().unwrap_or("unknown")
                    );
                    println!(
                        "API Version: {}",
                        health["version"].as_str().unwrap_or("unknown")
                    );

                    if let Some(uptime) = health["uptime_seconds"].as_u64() {
                        println!();
                        println!("Uptime: {}", format_duration(uptime));
                    }
                }
                Ok(resp) => {
                    bail!("API returned error: {}", resp.status());
                }
                Err(e) => {
                    eprintln!("Cannot connect to Solve3 API at {}", cli.api_url);
                    eprintln!();
                    eprintln!("Make sure the Solve3 API server is running:");
                    eprintln!("  cargo run --bin solve3-api");
                    return Err(e.into());
                }
            }
        }

        Commands::Config { output } => {
            let config = solve3::config::generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &config)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", config);
                }
            }
        }
    }

    Ok(())
}

fn emissions_projection(
    defaults: &DashboardDefaults,
    query: &EmissionsQuery,
) -> anyhow::Result<EmissionsProjection> {
    let inputs = query.resolve(defaults);
    Ok(EmissionsProjection::compute(
        &inputs.schedule,
        inputs.token_price,
        inputs.redemption_rate,
    )?)
}

fn presale_projection(
    defaults: &DashboardDefaults,
    query: &PresaleQuery,
) -> anyhow::Result<PresaleProjection> {
    let inputs = query.resolve(defaults);
    Ok(PresaleProjection::compute(&inputs.schedule, &inputs.presale)?)
}

fn print_report<P: serde::Serialize>(
    format: &str,
    report: &Report,
    projection: &P,
) -> anyhow::Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(projection)?),
        "csv" => print!("{}", report.to_csv()?),
        _ => print_table(report),
    }
    Ok(())
}

fn print_table(report: &Report) {
    print!("{:<6}", "Epoch");
    for column in &report.columns {
        print!(" | {:>22}", column);
    }
    println!();

    println!("{}", "-".repeat(6 + report.columns.len() * 25));

    for (epoch, values) in &report.rows {
        print!("{:<6}", epoch);
        for value in values {
            print!(" | {:>22.2}", value);
        }
        println!();
    }
}

fn print_farming(projection: &FarmingProjection) {
    let result = &projection.result;

    println!("Fees kept on Solve3:      ${:>14.2}", result.fees_kept);
    println!("Additional earnings:      ${:>14.2}", result.additional_earnings);
    println!("Total earnings on Solve3: ${:>14.2}", projection.total_earnings);
    println!("Share of TVL:             {:>14.2}%", result.farm_share * 100.0);

    match &projection.tvl_breakdown {
        Some(tvl) => {
            println!();
            println!("My farm:      ${:>14.2}", tvl.my_farm);
            println!("Rest of TVL:  ${:>14.2}", tvl.rest_of_tvl);
        }
        None => {
            println!();
            println!("Total TVL should be greater than 0 to show the TVL breakdown.");
        }
    }

    match &projection.fee_comparison {
        Some(fees) => {
            println!();
            println!("{:<32} {:>14}", "Fees comparison", "Amount ($)");
            println!("{}", "-".repeat(47));
            println!("{:<32} {:>14.2}", "Total fees", fees.total_fees);
            println!("{:<32} {:>14.2}", "Fees received on Orca", fees.orca);
            println!("{:<32} {:>14.2}", "Fees received on Raydium", fees.raydium);
            println!("{:<32} {:>14.2}", "Fees received on Solve3", fees.solve3_fees);
            println!("{:<32} {:>14.2}", "Additional earnings on Solve3", fees.solve3_additional);
            println!("{:<32} {:>14.2}", "Total earnings on Solve3", fees.solve3_total);
        }
        None => {
            println!();
            println!("Usual fees should be greater than 0 to show the fees comparison.");
        }
    }
}

fn print_defaults(defaults: &DashboardDefaults) {
    let schedule = &defaults.schedule;
    let presale = &defaults.presale;
    let farming = &defaults.farming;

    println!("Emission schedule");
    println!("  base_emission:       {}", schedule.base_emission);
    println!("  decay_rate:          {}", schedule.decay_rate);
    println!("  horizon:             {}", schedule.horizon);
    println!();
    println!("Presale");
    println!("  investment:          {}", presale.investment);
    println!("  token_price:         {}", presale.token_price);
    println!("  fees_and_bribes:     {}", presale.fees_and_bribes);
    println!("  locking_rate:        {}", presale.locking_rate);
    println!("  base_supply_offset:  {}", presale.base_supply_offset);
    println!();
    println!("Emissions");
    println!("  token_price:         {}", defaults.emissions.token_price);
    println!("  redemption_rate:     {}", defaults.emissions.redemption_rate);
    println!();
    println!("Farming");
    println!("  total_tvl:           {}", farming.total_tvl);
    println!("  my_farm:             {}", farming.my_farm);
    println!("  my_fees:             {}", farming.my_fees);
    println!("  emissions_per_epoch: {}", farming.emissions_per_epoch);
}

fn format_duration(seconds: u64) -> String {
    if seconds < 60 {
        format!("{}s", seconds)
    } else if seconds < 3600 {
        format!("{}m {}s", seconds / 60, seconds % 60)
    } else if seconds < 86400 {
        format!("{}h {}m", seconds / 3600, (seconds % 3600) / 60)
    } else {
        format!("{}d {}h", seconds / 86400, (seconds % 86400) / 3600)
    }
}
