use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use analytica_cli::config::{AppConfig, InputOverrides};
use analytica_cli::report::{AnalysisReport, MetricTable, StateList};
use analytica_cli::{app, logging};
use analytica_core::{
    AbortionStance, GunStance, MinimumWagePreference, MovingPreferences, PoliticalPreference,
    PopulationPreference,
};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Estimates the annual financial impact of moving between two US states.
///
/// States come from a SQLite database filled by `analytica-data-loader` or
/// from the State Analytica web API.
#[derive(Debug, Parser)]
#[command(name = "analytica")]
struct Cli {
    /// TOML file with provider, default input and logging settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Provider backend (`sqlite` or `http`). Overrides the config file.
    #[arg(long)]
    backend: Option<String>,

    /// Provider connection string: a SQLite path, `:memory:`, or an API base
    /// URL. Overrides the config file.
    #[arg(long)]
    source: Option<String>,

    /// Log at debug level.
    #[arg(long, short, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress console log output. File logging is unaffected.
    #[arg(long, short)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Estimate the financial impact of a move and compare preferences.
    Estimate(EstimateArgs),
    /// Show the statistics of two states side by side.
    Compare {
        #[arg(long)]
        from: Option<String>,
        #[arg(long)]
        to: Option<String>,
    },
    /// List every state with its headline tax and cost figures.
    List,
}

#[derive(Debug, Args)]
struct EstimateArgs {
    /// Origin state. Defaults to California, or the first state.
    #[arg(long)]
    from: Option<String>,

    /// Destination state. Defaults to Texas, or the second state.
    #[arg(long)]
    to: Option<String>,

    /// Annual gross income in USD.
    #[arg(long)]
    income: Option<Decimal>,

    /// Value of the home you expect to own, in USD.
    #[arg(long)]
    house_value: Option<Decimal>,

    /// Percent of income saved, 0-100.
    #[arg(long)]
    savings_rate: Option<Decimal>,

    /// `high` or `low`.
    #[arg(long, default_value = "high", value_parser = parse_minimum_wage)]
    minimum_wage: MinimumWagePreference,

    /// `pro-choice` or `pro-life`.
    #[arg(long, default_value = "pro-choice", value_parser = parse_abortion)]
    abortion: AbortionStance,

    /// `pro-2A` or `pro-gun-laws`.
    #[arg(long, default_value = "pro-2A", value_parser = parse_gun)]
    gun: GunStance,

    /// `red` or `blue`.
    #[arg(long, default_value = "red", value_parser = parse_political)]
    political: PoliticalPreference,

    /// `small-town` or `city`.
    #[arg(long, default_value = "small-town", value_parser = parse_population)]
    population: PopulationPreference,
}

impl EstimateArgs {
    fn overrides(&self) -> InputOverrides {
        InputOverrides {
            income: self.income,
            house_value: self.house_value,
            savings_rate: self.savings_rate,
        }
    }

    fn preferences(&self) -> MovingPreferences {
        MovingPreferences {
            minimum_wage: self.minimum_wage,
            abortion: self.abortion,
            gun: self.gun,
            political: self.political,
            population: self.population,
        }
    }
}

fn parse_minimum_wage(s: &str) -> Result<MinimumWagePreference, String> {
    MinimumWagePreference::parse(s).ok_or_else(|| format!("expected high or low, got '{s}'"))
}

fn parse_abortion(s: &str) -> Result<AbortionStance, String> {
    AbortionStance::parse(s).ok_or_else(|| format!("expected pro-choice or pro-life, got '{s}'"))
}

fn parse_gun(s: &str) -> Result<GunStance, String> {
    GunStance::parse(s).ok_or_else(|| format!("expected pro-2A or pro-gun-laws, got '{s}'"))
}

fn parse_political(s: &str) -> Result<PoliticalPreference, String> {
    PoliticalPreference::parse(s).ok_or_else(|| format!("expected red or blue, got '{s}'"))
}

fn parse_population(s: &str) -> Result<PopulationPreference, String> {
    PopulationPreference::parse(s).ok_or_else(|| format!("expected small-town or city, got '{s}'"))
}

// ─── logging ─────────────────────────────────────────────────────────────────

fn init_logging(
    cli: &Cli,
    config: &AppConfig,
) -> anyhow::Result<()> {
    logging::init_logging(config.logging.level.as_deref());

    if cli.verbose {
        logging::set_log_level("debug")?;
    }
    if cli.quiet {
        logging::set_console_enabled(false)?;
    }
    if let Some(path) = &config.logging.file {
        logging::enable_file_logging(path)?;
    }
    Ok(())
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_optional(cli.config.as_deref()).context("Failed to load config")?;
    init_logging(&cli, &config).context("Failed to initialize logging")?;

    let provider_config = config.provider_config(cli.backend.as_deref(), cli.source.as_deref());
    debug!("connecting to {} backend", provider_config.backend);

    let registry = app::build_registry();
    let provider = registry
        .create(&provider_config)
        .await
        .with_context(|| format!("Failed to open {} provider", provider_config.backend))?;

    match &cli.command {
        Command::Estimate(args) => {
            let inputs = config.moving_inputs(args.overrides());
            let analysis = app::run_estimate(
                &*provider,
                args.from.as_deref(),
                args.to.as_deref(),
                inputs.clone(),
                args.preferences(),
            )
            .await
            .context("Estimate failed")?;

            for warning in &analysis.estimate.warnings {
                warn!("{}", warning);
            }
            print!(
                "{}",
                AnalysisReport {
                    analysis: &analysis,
                    inputs: &inputs,
                }
            );
        }
        Command::Compare { from, to } => {
            let (from, to, metrics) = app::run_compare(&*provider, from.as_deref(), to.as_deref())
                .await
                .context("Comparison failed")?;

            print!(
                "{}",
                MetricTable {
                    from: &from,
                    to: &to,
                    metrics: &metrics,
                }
            );
        }
        Command::List => {
            let states = app::run_list(&*provider)
                .await
                .context("Failed to list states")?;

            print!("{}", StateList(&states));
        }
    }

    logging::disable_file_logging();
    Ok(())
}
