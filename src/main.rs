//! BuildCost Estimator - Command-line entry point
//!
//! Prices construction and interior projects from the terminal and
//! exports estimates as text or JSON.

use anyhow::{bail, Context};
use buildcost_estimator_lib::core::{
    Config, EstimateRequest, EstimateResult, EstimationError, FeatureCost, RawEstimateRequest,
};
use buildcost_estimator_lib::estimator::CostEstimator;
use buildcost_estimator_lib::format::CurrencyFormat;
use buildcost_estimator_lib::i18n::I18n;
use buildcost_estimator_lib::pricing::PricingTable;
use buildcost_estimator_lib::report::{EstimateReport, ReportFormat, TextStyle};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const EXIT_SUCCESS: u8 = 0;
/// Exit code for configuration and I/O failures
const EXIT_FAILURE: u8 = 1;
/// Exit code for requests the estimator rejects
const EXIT_INVALID_REQUEST: u8 = 2;

#[derive(Parser)]
#[command(
    name = "buildcost",
    version,
    about = "Estimate construction and interior project costs"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to the user config directory)
    #[arg(long, value_name = "PATH", global = true, env = "BUILDCOST_CONFIG")]
    config: Option<PathBuf>,

    /// Output language: auto, en, hi (overrides the config file)
    #[arg(long, value_name = "LANG", global = true)]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Estimate the cost of a project
    Estimate(EstimateArgs),

    /// Show the active price list
    Pricing,

    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Print the configuration file location
    Path,
    /// Write the default configuration
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Args)]
struct EstimateArgs {
    /// Project kind: construction or interior
    #[arg(long, default_value = "construction")]
    kind: String,

    /// Quality tier: basic, standard, premium or luxury
    #[arg(long, default_value = "standard")]
    tier: String,

    /// Area of one floor
    #[arg(long, required_unless_present = "input", allow_negative_numbers = true)]
    area: Option<f64>,

    /// Number of floors
    #[arg(long, default_value_t = 1.0, allow_negative_numbers = true)]
    floors: f64,

    /// Add-on to include (repeatable), e.g. parking, landscaping, compoundWall
    #[arg(long = "feature", value_name = "FEATURE")]
    features: Vec<String>,

    /// Read the request from a JSON file ("-" for stdin) instead of flags
    #[arg(
        long,
        value_name = "PATH",
        conflicts_with_all = ["kind", "tier", "area", "floors", "features"]
    )]
    input: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Write the estimate to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Print a short summary with lakh/crore (or K/M) amounts
    #[arg(long)]
    compact: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Json => ReportFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    let outcome = run(cli, &mut stdout.lock(), &mut stderr.lock());
    ExitCode::from(exit_status(outcome))
}

/// Map the outcome of `run` to the process exit status
fn exit_status(outcome: anyhow::Result<u8>) -> u8 {
    match outcome {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            EXIT_FAILURE
        }
    }
}

fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<u8> {
    let Cli { command, config, lang } = cli;

    match command {
        Command::Config { action } => config_command(&action, config.as_deref(), out),
        Command::Estimate(args) => {
            let (config, i18n, estimator) = setup(config.as_deref(), lang.as_deref())?;
            estimate_command(&args, &estimator, &config, &i18n, out, err)
        }
        Command::Pricing => {
            let (config, i18n, estimator) = setup(config.as_deref(), lang.as_deref())?;
            print_pricing(estimator.table(), &config, &i18n, out)?;
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Load config, pick the language and build the estimator from the price list
fn setup(path: Option<&Path>, lang: Option<&str>) -> anyhow::Result<(Config, I18n, CostEstimator)> {
    let config = load_config(path)?;
    let lang = lang.unwrap_or(&config.general.language);
    if !I18n::is_supported(lang) {
        log::warn!("Unsupported language '{}', using English", lang);
    }
    let i18n = I18n::new(lang);
    let table = PricingTable::from_config(&config.pricing).context("Invalid price list")?;
    Ok((config, i18n, CostEstimator::new(table)))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::load().unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Config::default()
        })),
    }
}

fn config_command(action: &ConfigAction, explicit: Option<&Path>, out: &mut dyn Write) -> anyhow::Result<u8> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => Config::config_path()?,
    };

    match action {
        ConfigAction::Path => writeln!(out, "{}", path.display())?,
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let config = Config::default();
            match explicit {
                Some(p) => config.save_to(p)?,
                None => config.save()?,
            }
            writeln!(out, "Wrote {}", path.display())?;
        }
    }
    Ok(EXIT_SUCCESS)
}

fn read_request(args: &EstimateArgs) -> anyhow::Result<RawEstimateRequest> {
    let Some(input) = &args.input else {
        return Ok(RawEstimateRequest {
            project_kind: args.kind.clone(),
            quality_tier: args.tier.clone(),
            area: args.area.unwrap_or(f64::NAN),
            floors: args.floors,
            selected_features: args.features.clone(),
        });
    };

    let content = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(input)
            .with_context(|| format!("Failed to read {}", input.display()))?
    };
    serde_json::from_str(&content).context("Request is not valid JSON")
}

fn evaluate(
    raw: &RawEstimateRequest,
    estimator: &CostEstimator,
) -> Result<(EstimateRequest, EstimateResult), EstimationError> {
    let request = raw.parse()?;
    let result = estimator.estimate(&request)?;
    Ok((request, result))
}

/// Neutral message on stdout, the detail on stderr
fn reject(e: &EstimationError, i18n: &I18n, out: &mut dyn Write, err: &mut dyn Write) -> anyhow::Result<u8> {
    writeln!(out, "{}", i18n.estimation_error(e))?;
    writeln!(err, "{}", e)?;
    Ok(EXIT_INVALID_REQUEST)
}

fn estimate_command(
    args: &EstimateArgs,
    estimator: &CostEstimator,
    config: &Config,
    i18n: &I18n,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> anyhow::Result<u8> {
    let raw = read_request(args)?;
    let (request, result) = match evaluate(&raw, estimator) {
        Ok(pair) => pair,
        Err(e) => return reject(&e, i18n, out, err),
    };

    let currency = CurrencyFormat::from_config(&config.display);
    let style = TextStyle {
        i18n,
        currency: &currency,
        area_unit: &config.display.area_unit,
    };
    let report = EstimateReport::new(request, result);

    if let Some(path) = &args.output {
        report.write_to(path, args.format.into(), &style)?;
        writeln!(out, "{}", path.display())?;
    } else if args.compact || config.display.compact {
        print_summary(&report, &style, out)?;
    } else {
        write!(out, "{}", report.render(args.format.into(), &style)?)?;
    }

    Ok(EXIT_SUCCESS)
}

fn print_summary(report: &EstimateReport, style: &TextStyle<'_>, out: &mut dyn Write) -> std::io::Result<()> {
    let i18n = style.i18n;
    let res = &report.result;
    let rows = [
        ("report.base_cost", res.base_cost),
        ("report.additional_cost", res.additional_cost),
        ("report.total_cost", res.total_cost),
    ];
    for (key, amount) in rows {
        writeln!(out, "{:<20}{}", i18n.get(key), style.compact(amount))?;
    }
    writeln!(
        out,
        "{:<20}{} {}",
        i18n.get("report.timeline"),
        res.timeline_months,
        i18n.get("report.months")
    )
}

fn print_pricing(table: &PricingTable, config: &Config, i18n: &I18n, out: &mut dyn Write) -> std::io::Result<()> {
    let currency = CurrencyFormat::from_config(&config.display);
    let unit = &config.display.area_unit;
    let style = TextStyle {
        i18n,
        currency: &currency,
        area_unit: unit,
    };

    writeln!(
        out,
        "{} - {} ({})",
        i18n.get("app.title"),
        i18n.get("pricing.title"),
        config.display.currency
    )?;
    writeln!(out, "{}", "=".repeat(46))?;
    for kind in table.kinds() {
        writeln!(out, "\n{}", i18n.kind_label(kind))?;
        for (tier, range) in table.tiers(kind).into_iter().flatten() {
            let value = match (range.min, range.max) {
                (Some(min), Some(max)) => {
                    format!("{} - {} / {}", style.amount(min), style.amount(max), unit)
                }
                _ => i18n.get("pricing.incomplete"),
            };
            writeln!(out, "  {:<12}{}", i18n.tier_label(*tier), value)?;
        }
    }

    writeln!(out, "\n{}", i18n.get("report.additional_features"))?;
    for (feature, cost) in table.features() {
        let value = match cost {
            FeatureCost::Flat { amount } => {
                format!("{} ({})", style.amount(*amount), i18n.get("pricing.flat"))
            }
            FeatureCost::PerArea { rate } => {
                format!("{} {}", style.amount(*rate), i18n.get("pricing.per_area"))
            }
        };
        writeln!(out, "  {:<18}{}", i18n.feature_label(*feature), value)?;
    }
    Ok(())
}
