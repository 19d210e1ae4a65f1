mod display;

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use epiguard_ai::{
    ApiKey, AssessmentView, AssessorSettings, GENERIC_FAILURE_MESSAGE, GeminiGenerator,
    RiskAssessmentClient,
};
use epiguard_core::reading::{HUMIDITY_RANGE_PCT, RAINFALL_RANGE_MM, TEMPERATURE_RANGE_C};
use epiguard_core::{EnvironmentalInput, Location, RiskReport};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "epiguard", version, about = "Water-borne disease outbreak risk for Northeast India")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the states and districts that can be assessed.
    Regions,
    /// Assess outbreak risk for one district.
    Assess(AssessArgs),
}

#[derive(Args)]
struct AssessArgs {
    #[arg(long, default_value = "Assam")]
    state: String,
    #[arg(long, default_value = "Guwahati")]
    district: String,
    /// Air temperature in °C (clamped to 10-45).
    #[arg(long, default_value_t = 28.0, value_parser = parse_reading)]
    temperature: f64,
    /// Relative humidity in % (clamped to 20-100).
    #[arg(long, default_value_t = 75.0, value_parser = parse_reading)]
    humidity: f64,
    /// Rainfall over the last 24 hours in mm (clamped to 0-300).
    #[arg(long, default_value_t = 15.0, value_parser = parse_reading)]
    rainfall: f64,
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long, env = "EPIGUARD_MODEL")]
    model: Option<String>,
    #[arg(long, env = "EPIGUARD_TIMEOUT_SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout_secs: Option<u64>,
    /// Print the assessment as JSON instead of a card.
    #[arg(long)]
    json: bool,
}

/// Readings must be finite; clamping cannot repair NaN or infinity.
fn parse_reading(s: &str) -> Result<f64, String> {
    let value = s.trim().parse::<f64>().map_err(|e| e.to_string())?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(format!("expected a finite number, got {s:?}"))
    }
}

/// JSON output of a successful `assess`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AssessmentRecord<'a> {
    input: &'a EnvironmentalInput,
    report: &'a RiskReport,
    model: &'a str,
    assessed_at: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("epiguard v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Regions => {
            display::print_regions()?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Assess(args) => run_assess(args).await,
    }
}

async fn run_assess(args: AssessArgs) -> anyhow::Result<ExitCode> {
    let location = Location::new(&args.state, &args.district).context("choosing location")?;
    let input = EnvironmentalInput::new(location, args.temperature, args.humidity, args.rainfall);
    let clamped = input.clamped();
    if clamped != input {
        tracing::warn!(
            temperature = ?TEMPERATURE_RANGE_C,
            humidity = ?HUMIDITY_RANGE_PCT,
            rainfall = ?RAINFALL_RANGE_MM,
            "readings clamped into range"
        );
    }

    let settings = apply_overrides(AssessorSettings::from_env()?, &args);
    let generator = GeminiGenerator::new(settings.base_url.clone()).with_timeout(settings.timeout)?;
    let client = RiskAssessmentClient::new(generator, settings);

    let mut view = AssessmentView::default();
    view.begin();
    view.finish(client.assess(&clamped).await);

    let report = match outcome(&view) {
        Ok(report) => report,
        Err(message) => {
            eprintln!("{message}");
            return Ok(ExitCode::FAILURE);
        }
    };

    if args.json {
        let record = AssessmentRecord {
            input: &clamped,
            report,
            model: &client.settings().model,
            assessed_at: chrono::Utc::now().to_rfc3339(),
        };
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        display::print_report_card(&clamped, report)?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Flags win over the environment. A blank `--api-key` leaves the
/// environment's key in place.
fn apply_overrides(mut settings: AssessorSettings, args: &AssessArgs) -> AssessorSettings {
    if let Some(key) = args.api_key.clone().and_then(ApiKey::new) {
        settings = settings.with_api_key(Some(key));
    }
    if let Some(model) = &args.model {
        settings = settings.with_model(model.clone());
    }
    if let Some(secs) = args.timeout_secs {
        settings = settings.with_timeout(Duration::from_secs(secs));
    }
    settings
}

/// The report to print, or the message to show before exiting with status 1.
fn outcome(view: &AssessmentView) -> Result<&RiskReport, &'static str> {
    if let Some(message) = view.error {
        return Err(message);
    }
    view.report.as_ref().ok_or(GENERIC_FAILURE_MESSAGE)
}
