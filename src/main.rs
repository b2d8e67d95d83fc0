//! BMI Calculator
//!
//! Command-line front end for the BMI engine.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use bmicalc::build_info::BuildInfo;
use bmicalc::conversion::{convert_height, convert_weight, HeightUnit, WeightUnit};
use bmicalc::engine::GaugeReading;
use bmicalc::models::{BmiResult, HeightMeasurement, ValidationError};
use bmicalc::tools::{
    height_hint, parse_height_cm, parse_height_feet_inches, parse_number, weight_hint, RawInput,
    Session, SessionError,
};

#[derive(Parser, Debug)]
#[command(name = "bmicalc", version, about = "BMI calculator with unit conversion and text reports")]
struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate BMI and optionally save a text report
    Calculate {
        #[arg(long, allow_hyphen_values = true)]
        weight: String,
        #[arg(long, default_value = "kg", value_parser = parse_weight_unit)]
        weight_unit: WeightUnit,
        #[arg(long, default_value = "cm", value_parser = parse_height_unit)]
        height_unit: HeightUnit,
        #[arg(long, default_value = "", allow_hyphen_values = true, help = "Height in centimeters")]
        height: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        feet: String,
        #[arg(long, default_value = "", allow_hyphen_values = true)]
        inches: String,
        #[arg(long, help = "Save a text report of the result")]
        report: bool,
        #[arg(long, help = "Report directory (defaults to $BMICALC_REPORT_DIR)")]
        output: Option<PathBuf>,
    },
    /// Show a weight in the other unit
    ConvertWeight {
        #[arg(allow_hyphen_values = true)]
        value: String,
        #[arg(long, default_value = "kg", value_parser = parse_weight_unit)]
        from: WeightUnit,
    },
    /// Show a height in the other representation
    ConvertHeight {
        #[arg(long, allow_hyphen_values = true, conflicts_with_all = ["feet", "inches"])]
        cm: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        feet: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        inches: Option<String>,
    },
    /// Print build information
    Version,
}

fn parse_weight_unit(s: &str) -> Result<WeightUnit, String> {
    WeightUnit::from_str(s).ok_or_else(|| format!("unknown weight unit '{}' (use kg or lb)", s))
}

fn parse_height_unit(s: &str) -> Result<HeightUnit, String> {
    HeightUnit::from_str(s).ok_or_else(|| format!("unknown height unit '{}' (use cm or ft-in)", s))
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
struct CalculateResponse<'a> {
    result: &'a BmiResult,
    category_label: &'static str,
    category_class: &'static str,
    gauge: GaugeReading,
    report_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct ConvertWeightResponse {
    value: f64,
    unit: WeightUnit,
    converted: f64,
    converted_unit: WeightUnit,
    hint: String,
}

#[derive(Debug, Serialize)]
struct ConvertHeightResponse {
    height: HeightMeasurement,
    converted: HeightMeasurement,
    hint: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse<'a> {
    error: &'static str,
    message: &'a str,
}

/// Get the report directory from environment or use default
fn get_report_dir() -> PathBuf {
    std::env::var("BMICALC_REPORT_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let mut path = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
                .unwrap_or_else(|| PathBuf::from("."));

            // Go up from target/release or target/debug to project root
            if path.ends_with("release") || path.ends_with("debug") {
                if let Some(parent) = path.parent() {
                    if let Some(grandparent) = parent.parent() {
                        path = grandparent.to_path_buf();
                    }
                }
            }

            path.push("reports");
            path
        })
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only results
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("bmicalc=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let json = cli.json;

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Validation(e)) => {
            let message = e.to_string();
            if json {
                let body = ErrorResponse {
                    error: e.code(),
                    message: &message,
                };
                if let Ok(text) = serde_json::to_string(&body) {
                    println!("{}", text);
                }
            }
            eprintln!("{}", message);
            ExitCode::from(2)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Calculate {
            weight,
            weight_unit,
            height_unit,
            height,
            feet,
            inches,
            report,
            output,
        } => {
            let input = RawInput {
                weight,
                weight_unit,
                height_unit,
                height_cm: height,
                feet,
                inches,
            };
            let report_dir = report.then(|| output.unwrap_or_else(get_report_dir));
            calculate(&input, report_dir, cli.json)
        }
        Commands::ConvertWeight { value, from } => convert_weight_command(&value, from, cli.json),
        Commands::ConvertHeight { cm, feet, inches } => {
            let height = match cm {
                Some(raw) => parse_height_cm(&raw)?,
                None => parse_height_feet_inches(
                    feet.as_deref().unwrap_or_default(),
                    inches.as_deref().unwrap_or_default(),
                ),
            };
            convert_height_command(&height, cli.json)
        }
        Commands::Version => {
            let info = BuildInfo::current();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{}", info.summary());
            }
            Ok(())
        }
    }
}

fn calculate(input: &RawInput, report_dir: Option<PathBuf>, json: bool) -> Result<(), CliError> {
    let mut session = Session::new();
    session.calculate(input)?;

    let report_path = match report_dir {
        Some(dir) => Some(session.download_report(&dir)?),
        None => None,
    };

    let result = session.last_calculation().ok_or(SessionError::NoCalculation)?;
    let gauge = session.gauge();

    if json {
        let response = CalculateResponse {
            result,
            category_label: result.category.display_name(),
            category_class: result.category.css_class(),
            gauge,
            report_path: report_path.as_ref().map(|p| p.display().to_string()),
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    println!("BMI: {}", result.format_value());
    println!("Category: {}", result.category.display_name());
    println!("Gauge: {:.1}%", gauge.fill_percent);

    let weight = &result.weight;
    match weight_hint(weight.value(), weight.unit()) {
        Some(hint) => println!("Weight: {} ({})", weight.format_original(), hint),
        None => println!("Weight: {}", weight.format_original()),
    }
    match height_hint(&result.height) {
        Some(hint) => println!("Height: {} ({})", result.height.format_original(), hint),
        None => println!("Height: {}", result.height.format_original()),
    }

    if let Some(path) = report_path {
        println!("Report saved to: {}", path.display());
    }

    Ok(())
}

fn convert_weight_command(raw: &str, from: WeightUnit, json: bool) -> Result<(), CliError> {
    let value = parse_number(raw).ok_or(ValidationError::InvalidMeasurement)?;
    let (converted, converted_unit) = convert_weight(value, from)?;
    let hint = weight_hint(value, from).ok_or(ValidationError::InvalidMeasurement)?;

    if json {
        let response = ConvertWeightResponse {
            value,
            unit: from,
            converted,
            converted_unit,
            hint,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", hint);
    }
    Ok(())
}

fn convert_height_command(height: &HeightMeasurement, json: bool) -> Result<(), CliError> {
    let hint = height_hint(height).ok_or(ValidationError::InvalidMeasurement)?;

    if json {
        let response = ConvertHeightResponse {
            height: *height,
            converted: convert_height(height),
            hint,
        };
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", hint);
    }
    Ok(())
}
