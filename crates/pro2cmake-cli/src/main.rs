//! pro2cmake - project-file assignment converter
//!
//! Usage:
//!   pro2cmake fixup app.pro            # Fold backslash line continuations
//!   pro2cmake merge                    # Evaluate ./pro2cmake.toml
//!   pro2cmake apply += core --new gui  # Apply a single operation

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pro2cmake_core::config;
use pro2cmake_core::convert::{ConversionReport, convert};
use pro2cmake_core::fixup::fixup_line_continuation;
use pro2cmake_core::normalize::ValueMap;
use pro2cmake_core::operation::{Operation, OperationKind};

#[derive(Parser)]
#[command(name = "pro2cmake")]
#[command(about = "Project-file to build-system assignment converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fold backslash line continuations in a project file
    Fixup {
        /// File to process
        file: PathBuf,

        /// Rewrite the file instead of printing the result
        #[arg(long, short)]
        in_place: bool,
    },

    /// Evaluate the assignments of a conversion file
    Merge {
        /// Conversion file (defaults to ./pro2cmake.toml)
        #[arg(long, short)]
        config: Option<PathBuf>,

        /// Only report these variables
        #[arg(long = "key", short, value_name = "KEY")]
        keys: Vec<String>,

        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Apply a single operation and print the resulting values
    Apply {
        /// Operator (+=, *=, =, -=) or name (add, unique_add, set, remove)
        #[arg(allow_hyphen_values = true)]
        op: OperationKind,

        /// Values carried by the operation
        values: Vec<String>,

        /// Current target values
        #[arg(long = "new", value_name = "VALUE")]
        new_values: Vec<String>,

        /// Original source values
        #[arg(long = "old", value_name = "VALUE")]
        old_values: Vec<String>,

        /// Value rename applied while merging (FROM=TO)
        #[arg(long = "rename", value_name = "FROM=TO")]
        renames: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Machine-readable JSON
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pro2cmake=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Fixup { file, in_place } => run_fixup(&file, in_place)?,
        Commands::Merge {
            config,
            keys,
            format,
        } => run_merge(config.as_deref(), &keys, format)?,
        Commands::Apply {
            op,
            values,
            new_values,
            old_values,
            renames,
        } => run_apply(op, values, &new_values, &old_values, &renames)?,
    }

    Ok(())
}

fn run_fixup(file: &Path, in_place: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read project file: {}", file.display()))?;
    let fixed = fixup_line_continuation(&content);

    if in_place {
        if fixed != content {
            std::fs::write(file, &fixed)
                .with_context(|| format!("Failed to write project file: {}", file.display()))?;
            tracing::info!(file = %file.display(), "Folded line continuations");
        }
    } else {
        print!("{fixed}");
    }
    Ok(())
}

fn run_merge(explicit: Option<&Path>, keys: &[String], format: OutputFormat) -> Result<()> {
    let project_root = std::env::current_dir()?;
    let path = config::config_path(explicit, &project_root);
    let conversion = config::parse_config(&path)?;
    tracing::info!(
        config = %path.display(),
        assignments = conversion.assignments.len(),
        "Loaded conversion file"
    );

    let mut report = convert(&conversion);
    if !keys.is_empty() {
        report = report.select(keys)?;
    }

    match format {
        OutputFormat::Table => print_report(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

fn run_apply(
    kind: OperationKind,
    values: Vec<String>,
    new_values: &[String],
    old_values: &[String],
    renames: &[String],
) -> Result<()> {
    let map = build_value_map(renames)?;
    let op = Operation::new(kind, values);
    tracing::debug!(operation = %op, "Applying operation");

    for value in op.process(new_values, old_values, |v| map.normalize(v)) {
        println!("{value}");
    }
    Ok(())
}

fn build_value_map(renames: &[String]) -> Result<ValueMap> {
    renames.iter().try_fold(ValueMap::new(), |map, pair| {
        let (from, to) = ValueMap::parse_rename(pair)?;
        Ok(map.with_rename(from, to))
    })
}

fn print_report(report: &ConversionReport) {
    if report.variables.is_empty() {
        println!("No assignments found.");
        return;
    }

    println!("{:<24} Values", "Variable");
    println!("{}", "-".repeat(70));
    for variable in &report.variables {
        println!("{:<24} {}", variable.key, variable.values.join(" "));
        if !variable.removals.is_empty() {
            println!("{:<24} removed: {}", "", variable.removals.join(" "));
        }
    }
}
