//! Faker data extraction - CLI
//!
//! Regenerates the faker data header from a checked-out faker source tree.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use faker_extract::{
    commands::{GenerateConfig, check_sources, generate},
    core::{CIdent, IdentError},
    logging::init_logging,
    manifest::{JobConfig, Overrides},
    output::{print_check_report, print_generate_report},
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "faker_extract",
    about = "Extract faker name and word tables into a generated C header",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root of the faker source checkout (default: temp_faker)
    #[arg(short, long, global = true)]
    root: Option<PathBuf>,

    /// Header file to write (default: src/faker/faker_data.h)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Include guard macro (default: FAKER_DATA_H)
    #[arg(short, long, global = true, value_parser = parse_ident)]
    guard: Option<CIdent>,

    /// TOML manifest replacing the built-in list table
    #[arg(short, long, global = true)]
    manifest: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract all lists and write the header (default)
    Generate {
        /// Fail instead of emitting empty arrays for missing lists
        #[arg(long)]
        strict: bool,

        /// Print the header to stdout instead of writing it
        #[arg(long)]
        stdout: bool,
    },

    /// Extract all lists and report counts without writing anything
    Check,
}

fn parse_ident(s: &str) -> Result<CIdent, IdentError> {
    CIdent::new(s)
}

/// Plain `generate` when no subcommand is given
const fn default_command() -> Commands {
    Commands::Generate {
        strict: false,
        stdout: false,
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let overrides = Overrides {
        root: cli.root,
        output: cli.output,
        guard: cli.guard,
    };
    let job = JobConfig::resolve(cli.manifest.as_deref(), overrides)
        .context("failed to resolve list configuration")?;
    debug!(?job, "resolved job");

    let command = cli.command.unwrap_or_else(default_command);

    match command {
        Commands::Generate { strict, stdout } => run_generate_command(&job, strict, stdout),
        Commands::Check => run_check_command(&job),
    }
}

fn run_generate_command(job: &JobConfig, strict: bool, stdout: bool) -> Result<ExitCode> {
    let config = GenerateConfig {
        strict,
        dry_run: stdout,
    };
    let report = generate(job, config)
        .with_context(|| format!("failed to generate {}", job.output.display()))?;

    if stdout {
        print!("{}", report.header);
    } else {
        print_generate_report(&report);
    }
    Ok(ExitCode::SUCCESS)
}

fn run_check_command(job: &JobConfig) -> Result<ExitCode> {
    let report = check_sources(job).with_context(|| {
        format!("failed to read sources under {}", job.root.display())
    })?;

    print_check_report(&report);

    if report.is_complete() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
