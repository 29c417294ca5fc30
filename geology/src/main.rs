//! Landscape validator CLI.
//!
//! Checks case files (`{ point_count, modifications, expected_heights }`)
//! by simulating the modifications over a flat landscape and comparing the
//! result with the expected heights.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use geology::check::{CheckOutcome, check_case_file, simulate_modifications};
use geology::core::types::Modification;
use geology::exit_codes;
use geology::io::case::discover_cases;
use geology::io::config::{DEFAULT_CONFIG_FILE, GeologyConfig, load_config, write_config};
use geology::logging;

#[derive(Parser)]
#[command(
    name = "geology",
    version,
    about = "Validate landscapes built from range operations"
)]
struct Cli {
    /// Config file (TOML). Missing file means defaults.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the default config file.
    Init {
        /// Overwrite an existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Check case files against their expected heights.
    Check {
        /// Case files (JSON).
        cases: Vec<PathBuf>,
        /// Also check every `*.json` case in this directory.
        #[arg(long)]
        dir: Option<PathBuf>,
    },
    /// Print the landscape produced by a list of modifications.
    Simulate {
        /// Number of points in the landscape.
        #[arg(long)]
        points: usize,
        /// Modifications as `x1:x2:kind`, e.g. `1:7:hill`.
        #[arg(allow_hyphen_values = true)]
        modifications: Vec<Modification>,
    },
}

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{:#}", err);
            std::process::exit(exit_codes::ERROR);
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init { force } => cmd_init(&cli.config, force),
        Command::Check { cases, dir } => {
            let config = load_config(&cli.config).context("load config")?;
            cmd_check(&config, cases, dir.as_deref())
        }
        Command::Simulate {
            points,
            modifications,
        } => {
            let config = load_config(&cli.config).context("load config")?;
            cmd_simulate(&config, points, &modifications)
        }
    }
}

fn cmd_init(path: &Path, force: bool) -> Result<i32> {
    if !force && path.exists() {
        println!("init: config={} exists", path.display());
        return Ok(exit_codes::VALID);
    }
    write_config(path, &GeologyConfig::default())
        .with_context(|| format!("write {}", path.display()))?;
    println!("init: config={} written", path.display());
    Ok(exit_codes::VALID)
}

fn cmd_check(config: &GeologyConfig, mut cases: Vec<PathBuf>, dir: Option<&Path>) -> Result<i32> {
    if let Some(dir) = dir {
        cases.extend(discover_cases(dir)?);
    }
    if cases.is_empty() {
        bail!("no cases to check");
    }

    info!(cases = cases.len(), "checking cases");
    let mut mismatches = 0usize;
    for path in &cases {
        let outcome = check_case_file(path, config)?;
        print_outcome(path, &outcome, config)?;
        if !outcome.is_valid() {
            mismatches += 1;
        }
    }
    info!(cases = cases.len(), mismatches, "check finished");

    if mismatches > 0 {
        return Ok(exit_codes::MISMATCH);
    }
    Ok(exit_codes::VALID)
}

fn print_outcome(path: &Path, outcome: &CheckOutcome, config: &GeologyConfig) -> Result<()> {
    let case = path.display();
    let report = outcome.report();
    println!("check: case={} valid={}", case, report.valid);
    if let CheckOutcome::Mismatch { first, .. } = outcome {
        println!("check: case={} first_mismatch=\"{}\"", case, first);
    }
    if config.report.show_diagnostics {
        for diagnostic in &report.diagnostics {
            println!("check: case={} note=\"{}\"", case, diagnostic);
        }
    }
    if config.report.show_landscape {
        let landscape =
            serde_json::to_string(&report.landscape).context("serialize landscape")?;
        println!("check: case={} landscape={}", case, landscape);
    }
    Ok(())
}

fn cmd_simulate(
    config: &GeologyConfig,
    points: usize,
    modifications: &[Modification],
) -> Result<i32> {
    let (landscape, diagnostics) = simulate_modifications(points, modifications, config)?;
    if config.report.show_diagnostics {
        for diagnostic in &diagnostics {
            eprintln!("note: {}", diagnostic);
        }
    }
    println!(
        "{}",
        serde_json::to_string(&landscape).context("serialize landscape")?
    );
    Ok(exit_codes::VALID)
}
