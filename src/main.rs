// This Source Code Form is subject to the terms of the Mozilla Public License, v. 2.0.
// If a copy of the MPL was not distributed with this file,
// You can obtain one at <https://mozilla.org/MPL/2.0/>.

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use trajview::{AppConfig, ParserWorker, WorkerEvent, APP_NAME, LOG_CRATES};

#[derive(Parser)]
#[command(name = APP_NAME, version)]
#[command(about = "Parse a LAMMPS dump or XYZ trajectory and infer its bonds", long_about = None)]
struct Cli {
    /// Trajectory file (LAMMPS dump or XYZ)
    input: PathBuf,

    /// Config TOML file (defaults to the per-user trajview.toml, if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Multiplier applied to the sum of covalent radii
    #[arg(long)]
    cutoff_factor: Option<f64>,

    /// Covalent radius in Ångström for types missing from the radius table
    #[arg(long)]
    fallback_radius: Option<f64>,

    /// Print every worker event as one JSON line instead of a summary
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<ExitCode> {
    logging::init(LOG_CRATES).context("failed to initialize logging")?;

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_default()?,
    };
    if let Some(cutoff_factor) = cli.cutoff_factor {
        config.bonds = config.bonds.with_cutoff_factor(cutoff_factor);
    }
    if let Some(fallback_radius) = cli.fallback_radius {
        config.bonds = config.bonds.with_fallback_radius(fallback_radius);
    }

    let content = fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;

    let worker = ParserWorker::spawn(content, config.bonds)?;
    let terminal = worker.wait(|message| {
        if cli.json {
            println!("{}", WorkerEvent::progress(message).to_json().unwrap_or_default());
        } else {
            log::info!("{}", message);
        }
    });

    if cli.json {
        println!("{}", terminal.to_json()?);
    }

    match terminal {
        WorkerEvent::Complete { frames, bonds } => {
            if !cli.json {
                println!(
                    "{}: {} frames, {} atoms in the first frame, {} bonds",
                    cli.input.display(),
                    frames.len(),
                    frames.first().map_or(0, |frame| frame.len()),
                    bonds.len()
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        WorkerEvent::Error { message } => {
            eprintln!("Error: {}", message);
            Ok(ExitCode::FAILURE)
        }
        WorkerEvent::Progress { .. } => Ok(ExitCode::FAILURE),
    }
}

// End of File
