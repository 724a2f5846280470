/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

#![warn(missing_docs)]

//! Toy robot: plays a JSON command document against a single robot on a square grid.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use robot_config::{ConfigError, RobotConfig, DEFAULT_CONFIG_PATH};
use toy_robot::{Command, Grid, Simulation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Simulate a robot moving on a square table.
#[derive(Debug, Parser)]
#[command(name = "toy-robot")]
#[command(about = "Simulate a robot moving on a square table", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the JSON command document
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,

    /// Largest coordinate on both axes; positions run from 0 to SIZE inclusive
    #[arg(short, long, default_value_t = Grid::DEFAULT_SIZE)]
    size: i32,

    /// Log at info level instead of warn (RUST_LOG overrides both)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let grid = Grid::new(cli.size).context("invalid grid size")?;

    let mut stdout = std::io::stdout().lock();
    let commands = load_commands(&cli.config, &mut stdout).context("failed to write to stdout")?;
    let exit_code = match commands {
        Some(commands) => {
            let mut simulation = Simulation::new(&grid, &mut stdout);
            simulation
                .run(commands)
                .context("failed to write simulation output")?;
            ExitCode::SUCCESS
        }
        None => ExitCode::FAILURE,
    };
    stdout.flush().context("failed to flush stdout")?;

    Ok(exit_code)
}

/// Load the command document. On failure a user facing message is written to `out` and None is
/// returned.
fn load_commands<W: Write>(path: &Path, out: &mut W) -> std::io::Result<Option<Vec<Command>>> {
    let e = match RobotConfig::load(path) {
        Ok(config) => return Ok(Some(config.into_commands())),
        Err(e) => e,
    };
    tracing::debug!(error = ?e, "configuration rejected");
    match &e {
        ConfigError::NotFound(missing) => {
            writeln!(out, "Error: {} not found.", missing.display())?;
        }
        ConfigError::Io { .. } => {
            writeln!(out, "Error: {}.", e)?;
        }
        ConfigError::Syntax(_) => {
            writeln!(out, "Error: Invalid JSON in {}.", path.display())?;
        }
        ConfigError::Validation(message) => {
            writeln!(out, "Configuration validation error: {}", message)?;
            writeln!(out, "Invalid configuration. Exiting.")?;
        }
    }
    Ok(None)
}

/// Logs go to stderr so stdout carries only simulation output.
fn setup_logging(verbose: bool) {
    let default_level = if verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    let env_filter = tracing_subscriber::EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .init();
}
