// SPDX-FileCopyrightText: 2026 MCT Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCT - extension registration for mission-control plugins.
//!
//! This is the binary entry point: it loads bundle manifests, registers
//! their extensions, and prints what the injector ended up holding.

mod register;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mct_config::MctConfig;

/// MCT - extension registration for mission-control plugins.
#[derive(Parser, Debug)]
#[command(name = "mct", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Register the extensions of one or more bundles and list the providers.
    Register {
        /// Bundle manifests to load. Defaults to `bundles.paths` from config.
        bundles: Vec<PathBuf>,
        /// Resolve this provider (e.g. `actions[]`) and print its value.
        #[arg(long, value_name = "NAME")]
        resolve: Option<String>,
    },
    /// Print the effective configuration as TOML.
    Config,
}

fn main() {
    let cli = Cli::parse();

    let config = match mct_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            mct_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);
    tracing::debug!(bundles = config.bundles.paths.len(), "configuration loaded");

    let result = match cli.command {
        Some(Commands::Register { bundles, resolve }) => {
            register::run_register(&config, &bundles, resolve.as_deref())
        }
        Some(Commands::Config) => print_config(&config),
        None => {
            println!("mct: use --help for available commands");
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_config(config: &MctConfig) -> Result<(), mct_core::MctError> {
    let text = config
        .to_toml()
        .map_err(|e| mct_core::MctError::Internal(format!("cannot render configuration: {e}")))?;
    print!("{text}");
    Ok(())
}

/// `RUST_LOG` wins; otherwise MCT crates log at `level` and everything else at warn.
fn init_tracing(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("mct={level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .init();
}
