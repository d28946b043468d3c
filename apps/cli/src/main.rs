//! modelkit command-line interface.
//!
//! Runs the data-modeling exercises from the shell.
//!
//! # Quick Start
//!
//! ```bash
//! modelkit age 42
//! modelkit email ada@example.com
//! modelkit classify --device-id d1
//! modelkit card visa "4111 1111 1111 1111"
//! modelkit adventure
//! ```

mod commands;
mod config;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::config::AppConfig;

/// modelkit - parse, don't validate.
#[derive(Parser)]
#[command(name = "modelkit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Config file (defaults to ./modelkit.toml if present).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `modelkit_exercises=trace`.
    #[arg(long, global = true, value_name = "FILTER")]
    log_level: Option<String>,

    /// Log format: pretty, compact or json.
    #[arg(long, global = true, value_name = "FORMAT")]
    log_format: Option<modelkit_log::Format>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the text adventure on stdin/stdout.
    Adventure {
        /// Room to start in.
        #[arg(long)]
        start_room: Option<String>,
    },

    /// Validate an age in whole years (0 to 120).
    Age {
        /// Raw age text.
        raw: String,
    },

    /// Validate an email address.
    Email {
        /// Raw address.
        raw: String,
    },

    /// Classify an event by the id it carries.
    Classify {
        /// Id of the producing device.
        #[arg(long)]
        device_id: Option<String>,

        /// Id of the producing user.
        #[arg(long)]
        user_id: Option<String>,
    },

    /// Validate a card number for a network.
    Card {
        /// Network tag (visa, amex).
        network: String,

        /// Card number; spaces and dashes are ignored.
        number: String,
    },
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    if let Some(format) = cli.log_format {
        config.log.format = format;
    }
    modelkit_log::init_with(config.log.clone()).context("failed to initialize logging")?;
    tracing::debug!(?config, "configuration loaded");

    match cli.command {
        Commands::Adventure { start_room } => {
            if let Some(room) = start_room {
                config.adventure.start_room = room;
            }
            commands::adventure(&config.adventure)
        }
        Commands::Age { raw } => commands::age(&raw),
        Commands::Email { raw } => commands::email(&raw),
        Commands::Classify { device_id, user_id } => commands::classify(device_id, user_id),
        Commands::Card { network, number } => commands::card(&network, &number),
    }
}
