//! Subcommand handlers.
//!
//! Each handler prints its result on stdout. A rejected input is reported on
//! stderr and turned into [`ExitCode::FAILURE`]; only unexpected failures
//! (I/O, configuration) are returned as errors.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use modelkit_exercises::adventure::{self, AdventureConfig};
use modelkit_exercises::contact::Email;
use modelkit_exercises::event::{Event, RawEvent};
use modelkit_exercises::payment::CardNumber;
use modelkit_exercises::person::Age;
use modelkit_validator::prelude::*;

/// Reports a rejected input.
fn rejected(what: &str, error: &ModelError) -> ExitCode {
    tracing::info!(code = error.code(), "{what} rejected");
    eprintln!("invalid {what}: {error}");
    ExitCode::FAILURE
}

fn accepted(line: std::fmt::Arguments<'_>) -> Result<ExitCode> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").context("failed to write output")?;
    Ok(ExitCode::SUCCESS)
}

pub fn age(raw: &str) -> Result<ExitCode> {
    match Age::parse(raw) {
        Ok(age) => accepted(format_args!("valid age: {age}")),
        Err(error) => Ok(rejected("age", &error.into())),
    }
}

pub fn email(raw: &str) -> Result<ExitCode> {
    match Email::new(raw) {
        Ok(email) => accepted(format_args!(
            "valid email: {email} (domain {})",
            email.domain()
        )),
        Err(error) => Ok(rejected("email", &error.into())),
    }
}

pub fn classify(device_id: Option<String>, user_id: Option<String>) -> Result<ExitCode> {
    let raw = RawEvent {
        device_id,
        user_id,
        ..RawEvent::default()
    };
    match Event::classify(raw) {
        Ok(event) => accepted(format_args!(
            "{} event from {}",
            event.source.kind(),
            event.source.id()
        )),
        Err(error) => Ok(rejected("event", &error.into())),
    }
}

pub fn card(network: &str, number: &str) -> Result<ExitCode> {
    match CardNumber::from_parts(network, number) {
        Ok(card) => accepted(format_args!("valid card: {card}")),
        Err(error) => Ok(rejected("card", &error)),
    }
}

pub fn adventure(config: &AdventureConfig) -> Result<ExitCode> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    adventure::run(config, stdin, stdout).context("adventure failed")?;
    Ok(ExitCode::SUCCESS)
}
