// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Record messages from the command line or from standard input.

use anyhow::{Context, Error};
use argh::FromArgs;
use log::{debug, LevelFilter};
use logjam::Logger;
use std::io::{self, BufRead};

#[derive(FromArgs)]
#[argh(help_triggers("-h", "--help"))]
/// Record messages on standard output
struct Args {
    #[argh(description = "log level of logjam's own diagnostics")]
    #[argh(option, short = 'l')]
    log_level: Option<LevelFilter>,

    #[argh(
        description = "messages to record, one line each. Reads standard input if empty. \
                       Put `--` before messages starting with `-`"
    )]
    #[argh(positional)]
    messages: Vec<String>,
}

fn main() -> Result<(), Error> {
    let Args {
        log_level,
        messages,
    } = argh::from_env();

    // Diagnostics share stdout with the recorded lines. Keep them off by default.
    logjam::init(log_level.unwrap_or(LevelFilter::Off))?;

    if !messages.is_empty() {
        debug!("Recording messages from {} arguments", messages.len());
        messages.iter().for_each(|message| Logger::record(message));
        return Ok(());
    }

    debug!("Recording lines from stdin");
    for line in io::stdin().lock().lines() {
        let line = line.context("failed to read from stdin")?;
        Logger::record(&line);
    }
    Ok(())
}
