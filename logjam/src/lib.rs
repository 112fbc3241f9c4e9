// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! LogJam
//!
//! Records messages on the standard output of the process. A message is written
//! unmodified and terminated by a newline. Nothing else is added: no level, no
//! timestamp, no target.
//!
//! ```
//! use logjam::Logger;
//!
//! Logger::record("Log this message");
//! ```
//!
//! The [`Logger`] is also a backend for the `log` facade. See [`init`].

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};
use std::str::FromStr;

mod console;
mod ffi;
pub mod fmt;

const ENV_RUST_LOG: &str = "RUST_LOG";

/// Records messages on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct Logger;

impl Logger {
    /// Records the given message on stdout.
    ///
    /// ```
    /// logjam::Logger::record("Log this message");
    /// ```
    pub fn record(text: &str) {
        record(text)
    }
}

/// Records `text` as one line on stdout.
///
/// Errors of the output stream (e.g. a closed pipe) are dropped.
pub fn record(text: &str) {
    let _ = console::Console.write(text.as_bytes());
}

/// Install [`Logger`] as the global `log` backend.
///
/// A valid level passed as `RUST_LOG` environment variable overrides `level`.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_boxed_logger(Box::new(Logger))?;
    log::set_max_level(level_from_env().unwrap_or(level));
    Ok(())
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    /// Only the message is recorded. Level, target and location are dropped.
    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let _ = console::Console.write_args(*record.args());
    }

    fn flush(&self) {
        let _ = console::Console.flush();
    }
}

/// Try to parse the log level from the environment variable `RUST_LOG`.
fn level_from_env() -> Option<LevelFilter> {
    std::env::var(ENV_RUST_LOG).ok().and_then(|s| {
        parse_level(&s).or_else(|| {
            eprintln!("Failed to parse log level from `{ENV_RUST_LOG}={s}`");
            None
        })
    })
}

fn parse_level(s: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(s.trim()).ok()
}

#[cfg(test)]
mod test {
    use super::parse_level;
    use log::LevelFilter;

    #[test]
    fn parse_levels() {
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("warn"), Some(LevelFilter::Warn));
        assert_eq!(parse_level("TRACE"), Some(LevelFilter::Trace));
        assert_eq!(parse_level(" debug "), Some(LevelFilter::Debug));
    }

    #[test]
    fn parse_invalid_level() {
        assert_eq!(parse_level(""), None);
        assert_eq!(parse_level("loud"), None);
        assert_eq!(parse_level("my_crate=debug"), None);
    }
}
