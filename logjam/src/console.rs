// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::fmt;
use std::io::{self, Write};

/// Standard output. The stdout lock is held for one whole line.
#[derive(Debug, Default)]
pub struct Console;

impl Console {
    pub fn write(&self, message: &[u8]) -> io::Result<()> {
        fmt::line(message, io::stdout().lock())
    }

    pub fn write_args(&self, args: std::fmt::Arguments) -> io::Result<()> {
        fmt::args(args, io::stdout().lock())
    }

    pub fn flush(&self) -> io::Result<()> {
        io::stdout().flush()
    }
}
