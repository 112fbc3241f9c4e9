// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

//! Line formatting. A message is written as-is, followed by [`LINE_TERMINATOR`].

use std::io::{self, Write};

/// Appended to every recorded message.
pub const LINE_TERMINATOR: &[u8] = b"\n";

/// Write `message` followed by the line terminator.
pub fn line<W: Write>(message: &[u8], mut writer: W) -> io::Result<()> {
    writer.write_all(message)?;
    writer.write_all(LINE_TERMINATOR)
}

/// Write the formatted `args` followed by the line terminator.
pub fn args<W: Write>(args: std::fmt::Arguments, mut writer: W) -> io::Result<()> {
    writer.write_fmt(args)?;
    writer.write_all(LINE_TERMINATOR)
}
