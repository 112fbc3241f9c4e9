// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use log::{info, trace, warn, LevelFilter};
use logjam::Logger;

fn main() {
    // Records a static string.
    Logger::record("Kick it");

    // Records an empty line.
    Logger::record("");

    // Embedded newlines are written as they are.
    logjam::record("You wake up late for school\nman you don't want to go");

    // The `log` macros end up on the same stdout, without level or target.
    logjam::init(LevelFilter::Info).expect("failed to set logger");
    info!("You ask your mom, please? but she still says, {}!", "No");
    warn!("You missed two classes");

    // Filtered by the max level of the `log` facade.
    trace!("And no homework");
}
