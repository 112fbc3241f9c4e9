// Copyright 2025 Accenture.
//
// SPDX-License-Identifier: Apache-2.0

use crate::console::Console;
use log::LevelFilter;
use std::ffi::{c_char, c_int, CStr};

#[allow(non_camel_case_types)]
type logjam_Level_Filter = c_int;

const LEVEL_FILTER_OFF: logjam_Level_Filter = 0;
const LEVEL_FILTER_ERROR: logjam_Level_Filter = 1;
const LEVEL_FILTER_WARN: logjam_Level_Filter = 2;
const LEVEL_FILTER_INFO: logjam_Level_Filter = 3;
const LEVEL_FILTER_DEBUG: logjam_Level_Filter = 4;
const LEVEL_FILTER_TRACE: logjam_Level_Filter = 5;

/// Record a nul terminated message. The bytes are written as they are, valid
/// UTF-8 or not. A null pointer records an empty line.
#[no_mangle]
extern "C" fn __record(message: *const c_char) {
    // Safety: the caller passes null or a valid nul terminated string
    let message = unsafe { message_bytes(message) };
    let _ = Console.write(message);
}

/// Bytes of `message` without the nul. Empty for a null pointer.
///
/// # Safety
///
/// `message` is null or points to a nul terminated string that outlives `'a`.
unsafe fn message_bytes<'a>(message: *const c_char) -> &'a [u8] {
    if message.is_null() {
        &[]
    } else {
        unsafe { CStr::from_ptr(message) }.to_bytes()
    }
}

/// Install the `log` backend. Returns false on an unknown level or if a logger
/// is already set.
#[no_mangle]
extern "C" fn __init(level_filter: logjam_Level_Filter) -> bool {
    match level_filter_from_c(level_filter) {
        Some(level_filter) => crate::init(level_filter).is_ok(),
        None => false,
    }
}

fn level_filter_from_c(level_filter: logjam_Level_Filter) -> Option<LevelFilter> {
    match level_filter {
        LEVEL_FILTER_OFF => Some(LevelFilter::Off),
        LEVEL_FILTER_ERROR => Some(LevelFilter::Error),
        LEVEL_FILTER_WARN => Some(LevelFilter::Warn),
        LEVEL_FILTER_INFO => Some(LevelFilter::Info),
        LEVEL_FILTER_DEBUG => Some(LevelFilter::Debug),
        LEVEL_FILTER_TRACE => Some(LevelFilter::Trace),
        _ => None,
    }
}
