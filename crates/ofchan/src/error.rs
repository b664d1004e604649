// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types for wire decoding.
//!
//! Only genuine decode failures surface as [`Error`]. Recoverable
//! conditions inside the discovery engine (capacity exceeded, neighbor
//! count underflow, tick overrun) are logged and recovered locally, and a
//! packet that simply is not a probe is "not handled", never an error.

use std::fmt;

/// Result type for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decoding an OpenFlow message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The declared message length is inconsistent with its structure
    /// (e.g. a features-reply whose port array is not a whole number of
    /// port descriptors).
    Malformed(&'static str),
    /// The buffer is shorter than the fixed part of the message.
    Truncated {
        /// Bytes required for the fixed part.
        need: usize,
        /// Bytes actually available.
        got: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Malformed(what) => write!(f, "malformed message: {what}"),
            Error::Truncated { need, got } => {
                write!(f, "truncated message: need {need} bytes, got {got}")
            }
        }
    }
}

impl std::error::Error for Error {}
