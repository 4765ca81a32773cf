// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

extern crate alloc;

use alloc::string::String;

/// A width or height string that is neither a pixel number, a percentage, nor `auto`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid chart dimension `{input}`: expected a pixel number, `NN%`, or `auto`")]
pub struct DimensionError {
    /// The rejected input, trimmed.
    pub input: String,
}

/// A chart mode string other than `graph` or `hystogram`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart mode `{0}`: expected `graph` or `hystogram`")]
pub struct ChartModeError(pub String);

/// Errors raised while drawing a chart onto a rendering surface.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// The configured container id does not resolve to a mount point.
    #[error("chart container `{0}` does not exist")]
    MissingContainer(String),
    /// The rendering surface rejected an operation.
    #[error("rendering surface error: {0}")]
    Surface(String),
}
