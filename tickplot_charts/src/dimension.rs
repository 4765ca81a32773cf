// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart width/height values.

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::str::FromStr;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::DimensionError;

/// A requested chart width or height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Dimension {
    /// A fixed size in pixels.
    Pixels(f64),
    /// A share of the container's current pixel size, in percent.
    Percent(f64),
    /// Size the canvas to fit its content.
    Auto,
}

impl Dimension {
    /// Resolves a percentage against the container's pixel size.
    ///
    /// Pixel and auto dimensions are returned unchanged.
    #[must_use]
    pub fn resolve(self, container_px: f64) -> Self {
        match self {
            Self::Percent(pct) => Self::Pixels(container_px * pct / 100.0),
            other => other,
        }
    }

    /// Returns the pixel size, or `None` for `Auto` and unresolved percentages.
    #[must_use]
    pub fn fixed(self) -> Option<f64> {
        match self {
            Self::Pixels(px) => Some(px),
            Self::Percent(_) | Self::Auto => None,
        }
    }

    /// Returns `true` for [`Dimension::Auto`].
    #[must_use]
    pub fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Returns the value for the container's CSS `width`/`height` property.
    #[must_use]
    pub fn css_value(self) -> String {
        match self {
            Self::Pixels(px) => format!("{px}px"),
            Self::Percent(pct) => format!("{pct}%"),
            Self::Auto => "auto".to_string(),
        }
    }
}

impl From<f64> for Dimension {
    fn from(px: f64) -> Self {
        Self::Pixels(px)
    }
}

impl FromStr for Dimension {
    type Err = DimensionError;

    /// Parses `"auto"`, `"NN%"` or a pixel number.
    ///
    /// Percentages keep only their integer part, so `"50.7%"` is 50%.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let err = || DimensionError {
            input: s.to_string(),
        };
        if s.eq_ignore_ascii_case("auto") {
            return Ok(Self::Auto);
        }
        if let Some(pct) = s.strip_suffix('%') {
            let pct: f64 = pct.trim().parse().map_err(|_| err())?;
            return Ok(Self::Percent(pct.trunc()));
        }
        let px = s.strip_suffix("px").unwrap_or(s);
        px.trim().parse::<f64>().map(Self::Pixels).map_err(|_| err())
    }
}
