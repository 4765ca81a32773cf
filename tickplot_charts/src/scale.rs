// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tiny scale utilities.
//!
//! Axes are laid out in *local* coordinates: `0` is the axis origin and the
//! axis length is the far end. Callers add the plot offset themselves.

use crate::range::{AxisLabelRange, TICK_INTERVALS};

/// A linear mapping from a label range to an axis length.
///
/// Unlike a general-purpose linear scale this does not guard a zero-width
/// domain: a single-label range produces a non-finite factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleLinear {
    domain: (f64, f64),
    length: f64,
}

impl ScaleLinear {
    /// Creates a new scale mapping `domain` onto `0..length`.
    pub fn new(domain: (f64, f64), length: f64) -> Self {
        Self { domain, length }
    }

    /// Creates a scale anchored on the first and last label of `range`.
    pub fn for_range(range: &AxisLabelRange, length: f64) -> Self {
        let first = range.first().unwrap_or(f64::NAN);
        let last = range.last().unwrap_or(f64::NAN);
        Self::new((first, last), length)
    }

    /// Pixels per data unit.
    pub fn px_per_unit(&self) -> f64 {
        self.length / (self.domain.1 - self.domain.0)
    }

    /// Distance of `x` from the domain minimum, in pixels.
    pub fn map(&self, x: f64) -> f64 {
        (x - self.domain.0) * self.px_per_unit()
    }

    /// Returns the minimum of the domain.
    pub fn domain_min(&self) -> f64 {
        self.domain.0
    }

    /// Returns the axis length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Position of continuous-axis tick `index`, counted from the origin.
    pub fn tick(&self, index: usize) -> f64 {
        index as f64 * (self.length / TICK_INTERVALS as f64)
    }
}

/// Evenly sized slots for a categorical axis.
///
/// Each slot holds one bar plus its share of the inter-bar gap; labels and
/// hatches sit at slot centers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlotScale {
    length: f64,
    count: usize,
}

impl SlotScale {
    /// Creates `count` slots covering `0..length`.
    pub fn new(length: f64, count: usize) -> Self {
        Self { length, count }
    }

    /// Returns the number of slots.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Width of one slot (`length / count`).
    pub fn slot_width(&self) -> f64 {
        self.length / self.count as f64
    }

    /// Start of slot `index`.
    pub fn start(&self, index: usize) -> f64 {
        index as f64 * self.slot_width()
    }

    /// Center of slot `index`.
    pub fn center(&self, index: usize) -> f64 {
        let n = self.count as f64;
        (index as f64 + 1.0) * (self.length / n) - self.length / (2.0 * n)
    }
}
