// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis label ranges.
//!
//! A continuous axis always gets eleven evenly spaced labels between a
//! "smart" rounded minimum and maximum. A categorical (histogram) axis gets one
//! label per input value, sorted.

extern crate alloc;

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Number of intervals between continuous-axis labels (so there are 11 labels).
pub const TICK_INTERVALS: usize = 10;

/// One tick label: its numeric position and display text.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabel {
    /// Value in data units.
    pub value: f64,
    /// Display text before wrapping.
    pub text: String,
}

/// The sorted labels of one axis.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AxisLabelRange {
    /// Labels in non-decreasing value order.
    pub labels: Vec<AxisLabel>,
    /// Whether labels are the raw categories rather than a nice range.
    pub categorical: bool,
}

impl AxisLabelRange {
    /// Number of labels, duplicates included.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns `true` if there are no labels.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// First (smallest) label value.
    pub fn first(&self) -> Option<f64> {
        self.labels.first().map(|l| l.value)
    }

    /// Last (largest) label value.
    pub fn last(&self) -> Option<f64> {
        self.labels.last().map(|l| l.value)
    }

    /// `last - first`, or NaN for an empty range.
    ///
    /// A single-label range has a zero span; dividing by it is left to the caller.
    pub fn span(&self) -> f64 {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => last - first,
            _ => f64::NAN,
        }
    }

    /// Returns the index of the first label equal to `value`.
    ///
    /// Duplicate categories all map to their leftmost slot.
    pub fn slot_of(&self, value: f64) -> Option<usize> {
        self.labels.iter().position(|l| l.value == value)
    }

    /// Returns `true` if label `index` is the first one carrying its value.
    ///
    /// Only these labels are rendered; later duplicates share their text node.
    pub fn is_first_occurrence(&self, index: usize) -> bool {
        self.labels
            .get(index)
            .is_some_and(|l| self.slot_of(l.value) == Some(index))
    }
}

/// Builds the label range for one axis.
///
/// Categorical ranges are the input sorted numerically. Continuous ranges are
/// eleven values from `smart_floor(min)` (or zero) to `smart_ceil(max)`,
/// rounded to two decimals. Empty input yields an empty range.
pub fn label_range(values: &[f64], categorical: bool) -> AxisLabelRange {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    if categorical {
        return AxisLabelRange {
            labels: sorted
                .into_iter()
                .map(|value| AxisLabel {
                    value,
                    text: format!("{value}"),
                })
                .collect(),
            categorical: true,
        };
    }

    let (Some(&lo), Some(&hi)) = (sorted.first(), sorted.last()) else {
        return AxisLabelRange::default();
    };

    let mut min = round_half_up(lo);
    let max = smart_ceil(round_half_up(hi));
    if digits(round_half_up(hi)) > digits(min) && min > 0.0 {
        min = 0.0;
    } else {
        min = smart_floor(min);
    }
    let step = (max - min) / TICK_INTERVALS as f64;

    let labels = (0..=TICK_INTERVALS)
        .map(|i| {
            let value = round_to_hundredths(min + i as f64 * step);
            AxisLabel {
                value,
                text: format!("{value:.2}"),
            }
        })
        .collect();
    AxisLabelRange {
        labels,
        categorical: false,
    }
}

/// Counts the decimal digits of the integer part of `|n|`, with `digits(10) == 1`.
///
/// The count is "how many times can we divide by ten while above ten", plus one.
/// Non-finite input counts as a single digit.
pub fn digits(n: f64) -> u32 {
    let mut n = n.abs();
    if !n.is_finite() {
        return 1;
    }
    let mut count = 1;
    while n > 10.0 {
        count += 1;
        n /= 10.0;
    }
    count
}

/// Rounds `n` up past its two most significant digits: `247 -> 250`.
pub fn smart_ceil(n: f64) -> f64 {
    let resolution = resolution(n);
    ((n / resolution).trunc() + 1.0) * resolution
}

/// Rounds `n` down past its two most significant digits: `247 -> 230`.
pub fn smart_floor(n: f64) -> f64 {
    let resolution = resolution(n);
    ((n / resolution).trunc() - 1.0) * resolution
}

fn resolution(n: f64) -> f64 {
    let exp = digits(n).saturating_sub(2);
    10_f64.powi(i32::try_from(exp).unwrap_or(i32::MAX))
}

/// Rounds half-way cases toward positive infinity (`-2.5 -> -2`).
fn round_half_up(n: f64) -> f64 {
    (n + 0.5).floor()
}

fn round_to_hundredths(n: f64) -> f64 {
    round_half_up(n * 100.0) / 100.0
}
