// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label wrapping and measurement.
//!
//! Labels are wrapped into lines of at most two words. The arrangement of the
//! lines depends on the axis: horizontal x labels continue inline, vertical
//! (categorical) x labels continue in columns, and y labels stack in rows.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use smallvec::SmallVec;
use tickplot_text::{LineFlow, TextBox, TextMeasurer, measure_lines};

use crate::config::{Axis, ChartStyle};
use crate::range::AxisLabelRange;

/// The lines of a wrapped label. Most labels have one or two.
pub type LabelLines = SmallVec<[String; 2]>;

/// Splits `text` into lines of two words each (the last line may have one).
///
/// Blank text produces a single empty line.
pub fn wrap_words(text: &str) -> LabelLines {
    let words: SmallVec<[&str; 4]> = text.split_whitespace().collect();
    if words.is_empty() {
        let mut lines = LabelLines::new();
        lines.push(String::new());
        return lines;
    }
    words.chunks(2).map(|pair| pair.join(" ")).collect()
}

/// A wrapped label with its measured extent.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasuredLabel {
    /// Wrapped lines.
    pub lines: LabelLines,
    /// Extent of all lines as laid out by the axis' [`LineFlow`].
    pub bbox: TextBox,
}

impl MeasuredLabel {
    /// Returns `true` if the label wrapped onto more than one line.
    pub fn is_multiline(&self) -> bool {
        self.lines.len() > 1
    }
}

/// The measured labels of one axis.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLabels {
    /// Which axis these labels belong to.
    pub axis: Axis,
    /// Label values and texts.
    pub range: AxisLabelRange,
    /// How wrapped lines are arranged.
    pub flow: LineFlow,
    /// One entry per label in `range`.
    pub measured: Vec<MeasuredLabel>,
}

impl AxisLabels {
    /// Returns the line flow used for labels on `axis`.
    pub fn flow_for(axis: Axis, categorical: bool, style: &ChartStyle) -> LineFlow {
        let step = style.label_line_step;
        match (axis, categorical) {
            (Axis::X, true) => LineFlow::Columns { step },
            (Axis::X, false) => LineFlow::Inline { step },
            (Axis::Y, _) => LineFlow::Rows { step },
        }
    }

    /// Wraps and measures every label in `range`.
    pub fn measure(
        axis: Axis,
        range: AxisLabelRange,
        measurer: &dyn TextMeasurer,
        style: &ChartStyle,
    ) -> Self {
        let flow = Self::flow_for(axis, range.categorical, style);
        let measured = range
            .labels
            .iter()
            .map(|label| {
                let lines = wrap_words(label.text.trim());
                let bbox = measure_lines(measurer, &lines, &style.label_text, flow);
                MeasuredLabel { lines, bbox }
            })
            .collect();
        Self {
            axis,
            range,
            flow,
            measured,
        }
    }

    /// Space reserved next to the axis for its labels.
    ///
    /// This is the tallest label for x and the widest label for y.
    pub fn legend_extent(&self) -> f64 {
        self.measured
            .iter()
            .map(|m| match self.axis {
                Axis::X => m.bbox.height,
                Axis::Y => m.bbox.width,
            })
            .fold(0.0, f64::max)
    }
}
