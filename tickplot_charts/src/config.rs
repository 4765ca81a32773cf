// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart construction inputs.
//!
//! A [`ChartConfig`] is fixed for the lifetime of a chart. Everything derived
//! from it (label ranges, layout, geometry) is recomputed on every draw.

extern crate alloc;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::str::FromStr;

use kurbo::Size;
use peniko::Color;
use tickplot_text::TextStyle;

use crate::dimension::Dimension;
use crate::error::ChartModeError;

/// The kind of chart to draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartMode {
    /// A continuous line chart over a grid (`graph`).
    Graph,
    /// A discrete bar chart (`hystogram`).
    Histogram,
}

impl ChartMode {
    /// The name used by the page-facing configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Graph => "graph",
            Self::Histogram => "hystogram",
        }
    }
}

impl FromStr for ChartMode {
    type Err = ChartModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "graph" => Ok(Self::Graph),
            "hystogram" | "histogram" => Ok(Self::Histogram),
            other => Err(ChartModeError(other.to_string())),
        }
    }
}

/// Which axis carries the categories in histogram mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// Categories along x, bars grow upward.
    #[default]
    Normal,
    /// Categories along y, bars grow rightward.
    Reversed,
}

impl From<bool> for AxisOrientation {
    fn from(reversed: bool) -> Self {
        if reversed { Self::Reversed } else { Self::Normal }
    }
}

/// One of the two chart axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

/// Layout constants and paints.
///
/// The defaults reproduce the stock chart look: 30px canvas padding, a 20px
/// gap between labels and axes, 12px grey labels and light-grey gridlines.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartStyle {
    /// Horizontal canvas padding.
    pub padding_x: f64,
    /// Vertical canvas padding.
    pub padding_y: f64,
    /// Gap between the axis legends and the axis lines.
    pub label_gap: f64,
    /// Length of the tick hatch drawn across each axis.
    pub hatch_width: f64,
    /// Bar width used when the category axis is auto-sized.
    pub bar_width: f64,
    /// Gap between bars used when the category axis is auto-sized.
    pub bar_gap: f64,
    /// Tick label text style.
    pub label_text: TextStyle,
    /// Offset between consecutive lines of a wrapped label.
    pub label_line_step: f64,
    /// Tick label fill.
    pub label_fill: Color,
    /// Stroke inherited by every line in the chart group.
    pub chart_stroke: Color,
    /// Gridline stroke.
    pub grid_stroke: Color,
    /// Bar fill.
    pub bar_fill: Color,
    /// Stroke of the graph-mode data line.
    pub line_stroke: Color,
    /// Plot viewport assumed for an auto-sized, non-category axis.
    ///
    /// This matches the default size browsers give an unsized `<svg>`.
    pub auto_viewport: Size,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            padding_x: 30.0,
            padding_y: 30.0,
            label_gap: 20.0,
            hatch_width: 10.0,
            bar_width: 50.0,
            bar_gap: 10.0,
            label_text: TextStyle::new(12.0),
            label_line_step: 14.0,
            label_fill: Color::from_rgb8(0x81, 0x81, 0x81),
            chart_stroke: Color::from_rgb8(0xc9, 0xc9, 0xc9),
            grid_stroke: Color::from_rgb8(0xe5, 0xe5, 0xe5),
            bar_fill: Color::from_rgb8(0x58, 0xa1, 0xe6),
            line_stroke: Color::from_rgb8(0x58, 0xa1, 0xe6),
            auto_viewport: Size::new(300.0, 150.0),
        }
    }
}

/// Everything needed to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Id of the element the chart mounts into.
    pub container_id: String,
    /// Requested canvas width.
    pub width: Dimension,
    /// Requested canvas height.
    pub height: Dimension,
    /// Chart kind.
    pub mode: ChartMode,
    /// X values, index-paired with `y_values`.
    pub x_values: Vec<f64>,
    /// Y values, index-paired with `x_values`.
    pub y_values: Vec<f64>,
    /// Title shown for x values in the hover hint.
    pub x_title: String,
    /// Title shown for y values in the hover hint.
    pub y_title: String,
    /// Category axis selection.
    pub orientation: AxisOrientation,
    /// Layout constants and paints.
    pub style: ChartStyle,
}

impl ChartConfig {
    /// Creates a config with empty titles, normal orientation and the default style.
    pub fn new(
        container_id: impl Into<String>,
        width: impl Into<Dimension>,
        height: impl Into<Dimension>,
        mode: ChartMode,
        x_values: impl Into<Vec<f64>>,
        y_values: impl Into<Vec<f64>>,
    ) -> Self {
        Self {
            container_id: container_id.into(),
            width: width.into(),
            height: height.into(),
            mode,
            x_values: x_values.into(),
            y_values: y_values.into(),
            x_title: String::new(),
            y_title: String::new(),
            orientation: AxisOrientation::Normal,
            style: ChartStyle::default(),
        }
    }

    /// Sets the hover hint titles for both axes.
    pub fn with_titles(mut self, x_title: impl Into<String>, y_title: impl Into<String>) -> Self {
        self.x_title = x_title.into();
        self.y_title = y_title.into();
        self
    }

    /// Sets the axis orientation.
    pub fn with_orientation(mut self, orientation: impl Into<AxisOrientation>) -> Self {
        self.orientation = orientation.into();
        self
    }

    /// Replaces the style.
    pub fn with_style(mut self, style: ChartStyle) -> Self {
        self.style = style;
        self
    }

    /// Returns `true` if `orientation` is reversed.
    pub fn is_reversed(&self) -> bool {
        self.orientation == AxisOrientation::Reversed
    }

    /// Returns the axis whose positions are bar slots, if any.
    ///
    /// Only histograms have one: x for the normal orientation, y when reversed.
    pub fn category_axis(&self) -> Option<Axis> {
        match (self.mode, self.orientation) {
            (ChartMode::Graph, _) => None,
            (ChartMode::Histogram, AxisOrientation::Normal) => Some(Axis::X),
            (ChartMode::Histogram, AxisOrientation::Reversed) => Some(Axis::Y),
        }
    }

    /// Returns `true` if `axis` is the histogram category axis.
    pub fn is_categorical(&self, axis: Axis) -> bool {
        self.category_axis() == Some(axis)
    }

    /// Returns the values plotted along `axis`.
    pub fn values(&self, axis: Axis) -> &[f64] {
        match axis {
            Axis::X => &self.x_values,
            Axis::Y => &self.y_values,
        }
    }

    /// Returns the requested dimension along `axis` (width for x, height for y).
    pub fn dimension(&self, axis: Axis) -> Dimension {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }

    /// Returns `true` if either series is empty; such charts draw nothing.
    pub fn is_empty(&self) -> bool {
        self.x_values.is_empty() || self.y_values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn category_axis_follows_mode_and_orientation() {
        let graph = ChartConfig::new("c", 100.0, 100.0, ChartMode::Graph, [1.0], [1.0]);
        assert_eq!(graph.category_axis(), None);

        let bars = ChartConfig::new("c", 100.0, 100.0, ChartMode::Histogram, [1.0], [1.0]);
        assert_eq!(bars.category_axis(), Some(Axis::X));
        assert_eq!(bars.with_orientation(true).category_axis(), Some(Axis::Y));
    }

    #[test]
    fn chart_mode_wire_names() {
        assert_eq!("graph".parse::<ChartMode>(), Ok(ChartMode::Graph));
        assert_eq!("hystogram".parse::<ChartMode>(), Ok(ChartMode::Histogram));
        assert_eq!(ChartMode::Histogram.as_str(), "hystogram");
        assert!("pie".parse::<ChartMode>().is_err());
    }

    #[test]
    fn empty_when_either_series_is_empty() {
        let c = ChartConfig::new("c", 1.0, 1.0, ChartMode::Graph, [], [5.0]);
        assert!(c.is_empty());
    }
}
