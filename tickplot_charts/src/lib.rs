// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Line and bar charts rendered as SVG node trees.
//!
//! Drawing a chart runs four steps, each recomputed on every draw:
//! - **Ranges** turn raw values into tick labels: eleven "nice" values for a
//!   continuous axis, the sorted values for a histogram category axis.
//! - **Layout** measures the labels and sizes the axes, bars and canvas.
//! - **Geometry** produces hatches, gridlines, axis lines, labels and bars as
//!   plain data.
//! - **Materialization** writes the geometry into a [`Surface`] and wires
//!   hover hints onto the bars.
//!
//! ```
//! use kurbo::Size;
//! use tickplot_charts::{Chart, ChartConfig, ChartMode, SvgDocument};
//! use tickplot_text::HeuristicTextMeasurer;
//!
//! let mut doc = SvgDocument::new();
//! let root = doc.add_container("sales", Size::new(800.0, 600.0));
//! let config = ChartConfig::new("sales", 480.0, 320.0, ChartMode::Histogram, [1.0, 2.0, 3.0], [4.0, 9.0, 6.0])
//!     .with_titles("Month", "Units");
//! let plan = Chart::new(config).draw(&mut doc, &HeuristicTextMeasurer).unwrap();
//! assert_eq!(plan.unwrap().geometry.bars().count(), 3);
//! assert!(doc.to_markup(root).contains("hystogram-bar"));
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bar_mark;
mod chart;
#[cfg(test)]
mod chart_tests;
mod config;
mod dimension;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod hint;
mod label;
mod layout;
mod range;
mod rule_mark;
mod scale;
mod surface;
mod svg;
mod text_mark;

pub use bar_mark::{BarDatum, BarMark, BarMarkSpec};
pub use chart::{Chart, ChartPlan};
pub use config::{Axis, AxisOrientation, ChartConfig, ChartMode, ChartStyle};
pub use dimension::Dimension;
pub use error::{ChartError, ChartModeError, DimensionError};
pub use geometry::{ChartGeometry, ChartMark};
pub use hint::{
    BAR_CLASS, HIGHLIGHTED_CLASS, HINT_CONTAINER_CLASS, HintLine, HintState, format_value,
    hint_container_id, hint_span_id, page_position,
};
pub use label::{AxisLabels, LabelLines, MeasuredLabel, wrap_words};
pub use layout::{AxisLayout, BarMetrics, Layout};
pub use range::{
    AxisLabel, AxisLabelRange, TICK_INTERVALS, digits, label_range, smart_ceil, smart_floor,
};
pub use rule_mark::{RuleMark, RuleRole};
pub use scale::{ScaleLinear, SlotScale};
pub use surface::{HintNodes, HoverTarget, Namespace, Surface, css_color, materialize};
pub use svg::{NodeId, SvgDocument};
pub use text_mark::{LabelContent, LabelSpan, TextAnchor, TextBaseline, TextMark, WritingMode};
