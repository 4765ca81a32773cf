// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart geometry.
//!
//! [`ChartGeometry::build`] turns measured labels and a [`Layout`] into a flat,
//! ordered list of marks. Nothing here touches a rendering surface; see
//! [`crate::surface::materialize`] for that step.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Size};
use smallvec::SmallVec;

use crate::bar_mark::{BarMark, BarMarkSpec};
use crate::config::{Axis, ChartConfig, ChartMode};
use crate::label::{AxisLabels, MeasuredLabel};
use crate::layout::Layout;
use crate::rule_mark::{RuleMark, RuleRole};
use crate::text_mark::{LabelContent, LabelSpan, TextAnchor, TextBaseline, TextMark, WritingMode};

/// A mark drawn inside the chart group.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartMark {
    /// A hatch, gridline or axis line.
    Rule(RuleMark),
    /// A histogram bar.
    Bar(BarMark),
}

/// Everything a surface needs to draw one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartGeometry {
    /// Canvas size.
    pub canvas: Size,
    /// Tick labels, x labels first.
    pub labels: Vec<TextMark>,
    /// Chart-group marks in drawing order.
    pub marks: Vec<ChartMark>,
    /// Graph-mode data points in input order, in canvas coordinates.
    pub line_points: Vec<Point>,
}

impl ChartGeometry {
    /// Builds the geometry of a chart.
    ///
    /// Marks are ordered: x hatches (each followed by its gridline), y hatches
    /// (likewise), the y axis, the x axis, then bars.
    pub fn build(
        config: &ChartConfig,
        x_labels: &AxisLabels,
        y_labels: &AxisLabels,
        layout: &Layout,
    ) -> Self {
        let style = &config.style;
        let origin = layout.offset;
        let width = layout.x.length;
        let height = layout.y.length;
        let half_hatch = style.hatch_width / 2.0;

        let mut labels = Vec::with_capacity(x_labels.measured.len() + y_labels.measured.len());
        let mut marks = Vec::new();

        let x_categorical = layout.x.slots.is_some();
        for (i, (label, measured)) in x_labels
            .range
            .labels
            .iter()
            .zip(&x_labels.measured)
            .enumerate()
        {
            let c = match layout.x.slots {
                Some(slots) => slots.center(i),
                None => layout.x.scale.tick(i),
            };
            let x = origin.x + c;
            let axis_y = origin.y + height;
            marks.push(ChartMark::Rule(RuleMark::vertical(
                RuleRole::Hatch,
                x,
                axis_y + half_hatch,
                axis_y - half_hatch,
            )));

            if x_labels.range.is_first_occurrence(i) {
                let label_y = axis_y + style.label_gap;
                let label_x = if measured.is_multiline() {
                    x + measured.bbox.width / 2.0
                } else {
                    x
                };
                let content = label_content(measured, |line| LabelSpan {
                    text: measured.lines[line].clone(),
                    x: None,
                    y: Some(label_y),
                    dx: Some(if line == 0 { 0.0 } else { -style.label_line_step }),
                    dy: None,
                });
                let mark = TextMark::new(
                    Axis::X,
                    i,
                    label.value,
                    Point::new(label_x, label_y),
                    content,
                )
                .with_font_size(style.label_text.font_size)
                .with_fill(style.label_fill)
                .with_bbox(measured.bbox);
                let mark = if x_categorical {
                    mark.with_writing_mode(WritingMode::Vertical)
                        .with_baseline(TextBaseline::Middle)
                        .with_anchor(TextAnchor::Start)
                } else {
                    mark.with_baseline(TextBaseline::Hanging)
                        .with_anchor(TextAnchor::Middle)
                };
                labels.push(mark);
            }

            if !x_categorical {
                marks.push(ChartMark::Rule(
                    RuleMark::vertical(RuleRole::Grid, x, axis_y, origin.y)
                        .with_stroke(style.grid_stroke),
                ));
            }
        }

        let y_count = y_labels.range.len();
        for (i, (label, measured)) in y_labels
            .range
            .labels
            .iter()
            .zip(&y_labels.measured)
            .enumerate()
        {
            let c = match layout.y.slots {
                Some(slots) => slots.center(i),
                None => layout.y.scale.tick(y_count - 1 - i),
            };
            let y = origin.y + c;
            marks.push(ChartMark::Rule(RuleMark::horizontal(
                RuleRole::Hatch,
                y,
                origin.x - half_hatch,
                origin.x + half_hatch,
            )));

            if y_labels.range.is_first_occurrence(i) {
                let content = label_content(measured, |line| LabelSpan {
                    text: measured.lines[line].clone(),
                    x: Some(style.padding_x),
                    y: None,
                    dx: None,
                    dy: Some(if line == 0 { 0.0 } else { style.label_line_step }),
                });
                labels.push(
                    TextMark::new(
                        Axis::Y,
                        i,
                        label.value,
                        Point::new(style.padding_x, y - measured.bbox.height / 2.0),
                        content,
                    )
                    .with_font_size(style.label_text.font_size)
                    .with_fill(style.label_fill)
                    .with_baseline(TextBaseline::Hanging)
                    .with_anchor(TextAnchor::Start)
                    .with_bbox(measured.bbox),
                );
            }

            if layout.y.slots.is_none() {
                marks.push(ChartMark::Rule(
                    RuleMark::horizontal(RuleRole::Grid, y, origin.x, origin.x + width)
                        .with_stroke(style.grid_stroke),
                ));
            }
        }

        marks.push(ChartMark::Rule(
            RuleMark::vertical(RuleRole::Axis, origin.x, origin.y, origin.y + height)
                .with_id("axis-y"),
        ));
        marks.push(ChartMark::Rule(
            RuleMark::horizontal(RuleRole::Axis, origin.y + height, origin.x, origin.x + width)
                .with_id("axis-x"),
        ));

        let bar_axis = config.category_axis();
        if let (Some(axis), Some(bars)) = (bar_axis, layout.bars) {
            let (categories, slots, values) = match axis {
                Axis::X => (&x_labels.range, layout.x.slots, layout.y.scale),
                Axis::Y => (&y_labels.range, layout.y.slots, layout.x.scale),
            };
            if let Some(slots) = slots {
                let spec = BarMarkSpec::new(config.orientation, categories, slots, values)
                    .with_gap(bars.gap)
                    .with_offset(origin)
                    .with_fill(style.bar_fill);
                marks.extend(
                    spec.marks(&config.x_values, &config.y_values)
                        .into_iter()
                        .map(ChartMark::Bar),
                );
            }
        }

        let line_points = if config.mode == ChartMode::Graph {
            config
                .x_values
                .iter()
                .zip(&config.y_values)
                .map(|(&x, &y)| {
                    Point::new(
                        origin.x + layout.x.scale.map(x),
                        origin.y + height - layout.y.scale.map(y),
                    )
                })
                .collect()
        } else {
            Vec::new()
        };

        tracing::debug!(
            labels = labels.len(),
            marks = marks.len(),
            line_points = line_points.len(),
            "built chart geometry"
        );

        Self {
            canvas: layout.canvas,
            labels,
            marks,
            line_points,
        }
    }

    /// Iterates over the bars.
    pub fn bars(&self) -> impl Iterator<Item = &BarMark> {
        self.marks.iter().filter_map(|m| match m {
            ChartMark::Bar(bar) => Some(bar),
            ChartMark::Rule(_) => None,
        })
    }

    /// Iterates over the rules with the given role.
    pub fn rules(&self, role: RuleRole) -> impl Iterator<Item = &RuleMark> {
        self.marks.iter().filter_map(move |m| match m {
            ChartMark::Rule(rule) if rule.role == role => Some(rule),
            _ => None,
        })
    }

    /// Iterates over the labels of one axis.
    pub fn axis_labels(&self, axis: Axis) -> impl Iterator<Item = &TextMark> {
        self.labels.iter().filter(move |l| l.axis == axis)
    }
}

fn label_content(measured: &MeasuredLabel, span: impl Fn(usize) -> LabelSpan) -> LabelContent {
    if measured.is_multiline() {
        LabelContent::Spans((0..measured.lines.len()).map(span).collect::<SmallVec<_>>())
    } else {
        LabelContent::Text(measured.lines.first().cloned().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::AxisOrientation;
    use crate::dimension::Dimension;
    use crate::range::label_range;
    use tickplot_text::HeuristicTextMeasurer;

    fn build(config: &ChartConfig) -> (Layout, ChartGeometry) {
        let x = AxisLabels::measure(
            Axis::X,
            label_range(&config.x_values, config.is_categorical(Axis::X)),
            &HeuristicTextMeasurer,
            &config.style,
        );
        let y = AxisLabels::measure(
            Axis::Y,
            label_range(&config.y_values, config.is_categorical(Axis::Y)),
            &HeuristicTextMeasurer,
            &config.style,
        );
        let layout = Layout::compute(config, &x, &y, Size::ZERO);
        let geometry = ChartGeometry::build(config, &x, &y, &layout);
        (layout, geometry)
    }

    #[test]
    fn graph_has_eleven_ticks_and_gridlines_per_axis() {
        let config = ChartConfig::new(
            "c",
            500.0,
            300.0,
            ChartMode::Graph,
            [1.0, 2.0, 3.0],
            [10.0, 20.0, 15.0],
        );
        let (layout, g) = build(&config);
        assert_eq!(g.rules(RuleRole::Hatch).count(), 22);
        assert_eq!(g.rules(RuleRole::Grid).count(), 22);
        assert_eq!(g.axis_labels(Axis::X).count(), 11);
        assert_eq!(g.axis_labels(Axis::Y).count(), 11);
        assert_eq!(g.bars().count(), 0);
        assert_eq!(g.line_points.len(), 3);

        // The first y label sits at the bottom of the plot.
        let first_y = g.axis_labels(Axis::Y).next().unwrap();
        let bottom = layout.offset.y + layout.y.length;
        assert!((first_y.pos.y - (bottom - first_y.bbox.height / 2.0)).abs() < 1e-9);
        assert!((first_y.pos.x - 30.0).abs() < 1e-9);
    }

    #[test]
    fn axes_follow_the_gridlines_and_precede_bars() {
        let config = ChartConfig::new(
            "c",
            400.0,
            300.0,
            ChartMode::Histogram,
            [1.0, 2.0],
            [3.0, 4.0],
        );
        let (layout, g) = build(&config);
        let axis_at = g
            .marks
            .iter()
            .position(|m| matches!(m, ChartMark::Rule(r) if r.id == Some("axis-y")))
            .unwrap();
        assert!(matches!(&g.marks[axis_at + 1], ChartMark::Rule(r) if r.id == Some("axis-x")));
        assert!(g.marks[axis_at + 2..].iter().all(|m| matches!(m, ChartMark::Bar(_))));

        let x_axis = g.rules(RuleRole::Axis).nth(1).unwrap();
        assert!((x_axis.x1 - (layout.offset.x + layout.x.length)).abs() < 1e-9);
        assert!((x_axis.y0 - (layout.offset.y + layout.y.length)).abs() < 1e-9);
    }

    #[test]
    fn histogram_x_labels_are_vertical_and_centered_in_slots() {
        let config = ChartConfig::new(
            "c",
            400.0,
            300.0,
            ChartMode::Histogram,
            [30.0, 10.0, 20.0],
            [3.0, 4.0, 5.0],
        );
        let (layout, g) = build(&config);
        // Only the value axis has gridlines.
        assert_eq!(g.rules(RuleRole::Grid).count(), 11);
        let labels: Vec<_> = g.axis_labels(Axis::X).collect();
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].writing_mode, WritingMode::Vertical);
        assert_eq!(labels[0].text(), "10");
        let slot = layout.x.length / 3.0;
        assert!((labels[1].pos.x - (layout.offset.x + 1.5 * slot)).abs() < 1e-9);

        let bars: Vec<_> = g.bars().collect();
        assert_eq!(bars.len(), 3);
        // x = 30 lands in the last slot.
        let gap = layout.bars.unwrap().gap;
        assert!((bars[0].origin.x - (layout.offset.x + 2.0 * slot + gap / 2.0)).abs() < 1e-9);
        assert_eq!(bars[0].datum.x, 30.0);
    }

    #[test]
    fn reversed_histogram_puts_categories_on_y() {
        let config = ChartConfig::new(
            "c",
            400.0,
            Dimension::Auto,
            ChartMode::Histogram,
            [5.0, 8.0],
            [1.0, 2.0],
        )
        .with_orientation(AxisOrientation::Reversed);
        let (layout, g) = build(&config);
        assert!(layout.y.slots.is_some());
        assert!((layout.y.length - 2.0 * 60.0).abs() < 1e-9);
        let bar = g.bars().next().unwrap();
        assert!((bar.origin.x - layout.offset.x).abs() < 1e-9);
        assert!((bar.size.height - 50.0).abs() < 1e-9);
        assert!((bar.size.width - layout.x.scale.map(5.0)).abs() < 1e-9);
    }

    #[test]
    fn duplicate_categories_render_one_label() {
        let config = ChartConfig::new(
            "c",
            400.0,
            300.0,
            ChartMode::Histogram,
            [1.0, 1.0, 2.0],
            [3.0, 4.0, 5.0],
        );
        let (_, g) = build(&config);
        assert_eq!(g.axis_labels(Axis::X).count(), 2);
        assert_eq!(g.rules(RuleRole::Hatch).count(), 3 + 11);
        let bars: Vec<_> = g.bars().collect();
        assert_eq!(bars[0].origin.x, bars[1].origin.x);
    }

    #[test]
    fn reversed_fixed_histogram_places_bars_in_y_slots() {
        let config = ChartConfig::new(
            "c",
            480.0,
            320.0,
            ChartMode::Histogram,
            [40.0, 25.5, 90.0],
            [3.0, 1.0, 2.0],
        )
        .with_orientation(AxisOrientation::Reversed);
        let (layout, g) = build(&config);
        let gap = layout.bars.unwrap().gap;
        let slot = layout.y.length / 3.0;
        let bars: Vec<_> = g.bars().collect();
        assert_eq!(bars.len(), 3);
        // y = 3 is the last of the sorted categories [1, 2, 3].
        for (bar, expected_slot) in bars.iter().zip([2.0, 0.0, 1.0]) {
            let y = layout.offset.y + expected_slot * slot + gap / 2.0;
            assert!((bar.origin.y - y).abs() < 1e-9, "bar {:?}", bar.datum);
            assert!((bar.size.height - (slot - gap)).abs() < 1e-9);
        }
    }

    #[test]
    fn wrapped_labels_continue_below_and_beside_the_first_line() {
        let config = ChartConfig::new(
            "c",
            500.0,
            300.0,
            ChartMode::Graph,
            [1.0, 2.0, 3.0],
            [10.0, 20.0, 15.0],
        );
        let style = &config.style;
        let mut x_range = label_range(&config.x_values, false);
        x_range.labels[0].text = "alpha beta gamma".into();
        let mut y_range = label_range(&config.y_values, false);
        y_range.labels[0].text = "one two three".into();
        let x = AxisLabels::measure(Axis::X, x_range, &HeuristicTextMeasurer, style);
        let y = AxisLabels::measure(Axis::Y, y_range, &HeuristicTextMeasurer, style);
        let layout = Layout::compute(&config, &x, &y, Size::ZERO);
        let g = ChartGeometry::build(&config, &x, &y, &layout);

        let x_label = g.axis_labels(Axis::X).next().unwrap();
        assert!(x_label.is_multiline());
        let label_y = layout.offset.y + layout.y.length + 20.0;
        let expected_x = layout.offset.x + layout.x.scale.tick(0) + x_label.bbox.width / 2.0;
        assert!((x_label.pos.x - expected_x).abs() < 1e-9);
        assert!((x_label.pos.y - label_y).abs() < 1e-9);
        let LabelContent::Spans(spans) = &x_label.content else {
            panic!("x label should be split into spans");
        };
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].text, "alpha beta");
        assert_eq!(spans[1].text, "gamma");
        assert_eq!(spans[0].dx, Some(0.0));
        assert_eq!(spans[1].dx, Some(-14.0));
        assert!(spans.iter().all(|s| s.y == Some(label_y) && s.x.is_none() && s.dy.is_none()));

        let y_label = g.axis_labels(Axis::Y).next().unwrap();
        let bottom = layout.offset.y + layout.y.length;
        assert!((y_label.pos.x - 30.0).abs() < 1e-9);
        assert!((y_label.pos.y - (bottom - y_label.bbox.height / 2.0)).abs() < 1e-9);
        let LabelContent::Spans(spans) = &y_label.content else {
            panic!("y label should be split into spans");
        };
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[0].dy, Some(0.0));
        assert_eq!(spans[1].dy, Some(14.0));
        assert!(spans.iter().all(|s| s.x == Some(30.0) && s.y.is_none() && s.dx.is_none()));

        // Unwrapped labels keep plain text.
        assert!(g.axis_labels(Axis::X).skip(1).all(|l| !l.is_multiline()));
    }
}
