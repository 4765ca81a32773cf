// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart layout.
//!
//! Layout runs after the tick labels have been measured:
//! - **Measure**: the x legend height and y legend width come from the labels.
//! - **Arrange**: each axis gets a pixel length, either from the requested
//!   canvas size or (for a histogram category axis) from the bar count.
//!
//! A canvas dimension of `auto` is then sized to fit the arranged axes.

use kurbo::{Point, Rect, Size};

use crate::config::{Axis, ChartConfig};
use crate::dimension::Dimension;
use crate::label::AxisLabels;
use crate::scale::{ScaleLinear, SlotScale};

/// Bar thickness and spacing along the category axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarMetrics {
    /// Bar thickness.
    pub width: f64,
    /// Space between neighbouring bars.
    pub gap: f64,
}

/// Arranged geometry of one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    /// Axis length in pixels.
    pub length: f64,
    /// Space reserved for the axis labels (x: height, y: width).
    pub legend: f64,
    /// Value-to-pixel mapping anchored on the first and last label.
    pub scale: ScaleLinear,
    /// Bar slots, present only on a histogram category axis.
    pub slots: Option<SlotScale>,
}

/// The derived layout of a chart, recomputed on every draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    /// Requested width with percentages resolved.
    pub width: Dimension,
    /// Requested height with percentages resolved.
    pub height: Dimension,
    /// Final canvas size.
    pub canvas: Size,
    /// Horizontal axis.
    pub x: AxisLayout,
    /// Vertical axis.
    pub y: AxisLayout,
    /// Top-left corner of the plot area.
    pub offset: Point,
    /// Bar metrics for histograms.
    pub bars: Option<BarMetrics>,
}

impl Layout {
    /// Arranges a chart given its measured labels and the container's pixel size.
    pub fn compute(
        config: &ChartConfig,
        x_labels: &AxisLabels,
        y_labels: &AxisLabels,
        container: Size,
    ) -> Self {
        let style = &config.style;
        let width = config.width.resolve(container.width);
        let height = config.height.resolve(container.height);
        let x_legend = x_labels.legend_extent();
        let y_legend = y_labels.legend_extent();
        tracing::debug!(?width, ?height, x_legend, y_legend, "resolved chart dimensions");

        let mut bars = config.category_axis().map(|_| BarMetrics {
            width: style.bar_width,
            gap: style.bar_gap,
        });

        let mut arrange = |axis: Axis| -> f64 {
            // Each axis gives up room for the labels of the other one.
            let (requested, padding, legend, viewport) = match axis {
                Axis::X => (width, style.padding_x, y_legend, style.auto_viewport.width),
                Axis::Y => (height, style.padding_y, x_legend, style.auto_viewport.height),
            };
            match bars.as_mut() {
                Some(bar) if config.is_categorical(axis) => {
                    let n = config.values(axis).len() as f64;
                    if let Some(px) = requested.fixed() {
                        let free = px - 2.0 * padding - legend - style.label_gap;
                        bar.width = 4.0 * free / (5.0 * n);
                        bar.gap = free / (5.0 * n);
                    }
                    n * (bar.width + bar.gap)
                }
                _ => {
                    let viewport = requested.fixed().unwrap_or(viewport);
                    viewport - (legend + style.label_gap) - 2.0 * padding
                }
            }
        };
        let y_len = arrange(Axis::Y);
        let x_len = arrange(Axis::X);

        let canvas = Size::new(
            width
                .fixed()
                .unwrap_or(x_len + y_legend + style.label_gap + 2.0 * style.padding_x),
            height
                .fixed()
                .unwrap_or(y_len + x_legend + style.label_gap + 2.0 * style.padding_y),
        );

        let axis_layout = |axis: Axis, labels: &AxisLabels, length: f64, legend: f64| AxisLayout {
            length,
            legend,
            scale: ScaleLinear::for_range(&labels.range, length),
            slots: config
                .is_categorical(axis)
                .then(|| SlotScale::new(length, config.values(axis).len())),
        };
        let x = axis_layout(Axis::X, x_labels, x_len, x_legend);
        let y = axis_layout(Axis::Y, y_labels, y_len, y_legend);
        let offset = Point::new(style.padding_x + y_legend + style.label_gap, style.padding_y);

        tracing::debug!(
            x_len,
            y_len,
            x_scale = x.scale.px_per_unit(),
            y_scale = y.scale.px_per_unit(),
            canvas_width = canvas.width,
            canvas_height = canvas.height,
            "arranged chart axes"
        );

        Self {
            width,
            height,
            canvas,
            x,
            y,
            offset,
            bars,
        }
    }

    /// Returns the layout of `axis`.
    pub fn axis(&self, axis: Axis) -> &AxisLayout {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// The plot rectangle bounded by the two axes.
    pub fn plot(&self) -> Rect {
        Rect::new(
            self.offset.x,
            self.offset.y,
            self.offset.x + self.x.length,
            self.offset.y + self.y.length,
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::config::{ChartMode, ChartStyle};
    use crate::range::label_range;
    use tickplot_text::HeuristicTextMeasurer;

    fn layout(config: &ChartConfig, container: Size) -> Layout {
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
        Layout::compute(config, &x, &y, container)
    }

    #[test]
    fn fixed_histogram_bars_fill_free_space_four_to_one() {
        let config = ChartConfig::new(
            "c",
            600.0,
            400.0,
            ChartMode::Histogram,
            [1.0, 2.0, 3.0, 4.0],
            [10.0, 20.0, 15.0, 5.0],
        );
        let l = layout(&config, Size::ZERO);
        let bars = l.bars.unwrap();
        let free = 600.0 - 2.0 * 30.0 - l.y.legend - 20.0;
        assert!((4.0 * (bars.width + bars.gap) - free).abs() < 1e-9);
        assert!((bars.width / bars.gap - 4.0).abs() < 1e-9);
        assert!((l.x.length - free).abs() < 1e-9);
        assert_eq!(l.canvas, Size::new(600.0, 400.0));
        assert_eq!(l.x.slots.map(|s| s.count()), Some(4));
        assert!(l.y.slots.is_none());
    }

    #[test]
    fn reversed_fixed_histogram_sizes_bars_from_height() {
        let config = ChartConfig::new(
            "c",
            480.0,
            320.0,
            ChartMode::Histogram,
            [3.0, 1.0, 2.0],
            [40.0, 25.5, 90.0],
        )
        .with_orientation(crate::config::AxisOrientation::Reversed);
        let l = layout(&config, Size::ZERO);
        let bars = l.bars.unwrap();
        let free = 320.0 - 2.0 * 30.0 - l.x.legend - 20.0;
        assert!((3.0 * (bars.width + bars.gap) - free).abs() < 1e-9);
        assert!((bars.width / bars.gap - 4.0).abs() < 1e-9);
        assert!((l.y.length - free).abs() < 1e-9);
        assert_eq!(l.y.slots.map(|s| s.count()), Some(3));
        assert!(l.x.slots.is_none());
        assert_eq!(l.canvas, Size::new(480.0, 320.0));
    }

    #[test]
    fn auto_histogram_uses_default_bars_and_fits_canvas() {
        let config = ChartConfig::new(
            "c",
            Dimension::Auto,
            300.0,
            ChartMode::Histogram,
            [1.0, 2.0, 3.0],
            [10.0, 20.0, 15.0],
        );
        let l = layout(&config, Size::ZERO);
        assert_eq!(l.bars, Some(BarMetrics { width: 50.0, gap: 10.0 }));
        assert!((l.x.length - 180.0).abs() < 1e-9);
        let expected = 180.0 + l.y.legend + 20.0 + 60.0;
        assert!((l.canvas.width - expected).abs() < 1e-9);
    }

    #[test]
    fn auto_graph_axis_uses_default_viewport() {
        let config = ChartConfig::new(
            "c",
            Dimension::Auto,
            Dimension::Auto,
            ChartMode::Graph,
            [1.0, 2.0, 3.0],
            [10.0, 20.0, 15.0],
        );
        let l = layout(&config, Size::ZERO);
        let style = ChartStyle::default();
        let x_len = 300.0 - (l.y.legend + 20.0) - 60.0;
        assert!((l.x.length - x_len).abs() < 1e-9);
        // Fitting the canvas to the content gives back the default viewport.
        assert!((l.canvas.width - style.auto_viewport.width).abs() < 1e-9);
        assert!((l.canvas.height - style.auto_viewport.height).abs() < 1e-9);
        assert!(l.bars.is_none());
    }

    #[test]
    fn percent_width_resolves_against_container() {
        let config = ChartConfig::new(
            "c",
            Dimension::Percent(50.0),
            200.0,
            ChartMode::Graph,
            [1.0, 2.0],
            [1.0, 2.0],
        );
        let l = layout(&config, Size::new(800.0, 0.0));
        assert_eq!(l.width, Dimension::Pixels(400.0));
        assert!((l.canvas.width - 400.0).abs() < 1e-9);
    }

    #[test]
    fn plot_starts_after_padding_legend_and_gap() {
        let config = ChartConfig::new("c", 400.0, 300.0, ChartMode::Graph, [0.0, 9.0], [1.0, 2.0]);
        let l = layout(&config, Size::ZERO);
        assert!((l.offset.x - (30.0 + l.y.legend + 20.0)).abs() < 1e-9);
        assert!((l.offset.y - 30.0).abs() < 1e-9);
        assert!((l.plot().height() - l.y.length).abs() < 1e-9);
        let span = l.x.scale.length() / l.x.scale.px_per_unit();
        assert!((span - 11.0).abs() < 1e-9);
    }
}
