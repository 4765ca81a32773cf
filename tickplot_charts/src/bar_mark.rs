// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bar mark generation.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};
use peniko::Color;

use crate::config::AxisOrientation;
use crate::range::AxisLabelRange;
use crate::scale::{ScaleLinear, SlotScale};

/// The input point a bar was drawn for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarDatum {
    /// Index into the input series.
    pub index: usize,
    /// Input x value.
    pub x: f64,
    /// Input y value.
    pub y: f64,
}

/// A histogram bar.
///
/// `size` is kept as computed, so a value below the axis minimum yields a
/// negative extent rather than a flipped rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct BarMark {
    /// The point this bar represents.
    pub datum: BarDatum,
    /// Top-left corner in canvas coordinates.
    pub origin: Point,
    /// Width and height.
    pub size: Size,
    /// Fill paint.
    pub fill: Color,
}

impl BarMark {
    /// Returns the bar as a normalized rectangle.
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }
}

/// Generates one bar per input point.
///
/// Bars sit in the slot of their category and grow from the value axis origin.
#[derive(Clone, Debug)]
pub struct BarMarkSpec<'a> {
    /// Which axis carries the categories.
    pub orientation: AxisOrientation,
    /// Sorted categories; bars take the slot of the first equal label.
    pub categories: &'a AxisLabelRange,
    /// Slots along the category axis.
    pub slots: SlotScale,
    /// Scale along the value axis.
    pub values: ScaleLinear,
    /// Gap between neighbouring bars.
    pub gap: f64,
    /// Top-left corner of the plot.
    pub offset: Point,
    /// Fill paint for bars.
    pub fill: Color,
}

impl<'a> BarMarkSpec<'a> {
    /// Creates a spec with an opaque black fill.
    pub fn new(
        orientation: AxisOrientation,
        categories: &'a AxisLabelRange,
        slots: SlotScale,
        values: ScaleLinear,
    ) -> Self {
        Self {
            orientation,
            categories,
            slots,
            values,
            gap: 0.0,
            offset: Point::ZERO,
            fill: Color::BLACK,
        }
    }

    /// Sets the gap between bars.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Sets the plot origin.
    pub fn with_offset(mut self, offset: Point) -> Self {
        self.offset = offset;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Generates bars for the index-paired prefix of `xs` and `ys`.
    ///
    /// Points whose category has no slot (a NaN category) are skipped.
    pub fn marks(&self, xs: &[f64], ys: &[f64]) -> Vec<BarMark> {
        let slot_width = self.slots.slot_width();
        let thickness = slot_width - self.gap;
        let plot_len = self.values.length();

        xs.iter()
            .zip(ys)
            .enumerate()
            .filter_map(|(index, (&x, &y))| {
                let datum = BarDatum { index, x, y };
                let (category, value) = match self.orientation {
                    AxisOrientation::Normal => (x, y),
                    AxisOrientation::Reversed => (y, x),
                };
                let Some(slot) = self.categories.slot_of(category) else {
                    tracing::trace!(index, category, "bar category has no slot");
                    return None;
                };
                let along = self.slots.start(slot) + self.gap / 2.0;
                let extent = self.values.map(value);
                let (origin, size) = match self.orientation {
                    AxisOrientation::Normal => (
                        Point::new(self.offset.x + along, self.offset.y + (plot_len - extent)),
                        Size::new(thickness, extent),
                    ),
                    AxisOrientation::Reversed => (
                        Point::new(self.offset.x, self.offset.y + along),
                        Size::new(extent, thickness),
                    ),
                };
                Some(BarMark {
                    datum,
                    origin,
                    size,
                    fill: self.fill,
                })
            })
            .collect()
    }
}
