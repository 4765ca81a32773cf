// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover hint state.
//!
//! One [`HintState`] exists per drawn chart. Every bar's hover handlers share
//! it; entering a bar highlights it and shows the hint at the pointer, leaving
//! it hides the hint again.

extern crate alloc;

use alloc::format;
use alloc::string::String;

use kurbo::{Point, Vec2};

use crate::bar_mark::BarDatum;
use crate::config::{Axis, AxisOrientation};

/// CSS class of the hint container.
pub const HINT_CONTAINER_CLASS: &str = "hint-container";
/// CSS class of every histogram bar.
pub const BAR_CLASS: &str = "hystogram-bar";
/// CSS class added to the bar under the pointer.
pub const HIGHLIGHTED_CLASS: &str = "highlighted";

/// Element id of the hint container for the chart mounted in `container_id`.
pub fn hint_container_id(container_id: &str) -> String {
    format!("hint-container-{container_id}")
}

/// Element id of the hint span showing the `axis` value.
pub fn hint_span_id(axis: Axis, container_id: &str) -> String {
    match axis {
        Axis::X => format!("x-value-hint-{container_id}"),
        Axis::Y => format!("y-value-hint-{container_id}"),
    }
}

/// Converts a viewport pointer position to page coordinates.
pub fn page_position(client: Point, scroll: Vec2) -> Point {
    client + scroll
}

/// Formats a value the way it is stored in a bar's `data-*-value` attribute.
pub fn format_value(value: f64) -> String {
    format!("{value}")
}

/// One line of the hint.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HintLine {
    /// The axis whose value the line shows.
    pub axis: Axis,
    /// `"<title>: <value>"`.
    pub text: String,
}

/// Shared hover state of one chart.
#[derive(Clone, Debug, PartialEq)]
pub struct HintState {
    x_title: String,
    y_title: String,
    orientation: AxisOrientation,
    x_text: String,
    y_text: String,
    position: Point,
    visible: bool,
    highlighted: Option<usize>,
}

impl HintState {
    /// Creates a hidden hint.
    pub fn new(
        x_title: impl Into<String>,
        y_title: impl Into<String>,
        orientation: AxisOrientation,
    ) -> Self {
        Self {
            x_title: x_title.into(),
            y_title: y_title.into(),
            orientation,
            x_text: String::new(),
            y_text: String::new(),
            position: Point::ZERO,
            visible: false,
            highlighted: None,
        }
    }

    /// Highlights `bar` and shows its values at `page` coordinates.
    pub fn enter(&mut self, bar: &BarDatum, page: Point) {
        self.x_text = format!("{}: {}", self.x_title, format_value(bar.x));
        self.y_text = format!("{}: {}", self.y_title, format_value(bar.y));
        self.position = page;
        self.visible = true;
        self.highlighted = Some(bar.index);
        tracing::trace!(index = bar.index, x = page.x, y = page.y, "hint shown");
    }

    /// Unhighlights `bar` and hides the hint.
    ///
    /// The hint is hidden even if another bar is highlighted; handlers never
    /// overlap in practice.
    pub fn leave(&mut self, bar: &BarDatum) {
        if self.highlighted == Some(bar.index) {
            self.highlighted = None;
        }
        self.visible = false;
        tracing::trace!(index = bar.index, "hint hidden");
    }

    /// The text of the line showing the `axis` value.
    pub fn text(&self, axis: Axis) -> &str {
        match axis {
            Axis::X => &self.x_text,
            Axis::Y => &self.y_text,
        }
    }

    /// The axes in display order: y first when reversed.
    pub fn axis_order(&self) -> [Axis; 2] {
        match self.orientation {
            AxisOrientation::Normal => [Axis::X, Axis::Y],
            AxisOrientation::Reversed => [Axis::Y, Axis::X],
        }
    }

    /// Both hint lines in display order.
    pub fn lines(&self) -> [HintLine; 2] {
        self.axis_order().map(|axis| HintLine {
            axis,
            text: String::from(self.text(axis)),
        })
    }

    /// Page position of the hint.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns `true` while a bar is hovered.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Index of the highlighted bar.
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// CSS `display` value for the hint container.
    pub fn display(&self) -> &'static str {
        if self.visible { "flex" } else { "none" }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const BAR: BarDatum = BarDatum {
        index: 2,
        x: 3.0,
        y: 2.5,
    };

    #[test]
    fn enter_shows_titled_values_at_page_position() {
        let mut hint = HintState::new("Month", "Sales", AxisOrientation::Normal);
        let page = page_position(Point::new(10.0, 20.0), Vec2::new(0.0, 100.0));
        hint.enter(&BAR, page);
        assert!(hint.is_visible());
        assert_eq!(hint.display(), "flex");
        assert_eq!(hint.position(), Point::new(10.0, 120.0));
        assert_eq!(hint.highlighted(), Some(2));
        let lines = hint.lines();
        assert_eq!(lines[0].text, "Month: 3");
        assert_eq!(lines[1].text, "Sales: 2.5");
    }

    #[test]
    fn reversed_hint_lists_y_first() {
        let mut hint = HintState::new("x", "y", AxisOrientation::Reversed);
        hint.enter(&BAR, Point::ZERO);
        assert_eq!(hint.lines()[0].axis, Axis::Y);
        assert_eq!(hint.lines()[0].text, "y: 2.5");
    }

    #[test]
    fn leave_hides_and_unhighlights() {
        let mut hint = HintState::new("x", "y", AxisOrientation::Normal);
        hint.enter(&BAR, Point::ZERO);
        hint.leave(&BAR);
        assert!(!hint.is_visible());
        assert_eq!(hint.display(), "none");
        assert_eq!(hint.highlighted(), None);
    }

    #[test]
    fn element_ids_embed_the_container_id() {
        assert_eq!(hint_container_id("sales"), "hint-container-sales");
        assert_eq!(hint_span_id(Axis::Y, "sales"), "y-value-hint-sales");
    }
}
