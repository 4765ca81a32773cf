// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text measurement hooks for axis label layout.
//!
//! Chart layout needs the rendered size of every axis label before it can
//! reserve legend space next to the axes. Browsers answer that with a bounding
//! box query against attached text nodes; native builds have no such oracle.
//! This crate keeps the chart code independent of both by exposing:
//! - a single-line [`TextMeasurer`] trait,
//! - a [`HeuristicTextMeasurer`] for tests and headless rendering, and
//! - [`measure_lines`], which turns per-line metrics into the bounding box of
//!   a wrapped label laid out in one of the [`LineFlow`] arrangements.

#![no_std]

extern crate alloc;

use alloc::sync::Arc;

/// A minimal text measurement interface used by the layout engine.
pub trait TextMeasurer {
    /// Measure a single line of text.
    ///
    /// Wrapped labels are measured line by line; see [`measure_lines`].
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        (**self).measure(text, style)
    }
}

/// Text styling inputs relevant to measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font size in pixels.
    pub font_size: f64,
    /// The preferred font family.
    pub font_family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub font_weight: FontWeight,
}

impl TextStyle {
    /// Creates a sans-serif, normal-weight style with the given `font_size`.
    #[must_use]
    pub fn new(font_size: f64) -> Self {
        Self {
            font_size,
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::NORMAL,
        }
    }

    /// Returns a CSS `font` shorthand for this style, e.g. `400 12px sans-serif`.
    #[must_use]
    pub fn css_font(&self) -> alloc::string::String {
        alloc::format!(
            "{} {}px {}",
            self.font_weight.0,
            self.font_size,
            self.font_family.as_css_family()
        )
    }
}

impl Default for TextStyle {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection for measurement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A generic serif family (CSS `serif`).
    Serif,
    /// A generic sans-serif family (CSS `sans-serif`).
    SansSerif,
    /// A generic monospace family (CSS `monospace`).
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the font family string for CSS-style font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style font weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Normal weight (`400`).
    pub const NORMAL: Self = Self(400);
    /// Bold weight (`700`).
    pub const BOLD: Self = Self(700);
}

/// Measured metrics for a single line of text.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    /// The advance width along the writing direction.
    pub advance_width: f64,
    /// Distance from baseline to the top of typical glyphs.
    pub ascent: f64,
    /// Distance from baseline to the bottom of typical glyphs.
    pub descent: f64,
}

impl TextMetrics {
    /// Returns `ascent + descent`.
    #[must_use]
    pub fn line_height(&self) -> f64 {
        self.ascent + self.descent
    }
}

/// A heuristic text measurer for tests and headless rendering.
///
/// It assumes an average glyph width of 0.6em and a baseline at 0.8em.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicTextMeasurer;

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        TextMetrics {
            advance_width: 0.6 * style.font_size * text.chars().count() as f64,
            ascent: 0.8 * style.font_size,
            descent: 0.2 * style.font_size,
        }
    }
}

/// How the lines of a wrapped label are arranged relative to each other.
///
/// `step` is the offset applied to every continuation line, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LineFlow {
    /// Horizontal text; each line continues where the previous one ended,
    /// shifted back by `step` (SVG `dx = -step`).
    Inline {
        /// Backwards shift per continuation line.
        step: f64,
    },
    /// Horizontal text; each line starts a new row `step` below the previous
    /// one (SVG `dy = step`).
    Rows {
        /// Row advance per continuation line.
        step: f64,
    },
    /// Vertical (`tb`) text; each line continues below the previous one,
    /// shifted one column `step` to the left (SVG `dx = -step`).
    Columns {
        /// Column advance per continuation line.
        step: f64,
    },
}

/// The axis-aligned extent of a rendered label.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBox {
    /// Horizontal extent in pixels.
    pub width: f64,
    /// Vertical extent in pixels.
    pub height: f64,
}

/// Measures the bounding box of `lines` laid out with `flow`.
///
/// Returns an empty box for an empty slice.
pub fn measure_lines<S: AsRef<str>>(
    measurer: &dyn TextMeasurer,
    lines: &[S],
    style: &TextStyle,
    flow: LineFlow,
) -> TextBox {
    let mut advance_sum = 0.0_f64;
    let mut advance_max = 0.0_f64;
    let mut line_height = 0.0_f64;
    for line in lines {
        let m = measurer.measure(line.as_ref(), style);
        advance_sum += m.advance_width;
        advance_max = advance_max.max(m.advance_width);
        line_height = line_height.max(m.line_height());
    }
    let continuation = lines.len().saturating_sub(1) as f64;

    match flow {
        LineFlow::Inline { step } => TextBox {
            width: (advance_sum - step * continuation).max(advance_max),
            height: line_height,
        },
        LineFlow::Rows { step } => TextBox {
            width: advance_max,
            height: line_height + step * continuation,
        },
        LineFlow::Columns { step } => TextBox {
            width: line_height + step * continuation,
            height: advance_sum,
        },
    }
}
