// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text mark generation.

extern crate alloc;

use alloc::string::String;

use kurbo::Point;
use peniko::Color;
use smallvec::SmallVec;
use tickplot_text::TextBox;

use crate::config::Axis;

/// Horizontal text anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextAnchor {
    /// Text starts at the anchor.
    Start,
    /// Text is centered on the anchor.
    Middle,
    /// Text ends at the anchor.
    End,
}

impl TextAnchor {
    /// SVG `text-anchor` value.
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Vertical text baseline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextBaseline {
    /// The anchor is at the top of the glyphs.
    Hanging,
    /// The anchor is at the middle of the glyphs.
    Middle,
}

impl TextBaseline {
    /// SVG `dominant-baseline` value.
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::Hanging => "hanging",
            Self::Middle => "middle",
        }
    }
}

/// Text direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum WritingMode {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom (SVG `writing-mode="tb"`).
    Vertical,
}

/// One line of a wrapped label (an SVG `tspan`).
#[derive(Clone, Debug, PartialEq)]
pub struct LabelSpan {
    /// Line text.
    pub text: String,
    /// Absolute x, if set.
    pub x: Option<f64>,
    /// Absolute y, if set.
    pub y: Option<f64>,
    /// Relative x shift from the previous line.
    pub dx: Option<f64>,
    /// Relative y shift from the previous line.
    pub dy: Option<f64>,
}

/// The content of a label: plain text, or one span per wrapped line.
#[derive(Clone, Debug, PartialEq)]
pub enum LabelContent {
    /// A single line.
    Text(String),
    /// Two or more lines.
    Spans(SmallVec<[LabelSpan; 2]>),
}

/// A positioned tick label.
#[derive(Clone, Debug, PartialEq)]
pub struct TextMark {
    /// Axis the label belongs to.
    pub axis: Axis,
    /// Index of the label within its axis range.
    pub index: usize,
    /// Label value in data units.
    pub value: f64,
    /// Anchor position in canvas coordinates.
    pub pos: Point,
    /// Text or spans.
    pub content: LabelContent,
    /// Font size.
    pub font_size: f64,
    /// Fill paint.
    pub fill: Color,
    /// Horizontal anchor.
    pub anchor: TextAnchor,
    /// Vertical baseline.
    pub baseline: TextBaseline,
    /// Text direction.
    pub writing_mode: WritingMode,
    /// Measured extent.
    pub bbox: TextBox,
}

impl TextMark {
    /// Creates a horizontal, start-anchored, hanging label.
    pub fn new(axis: Axis, index: usize, value: f64, pos: Point, content: LabelContent) -> Self {
        Self {
            axis,
            index,
            value,
            pos,
            content,
            font_size: 12.0,
            fill: Color::BLACK,
            anchor: TextAnchor::Start,
            baseline: TextBaseline::Hanging,
            writing_mode: WritingMode::Horizontal,
            bbox: TextBox::default(),
        }
    }

    /// Sets the font size.
    pub fn with_font_size(mut self, font_size: f64) -> Self {
        self.font_size = font_size;
        self
    }

    /// Sets the fill paint.
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    /// Sets the text anchor.
    pub fn with_anchor(mut self, anchor: TextAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// Sets the text baseline.
    pub fn with_baseline(mut self, baseline: TextBaseline) -> Self {
        self.baseline = baseline;
        self
    }

    /// Sets the writing mode.
    pub fn with_writing_mode(mut self, writing_mode: WritingMode) -> Self {
        self.writing_mode = writing_mode;
        self
    }

    /// Sets the measured extent.
    pub fn with_bbox(mut self, bbox: TextBox) -> Self {
        self.bbox = bbox;
        self
    }

    /// Returns `true` if the label has more than one line.
    pub fn is_multiline(&self) -> bool {
        matches!(self.content, LabelContent::Spans(_))
    }

    /// Concatenated text of all lines, separated by spaces.
    pub fn text(&self) -> String {
        match &self.content {
            LabelContent::Text(text) => text.clone(),
            LabelContent::Spans(spans) => {
                let mut out = String::new();
                for (i, span) in spans.iter().enumerate() {
                    if i > 0 {
                        out.push(' ');
                    }
                    out.push_str(&span.text);
                }
                out
            }
        }
    }
}
