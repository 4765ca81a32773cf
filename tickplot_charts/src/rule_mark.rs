// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rule mark generation.
//!
//! A "rule" is a straight line segment: tick hatches, gridlines and the two
//! axis lines are all rules.

use kurbo::Line;
use peniko::Color;

/// What a rule is drawn for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleRole {
    /// A short tick mark across an axis line.
    Hatch,
    /// A gridline spanning the plot.
    Grid,
    /// One of the two axis lines.
    Axis,
}

/// A rule mark (a stroked line segment).
#[derive(Clone, Debug, PartialEq)]
pub struct RuleMark {
    /// What the rule is drawn for.
    pub role: RuleRole,
    /// Optional element id (`axis-x`, `axis-y`).
    pub id: Option<&'static str>,
    /// Start point x in canvas coordinates.
    pub x0: f64,
    /// Start point y in canvas coordinates.
    pub y0: f64,
    /// End point x in canvas coordinates.
    pub x1: f64,
    /// End point y in canvas coordinates.
    pub y1: f64,
    /// Stroke paint; `None` inherits the chart group stroke.
    pub stroke: Option<Color>,
}

impl RuleMark {
    /// Creates a new rule between two points.
    pub fn new(role: RuleRole, x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            role,
            id: None,
            x0,
            y0,
            x1,
            y1,
            stroke: None,
        }
    }

    /// Creates a horizontal rule.
    pub fn horizontal(role: RuleRole, y: f64, x0: f64, x1: f64) -> Self {
        Self::new(role, x0, y, x1, y)
    }

    /// Creates a vertical rule.
    pub fn vertical(role: RuleRole, x: f64, y0: f64, y1: f64) -> Self {
        Self::new(role, x, y0, x, y1)
    }

    /// Sets the element id.
    pub fn with_id(mut self, id: &'static str) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets an explicit stroke paint.
    pub fn with_stroke(mut self, stroke: Color) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Returns the segment as a `kurbo::Line`.
    pub fn line(&self) -> Line {
        Line::new((self.x0, self.y0), (self.x1, self.y1))
    }
}
