// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering surfaces.
//!
//! A [`Surface`] is a retained node tree in the style of the DOM: nodes are
//! created, given attributes, and appended to parents. [`materialize`] writes a
//! [`ChartGeometry`] into such a tree and wires every bar to a shared
//! [`HintState`].

extern crate alloc;

use alloc::format;
use alloc::rc::Rc;
use alloc::string::String;
use alloc::vec::Vec;
use core::cell::RefCell;

use kurbo::{Point, Size};
use peniko::Color;

use crate::bar_mark::{BarDatum, BarMark};
use crate::config::{Axis, ChartConfig};
use crate::error::ChartError;
use crate::geometry::{ChartGeometry, ChartMark};
use crate::hint::{
    self, BAR_CLASS, HIGHLIGHTED_CLASS, HINT_CONTAINER_CLASS, HintState, format_value,
};
use crate::layout::Layout;
use crate::rule_mark::RuleMark;
use crate::text_mark::{LabelContent, TextMark, WritingMode};

/// The namespace a node is created in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// `http://www.w3.org/2000/svg`.
    Svg,
    /// Plain HTML.
    Html,
}

impl Namespace {
    /// The namespace URI, if any.
    pub fn uri(self) -> Option<&'static str> {
        match self {
            Self::Svg => Some("http://www.w3.org/2000/svg"),
            Self::Html => None,
        }
    }
}

/// A node tree a chart can be drawn into.
pub trait Surface {
    /// A handle to a node. Handles are cheap to clone.
    type Node: Clone;

    /// Looks up the element a chart mounts into.
    fn container(&mut self, id: &str) -> Option<Self::Node>;

    /// Current pixel size of `container`, used to resolve percentages.
    fn container_size(&self, container: &Self::Node) -> Size;

    /// Creates a detached node.
    fn create(&mut self, namespace: Namespace, tag: &str) -> Result<Self::Node, ChartError>;

    /// Sets an attribute.
    fn set_attr(&mut self, node: &Self::Node, name: &str, value: &str) -> Result<(), ChartError>;

    /// Replaces the text content.
    fn set_text(&mut self, node: &Self::Node, text: &str) -> Result<(), ChartError>;

    /// Sets an inline style property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str)
    -> Result<(), ChartError>;

    /// Adds a CSS class.
    fn add_class(&mut self, node: &Self::Node, class: &str) -> Result<(), ChartError>;

    /// Removes a CSS class.
    fn remove_class(&mut self, node: &Self::Node, class: &str) -> Result<(), ChartError>;

    /// Appends `child` as the last child of `parent`.
    fn append(&mut self, parent: &Self::Node, child: &Self::Node) -> Result<(), ChartError>;

    /// Registers `target` to receive pointer enter/leave on `node`.
    fn bind_hover(
        &mut self,
        node: &Self::Node,
        target: HoverTarget<Self::Node>,
    ) -> Result<(), ChartError>;
}

/// The hint container and its two value spans.
#[derive(Clone, Debug)]
pub struct HintNodes<N> {
    /// The `div.hint-container`.
    pub container: N,
    /// The span showing the x value.
    pub x_span: N,
    /// The span showing the y value.
    pub y_span: N,
}

impl<N> HintNodes<N> {
    /// The span showing the `axis` value.
    pub fn span(&self, axis: Axis) -> &N {
        match axis {
            Axis::X => &self.x_span,
            Axis::Y => &self.y_span,
        }
    }
}

/// What a bar's hover handlers act on.
#[derive(Clone, Debug)]
pub struct HoverTarget<N> {
    /// The bar's input point.
    pub datum: BarDatum,
    /// The bar node.
    pub bar: N,
    /// Hint nodes of the chart.
    pub hint: HintNodes<N>,
    /// State shared by every bar of the chart.
    pub state: Rc<RefCell<HintState>>,
}

impl<N> HoverTarget<N> {
    /// Pointer entered the bar at `page` coordinates.
    pub fn enter<S>(&self, surface: &mut S, page: Point) -> Result<(), ChartError>
    where
        S: Surface<Node = N> + ?Sized,
    {
        let (display, texts) = {
            let mut state = self.state.borrow_mut();
            state.enter(&self.datum, page);
            (
                state.display(),
                [
                    String::from(state.text(Axis::X)),
                    String::from(state.text(Axis::Y)),
                ],
            )
        };
        surface.add_class(&self.bar, HIGHLIGHTED_CLASS)?;
        surface.set_text(self.hint.span(Axis::X), &texts[0])?;
        surface.set_text(self.hint.span(Axis::Y), &texts[1])?;
        surface.set_style(&self.hint.container, "left", &format!("{}px", page.x))?;
        surface.set_style(&self.hint.container, "top", &format!("{}px", page.y))?;
        surface.set_style(&self.hint.container, "display", display)
    }

    /// Pointer left the bar.
    pub fn leave<S>(&self, surface: &mut S) -> Result<(), ChartError>
    where
        S: Surface<Node = N> + ?Sized,
    {
        let display = {
            let mut state = self.state.borrow_mut();
            state.leave(&self.datum);
            state.display()
        };
        surface.remove_class(&self.bar, HIGHLIGHTED_CLASS)?;
        surface.set_style(&self.hint.container, "display", display)
    }
}

/// Formats a color as `#rrggbb`.
pub fn css_color(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn num(v: f64) -> String {
    format!("{v}")
}

/// Draws `geometry` into `container` and wires up hover hints.
///
/// The resulting tree is:
/// `container > [svg > g#main-group > [g#chart-group, labels...], div.hint-container]`.
pub fn materialize<S: Surface + ?Sized>(
    surface: &mut S,
    container: &S::Node,
    config: &ChartConfig,
    layout: &Layout,
    geometry: &ChartGeometry,
) -> Result<(), ChartError> {
    let svg = surface.create(Namespace::Svg, "svg")?;
    let main_group = surface.create(Namespace::Svg, "g")?;
    let chart_group = surface.create(Namespace::Svg, "g")?;
    surface.set_attr(&chart_group, "id", "chart-group")?;
    surface.set_attr(&main_group, "id", "main-group")?;
    surface.append(&main_group, &chart_group)?;
    surface.append(&svg, &main_group)?;
    surface.append(container, &svg)?;

    let hint = hint_nodes(surface, container, config)?;

    surface.set_style(container, "width", &layout.width.css_value())?;
    surface.set_style(container, "height", &layout.height.css_value())?;
    surface.set_attr(&svg, "width", &num(geometry.canvas.width))?;
    surface.set_attr(&svg, "height", &num(geometry.canvas.height))?;

    for label in &geometry.labels {
        let node = text_node(surface, label)?;
        surface.append(&main_group, &node)?;
    }

    let state = Rc::new(RefCell::new(HintState::new(
        config.x_title.clone(),
        config.y_title.clone(),
        config.orientation,
    )));
    let mut bar_count = 0_usize;
    for mark in &geometry.marks {
        match mark {
            ChartMark::Rule(rule) => {
                let node = rule_node(surface, rule)?;
                surface.append(&chart_group, &node)?;
            }
            ChartMark::Bar(bar) => {
                let node = bar_node(surface, bar)?;
                surface.append(&chart_group, &node)?;
                surface.bind_hover(
                    &node,
                    HoverTarget {
                        datum: bar.datum,
                        bar: node.clone(),
                        hint: hint.clone(),
                        state: Rc::clone(&state),
                    },
                )?;
                bar_count += 1;
            }
        }
    }

    if !geometry.line_points.is_empty() {
        let points = geometry
            .line_points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");
        let line = surface.create(Namespace::Svg, "polyline")?;
        surface.set_attr(&line, "points", &points)?;
        surface.set_attr(&line, "fill", "none")?;
        surface.set_attr(&line, "stroke", &css_color(config.style.line_stroke))?;
        surface.append(&chart_group, &line)?;
    }

    surface.set_attr(&chart_group, "stroke", &css_color(config.style.chart_stroke))?;
    tracing::debug!(
        container = config.container_id.as_str(),
        labels = geometry.labels.len(),
        bars = bar_count,
        "materialized chart"
    );
    Ok(())
}

fn hint_nodes<S: Surface + ?Sized>(
    surface: &mut S,
    container: &S::Node,
    config: &ChartConfig,
) -> Result<HintNodes<S::Node>, ChartError> {
    let id = config.container_id.as_str();
    let hint_container = surface.create(Namespace::Html, "div")?;
    surface.set_attr(&hint_container, "id", &hint::hint_container_id(id))?;
    surface.add_class(&hint_container, HINT_CONTAINER_CLASS)?;
    let x_span = surface.create(Namespace::Html, "span")?;
    surface.set_attr(&x_span, "id", &hint::hint_span_id(Axis::X, id))?;
    let y_span = surface.create(Namespace::Html, "span")?;
    surface.set_attr(&y_span, "id", &hint::hint_span_id(Axis::Y, id))?;

    let nodes = HintNodes {
        container: hint_container,
        x_span,
        y_span,
    };
    let order = if config.is_reversed() {
        [Axis::Y, Axis::X]
    } else {
        [Axis::X, Axis::Y]
    };
    for axis in order {
        surface.append(&nodes.container, nodes.span(axis))?;
    }
    surface.append(container, &nodes.container)?;
    Ok(nodes)
}

fn text_node<S: Surface + ?Sized>(surface: &mut S, label: &TextMark) -> Result<S::Node, ChartError> {
    let node = surface.create(Namespace::Svg, "text")?;
    surface.set_attr(&node, "x", &num(label.pos.x))?;
    surface.set_attr(&node, "y", &num(label.pos.y))?;
    surface.set_attr(&node, "fill", &css_color(label.fill))?;
    surface.set_attr(&node, "font-size", &num(label.font_size))?;
    if label.writing_mode == WritingMode::Vertical {
        surface.set_attr(&node, "writing-mode", "tb")?;
    }
    surface.set_attr(&node, "dominant-baseline", label.baseline.as_svg())?;
    surface.set_attr(&node, "text-anchor", label.anchor.as_svg())?;

    match &label.content {
        LabelContent::Text(text) => surface.set_text(&node, text)?,
        LabelContent::Spans(spans) => {
            surface.set_attr(&node, "is-multiline", "1")?;
            for span in spans {
                let tspan = surface.create(Namespace::Svg, "tspan")?;
                let attrs = [("x", span.x), ("y", span.y), ("dx", span.dx), ("dy", span.dy)];
                for (name, value) in attrs {
                    if let Some(v) = value {
                        surface.set_attr(&tspan, name, &num(v))?;
                    }
                }
                surface.set_text(&tspan, &span.text)?;
                surface.append(&node, &tspan)?;
            }
        }
    }
    Ok(node)
}

fn rule_node<S: Surface + ?Sized>(surface: &mut S, rule: &RuleMark) -> Result<S::Node, ChartError> {
    let node = surface.create(Namespace::Svg, "line")?;
    if let Some(id) = rule.id {
        surface.set_attr(&node, "id", id)?;
    }
    surface.set_attr(&node, "x1", &num(rule.x0))?;
    surface.set_attr(&node, "y1", &num(rule.y0))?;
    surface.set_attr(&node, "x2", &num(rule.x1))?;
    surface.set_attr(&node, "y2", &num(rule.y1))?;
    if let Some(stroke) = rule.stroke {
        surface.set_attr(&node, "stroke", &css_color(stroke))?;
    }
    Ok(node)
}

fn bar_node<S: Surface + ?Sized>(surface: &mut S, bar: &BarMark) -> Result<S::Node, ChartError> {
    let node = surface.create(Namespace::Svg, "rect")?;
    surface.set_attr(&node, "x", &num(bar.origin.x))?;
    surface.set_attr(&node, "y", &num(bar.origin.y))?;
    surface.set_attr(&node, "width", &num(bar.size.width))?;
    surface.set_attr(&node, "height", &num(bar.size.height))?;
    surface.set_attr(&node, "fill", &css_color(bar.fill))?;
    surface.set_attr(&node, "stroke", "none")?;
    surface.set_attr(&node, "data-x-value", &format_value(bar.datum.x))?;
    surface.set_attr(&node, "data-y-value", &format_value(bar.datum.y))?;
    surface.add_class(&node, BAR_CLASS)?;
    Ok(node)
}
