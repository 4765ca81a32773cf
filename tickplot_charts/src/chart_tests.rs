// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::ToString;
use alloc::vec::Vec;

use kurbo::{Point, Size};
use tickplot_text::HeuristicTextMeasurer;

use crate::{
    Axis, AxisLabels, AxisOrientation, BAR_CLASS, Chart, ChartConfig, ChartError,
    ChartGeometry, ChartMode, Dimension, HIGHLIGHTED_CLASS, Layout, NodeId, SvgDocument,
    label_range, materialize,
};

fn draw(config: ChartConfig, container: Size) -> (SvgDocument, NodeId, crate::ChartPlan) {
    let mut doc = SvgDocument::new();
    let root = doc.add_container(&config.container_id.clone(), container);
    let plan = Chart::new(config)
        .draw(&mut doc, &HeuristicTextMeasurer)
        .expect("draw should succeed")
        .expect("series are not empty");
    (doc, root, plan)
}

fn by_id(doc: &SvgDocument, id: &str) -> NodeId {
    doc.find_by_id(id)
        .unwrap_or_else(|| panic!("missing node #{id}"))
}

fn bars_config() -> ChartConfig {
    ChartConfig::new(
        "sales",
        480.0,
        320.0,
        ChartMode::Histogram,
        [3.0, 1.0, 2.0],
        [40.0, 25.5, 90.0],
    )
    .with_titles("Month", "Units")
}

#[test]
fn graph_draws_eleven_labels_per_axis() {
    let config = ChartConfig::new(
        "g",
        500.0,
        300.0,
        ChartMode::Graph,
        [1.0, 2.0, 3.0],
        [10.0, 20.0, 15.0],
    );
    let (doc, _, plan) = draw(config, Size::ZERO);

    assert!(!plan.x_labels.range.categorical);
    assert!(!plan.y_labels.range.categorical);
    assert_eq!(plan.x_labels.range.len(), 11);
    assert_eq!(plan.y_labels.range.len(), 11);
    assert_eq!(doc.find_by_tag("text").len(), 22);
    let line = doc.find_by_tag("polyline")[0];
    let points = doc.attr(line, "points").unwrap();
    assert_eq!(points.split(' ').count(), 3);
    assert!(points.split(' ').all(|p| p.split(',').count() == 2));
    assert_eq!(doc.attr(line, "fill"), Some("none"));
    assert!(doc.find_by_class(BAR_CLASS).is_empty());
}

#[test]
fn node_tree_matches_the_documented_layout() {
    let (doc, root, _) = draw(bars_config(), Size::ZERO);

    let top: Vec<_> = doc
        .children(root)
        .iter()
        .map(|&n| doc.tag(n).unwrap().to_string())
        .collect();
    assert_eq!(top, ["svg", "div"]);

    let main_group = by_id(&doc, "main-group");
    let chart_group = by_id(&doc, "chart-group");
    assert_eq!(doc.children(main_group)[0], chart_group);
    assert!(
        doc.children(main_group)[1..]
            .iter()
            .all(|&n| doc.tag(n) == Some("text"))
    );
    assert_eq!(doc.attr(chart_group, "stroke"), Some("#c9c9c9"));
    assert!(doc.find_by_id("axis-x").is_some());
    assert!(doc.find_by_id("axis-y").is_some());

    let hint = by_id(&doc, "hint-container-sales");
    assert!(doc.has_class(hint, "hint-container"));
    assert_eq!(
        doc.children(hint),
        [by_id(&doc, "x-value-hint-sales"), by_id(&doc, "y-value-hint-sales")]
    );
}

#[test]
fn bars_carry_their_input_values() {
    let config = bars_config();
    let xs = config.x_values.clone();
    let ys = config.y_values.clone();
    let (doc, _, plan) = draw(config, Size::ZERO);

    let bars = doc.find_by_class(BAR_CLASS);
    assert_eq!(bars.len(), 3);
    for (i, &bar) in bars.iter().enumerate() {
        let x: f64 = doc.attr(bar, "data-x-value").unwrap().parse().unwrap();
        let y: f64 = doc.attr(bar, "data-y-value").unwrap().parse().unwrap();
        assert_eq!(x, xs[i]);
        assert_eq!(y, ys[i]);
        assert_eq!(doc.attr(bar, "fill"), Some("#58a1e6"));
        assert_eq!(doc.attr(bar, "stroke"), Some("none"));
    }

    let metrics = plan.layout.bars.unwrap();
    assert!((metrics.width / metrics.gap - 4.0).abs() < 1e-9);
}

#[test]
fn fixed_and_auto_dimensions_style_the_container() {
    let config = ChartConfig::new(
        "c",
        480.0,
        Dimension::Auto,
        ChartMode::Graph,
        [1.0, 2.0],
        [1.0, 2.0],
    );
    let (doc, root, plan) = draw(config, Size::ZERO);
    assert_eq!(doc.style(root, "width"), Some("480px"));
    assert_eq!(doc.style(root, "height"), Some("auto"));

    let svg = doc.find_by_tag("svg")[0];
    assert_eq!(doc.attr(svg, "width"), Some("480"));
    let height: f64 = doc.attr(svg, "height").unwrap().parse().unwrap();
    assert!((height - plan.layout.canvas.height).abs() < 1e-9);
    assert!((height - 150.0).abs() < 1e-9);
}

#[test]
fn percent_width_resolves_against_the_container() {
    let config = ChartConfig::new(
        "c",
        Dimension::Percent(50.0),
        200.0,
        ChartMode::Graph,
        [1.0, 2.0],
        [1.0, 2.0],
    );
    let (doc, root, _) = draw(config, Size::new(800.0, 600.0));
    assert_eq!(doc.style(root, "width"), Some("400px"));
}

#[test]
fn hovering_a_bar_shows_and_hides_the_hint() {
    let (mut doc, _, _) = draw(bars_config(), Size::ZERO);
    let bar = doc.find_by_class(BAR_CLASS)[1];
    let hint = by_id(&doc, "hint-container-sales");

    assert!(doc.hover_enter(bar, Point::new(15.0, 25.0)).unwrap());
    assert!(doc.has_class(bar, HIGHLIGHTED_CLASS));
    assert_eq!(doc.style(hint, "display"), Some("flex"));
    assert_eq!(doc.style(hint, "left"), Some("15px"));
    assert_eq!(doc.style(hint, "top"), Some("25px"));
    assert_eq!(
        doc.text(by_id(&doc, "x-value-hint-sales")),
        Some("Month: 1")
    );
    assert_eq!(
        doc.text(by_id(&doc, "y-value-hint-sales")),
        Some("Units: 25.5")
    );

    assert!(doc.hover_leave(bar).unwrap());
    assert!(!doc.has_class(bar, HIGHLIGHTED_CLASS));
    assert_eq!(doc.style(hint, "display"), Some("none"));

    // Only bars have handlers.
    let axis = by_id(&doc, "axis-x");
    assert!(!doc.hover_enter(axis, Point::ZERO).unwrap());
}

#[test]
fn reversed_histogram_lists_y_hint_first() {
    let config = bars_config().with_orientation(AxisOrientation::Reversed);
    let (doc, _, plan) = draw(config, Size::ZERO);

    assert!(plan.y_labels.range.categorical);
    assert!(plan.layout.y.slots.is_some());
    let hint = by_id(&doc, "hint-container-sales");
    assert_eq!(doc.children(hint)[0], by_id(&doc, "y-value-hint-sales"));

    // Reversed bars all start on the y axis.
    for bar in doc.find_by_class(BAR_CLASS) {
        let x: f64 = doc.attr(bar, "x").unwrap().parse().unwrap();
        assert!((x - plan.layout.offset.x).abs() < 1e-9);
    }
}

#[test]
fn empty_series_draws_nothing() {
    let mut doc = SvgDocument::new();
    let config = ChartConfig::new("c", 100.0, 100.0, ChartMode::Graph, Vec::new(), [5.0]);
    // No container is registered either; the empty check comes first.
    let drawn = Chart::new(config)
        .draw(&mut doc, &HeuristicTextMeasurer)
        .unwrap();
    assert!(drawn.is_none());
    assert_eq!(doc.node_count(), 0);
}

#[test]
fn missing_container_is_an_error() {
    let mut doc = SvgDocument::new();
    doc.add_container("other", Size::ZERO);
    let err = Chart::new(bars_config())
        .draw(&mut doc, &HeuristicTextMeasurer)
        .unwrap_err();
    assert_eq!(err, ChartError::MissingContainer("sales".into()));
    assert_eq!(doc.node_count(), 1);
}

#[test]
fn histogram_x_labels_use_vertical_writing_mode() {
    let (doc, _, _) = draw(bars_config(), Size::ZERO);
    assert!(
        doc.find_by_tag("text")
            .iter()
            .all(|&n| doc.attr(n, "is-multiline").is_none())
    );
    let first = doc.find_by_tag("text")[0];
    assert_eq!(doc.attr(first, "writing-mode"), Some("tb"));
    assert_eq!(doc.text(first), Some("1"));
}

#[test]
fn wrapped_labels_are_written_as_tspans() {
    let config = ChartConfig::new(
        "wrapped",
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
    let geometry = ChartGeometry::build(&config, &x, &y, &layout);

    let mut doc = SvgDocument::new();
    let root = doc.add_container("wrapped", Size::ZERO);
    materialize(&mut doc, &root, &config, &layout, &geometry).unwrap();

    let wrapped: Vec<_> = doc
        .find_by_tag("text")
        .into_iter()
        .filter(|&n| doc.attr(n, "is-multiline") == Some("1"))
        .collect();
    assert_eq!(wrapped.len(), 2, "one wrapped label per axis");

    // x labels come first.
    let x_spans = doc.children(wrapped[0]);
    assert_eq!(x_spans.len(), 2);
    assert_eq!(doc.tag(x_spans[0]), Some("tspan"));
    assert_eq!(doc.text(x_spans[0]), Some("alpha beta"));
    assert_eq!(doc.text(x_spans[1]), Some("gamma"));
    assert_eq!(doc.attr(x_spans[0], "dx"), Some("0"));
    assert_eq!(doc.attr(x_spans[1], "dx"), Some("-14"));
    let label_y = layout.offset.y + layout.y.length + 20.0;
    for &span in x_spans {
        let y: f64 = doc.attr(span, "y").unwrap().parse().unwrap();
        assert!((y - label_y).abs() < 1e-9);
        assert_eq!(doc.attr(span, "x"), None);
    }

    let y_spans = doc.children(wrapped[1]);
    assert_eq!(y_spans.len(), 2);
    assert_eq!(doc.text(y_spans[0]), Some("one two"));
    assert_eq!(doc.text(y_spans[1]), Some("three"));
    assert_eq!(doc.attr(y_spans[0], "dy"), Some("0"));
    assert_eq!(doc.attr(y_spans[1], "dy"), Some("14"));
    assert!(y_spans.iter().all(|&s| doc.attr(s, "x") == Some("30")));
    assert_eq!(doc.text(wrapped[1]), None);
}
