// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Renders a few charts into `tickplot_demo.html`.
//!
//! Set `RUST_LOG=tickplot_charts=debug` to see layout decisions.

mod html;

use kurbo::{Point, Size};
use peniko::Color;
use tickplot_charts::{
    AxisOrientation, BAR_CLASS, Chart, ChartConfig, ChartError, ChartMode, ChartStyle, Dimension,
    SvgDocument,
};
use tickplot_text::HeuristicTextMeasurer;
use tracing_subscriber::EnvFilter;

/// Size of the page a chart is mounted into; percentages resolve against it.
const PAGE: Size = Size::new(720.0, 480.0);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let sections = vec![
        graph_demo()?,
        histogram_demo()?,
        reversed_demo()?,
        percent_demo()?,
    ];

    let html = html::render_report("tickplot demo", &sections);
    std::fs::write("tickplot_demo.html", html)?;
    println!("wrote tickplot_demo.html");
    Ok(())
}

/// Draws `config` into a fresh document, optionally hovering bar `hover`.
fn render(config: ChartConfig, hover: Option<usize>) -> Result<String, ChartError> {
    let mut doc = SvgDocument::new();
    let root = doc.add_container(&config.container_id, PAGE);
    let chart = Chart::new(config);
    if chart.draw(&mut doc, &HeuristicTextMeasurer)?.is_none() {
        tracing::warn!(container = chart.config().container_id.as_str(), "nothing drawn");
    }
    if let Some(index) = hover
        && let Some(&bar) = doc.find_by_class(BAR_CLASS).get(index)
    {
        doc.hover_enter(bar, Point::new(120.0, 40.0))?;
    }
    Ok(doc.to_markup(root))
}

fn graph_demo() -> Result<html::HtmlSection, ChartError> {
    let xs: Vec<f64> = (0..12).map(f64::from).collect();
    let ys = vec![
        12.0, 18.5, 17.0, 23.0, 31.0, 29.5, 36.0, 44.0, 41.0, 52.0, 58.5, 61.0,
    ];
    let config = ChartConfig::new("graph", 560.0, 320.0, ChartMode::Graph, xs, ys)
        .with_titles("Week", "Signups");
    Ok(html::HtmlSection {
        title: "Line chart".into(),
        description: "Both axes are continuous: eleven rounded ticks each, with gridlines.".into(),
        markup: render(config, None)?,
    })
}

fn histogram_demo() -> Result<html::HtmlSection, ChartError> {
    let config = ChartConfig::new(
        "histogram",
        480.0,
        300.0,
        ChartMode::Histogram,
        [2021.0, 2019.0, 2020.0, 2022.0, 2023.0],
        [140.0, 95.0, 120.0, 180.0, 164.0],
    )
    .with_titles("Year", "Orders");
    Ok(html::HtmlSection {
        title: "Histogram, fixed width".into(),
        description: "Bars split the plot width 4:1 with their gaps. The hint shows bar 2 hovered."
            .into(),
        markup: render(config, Some(2))?,
    })
}

fn reversed_demo() -> Result<html::HtmlSection, ChartError> {
    let style = ChartStyle {
        bar_fill: Color::from_rgb8(0xe6, 0x7e, 0x22),
        ..ChartStyle::default()
    };
    let config = ChartConfig::new(
        "reversed",
        Dimension::Auto,
        Dimension::Auto,
        ChartMode::Histogram,
        [3.5, 7.25, 12.0],
        [1.0, 2.0, 3.0],
    )
    .with_titles("Latency", "Region")
    .with_orientation(AxisOrientation::Reversed)
    .with_style(style);
    Ok(html::HtmlSection {
        title: "Reversed histogram, auto size".into(),
        description: "Categories run down the y axis; the canvas grows to fit the default bars."
            .into(),
        markup: render(config, Some(0))?,
    })
}

fn percent_demo() -> Result<html::HtmlSection, ChartError> {
    let config = ChartConfig::new(
        "percent",
        Dimension::Percent(60.0),
        Dimension::Auto,
        ChartMode::Graph,
        [0.5, 1.0, 1.5, 2.0],
        [0.02, 0.08, 0.05, 0.11],
    )
    .with_titles("Time", "Error rate");
    Ok(html::HtmlSection {
        title: "Percent width".into(),
        description: format!("60% of a {}px wide page; the height is auto.", PAGE.width),
        markup: render(config, None)?,
    })
}
