// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The chart entry point.

use kurbo::Size;
use tickplot_text::TextMeasurer;

use crate::config::{Axis, ChartConfig};
use crate::error::ChartError;
use crate::geometry::ChartGeometry;
use crate::label::AxisLabels;
use crate::layout::Layout;
use crate::range::label_range;
use crate::surface::{Surface, materialize};

/// Everything derived for one draw: measured labels, layout and geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPlan {
    /// Measured x labels.
    pub x_labels: AxisLabels,
    /// Measured y labels.
    pub y_labels: AxisLabels,
    /// Arranged layout.
    pub layout: Layout,
    /// Marks to draw.
    pub geometry: ChartGeometry,
}

/// A line or bar chart bound to a container id.
///
/// The configuration is fixed at construction; every [`Chart::draw`]
/// recomputes ranges, layout and geometry from it.
#[derive(Clone, Debug, PartialEq)]
pub struct Chart {
    config: ChartConfig,
}

impl Chart {
    /// Creates a chart.
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Computes labels, layout and geometry without drawing.
    ///
    /// `container` is the pixel size percentages resolve against. Returns
    /// `None` if either series is empty.
    pub fn plan(&self, measurer: &dyn TextMeasurer, container: Size) -> Option<ChartPlan> {
        let config = &self.config;
        if config.is_empty() {
            return None;
        }
        let measure = |axis: Axis| {
            AxisLabels::measure(
                axis,
                label_range(config.values(axis), config.is_categorical(axis)),
                measurer,
                &config.style,
            )
        };
        let x_labels = measure(Axis::X);
        let y_labels = measure(Axis::Y);
        let layout = Layout::compute(config, &x_labels, &y_labels, container);
        let geometry = ChartGeometry::build(config, &x_labels, &y_labels, &layout);
        Some(ChartPlan {
            x_labels,
            y_labels,
            layout,
            geometry,
        })
    }

    /// Draws the chart into its container on `surface`.
    ///
    /// Drawing an empty series is a no-op returning `Ok(None)`. Drawing twice
    /// appends a second chart; clearing the container is up to the caller.
    pub fn draw<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        measurer: &dyn TextMeasurer,
    ) -> Result<Option<ChartPlan>, ChartError> {
        let config = &self.config;
        if config.is_empty() {
            tracing::debug!(
                container = config.container_id.as_str(),
                "empty series, nothing to draw"
            );
            return Ok(None);
        }
        let container = surface
            .container(&config.container_id)
            .ok_or_else(|| ChartError::MissingContainer(config.container_id.clone()))?;
        let size = surface.container_size(&container);
        let Some(plan) = self.plan(measurer, size) else {
            return Ok(None);
        };
        materialize(surface, &container, config, &plan.layout, &plan.geometry)?;
        Ok(Some(plan))
    }
}
