// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Browser adapter for `tickplot_charts`.
//!
//! On `wasm32` targets this crate exports a `WebChart` class to JavaScript:
//!
//! ```js
//! const chart = new WebChart("sales", 480, "auto", "hystogram",
//!     [1, 2, 3], [4, 9, 6], "Month", "Units", false);
//! chart.draw();
//! ```
//!
//! Width and height accept a pixel number, a `"NN%"` string, or `"auto"`.
//! Labels are measured with canvas `measureText` and hints follow the pointer
//! in page coordinates.
//!
//! Non-`wasm32` builds only provide [`WebTextMeasurer`] (falling back to
//! heuristics) and [`parse_dimension`].

#[cfg(target_arch = "wasm32")]
mod dom;
mod measure;

#[cfg(target_arch = "wasm32")]
pub use dom::DomSurface;
pub use measure::WebTextMeasurer;

use tickplot_charts::{Dimension, DimensionError};

/// Interprets a page-supplied width or height.
///
/// A number is taken as pixels. Text is parsed as a pixel number, `"NN%"`, or
/// `"auto"`. A missing value means `auto`.
pub fn parse_dimension(number: Option<f64>, text: Option<&str>) -> Result<Dimension, DimensionError> {
    match (number, text) {
        (Some(px), _) => Ok(Dimension::Pixels(px)),
        (None, Some(text)) => text.parse(),
        (None, None) => Ok(Dimension::Auto),
    }
}

#[cfg(target_arch = "wasm32")]
mod bindings {
    use tickplot_charts::{AxisOrientation, Chart, ChartConfig, ChartMode, Dimension};
    use wasm_bindgen::prelude::*;

    use crate::{DomSurface, WebTextMeasurer, parse_dimension};

    fn dimension(value: &JsValue) -> Result<Dimension, JsValue> {
        let text = value.as_string();
        parse_dimension(value.as_f64(), text.as_deref())
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }

    /// A chart bound to an element id of the current page.
    #[wasm_bindgen]
    #[derive(Debug)]
    pub struct WebChart {
        chart: Chart,
        surface: DomSurface,
        measurer: WebTextMeasurer,
    }

    #[wasm_bindgen]
    impl WebChart {
        /// Creates a chart for the element with id `container_id`.
        #[wasm_bindgen(constructor)]
        pub fn new(
            container_id: &str,
            width: JsValue,
            height: JsValue,
            mode: &str,
            x_values: Vec<f64>,
            y_values: Vec<f64>,
            x_title: &str,
            y_title: &str,
            reversed: bool,
        ) -> Result<Self, JsValue> {
            let mode: ChartMode = mode
                .parse()
                .map_err(|err: tickplot_charts::ChartModeError| JsValue::from_str(&err.to_string()))?;
            let config = ChartConfig::new(
                container_id,
                dimension(&width)?,
                dimension(&height)?,
                mode,
                x_values,
                y_values,
            )
            .with_titles(x_title, y_title)
            .with_orientation(AxisOrientation::from(reversed));
            Ok(Self {
                chart: Chart::new(config),
                surface: DomSurface::new()?,
                measurer: WebTextMeasurer::new()?,
            })
        }

        /// Draws into the container. Returns `false` if a series is empty.
        ///
        /// Each draw appends a new chart and registers two listeners per bar.
        /// The listeners are never released, so drawing again without clearing
        /// the container leaks the previous chart's handlers.
        pub fn draw(&mut self) -> Result<bool, JsValue> {
            self.chart
                .draw(&mut self.surface, &self.measurer)
                .map(|plan| plan.is_some())
                .map_err(|err| JsValue::from_str(&err.to_string()))
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use bindings::WebChart;
