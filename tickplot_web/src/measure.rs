// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canvas-backed text measurement.

use tickplot_text::{HeuristicTextMeasurer, TextMeasurer, TextMetrics, TextStyle};

/// A `wasm32` measurer backed by HTML Canvas 2D text metrics.
///
/// On non-`wasm32` targets, this type is still available but always falls back
/// to [`HeuristicTextMeasurer`].
#[derive(Clone, Debug)]
pub struct WebTextMeasurer {
    #[cfg(target_arch = "wasm32")]
    ctx: web_sys::CanvasRenderingContext2d,
}

#[cfg(not(target_arch = "wasm32"))]
impl Default for WebTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl WebTextMeasurer {
    /// Creates a measurer drawing into a detached canvas.
    ///
    /// This requires a browser-like environment with `window` and `document`.
    #[cfg(target_arch = "wasm32")]
    pub fn new() -> Result<Self, wasm_bindgen::JsValue> {
        use wasm_bindgen::{JsCast as _, JsValue};

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("tickplot_web: missing document"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<web_sys::HtmlCanvasElement>()?;
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("tickplot_web: missing 2d context"))?
            .dyn_into::<web_sys::CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    /// Creates a measurer that reuses an existing canvas 2D context.
    #[cfg(target_arch = "wasm32")]
    #[must_use]
    pub fn from_canvas_context(ctx: web_sys::CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }

    /// Creates a non-web measurer that always falls back to heuristics.
    #[cfg(not(target_arch = "wasm32"))]
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl TextMeasurer for WebTextMeasurer {
    fn measure(&self, text: &str, style: &TextStyle) -> TextMetrics {
        #[cfg(target_arch = "wasm32")]
        {
            self.ctx.set_font(&style.css_font());
            let Ok(metrics) = self.ctx.measure_text(text) else {
                return HeuristicTextMeasurer.measure(text, style);
            };

            // Older engines report zero bounding boxes; treat them as unknown.
            let ascent = metrics.actual_bounding_box_ascent();
            let descent = metrics.actual_bounding_box_descent();
            TextMetrics {
                advance_width: metrics.width(),
                ascent: if ascent > 0.0 {
                    ascent
                } else {
                    0.8 * style.font_size
                },
                descent: if descent > 0.0 {
                    descent
                } else {
                    0.2 * style.font_size
                },
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        HeuristicTextMeasurer.measure(text, style)
    }
}
