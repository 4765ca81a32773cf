// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] over the live browser DOM.

use kurbo::{Point, Size, Vec2};
use tickplot_charts::{ChartError, HoverTarget, Namespace, Surface, page_position};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::{Document, Element, HtmlElement, MouseEvent, Window};

fn js_error(err: JsValue) -> ChartError {
    ChartError::Surface(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// Draws into the page's document.
#[derive(Clone, Debug)]
pub struct DomSurface {
    window: Window,
    document: Document,
}

impl DomSurface {
    /// Binds to the global `window` and its `document`.
    pub fn new() -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("tickplot_web: missing window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("tickplot_web: missing document"))?;
        Ok(Self { window, document })
    }

    fn scroll(&self) -> Vec2 {
        Vec2::new(
            self.window.scroll_x().unwrap_or_default(),
            self.window.scroll_y().unwrap_or_default(),
        )
    }

    fn page(&self, event: &MouseEvent) -> Point {
        let client = Point::new(f64::from(event.client_x()), f64::from(event.client_y()));
        page_position(client, self.scroll())
    }

    fn listen(
        &self,
        node: &Element,
        event: &str,
        handler: impl FnMut(MouseEvent) + 'static,
    ) -> Result<(), ChartError> {
        let closure = Closure::<dyn FnMut(MouseEvent)>::new(handler);
        node.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .map_err(js_error)?;
        // Listeners live as long as the bar does.
        closure.forget();
        Ok(())
    }
}

impl Surface for DomSurface {
    type Node = Element;

    fn container(&mut self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn container_size(&self, container: &Element) -> Size {
        Size::new(
            f64::from(container.client_width()),
            f64::from(container.client_height()),
        )
    }

    fn create(&mut self, namespace: Namespace, tag: &str) -> Result<Element, ChartError> {
        match namespace.uri() {
            Some(uri) => self.document.create_element_ns(Some(uri), tag),
            None => self.document.create_element(tag),
        }
        .map_err(js_error)
    }

    fn set_attr(&mut self, node: &Element, name: &str, value: &str) -> Result<(), ChartError> {
        node.set_attribute(name, value).map_err(js_error)
    }

    fn set_text(&mut self, node: &Element, text: &str) -> Result<(), ChartError> {
        node.set_text_content(Some(text));
        Ok(())
    }

    fn set_style(&mut self, node: &Element, property: &str, value: &str) -> Result<(), ChartError> {
        node.dyn_ref::<HtmlElement>()
            .ok_or_else(|| ChartError::Surface(format!("cannot style <{}>", node.tag_name())))?
            .style()
            .set_property(property, value)
            .map_err(js_error)
    }

    fn add_class(&mut self, node: &Element, class: &str) -> Result<(), ChartError> {
        node.class_list().add_1(class).map_err(js_error)
    }

    fn remove_class(&mut self, node: &Element, class: &str) -> Result<(), ChartError> {
        node.class_list().remove_1(class).map_err(js_error)
    }

    fn append(&mut self, parent: &Element, child: &Element) -> Result<(), ChartError> {
        parent.append_child(child).map(drop).map_err(js_error)
    }

    fn bind_hover(&mut self, node: &Element, target: HoverTarget<Element>) -> Result<(), ChartError> {
        let (surface, on_enter) = (self.clone(), target.clone());
        self.listen(node, "mouseenter", move |event| {
            let page = surface.page(&event);
            if let Err(err) = on_enter.enter(&mut surface.clone(), page) {
                tracing::warn!(%err, "failed to show hint");
            }
        })?;

        let surface = self.clone();
        self.listen(node, "mouseleave", move |_| {
            if let Err(err) = target.leave(&mut surface.clone()) {
                tracing::warn!(%err, "failed to hide hint");
            }
        })
    }
}
