// Copyright 2025 the Tickplot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Surface`] that serializes to SVG/HTML markup.
//!
//! [`SvgDocument`] is what tests and headless rendering draw into. It keeps a
//! flat node arena, remembers hover bindings so pointer events can be
//! simulated, and writes markup with [`SvgDocument::to_markup`].

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Point, Size};

use crate::error::ChartError;
use crate::surface::{HoverTarget, Namespace, Surface};

/// Handle to a node in an [`SvgDocument`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
struct NodeData {
    namespace: Namespace,
    tag: String,
    attrs: Vec<(String, String)>,
    classes: Vec<String>,
    style: Vec<(String, String)>,
    text: Option<String>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
}

/// A detached in-memory document.
#[derive(Debug, Default)]
pub struct SvgDocument {
    nodes: Vec<NodeData>,
    roots: Vec<NodeId>,
    containers: HashMap<String, (NodeId, Size)>,
    hover: HashMap<NodeId, HoverTarget<NodeId>>,
}

impl SvgDocument {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a top-level `div` with the given `id` and pixel size.
    pub fn add_container(&mut self, id: &str, size: Size) -> NodeId {
        let node = self.push(Namespace::Html, "div");
        self.nodes[node.0]
            .attrs
            .push(("id".to_string(), id.to_string()));
        self.roots.push(node);
        self.containers.insert(id.to_string(), (node, size));
        node
    }

    /// Total number of nodes, containers included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Tag name of `node`.
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0).map(|n| n.tag.as_str())
    }

    /// Attribute `name` of `node`.
    pub fn attr(&self, node: NodeId, name: &str) -> Option<&str> {
        let n = self.nodes.get(node.0)?;
        n.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Inline style `property` of `node`.
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        let n = self.nodes.get(node.0)?;
        n.style
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if `node` has CSS class `class`.
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.nodes
            .get(node.0)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    /// Text content of `node`, not including children.
    pub fn text(&self, node: NodeId) -> Option<&str> {
        self.nodes.get(node.0)?.text.as_deref()
    }

    /// Children of `node`, in order.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.nodes
            .get(node.0)
            .map(|n| n.children.as_slice())
            .unwrap_or_default()
    }

    /// Parent of `node`.
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.0)?.parent
    }

    /// `node` and all its descendants in document order.
    pub fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = alloc::vec![node];
        while let Some(n) = stack.pop() {
            out.push(n);
            stack.extend(self.children(n).iter().rev().copied());
        }
        out
    }

    fn attached(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.roots.iter().flat_map(move |&root| self.descendants(root))
    }

    /// First attached node whose `id` attribute is `id`.
    pub fn find_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached().find(|&n| self.attr(n, "id") == Some(id))
    }

    /// Attached nodes with CSS class `class`, in document order.
    pub fn find_by_class(&self, class: &str) -> Vec<NodeId> {
        self.attached().filter(|&n| self.has_class(n, class)).collect()
    }

    /// Attached nodes with tag `tag`, in document order.
    pub fn find_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.attached().filter(|&n| self.tag(n) == Some(tag)).collect()
    }

    /// Simulates the pointer entering `node` at `page` coordinates.
    ///
    /// Returns `false` if no hover handler is bound to `node`.
    pub fn hover_enter(&mut self, node: NodeId, page: Point) -> Result<bool, ChartError> {
        let Some(target) = self.hover.get(&node).cloned() else {
            return Ok(false);
        };
        target.enter(self, page)?;
        Ok(true)
    }

    /// Simulates the pointer leaving `node`.
    ///
    /// Returns `false` if no hover handler is bound to `node`.
    pub fn hover_leave(&mut self, node: NodeId) -> Result<bool, ChartError> {
        let Some(target) = self.hover.get(&node).cloned() else {
            return Ok(false);
        };
        target.leave(self)?;
        Ok(true)
    }

    /// Serializes `node` and its subtree.
    pub fn to_markup(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.write_node(&mut out, node, 0);
        out
    }

    fn write_node(&self, out: &mut String, node: NodeId, depth: usize) {
        let Some(n) = self.nodes.get(node.0) else {
            return;
        };
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push('<');
        out.push_str(&n.tag);
        if n.tag == "svg"
            && let Some(uri) = n.namespace.uri()
        {
            out.push_str(&format!(r#" xmlns="{uri}""#));
        }
        for (k, v) in &n.attrs {
            out.push_str(&format!(r#" {k}="{}""#, escape_xml(v)));
        }
        if !n.classes.is_empty() {
            out.push_str(&format!(r#" class="{}""#, escape_xml(&n.classes.join(" "))));
        }
        if !n.style.is_empty() {
            let style: Vec<String> = n.style.iter().map(|(k, v)| format!("{k}: {v};")).collect();
            out.push_str(&format!(r#" style="{}""#, escape_xml(&style.join(" "))));
        }

        if n.children.is_empty() {
            match &n.text {
                Some(text) => {
                    out.push('>');
                    out.push_str(&escape_xml(text));
                    out.push_str(&format!("</{}>\n", n.tag));
                }
                None if n.namespace == Namespace::Svg => out.push_str("/>\n"),
                None => out.push_str(&format!("></{}>\n", n.tag)),
            }
            return;
        }

        out.push_str(">\n");
        for &child in &n.children {
            self.write_node(out, child, depth + 1);
        }
        for _ in 0..depth {
            out.push_str("  ");
        }
        out.push_str(&format!("</{}>\n", n.tag));
    }

    fn push(&mut self, namespace: Namespace, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeData {
            namespace,
            tag: tag.to_string(),
            attrs: Vec::new(),
            classes: Vec::new(),
            style: Vec::new(),
            text: None,
            children: Vec::new(),
            parent: None,
        });
        id
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut NodeData, ChartError> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| ChartError::Surface(format!("unknown node {}", node.0)))
    }
}

impl Surface for SvgDocument {
    type Node = NodeId;

    fn container(&mut self, id: &str) -> Option<NodeId> {
        self.containers.get(id).map(|(node, _)| *node)
    }

    fn container_size(&self, container: &NodeId) -> Size {
        self.containers
            .values()
            .find(|(node, _)| node == container)
            .map(|(_, size)| *size)
            .unwrap_or(Size::ZERO)
    }

    fn create(&mut self, namespace: Namespace, tag: &str) -> Result<NodeId, ChartError> {
        Ok(self.push(namespace, tag))
    }

    fn set_attr(&mut self, node: &NodeId, name: &str, value: &str) -> Result<(), ChartError> {
        let n = self.node_mut(*node)?;
        match n.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => n.attrs.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn set_text(&mut self, node: &NodeId, text: &str) -> Result<(), ChartError> {
        self.node_mut(*node)?.text = Some(text.to_string());
        Ok(())
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) -> Result<(), ChartError> {
        let n = self.node_mut(*node)?;
        match n.style.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => n.style.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn add_class(&mut self, node: &NodeId, class: &str) -> Result<(), ChartError> {
        let n = self.node_mut(*node)?;
        if !n.classes.iter().any(|c| c == class) {
            n.classes.push(class.to_string());
        }
        Ok(())
    }

    fn remove_class(&mut self, node: &NodeId, class: &str) -> Result<(), ChartError> {
        self.node_mut(*node)?.classes.retain(|c| c != class);
        Ok(())
    }

    fn append(&mut self, parent: &NodeId, child: &NodeId) -> Result<(), ChartError> {
        self.node_mut(*parent)?;
        let old_parent = self.node_mut(*child)?.parent.replace(*parent);
        if let Some(old) = old_parent {
            self.node_mut(old)?.children.retain(|c| c != child);
        }
        self.node_mut(*parent)?.children.push(*child);
        Ok(())
    }

    fn bind_hover(
        &mut self,
        node: &NodeId,
        target: HoverTarget<NodeId>,
    ) -> Result<(), ChartError> {
        self.node_mut(*node)?;
        self.hover.insert(*node, target);
        Ok(())
    }
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
