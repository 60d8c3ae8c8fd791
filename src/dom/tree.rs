use std::fmt;

use crate::error::{Result, ThemeError};

/// Handle to a node in a [`DomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    index: usize,
    generation: u32,
}

impl NodeId {
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.index)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element {
        tag: String,
        classes: Vec<String>,
        attrs: Vec<(String, String)>,
        hidden: bool,
    },
    Text(String),
}

#[derive(Debug, Clone)]
pub struct DomNode {
    pub kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl DomNode {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            parent: None,
            children: Vec::new(),
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag, .. } => Some(tag.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    pub fn classes(&self) -> &[String] {
        match &self.kind {
            NodeKind::Element { classes, .. } => classes,
            NodeKind::Text(_) => &[],
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().iter().any(|c| c == class)
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self.kind, NodeKind::Element { hidden: true, .. })
    }
}

#[derive(Debug, Clone)]
struct Slot {
    generation: u32,
    node: Option<DomNode>,
}

/// Arena-backed element tree with a single root container.
///
/// Slots of removed subtrees are reused by later allocations under a new
/// generation, so ids of removed nodes keep reporting
/// [`ThemeError::NodeNotFound`] even after their slot is occupied again.
#[derive(Debug, Clone)]
pub struct DomTree {
    slots: Vec<Slot>,
    free: Vec<usize>,
    root: NodeId,
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DomTree {
    pub fn new() -> Self {
        let root = DomNode::new(NodeKind::Element {
            tag: "body".to_string(),
            classes: Vec::new(),
            attrs: Vec::new(),
            hidden: false,
        });
        Self {
            slots: vec![Slot {
                generation: 0,
                node: Some(root),
            }],
            free: Vec::new(),
            root: NodeId {
                index: 0,
                generation: 0,
            },
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn allocate(&mut self, kind: NodeKind) -> NodeId {
        let node = Some(DomNode::new(kind));
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index];
            slot.node = node;
            return NodeId {
                index,
                generation: slot.generation,
            };
        }
        self.slots.push(Slot {
            generation: 0,
            node,
        });
        NodeId {
            index: self.slots.len() - 1,
            generation: 0,
        }
    }

    pub fn create_element(&mut self, tag: &str, classes: &[&str]) -> NodeId {
        self.allocate(NodeKind::Element {
            tag: tag.to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            attrs: Vec::new(),
            hidden: false,
        })
    }

    pub fn create_text(&mut self, text: &str) -> NodeId {
        self.allocate(NodeKind::Text(text.to_string()))
    }

    pub fn node(&self, id: NodeId) -> Result<&DomNode> {
        self.slots
            .get(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_ref())
            .ok_or(ThemeError::NodeNotFound(id))
    }

    fn node_mut(&mut self, id: NodeId) -> Result<&mut DomNode> {
        self.slots
            .get_mut(id.index)
            .filter(|slot| slot.generation == id.generation)
            .and_then(|slot| slot.node.as_mut())
            .ok_or(ThemeError::NodeNotFound(id))
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_ok()
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).ok().and_then(DomNode::parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.node(id).map(DomNode::children).unwrap_or(&[])
    }

    pub fn element_children(&self, id: NodeId) -> Vec<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .filter(|child| self.tag(*child).is_some())
            .collect()
    }

    pub fn tag(&self, id: NodeId) -> Option<&str> {
        self.node(id).ok().and_then(DomNode::tag)
    }

    pub fn text(&self, id: NodeId) -> Option<&str> {
        match &self.node(id).ok()?.kind {
            NodeKind::Text(text) => Some(text.as_str()),
            NodeKind::Element { .. } => None,
        }
    }

    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.node(id).map(|n| n.has_class(class)).unwrap_or(false)
    }

    pub fn is_hidden(&self, id: NodeId) -> bool {
        self.node(id).map(DomNode::is_hidden).unwrap_or(false)
    }

    pub fn attr(&self, id: NodeId, name: &str) -> Option<&str> {
        match &self.node(id).ok()?.kind {
            NodeKind::Element { attrs, .. } => attrs
                .iter()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.as_str()),
            NodeKind::Text(_) => None,
        }
    }

    fn element_mut(
        &mut self,
        id: NodeId,
    ) -> Result<(&mut Vec<String>, &mut Vec<(String, String)>, &mut bool)> {
        match &mut self.node_mut(id)?.kind {
            NodeKind::Element {
                classes,
                attrs,
                hidden,
                ..
            } => Ok((classes, attrs, hidden)),
            NodeKind::Text(_) => Err(ThemeError::NotAnElement(id)),
        }
    }

    /// Add `class` unless already present. Returns whether the list changed.
    pub fn add_class(&mut self, id: NodeId, class: &str) -> Result<bool> {
        let (classes, _, _) = self.element_mut(id)?;
        if classes.iter().any(|c| c == class) {
            return Ok(false);
        }
        classes.push(class.to_string());
        Ok(true)
    }

    pub fn remove_class(&mut self, id: NodeId, class: &str) -> Result<bool> {
        let (classes, _, _) = self.element_mut(id)?;
        let before = classes.len();
        classes.retain(|c| c != class);
        Ok(classes.len() != before)
    }

    pub fn set_attr(&mut self, id: NodeId, name: &str, value: &str) -> Result<()> {
        let (_, attrs, _) = self.element_mut(id)?;
        match attrs.iter_mut().find(|(key, _)| key == name) {
            Some(slot) => slot.1 = value.to_string(),
            None => attrs.push((name.to_string(), value.to_string())),
        }
        Ok(())
    }

    pub fn set_hidden(&mut self, id: NodeId, value: bool) -> Result<()> {
        let (_, _, hidden) = self.element_mut(id)?;
        *hidden = value;
        Ok(())
    }

    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.node(parent)?;
        self.detach(child)?;
        self.node_mut(child)?.parent = Some(parent);
        self.node_mut(parent)?.children.push(child);
        Ok(())
    }

    fn detach(&mut self, id: NodeId) -> Result<()> {
        if let Some(parent) = self.node(id)?.parent {
            self.node_mut(parent)?.children.retain(|c| *c != id);
            self.node_mut(id)?.parent = None;
        }
        Ok(())
    }

    /// Insert a new `tag.class` element in place of `id` and move `id` inside it.
    pub fn wrap(&mut self, id: NodeId, tag: &str, class: &str) -> Result<NodeId> {
        let parent = self.node(id)?.parent;
        let wrapper = self.create_element(tag, &[class]);
        if let Some(parent) = parent {
            let slot = self
                .node(parent)?
                .children
                .iter()
                .position(|c| *c == id)
                .ok_or(ThemeError::NodeNotFound(id))?;
            self.node_mut(parent)?.children[slot] = wrapper;
            self.node_mut(wrapper)?.parent = Some(parent);
        }
        self.node_mut(id)?.parent = Some(wrapper);
        self.node_mut(wrapper)?.children.push(id);
        Ok(wrapper)
    }

    /// Drop every child of `id` together with their subtrees.
    pub fn clear_children(&mut self, id: NodeId) -> Result<()> {
        let children = std::mem::take(&mut self.node_mut(id)?.children);
        for child in children {
            for node in self.descendants_inclusive(child) {
                self.release(node);
            }
        }
        Ok(())
    }

    fn release(&mut self, id: NodeId) {
        if let Some(slot) = self.slots.get_mut(id.index) {
            if slot.generation == id.generation && slot.node.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free.push(id.index);
            }
        }
    }

    /// Pre-order descendants of `id`, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = self.descendants_inclusive(id);
        if !out.is_empty() {
            out.remove(0);
        }
        out
    }

    fn descendants_inclusive(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        if !self.contains(id) {
            return out;
        }
        let mut stack = vec![id];
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut cursor = self.parent(id);
        while let Some(next) = cursor {
            out.push(next);
            cursor = self.parent(next);
        }
        out
    }

}
