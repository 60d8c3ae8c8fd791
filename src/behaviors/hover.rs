use std::collections::HashMap;

use crate::config::MenuSelectors;
use crate::dom::{DomTree, NodeId, Selector, SelectorChain};
use crate::Result;

use super::{ACTIVE_CLASS, HOVER_CLASS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Enter,
    Leave,
}

/// A pointer transition on `target` (a bound link or anything inside it).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub target: NodeId,
    pub kind: PointerKind,
}

impl PointerEvent {
    pub fn enter(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerKind::Enter,
        }
    }

    pub fn leave(target: NodeId) -> Self {
        Self {
            target,
            kind: PointerKind::Leave,
        }
    }
}

/// The two independent class bits of a primary-navigation item.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuItemState {
    pub active: bool,
    pub hovering: bool,
}

impl MenuItemState {
    pub fn read(dom: &DomTree, item: NodeId) -> Self {
        Self {
            active: dom.has_class(item, ACTIVE_CLASS),
            hovering: dom.has_class(item, HOVER_CLASS),
        }
    }
}

/// Registered hover handlers, keyed by link. Each link drives exactly one item.
#[derive(Debug, Default, Clone)]
pub struct HoverBindings {
    items_by_link: HashMap<NodeId, NodeId>,
}

impl HoverBindings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items_by_link.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items_by_link.is_empty()
    }

    pub fn item_for(&self, link: NodeId) -> Option<NodeId> {
        self.items_by_link.get(&link).copied()
    }

    /// Returns `false` if `link` was already bound.
    pub fn bind(&mut self, link: NodeId, item: NodeId) -> bool {
        self.items_by_link.insert(link, item).is_none()
    }

    /// Forget bindings whose link or item no longer exists.
    pub fn prune(&mut self, dom: &DomTree) -> usize {
        let before = self.items_by_link.len();
        self.items_by_link
            .retain(|link, item| dom.contains(*link) && dom.contains(*item));
        before - self.items_by_link.len()
    }

    /// Route a pointer event to the item of the nearest bound link.
    ///
    /// Only the hover class changes; `active` is never touched here. Returns
    /// whether any binding handled the event.
    pub fn dispatch(&self, dom: &mut DomTree, event: PointerEvent) -> Result<bool> {
        let bound = std::iter::once(event.target)
            .chain(dom.ancestors(event.target))
            .find_map(|node| self.item_for(node));
        let Some(item) = bound else {
            return Ok(false);
        };
        match event.kind {
            PointerKind::Enter => dom.add_class(item, HOVER_CLASS)?,
            PointerKind::Leave => dom.remove_class(item, HOVER_CLASS)?,
        };
        Ok(true)
    }
}

/// Bind hover highlighting on every primary-navigation link inside `scope`
/// and reconcile each item's persistent `active` class with its link.
///
/// Returns the number of links examined. Re-running over the same links keeps
/// a single binding per link.
pub fn attach_hover_highlight(
    dom: &mut DomTree,
    bindings: &mut HoverBindings,
    scope: NodeId,
    selectors: &MenuSelectors,
) -> Result<usize> {
    bindings.prune(dom);

    let links = SelectorChain::from_parts(vec![
        Selector::class(&selectors.primary_block),
        Selector::tag_class("ul", &selectors.menu_list),
        Selector::parse("li"),
        Selector::parse("a"),
    ])
    .select(dom, scope);

    for link in &links {
        let Some(item) = dom.parent(*link) else {
            continue;
        };
        bindings.bind(*link, item);
        if dom.has_class(*link, ACTIVE_CLASS) {
            dom.add_class(item, ACTIVE_CLASS)?;
        } else {
            dom.remove_class(item, ACTIVE_CLASS)?;
        }
    }

    Ok(links.len())
}
