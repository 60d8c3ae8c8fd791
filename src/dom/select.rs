//! Tiny selector support: `tag`, `.class`, `tag.class.other` compounds joined
//! by descendant combinators. That covers every lookup the behaviors make.

use super::tree::{DomTree, NodeId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selector {
    pub tag: Option<String>,
    pub classes: Vec<String>,
}

impl Selector {
    pub fn parse(compound: &str) -> Self {
        let mut parts = compound.split('.');
        let tag = parts
            .next()
            .filter(|t| !t.is_empty() && *t != "*")
            .map(str::to_string);
        let classes = parts
            .filter(|c| !c.is_empty())
            .map(str::to_string)
            .collect();
        Self { tag, classes }
    }

    pub fn class(class: &str) -> Self {
        Self {
            tag: None,
            classes: vec![class.to_string()],
        }
    }

    pub fn tag_class(tag: &str, class: &str) -> Self {
        Self {
            tag: Some(tag.to_string()),
            classes: vec![class.to_string()],
        }
    }

    pub fn matches(&self, dom: &DomTree, id: NodeId) -> bool {
        let Some(tag) = dom.tag(id) else {
            return false;
        };
        if self.tag.as_deref().is_some_and(|wanted| wanted != tag) {
            return false;
        }
        self.classes.iter().all(|class| dom.has_class(id, class))
    }
}

/// Compound selectors separated by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectorChain {
    parts: Vec<Selector>,
}

impl SelectorChain {
    pub fn parse(selector: &str) -> Self {
        Self {
            parts: selector.split_whitespace().map(Selector::parse).collect(),
        }
    }

    pub fn from_parts(parts: Vec<Selector>) -> Self {
        Self { parts }
    }

    pub fn then(mut self, part: Selector) -> Self {
        self.parts.push(part);
        self
    }

    pub fn matches(&self, dom: &DomTree, id: NodeId) -> bool {
        let Some((last, rest)) = self.parts.split_last() else {
            return false;
        };
        if !last.matches(dom, id) {
            return false;
        }
        let mut ancestors = dom.ancestors(id).into_iter();
        rest.iter()
            .rev()
            .all(|part| ancestors.by_ref().any(|ancestor| part.matches(dom, ancestor)))
    }

    /// Matching descendants of `scope` in document order.
    pub fn select(&self, dom: &DomTree, scope: NodeId) -> Vec<NodeId> {
        dom.descendants(scope)
            .into_iter()
            .filter(|id| self.matches(dom, *id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_compound() {
        let sel = Selector::parse("ul.menu.nested");
        assert_eq!(sel.tag.as_deref(), Some("ul"));
        assert_eq!(sel.classes, vec!["menu", "nested"]);
        assert_eq!(Selector::parse(".sidebar-first").tag, None);
    }

    #[test]
    fn descendant_chain_requires_ancestors_in_order() {
        let mut dom = DomTree::new();
        let aside = dom.create_element("aside", &["sidebar-first"]);
        let ul = dom.create_element("ul", &["menu"]);
        let li = dom.create_element("li", &[]);
        let a = dom.create_element("a", &[]);
        let stray = dom.create_element("a", &[]);
        dom.append_child(dom.root(), aside).unwrap();
        dom.append_child(aside, ul).unwrap();
        dom.append_child(ul, li).unwrap();
        dom.append_child(li, a).unwrap();
        dom.append_child(dom.root(), stray).unwrap();

        let chain = SelectorChain::parse(".sidebar-first ul.menu li a");
        assert_eq!(chain.select(&dom, dom.root()), vec![a]);

        let reversed = SelectorChain::parse("ul.menu .sidebar-first a");
        assert!(reversed.select(&dom, dom.root()).is_empty());
    }
}
