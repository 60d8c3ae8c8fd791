use serde_json::json;

use crate::config::MenuSelectors;
use crate::dom::{DomTree, NodeId, Selector, SelectorChain};
use crate::logging::{LogLevel, json_kv};
use crate::Result;

use super::hover::attach_hover_highlight;
use super::{ACTIVE_CLASS, ACTIVE_TRAIL_CLASS, AttachContext, ThemeBehavior};

/// Outcome of one visibility pass over the sidebar tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeVisibility {
    /// Links wrapped during this pass; zero on a repeated pass.
    pub wrapped: usize,
    pub shown: Vec<NodeId>,
    pub hidden: Vec<NodeId>,
}

fn sidebar_menu(selectors: &MenuSelectors) -> SelectorChain {
    SelectorChain::from_parts(vec![
        Selector::class(&selectors.sidebar_region),
        Selector::class(&selectors.sidebar_menu_block),
        Selector::tag_class("ul", &selectors.menu_list),
    ])
}

fn is_flagged(dom: &DomTree, item: NodeId) -> bool {
    dom.has_class(item, ACTIVE_CLASS) || dom.has_class(item, ACTIVE_TRAIL_CLASS)
}

/// Wrap every sidebar menu link and collapse the tree down to the active trail.
///
/// A nested list stays visible when its owning item is `active` or
/// `active-trail`, or when any item below it is, so the full path to a deep
/// trail entry is expanded. Every other nested list is hidden. The result is
/// computed from classes alone, so repeated passes converge.
pub fn initialize_tree_visibility(
    dom: &mut DomTree,
    scope: NodeId,
    selectors: &MenuSelectors,
) -> Result<TreeVisibility> {
    let items_chain = sidebar_menu(selectors).then(Selector::parse("li"));
    let links = items_chain.clone().then(Selector::parse("a")).select(dom, scope);

    let mut report = TreeVisibility::default();
    for link in links {
        let already_wrapped = dom
            .parent(link)
            .is_some_and(|parent| dom.has_class(parent, &selectors.link_wrapper));
        if !already_wrapped {
            dom.wrap(link, "div", &selectors.link_wrapper)?;
            report.wrapped += 1;
        }
    }

    let nested = items_chain
        .then(Selector::tag_class("ul", &selectors.menu_list))
        .select(dom, scope);
    for list in nested {
        let Some(owner) = dom
            .ancestors(list)
            .into_iter()
            .find(|node| dom.tag(*node) == Some("li"))
        else {
            continue;
        };
        let expand = is_flagged(dom, owner)
            || dom
                .descendants(owner)
                .into_iter()
                .any(|node| dom.tag(node) == Some("li") && is_flagged(dom, node));
        dom.set_hidden(list, !expand)?;
        if expand {
            report.shown.push(list);
        } else {
            report.hidden.push(list);
        }
    }

    Ok(report)
}

/// Collapses the sidebar tree, then wires hover highlighting on the primary menu.
#[derive(Debug, Default)]
pub struct MenuTreeStateController {
    attachments: u64,
}

impl MenuTreeStateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attachments(&self) -> u64 {
        self.attachments
    }
}

impl ThemeBehavior for MenuTreeStateController {
    fn name(&self) -> &str {
        "menu_tree_state"
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) -> Result<()> {
        let settings = ctx.settings;
        let selectors = &settings.selectors;

        // Visibility first so no expanded list is ever reachable by hover.
        let visibility = initialize_tree_visibility(ctx.dom, ctx.scope, selectors)?;
        let bound = attach_hover_highlight(ctx.dom, ctx.hover, ctx.scope, selectors)?;
        self.attachments += 1;

        ctx.log(
            LogLevel::Debug,
            "menu_tree_attached",
            [
                json_kv("scope", json!(ctx.scope.index())),
                json_kv("wrapped", json!(visibility.wrapped)),
                json_kv("shown", json!(visibility.shown.len())),
                json_kv("hidden", json!(visibility.hidden.len())),
                json_kv("hover_links", json!(bound)),
            ],
        );
        Ok(())
    }
}
