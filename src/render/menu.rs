use crate::dom::{DomTree, NodeId};
use crate::error::Result;
use crate::menu::{CurrentPage, MenuNode};

use super::core::MarkupRenderer;

/// Nodes created by [`mount_menu`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuMount {
    /// The outermost `<ul>`.
    pub list: NodeId,
    /// Every `<li>` in document order.
    pub items: Vec<NodeId>,
}

/// Mirror a menu forest as nested `ul.<list_class> > li > a` markup under `parent`.
///
/// Items get `first`/`last`, `leaf`/`expanded`, `active-trail` and `active`
/// classes; links pointing at the current page (or flagged active) carry
/// `active`, the marker the hover behavior reconciles against.
pub fn mount_menu(
    dom: &mut DomTree,
    parent: NodeId,
    forest: &[MenuNode],
    current: &CurrentPage,
    list_class: &str,
) -> Result<MenuMount> {
    let mut items = Vec::new();
    let list = mount_list(dom, parent, forest, current, list_class, &mut items)?;
    Ok(MenuMount { list, items })
}

fn mount_list(
    dom: &mut DomTree,
    parent: NodeId,
    forest: &[MenuNode],
    current: &CurrentPage,
    list_class: &str,
    items: &mut Vec<NodeId>,
) -> Result<NodeId> {
    let list = dom.create_element("ul", &[list_class]);
    dom.append_child(parent, list)?;

    let last = forest.len().saturating_sub(1);
    for (idx, node) in forest.iter().enumerate() {
        let li = dom.create_element("li", &[]);
        dom.append_child(list, li)?;
        items.push(li);

        if idx == 0 {
            dom.add_class(li, "first")?;
        }
        if idx == last {
            dom.add_class(li, "last")?;
        }
        dom.add_class(li, if node.has_children() { "expanded" } else { "leaf" })?;
        if node.is_on_active_trail {
            dom.add_class(li, "active-trail")?;
        }
        if node.is_active {
            dom.add_class(li, "active")?;
        }

        let link = dom.create_element("a", &[]);
        dom.set_attr(link, "href", &node.url)?;
        if node.is_active || current.matches(&node.url) {
            dom.add_class(link, "active")?;
        }
        if node.is_on_active_trail {
            dom.add_class(link, "active-trail")?;
        }
        let label = dom.create_text(&node.label);
        dom.append_child(link, label)?;
        dom.append_child(li, link)?;

        if node.has_children() {
            mount_list(dom, li, &node.children, current, list_class, items)?;
        }
    }

    Ok(list)
}

/// The top-bar main menu: `<ul id="main-menu" class="main-nav left">` with
/// `has-dropdown` items and `dropdown` sub-lists.
pub fn top_bar_menu(forest: &[MenuNode], current: &CurrentPage) -> Result<String> {
    let mut dom = DomTree::new();
    let list = dom.create_element("ul", &["main-nav", "left"]);
    dom.set_attr(list, "id", "main-menu")?;
    dom.append_child(dom.root(), list)?;
    mount_dropdowns(&mut dom, list, forest, current)?;
    MarkupRenderer::with_default().outer_html(&dom, list)
}

fn mount_dropdowns(
    dom: &mut DomTree,
    list: NodeId,
    forest: &[MenuNode],
    current: &CurrentPage,
) -> Result<()> {
    for node in forest {
        let li = dom.create_element("li", &[]);
        dom.append_child(list, li)?;
        if node.is_flagged() || current.matches(&node.url) {
            dom.add_class(li, "active")?;
        }

        let link = dom.create_element("a", &[]);
        dom.set_attr(link, "href", &node.url)?;
        let label = dom.create_text(&node.label);
        dom.append_child(link, label)?;
        dom.append_child(li, link)?;

        if node.has_children() {
            dom.add_class(li, "has-dropdown")?;
            let dropdown = dom.create_element("ul", &["dropdown"]);
            dom.append_child(li, dropdown)?;
            mount_dropdowns(dom, dropdown, &node.children, current)?;
        }
    }
    Ok(())
}

/// Top-bar secondary menu, `<ul id="secondary-menu" class="secondary link-list">`.
/// `None` when there is nothing to show.
pub fn top_bar_secondary_menu(forest: &[MenuNode], current: &CurrentPage) -> Result<Option<String>> {
    if forest.is_empty() {
        return Ok(None);
    }
    let mut dom = DomTree::new();
    let list = dom.create_element("ul", &["secondary", "link-list"]);
    dom.set_attr(list, "id", "secondary-menu")?;
    dom.append_child(dom.root(), list)?;
    mount_dropdowns(&mut dom, list, forest, current)?;
    MarkupRenderer::with_default().outer_html(&dom, list).map(Some)
}

/// Main menu links for the alternate header.
pub fn alt_main_menu(forest: &[MenuNode], current: &CurrentPage) -> Result<Option<String>> {
    link_list(
        forest,
        current,
        "main-menu-links",
        &["links", "inline-list", "clearfix"],
        "Main menu",
    )
}

/// Secondary menu links for the alternate header.
pub fn alt_secondary_menu(forest: &[MenuNode], current: &CurrentPage) -> Result<Option<String>> {
    link_list(
        forest,
        current,
        "secondary-menu-links",
        &["links", "clearfix"],
        "Secondary menu",
    )
}

// Flat top-level links preceded by a visually hidden heading.
fn link_list(
    forest: &[MenuNode],
    current: &CurrentPage,
    id: &str,
    classes: &[&str],
    heading: &str,
) -> Result<Option<String>> {
    if forest.is_empty() {
        return Ok(None);
    }
    let mut dom = DomTree::new();
    let root = dom.root();
    let title = dom.create_element("h2", &["element-invisible"]);
    let label = dom.create_text(heading);
    dom.append_child(title, label)?;
    dom.append_child(root, title)?;

    let list = dom.create_element("ul", classes);
    dom.set_attr(list, "id", id)?;
    dom.append_child(root, list)?;

    let last = forest.len() - 1;
    for (idx, node) in forest.iter().enumerate() {
        let li = dom.create_element("li", &[]);
        dom.append_child(list, li)?;
        if idx == 0 {
            dom.add_class(li, "first")?;
        }
        if idx == last {
            dom.add_class(li, "last")?;
        }
        let link = dom.create_element("a", &[]);
        dom.set_attr(link, "href", &node.url)?;
        if node.is_active || current.matches(&node.url) {
            dom.add_class(li, "active")?;
            dom.add_class(link, "active")?;
        }
        let text = dom.create_text(&node.label);
        dom.append_child(link, text)?;
        dom.append_child(li, link)?;
    }

    MarkupRenderer::with_default().inner_html(&dom, root).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forest() -> Vec<MenuNode> {
        vec![
            MenuNode::leaf("Home", "/"),
            MenuNode::leaf("About", "/about")
                .on_trail()
                .with_children(vec![MenuNode::leaf("Team", "/about/team").active()]),
        ]
    }

    #[test]
    fn mount_marks_position_and_trail() {
        let mut dom = DomTree::new();
        let root = dom.root();
        let mount = mount_menu(&mut dom, root, &forest(), &CurrentPage::default(), "menu").unwrap();
        assert_eq!(mount.items.len(), 3);

        let home = mount.items[0];
        let about = mount.items[1];
        let team = mount.items[2];
        assert!(dom.has_class(home, "first") && dom.has_class(home, "leaf"));
        assert!(dom.has_class(about, "last") && dom.has_class(about, "expanded"));
        assert!(dom.has_class(about, "active-trail"));
        assert!(dom.has_class(team, "active"));
        assert!(dom.has_class(dom.children(team)[0], "active"));
    }

    #[test]
    fn current_page_marks_link_only() {
        let mut dom = DomTree::new();
        let root = dom.root();
        let mount = mount_menu(&mut dom, root, &forest(), &CurrentPage::new("/"), "menu").unwrap();
        let home = mount.items[0];
        assert!(!dom.has_class(home, "active"));
        assert!(dom.has_class(dom.children(home)[0], "active"));
    }

    #[test]
    fn top_bar_menu_uses_dropdown_markup() {
        let html = top_bar_menu(&forest(), &CurrentPage::default()).unwrap();
        assert_eq!(
            html,
            concat!(
                "<ul id=\"main-menu\" class=\"main-nav left\">",
                "<li><a href=\"/\">Home</a></li>",
                "<li class=\"active has-dropdown\"><a href=\"/about\">About</a>",
                "<ul class=\"dropdown\"><li class=\"active\"><a href=\"/about/team\">Team</a></li></ul>",
                "</li></ul>"
            )
        );
    }

    #[test]
    fn secondary_menus_are_absent_without_links() {
        let current = CurrentPage::default();
        assert_eq!(top_bar_secondary_menu(&[], &current).unwrap(), None);
        assert_eq!(alt_main_menu(&[], &current).unwrap(), None);
        assert_eq!(alt_secondary_menu(&[], &current).unwrap(), None);
    }

    #[test]
    fn top_bar_secondary_menu_markup() {
        let links = vec![MenuNode::leaf("Account", "/user")];
        let html = top_bar_secondary_menu(&links, &CurrentPage::new("/user"))
            .unwrap()
            .unwrap();
        assert_eq!(
            html,
            "<ul id=\"secondary-menu\" class=\"secondary link-list\"><li class=\"active\"><a href=\"/user\">Account</a></li></ul>"
        );
    }

    #[test]
    fn alternate_header_menus_carry_heading_and_ids() {
        let links = vec![MenuNode::leaf("Home", "/"), MenuNode::leaf("Blog", "/blog")];
        let main = alt_main_menu(&links, &CurrentPage::new("/blog")).unwrap().unwrap();
        assert_eq!(
            main,
            concat!(
                "<h2 class=\"element-invisible\">Main menu</h2>",
                "<ul id=\"main-menu-links\" class=\"links inline-list clearfix\">",
                "<li class=\"first\"><a href=\"/\">Home</a></li>",
                "<li class=\"last active\"><a href=\"/blog\" class=\"active\">Blog</a></li>",
                "</ul>"
            )
        );

        let secondary = alt_secondary_menu(&links[..1], &CurrentPage::default())
            .unwrap()
            .unwrap();
        assert!(secondary.starts_with("<h2 class=\"element-invisible\">Secondary menu</h2>"));
        assert!(secondary.contains("<ul id=\"secondary-menu-links\" class=\"links clearfix\">"));
        assert!(secondary.contains("<li class=\"first last\">"));
    }
}
