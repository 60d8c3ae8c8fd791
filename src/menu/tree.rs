use serde::{Deserialize, Serialize};

/// One menu entry and its ordered children.
///
/// Trees are owned by the host's menu builder; this crate only reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuNode {
    pub label: String,
    pub url: String,
    pub is_active: bool,
    pub is_on_active_trail: bool,
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    pub fn leaf(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_children(mut self, children: Vec<MenuNode>) -> Self {
        self.children = children;
        self
    }

    pub fn active(mut self) -> Self {
        self.is_active = true;
        self
    }

    pub fn on_trail(mut self) -> Self {
        self.is_on_active_trail = true;
        self
    }

    pub fn is_flagged(&self) -> bool {
        self.is_active || self.is_on_active_trail
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this item's sub-list stays expanded: the item itself is
    /// flagged, or some descendant is.
    pub fn should_expand(&self) -> bool {
        self.is_flagged() || self.children.iter().any(MenuNode::should_expand)
    }

    /// Labels from a root of `forest` down to the first active item, if any.
    pub fn active_path(forest: &[MenuNode]) -> Option<Vec<&str>> {
        for node in forest {
            if node.is_active {
                return Some(vec![node.label.as_str()]);
            }
            if let Some(mut rest) = MenuNode::active_path(&node.children) {
                rest.insert(0, node.label.as_str());
                return Some(rest);
            }
        }
        None
    }
}

/// The page being viewed, used to mark links pointing at it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CurrentPage {
    path: String,
}

impl CurrentPage {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: normalize(&path.into()).to_string(),
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn matches(&self, url: &str) -> bool {
        !self.path.is_empty() && normalize(url) == self.path
    }
}

fn normalize(url: &str) -> &str {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.is_empty() && url.starts_with('/') {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> Vec<MenuNode> {
        vec![
            MenuNode::leaf("About", "/about").with_children(vec![
                MenuNode::leaf("Team", "/about/team").with_children(vec![
                    MenuNode::leaf("Board", "/about/team/board").on_trail(),
                ]),
                MenuNode::leaf("History", "/about/history"),
            ]),
            MenuNode::leaf("News", "/news")
                .with_children(vec![MenuNode::leaf("Archive", "/news/archive")]),
        ]
    }

    #[test]
    fn ancestors_of_a_flagged_node_expand() {
        let forest = tree();
        assert!(forest[0].should_expand());
        assert!(forest[0].children[0].should_expand());
        assert!(!forest[0].children[1].should_expand());
        assert!(!forest[1].should_expand());
    }

    #[test]
    fn active_path_lists_labels_from_root() {
        let mut forest = tree();
        forest[0].children[0].children[0].is_active = true;
        assert_eq!(
            MenuNode::active_path(&forest),
            Some(vec!["About", "Team", "Board"])
        );
        assert_eq!(MenuNode::active_path(&tree()), None);
    }

    #[test]
    fn current_page_ignores_trailing_slashes() {
        let current = CurrentPage::new("/about/team/");
        assert!(current.matches("/about/team"));
        assert!(!current.matches("/about"));
        assert!(CurrentPage::new("/").matches("/"));
        assert!(!CurrentPage::default().matches(""));
    }

    #[test]
    fn deserializes_with_missing_flags() {
        let node: MenuNode =
            serde_json::from_str(r#"{"label": "Home", "url": "/", "children": [{"label": "A"}]}"#)
                .unwrap();
        assert!(!node.is_active);
        assert_eq!(node.children[0].label, "A");
        assert_eq!(node.children[0].url, "");
    }
}
