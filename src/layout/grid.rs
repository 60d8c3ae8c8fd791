//! Grid-span classes for the main content row.
//!
//! The theme uses a 12-column responsive grid with a fixed two-sidebar
//! template: each sidebar reserves 3 columns at the `medium` breakpoint and
//! push/pull pairs move the main column visually ahead of the first sidebar
//! while markup keeps source order.
//!
//! # Example
//! ```
//! use uylong_layout::layout::grid::resolve_grid_classes;
//!
//! let classes = resolve_grid_classes(true, false);
//! assert_eq!(classes.main, "medium-9 medium-push-3");
//! assert_eq!(classes.sidebar_first, "medium-3 medium-pull-9");
//! assert_eq!(classes.sidebar_second, "");
//! ```

use serde::Serialize;

use crate::regions::{RegionId, RegionPresence};

/// The four mutually exclusive sidebar arrangements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarLayout {
    Both,
    SecondOnly,
    FirstOnly,
    Neither,
}

impl SidebarLayout {
    pub fn from_flags(has_left: bool, has_right: bool) -> Self {
        match (has_left, has_right) {
            (true, true) => SidebarLayout::Both,
            (false, true) => SidebarLayout::SecondOnly,
            (true, false) => SidebarLayout::FirstOnly,
            (false, false) => SidebarLayout::Neither,
        }
    }

    pub fn from_presence(presence: &RegionPresence) -> Self {
        Self::from_flags(
            presence.has(RegionId::SidebarFirst),
            presence.has(RegionId::SidebarSecond),
        )
    }

    pub fn classes(self) -> LayoutClasses {
        let (main, sidebar_first, sidebar_second) = match self {
            SidebarLayout::Both => ("medium-6 medium-push-3", "medium-3 medium-pull-6", "medium-3"),
            SidebarLayout::SecondOnly => ("medium-9", "", "medium-3"),
            SidebarLayout::FirstOnly => ("medium-9 medium-push-3", "medium-3 medium-pull-9", ""),
            SidebarLayout::Neither => ("", "", ""),
        };
        LayoutClasses {
            main,
            sidebar_first,
            sidebar_second,
        }
    }
}

/// Space-joined class strings for the main column and both sidebars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LayoutClasses {
    pub main: &'static str,
    pub sidebar_first: &'static str,
    pub sidebar_second: &'static str,
}

/// Map sidebar presence to the grid classes of the main row.
pub fn resolve_grid_classes(has_left_sidebar: bool, has_right_sidebar: bool) -> LayoutClasses {
    SidebarLayout::from_flags(has_left_sidebar, has_right_sidebar).classes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sidebars_split_six_three_three() {
        let classes = resolve_grid_classes(true, true);
        assert_eq!(classes.main, "medium-6 medium-push-3");
        assert_eq!(classes.sidebar_first, "medium-3 medium-pull-6");
        assert_eq!(classes.sidebar_second, "medium-3");
    }

    #[test]
    fn right_sidebar_only() {
        let classes = resolve_grid_classes(false, true);
        assert_eq!(classes.main, "medium-9");
        assert_eq!(classes.sidebar_first, "");
        assert_eq!(classes.sidebar_second, "medium-3");
    }

    #[test]
    fn left_sidebar_only() {
        let classes = resolve_grid_classes(true, false);
        assert_eq!(classes.main, "medium-9 medium-push-3");
        assert_eq!(classes.sidebar_first, "medium-3 medium-pull-9");
        assert_eq!(classes.sidebar_second, "");
    }

    #[test]
    fn no_sidebars_leaves_every_class_empty() {
        let classes = resolve_grid_classes(false, false);
        assert_eq!(classes.main, "");
        assert_eq!(classes.sidebar_first, "");
        assert_eq!(classes.sidebar_second, "");
    }

    #[test]
    fn presence_drives_the_same_table() {
        let presence = RegionPresence::new()
            .with(RegionId::SidebarSecond)
            .with(RegionId::Footer);
        let layout = SidebarLayout::from_presence(&presence);
        assert_eq!(layout, SidebarLayout::SecondOnly);
        assert_eq!(layout.classes(), resolve_grid_classes(false, true));
    }
}
