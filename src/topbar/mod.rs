//! Top-bar template values and the alternate header derived from them.
//!
//! Option tokens are only emitted when a setting deviates from what the
//! top-bar script already assumes, keeping the generated `data-options`
//! attribute minimal.

use serde::Serialize;

use crate::config::{DEFAULT_BACK_TEXT, TopBarMode, TopBarSettings};

pub const SHOW_FOR_SMALL: &str = "show-for-small";
pub const HIDE_FOR_SMALL: &str = "hide-for-small";

/// Top-bar visibility plus the alternate header it implies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TopBarResolution {
    pub enabled: bool,
    pub show_on_small_only: bool,
    /// The title/logo header shown whenever the top bar is not on every breakpoint.
    pub alt_header_shown: bool,
    pub alt_header_classes: &'static str,
}

pub fn resolve_top_bar_mode(mode: TopBarMode) -> TopBarResolution {
    let show_on_small_only = mode == TopBarMode::SmallOnly;
    TopBarResolution {
        enabled: mode.is_enabled(),
        show_on_small_only,
        alt_header_shown: mode != TopBarMode::AllBreakpoints,
        alt_header_classes: if show_on_small_only { HIDE_FOR_SMALL } else { "" },
    }
}

/// Ordered `key:value` tokens for the settings that differ from their defaults.
pub fn build_top_bar_options(settings: &TopBarSettings) -> Vec<String> {
    let mut options = Vec::new();

    if !settings.custom_back_text {
        options.push("custom_back_text:false".to_string());
    }

    if !settings.back_text.is_empty() && settings.back_text != DEFAULT_BACK_TEXT {
        options.push(format!("back_text:'{}'", settings.back_text));
    }

    if !settings.is_hover {
        options.push("is_hover:false".to_string());
    }

    if !settings.scroll_top {
        options.push("scrolltop:false".to_string());
    }

    if settings.mobile_show_parent_link {
        options.push("mobile_show_parent_link:true".to_string());
    }

    options
}

/// Classes for the element wrapping the `<nav class="top-bar">`.
pub fn top_bar_classes(settings: &TopBarSettings) -> Vec<&'static str> {
    let mut classes = Vec::new();
    if settings.grid_contain {
        classes.push("contain-to-grid");
    }
    if settings.sticky {
        classes.push("sticky");
    }
    if settings.enabled == TopBarMode::SmallOnly {
        classes.push(SHOW_FOR_SMALL);
    }
    classes
}

/// Join option tokens into the attribute appended to the `<nav>` tag.
pub fn data_options_attribute(options: &[String]) -> String {
    format!(" data-options=\"{}\"", options.join("; "))
}

/// Everything the page template needs to render the top bar and alternate header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopBarView {
    pub resolution: TopBarResolution,
    /// Wrapper classes; `None` when the top bar is disabled.
    pub classes: Option<String>,
    pub menu_text: Option<String>,
    pub data_options: Option<String>,
}

impl TopBarView {
    pub fn build(settings: &TopBarSettings) -> Self {
        let resolution = resolve_top_bar_mode(settings.enabled);
        if !resolution.enabled {
            return Self {
                resolution,
                classes: None,
                menu_text: None,
                data_options: None,
            };
        }

        Self {
            resolution,
            classes: Some(top_bar_classes(settings).join(" ")),
            menu_text: Some(settings.menu_text.clone()),
            data_options: Some(data_options_attribute(&build_top_bar_options(settings))),
        }
    }

    /// Whether the `<nav>` needs its classed wrapper element.
    pub fn needs_wrapper(&self) -> bool {
        self.classes.as_deref().is_some_and(|c| !c.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_emit_no_options() {
        assert!(build_top_bar_options(&TopBarSettings::default()).is_empty());
    }

    #[test]
    fn custom_back_text_is_quoted() {
        let settings = TopBarSettings {
            back_text: "Return".to_string(),
            ..TopBarSettings::default()
        };
        assert_eq!(build_top_bar_options(&settings), vec!["back_text:'Return'"]);
    }

    #[test]
    fn empty_back_text_is_ignored() {
        let settings = TopBarSettings {
            back_text: String::new(),
            ..TopBarSettings::default()
        };
        assert!(build_top_bar_options(&settings).is_empty());
    }

    #[test]
    fn every_deviation_keeps_fixed_order() {
        let settings = TopBarSettings {
            custom_back_text: false,
            back_text: "Up".to_string(),
            is_hover: false,
            scroll_top: false,
            mobile_show_parent_link: true,
            ..TopBarSettings::default()
        };
        assert_eq!(
            build_top_bar_options(&settings),
            vec![
                "custom_back_text:false",
                "back_text:'Up'",
                "is_hover:false",
                "scrolltop:false",
                "mobile_show_parent_link:true",
            ]
        );
    }

    #[test]
    fn small_only_shows_alt_header_hidden_on_small() {
        let res = resolve_top_bar_mode(TopBarMode::SmallOnly);
        assert!(res.enabled);
        assert!(res.show_on_small_only);
        assert!(res.alt_header_shown);
        assert_eq!(res.alt_header_classes, "hide-for-small");
    }

    #[test]
    fn all_breakpoints_suppresses_alt_header() {
        let res = resolve_top_bar_mode(TopBarMode::AllBreakpoints);
        assert!(res.enabled);
        assert!(!res.show_on_small_only);
        assert!(!res.alt_header_shown);
    }

    #[test]
    fn disabled_top_bar_shows_plain_alt_header() {
        let res = resolve_top_bar_mode(TopBarMode::Disabled);
        assert!(!res.enabled);
        assert!(res.alt_header_shown);
        assert_eq!(res.alt_header_classes, "");
    }

    #[test]
    fn view_collects_wrapper_classes_and_attribute() {
        let settings = TopBarSettings {
            enabled: TopBarMode::SmallOnly,
            grid_contain: true,
            sticky: true,
            is_hover: false,
            ..TopBarSettings::default()
        };
        let view = TopBarView::build(&settings);
        assert_eq!(
            view.classes.as_deref(),
            Some("contain-to-grid sticky show-for-small")
        );
        assert_eq!(
            view.data_options.as_deref(),
            Some(" data-options=\"is_hover:false\"")
        );
        assert_eq!(view.menu_text.as_deref(), Some("Menu"));
        assert!(view.needs_wrapper());
    }

    #[test]
    fn disabled_view_has_no_top_bar_values() {
        let view = TopBarView::build(&TopBarSettings::default());
        assert!(view.classes.is_none());
        assert!(view.data_options.is_none());
        assert!(!view.needs_wrapper());
    }
}
