//! Theme settings supplied by the host pipeline.
//!
//! Every field is optional in the JSON form; absent values fall back to the
//! defaults the top-bar script itself assumes, so an empty object is a valid
//! configuration.

use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, ThemeError};

/// Where the responsive top bar renders.
///
/// Hosts historically stored this as `0`, `1` or `2`, either as integers or
/// as their string form; both (and plain booleans) are still accepted when
/// deserialising.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "RawTopBarMode")]
pub enum TopBarMode {
    #[default]
    Disabled,
    AllBreakpoints,
    SmallOnly,
}

impl TopBarMode {
    pub fn is_enabled(self) -> bool {
        self != TopBarMode::Disabled
    }
}

impl fmt::Display for TopBarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TopBarMode::Disabled => "disabled",
            TopBarMode::AllBreakpoints => "all",
            TopBarMode::SmallOnly => "small-only",
        };
        f.write_str(name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTopBarMode {
    Flag(bool),
    Level(u64),
    Name(String),
}

impl TryFrom<RawTopBarMode> for TopBarMode {
    type Error = ThemeError;

    fn try_from(raw: RawTopBarMode) -> Result<Self> {
        match raw {
            RawTopBarMode::Flag(false) | RawTopBarMode::Level(0) => Ok(TopBarMode::Disabled),
            RawTopBarMode::Flag(true) | RawTopBarMode::Level(1) => Ok(TopBarMode::AllBreakpoints),
            RawTopBarMode::Level(2) => Ok(TopBarMode::SmallOnly),
            RawTopBarMode::Level(other) => Err(invalid("top_bar.enabled", other)),
            RawTopBarMode::Name(name) => match name.trim() {
                "0" | "disabled" | "off" => Ok(TopBarMode::Disabled),
                "1" | "all" | "enabled" => Ok(TopBarMode::AllBreakpoints),
                "2" | "small-only" | "mobile-only" => Ok(TopBarMode::SmallOnly),
                _ => Err(invalid("top_bar.enabled", &name)),
            },
        }
    }
}

fn invalid(key: &str, value: impl fmt::Display) -> ThemeError {
    ThemeError::InvalidSetting {
        key: key.to_string(),
        reason: format!("unrecognised value `{value}`"),
    }
}

pub const DEFAULT_BACK_TEXT: &str = "Back";
pub const DEFAULT_MENU_TEXT: &str = "Menu";

/// Top-bar options. Strings are expected to be escaped by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TopBarSettings {
    pub enabled: TopBarMode,
    pub grid_contain: bool,
    pub sticky: bool,
    pub custom_back_text: bool,
    pub back_text: String,
    pub is_hover: bool,
    pub scroll_top: bool,
    pub mobile_show_parent_link: bool,
    pub menu_text: String,
}

impl Default for TopBarSettings {
    fn default() -> Self {
        Self {
            enabled: TopBarMode::Disabled,
            grid_contain: false,
            sticky: false,
            custom_back_text: true,
            back_text: DEFAULT_BACK_TEXT.to_string(),
            is_hover: true,
            scroll_top: true,
            mobile_show_parent_link: false,
            menu_text: DEFAULT_MENU_TEXT.to_string(),
        }
    }
}

/// Class names the client behaviors match against in the rendered markup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuSelectors {
    /// Block holding the hover-highlighted primary navigation.
    pub primary_block: String,
    /// Sidebar region containing the collapsible tree.
    pub sidebar_region: String,
    /// Menu block inside the sidebar region.
    pub sidebar_menu_block: String,
    pub menu_list: String,
    pub link_wrapper: String,
}

impl Default for MenuSelectors {
    fn default() -> Self {
        Self {
            primary_block: "block-menu-menu-primary-menu".to_string(),
            sidebar_region: "sidebar-first".to_string(),
            sidebar_menu_block: "menu-name-main-menu".to_string(),
            menu_list: "menu".to_string(),
            link_wrapper: "parent-item".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub top_bar: TopBarSettings,
    /// Show status messages in a reveal modal instead of inline.
    pub messages_modal: bool,
    pub selectors: MenuSelectors,
}

impl ThemeSettings {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}
