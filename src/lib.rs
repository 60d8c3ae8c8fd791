//! Layout resolution and menu-tree behaviors for the uylong page theme.
//!
//! Two halves share this crate. The resolver side turns region presence and
//! theme settings into grid classes, top-bar decisions and section flags for
//! the page template. The behavior side mirrors the rendered document and
//! drives the sidebar menu's collapsed state plus hover highlighting of the
//! primary navigation, re-attaching whenever content is replaced.

pub mod behaviors;
pub mod config;
pub mod dom;
pub mod error;
pub mod layout;
pub mod logging;
pub mod menu;
pub mod metrics;
pub mod regions;
pub mod render;
pub mod runtime;
pub mod topbar;

pub use behaviors::{
    AttachContext, BehaviorBundle, HoverBindings, MenuItemState, MenuTreeStateController,
    PointerEvent, PointerKind, ThemeBehavior, TreeVisibility, attach_hover_highlight,
    initialize_tree_visibility, theme_bundle,
};
pub use config::{MenuSelectors, ThemeSettings, TopBarMode, TopBarSettings};
pub use dom::{DomTree, NodeId, Selector, SelectorChain};
pub use error::{Result, ThemeError};
pub use layout::{LayoutClasses, PageLayout, SidebarLayout, resolve_grid_classes};
pub use logging::{LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult};
pub use menu::{CurrentPage, MenuNode};
pub use metrics::{MetricSnapshot, RuntimeMetrics};
pub use regions::{RegionId, RegionPresence, RegionRegistry};
pub use render::{
    MarkupRenderer, MenuMount, RendererSettings, alt_main_menu, alt_secondary_menu, mount_menu,
    top_bar_menu, top_bar_secondary_menu,
};
pub use runtime::{PageRuntime, RuntimeConfig};
pub use topbar::{
    TopBarResolution, TopBarView, build_top_bar_options, data_options_attribute,
    resolve_top_bar_mode, top_bar_classes,
};
