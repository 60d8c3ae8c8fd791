//! Client behaviors attached to the document mirror.
//!
//! A behavior is attached once per page view and again whenever part of the
//! page is replaced. Attaching must be idempotent: running it twice over the
//! same content leaves the same classes and visibility behind.

use serde_json::Value;

use crate::config::ThemeSettings;
use crate::dom::{DomTree, NodeId};
use crate::logging::{BEHAVIOR_TARGET, LogLevel, Logger, event_with_fields};
use crate::Result;

pub mod hover;
pub mod menu_tree;

pub use hover::{HoverBindings, MenuItemState, PointerEvent, PointerKind, attach_hover_highlight};
pub use menu_tree::{MenuTreeStateController, TreeVisibility, initialize_tree_visibility};

pub const ACTIVE_CLASS: &str = "active";
pub const ACTIVE_TRAIL_CLASS: &str = "active-trail";
pub const HOVER_CLASS: &str = "active-hover";

/// What a behavior sees while attaching.
pub struct AttachContext<'a> {
    pub dom: &'a mut DomTree,
    /// Root of the content being attached: the whole document or a replaced subtree.
    pub scope: NodeId,
    pub settings: &'a ThemeSettings,
    pub hover: &'a mut HoverBindings,
    logger: Option<&'a Logger>,
}

impl<'a> AttachContext<'a> {
    pub fn new(
        dom: &'a mut DomTree,
        scope: NodeId,
        settings: &'a ThemeSettings,
        hover: &'a mut HoverBindings,
    ) -> Self {
        Self {
            dom,
            scope,
            settings,
            hover,
            logger: None,
        }
    }

    pub fn with_logger(mut self, logger: Option<&'a Logger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        if let Some(logger) = self.logger {
            let _ = logger.log_event(event_with_fields(level, BEHAVIOR_TARGET, message, fields));
        }
    }
}

/// Behaviour injection point, mirroring a client-side `attach` hook.
pub trait ThemeBehavior: Send {
    fn name(&self) -> &str {
        "theme_behavior"
    }

    fn attach(&mut self, ctx: &mut AttachContext<'_>) -> Result<()>;
}

/// Behaviors with their attach priority; lower runs first.
#[derive(Default)]
pub struct BehaviorBundle {
    entries: Vec<(i32, Box<dyn ThemeBehavior>)>,
}

impl BehaviorBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_behavior<B>(mut self, behavior: B, priority: i32) -> Self
    where
        B: ThemeBehavior + 'static,
    {
        self.entries.push((priority, Box::new(behavior)));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Behaviors in attach order. Equal priorities keep insertion order.
    pub fn into_ordered(mut self) -> Vec<Box<dyn ThemeBehavior>> {
        self.entries.sort_by_key(|(priority, _)| *priority);
        self.entries.into_iter().map(|(_, b)| b).collect()
    }
}

/// The theme's own behaviors.
pub fn theme_bundle() -> BehaviorBundle {
    BehaviorBundle::new().with_behavior(MenuTreeStateController::new(), 0)
}
