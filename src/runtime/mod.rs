//! Per-page-view driver composing the document mirror, behaviors, logging
//! and metrics.
//!
//! A `PageRuntime` is created once per page view. [`PageRuntime::attach`]
//! plays the role of the client's ready hook; partial content replacement
//! re-attaches behaviors scoped to the replaced container; pointer events are
//! routed to the hover bindings.

use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use serde_json::json;

use crate::behaviors::{AttachContext, BehaviorBundle, HoverBindings, MenuItemState, PointerEvent, ThemeBehavior};
use crate::config::ThemeSettings;
use crate::dom::{DomTree, NodeId};
use crate::layout::PageLayout;
use crate::logging::{FileSink, LogLevel, Logger, RUNTIME_TARGET, event_with_fields, json_kv};
use crate::menu::{CurrentPage, MenuNode};
use crate::metrics::{MetricSnapshot, RuntimeMetrics};
use crate::regions::RegionRegistry;
use crate::render::{MarkupRenderer, MenuMount, mount_menu};
use crate::Result;

/// Configuration knobs for a page runtime.
#[derive(Clone, Default)]
pub struct RuntimeConfig {
    /// Optional structured logger used by the runtime and its behaviors.
    pub logger: Option<Logger>,
    /// Metrics accumulator, shared so hosts can read it while the page lives.
    pub metrics: Option<Arc<Mutex<RuntimeMetrics>>>,
    /// Target field used when emitting metrics snapshots.
    pub metrics_target: String,
}

impl std::fmt::Debug for RuntimeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuntimeConfig")
            .field("logger", &self.logger.is_some())
            .field("metrics", &self.metrics)
            .field("metrics_target", &self.metrics_target)
            .finish()
    }
}

impl RuntimeConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Log JSON lines to `path`, truncating the file past `max_bytes` (0 = unbounded).
    pub fn with_log_file(self, path: impl AsRef<Path>, max_bytes: u64) -> Result<Self> {
        let sink = FileSink::new(path, max_bytes)?;
        Ok(self.with_logger(Logger::new(sink)))
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(RuntimeMetrics::new())));
        }
        if self.metrics_target.is_empty() {
            self.metrics_target = format!("{RUNTIME_TARGET}.metrics");
        }
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<RuntimeMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }
}

pub struct PageRuntime {
    dom: DomTree,
    settings: ThemeSettings,
    behaviors: Vec<Box<dyn ThemeBehavior>>,
    hover: HoverBindings,
    renderer: MarkupRenderer,
    config: RuntimeConfig,
    started: Instant,
}

impl PageRuntime {
    pub fn new(dom: DomTree, settings: ThemeSettings) -> Self {
        Self {
            dom,
            settings,
            behaviors: Vec::new(),
            hover: HoverBindings::new(),
            renderer: MarkupRenderer::with_default(),
            config: RuntimeConfig::default(),
            started: Instant::now(),
        }
    }

    /// A runtime with the theme's own behaviors installed.
    pub fn with_theme_behaviors(dom: DomTree, settings: ThemeSettings) -> Self {
        let mut runtime = Self::new(dom, settings);
        runtime.install(crate::behaviors::theme_bundle());
        runtime
    }

    pub fn config_mut(&mut self) -> &mut RuntimeConfig {
        &mut self.config
    }

    pub fn set_config(&mut self, config: RuntimeConfig) {
        self.config = config;
    }

    pub fn settings(&self) -> &ThemeSettings {
        &self.settings
    }

    pub fn dom(&self) -> &DomTree {
        &self.dom
    }

    pub fn dom_mut(&mut self) -> &mut DomTree {
        &mut self.dom
    }

    pub fn hover_bindings(&self) -> &HoverBindings {
        &self.hover
    }

    pub fn register_behavior<B>(&mut self, behavior: B)
    where
        B: ThemeBehavior + 'static,
    {
        self.behaviors.push(Box::new(behavior));
    }

    /// Append a bundle's behaviors after those already registered.
    pub fn install(&mut self, bundle: BehaviorBundle) {
        self.behaviors.extend(bundle.into_ordered());
    }

    /// Structural decisions for this page, from the pipeline's region content.
    pub fn resolve_layout(&self, regions: &RegionRegistry, has_messages: bool) -> PageLayout {
        let presence = regions.presence();
        let layout = PageLayout::resolve(&presence, &self.settings, has_messages);
        self.log(
            LogLevel::Debug,
            "layout_resolved",
            [
                json_kv("regions", json!(presence.iter().map(|r| r.as_str()).collect::<Vec<_>>())),
                json_kv("main", json!(layout.grid.main)),
                json_kv("top_bar", json!(self.settings.top_bar.enabled.to_string())),
            ],
        );
        layout
    }

    /// Attach every behavior to the whole document.
    pub fn attach(&mut self) -> Result<()> {
        let root = self.dom.root();
        self.attach_scope(root)
    }

    /// Attach every behavior to the subtree rooted at `scope`.
    pub fn attach_scope(&mut self, scope: NodeId) -> Result<()> {
        self.dom.node(scope)?;
        let logger = self.config.logger.as_ref();
        for behavior in self.behaviors.iter_mut() {
            let mut ctx = AttachContext::new(&mut self.dom, scope, &self.settings, &mut self.hover)
                .with_logger(logger);
            behavior.attach(&mut ctx)?;
            if let Some(logger) = logger {
                let _ = logger.log_event(event_with_fields(
                    LogLevel::Trace,
                    RUNTIME_TARGET,
                    "behavior_attached",
                    [
                        json_kv("behavior", json!(behavior.name())),
                        json_kv("scope", json!(scope.index())),
                    ],
                ));
            }
        }
        self.with_metrics(RuntimeMetrics::record_attach);
        self.log(
            LogLevel::Info,
            "behaviors_attached",
            [
                json_kv("behaviors", json!(self.behaviors.len())),
                json_kv("scope", json!(scope.index())),
                json_kv("hover_bindings", json!(self.hover.len())),
            ],
        );
        Ok(())
    }

    /// Replace the content of `container` with a freshly mounted menu and
    /// re-attach behaviors to it.
    pub fn replace_menu(
        &mut self,
        container: NodeId,
        forest: &[MenuNode],
        current: &CurrentPage,
    ) -> Result<MenuMount> {
        let list_class = self.settings.selectors.menu_list.clone();
        self.replace_with(container, |dom, container| {
            mount_menu(dom, container, forest, current, &list_class)
        })
    }

    /// Clear `container`, let `build` fill it, then re-attach behaviors to it.
    pub fn replace_with<T, F>(&mut self, container: NodeId, build: F) -> Result<T>
    where
        F: FnOnce(&mut DomTree, NodeId) -> Result<T>,
    {
        self.dom.clear_children(container)?;
        let built = build(&mut self.dom, container)?;
        self.hover.prune(&self.dom);
        self.with_metrics(RuntimeMetrics::record_replacement);
        self.log(
            LogLevel::Debug,
            "content_replaced",
            [json_kv("container", json!(container.index()))],
        );
        self.attach_scope(container)?;
        Ok(built)
    }

    /// Route a pointer event; returns whether a hover binding handled it.
    pub fn dispatch(&mut self, event: PointerEvent) -> Result<bool> {
        let handled = self.hover.dispatch(&mut self.dom, event)?;
        self.with_metrics(RuntimeMetrics::record_pointer_event);
        Ok(handled)
    }

    pub fn item_state(&self, item: NodeId) -> MenuItemState {
        MenuItemState::read(&self.dom, item)
    }

    /// Serialise `node` to HTML.
    pub fn render(&mut self, node: NodeId) -> Result<String> {
        let html = self.renderer.outer_html(&self.dom, node)?;
        self.with_metrics(RuntimeMetrics::record_render);
        Ok(html)
    }

    pub fn metrics_snapshot(&self) -> Option<MetricSnapshot> {
        let metrics = self.config.metrics.as_ref()?;
        let guard = metrics.lock().ok()?;
        Some(guard.snapshot(self.uptime()))
    }

    /// Log the current metrics snapshot, if both logging and metrics are on.
    pub fn emit_metrics(&self) {
        if let (Some(logger), Some(snapshot)) = (self.config.logger.as_ref(), self.metrics_snapshot())
        {
            let _ = logger.log_event(snapshot.to_log_event(&self.config.metrics_target));
        }
    }

    fn uptime(&self) -> Duration {
        self.started.elapsed()
    }

    fn with_metrics(&self, record: impl FnOnce(&mut RuntimeMetrics)) {
        if let Some(metrics) = self.config.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                record(&mut guard);
            }
        }
    }

    fn log<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.config.logger.as_ref() {
            let _ = logger.log_event(event_with_fields(level, RUNTIME_TARGET, message, fields));
        }
    }
}
