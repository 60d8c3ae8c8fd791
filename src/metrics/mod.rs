use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;
use std::time::Duration;

/// Counters accumulated by a [`PageRuntime`](crate::PageRuntime).
#[derive(Debug, Default, Clone)]
pub struct RuntimeMetrics {
    attachments: u64,
    pointer_events: u64,
    replacements: u64,
    renders: u64,
}

impl RuntimeMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_attach(&mut self) {
        self.attachments = self.attachments.saturating_add(1);
    }

    pub fn record_pointer_event(&mut self) {
        self.pointer_events = self.pointer_events.saturating_add(1);
    }

    pub fn record_replacement(&mut self) {
        self.replacements = self.replacements.saturating_add(1);
    }

    pub fn record_render(&mut self) {
        self.renders = self.renders.saturating_add(1);
    }

    pub fn snapshot(&self, uptime: Duration) -> MetricSnapshot {
        MetricSnapshot {
            uptime_ms: uptime.as_millis() as u64,
            attachments: self.attachments,
            pointer_events: self.pointer_events,
            replacements: self.replacements,
            renders: self.renders,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub uptime_ms: u64,
    pub attachments: u64,
    pub pointer_events: u64,
    pub replacements: u64,
    pub renders: u64,
}

impl MetricSnapshot {
    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("uptime_ms".to_string(), json!(self.uptime_ms));
        map.insert("attachments".to_string(), json!(self.attachments));
        map.insert("pointer_events".to_string(), json!(self.pointer_events));
        map.insert("replacements".to_string(), json!(self.replacements));
        map.insert("renders".to_string(), json!(self.renders));
        map
    }

    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "runtime_metrics", self.as_fields())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_reflects_counters() {
        let mut metrics = RuntimeMetrics::new();
        metrics.record_attach();
        metrics.record_attach();
        metrics.record_pointer_event();
        metrics.record_replacement();
        let snap = metrics.snapshot(Duration::from_millis(12));
        assert_eq!(snap.attachments, 2);
        assert_eq!(snap.pointer_events, 1);
        assert_eq!(snap.replacements, 1);
        assert_eq!(snap.renders, 0);
        assert_eq!(snap.uptime_ms, 12);
    }

    #[test]
    fn snapshot_event_carries_fields() {
        let snap = RuntimeMetrics::new().snapshot(Duration::ZERO);
        let event = snap.to_log_event("uylong::runtime.metrics");
        assert_eq!(event.message, "runtime_metrics");
        assert_eq!(event.field("attachments"), Some(&json!(0)));
    }
}
