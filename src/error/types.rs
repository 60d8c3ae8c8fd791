use thiserror::Error;

use crate::dom::NodeId;
use crate::logging::LoggingError;

/// Unified result type for the layout crate.
pub type Result<T> = std::result::Result<T, ThemeError>;

/// Errors surfaced by the document mirror, settings loading and runtime.
#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("node {0} not found in document")]
    NodeNotFound(NodeId),
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),
    #[error("region `{0}` is not known to this theme")]
    RegionUnknown(String),
    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting { key: String, reason: String },
    #[error("settings error: {0}")]
    Settings(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(#[from] LoggingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
