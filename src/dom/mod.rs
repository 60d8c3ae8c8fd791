//! In-memory mirror of the rendered document that client behaviors act on.
//!
//! Nodes live in an arena owned by [`DomTree`] and are addressed by
//! [`NodeId`]. Only what the theme behaviors need is modelled: element tags,
//! ordered class lists, attributes, text and a hidden flag standing in for
//! `display: none`.

mod select;
mod tree;

pub use select::{Selector, SelectorChain};
pub use tree::{DomNode, DomTree, NodeId, NodeKind};
