//! Menu trees handed over by the host's menu builder.

mod tree;

pub use tree::{CurrentPage, MenuNode};
