//! Layout resolution: grid classes for the main row and the presence-driven
//! section decisions of the page template.

pub mod grid;
mod page;

pub use grid::{LayoutClasses, SidebarLayout, resolve_grid_classes};
pub use page::{FooterColumn, PageLayout, TriptychRow};
