//! HTML emission for the document mirror plus the top-bar and
//! alternate-header menus.
//!
//! Labels, URLs and attribute values are written as given; escaping belongs
//! to the host pipeline that produced them.

mod core;
mod menu;

pub use core::{MarkupRenderer, RendererSettings};
pub use menu::{
    MenuMount, alt_main_menu, alt_secondary_menu, mount_menu, top_bar_menu, top_bar_secondary_menu,
};
