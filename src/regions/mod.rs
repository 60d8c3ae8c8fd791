//! Named page regions and the registry that tracks their content per render.

mod core;

pub use core::{RegionContent, RegionId, RegionPresence, RegionRegistry, RegionState};
