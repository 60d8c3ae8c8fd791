use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use blake3::Hash;
use serde::{Serialize, Serializer};

use crate::error::{Result, ThemeError};

/// Rendered markup supplied by the content pipeline for a region.
pub type RegionContent = String;

/// Optional content slots of the page template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RegionId {
    Header,
    Featured,
    Banner,
    Help,
    Highlighted,
    Content,
    SidebarFirst,
    SidebarSecond,
    TriptychFirst,
    TriptychMiddle,
    TriptychLast,
    FooterFirstColumn,
    FooterSecondColumn,
    FooterThirdColumn,
    FooterFourthColumn,
    Footer,
}

impl RegionId {
    pub const ALL: [RegionId; 16] = [
        RegionId::Header,
        RegionId::Featured,
        RegionId::Banner,
        RegionId::Help,
        RegionId::Highlighted,
        RegionId::Content,
        RegionId::SidebarFirst,
        RegionId::SidebarSecond,
        RegionId::TriptychFirst,
        RegionId::TriptychMiddle,
        RegionId::TriptychLast,
        RegionId::FooterFirstColumn,
        RegionId::FooterSecondColumn,
        RegionId::FooterThirdColumn,
        RegionId::FooterFourthColumn,
        RegionId::Footer,
    ];

    pub const TRIPTYCH: [RegionId; 3] = [
        RegionId::TriptychFirst,
        RegionId::TriptychMiddle,
        RegionId::TriptychLast,
    ];

    /// Machine name used by the content pipeline.
    pub fn as_str(self) -> &'static str {
        match self {
            RegionId::Header => "header",
            RegionId::Featured => "featured",
            RegionId::Banner => "banner",
            RegionId::Help => "help",
            RegionId::Highlighted => "highlighted",
            RegionId::Content => "content",
            RegionId::SidebarFirst => "sidebar_first",
            RegionId::SidebarSecond => "sidebar_second",
            RegionId::TriptychFirst => "triptych_first",
            RegionId::TriptychMiddle => "triptych_middle",
            RegionId::TriptychLast => "triptych_last",
            RegionId::FooterFirstColumn => "footer_firstcolumn",
            RegionId::FooterSecondColumn => "footer_secondcolumn",
            RegionId::FooterThirdColumn => "footer_thirdcolumn",
            RegionId::FooterFourthColumn => "footer_fourthcolumn",
            RegionId::Footer => "footer",
        }
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RegionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl FromStr for RegionId {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        RegionId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ThemeError::RegionUnknown(s.to_string()))
    }
}

/// Which regions are populated for the current render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionPresence {
    populated: BTreeSet<RegionId>,
}

impl RegionPresence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_regions(regions: impl IntoIterator<Item = RegionId>) -> Self {
        Self {
            populated: regions.into_iter().collect(),
        }
    }

    pub fn with(mut self, region: RegionId) -> Self {
        self.populated.insert(region);
        self
    }

    pub fn has(&self, region: RegionId) -> bool {
        self.populated.contains(&region)
    }

    pub fn any(&self, regions: &[RegionId]) -> bool {
        regions.iter().any(|region| self.has(*region))
    }

    pub fn iter(&self) -> impl Iterator<Item = RegionId> + '_ {
        self.populated.iter().copied()
    }
}

#[derive(Debug, Clone)]
pub struct RegionState {
    pub content: RegionContent,
    hash: Hash,
}

impl RegionState {
    fn new(content: RegionContent) -> Self {
        let hash = blake3::hash(content.as_bytes());
        Self {
            content,
            hash,
        }
    }

    /// Returns `true` when the content actually changed.
    fn update_content(&mut self, content: RegionContent) -> bool {
        let new_hash = blake3::hash(content.as_bytes());
        if new_hash == self.hash {
            return false;
        }
        self.content = content;
        self.hash = new_hash;
        true
    }

    pub fn is_populated(&self) -> bool {
        !self.content.trim().is_empty()
    }
}

/// Content per region for one page view, with change detection for partial
/// replacements.
#[derive(Debug, Default)]
pub struct RegionRegistry {
    entries: HashMap<RegionId, RegionState>,
    dirty: HashSet<RegionId>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store content for a region. Returns whether anything changed.
    pub fn set_content(&mut self, region: RegionId, content: impl Into<RegionContent>) -> bool {
        use std::collections::hash_map::Entry;

        let content = content.into();
        let changed = match self.entries.entry(region) {
            Entry::Occupied(mut entry) => entry.get_mut().update_content(content),
            Entry::Vacant(vacant) => {
                vacant.insert(RegionState::new(content));
                true
            }
        };
        if changed {
            self.dirty.insert(region);
        }
        changed
    }

    /// Same as [`set_content`](Self::set_content) but keyed by machine name.
    pub fn set_named(&mut self, name: &str, content: impl Into<RegionContent>) -> Result<bool> {
        let region = name.parse::<RegionId>()?;
        Ok(self.set_content(region, content))
    }

    pub fn clear(&mut self, region: RegionId) {
        if self.entries.remove(&region).is_some() {
            self.dirty.insert(region);
        }
    }

    pub fn content(&self, region: RegionId) -> Option<&str> {
        self.entries.get(&region).map(|state| state.content.as_str())
    }

    pub fn presence(&self) -> RegionPresence {
        RegionPresence::from_regions(
            self.entries
                .iter()
                .filter(|(_, state)| state.is_populated())
                .map(|(id, _)| *id),
        )
    }

    /// Drain regions changed since the last call, in region order.
    pub fn take_dirty(&mut self) -> Vec<RegionId> {
        let mut ids: Vec<_> = self.dirty.drain().collect();
        ids.sort();
        ids
    }

    pub fn has_dirty(&self) -> bool {
        !self.dirty.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_only_content_is_not_present() {
        let mut registry = RegionRegistry::new();
        registry.set_content(RegionId::SidebarFirst, "  \n ");
        registry.set_content(RegionId::SidebarSecond, "<div>block</div>");
        let presence = registry.presence();
        assert!(!presence.has(RegionId::SidebarFirst));
        assert!(presence.has(RegionId::SidebarSecond));
    }

    #[test]
    fn identical_content_is_not_a_change() {
        let mut registry = RegionRegistry::new();
        assert!(registry.set_content(RegionId::Header, "logo"));
        assert_eq!(registry.take_dirty(), vec![RegionId::Header]);

        assert!(!registry.set_content(RegionId::Header, "logo"));
        assert!(!registry.has_dirty());

        assert!(registry.set_content(RegionId::Header, "new logo"));
        assert_eq!(registry.take_dirty(), vec![RegionId::Header]);
        assert_eq!(registry.content(RegionId::Header), Some("new logo"));
        assert_eq!(registry.content(RegionId::Banner), None);
    }

    #[test]
    fn named_lookup_rejects_unknown_regions() {
        let mut registry = RegionRegistry::new();
        assert!(registry.set_named("footer_thirdcolumn", "x").unwrap());
        let err = registry.set_named("sidebar_third", "x").unwrap_err();
        assert!(matches!(err, ThemeError::RegionUnknown(name) if name == "sidebar_third"));
    }

    #[test]
    fn clearing_marks_region_dirty_and_absent() {
        let mut registry = RegionRegistry::new();
        registry.set_content(RegionId::Banner, "promo");
        registry.take_dirty();
        registry.clear(RegionId::Banner);
        assert_eq!(registry.take_dirty(), vec![RegionId::Banner]);
        assert!(!registry.presence().has(RegionId::Banner));
    }
}
