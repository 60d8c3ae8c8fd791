use serde::Serialize;

use crate::config::ThemeSettings;
use crate::layout::grid::{LayoutClasses, SidebarLayout};
use crate::regions::{RegionId, RegionPresence};
use crate::topbar::TopBarView;

/// A populated footer column and its class string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FooterColumn {
    pub region: RegionId,
    pub classes: &'static str,
}

/// The three-up row below the main content. All cells render once any is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TriptychRow {
    pub cells: [(RegionId, &'static str); 3],
}

const TRIPTYCH_CELLS: [(RegionId, &str); 3] = [
    (RegionId::TriptychFirst, "triptych-first medium-4"),
    (RegionId::TriptychMiddle, "triptych-middle medium-4"),
    (RegionId::TriptychLast, "triptych-last medium-4"),
];

const FOOTER_CELLS: [(RegionId, &str); 4] = [
    (RegionId::FooterFirstColumn, "footer-first medium-3"),
    (RegionId::FooterSecondColumn, "footer-second medium-3"),
    (RegionId::FooterThirdColumn, "footer-third medium-3"),
    (RegionId::FooterFourthColumn, "footer-fourth medium-3"),
];

/// Structural decisions for one page render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLayout {
    pub sidebars: SidebarLayout,
    pub grid: LayoutClasses,
    pub top_bar: TopBarView,
    pub header_region: bool,
    pub featured: bool,
    pub banner: bool,
    pub messages_inline: bool,
    /// Messages are printed at the end of the page for the modal to reveal.
    pub messages_modal: bool,
    /// The reveal script must be registered so modal messages can open.
    pub requires_reveal_script: bool,
    pub help: bool,
    pub highlighted: bool,
    pub triptych: Option<TriptychRow>,
    pub footer_columns: Vec<FooterColumn>,
    pub footer: bool,
}

impl PageLayout {
    pub fn resolve(presence: &RegionPresence, settings: &ThemeSettings, has_messages: bool) -> Self {
        let sidebars = SidebarLayout::from_presence(presence);
        let top_bar = TopBarView::build(&settings.top_bar);

        // The header region lives inside the alternate header section.
        let header_region =
            top_bar.resolution.alt_header_shown && presence.has(RegionId::Header);

        let triptych = presence
            .any(&RegionId::TRIPTYCH)
            .then_some(TriptychRow {
                cells: TRIPTYCH_CELLS,
            });

        let footer_columns = FOOTER_CELLS
            .iter()
            .filter(|(region, _)| presence.has(*region))
            .map(|&(region, classes)| FooterColumn { region, classes })
            .collect();

        Self {
            sidebars,
            grid: sidebars.classes(),
            top_bar,
            header_region,
            featured: presence.has(RegionId::Featured),
            banner: presence.has(RegionId::Banner),
            messages_inline: has_messages && !settings.messages_modal,
            messages_modal: has_messages && settings.messages_modal,
            requires_reveal_script: settings.messages_modal,
            help: presence.has(RegionId::Help),
            highlighted: presence.has(RegionId::Highlighted),
            triptych,
            footer_columns,
            footer: presence.has(RegionId::Footer),
        }
    }

    pub fn shows_sidebar(&self, region: RegionId) -> bool {
        match region {
            RegionId::SidebarFirst => {
                matches!(self.sidebars, SidebarLayout::Both | SidebarLayout::FirstOnly)
            }
            RegionId::SidebarSecond => {
                matches!(self.sidebars, SidebarLayout::Both | SidebarLayout::SecondOnly)
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TopBarMode;

    fn settings() -> ThemeSettings {
        ThemeSettings::default()
    }

    #[test]
    fn modal_messages_are_not_rendered_inline() {
        let mut settings = settings();
        settings.messages_modal = true;
        let layout = PageLayout::resolve(&RegionPresence::new(), &settings, true);
        assert!(!layout.messages_inline);
        assert!(layout.messages_modal);
        assert!(layout.requires_reveal_script);

        let quiet = PageLayout::resolve(&RegionPresence::new(), &settings, false);
        assert!(!quiet.messages_modal);
        assert!(quiet.requires_reveal_script);

        let inline = PageLayout::resolve(&RegionPresence::new(), &self::settings(), true);
        assert!(inline.messages_inline);
        assert!(!inline.messages_modal);
        assert!(!inline.requires_reveal_script);
    }

    #[test]
    fn only_present_footer_columns_are_listed() {
        let presence = RegionPresence::new()
            .with(RegionId::FooterSecondColumn)
            .with(RegionId::FooterFourthColumn);
        let layout = PageLayout::resolve(&presence, &settings(), false);
        let regions: Vec<_> = layout.footer_columns.iter().map(|c| c.region).collect();
        assert_eq!(
            regions,
            vec![RegionId::FooterSecondColumn, RegionId::FooterFourthColumn]
        );
        assert_eq!(layout.footer_columns[0].classes, "footer-second medium-3");
    }

    #[test]
    fn any_triptych_region_renders_the_whole_row() {
        let presence = RegionPresence::new().with(RegionId::TriptychMiddle);
        let layout = PageLayout::resolve(&presence, &settings(), false);
        let row = layout.triptych.unwrap();
        assert_eq!(row.cells[0].1, "triptych-first medium-4");
        assert_eq!(row.cells[2].0, RegionId::TriptychLast);

        let empty = PageLayout::resolve(&RegionPresence::new(), &settings(), false);
        assert!(empty.triptych.is_none());
    }

    #[test]
    fn header_region_follows_alt_header() {
        let presence = RegionPresence::new().with(RegionId::Header);
        let mut settings = settings();
        settings.top_bar.enabled = TopBarMode::AllBreakpoints;
        let layout = PageLayout::resolve(&presence, &settings, false);
        assert!(!layout.header_region);

        settings.top_bar.enabled = TopBarMode::SmallOnly;
        let layout = PageLayout::resolve(&presence, &settings, false);
        assert!(layout.header_region);
        assert_eq!(layout.top_bar.resolution.alt_header_classes, "hide-for-small");
    }

    #[test]
    fn sidebars_map_through_the_grid_table() {
        let presence = RegionPresence::new().with(RegionId::SidebarFirst);
        let layout = PageLayout::resolve(&presence, &settings(), false);
        assert_eq!(layout.grid.main, "medium-9 medium-push-3");
        assert!(layout.shows_sidebar(RegionId::SidebarFirst));
        assert!(!layout.shows_sidebar(RegionId::SidebarSecond));
    }
}
