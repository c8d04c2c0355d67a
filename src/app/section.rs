// SPDX-License-Identifier: MPL-2.0
//! Page sections and anchor-scroll targets.
//!
//! The page is one vertical scrollable; each section occupies a fixed slot
//! whose height comes from the layout tokens. Anchor navigation scrolls to
//! the section top minus the navbar height, clamped at zero, so content is
//! not hidden behind the bar.

use crate::ui::design_tokens::layout;
use serde::{Deserialize, Serialize};

/// The four page sections, in scroll order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    About,
    Menu,
    Contact,
}

impl Section {
    /// All sections in scroll order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Menu,
        Section::Contact,
    ];

    /// Korean link label shown in the navbar.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "홈",
            Section::About => "소개",
            Section::Menu => "메뉴",
            Section::Contact => "오시는 길",
        }
    }

    /// Vertical offset of the section top within the page.
    #[must_use]
    pub fn top(self) -> f32 {
        match self {
            Section::Home => 0.0,
            Section::About => layout::HERO_HEIGHT,
            Section::Menu => layout::HERO_HEIGHT + layout::ABOUT_HEIGHT,
            Section::Contact => layout::HERO_HEIGHT + layout::ABOUT_HEIGHT + layout::MENU_HEIGHT,
        }
    }

    /// Height of the section slot.
    #[must_use]
    pub fn height(self) -> f32 {
        match self {
            Section::Home => layout::HERO_HEIGHT,
            Section::About => layout::ABOUT_HEIGHT,
            Section::Menu => layout::MENU_HEIGHT,
            Section::Contact => layout::CONTACT_HEIGHT,
        }
    }

    /// Scroll offset an anchor navigation should land on: the section top
    /// minus the navbar height, never negative.
    #[must_use]
    pub fn scroll_target(self) -> f32 {
        (self.top() - layout::NAV_HEIGHT).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_tile_the_page_without_gaps() {
        let mut expected_top = 0.0;
        for section in Section::ALL {
            assert_eq!(section.top(), expected_top, "{section:?} top");
            expected_top += section.height();
        }
        assert_eq!(expected_top, layout::PAGE_HEIGHT);
    }

    #[test]
    fn scroll_target_accounts_for_nav_height() {
        assert_eq!(
            Section::About.scroll_target(),
            layout::HERO_HEIGHT - layout::NAV_HEIGHT
        );
    }

    #[test]
    fn home_scroll_target_is_clamped_at_zero() {
        assert_eq!(Section::Home.scroll_target(), 0.0);
    }

    #[test]
    fn labels_are_distinct() {
        for a in Section::ALL {
            for b in Section::ALL {
                if a != b {
                    assert_ne!(a.label(), b.label());
                }
            }
        }
    }
}
