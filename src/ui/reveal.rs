// SPDX-License-Identifier: MPL-2.0
//! Scroll-triggered reveal animations.
//!
//! Fixed page elements start hidden and become visible once scrolled into
//! view: a target reveals when the viewport bottom, minus a small margin,
//! passes the target's top. Reveal is sticky: targets never hide again.

use crate::app::Section;
use crate::config::defaults::REVEAL_BOTTOM_MARGIN;
use crate::ui::design_tokens::spacing;
use std::collections::HashSet;

/// Elements that participate in the scroll reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealTarget {
    AboutHeader,
    AboutText,
    AboutFeatures,
    MenuHeader,
    ContactHeader,
    ContactInfo,
    ContactMap,
}

impl RevealTarget {
    /// All reveal targets, in page order.
    pub const ALL: [RevealTarget; 7] = [
        RevealTarget::AboutHeader,
        RevealTarget::AboutText,
        RevealTarget::AboutFeatures,
        RevealTarget::MenuHeader,
        RevealTarget::ContactHeader,
        RevealTarget::ContactInfo,
        RevealTarget::ContactMap,
    ];

    /// Vertical offset of the target's top within the page.
    #[must_use]
    pub fn top(self) -> f32 {
        match self {
            RevealTarget::AboutHeader => Section::About.top() + spacing::XXL,
            RevealTarget::AboutText => Section::About.top() + Section::About.height() * 0.3,
            RevealTarget::AboutFeatures => Section::About.top() + Section::About.height() * 0.6,
            RevealTarget::MenuHeader => Section::Menu.top() + spacing::XXL,
            RevealTarget::ContactHeader => Section::Contact.top() + spacing::XXL,
            RevealTarget::ContactInfo => Section::Contact.top() + Section::Contact.height() * 0.35,
            RevealTarget::ContactMap => Section::Contact.top() + Section::Contact.height() * 0.55,
        }
    }
}

/// Tracks which targets have been scrolled into view.
#[derive(Debug, Default)]
pub struct RevealState {
    revealed: HashSet<RevealTarget>,
}

impl RevealState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the revealed set for the given scroll position.
    ///
    /// Returns the number of newly revealed targets. Already revealed
    /// targets stay revealed regardless of the new position.
    pub fn on_scroll(&mut self, offset: f32, viewport_height: f32) -> usize {
        let visible_bottom = offset + viewport_height - REVEAL_BOTTOM_MARGIN;
        let mut newly_revealed = 0;
        for target in RevealTarget::ALL {
            if !self.revealed.contains(&target) && target.top() <= visible_bottom {
                self.revealed.insert(target);
                newly_revealed += 1;
            }
        }
        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, target: RevealTarget) -> bool {
        self.revealed.contains(&target)
    }

    #[must_use]
    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }
}
