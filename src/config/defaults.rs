// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Toast**: Notification display and exit-animation timing
//! - **Menu**: Staggered reveal timing for the menu board
//! - **Scroll**: Navbar condensation and reveal thresholds

use std::time::Duration;

// ==========================================================================
// Toast Defaults
// ==========================================================================

/// Default display duration for a toast notification (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 2500;

/// Fixed exit-animation interval between dismissal and detachment
/// (in milliseconds).
pub const TOAST_EXIT_ANIMATION_MS: u64 = 400;

/// Default display duration as a [`Duration`].
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(DEFAULT_TOAST_DURATION_MS);

/// Exit-animation interval as a [`Duration`].
pub const TOAST_EXIT_ANIMATION: Duration = Duration::from_millis(TOAST_EXIT_ANIMATION_MS);

// ==========================================================================
// Menu Board Defaults
// ==========================================================================

/// Per-item delay step when revealing items after a category change
/// (in milliseconds).
pub const MENU_STAGGER_STEP_MS: u64 = 50;

/// Per-item delay step for the initial reveal of the default category
/// (in milliseconds).
pub const MENU_INITIAL_STAGGER_STEP_MS: u64 = 100;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset (in logical pixels) past which the navbar condenses.
pub const NAV_CONDENSE_THRESHOLD: f32 = 50.0;

/// Margin subtracted from the viewport bottom when deciding whether a
/// reveal target has been scrolled into view (in logical pixels).
pub const REVEAL_BOTTOM_MARGIN: f32 = 50.0;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Toast validation
    assert!(DEFAULT_TOAST_DURATION_MS > 0);
    assert!(TOAST_EXIT_ANIMATION_MS > 0);
    assert!(TOAST_EXIT_ANIMATION_MS < DEFAULT_TOAST_DURATION_MS);

    // Stagger validation
    assert!(MENU_STAGGER_STEP_MS > 0);
    assert!(MENU_INITIAL_STAGGER_STEP_MS >= MENU_STAGGER_STEP_MS);

    // Scroll validation
    assert!(NAV_CONDENSE_THRESHOLD > 0.0);
    assert!(REVEAL_BOTTOM_MARGIN >= 0.0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_defaults_are_valid() {
        assert_eq!(DEFAULT_TOAST_DURATION_MS, 2500);
        assert_eq!(TOAST_EXIT_ANIMATION_MS, 400);
        assert_eq!(DEFAULT_TOAST_DURATION.as_millis(), 2500);
        assert_eq!(TOAST_EXIT_ANIMATION.as_millis(), 400);
    }

    #[test]
    fn stagger_defaults_are_valid() {
        assert_eq!(MENU_STAGGER_STEP_MS, 50);
        assert_eq!(MENU_INITIAL_STAGGER_STEP_MS, 100);
    }

    #[test]
    fn scroll_defaults_are_valid() {
        assert_eq!(NAV_CONDENSE_THRESHOLD, 50.0);
        assert_eq!(REVEAL_BOTTOM_MARGIN, 50.0);
    }
}
