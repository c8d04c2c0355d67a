// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page Components
//!
//! - [`navbar`] - Navigation bar with condensation and a collapsible menu
//! - [`menu_board`] - Category tabs with staggered item reveal
//! - [`page`] - Static hero, about, and contact sections
//! - [`notifications`] - Toast notification sequencer and overlay
//!
//! # Shared Infrastructure
//!
//! - [`defer`] - Deferred message delivery on the event loop
//! - [`reveal`] - Scroll-triggered reveal state
//! - [`design_tokens`] - Design system constants (colors, spacing, layout)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod defer;
pub mod design_tokens;
pub mod menu_board;
pub mod navbar;
pub mod notifications;
pub mod page;
pub mod reveal;
pub mod theming;
