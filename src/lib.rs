// SPDX-License-Identifier: MPL-2.0
//! KAKAO CAFÉ, a single-page café showcase built with Iced.
//!
//! The crate is organized around a handful of small component modules
//! glued together by the application root:
//!
//! - [`app`]: root state, update loop, keyboard shortcuts, window setup
//! - [`ui`]: page components (navbar, menu board, scroll reveals) and the
//!   toast notification sequencer
//! - [`menu`]: the embedded menu catalog and its categories
//! - [`config`]: persisted user preferences (theme, window size)
//! - [`diagnostics`]: in-memory collection of warnings, errors, and
//!   notable user actions

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod menu;
pub mod ui;

pub use error::{Error, Result};
