// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. Notifications appear temporarily to inform
//! users about actions (category changes, etc.) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct and its lifecycle phases
//! - [`sequencer`] - `Sequencer` owning active notifications and their timers
//! - [`toast`] - Toast widget component for rendering notifications
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Sequencer, Surface, Toast};
//!
//! // Create a sequencer mounted on the page overlay
//! let mut sequencer = Sequencer::new(Surface::default());
//!
//! // Fire-and-forget a notification; the returned task drives its timers
//! let task = sequencer.notify("커피 메뉴를 보여드릴게요 ☕");
//!
//! // In your view function, render the overlay
//! let overlay = Toast::view_overlay(&sequencer).map(Message::Notification);
//! ```
//!
//! # Design Considerations
//!
//! - Each notification owns two independent timers (display, exit animation);
//!   concurrent notifications never share timing state
//! - Insertion order is preserved on the surface; removal order follows each
//!   notification's own duration
//! - A sequencer without a surface silently drops requests

mod notification;
mod sequencer;
mod toast;

pub use notification::{Notification, NotificationId, Phase};
pub use sequencer::{Message as NotificationMessage, Sequencer, Surface};
pub use toast::Toast;
