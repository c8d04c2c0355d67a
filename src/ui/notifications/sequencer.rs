// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The [`Sequencer`] owns the set of active notifications and drives each
//! through its lifecycle with two independently scheduled timers: one for
//! the display duration, one for the fixed exit-animation interval. Timers
//! never interact across notifications, so a short-lived toast can retire
//! before an earlier long-lived one without affecting it.
//!
//! `notify` is fire-and-forget: it returns immediately after scheduling and
//! the caller cannot observe completion. A sequencer without a display
//! surface silently drops every request.

use super::notification::{Notification, NotificationId};
use crate::config::defaults::{DEFAULT_TOAST_DURATION, TOAST_EXIT_ANIMATION};
use crate::ui::defer;
use crate::ui::design_tokens::layout;
use iced::Task;
use std::time::Duration;

/// Messages for notification lifecycle transitions.
///
/// Both variants are produced by the sequencer's own timers, never by user
/// interaction: there is no external cancellation.
#[derive(Debug, Clone)]
pub enum Message {
    /// The display duration of a notification has elapsed.
    DismissElapsed(NotificationId),
    /// The exit-animation interval of a dismissing notification has elapsed.
    ExitFinished(NotificationId),
}

/// Handle describing the overlay region toasts are mounted on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    /// Width of toast cards mounted on this surface.
    pub toast_width: f32,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            toast_width: layout::TOAST_WIDTH,
        }
    }
}

/// Owns active notifications and their timing.
#[derive(Debug, Default)]
pub struct Sequencer {
    /// The mounted display surface, if any.
    surface: Option<Surface>,
    /// Active notifications in insertion order (FIFO visual stacking).
    toasts: Vec<Notification>,
}

impl Sequencer {
    /// Creates a sequencer mounted on `surface`.
    #[must_use]
    pub fn new(surface: Surface) -> Self {
        Self {
            surface: Some(surface),
            toasts: Vec::new(),
        }
    }

    /// Creates a sequencer with no display surface.
    ///
    /// Every `notify` call on a detached sequencer is a silent no-op:
    /// nothing is stored and no timer is scheduled. Absence of the surface
    /// is a non-fatal configuration gap, not an error.
    #[must_use]
    pub fn detached() -> Self {
        Self::default()
    }

    /// Shows `message` for the default display duration (2.5 s).
    pub fn notify(&mut self, message: impl Into<String>) -> Task<Message> {
        self.notify_for(message, DEFAULT_TOAST_DURATION)
    }

    /// Shows `message` for `duration`, then retires it after the fixed
    /// exit-animation interval.
    ///
    /// The notification becomes visible synchronously with this call, so
    /// consecutive calls stack in call order. Dismissal timing is governed
    /// solely by each notification's own duration. Empty messages are
    /// skipped.
    pub fn notify_for(&mut self, message: impl Into<String>, duration: Duration) -> Task<Message> {
        if self.surface.is_none() {
            return Task::none();
        }
        let message = message.into();
        if message.is_empty() {
            return Task::none();
        }

        let mut notification = Notification::new(message, duration);
        notification.make_visible();
        let id = notification.id();
        self.toasts.push(notification);

        defer::after(duration, Message::DismissElapsed(id))
    }

    /// Advances the lifecycle of the addressed notification.
    ///
    /// Messages for notifications that no longer exist, or that are not in
    /// the expected phase, are ignored.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::DismissElapsed(id) => {
                let Some(toast) = self.toasts.iter_mut().find(|t| t.id() == id) else {
                    return Task::none();
                };
                if toast.begin_dismiss() {
                    defer::after(TOAST_EXIT_ANIMATION, Message::ExitFinished(id))
                } else {
                    Task::none()
                }
            }
            Message::ExitFinished(id) => {
                if let Some(pos) = self.toasts.iter().position(|t| t.id() == id) {
                    if self.toasts[pos].mark_removed() {
                        self.toasts.remove(pos);
                    }
                }
                Task::none()
            }
        }
    }

    /// Active notifications in insertion order.
    pub fn active(&self) -> impl Iterator<Item = &Notification> {
        self.toasts.iter()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.toasts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// The mounted surface, if any.
    #[must_use]
    pub fn surface(&self) -> Option<Surface> {
        self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::Phase;

    fn sequencer() -> Sequencer {
        Sequencer::new(Surface::default())
    }

    #[tokio::test]
    async fn notify_inserts_visible_in_call_order() {
        let mut seq = sequencer();
        let _ = seq.notify_for("A", Duration::from_millis(100));
        let _ = seq.notify_for("B", Duration::from_millis(5000));

        let messages: Vec<_> = seq.active().map(|n| n.message().to_string()).collect();
        assert_eq!(messages, vec!["A", "B"]);
        assert!(seq.active().all(|n| n.phase() == Phase::Visible));
    }

    #[tokio::test]
    async fn dismiss_elapsed_moves_to_dismissing_but_keeps_it_mounted() {
        let mut seq = sequencer();
        let _ = seq.notify("Coffee menu ready ☕");
        let id = seq.active().next().expect("toast exists").id();

        let _ = seq.update(Message::DismissElapsed(id));

        assert_eq!(seq.active_count(), 1);
        let toast = seq.active().next().expect("toast still mounted");
        assert_eq!(toast.phase(), Phase::Dismissing);
    }

    #[tokio::test]
    async fn exit_finished_detaches_the_notification() {
        let mut seq = sequencer();
        let _ = seq.notify("done");
        let id = seq.active().next().expect("toast exists").id();

        let _ = seq.update(Message::DismissElapsed(id));
        let _ = seq.update(Message::ExitFinished(id));

        assert!(seq.is_empty());
    }

    #[tokio::test]
    async fn removing_one_never_touches_another() {
        let mut seq = sequencer();
        let _ = seq.notify_for("A", Duration::from_millis(100));
        let _ = seq.notify_for("B", Duration::from_millis(5000));
        let a = seq.active().next().expect("A exists").id();

        // A runs its full lifecycle while B is still visible
        let _ = seq.update(Message::DismissElapsed(a));
        let _ = seq.update(Message::ExitFinished(a));

        assert_eq!(seq.active_count(), 1);
        let b = seq.active().next().expect("B remains");
        assert_eq!(b.message(), "B");
        assert_eq!(b.phase(), Phase::Visible);
        assert_eq!(b.duration(), Duration::from_millis(5000));
    }

    #[test]
    fn detached_sequencer_stores_nothing() {
        let mut seq = Sequencer::detached();
        let _ = seq.notify("x");

        assert!(seq.is_empty());
        assert!(seq.surface().is_none());
    }

    #[test]
    fn empty_message_is_skipped() {
        let mut seq = sequencer();
        let _ = seq.notify("");
        assert!(seq.is_empty());
    }

    #[tokio::test]
    async fn stale_timer_messages_are_ignored() {
        let mut seq = sequencer();
        let _ = seq.notify("gone soon");
        let id = seq.active().next().expect("toast exists").id();

        let _ = seq.update(Message::DismissElapsed(id));
        let _ = seq.update(Message::ExitFinished(id));

        // A duplicate or late timer for the removed id must be harmless
        let _ = seq.update(Message::DismissElapsed(id));
        let _ = seq.update(Message::ExitFinished(id));
        assert!(seq.is_empty());
    }

    #[tokio::test]
    async fn exit_finished_before_dismiss_is_rejected() {
        let mut seq = sequencer();
        let _ = seq.notify("early");
        let id = seq.active().next().expect("toast exists").id();

        // Out-of-order message: the toast is still Visible
        let _ = seq.update(Message::ExitFinished(id));

        assert_eq!(seq.active_count(), 1);
        let toast = seq.active().next().expect("toast survives");
        assert_eq!(toast.phase(), Phase::Visible);
    }

    #[tokio::test]
    async fn default_duration_is_2500_ms() {
        let mut seq = sequencer();
        let _ = seq.notify("default");
        let toast = seq.active().next().expect("toast exists");
        assert_eq!(toast.duration(), Duration::from_millis(2500));
    }

    #[tokio::test]
    async fn zero_duration_notification_still_becomes_visible_first() {
        let mut seq = sequencer();
        let _ = seq.notify_for("flash", Duration::ZERO);

        let toast = seq.active().next().expect("toast exists");
        assert_eq!(toast.phase(), Phase::Visible);
        assert_eq!(toast.duration(), Duration::ZERO);
    }
}
