// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is a transient, auto-dismissing message. Its lifecycle
//! is a strictly linear state machine:
//!
//! `Pending → Visible → Dismissing → Removed`
//!
//! There are no cycles, no external cancellation, and no retry. Transition
//! methods are guarded: calling one from the wrong phase is a no-op that
//! returns `false`, which makes stale timer callbacks harmless.

use std::time::{Duration, Instant};

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle phase of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Created but not yet mounted on the display surface.
    Pending,
    /// Mounted and showing.
    Visible,
    /// Display duration elapsed; exit animation running.
    Dismissing,
    /// Detached from the display surface. Terminal.
    Removed,
}

/// A transient user-facing message owned by the sequencer.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    message: String,
    duration: Duration,
    phase: Phase,
    created_at: Instant,
}

impl Notification {
    /// Creates a new notification in the `Pending` phase.
    pub fn new(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            id: NotificationId::new(),
            message: message.into(),
            duration,
            phase: Phase::Pending,
            created_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The requested display duration before dismissal begins.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// `Pending → Visible`. Returns whether the transition happened.
    pub fn make_visible(&mut self) -> bool {
        if self.phase == Phase::Pending {
            self.phase = Phase::Visible;
            true
        } else {
            false
        }
    }

    /// `Visible → Dismissing`. Returns whether the transition happened.
    pub fn begin_dismiss(&mut self) -> bool {
        if self.phase == Phase::Visible {
            self.phase = Phase::Dismissing;
            true
        } else {
            false
        }
    }

    /// `Dismissing → Removed`. Returns whether the transition happened.
    pub fn mark_removed(&mut self) -> bool {
        if self.phase == Phase::Dismissing {
            self.phase = Phase::Removed;
            true
        } else {
            false
        }
    }
}
