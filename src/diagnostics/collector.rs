// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.
//!
//! The collector receives events from various parts of the application
//! through a bounded channel and stores them in a circular buffer. Handles
//! never block the UI thread: when the channel is full, events are dropped.

use crossbeam_channel::{bounded, Receiver, Sender};

use super::buffer::CircularBuffer;
use super::events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, UserAction, WarningEvent,
};

/// Capacity of the channel between handles and the collector.
const CHANNEL_CAPACITY: usize = 128;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone and shareable across tasks.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// Logs a user action event. Non-blocking; drops the event if the
    /// channel is full.
    pub fn log_action(&self, action: UserAction) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::UserAction { action });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs a warning event. Non-blocking.
    pub fn log_warning(&self, warning_event: WarningEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            event: warning_event,
        });
        let _ = self.event_tx.try_send(event);
    }

    /// Logs an error event. Non-blocking.
    pub fn log_error(&self, error_event: ErrorEvent) {
        let event = DiagnosticEvent::new(DiagnosticEventKind::Error { event: error_event });
        let _ = self.event_tx.try_send(event);
    }
}

/// Central collector that drains pending events into a bounded buffer.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (event_tx, event_rx) = bounded(CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_tx,
            event_rx,
        }
    }

    /// Returns a cloneable handle for logging events from anywhere.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains all pending events from the channel into the buffer.
    ///
    /// Called from the update loop so the buffer stays current without a
    /// dedicated thread.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates over recorded events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(super::buffer::DEFAULT_BUFFER_CAPACITY)
    }
}
