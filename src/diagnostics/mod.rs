// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for collecting structured activity events.
//!
//! This module provides infrastructure for capturing diagnostic events during
//! application usage and storing them in a memory-bounded circular buffer.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with fixed capacity
//! - [`DiagnosticEvent`]: Timestamped event (user action, warning, or error)
//! - [`DiagnosticsHandle`]: Cheap, cloneable, non-blocking event sender
//! - [`DiagnosticsCollector`]: Drains pending events on the update loop

mod buffer;
mod collector;
mod events;

pub use buffer::{CircularBuffer, DEFAULT_BUFFER_CAPACITY};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
