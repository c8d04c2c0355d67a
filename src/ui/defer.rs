// SPDX-License-Identifier: MPL-2.0
//! Deferred message delivery on the UI event loop.
//!
//! Both the notification sequencer and the menu board stagger rely on the
//! same primitive: deliver a message after a delay, without blocking the
//! update loop. Each call schedules its own independent timer task.

use iced::Task;
use std::time::Duration;

/// Produces `message` after `delay` has elapsed.
///
/// A `delay` of zero still goes through the scheduler, so the message
/// arrives on a later event-loop turn, never synchronously.
pub fn after<M>(delay: Duration, message: M) -> Task<M>
where
    M: Clone + Send + 'static,
{
    Task::perform(tokio::time::sleep(delay), move |_| message.clone())
}
