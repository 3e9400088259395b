//! Deferred mismatch resolution.
//!
//! When two cards fail to match, the controller asks a `Scheduler` to
//! deliver a `ResolutionTicket` back after a delay. The host hands the ticket
//! to `GameController::on_reveal_timer_elapsed` on the same thread or queue
//! that delivers clicks, so the two entry points never run concurrently.
//!
//! - `ManualScheduler`: queues tickets for a host event loop (or a test) to
//!   fire when it decides the delay has passed.
//! - `runtime::TokioScheduler` (feature `runtime`): sleeps on the tokio timer
//!   and sends the ticket back over a channel.

pub mod manual;
pub mod ticket;

pub use manual::{ManualScheduler, ScheduledTimer};
pub use ticket::ResolutionTicket;

use std::time::Duration;

/// One-shot delayed delivery of a ticket.
pub trait Scheduler {
    /// Returned per scheduled ticket. Dropping it must not fire the ticket.
    type Handle;

    /// Arrange for `ticket` to come back after `delay`.
    fn schedule(&mut self, delay: Duration, ticket: ResolutionTicket) -> Self::Handle;
}
