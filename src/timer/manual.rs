//! Scheduler driven by the host's own clock.

use std::collections::VecDeque;
use std::time::Duration;

use super::{ResolutionTicket, Scheduler};

/// A ticket waiting for its delay to pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledTimer {
    pub delay: Duration,
    pub ticket: ResolutionTicket,
}

/// Queues scheduled tickets in order.
///
/// UI event loops poll this after each frame and fire whatever has elapsed;
/// tests pop tickets to simulate the delay passing.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    queue: VecDeque<ScheduledTimer>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tickets not yet taken.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// The oldest queued timer.
    #[must_use]
    pub fn peek(&self) -> Option<&ScheduledTimer> {
        self.queue.front()
    }

    /// Take the oldest queued timer.
    pub fn pop(&mut self) -> Option<ScheduledTimer> {
        self.queue.pop_front()
    }

    /// Take the oldest timer if `elapsed` covers its delay.
    pub fn pop_elapsed(&mut self, elapsed: Duration) -> Option<ScheduledTimer> {
        match self.queue.front() {
            Some(timer) if timer.delay <= elapsed => self.queue.pop_front(),
            _ => None,
        }
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ResolutionTicket;

    fn schedule(&mut self, delay: Duration, ticket: ResolutionTicket) -> ResolutionTicket {
        self.queue.push_back(ScheduledTimer { delay, ticket });
        ticket
    }
}
