//! Scheduler backed by the tokio timer.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::timer::{ResolutionTicket, Scheduler};

/// Sleeps on the tokio timer, then sends the ticket back to the game task.
///
/// Must be used from inside a tokio runtime.
#[derive(Clone, Debug)]
pub struct TokioScheduler {
    expired: mpsc::UnboundedSender<ResolutionTicket>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new(expired: mpsc::UnboundedSender<ResolutionTicket>) -> Self {
        Self { expired }
    }
}

impl Scheduler for TokioScheduler {
    type Handle = TimerHandle;

    fn schedule(&mut self, delay: Duration, ticket: ResolutionTicket) -> TimerHandle {
        let expired = self.expired.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if expired.send(ticket).is_err() {
                trace!(%ticket, "game stopped before reveal timer fired");
            }
        });
        TimerHandle { task }
    }
}

/// A pending timer. Dropping it cancels the timer.
#[derive(Debug)]
pub struct TimerHandle {
    task: JoinHandle<()>,
}

impl TimerHandle {
    /// Has the timer fired (or been cancelled)?
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
