//! Single-consumer game task.

use std::fmt::Debug;
use std::hash::Hash;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use super::scheduler::TokioScheduler;
use crate::controller::GameController;
use crate::core::{GameConfig, GameError};
use crate::timer::ResolutionTicket;
use crate::view::BoardView;

/// Clicks buffered before `GameHandle::click` waits.
const CLICK_BUFFER: usize = 64;

/// Controller type driven by the runtime.
pub type RuntimeController<V, W> = GameController<V, W, TokioScheduler>;

/// Sends clicks to a running game. Dropping every handle stops the game.
#[derive(Clone, Debug)]
pub struct GameHandle {
    clicks: mpsc::Sender<usize>,
}

impl GameHandle {
    /// Forward a click on the card at `index`.
    ///
    /// Fails only if the game task has stopped.
    pub async fn click(&self, index: usize) -> Result<(), mpsc::error::SendError<usize>> {
        self.clicks.send(index).await
    }

    /// Has the game task stopped?
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.clicks.is_closed()
    }
}

/// A game waiting to run on a tokio task.
#[derive(Debug)]
pub struct GameRuntime<V, W> {
    controller: RuntimeController<V, W>,
    clicks: mpsc::Receiver<usize>,
    expired: mpsc::UnboundedReceiver<ResolutionTicket>,
}

impl<V, W> GameRuntime<V, W>
where
    V: Clone + Eq + Hash + Debug,
    W: BoardView<V>,
{
    /// Deal a game and return it with a handle for sending clicks.
    pub fn new(config: GameConfig<V>, view: W) -> Result<(Self, GameHandle), GameError> {
        let (expired_tx, expired) = mpsc::unbounded_channel();
        let (clicks_tx, clicks) = mpsc::channel(CLICK_BUFFER);
        let controller = GameController::new(config, view, TokioScheduler::new(expired_tx))?;

        let runtime = Self {
            controller,
            clicks,
            expired,
        };
        Ok((runtime, GameHandle { clicks: clicks_tx }))
    }

    /// The controller, before the game starts running.
    #[must_use]
    pub fn controller(&self) -> &RuntimeController<V, W> {
        &self.controller
    }

    /// Process clicks and timer expiries until the game ends.
    ///
    /// Stops when every pair is matched or every `GameHandle` is dropped,
    /// and returns the controller for inspection. A click outside the board
    /// stops the game with `GameError::IndexOutOfRange`.
    pub async fn run(mut self) -> Result<RuntimeController<V, W>, GameError> {
        while !self.controller.session().is_complete() {
            tokio::select! {
                biased;

                Some(ticket) = self.expired.recv() => {
                    self.controller.on_reveal_timer_elapsed(ticket);
                }
                click = self.clicks.recv() => match click {
                    Some(index) => {
                        if let Err(err) = self.controller.handle_selection(index) {
                            error!(%err, "stopping game");
                            return Err(err);
                        }
                    }
                    None => {
                        debug!("all game handles dropped");
                        break;
                    }
                },
            }
        }

        info!(
            complete = self.controller.session().is_complete(),
            remaining_pairs = self.controller.session().remaining_pairs(),
            "game task finished"
        );
        Ok(self.controller)
    }

    /// Run the game on a new tokio task.
    pub fn spawn(self) -> JoinHandle<Result<RuntimeController<V, W>, GameError>>
    where
        V: Send + 'static,
        W: Send + 'static,
    {
        tokio::spawn(self.run())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::cards::FaceState;
    use crate::controller::messages;
    use crate::core::BoardConfig;
    use crate::session::Phase;
    use crate::view::{RecordingView, ViewCommand};

    fn runtime(seed: u64) -> (GameRuntime<char, RecordingView<char>>, GameHandle) {
        let config = GameConfig::new(BoardConfig::new(1, 4).with_seed(seed), ['a', 'b']);
        GameRuntime::new(config, RecordingView::new()).unwrap()
    }

    fn positions(runtime: &GameRuntime<char, RecordingView<char>>, identity: char) -> Vec<usize> {
        runtime
            .controller()
            .session()
            .cards()
            .iter()
            .filter(|c| *c.identity() == identity)
            .map(|c| c.position())
            .collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_runs_to_completion() {
        let (runtime, handle) = runtime(42);
        let order: Vec<usize> = [positions(&runtime, 'a'), positions(&runtime, 'b')].concat();
        let game = runtime.spawn();

        for index in order {
            handle.click(index).await.unwrap();
        }

        let controller = game.await.unwrap().unwrap();
        assert!(controller.session().is_complete());
        assert_eq!(controller.view().last_message(), Some(messages::COMPLETE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_clicks_ignored_while_resolving() {
        let (runtime, handle) = runtime(42);
        let a = positions(&runtime, 'a');
        let b = positions(&runtime, 'b');
        let game = runtime.spawn();

        handle.click(a[0]).await.unwrap();
        handle.click(b[0]).await.unwrap();
        handle.click(a[1]).await.unwrap();

        tokio::time::sleep(Duration::from_millis(900)).await;
        drop(handle);

        let controller = game.await.unwrap().unwrap();
        let session = controller.session();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.faces().all(|f| f == FaceState::Hidden));
        assert!(!controller
            .view()
            .commands()
            .contains(&ViewCommand::RenderFront { index: a[1], identity: 'a' }));
        assert_eq!(controller.view().last_message(), Some(messages::TRY_AGAIN));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_while_resolving() {
        let (runtime, handle) = runtime(42);
        let a = positions(&runtime, 'a');
        let b = positions(&runtime, 'b');
        let game = runtime.spawn();

        handle.click(a[0]).await.unwrap();
        handle.click(b[0]).await.unwrap();
        drop(handle);

        let controller = game.await.unwrap().unwrap();
        assert!(controller.session().is_busy());
        assert_eq!(controller.view().last_message(), Some(messages::NOT_A_MATCH));
    }

    #[tokio::test(start_paused = true)]
    async fn test_out_of_range_stops_game() {
        let (runtime, handle) = runtime(42);
        let game = runtime.spawn();

        handle.click(99).await.unwrap();

        let err = game.await.unwrap().unwrap_err();
        assert_eq!(err, GameError::IndexOutOfRange { index: 99, cards: 4 });
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn test_invalid_config() {
        let config = GameConfig::new(BoardConfig::new(1, 3), ['a', 'b']);
        assert!(GameRuntime::new(config, RecordingView::<char>::new()).is_err());
    }
}
