//! Game controller implementation.

use std::fmt::Debug;
use std::hash::Hash;

use tracing::{debug, info, trace, warn};

use super::messages;
use crate::cards::DeckGenerator;
use crate::core::{GameConfig, GameError, GameRng};
use crate::session::{GameSession, Phase};
use crate::timer::{ResolutionTicket, Scheduler};
use crate::view::BoardView;

/// What a selection did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// Defined no-op: busy, already matched, already picked, or game over.
    Ignored,
    /// First card of a turn revealed.
    FirstPick,
    /// Pair found; the game goes on.
    Matched { remaining_pairs: usize },
    /// Final pair found.
    Completed,
    /// Cards differ; they flip back when `ticket` fires.
    Mismatched { ticket: ResolutionTicket },
}

/// Owns one game and drives its turns.
///
/// `handle_selection` and `on_reveal_timer_elapsed` are the only entry
/// points that mutate the session. Both take `&mut self`, so they cannot run
/// concurrently; hosts on multi-threaded executors funnel them through one
/// task (see `runtime`).
pub struct GameController<V, W, S: Scheduler> {
    config: GameConfig<V>,
    session: GameSession<V>,
    view: W,
    scheduler: S,
    seed: u64,
    next_ticket: ResolutionTicket,
    pending_timer: Option<S::Handle>,
}

impl<V, W, S> GameController<V, W, S>
where
    V: Clone + Eq + Hash + Debug,
    W: BoardView<V>,
    S: Scheduler,
{
    /// Deal a new game and render it face-down.
    ///
    /// Fails with `GameError::Config` if the identities cannot exactly fill
    /// the board; no card is rendered in that case.
    pub fn new(config: GameConfig<V>, view: W, scheduler: S) -> Result<Self, GameError> {
        let rng = GameRng::from_seed_or_entropy(config.board.seed);
        let seed = rng.seed();
        let cards = config.board.card_count()?;
        let deck = DeckGenerator::new(rng).generate(&config.identities, cards)?;

        info!(
            seed,
            rows = config.board.rows,
            columns = config.board.columns,
            pairs = deck.pair_count(),
            "dealt new game"
        );

        let mut controller = Self {
            session: GameSession::new(deck),
            config,
            view,
            scheduler,
            seed,
            next_ticket: ResolutionTicket::new(0),
            pending_timer: None,
        };

        for index in 0..controller.session.len() {
            controller.view.render_back(index);
        }
        controller.view.set_status_message(messages::WELCOME);

        Ok(controller)
    }

    /// Handle a click on the card at `index`.
    ///
    /// Out-of-range indices are a caller bug and always return
    /// `GameError::IndexOutOfRange`. Clicks while cards flip back, on matched
    /// cards, on the pending pick, or after the game ends are ignored.
    pub fn handle_selection(&mut self, index: usize) -> Result<SelectionOutcome, GameError> {
        let cards = self.session.len();
        if index >= cards {
            return Err(GameError::IndexOutOfRange { index, cards });
        }

        let first = match self.session.phase() {
            Phase::Resolving { .. } | Phase::Complete => {
                trace!(index, phase = ?self.session.phase(), "selection ignored");
                return Ok(SelectionOutcome::Ignored);
            }
            Phase::Idle => None,
            Phase::AwaitingSecond { first } => Some(first),
        };

        if first == Some(index) || self.session.cards()[index].is_matched() {
            trace!(index, "selection ignored");
            return Ok(SelectionOutcome::Ignored);
        }

        self.reveal(index);

        let outcome = match first {
            None => {
                debug!(index, "first pick");
                self.session.set_phase(Phase::AwaitingSecond { first: index });
                self.view.set_status_message(messages::SELECT_ANOTHER);
                SelectionOutcome::FirstPick
            }
            Some(first) if self.same_identity(first, index) => self.resolve_match(first, index),
            Some(first) => self.begin_mismatch(first, index),
        };

        debug_assert_eq!(self.session.check_invariants(), Ok(()));
        Ok(outcome)
    }

    /// Flip a mismatched pair back once its delay has elapsed.
    ///
    /// Returns `false` without touching state if `ticket` is not the one the
    /// session is waiting on (already fired or never issued).
    pub fn on_reveal_timer_elapsed(&mut self, ticket: ResolutionTicket) -> bool {
        let (first, second) = match self.session.phase() {
            Phase::Resolving {
                first,
                second,
                ticket: expected,
            } if expected == ticket => (first, second),
            phase => {
                warn!(%ticket, ?phase, "ignoring reveal timer that is not pending");
                return false;
            }
        };

        self.pending_timer = None;
        self.hide(first);
        self.hide(second);
        self.session.set_phase(Phase::Idle);
        self.view.set_status_message(messages::TRY_AGAIN);

        debug!(first, second, %ticket, "mismatch resolved");
        debug_assert_eq!(self.session.check_invariants(), Ok(()));
        true
    }

    fn same_identity(&self, a: usize, b: usize) -> bool {
        let cards = self.session.cards();
        cards[a].identity() == cards[b].identity()
    }

    fn reveal(&mut self, index: usize) {
        self.session.card_mut(index).reveal();
        self.view.render_front(index, self.session.cards()[index].identity());
    }

    fn hide(&mut self, index: usize) {
        self.session.card_mut(index).hide();
        self.view.render_back(index);
    }

    fn resolve_match(&mut self, first: usize, second: usize) -> SelectionOutcome {
        let remaining_pairs = self.session.record_match(first, second);
        self.view.disable(first);
        self.view.disable(second);

        if remaining_pairs == 0 {
            info!(seed = self.seed, "all pairs matched");
            self.session.set_phase(Phase::Complete);
            self.view.set_status_message(messages::COMPLETE);
            SelectionOutcome::Completed
        } else {
            let identity = self.session.cards()[first].identity();
            debug!(first, second, remaining_pairs, ?identity, "match");
            self.session.set_phase(Phase::Idle);
            self.view.set_status_message(&messages::progress(remaining_pairs));
            SelectionOutcome::Matched { remaining_pairs }
        }
    }

    fn begin_mismatch(&mut self, first: usize, second: usize) -> SelectionOutcome {
        let ticket = self.next_ticket;
        self.next_ticket = ticket.next();

        self.session.set_phase(Phase::Resolving { first, second, ticket });
        self.view.set_status_message(messages::NOT_A_MATCH);

        let delay = self.config.board.mismatch_delay;
        debug!(first, second, %ticket, ?delay, "mismatch");
        self.pending_timer = Some(self.scheduler.schedule(delay, ticket));

        SelectionOutcome::Mismatched { ticket }
    }
}

impl<V, W, S: Scheduler> GameController<V, W, S> {
    #[must_use]
    pub fn session(&self) -> &GameSession<V> {
        &self.session
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig<V> {
        &self.config
    }

    /// Seed the deck was dealt from; replays the same deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[must_use]
    pub fn view(&self) -> &W {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut W {
        &mut self.view
    }

    #[must_use]
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Handle of the outstanding mismatch timer, if any.
    #[must_use]
    pub fn pending_timer(&self) -> Option<&S::Handle> {
        self.pending_timer.as_ref()
    }

    /// Give back the view and scheduler, ending the game.
    pub fn into_parts(self) -> (W, S) {
        (self.view, self.scheduler)
    }
}

impl<V: Debug, W, S: Scheduler> Debug for GameController<V, W, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameController")
            .field("seed", &self.seed)
            .field("session", &self.session)
            .field("next_ticket", &self.next_ticket)
            .finish_non_exhaustive()
    }
}
