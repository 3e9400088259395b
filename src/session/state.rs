//! Game session: cards, phase, and remaining pairs.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck, FaceState};
use crate::timer::ResolutionTicket;

/// Where the current turn stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card picked; accepting input.
    Idle,
    /// One card face-up; accepting input.
    AwaitingSecond { first: usize },
    /// Two mismatched cards face-up until `ticket` fires; input is ignored.
    Resolving {
        first: usize,
        second: usize,
        ticket: ResolutionTicket,
    },
    /// Every pair found.
    Complete,
}

/// The complete mutable state of one game.
///
/// Owned by `GameController`; hosts get read-only access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession<V> {
    cards: Vec<Card<V>>,
    phase: Phase,
    remaining_pairs: usize,
}

impl<V> GameSession<V> {
    /// Lay out a freshly dealt deck face-down.
    pub fn new(deck: Deck<V>) -> Self
    where
        V: Clone,
    {
        let remaining_pairs = deck.pair_count();
        let cards = deck
            .iter()
            .enumerate()
            .map(|(position, identity)| Card::new(identity.clone(), position))
            .collect();

        Self {
            cards,
            phase: Phase::Idle,
            remaining_pairs,
        }
    }

    /// Number of cards on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card<V>> {
        self.cards.get(index)
    }

    #[must_use]
    pub fn cards(&self) -> &[Card<V>] {
        &self.cards
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pairs not yet matched.
    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.remaining_pairs
    }

    /// The first card picked this turn, if any.
    #[must_use]
    pub fn pending_pick(&self) -> Option<usize> {
        match self.phase {
            Phase::AwaitingSecond { first } | Phase::Resolving { first, .. } => Some(first),
            Phase::Idle | Phase::Complete => None,
        }
    }

    /// True while a mismatch is waiting to flip back.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Resolving { .. })
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Face states in board order.
    pub fn faces(&self) -> impl Iterator<Item = FaceState> + '_ {
        self.cards.iter().map(Card::face)
    }

    /// Check the structural invariants of the session.
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String>
    where
        V: PartialEq,
    {
        let unmatched = self.cards.iter().filter(|c| !c.is_matched()).count();
        if unmatched != self.remaining_pairs * 2 {
            return Err(format!(
                "{} unmatched cards but {} remaining pairs",
                unmatched, self.remaining_pairs
            ));
        }

        let revealed: Vec<usize> = self
            .cards
            .iter()
            .filter(|c| c.face() == FaceState::Revealed)
            .map(Card::position)
            .collect();

        match self.phase {
            Phase::Idle if self.remaining_pairs == 0 => Err("idle with no pairs left".to_string()),
            Phase::Idle | Phase::Complete if !revealed.is_empty() => {
                Err(format!("{:?} with revealed cards {:?}", self.phase, revealed))
            }
            Phase::Complete if self.remaining_pairs != 0 => {
                Err(format!("complete with {} pairs left", self.remaining_pairs))
            }
            Phase::AwaitingSecond { first } if revealed != [first] => {
                Err(format!("awaiting second pick after {} but revealed {:?}", first, revealed))
            }
            Phase::Resolving { first, second, .. } => {
                let mut expected = [first, second];
                expected.sort_unstable();
                if revealed != expected {
                    Err(format!("resolving {:?} but revealed {:?}", expected, revealed))
                } else if self.cards[first].identity() == self.cards[second].identity() {
                    Err(format!("resolving a matching pair {} and {}", first, second))
                } else {
                    Ok(())
                }
            }
            _ => Ok(()),
        }
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> &mut Card<V> {
        &mut self.cards[index]
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    /// Record a found pair. Returns the pairs still to find.
    pub(crate) fn record_match(&mut self, first: usize, second: usize) -> usize {
        self.cards[first].mark_matched();
        self.cards[second].mark_matched();
        self.remaining_pairs = self.remaining_pairs.saturating_sub(1);
        self.remaining_pairs
    }
}
