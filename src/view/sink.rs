//! The view-layer contract.

use serde::{Deserialize, Serialize};

/// Receiver of rendering instructions.
///
/// Every method is fire-and-forget; the controller expects no reply.
pub trait BoardView<V> {
    /// Show the face for this card's identity.
    fn render_front(&mut self, index: usize, identity: &V);

    /// Show the card back.
    fn render_back(&mut self, index: usize);

    /// Make a matched card permanently non-interactive.
    fn disable(&mut self, index: usize);

    /// Replace the single status line.
    fn set_status_message(&mut self, text: &str);

    /// Apply a recorded instruction.
    fn apply(&mut self, command: &ViewCommand<V>) {
        match command {
            ViewCommand::RenderFront { index, identity } => self.render_front(*index, identity),
            ViewCommand::RenderBack { index } => self.render_back(*index),
            ViewCommand::Disable { index } => self.disable(*index),
            ViewCommand::SetStatusMessage { text } => self.set_status_message(text),
        }
    }
}

impl<V, T: BoardView<V> + ?Sized> BoardView<V> for &mut T {
    fn render_front(&mut self, index: usize, identity: &V) {
        (**self).render_front(index, identity);
    }

    fn render_back(&mut self, index: usize) {
        (**self).render_back(index);
    }

    fn disable(&mut self, index: usize) {
        (**self).disable(index);
    }

    fn set_status_message(&mut self, text: &str) {
        (**self).set_status_message(text);
    }
}

/// One rendering instruction as data.
///
/// Used to queue instructions across threads or record them for tests.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewCommand<V> {
    RenderFront { index: usize, identity: V },
    RenderBack { index: usize },
    Disable { index: usize },
    SetStatusMessage { text: String },
}
