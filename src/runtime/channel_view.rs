//! Forward rendering instructions to another thread.

use tokio::sync::mpsc;
use tracing::trace;

use crate::view::{BoardView, ViewCommand};

/// Sends each instruction to a UI thread. A closed receiver means the view
/// has gone away; instructions are then dropped.
impl<V: Clone> BoardView<V> for mpsc::UnboundedSender<ViewCommand<V>> {
    fn render_front(&mut self, index: usize, identity: &V) {
        forward(self, ViewCommand::RenderFront {
            index,
            identity: identity.clone(),
        });
    }

    fn render_back(&mut self, index: usize) {
        forward(self, ViewCommand::RenderBack { index });
    }

    fn disable(&mut self, index: usize) {
        forward(self, ViewCommand::Disable { index });
    }

    fn set_status_message(&mut self, text: &str) {
        forward(self, ViewCommand::SetStatusMessage { text: text.to_string() });
    }
}

fn forward<V>(sender: &mpsc::UnboundedSender<ViewCommand<V>>, command: ViewCommand<V>) {
    if sender.send(command).is_err() {
        trace!("view receiver closed; dropping instruction");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwards_commands() {
        let (mut tx, mut rx) = mpsc::unbounded_channel::<ViewCommand<char>>();
        tx.render_front(1, &'a');
        tx.set_status_message("hi");

        assert_eq!(rx.try_recv().unwrap(), ViewCommand::RenderFront { index: 1, identity: 'a' });
        assert_eq!(
            rx.try_recv().unwrap(),
            ViewCommand::SetStatusMessage { text: "hi".to_string() }
        );
    }

    #[test]
    fn test_closed_receiver_is_ignored() {
        let (mut tx, rx) = mpsc::unbounded_channel::<ViewCommand<char>>();
        drop(rx);
        tx.render_back(0);
        tx.disable(0);
    }
}
