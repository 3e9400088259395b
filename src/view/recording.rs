//! A view that remembers what it was told.

use super::sink::{BoardView, ViewCommand};

/// Records every instruction in order.
///
/// Useful for headless hosts and tests; replay into a real view with
/// `BoardView::apply`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordingView<V> {
    commands: Vec<ViewCommand<V>>,
}

impl<V> Default for RecordingView<V> {
    fn default() -> Self {
        Self { commands: Vec::new() }
    }
}

impl<V> RecordingView<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All instructions received so far.
    #[must_use]
    pub fn commands(&self) -> &[ViewCommand<V>] {
        &self.commands
    }

    /// Take the recorded instructions, leaving the log empty.
    pub fn drain(&mut self) -> Vec<ViewCommand<V>> {
        std::mem::take(&mut self.commands)
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// The most recent status message.
    #[must_use]
    pub fn last_message(&self) -> Option<&str> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::SetStatusMessage { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Every status message in order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ViewCommand::SetStatusMessage { text } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl<V: Clone> BoardView<V> for RecordingView<V> {
    fn render_front(&mut self, index: usize, identity: &V) {
        self.commands.push(ViewCommand::RenderFront {
            index,
            identity: identity.clone(),
        });
    }

    fn render_back(&mut self, index: usize) {
        self.commands.push(ViewCommand::RenderBack { index });
    }

    fn disable(&mut self, index: usize) {
        self.commands.push(ViewCommand::Disable { index });
    }

    fn set_status_message(&mut self, text: &str) {
        self.commands.push(ViewCommand::SetStatusMessage { text: text.to_string() });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut view: RecordingView<&str> = RecordingView::new();
        view.render_back(0);
        view.render_front(1, &"crab");
        view.set_status_message("hello");
        view.disable(1);
        view.set_status_message("bye");

        assert_eq!(
            view.commands(),
            &[
                ViewCommand::RenderBack { index: 0 },
                ViewCommand::RenderFront { index: 1, identity: "crab" },
                ViewCommand::SetStatusMessage { text: "hello".to_string() },
                ViewCommand::Disable { index: 1 },
                ViewCommand::SetStatusMessage { text: "bye".to_string() },
            ]
        );
        assert_eq!(view.messages(), vec!["hello", "bye"]);
        assert_eq!(view.last_message(), Some("bye"));
    }

    #[test]
    fn test_apply_replays() {
        let mut source: RecordingView<u8> = RecordingView::new();
        source.render_front(3, &7);
        source.set_status_message("x");

        let mut replay: RecordingView<u8> = RecordingView::new();
        for command in source.commands() {
            replay.apply(command);
        }

        assert_eq!(source, replay);
    }

    #[test]
    fn test_drain() {
        let mut view: RecordingView<u8> = RecordingView::new();
        view.render_back(0);
        assert_eq!(view.drain().len(), 1);
        assert!(view.commands().is_empty());
        assert_eq!(view.last_message(), None);
    }
}
