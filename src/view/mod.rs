//! Outbound rendering instructions.
//!
//! The controller never touches widgets. It tells a `BoardView` what to show
//! and the host maps that onto buttons, labels, or terminal cells.

pub mod recording;
pub mod sink;

pub use recording::RecordingView;
pub use sink::{BoardView, ViewCommand};
