//! Resolution tickets.

use serde::{Deserialize, Serialize};

/// Identifies one pending mismatch resolution.
///
/// Serials increase monotonically within a game, so a ticket that arrives
/// after its mismatch was already resolved can be told apart from the
/// current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResolutionTicket(u64);

impl ResolutionTicket {
    pub(crate) const fn new(serial: u64) -> Self {
        Self(serial)
    }

    /// The ticket's serial number.
    #[must_use]
    pub const fn serial(self) -> u64 {
        self.0
    }

    #[must_use]
    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl std::fmt::Display for ResolutionTicket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Ticket({})", self.0)
    }
}
