//! Status-line texts.

pub const WELCOME: &str = "Welcome! Click two cards to find a matching pair.";
pub const SELECT_ANOTHER: &str = "Now select another card.";
pub const NOT_A_MATCH: &str = "Not a match. Cards will flip back.";
pub const TRY_AGAIN: &str = "Try again! Find all the matching pairs.";
pub const COMPLETE: &str = "Congratulations! You matched all the pairs!";

/// Progress after a match that did not end the game.
#[must_use]
pub fn progress(remaining_pairs: usize) -> String {
    match remaining_pairs {
        1 => "Nice match! 1 pair left.".to_string(),
        n => format!("Nice match! {} pairs left.", n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        assert_eq!(progress(1), "Nice match! 1 pair left.");
        assert_eq!(progress(9), "Nice match! 9 pairs left.");
    }

    #[test]
    fn test_first_pick_prompt() {
        assert!(SELECT_ANOTHER.to_lowercase().contains("select another"));
    }
}
