//! Word lists for the game
//!
//! Provides the embedded target list compiled into the binary, plus a loader
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{TARGETS, TARGETS_COUNT};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_count_matches_const() {
        assert_eq!(TARGETS.len(), TARGETS_COUNT);
    }

    #[test]
    fn targets_list_is_not_empty() {
        assert!(TARGETS_COUNT > 0);
    }

    #[test]
    fn targets_are_valid_words() {
        // All targets should be 5 letters, lowercase in the list file
        for &word in TARGETS {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn targets_contain_no_duplicates() {
        let unique: std::collections::HashSet<_> = TARGETS.iter().collect();
        assert_eq!(unique.len(), TARGETS.len());
    }
}
