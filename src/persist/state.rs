//! Serialized form of a game in progress
//!
//! The blob format uses camelCase field names. Every field except `target`
//! defaults when missing, so older or partially written blobs still restore.

use serde::{Deserialize, Serialize};

/// The persisted game snapshot
///
/// # Examples
/// ```
/// use wordle_tui::persist::SavedGame;
///
/// let saved: SavedGame = serde_json::from_str(r#"{"target":"CRANE"}"#).unwrap();
/// assert_eq!(saved.target, "CRANE");
/// assert!(saved.guesses.is_empty());
/// assert!(!saved.timed_mode);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedGame {
    /// The secret word, 5 uppercase letters
    pub target: String,
    /// Submitted guesses, in submission order
    #[serde(default)]
    pub guesses: Vec<String>,
    /// True once the game ended by win, attempts, or timeout
    #[serde(default)]
    pub finished: bool,
    /// Whether a countdown applies
    #[serde(default)]
    pub timed_mode: bool,
    /// Seconds left on the countdown at last save
    #[serde(default)]
    pub remaining_secs: u32,
}

impl SavedGame {
    /// Serialize to the JSON blob format
    ///
    /// # Panics
    /// Will not panic - the struct contains no non-string map keys or other
    /// constructs `serde_json` can reject.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::to_string(self).expect("SavedGame serializes infallibly")
    }

    /// Parse a JSON blob, `None` if malformed
    #[must_use]
    pub fn decode(blob: &str) -> Option<Self> {
        serde_json::from_str(blob).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SavedGame {
        SavedGame {
            target: "CRANE".to_string(),
            guesses: vec!["SLATE".to_string(), "BRICK".to_string()],
            finished: false,
            timed_mode: true,
            remaining_secs: 178,
        }
    }

    #[test]
    fn round_trip_preserves_all_fields() {
        let saved = sample();
        let decoded = SavedGame::decode(&saved.encode()).unwrap();
        assert_eq!(decoded, saved);
    }

    #[test]
    fn field_names_are_camel_case() {
        let blob = sample().encode();
        assert!(blob.contains("\"timedMode\""));
        assert!(blob.contains("\"remainingSecs\""));
        assert!(blob.contains("\"guesses\""));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let saved = SavedGame::decode(r#"{"target":"CRANE"}"#).unwrap();
        assert_eq!(saved.target, "CRANE");
        assert!(saved.guesses.is_empty());
        assert!(!saved.finished);
        assert!(!saved.timed_mode);
        assert_eq!(saved.remaining_secs, 0);
    }

    #[test]
    fn malformed_blob_decodes_to_none() {
        assert!(SavedGame::decode("").is_none());
        assert!(SavedGame::decode("not json").is_none());
        assert!(SavedGame::decode("{}").is_none()); // target is required
        assert!(SavedGame::decode(r#"{"target":5}"#).is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let saved =
            SavedGame::decode(r#"{"target":"CRANE","legacyHighScore":12,"finished":true}"#)
                .unwrap();
        assert!(saved.finished);
    }
}
