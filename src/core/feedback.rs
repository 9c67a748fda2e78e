//! Per-letter feedback classification
//!
//! Feedback is computed for rendering and sharing, never stored. Each position
//! is judged independently against full target membership:
//! - Correct: the letter sits at this exact position in the target
//! - Present: the letter occurs somewhere in the target, but not here
//! - Absent: the letter does not occur in the target at all
//!
//! There is no duplicate-letter count limiting: a letter repeated in the guess
//! is marked Present at every non-exact position as long as the target contains
//! it at least once. This matches the original game's rule, not the stricter
//! count-aware standard Wordle rule.

use super::Word;

/// Classification of a single guess letter against the target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterFeedback {
    /// Right letter, right position
    Correct,
    /// Letter occurs in the target, wrong position
    Present,
    /// Letter does not occur in the target
    Absent,
}

/// Feedback for one full guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterFeedback; 5]);

impl Feedback {
    /// Classify `guess` against `target`, one letter at a time
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, LetterFeedback, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let guess = Word::new("dance").unwrap();
    /// let feedback = Feedback::classify(&guess, &target);
    ///
    /// // D(absent) A(present) N(present) C(present) E(correct)
    /// assert_eq!(feedback.letters()[4], LetterFeedback::Correct);
    /// ```
    #[must_use]
    pub fn classify(guess: &Word, target: &Word) -> Self {
        let mut result = [LetterFeedback::Absent; 5];

        // Allow: Index needed to access guess[i], target[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..5 {
            let letter = guess.char_at(i);
            result[i] = if letter == target.char_at(i) {
                LetterFeedback::Correct
            } else if target.has_letter(letter) {
                LetterFeedback::Present
            } else {
                LetterFeedback::Absent
            };
        }

        Self(result)
    }

    /// The per-position classifications, in guess order
    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; 5] {
        &self.0
    }

    /// Check if every position is Correct (winning guess)
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.0.iter().all(|&l| l == LetterFeedback::Correct)
    }

    /// Convert the row to an emoji string for share text
    ///
    /// # Examples
    /// ```
    /// use wordle_tui::core::{Feedback, Word};
    ///
    /// let target = Word::new("crane").unwrap();
    /// let feedback = Feedback::classify(&target, &target);
    /// assert_eq!(feedback.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        let mut result = String::with_capacity(20);
        for letter in &self.0 {
            result.push(match letter {
                LetterFeedback::Correct => '🟩',
                LetterFeedback::Present => '🟨',
                LetterFeedback::Absent => '⬜',
            });
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::LetterFeedback::{Absent, Correct, Present};

    #[test]
    fn feedback_exact_match_all_correct() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::classify(&word, &word);

        assert_eq!(feedback.letters(), &[Correct; 5]);
        assert!(feedback.is_win());
    }

    #[test]
    fn feedback_no_shared_letters_all_absent() {
        let guess = Word::new("limbo").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::classify(&guess, &target);

        assert_eq!(feedback.letters(), &[Absent; 5]);
        assert!(!feedback.is_win());
    }

    #[test]
    fn feedback_dance_vs_crane() {
        // D(absent) A(present) N(present) C(present) E(correct)
        let guess = Word::new("dance").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::classify(&guess, &target);

        assert_eq!(
            feedback.letters(),
            &[Absent, Present, Present, Present, Correct]
        );
    }

    #[test]
    fn feedback_repeated_letter_no_count_limit() {
        // EERIE vs CRANE: the target has one E, yet every non-exact E in the
        // guess still classifies as Present. E(present) E(present) R(present)
        // I(absent) E(correct).
        let guess = Word::new("eerie").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::classify(&guess, &target);

        assert_eq!(
            feedback.letters(),
            &[Present, Present, Present, Absent, Correct]
        );
    }

    #[test]
    fn feedback_mixed_positions() {
        // SPEED vs ERASE: S(present) P(absent) E(present) E(present) D(absent)
        let guess = Word::new("speed").unwrap();
        let target = Word::new("erase").unwrap();
        let feedback = Feedback::classify(&guess, &target);

        assert_eq!(
            feedback.letters(),
            &[Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn feedback_to_emoji() {
        let guess = Word::new("dance").unwrap();
        let target = Word::new("crane").unwrap();
        let feedback = Feedback::classify(&guess, &target);

        assert_eq!(feedback.to_emoji(), "⬜🟨🟨🟨🟩");
    }

    #[test]
    fn feedback_is_win_requires_every_position() {
        // CRANE vs CRANK: four greens and one absent is not a win
        let guess = Word::new("crane").unwrap();
        let target = Word::new("crank").unwrap();
        let feedback = Feedback::classify(&guess, &target);

        assert!(!feedback.is_win());
        assert_eq!(feedback.letters()[4], Absent);
    }
}
