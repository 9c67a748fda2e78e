//! Game state machine and countdown timer
//!
//! [`GameEngine`] owns all game state and is driven by discrete external
//! triggers: user actions, a roughly once-per-second tick, and lifecycle
//! notifications. The UI layer observes it through [`GameEngine::snapshot`]
//! and the [`Notice`] values operations return.

mod game;
mod timer;

pub use game::{GameEngine, MAX_GUESSES, Notice, Snapshot, TIMED_GAME_SECS};
pub use timer::CountdownTimer;

/// Outbound share action, fire-and-forget
///
/// A terminal has no OS share sheet; implementations print or capture the
/// text. No failure is reported back.
pub trait ShareSink {
    fn share(&mut self, text: &str);
}
