//! The game state machine
//!
//! All mutation goes through the operations here; the UI reads state through
//! [`GameEngine::snapshot`]. Every accepted mutation is written to the
//! [`SaveStore`] so the game survives a restart at any point.

use crate::core::{Feedback, Word};
use crate::persist::{SaveStore, SavedGame};
use rand::prelude::IndexedRandom;

use super::CountdownTimer;

/// A game ends after this many guesses
pub const MAX_GUESSES: usize = 6;

/// Countdown for a timed game: 5 minutes
pub const TIMED_GAME_SECS: u32 = 300;

/// User-facing outcome of an engine operation
///
/// The UI maps these to styled messages; the engine never formats text for
/// the grid itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// The submission was not a valid 5-letter word; nothing changed
    InvalidGuess { expected: usize },
    /// The last guess matched the target
    Won { tries: usize },
    /// All six guesses used without a match
    Lost { target: String },
    /// The countdown reached zero
    TimedOut { target: String },
    /// The saved game was removed and a fresh game started
    SaveCleared,
}

/// Read-only view of the game for rendering
#[derive(Debug, Clone)]
pub struct Snapshot {
    /// Submitted guesses with their per-letter feedback, submission order
    pub rows: Vec<(String, Feedback)>,
    pub finished: bool,
    pub won: bool,
    pub timed_mode: bool,
    pub remaining_secs: u32,
    pub paused: bool,
}

/// The word-guessing state machine
///
/// Single-threaded: driven by user actions, a roughly once-per-second tick
/// from the host loop, and lifecycle notifications. The store is the only
/// shared resource and this engine is its only writer.
pub struct GameEngine<S: SaveStore> {
    store: S,
    pool: Vec<Word>,
    target: Word,
    guesses: Vec<Word>,
    finished: bool,
    timed_mode: bool,
    paused: bool,
    timer: CountdownTimer,
}

impl<S: SaveStore> GameEngine<S> {
    /// Restore the saved game, or start a fresh non-timed one
    ///
    /// An absent, malformed, or internally inconsistent blob falls back to a
    /// fresh game, which is persisted immediately. A restored timed game that
    /// has not finished resumes its countdown where it left off.
    ///
    /// # Panics
    /// Panics if `pool` is empty.
    pub fn load_or_new(store: S, pool: Vec<Word>) -> Self {
        assert!(!pool.is_empty(), "target word pool must not be empty");

        let restored = store
            .get()
            .and_then(|blob| SavedGame::decode(&blob))
            .and_then(Self::validate_saved);

        match restored {
            Some((target, guesses, finished, timed_mode, remaining_secs)) => {
                let mut timer = CountdownTimer::idle();
                if timed_mode {
                    timer.set_remaining(remaining_secs);
                    if !finished {
                        timer.resume();
                    }
                }
                Self {
                    store,
                    pool,
                    target,
                    guesses,
                    finished,
                    timed_mode,
                    paused: false,
                    timer,
                }
            }
            None => {
                let target = Self::pick_target(&pool);
                let mut engine = Self {
                    store,
                    pool,
                    target,
                    guesses: Vec::new(),
                    finished: false,
                    timed_mode: false,
                    paused: false,
                    timer: CountdownTimer::idle(),
                };
                engine.persist();
                engine
            }
        }
    }

    /// Start a fresh game, timed or not
    ///
    /// A timed game gets [`TIMED_GAME_SECS`] on the clock and a running
    /// timer; a plain game cancels any countdown. Always succeeds.
    pub fn new_game(&mut self, timed: bool) {
        self.target = Self::pick_target(&self.pool);
        self.guesses.clear();
        self.finished = false;
        self.timed_mode = timed;
        self.paused = false;
        if timed {
            self.timer.start(TIMED_GAME_SECS);
        } else {
            self.timer.reset();
        }
        self.persist();
    }

    /// Submit a guess
    ///
    /// Ignored once the game is finished. The raw input is trimmed and
    /// uppercased; anything that is not a valid 5-letter word yields
    /// [`Notice::InvalidGuess`] and changes nothing. An accepted guess is
    /// persisted, and ends the game on a match or on the sixth miss.
    pub fn submit_guess(&mut self, raw: &str) -> Option<Notice> {
        if self.finished {
            return None;
        }

        let Ok(guess) = Word::new(raw.trim()) else {
            return Some(Notice::InvalidGuess {
                expected: Word::LEN,
            });
        };

        self.guesses.push(guess.clone());

        let notice = if guess == self.target {
            self.finished = true;
            self.timer.cancel();
            Some(Notice::Won {
                tries: self.guesses.len(),
            })
        } else if self.guesses.len() >= MAX_GUESSES {
            self.finished = true;
            self.timer.cancel();
            Some(Notice::Lost {
                target: self.target.text().to_string(),
            })
        } else {
            None
        };

        self.persist();
        notice
    }

    /// Suppress countdown ticks without stopping the timer
    pub fn pause(&mut self) {
        self.paused = true;
        self.persist();
    }

    /// Lift the pause; a live timed game picks up its countdown unchanged
    pub fn resume(&mut self) {
        self.paused = false;
        if self.timed_mode && !self.finished {
            self.timer.resume();
        }
        self.persist();
    }

    /// Deliver one countdown second; the host calls this about once per second
    /// while [`Self::timer_running`] reports true
    ///
    /// A paused tick is skipped outright: no decrement, no write. An unpaused
    /// tick decrements by one and ends the game when the clock hits zero.
    pub fn tick(&mut self) -> Option<Notice> {
        if self.finished || !self.timer.is_running() {
            return None;
        }
        if self.paused {
            // Skipped, but the timer stays running and checks again next tick
            return None;
        }

        let notice = if self.timer.tick() {
            self.finished = true;
            self.timer.cancel();
            Some(Notice::TimedOut {
                target: self.target.text().to_string(),
            })
        } else {
            None
        };

        self.persist();
        notice
    }

    /// Remove the saved game and start over, non-timed
    pub fn clear_saved(&mut self) -> Notice {
        self.store.remove();
        self.new_game(false);
        Notice::SaveCleared
    }

    /// Share text: headline plus one emoji row per guess
    ///
    /// Pure; mutates nothing and delegates the actual share action to the
    /// caller's [`super::ShareSink`].
    #[must_use]
    pub fn share_score_text(&self) -> String {
        let tries = self.guesses.len();

        let headline = if self.won() {
            format!("Wordle: solved in {tries}/{MAX_GUESSES} tries")
        } else if self.finished {
            format!("Wordle: X/{MAX_GUESSES}")
        } else {
            format!("Wordle: {tries} tries so far")
        };

        let mut lines = vec![headline];
        for guess in &self.guesses {
            lines.push(Feedback::classify(guess, &self.target).to_emoji());
        }
        lines.join("\n")
    }

    /// Best-effort autosave for the host's backgrounded/teardown moments
    pub fn on_suspend(&mut self) {
        self.persist();
    }

    /// Whether the host should keep delivering ticks
    #[must_use]
    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    #[must_use]
    pub fn finished(&self) -> bool {
        self.finished
    }

    #[must_use]
    pub fn paused(&self) -> bool {
        self.paused
    }

    #[must_use]
    pub fn timed_mode(&self) -> bool {
        self.timed_mode
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.timer.remaining()
    }

    /// Read-only view for the rendering layer
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            rows: self
                .guesses
                .iter()
                .map(|g| {
                    (
                        g.text().to_string(),
                        Feedback::classify(g, &self.target),
                    )
                })
                .collect(),
            finished: self.finished,
            won: self.won(),
            timed_mode: self.timed_mode,
            remaining_secs: self.timer.remaining(),
            paused: self.paused,
        }
    }

    fn won(&self) -> bool {
        self.finished && self.guesses.last().is_some_and(|g| *g == self.target)
    }

    fn pick_target(pool: &[Word]) -> Word {
        pool.choose(&mut rand::rng())
            .expect("pool checked non-empty at construction")
            .clone()
    }

    /// Reject blobs whose fields break the game's invariants
    fn validate_saved(saved: SavedGame) -> Option<(Word, Vec<Word>, bool, bool, u32)> {
        let target = Word::new(&saved.target).ok()?;

        if saved.guesses.len() > MAX_GUESSES {
            return None;
        }
        // An unfinished game must still have a guess left to give
        if !saved.finished && saved.guesses.len() >= MAX_GUESSES {
            return None;
        }
        let guesses = saved
            .guesses
            .iter()
            .map(Word::new)
            .collect::<Result<Vec<_>, _>>()
            .ok()?;

        // A game that already hit the target cannot be unfinished
        if !saved.finished && guesses.contains(&target) {
            return None;
        }

        // Canonical "no timer" form carries zero seconds
        let remaining_secs = if saved.timed_mode {
            saved.remaining_secs
        } else {
            0
        };

        Some((
            target,
            guesses,
            saved.finished,
            saved.timed_mode,
            remaining_secs,
        ))
    }

    fn persist(&mut self) {
        let saved = SavedGame {
            target: self.target.text().to_string(),
            guesses: self.guesses.iter().map(|g| g.text().to_string()).collect(),
            finished: self.finished,
            timed_mode: self.timed_mode,
            remaining_secs: if self.timed_mode {
                self.timer.remaining()
            } else {
                0
            },
        };
        self.store.set(&saved.encode());
    }
}
