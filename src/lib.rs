//! Wordle TUI
//!
//! A terminal Wordle game with timed mode, pause/resume, and games that persist
//! across restarts.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tui::core::{Feedback, Word};
//!
//! let target = Word::new("crane").unwrap();
//! let guess = Word::new("dance").unwrap();
//!
//! let feedback = Feedback::classify(&guess, &target);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game state machine and countdown timer
pub mod engine;

// Saved-game storage
pub mod persist;

// Word lists
pub mod wordlists;

// Interactive TUI interface
pub mod interactive;
