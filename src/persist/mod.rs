//! Saved-game storage
//!
//! One serialized blob under one fixed key. Writes are best-effort: a failed
//! write or remove is swallowed, and an unreadable or corrupt blob reads back
//! as `None` so the caller falls back to a fresh game.

mod state;
mod store;

pub use state::SavedGame;
pub use store::{FileStore, MemoryStore, SaveStore};
