//! Terminal input module.
//!
//! Maps `crossterm` key events onto [`crate::types::GameAction`]. Every
//! key-down is one discrete action; there is no auto-shift or repeat timing
//! of our own.

pub mod map;

pub use mini_tetris_types as types;

pub use map::{handle_key_event, is_key_down, should_quit};
