//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`]s. 2048 is turn-based, so there is
//! no auto-repeat handling: one key press is one action.

pub mod map;

pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
