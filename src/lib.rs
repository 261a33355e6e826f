//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under one roof as
//! `tui_2048::{core,input,term,types}`, and holds the startup configuration
//! and logging setup used by the binary.

pub mod config;
pub mod logging;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
