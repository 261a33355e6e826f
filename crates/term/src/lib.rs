//! Terminal "game renderer" module.
//!
//! Renders the 2048 board into a simple framebuffer that is flushed to a
//! terminal backend. No widget toolkit is involved.
//!
//! Goals:
//! - Keep `core` deterministic and free of I/O
//! - Keep the view pure so frames can be asserted cell by cell in tests
//! - Only rewrite what changed between frames

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_style, AnchorY, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
