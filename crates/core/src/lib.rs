//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the 2048 rules and state management. It has **no
//! dependencies** on UI, terminal or I/O, making it:
//!
//! - **Deterministic**: Same seed and same moves produce identical games
//! - **Testable**: Every rule is checked against hand-built grids
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Allocation-free**: Moves and spawns work on stack arrays only
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile matrix with compress, merge and orientation transforms
//! - [`game_state`]: The engine: score, status, spawn and the move pipeline
//! - [`rng`]: Seeded uniform picker for spawn cells
//! - [`snapshot`]: Render-facing copy of the engine state
//!
//! # Game Rules
//!
//! - **Moves**: Tiles slide toward the move edge; equal neighbours merge once per move
//! - **Merge order**: Pairs are taken from the move edge inward (`2,2,2` → `4,2`)
//! - **Scoring**: Each merge adds the value of the new tile
//! - **Spawn**: After a move that changed the grid, a 2 appears in a random empty cell
//! - **Won**: Any tile reaches 2048 (no spawn on the winning move)
//! - **Lost**: Grid full and no equal horizontal or vertical neighbours
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameState;
//! use tui_2048_types::{Direction, GameAction, GameStatus};
//!
//! // Create and start a game
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.grid().tile_count(), 2);
//!
//! // Apply moves
//! let outcome = game.apply_move(Direction::Left);
//! if outcome.changed {
//!     assert!(outcome.spawned);
//! }
//! game.apply_action(GameAction::MoveUp);
//!
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod game_state;
pub mod grid;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::GameState;
pub use grid::{is_valid_tile, EmptyCells, Grid, Rows};
pub use rng::TileRng;
pub use snapshot::GameSnapshot;
