//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! The classic 2048 playfield:
//!
//! - **Size**: 4x4 cells, addressed as `(row, col)` with `(0, 0)` top-left
//! - **Empty cell**: value `0`
//! - **Tiles**: powers of two, starting at [`SPAWN_TILE`]
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRID_SIZE` | 4 | Rows and columns |
//! | `CELL_COUNT` | 16 | Total cells |
//! | `SPAWN_TILE` | 2 | Value of every spawned tile |
//! | `INITIAL_TILES` | 2 | Tiles spawned by the restart sequence |
//! | `WIN_TILE` | 2048 | Reaching this tile wins the game |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, GameStatus, GRID_SIZE, WIN_TILE};
//!
//! // Actions carry their direction
//! assert_eq!(GameAction::MoveLeft.direction(), Some(Direction::Left));
//! assert_eq!(GameAction::Restart.direction(), None);
//!
//! // Terminal statuses have a message for the player
//! assert!(GameStatus::Won.is_terminal());
//! assert_eq!(GameStatus::Lost.message(), Some("Game Over!!!"));
//!
//! assert_eq!(GRID_SIZE, 4);
//! assert_eq!(WIN_TILE, 2048);
//! ```

/// Grid width and height in cells
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Value written by every random spawn (never 4)
pub const SPAWN_TILE: u32 = 2;

/// Number of tiles placed by the restart sequence
pub const INITIAL_TILES: usize = 2;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Hint shown under the terminal status message
pub const RESTART_HINT: &str = "Press Enter to restart.";


/// The four move directions
///
/// Every direction is processed as a "Left" move on a normalized grid:
/// - **Left**: no transform
/// - **Right**: rows reversed
/// - **Up**: transposed
/// - **Down**: transposed, then rows reversed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in a fixed order (Up, Down, Left, Right)
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Whether the move runs along columns (needs a transpose)
    pub fn is_vertical(&self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Whether the move runs toward the far edge (needs a row reversal)
    pub fn is_reversed(&self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// Events the engine accepts
///
/// Produced by the input layer; anything it cannot map is dropped before
/// reaching the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles up
    MoveUp,
    /// Slide all tiles down
    MoveDown,
    /// Slide all tiles left
    MoveLeft,
    /// Slide all tiles right
    MoveRight,
    /// Start a new game (works in any status)
    Restart,
}

impl GameAction {
    /// The move direction, or `None` for non-move actions
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveUp => Some(Direction::Up),
            GameAction::MoveDown => Some(Direction::Down),
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::Restart => None,
        }
    }
}

/// Game lifecycle
///
/// `InProgress` is initial. `Won` and `Lost` are terminal: moves are ignored
/// until a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }

    /// Player-facing message for terminal statuses
    pub fn message(&self) -> Option<&'static str> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won => Some("You Won!!"),
            GameStatus::Lost => Some("Game Over!!!"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::InProgress => "in_progress",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Result of one move attempt.
///
/// `changed` is the compress-or-merge flag of the first pass; `spawned` is only
/// true when `changed` was and an empty cell was available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MoveOutcome {
    pub changed: bool,
    pub score_delta: u32,
    pub spawned: bool,
}
