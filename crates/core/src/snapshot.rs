use crate::grid::Rows;
use crate::types::{GameStatus, MoveOutcome, GRID_SIZE};

/// Render-facing copy of the engine state.
///
/// Plain `Copy` data so a renderer can keep one around without borrowing the
/// engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid: Rows,
    pub score: u32,
    pub status: GameStatus,
    pub highest_tile: u32,
    pub seed: u64,
    pub episode_id: u32,
    pub moves: u32,
    pub last_outcome: Option<MoveOutcome>,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            status: GameStatus::InProgress,
            highest_tile: 0,
            seed: 0,
            episode_id: 0,
            moves: 0,
            last_outcome: None,
        }
    }
}
