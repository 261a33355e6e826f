//! Game state module - the 2048 engine
//!
//! Ties together the grid, the spawn RNG and scoring. Each call to
//! [`GameState::apply_move`] runs the full pipeline to completion:
//! normalize, compress, merge, compress, denormalize, terminal check, spawn,
//! terminal check.

use tracing::{debug, info};

use crate::snapshot::GameSnapshot;
use crate::{Grid, TileRng};
use crate::types::*;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    rng: TileRng,
    score: u32,
    status: GameStatus,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Moves in the current episode that changed the grid.
    moves: u32,
    /// Outcome of the most recent move (consumed by renderers).
    last_outcome: Option<MoveOutcome>,
    started: bool,
}

impl GameState {
    /// Create a new game with the given RNG seed.
    ///
    /// The grid starts empty; call [`GameState::start`] to place the opening tiles.
    pub fn new(seed: u64) -> Self {
        Self {
            grid: Grid::new(),
            rng: TileRng::new(seed),
            score: 0,
            status: GameStatus::InProgress,
            episode_id: 0,
            moves: 0,
            last_outcome: None,
            started: false,
        }
    }

    /// Create a game over an existing grid.
    ///
    /// The game counts as started and its status is evaluated right away.
    /// Tile values were already checked by [`Grid::from_rows`].
    pub fn with_grid(seed: u64, grid: Grid) -> Self {
        let mut state = Self::new(seed);
        state.grid = grid;
        state.started = true;
        state.evaluate_status();
        state
    }

    /// Run the restart sequence once: empty grid plus two spawned tiles.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.begin_episode();
    }

    /// Start a fresh episode, whatever the current status.
    ///
    /// The RNG keeps its stream, so consecutive episodes differ.
    pub fn restart(&mut self) {
        self.episode_id = self.episode_id.wrapping_add(1);
        self.started = true;
        self.begin_episode();
    }

    fn begin_episode(&mut self) {
        self.reset();
        for _ in 0..INITIAL_TILES {
            self.spawn_random_tile();
        }
        info!(
            seed = self.rng.seed(),
            episode = self.episode_id,
            restart = self.episode_id > 0,
            "game started"
        );
    }

    /// Clear the grid, score and status.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.status = GameStatus::InProgress;
        self.moves = 0;
        self.last_outcome = None;
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid = *self.grid.rows();
        out.score = self.score;
        out.status = self.status;
        out.highest_tile = self.grid.highest_tile();
        out.seed = self.rng.seed();
        out.episode_id = self.episode_id;
        out.moves = self.moves;
        out.last_outcome = self.last_outcome;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Place a 2 in a uniformly chosen empty cell.
    ///
    /// Returns false (and changes nothing) when the grid is full.
    pub fn spawn_random_tile(&mut self) -> bool {
        let empty = self.grid.empty_cells();
        let Some(i) = self.rng.pick(empty.len()) else {
            debug!("spawn skipped, grid full");
            return false;
        };
        let (row, col) = empty[i];
        self.grid.set(row, col, SPAWN_TILE)
    }

    /// Apply one directional move.
    ///
    /// Ignored (unchanged outcome, no RNG draw) once the game is Won or Lost.
    pub fn apply_move(&mut self, dir: Direction) -> MoveOutcome {
        if self.status.is_terminal() {
            return MoveOutcome::default();
        }

        self.grid.normalize(dir);
        let compressed = self.grid.compress();
        let (merged, gained) = self.grid.merge();
        // The second pass only closes merge gaps; it does not feed `changed`.
        self.grid.compress();
        self.grid.denormalize(dir);

        let changed = compressed || merged;
        self.score = self.score.saturating_add(gained);

        let mut outcome = MoveOutcome {
            changed,
            score_delta: gained,
            spawned: false,
        };

        if changed {
            self.moves = self.moves.wrapping_add(1);
        }

        // Won is decided before spawning; a won grid gets no new tile.
        self.evaluate_status();
        if changed && !self.status.is_terminal() {
            outcome.spawned = self.spawn_random_tile();
            self.evaluate_status();
        }

        debug!(
            direction = dir.as_str(),
            changed,
            delta = gained,
            spawned = outcome.spawned,
            "move applied"
        );

        self.last_outcome = Some(outcome);
        outcome
    }

    /// Apply a game action.
    ///
    /// Moves return their outcome; `Restart` returns None.
    pub fn apply_action(&mut self, action: GameAction) -> Option<MoveOutcome> {
        match action.direction() {
            Some(dir) => Some(self.apply_move(dir)),
            None => {
                self.restart();
                None
            }
        }
    }

    /// Re-check the terminal conditions against the current grid.
    ///
    /// Terminal statuses are sticky; only a reset clears them.
    pub fn evaluate_status(&mut self) -> GameStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let next = if self.grid.contains(WIN_TILE) {
            GameStatus::Won
        } else if self.grid.is_stuck() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        };

        if next != self.status {
            info!(
                status = next.as_str(),
                score = self.score,
                highest_tile = self.grid.highest_tile(),
                moves = self.moves,
                "game finished"
            );
            self.status = next;
        }
        self.status
    }

    /// Whether a move in `dir` would change the grid (without applying it)
    pub fn can_move(&self, dir: Direction) -> bool {
        let mut probe = self.grid;
        probe.normalize(dir);
        let compressed = probe.compress();
        let (merged, _) = probe.merge();
        compressed || merged
    }
}
