//! Property tests for the move pipeline.
//!
//! Invariants covered:
//! - A move adds at most one tile, and only when the grid changed.
//! - Every tile stays a power of two, minimum 2.
//! - Score moves by exactly the reported delta and never decreases.
//! - Tile sum grows by exactly the spawned tile (merges conserve value).
//! - Terminal statuses are sticky and freeze the grid.
//! - A Lost grid is full with no equal neighbours.
use proptest::prelude::*;
use tui_2048::core::{GameState, Grid};
use tui_2048::types::{Direction, GameStatus, GRID_SIZE, SPAWN_TILE, WIN_TILE};

fn tile() -> impl Strategy<Value = u32> {
    // 0 (empty) or 2^1..=2^10, so the generated grid itself is never already won.
    prop_oneof![Just(0u32), (1u32..=10).prop_map(|e| 1u32 << e)]
}

fn grid() -> impl Strategy<Value = Grid> {
    prop::array::uniform4(prop::array::uniform4(tile())).prop_map(|rows| Grid::from_rows(rows).unwrap())
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![
        Just(Direction::Up),
        Just(Direction::Down),
        Just(Direction::Left),
        Just(Direction::Right),
    ]
}

fn tile_sum(grid: &Grid) -> u64 {
    grid.rows().iter().flatten().map(|&v| v as u64).sum()
}

fn assert_tiles_valid(grid: &Grid) {
    for &v in grid.rows().iter().flatten() {
        assert!(v == 0 || (v >= 2 && v.is_power_of_two()), "bad tile {}", v);
    }
}

proptest! {
    #[test]
    fn single_move_invariants(seed in any::<u64>(), g in grid(), dir in direction()) {
        let mut state = GameState::with_grid(seed, g);
        let was_terminal = state.status().is_terminal();
        let before_tiles = state.grid().tile_count();
        let before_sum = tile_sum(state.grid());
        let before_score = state.score();

        let outcome = state.apply_move(dir);

        prop_assert!(state.grid().tile_count() <= before_tiles + 1);
        prop_assert_eq!(state.score(), before_score + outcome.score_delta);
        prop_assert!(!outcome.spawned || outcome.changed);
        assert_tiles_valid(state.grid());

        let expected_sum = before_sum + if outcome.spawned { SPAWN_TILE as u64 } else { 0 };
        prop_assert_eq!(tile_sum(state.grid()), expected_sum);

        if !outcome.changed {
            prop_assert_eq!(state.grid(), &g);
        }
        if was_terminal {
            prop_assert_eq!(outcome.changed, false);
            prop_assert_eq!(state.grid(), &g);
        }
        if state.status() == GameStatus::Won {
            prop_assert!(state.grid().contains(WIN_TILE));
        }
    }

    #[test]
    fn rollout_invariants(seed in any::<u64>(), dirs in prop::collection::vec(direction(), 1..200)) {
        let mut state = GameState::new(seed);
        state.start();

        for dir in dirs {
            let status_before = state.status();
            let score_before = state.score();
            let grid_before = *state.grid();

            let outcome = state.apply_move(dir);

            prop_assert!(state.score() >= score_before);
            prop_assert_eq!(state.score() - score_before, outcome.score_delta);
            assert_tiles_valid(state.grid());

            if status_before.is_terminal() {
                prop_assert_eq!(state.status(), status_before);
                prop_assert_eq!(state.grid(), &grid_before);
            }
            if state.status() == GameStatus::Lost {
                prop_assert!(!state.grid().has_empty());
                prop_assert!(!state.grid().can_merge());
            }
        }
    }

    #[test]
    fn can_move_agrees_with_apply_move(seed in any::<u64>(), g in grid(), dir in direction()) {
        let mut state = GameState::with_grid(seed, g);
        prop_assume!(!state.status().is_terminal());

        let predicted = state.can_move(dir);
        let outcome = state.apply_move(dir);
        prop_assert_eq!(predicted, outcome.changed);
    }
}

#[test]
fn spawn_is_roughly_uniform_over_empty_cells() {
    let mut counts = [[0u32; GRID_SIZE]; GRID_SIZE];
    let mut state = GameState::new(31337);
    for _ in 0..16_000 {
        state.reset();
        assert!(state.spawn_random_tile());
        for (r, row) in state.grid().rows().iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if v != 0 {
                    counts[r][c] += 1;
                }
            }
        }
    }
    // 1000 expected per cell.
    for row in counts {
        for n in row {
            assert!((800..1200).contains(&n), "cell count {} far from uniform", n);
        }
    }
}
