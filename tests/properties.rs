//! Property-based tests for the grid and the session.
//!
//! Full-grid evaluation in `GameOfLifeRules::evolve` is the reference the
//! incremental stepper is checked against.

use game_of_life_session::game_of_life::{GameOfLifeRules, Grid};
use game_of_life_session::seed::SeedDescriptor;
use game_of_life_session::session::{ManualScheduler, NullObserver, Session};
use proptest::prelude::*;

/// Grid dimensions and an initial generation
fn arb_soup() -> impl Strategy<Value = (usize, usize, Vec<bool>)> {
    (1usize..=16, 1usize..=16).prop_flat_map(|(width, height)| {
        (
            Just(width),
            Just(height),
            prop::collection::vec(any::<bool>(), width * height),
        )
    })
}

fn seeded((width, height, cells): &(usize, usize, Vec<bool>)) -> Grid {
    let mut grid = Grid::new(*width, *height).unwrap();
    grid.seed(|index, _| cells[index]);
    grid
}

// =============================================================================
// Incremental stepping
// =============================================================================

proptest! {
    /// Every step equals full-grid evaluation of the previous generation
    #[test]
    fn prop_step_matches_full_grid(soup in arb_soup(), generations in 1usize..12) {
        let mut grid = seeded(&soup);
        for _ in 0..generations {
            prop_assert_eq!(GameOfLifeRules::checked_step(&mut grid), None);
        }
    }

    /// Direct edits between steps never desynchronise the active set
    #[test]
    fn prop_step_after_edits(soup in arb_soup(), edits in prop::collection::vec(any::<prop::sample::Index>(), 0..10)) {
        let mut grid = seeded(&soup);
        grid.step();
        for edit in &edits {
            grid.toggle(edit.index(grid.capacity())).unwrap();
        }
        prop_assert_eq!(GameOfLifeRules::checked_step(&mut grid), None);
    }

    /// Active = alive or adjacent to a live cell, nothing else
    #[test]
    fn prop_active_set_definition(soup in arb_soup()) {
        let mut grid = seeded(&soup);
        grid.step();
        for index in 0..grid.capacity() {
            let cell = grid.cell(index).unwrap();
            let near_life = cell.alive
                || grid.neighbors(index).unwrap().iter().any(|&n| grid.cell(n).unwrap().alive);
            prop_assert_eq!(cell.is_active, near_life, "cell {}", index);
        }
        prop_assert_eq!(
            grid.status().active_count,
            (0..grid.capacity()).filter(|&i| grid.cell(i).unwrap().is_active).count()
        );
    }

    /// The changed count is the number of flipped cells
    #[test]
    fn prop_changed_count(soup in arb_soup()) {
        let mut grid = seeded(&soup);
        let before = grid.states();
        let status = grid.step();
        let flipped = before.iter().zip(grid.states()).filter(|(a, b)| **a != *b).count();
        prop_assert_eq!(status.changed_count, flipped);
        prop_assert_eq!(status.alive_count, grid.live_indices().count());
    }
}

// =============================================================================
// Coordinates and clearing
// =============================================================================

proptest! {
    /// absolute_index([i % width, i / width]) == i
    #[test]
    fn prop_absolute_index_left_inverse(width in 1usize..=200, height in 1usize..=200, seed in any::<prop::sample::Index>()) {
        let grid = Grid::new(width, height).unwrap();
        let index = seed.index(grid.capacity());
        let coord = [(index % width) as i64, (index / width) as i64];
        prop_assert_eq!(grid.absolute_index(coord), Some(index));
    }

    /// Coordinates outside the grid never resolve
    #[test]
    fn prop_outside_coordinates(width in 1usize..=50, height in 1usize..=50, dx in 0i64..50, dy in 0i64..50) {
        let grid = Grid::new(width, height).unwrap();
        prop_assert_eq!(grid.absolute_index([width as i64 + dx, dy]), None);
        prop_assert_eq!(grid.absolute_index([dx, height as i64 + dy]), None);
        prop_assert_eq!(grid.absolute_index([-1 - dx, dy]), None);
    }

    /// Clearing, or seeding constant(0), leaves nothing alive or active
    #[test]
    fn prop_clear_idempotent(soup in arb_soup()) {
        let mut grid = seeded(&soup);
        grid.clear();
        grid.clear();
        prop_assert_eq!(grid.status().alive_count, 0);
        prop_assert_eq!(grid.status().active_count, 0);

        let mut grid = seeded(&soup);
        let status = grid.seed(|_, _| false);
        prop_assert_eq!(status.alive_count, 0);
        prop_assert_eq!(status.active_count, 0);
    }
}

// =============================================================================
// Session round trip
// =============================================================================

proptest! {
    /// save_game fed back into create_game reproduces the live cells
    #[test]
    fn prop_save_round_trip(soup in arb_soup(), steps in 0usize..5) {
        let (width, height, ref cells) = soup;
        let coords: Vec<[i64; 2]> = cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| [(i % width) as i64, (i / width) as i64])
            .collect();

        let mut session = Session::new(Grid::new(width, height).unwrap(), NullObserver, ManualScheduler::new());
        session.create_game(&SeedDescriptor::selection(&coords)).unwrap();
        prop_assert_eq!(session.grid().states(), cells.clone());

        session.start_game(100).unwrap();
        for _ in 0..steps {
            session.tick();
        }
        session.stop_game();

        let expected: Vec<usize> = session.grid().live_indices().collect();
        let saved = session.save_game().unwrap();
        session.create_game(&saved).unwrap();
        prop_assert_eq!(session.grid().live_indices().collect::<Vec<_>>(), expected);
    }
}

#[test]
fn scenario_vertical_blinker() {
    let mut session = Session::new(Grid::new(3, 3).unwrap(), NullObserver, ManualScheduler::new());
    session
        .create_game(&SeedDescriptor::selection(&[[1, 0], [1, 1], [1, 2]]))
        .unwrap();

    let mut grid = session.grid().clone();
    let status = grid.step();
    assert_eq!(grid.live_coords().collect::<Vec<_>>(), vec![[0, 1], [1, 1], [2, 1]]);
    assert_eq!(status.changed_count, 4);
}

#[test]
fn scenario_oversized_grid() {
    assert!(matches!(
        Grid::new(201, 10),
        Err(game_of_life_session::LifeError::Size { .. })
    ));
}
