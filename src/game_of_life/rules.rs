//! Game of Life transition rule and full-grid reference evolution

use super::Grid;
use rayon::prelude::*;

/// Moore neighborhood offsets `(dx, dy)`, clockwise from north
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

/// Game of Life rules engine (B3/S23)
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Next state of a cell given its current state and live neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }

    /// Count live neighbors from coordinates alone, without the grid's
    /// adjacency lists. Outside the grid everything is dead.
    pub fn count_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dx, dy)| {
                let nx = x as isize + dx;
                let ny = y as isize + dy;
                nx >= 0 && ny >= 0 && grid.is_alive(nx as usize, ny as usize)
            })
            .count() as u8
    }

    /// Evaluate every cell of the grid and return the next generation.
    ///
    /// This ignores the active set entirely and is the reference the
    /// incremental stepper is checked against.
    pub fn evolve(grid: &Grid) -> Vec<bool> {
        let width = grid.width();
        (0..grid.height())
            .into_par_iter()
            .flat_map(|y| {
                (0..width).into_par_iter().map(move |x| {
                    let neighbors = Self::count_neighbors(grid, x, y);
                    Self::should_be_alive(grid.is_alive(x, y), neighbors)
                })
            })
            .collect()
    }

    /// Step `grid` in place and compare against full-grid evaluation.
    /// Returns the first index where the two disagree.
    pub fn checked_step(grid: &mut Grid) -> Option<usize> {
        let expected = Self::evolve(grid);
        grid.step();
        grid.states()
            .iter()
            .zip(&expected)
            .position(|(actual, expected)| actual != expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid_from_rows(rows: &[&str]) -> Grid {
        let width = rows[0].len();
        let mut grid = Grid::new(width, rows.len()).unwrap();
        let cells: Vec<bool> = rows.iter().flat_map(|row| row.chars().map(|c| c == '1')).collect();
        grid.seed(|index, _| cells[index]);
        grid
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2)); // Survival with 2 neighbors
        assert!(GameOfLifeRules::should_be_alive(true, 3)); // Survival with 3 neighbors
        assert!(GameOfLifeRules::should_be_alive(false, 3)); // Birth with 3 neighbors
        assert!(!GameOfLifeRules::should_be_alive(true, 1)); // Death with 1 neighbor
        assert!(!GameOfLifeRules::should_be_alive(true, 4)); // Death with 4 neighbors
        assert!(!GameOfLifeRules::should_be_alive(false, 2)); // No birth with 2 neighbors
        assert!(!GameOfLifeRules::should_be_alive(false, 4));
    }

    #[test]
    fn test_count_neighbors_at_edges() {
        let grid = grid_from_rows(&["111", "101", "111"]);
        assert_eq!(GameOfLifeRules::count_neighbors(&grid, 1, 1), 8);
        assert_eq!(GameOfLifeRules::count_neighbors(&grid, 0, 0), 2);
        assert_eq!(GameOfLifeRules::count_neighbors(&grid, 1, 0), 4);
    }

    #[test]
    fn test_reference_blinker() {
        let grid = grid_from_rows(&["000", "111", "000"]);
        let next = GameOfLifeRules::evolve(&grid);
        let expected: Vec<bool> = "010010010".chars().map(|c| c == '1').collect();
        assert_eq!(next, expected);
    }

    #[test]
    fn test_glider_matches_reference() {
        let mut grid = grid_from_rows(&[
            "001000", "101000", "011000", "000000", "000000", "000000",
        ]);
        // Runs the glider into the corner where it becomes a block
        for generation in 0..20 {
            assert_eq!(GameOfLifeRules::checked_step(&mut grid), None, "generation {}", generation);
        }
    }

    #[test]
    fn test_random_soups_match_reference() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..25 {
            let width = rng.gen_range(1..=24);
            let height = rng.gen_range(1..=24);
            let density = rng.gen_range(0.05..0.9);
            let mut grid = Grid::new(width, height).unwrap();
            grid.seed(|_, _| rng.gen_bool(density));

            for _ in 0..30 {
                assert_eq!(GameOfLifeRules::checked_step(&mut grid), None);
            }
        }
    }
}
