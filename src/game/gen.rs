//! Dungeon generation.
//!
//! Builds the bordered grid, seeds the interior stochastically, and places
//! the player and exit markers in their lanes. Generation cannot fail given
//! valid dimensions; the caller is responsible for rejecting anything below
//! [`MIN_SIZE`].

// Placement probabilities use an intentional integer-to-float cast
#![allow(clippy::cast_precision_loss)]

use crate::game::{Cell, Dice, Grid, Pos};

/// Smallest width and height the generator accepts.
pub const MIN_SIZE: u16 = 8;

/// Dimensions substituted when the user asks for something smaller.
pub const DEFAULT_SIZE: u16 = 16;

/// Chance (percent) that an interior cell holds something other than floor.
const EVENTFUL_PERCENT: u32 = 20;

/// Generate a dungeon.
///
/// The outer ring is wall. Each interior cell is empty with 80%
/// probability; the eventful 20% split into enemy/health/trap/food/wall
/// with relative weights 15/15/15/15/40. The player marker lands in column
/// 1 and the exit marker in column `width - 2`, each via
/// [`place_in_column`].
///
/// Returns the grid together with the player start and the exit position.
#[must_use]
pub fn generate(width: u16, height: u16, dice: &mut impl Dice) -> (Grid, Pos, Pos) {
    debug_assert!(
        width >= MIN_SIZE && height >= MIN_SIZE,
        "dimensions below {MIN_SIZE} must be normalized by the caller"
    );

    let mut grid = Grid::new(width, height);

    for x in 0..width {
        grid.set(Pos::new(x, 0), Cell::Wall);
        grid.set(Pos::new(x, height - 1), Cell::Wall);
    }
    for y in 0..height {
        grid.set(Pos::new(0, y), Cell::Wall);
        grid.set(Pos::new(width - 1, y), Cell::Wall);
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            grid.set(Pos::new(x, y), roll_cell(dice));
        }
    }

    let start_row = place_in_column(&mut grid, 1, Cell::Player, 1, dice);
    let exit_row = place_in_column(&mut grid, width - 2, Cell::Exit, height - 2, dice);

    let start = Pos::new(1, start_row);
    let exit = Pos::new(width - 2, exit_row);
    (grid, start, exit)
}

/// Draw the contents of one interior cell.
///
/// Two-stage weighting: a first roll over 100 decides eventful-or-not, a
/// second roll over 100 maps buckets [0,15) enemy, [15,30) health,
/// [30,45) trap, [45,60) food, [60,100) wall.
fn roll_cell(dice: &mut impl Dice) -> Cell {
    if dice.roll(100) >= EVENTFUL_PERCENT {
        return Cell::Empty;
    }
    match dice.roll(100) {
        0..=14 => Cell::Enemy,
        15..=29 => Cell::Health,
        30..=44 => Cell::Trap,
        45..=59 => Cell::Food,
        _ => Cell::Wall,
    }
}

/// Place `marker` somewhere in `column`, preferring a vacant interior row.
///
/// Counts the empty cells among rows `1..height-1` of the column. With N
/// vacancies, scans those rows top to bottom and stamps the marker into the
/// first empty cell whose uniform draw comes in under 1/N. The scan is a
/// single streaming pass, deliberately not reservoir sampling; every trial
/// can fail, in which case (or when the column has no vacancy at all) the
/// marker lands on `fallback_row`, overwriting whatever is there.
///
/// Returns the row the marker was placed in.
pub fn place_in_column(
    grid: &mut Grid,
    column: u16,
    marker: Cell,
    fallback_row: u16,
    dice: &mut impl Dice,
) -> u16 {
    let height = grid.height();
    let vacant = (1..height - 1)
        .filter(|&y| grid.get(Pos::new(column, y)) == Cell::Empty)
        .count();

    if vacant > 0 {
        let placement_probability = 1.0 / vacant as f64;
        for y in 1..height - 1 {
            let pos = Pos::new(column, y);
            if grid.get(pos) == Cell::Empty && dice.fraction() < placement_probability {
                grid.set(pos, marker);
                return y;
            }
        }
    }

    grid.set(Pos::new(column, fallback_row), marker);
    fallback_row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{SeededDice, SequenceDice};

    #[test]
    fn test_border_is_all_wall() {
        let mut dice = SeededDice::new(42);
        let (grid, _, _) = generate(16, 16, &mut dice);

        for (pos, cell) in grid.iter() {
            if grid.is_border(pos) {
                assert_eq!(cell, Cell::Wall, "border cell {pos:?} must be wall");
            }
        }
    }

    #[test]
    fn test_markers_in_their_lanes() {
        let mut dice = SeededDice::new(42);
        let (grid, start, exit) = generate(16, 16, &mut dice);

        assert_eq!(start.x, 1);
        assert_eq!(exit.x, 14);
        assert_eq!(grid.get(start), Cell::Player);
        assert_eq!(grid.get(exit), Cell::Exit);
        assert_eq!(grid.count(Cell::Player), 1);
        assert_eq!(grid.count(Cell::Exit), 1);
    }

    #[test]
    fn test_generation_determinism() {
        let (a, start_a, exit_a) = generate(16, 16, &mut SeededDice::new(99));
        let (b, start_b, exit_b) = generate(16, 16, &mut SeededDice::new(99));

        assert_eq!(a, b);
        assert_eq!(start_a, start_b);
        assert_eq!(exit_a, exit_b);
    }

    #[test]
    fn test_generation_different_seeds_differ() {
        let (a, _, _) = generate(32, 32, &mut SeededDice::new(1));
        let (b, _, _) = generate(32, 32, &mut SeededDice::new(2));
        assert_ne!(a, b);
    }

    #[test]
    fn test_interior_distribution_roughly_80_20() {
        let mut dice = SeededDice::new(7);
        let mut empty = 0usize;
        let mut interior = 0usize;

        for _ in 0..20 {
            let (grid, _, _) = generate(64, 64, &mut dice);
            for (pos, cell) in grid.iter() {
                if grid.is_border(pos) || cell == Cell::Player || cell == Cell::Exit {
                    continue;
                }
                interior += 1;
                if cell == Cell::Empty {
                    empty += 1;
                }
            }
        }

        let ratio = empty as f64 / interior as f64;
        assert!(
            (0.77..0.83).contains(&ratio),
            "empty ratio {ratio} drifted from 0.80"
        );
    }

    #[test]
    fn test_eventful_sub_distribution() {
        let mut dice = SeededDice::new(11);
        let mut counts = [0usize; 5];

        for _ in 0..20 {
            let (grid, _, _) = generate(64, 64, &mut dice);
            for (pos, cell) in grid.iter() {
                if grid.is_border(pos) {
                    continue;
                }
                match cell {
                    Cell::Enemy => counts[0] += 1,
                    Cell::Health => counts[1] += 1,
                    Cell::Trap => counts[2] += 1,
                    Cell::Food => counts[3] += 1,
                    Cell::Wall => counts[4] += 1,
                    _ => {}
                }
            }
        }

        let eventful: usize = counts.iter().sum();
        for (i, &count) in counts.iter().enumerate().take(4) {
            let share = count as f64 / eventful as f64;
            assert!(
                (0.10..0.20).contains(&share),
                "bucket {i} share {share} drifted from 0.15"
            );
        }
        let wall_share = counts[4] as f64 / eventful as f64;
        assert!(
            (0.35..0.45).contains(&wall_share),
            "wall share {wall_share} drifted from 0.40"
        );
    }

    #[test]
    fn test_placement_prefers_first_successful_vacancy() {
        let mut grid = Grid::new(8, 8);
        // Fraction 0.0 always passes the 1/N trial, so the top vacancy wins.
        let mut dice = SequenceDice::from_fractions(vec![0.0]);
        let row = place_in_column(&mut grid, 3, Cell::Exit, 6, &mut dice);
        assert_eq!(row, 1);
        assert_eq!(grid.get(Pos::new(3, 1)), Cell::Exit);
    }

    #[test]
    fn test_placement_skips_occupied_cells() {
        let mut grid = Grid::new(8, 8);
        grid.set(Pos::new(3, 1), Cell::Wall);
        grid.set(Pos::new(3, 2), Cell::Enemy);
        let mut dice = SequenceDice::from_fractions(vec![0.0]);
        let row = place_in_column(&mut grid, 3, Cell::Player, 6, &mut dice);
        assert_eq!(row, 3);
        assert_eq!(grid.get(Pos::new(3, 1)), Cell::Wall);
        assert_eq!(grid.get(Pos::new(3, 2)), Cell::Enemy);
    }

    #[test]
    fn test_placement_falls_back_when_column_full() {
        let mut grid = Grid::new(8, 8);
        for y in 1..7 {
            grid.set(Pos::new(3, y), Cell::Wall);
        }
        let mut dice = SequenceDice::default();
        let row = place_in_column(&mut grid, 3, Cell::Exit, 6, &mut dice);
        assert_eq!(row, 6);
        // Fallback overwrites whatever occupied the cell.
        assert_eq!(grid.get(Pos::new(3, 6)), Cell::Exit);
    }

    #[test]
    fn test_placement_falls_back_when_all_trials_fail() {
        let mut grid = Grid::new(8, 8);
        // Fractions at the top of the range never beat 1/N for N > 1.
        let mut dice = SequenceDice::from_fractions(vec![0.999_999]);
        let row = place_in_column(&mut grid, 3, Cell::Player, 2, &mut dice);
        assert_eq!(row, 2);
        assert_eq!(grid.get(Pos::new(3, 2)), Cell::Player);
    }
}
