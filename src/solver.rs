//! This module contains the logic for completing Sudoku grids.
//!
//! Most importantly, this module contains the definition of the
//! [Solver](trait.Solver.html) trait and the
//! [BacktrackingSolver](struct.BacktrackingSolver.html) as a generally usable
//! implementation.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};
use crate::util::DigitSet;

/// An enumeration of the outcomes of solving a Sudoku grid.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Solution {

    /// Indicates that the grid was completed. The wrapped grid contains all
    /// the original digits plus a digit in every formerly empty cell.
    Complete(SudokuGrid),

    /// Indicates that the grid is not solveable at all. No partial grid is
    /// made available.
    Impossible
}

/// A trait for structs which have the ability to complete Sudoku grids.
/// Solvers never touch the grid they are given; any working state is a
/// private copy that is discarded when solving returns.
pub trait Solver {

    /// Solves, or attempts to solve, the provided grid. Returns
    /// `Solution::Complete` with a fully filled grid that contains all the
    /// given digits, or `Solution::Impossible` if no completion exists.
    ///
    /// Callers are expected to have validated the grid beforehand (see
    /// [validate](crate::validator::validate)); solvers do not re-check the
    /// given digits against each other.
    fn solve(&self, grid: &SudokuGrid) -> Solution;
}

/// A [Solver](trait.Solver.html) which completes grids by recursively
/// testing all legal digits for each empty cell. Empty cells are visited in
/// row-major order and digits are tried in ascending order, so the search is
/// deterministic: repeated runs on the same grid find the identical first
/// solution.
///
/// Its worst-case runtime is exponential, but for 9x9 grids it is more than
/// fast enough. The recursion visits each of the at most 81 cells once per
/// branch, so its depth is bounded by the cell count.
pub struct BacktrackingSolver;

impl BacktrackingSolver {
    fn used_digits(grid: &SudokuGrid, column: usize, row: usize) -> DigitSet {
        let mut used = DigitSet::new();

        for other_column in 0..SIZE {
            if let Some(number) = grid.get_cell(other_column, row).unwrap() {
                used.insert(number).unwrap();
            }
        }

        for other_row in 0..SIZE {
            if let Some(number) = grid.get_cell(column, other_row).unwrap() {
                used.insert(number).unwrap();
            }
        }

        let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
        let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

        for other_row in block_row..(block_row + BLOCK_SIZE) {
            for other_column in block_column..(block_column + BLOCK_SIZE) {
                if let Some(number) =
                        grid.get_cell(other_column, other_row).unwrap() {
                    used.insert(number).unwrap();
                }
            }
        }

        used
    }

    fn solve_rec(grid: &mut SudokuGrid, column: usize, row: usize)
            -> Solution {
        if row == SIZE {
            return Solution::Complete(grid.clone());
        }

        let next_column = (column + 1) % SIZE;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if let Some(_) = grid.get_cell(column, row).unwrap() {
            BacktrackingSolver::solve_rec(grid, next_column, next_row)
        }
        else {
            let candidates =
                BacktrackingSolver::used_digits(grid, column, row).missing();

            for number in candidates {
                grid.set_cell(column, row, number).unwrap();
                let next_solution =
                    BacktrackingSolver::solve_rec(grid, next_column, next_row);

                if let Solution::Complete(solved) = next_solution {
                    return Solution::Complete(solved);
                }

                grid.clear_cell(column, row).unwrap();
            }

            Solution::Impossible
        }
    }

    fn solve(grid: &mut SudokuGrid) -> Solution {
        BacktrackingSolver::solve_rec(grid, 0, 0)
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Solution {
        let mut clone = grid.clone();
        BacktrackingSolver::solve(&mut clone)
    }
}
