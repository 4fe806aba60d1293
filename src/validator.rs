//! This module contains the logic for checking the cells of a Sudoku grid
//! against the classic rules: no duplicate digit in any row, column, or 3x3
//! block.
//!
//! The main entry point is [validate], which produces one [Conflict] per
//! offending cell, in row-major order of the grid. Conflicts render as
//! human-readable messages suitable for direct display:
//!
//! ```
//! use classic_sudoku::SudokuGrid;
//! use classic_sudoku::validator;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 4).unwrap();
//! grid.set_cell(5, 0, 4).unwrap();
//!
//! let conflicts = validator::validate(&grid);
//!
//! assert_eq!(2, conflicts.len());
//! assert_eq!(
//!     "Number 4 at (1, 1) is already present in the same row.",
//!     conflicts[0].to_string());
//! ```
//!
//! For a verdict without messages, [is_valid] checks the same rules with a
//! set-based scan that stops at the first duplicate.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};
use crate::util::DigitSet;

use std::fmt::{self, Display, Formatter};

/// The kind of rule a [Conflict] violates.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConflictKind {

    /// The cell's digit occurs in another cell of the same row.
    Row,

    /// The cell's digit occurs in another cell of the same column.
    Column,

    /// The cell's digit occurs in another cell of the same 3x3 block.
    Block
}

impl Display for ConflictKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConflictKind::Row => write!(f, "row"),
            ConflictKind::Column => write!(f, "column"),
            ConflictKind::Block => write!(f, "3x3 box")
        }
    }
}

/// A filled cell whose digit duplicates another filled cell sharing its row,
/// column, or block. The `Display` implementation renders the message shown
/// to the user, with row and column 1-indexed.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Conflict {
    number: usize,
    column: usize,
    row: usize,
    kind: ConflictKind
}

impl Conflict {

    /// Creates a new conflict for the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `number`: The digit in the offending cell. Must be in the range
    /// `[1, 9]`.
    /// * `column`: The column (x-coordinate) of the offending cell,
    /// zero-based.
    /// * `row`: The row (y-coordinate) of the offending cell, zero-based.
    /// * `kind`: The kind of rule the cell violates.
    pub fn new(number: usize, column: usize, row: usize, kind: ConflictKind)
            -> Conflict {
        Conflict {
            number,
            column,
            row,
            kind
        }
    }

    /// Gets the digit in the offending cell.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Gets the column (x-coordinate) of the offending cell, zero-based.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Gets the row (y-coordinate) of the offending cell, zero-based.
    pub fn row(&self) -> usize {
        self.row
    }

    /// Gets the kind of rule the offending cell violates.
    pub fn kind(&self) -> ConflictKind {
        self.kind
    }
}

impl Display for Conflict {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f,
            "Number {} at ({}, {}) is already present in the same {}.",
            self.number, self.row + 1, self.column + 1, self.kind)
    }
}

fn duplicate_in_row(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_column in 0..SIZE {
        if other_column != column &&
                grid.has_number(other_column, row, number).unwrap() {
            return true;
        }
    }

    false
}

fn duplicate_in_column(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    for other_row in 0..SIZE {
        if other_row != row &&
                grid.has_number(column, other_row, number).unwrap() {
            return true;
        }
    }

    false
}

fn duplicate_in_block(grid: &SudokuGrid, column: usize, row: usize,
        number: usize) -> bool {
    let block_column = (column / BLOCK_SIZE) * BLOCK_SIZE;
    let block_row = (row / BLOCK_SIZE) * BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if (other_row != row || other_column != column) &&
                    grid.has_number(other_column, other_row, number).unwrap() {
                return true;
            }
        }
    }

    false
}

fn conflict_kind(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> Option<ConflictKind> {
    if duplicate_in_row(grid, column, row, number) {
        Some(ConflictKind::Row)
    }
    else if duplicate_in_column(grid, column, row, number) {
        Some(ConflictKind::Column)
    }
    else if duplicate_in_block(grid, column, row, number) {
        Some(ConflictKind::Block)
    }
    else {
        None
    }
}

/// Checks every filled cell of the given grid against the classic Sudoku
/// rules and collects a [Conflict] for each offending cell. Cells are visited
/// in row-major order (left-to-right, top-to-bottom), and that is the order
/// of the returned conflicts.
///
/// Each cell is checked against its row first, then its column, then its
/// block, and only the first violated rule is recorded for it. A cell whose
/// digit duplicates cells in several of these regions therefore yields one
/// conflict, not three. Empty cells never conflict, so a grid with no filled
/// cells yields an empty list.
///
/// The grid is only read, never changed.
pub fn validate(grid: &SudokuGrid) -> Vec<Conflict> {
    let mut conflicts = Vec::new();

    for row in 0..SIZE {
        for column in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if let Some(kind) = conflict_kind(grid, column, row, number) {
                    conflicts.push(Conflict::new(number, column, row, kind));
                }
            }
        }
    }

    conflicts
}

fn rows_valid(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for row in 0..SIZE {
        set.clear();

        for column in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if !set.insert(number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

fn columns_valid(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for column in 0..SIZE {
        set.clear();

        for row in 0..SIZE {
            if let Some(number) = grid.get_cell(column, row).unwrap() {
                if !set.insert(number).unwrap() {
                    return false;
                }
            }
        }
    }

    true
}

fn blocks_valid(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for block_row in 0..BLOCK_SIZE {
        for block_column in 0..BLOCK_SIZE {
            set.clear();

            let start_column = block_column * BLOCK_SIZE;
            let start_row = block_row * BLOCK_SIZE;

            for row in start_row..(start_row + BLOCK_SIZE) {
                for column in start_column..(start_column + BLOCK_SIZE) {
                    if let Some(number) = grid.get_cell(column, row).unwrap() {
                        if !set.insert(number).unwrap() {
                            return false;
                        }
                    }
                }
            }
        }
    }

    true
}

/// Indicates whether the given grid contains no conflicts. This is equivalent
/// to [validate] returning an empty list, but uses a [DigitSet]-based scan of
/// each row, column, and block which stops at the first duplicate instead of
/// building messages.
pub fn is_valid(grid: &SudokuGrid) -> bool {
    rows_valid(grid) && columns_valid(grid) && blocks_valid(grid)
}
