// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements an easy-to-understand engine for classic 9x9
//! Sudoku. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking the given digits against the standard rules, with a
//! human-readable message for every offending cell
//! * Completing a grid of givens using a backtracking algorithm
//!
//! It is meant as the core behind an interactive Sudoku frontend: the
//! frontend owns a [SudokuGrid], fills it with user input, and hands it to
//! [solve_puzzle], which either returns the completed grid or explains why
//! there is none.
//!
//! # Parsing and printing Sudoku grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use classic_sudoku::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     5,3, , ,7, , , , ,\
//!     6, , ,1,9,5, , , ,\
//!      ,9,8, , , , ,6, ,\
//!     8, , , ,6, , , ,3,\
//!     4, , ,8, ,3, , ,1,\
//!     7, , , ,2, , , ,6,\
//!      ,6, , , , ,2,8, ,\
//!      , , ,4,1,9, , ,5,\
//!      , , , ,8, , ,7,9").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! The [validator](crate::validator) module checks the filled cells of a
//! grid against the classic rules: no duplicate digit in any row, column, or
//! 3x3 block. Every offending cell is described by a
//! [Conflict](crate::validator::Conflict) whose display form can be shown to
//! the user directly.
//!
//! ```
//! use classic_sudoku::SudokuGrid;
//! use classic_sudoku::validator;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(2, 0, 1).unwrap();
//! grid.set_cell(2, 5, 1).unwrap();
//!
//! let conflicts = validator::validate(&grid);
//!
//! assert_eq!(2, conflicts.len());
//! assert_eq!(
//!     "Number 1 at (1, 3) is already present in the same column.",
//!     conflicts[0].to_string());
//! ```
//!
//! # Solving
//!
//! This crate offers a [Solver](solver::Solver) trait for structs that can
//! complete Sudoku grids. As a default implementation,
//! [BacktrackingSolver](solver::BacktrackingSolver) is provided, which tries
//! every legal digit for every empty cell in a fixed order and therefore
//! always finds the same, first completion.
//!
//! ```
//! use classic_sudoku::SudokuGrid;
//! use classic_sudoku::solver::{BacktrackingSolver, Solution, Solver};
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(4, 4, 7).unwrap();
//!
//! match BacktrackingSolver.solve(&grid) {
//!     Solution::Complete(solved) => {
//!         assert!(solved.is_full());
//!         assert_eq!(Some(7), solved.get_cell(4, 4).unwrap());
//!     },
//!     Solution::Impossible => unreachable!()
//! }
//! ```
//!
//! Most frontends do not need to call the validator and the solver
//! separately: [solve_puzzle] chains them, stopping with the conflict list
//! if the givens are contradictory and with
//! [PuzzleError::Unsolvable](error::PuzzleError::Unsolvable) if the puzzle
//! has no completion.

pub mod error;
pub mod solver;
pub mod util;
pub mod validator;

#[cfg(test)]
mod random_tests;

use error::{
    PuzzleError,
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};
use solver::{BacktrackingSolver, Solution, Solver};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of rows and columns of a Sudoku grid, which is also the number
/// of cells in each row, column, and block.
pub const SIZE: usize = 9;

/// The width and height of one block of a Sudoku grid. The grid is composed
/// of [BLOCK_SIZE] by [BLOCK_SIZE] such blocks.
pub const BLOCK_SIZE: usize = 3;

/// The total number of cells of a Sudoku grid.
pub const CELL_COUNT: usize = SIZE * SIZE;

/// A Sudoku grid is a square of 9 by 9 cells that is divided into nine 3x3
/// blocks:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Each cell may or may not be occupied by a digit from 1 to 9. The
/// dimensions are fixed; no other grid size is ever constructed or accepted.
///
/// A grid carries no rule knowledge of its own. Checking the cells against
/// the Sudoku rules is the business of the [validator](crate::validator)
/// module, completing the grid that of the [solver](crate::solver) module.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: [Option<usize>; CELL_COUNT]
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        ('0' as u8 + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.get_cell(x, y).unwrap()), ' ',
        '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let top_row = top_row();
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();
        let bottom_row = bottom_row();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

fn to_string(cell: &Option<usize>) -> String {
    if let Some(number) = cell {
        number.to_string()
    }
    else {
        String::from("")
    }
}

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid. This is the state in which every
    /// puzzle session starts; digits are put in afterwards with
    /// [SudokuGrid::set_cell].
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of 81 entries, which are either empty or a digit from 1 to 9.
    /// The entries are assigned left-to-right, top-to-bottom, where each row
    /// is completed before the next one is started. Whitespace in the
    /// entries is ignored to allow for more intuitive formatting.
    ///
    /// As an example, the code `1, ,2, ,...` (continued appropriately) puts
    /// a 1 in the top-left cell and a 2 two cells to its right, leaving the
    /// rest of the grid empty.
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let number = entry.parse::<usize>()?;

            if number == 0 || number > SIZE {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.cells[i] = Some(number);
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use classic_sudoku::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(to_string)
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Creates a grid from a plain matrix of digit values, as an input layer
    /// that keeps the grid as numbers would provide it. `values` is indexed
    /// by row first, and 0 denotes an empty cell.
    ///
    /// This is the boundary at which out-of-range input is rejected; grids
    /// built through this constructor (or any other method of this type)
    /// only ever contain digits from 1 to 9.
    ///
    /// ```
    /// use classic_sudoku::SudokuGrid;
    ///
    /// let mut values = [[0; 9]; 9];
    /// values[2][7] = 5;
    ///
    /// let grid = SudokuGrid::from_values(&values).unwrap();
    /// assert_eq!(Some(5), grid.get_cell(7, 2).unwrap());
    /// assert_eq!(None, grid.get_cell(0, 0).unwrap());
    ///
    /// assert!(SudokuGrid::from_values(&[[10; 9]; 9]).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// If any value is greater than 9. In that case,
    /// `SudokuError::InvalidNumber` is returned.
    pub fn from_values(values: &[[usize; SIZE]; SIZE])
            -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let value = values[row][column];

                if value > SIZE {
                    return Err(SudokuError::InvalidNumber);
                }

                if value != 0 {
                    grid.cells[index(column, row)] = Some(value);
                }
            }
        }

        Ok(grid)
    }

    /// Converts the grid into a plain matrix of digit values, indexed by row
    /// first, where 0 denotes an empty cell. This is the inverse of
    /// [SudokuGrid::from_values].
    pub fn to_values(&self) -> [[usize; SIZE]; SIZE] {
        let mut values = [[0; SIZE]; SIZE];

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(number) = self.cells[index(column, row)] {
                    values[row][column] = number;
                }
            }
        }

        values
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not empty, the old number will be
    /// overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in
    /// the range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells.
    pub fn count_clues(&self) -> usize {
        let mut clues = 0usize;

        for row in 0..SIZE {
            for column in 0..SIZE {
                if let Some(_) = self.get_cell(column, row).unwrap() {
                    clues += 1;
                }
            }
        }

        clues
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// number. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c == &None)
    }

    /// Gets a reference to the slice which holds the cells. They are in
    /// left-to-right, top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> Result<SudokuGrid, SudokuParseError> {
        SudokuGrid::parse(code.as_str())
    }
}

/// Checks the given digits of `grid` and, if they are free of conflicts,
/// completes the grid with a [BacktrackingSolver]. The provided grid is
/// never changed; the solver works on a private copy, and the caller decides
/// what to do with the returned completion.
///
/// ```
/// use classic_sudoku::{solve_puzzle, SudokuGrid};
///
/// let mut grid = SudokuGrid::new();
/// grid.set_cell(3, 4, 7).unwrap();
///
/// let solved = solve_puzzle(&grid).unwrap();
/// assert!(solved.is_full());
/// assert_eq!(Some(7), solved.get_cell(3, 4).unwrap());
/// ```
///
/// # Errors
///
/// * `PuzzleError::InvalidPuzzle` If any given digit duplicates another in
/// its row, column, or block. The wrapped list holds one
/// [Conflict](validator::Conflict) per offending cell; the grid is not
/// solved in this case.
/// * `PuzzleError::Unsolvable` If the givens are free of conflicts but no
/// completion exists.
pub fn solve_puzzle(grid: &SudokuGrid) -> Result<SudokuGrid, PuzzleError> {
    let conflicts = validator::validate(grid);

    if !conflicts.is_empty() {
        return Err(PuzzleError::InvalidPuzzle(conflicts));
    }

    match BacktrackingSolver.solve(grid) {
        Solution::Complete(solved) => Ok(solved),
        Solution::Impossible => Err(PuzzleError::Unsolvable)
    }
}
