//! This module contains some error and result definitions used in this crate.

use crate::validator::Conflict;

use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some number is invalid for a Sudoku grid. This is the
    /// case if it is less than 1 or greater than 9.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the Sudoku grid. This is the case if they are greater than or equal to
    /// 9.
    OutOfBounds
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cells (which are separated by commas)
    /// does not equal 81.
    WrongNumberOfCells,

    /// Indicates that one of the cell contents could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell is filled with an invalid number (0 or more than
    /// 9).
    InvalidNumber
}

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::NumberFormatError =>
                write!(f, "number format error"),
            SudokuParseError::InvalidNumber =>
                write!(f, "invalid number")
        }
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

/// An enumeration of the ways a puzzle handed to
/// [solve_puzzle](crate::solve_puzzle) can fail. Both cases are recoverable
/// by editing the grid and retrying.
#[derive(Debug, Eq, PartialEq)]
pub enum PuzzleError {

    /// Indicates that the given cells already violate the Sudoku rules. The
    /// wrapped list contains one [Conflict] for each offending cell, in
    /// row-major order of the grid.
    InvalidPuzzle(Vec<Conflict>),

    /// Indicates that the puzzle is free of conflicts, but admits no
    /// completion. No partial grid is returned in this case.
    Unsolvable
}
