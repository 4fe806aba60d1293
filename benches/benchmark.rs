use criterion::{criterion_group, criterion_main, Criterion};

use classic_sudoku::SudokuGrid;
use classic_sudoku::solver::{BacktrackingSolver, Solution, Solver};
use classic_sudoku::validator;

// Explanation of benchmark classes:
//
// backtracking classic: Solving a published competition puzzle.
// backtracking blank: Completing a grid with no givens at all, which walks
//                     the longest path through the search.
// validate full: Checking a completely filled grid, the most expensive case
//                for the validator.

const CLASSIC_PUZZLE: &str = "\
     , , , ,8,1, , , ,\
     , ,2, , ,7,8, , ,\
     ,5,3, , , ,1,7, ,\
    3,7, , , , , , , ,\
    6, , , , , , , ,3,\
     , , , , , , ,2,4,\
     ,6,9, , , ,2,3, ,\
     , ,5,9, , ,4, , ,\
     , , ,6,5, , , , ";

const CLASSIC_SOLUTION: &str = "\
    7,4,6,2,8,1,3,5,9,\
    9,1,2,5,3,7,8,4,6,\
    8,5,3,4,9,6,1,7,2,\
    3,7,4,1,2,5,6,9,8,\
    6,2,8,7,4,9,5,1,3,\
    5,9,1,3,6,8,7,2,4,\
    1,6,9,8,7,4,2,3,5,\
    2,8,5,9,1,3,4,6,7,\
    4,3,7,6,5,2,9,8,1";

fn benchmark_backtracking_classic(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(CLASSIC_PUZZLE).unwrap();
    let solution = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

    c.bench_function("backtracking classic", |b| b.iter(|| {
        assert_eq!(Solution::Complete(solution.clone()),
            BacktrackingSolver.solve(&puzzle));
    }));
}

fn benchmark_backtracking_blank(c: &mut Criterion) {
    let blank = SudokuGrid::new();

    c.bench_function("backtracking blank", |b| b.iter(|| {
        if let Solution::Impossible = BacktrackingSolver.solve(&blank) {
            panic!("Blank grid marked as impossible.");
        }
    }));
}

fn benchmark_validate_full(c: &mut Criterion) {
    let solution = SudokuGrid::parse(CLASSIC_SOLUTION).unwrap();

    c.bench_function("validate full", |b| b.iter(|| {
        assert!(validator::validate(&solution).is_empty());
    }));
}

criterion_group!(all,
    benchmark_backtracking_classic,
    benchmark_backtracking_blank,
    benchmark_validate_full
);

criterion_main!(all);
