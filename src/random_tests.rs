//! Randomized consistency tests. Since this crate does not generate puzzles,
//! random inputs are derived from a fixed solved grid by rules-preserving
//! transformations: relabeling the digits, permuting the three bands and the
//! rows inside each band, and the same for columns. Removing clues from such
//! a grid yields a puzzle that is guaranteed to have at least one solution.

use crate::{solve_puzzle, SudokuGrid, BLOCK_SIZE, SIZE};
use crate::solver::{BacktrackingSolver, Solution, Solver};
use crate::validator;

use rand::Rng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rand_chacha::ChaCha8Rng;

const ITERATIONS_PER_RUN: usize = 20;
const CLUES_REMOVED: usize = 45;

const SOLVED: &str = "\
    1,2,3,4,5,6,7,8,9,\
    4,5,6,7,8,9,1,2,3,\
    7,8,9,1,2,3,4,5,6,\
    2,1,4,3,6,5,8,9,7,\
    3,6,5,8,9,7,2,1,4,\
    8,9,7,2,1,4,3,6,5,\
    5,3,1,6,4,2,9,7,8,\
    6,4,2,9,7,8,5,3,1,\
    9,7,8,5,3,1,6,4,2";

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

fn shuffled_digits(rng: &mut impl Rng) -> [usize; SIZE] {
    let mut digits = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    digits.shuffle(rng);
    digits
}

fn shuffled_lines(rng: &mut impl Rng) -> [usize; SIZE] {
    let mut chunks = [0, 1, 2];
    chunks.shuffle(rng);
    let mut lines = [0; SIZE];
    let mut next = 0;

    for &chunk in chunks.iter() {
        let mut in_chunk = [0, 1, 2];
        in_chunk.shuffle(rng);

        for &line in in_chunk.iter() {
            lines[next] = chunk * BLOCK_SIZE + line;
            next += 1;
        }
    }

    lines
}

fn transformed_solution(rng: &mut impl Rng) -> SudokuGrid {
    let base = SudokuGrid::parse(SOLVED).unwrap().to_values();
    let digits = shuffled_digits(rng);
    let rows = shuffled_lines(rng);
    let columns = shuffled_lines(rng);
    let mut values = [[0; SIZE]; SIZE];

    for row in 0..SIZE {
        for column in 0..SIZE {
            values[row][column] = digits[base[rows[row]][columns[column]] - 1];
        }
    }

    SudokuGrid::from_values(&values).unwrap()
}

fn remove_clues(solution: &SudokuGrid, rng: &mut impl Rng, count: usize)
        -> SudokuGrid {
    let mut cells: Vec<(usize, usize)> = (0..SIZE)
        .flat_map(|row| (0..SIZE).map(move |column| (column, row)))
        .collect();
    cells.shuffle(rng);
    let mut puzzle = solution.clone();

    for &(column, row) in cells.iter().take(count) {
        puzzle.clear_cell(column, row).unwrap();
    }

    puzzle
}

fn assert_preserves_clues(puzzle: &SudokuGrid, solved: &SudokuGrid) {
    for row in 0..SIZE {
        for column in 0..SIZE {
            if let Some(number) = puzzle.get_cell(column, row).unwrap() {
                assert_eq!(Some(number),
                    solved.get_cell(column, row).unwrap());
            }
        }
    }
}

#[test]
fn transformed_solutions_stay_valid() {
    let mut rng = rng(17);

    for _ in 0..ITERATIONS_PER_RUN {
        let solution = transformed_solution(&mut rng);

        assert!(solution.is_full());
        assert!(validator::validate(&solution).is_empty());
    }
}

#[test]
fn backtracking_completes_random_puzzles() {
    let mut rng = rng(42);

    for _ in 0..ITERATIONS_PER_RUN {
        let solution = transformed_solution(&mut rng);
        let puzzle = remove_clues(&solution, &mut rng, CLUES_REMOVED);
        let solved = solve_puzzle(&puzzle).unwrap();

        assert!(solved.is_full());
        assert!(validator::is_valid(&solved));
        assert_preserves_clues(&puzzle, &solved);
    }
}

#[test]
fn backtracking_is_deterministic_on_random_puzzles() {
    let mut rng = rng(23);

    for _ in 0..ITERATIONS_PER_RUN {
        let solution = transformed_solution(&mut rng);
        let puzzle = remove_clues(&solution, &mut rng, CLUES_REMOVED);
        let first = BacktrackingSolver.solve(&puzzle);
        let second = BacktrackingSolver.solve(&puzzle);

        assert_eq!(first, second);

        if let Solution::Impossible = first {
            panic!("Puzzle derived from a solved grid marked as impossible.");
        }
    }
}
