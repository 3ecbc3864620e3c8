use crate::solver::{self, CandidateOrder};

/// Grid side length.
pub const GRID_SPAN: usize = 9;
/// Side length of one block (the 3x3 sub-square).
pub const BLOCK_SPAN: usize = 3;
/// Total number of cells.
pub const GRID_AREA: usize = GRID_SPAN * GRID_SPAN;
/// Clue quantity used when the caller has no opinion.
pub const DEFAULT_CLUE_QTY: usize = 21;

/// Outcome of a single-cell move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayResult {
    Ok,
    /// Value outside `0..=9`.
    InvalidValue,
    /// The cell is a clue and cannot be edited.
    ImmutableCell,
    /// The value already appears in the cell's row, column, or block.
    RuleViolation,
}

/// Outcome of a full-grid solve attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveResult {
    Solved,
    Unsolvable,
}

/// A 9x9 grid plus the clue mask fixed at generation time.
///
/// Cells hold `0` for empty or `1..=9`. All mutation goes through
/// [`Board::play`], [`Board::solve`] and [`Board::reset`]; a rejected move
/// leaves the grid untouched. Cell indices are row-major; passing an index
/// outside `0..GRID_AREA` is a caller bug and panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    pub(crate) cells: [u8; GRID_AREA],
    pub(crate) clues: [bool; GRID_AREA],
}

impl Board {
    /// Builds a board from raw cell values, treating every non-zero cell as
    /// a clue. The values are taken as-is and are not checked for conflicts.
    pub fn from_cells(cells: [u8; GRID_AREA]) -> Self {
        let mut clues = [false; GRID_AREA];
        for (clue, &value) in clues.iter_mut().zip(cells.iter()) {
            *clue = value != 0;
        }
        Self { cells, clues }
    }

    pub(crate) fn empty() -> Self {
        Self {
            cells: [0; GRID_AREA],
            clues: [false; GRID_AREA],
        }
    }

    /// Current cell values in row-major order, `0` meaning empty.
    pub fn cells(&self) -> &[u8; GRID_AREA] {
        &self.cells
    }

    /// Whether the cell at `index` may be edited by the player. Cells that
    /// started empty stay mutable even after being filled.
    pub fn is_mutable(&self, index: usize) -> bool {
        !self.clues[index]
    }

    /// Attempts to set the cell at `index` to `value`, `0` clearing it.
    /// On anything but [`PlayResult::Ok`] the grid is left unchanged.
    pub fn play(&mut self, index: usize, value: u8) -> PlayResult {
        if value > 9 {
            return PlayResult::InvalidValue;
        }
        if self.clues[index] {
            return PlayResult::ImmutableCell;
        }
        if value != 0 && self.conflicts_at(index, value) {
            return PlayResult::RuleViolation;
        }
        self.cells[index] = value;
        PlayResult::Ok
    }

    /// True when every cell is filled and no row, column, or block repeats
    /// a value.
    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
            && (0..GRID_AREA).all(|index| !self.conflicts_at(index, self.cells[index]))
    }

    /// Fills the whole grid consistently with the clues and any played
    /// values. On [`SolveResult::Unsolvable`] the grid is left unchanged.
    pub fn solve(&mut self) -> SolveResult {
        if solver::fill_grid(self, &mut CandidateOrder::Ascending) {
            SolveResult::Solved
        } else {
            SolveResult::Unsolvable
        }
    }

    /// Reverts every non-clue cell to empty, leaving clues untouched.
    pub fn reset(&mut self) {
        for (cell, &clue) in self.cells.iter_mut().zip(self.clues.iter()) {
            if !clue {
                *cell = 0;
            }
        }
    }

    /// True when `value` already appears elsewhere in the row, column, or
    /// block of `index`. The cell's own content is ignored, so overwriting
    /// a player value with itself or another legal digit passes.
    pub(crate) fn conflicts_at(&self, index: usize, value: u8) -> bool {
        let row = index / GRID_SPAN;
        let col = index % GRID_SPAN;
        row_indices(row)
            .chain(column_indices(col))
            .chain(block_indices(index))
            .any(|other| other != index && self.cells[other] == value)
    }
}

fn row_indices(row: usize) -> impl Iterator<Item = usize> {
    (row * GRID_SPAN)..((row + 1) * GRID_SPAN)
}

fn column_indices(col: usize) -> impl Iterator<Item = usize> {
    (col..GRID_AREA).step_by(GRID_SPAN)
}

fn block_indices(index: usize) -> impl Iterator<Item = usize> {
    let row0 = (index / GRID_SPAN) - (index / GRID_SPAN) % BLOCK_SPAN;
    let col0 = (index % GRID_SPAN) - (index % GRID_SPAN) % BLOCK_SPAN;
    (0..BLOCK_SPAN).flat_map(move |row| {
        let start = (row0 + row) * GRID_SPAN + col0;
        start..start + BLOCK_SPAN
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Generator;

    /// A complete valid grid built from the canonical shifted-row pattern.
    fn solved_cells() -> [u8; GRID_AREA] {
        let mut cells = [0; GRID_AREA];
        for row in 0..GRID_SPAN {
            for col in 0..GRID_SPAN {
                let value = (row * BLOCK_SPAN + row / BLOCK_SPAN + col) % GRID_SPAN;
                cells[row * GRID_SPAN + col] = value as u8 + 1;
            }
        }
        cells
    }

    #[test]
    fn play_sets_and_clears_mutable_cells() {
        let mut board = Board::from_cells([0; GRID_AREA]);

        assert_eq!(board.play(0, 5), PlayResult::Ok);
        assert_eq!(board.cells()[0], 5);

        assert_eq!(board.play(0, 0), PlayResult::Ok);
        assert_eq!(board.cells()[0], 0);
    }

    #[test]
    fn play_rejects_values_out_of_range() {
        let mut board = Board::from_cells([0; GRID_AREA]);

        assert_eq!(board.play(0, 10), PlayResult::InvalidValue);
        assert_eq!(board.play(0, 255), PlayResult::InvalidValue);
        assert_eq!(board.cells()[0], 0);
    }

    #[test]
    fn play_rejects_clue_cells() {
        let mut board = Board::from_cells(solved_cells());
        let before = *board.cells();

        assert_eq!(board.play(0, 5), PlayResult::ImmutableCell);
        assert_eq!(board.play(0, 0), PlayResult::ImmutableCell);
        assert_eq!(board.cells(), &before);
    }

    #[test]
    fn play_rejects_row_column_and_block_conflicts() {
        let mut board = Board::from_cells([0; GRID_AREA]);
        assert_eq!(board.play(0, 5), PlayResult::Ok);

        // Same row, same column, same block.
        assert_eq!(board.play(8, 5), PlayResult::RuleViolation);
        assert_eq!(board.play(72, 5), PlayResult::RuleViolation);
        assert_eq!(board.play(10, 5), PlayResult::RuleViolation);

        assert_eq!(board.cells()[8], 0);
        assert_eq!(board.cells()[72], 0);
        assert_eq!(board.cells()[10], 0);
    }

    #[test]
    fn play_allows_overwriting_a_player_value() {
        let mut board = Board::from_cells([0; GRID_AREA]);
        assert_eq!(board.play(0, 5), PlayResult::Ok);

        // The cell's own content never conflicts with the new value.
        assert_eq!(board.play(0, 5), PlayResult::Ok);
        assert_eq!(board.play(0, 7), PlayResult::Ok);
        assert_eq!(board.cells()[0], 7);
    }

    #[test]
    fn is_solved_requires_full_and_valid_grid() {
        let board = Board::from_cells(solved_cells());
        assert!(board.is_solved());

        let mut with_hole = solved_cells();
        with_hole[40] = 0;
        assert!(!Board::from_cells(with_hole).is_solved());

        let mut with_duplicate = solved_cells();
        with_duplicate[1] = with_duplicate[0];
        assert!(!Board::from_cells(with_duplicate).is_solved());
    }

    #[test]
    fn playing_the_last_missing_value_solves_the_grid() {
        let mut cells = solved_cells();
        let missing = cells[40];
        cells[40] = 0;

        let mut board = Board::from_cells(cells);
        assert!(board.is_mutable(40));
        assert!(!board.is_solved());

        assert_eq!(board.play(40, missing), PlayResult::Ok);
        assert!(board.is_solved());
    }

    #[test]
    fn solve_fills_an_empty_grid_respecting_played_values() {
        let mut board = Board::from_cells([0; GRID_AREA]);
        assert_eq!(board.play(0, 5), PlayResult::Ok);

        assert_eq!(board.solve(), SolveResult::Solved);
        assert!(board.is_solved());
        assert_eq!(board.cells()[0], 5);
    }

    #[test]
    fn solve_is_deterministic() {
        let mut first = Board::from_cells([0; GRID_AREA]);
        let mut second = Board::from_cells([0; GRID_AREA]);

        assert_eq!(first.solve(), SolveResult::Solved);
        assert_eq!(second.solve(), SolveResult::Solved);
        assert_eq!(first, second);
    }

    #[test]
    fn unsolvable_grid_is_left_unchanged() {
        // Row 0 is missing only a 9 at its last cell, but column 8 already
        // holds a 9, so that cell has no candidate at all.
        let mut cells = [0; GRID_AREA];
        for col in 0..GRID_SPAN - 1 {
            cells[col] = col as u8 + 1;
        }
        cells[GRID_SPAN + 8] = 9;

        let mut board = Board::from_cells(cells);
        let before = board.clone();

        assert_eq!(board.solve(), SolveResult::Unsolvable);
        assert_eq!(board, before);
    }

    #[test]
    fn reset_clears_only_player_cells() {
        let mut board = Generator::from_seed(7).generate(25);
        let initial = board.clone();

        let index = (0..GRID_AREA)
            .find(|&i| board.is_mutable(i))
            .expect("generated puzzle has mutable cells");
        let value = (1..=9)
            .find(|&v| board.play(index, v) == PlayResult::Ok)
            .expect("a solvable puzzle leaves at least one legal value");
        assert_eq!(board.cells()[index], value);

        board.reset();
        assert_eq!(board, initial);
    }
}
