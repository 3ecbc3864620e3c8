use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::board::{Board, GRID_AREA};
use crate::solver::{fill_grid, CandidateOrder};

/// Seeded puzzle generator.
///
/// Generation is fully driven by a PCG stream seeded from the session seed,
/// so the same seed and clue quantity always yield the same board, clue
/// mask included.
pub struct Generator {
    rng: Pcg32,
}

impl Generator {
    pub fn from_seed(seed: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(u64::from(seed)),
        }
    }

    /// Produces a puzzle with exactly `clue_qty` clues (capped at the grid
    /// area): a full random solution first, then cells carved back out.
    pub fn generate(&mut self, clue_qty: usize) -> Board {
        let clue_qty = clue_qty.min(GRID_AREA);

        let mut board = Board::empty();
        fill_grid(&mut board, &mut CandidateOrder::Shuffled(&mut self.rng));

        let mut indices: Vec<usize> = (0..GRID_AREA).collect();
        indices.shuffle(&mut self.rng);
        for &index in indices.iter().take(GRID_AREA - clue_qty) {
            board.cells[index] = 0;
        }

        for (clue, &value) in board.clues.iter_mut().zip(board.cells.iter()) {
            *clue = value != 0;
        }
        board
    }
}
