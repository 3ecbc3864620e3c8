//! Backtracking fill shared by the solver and the generator.

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;

use crate::board::{Board, GRID_AREA};

/// Candidate ordering strategy: ascending gives the deterministic solver,
/// shuffled gives the generator its per-seed variety.
pub(crate) enum CandidateOrder<'a> {
    Ascending,
    Shuffled(&'a mut Pcg32),
}

/// Tries to fill every empty cell consistently with the cells already
/// placed. Returns `false` with the board restored to its entry state when
/// no consistent completion exists.
pub(crate) fn fill_grid(board: &mut Board, order: &mut CandidateOrder<'_>) -> bool {
    fill_from(board, 0, order)
}

fn fill_from(board: &mut Board, index: usize, order: &mut CandidateOrder<'_>) -> bool {
    if index >= GRID_AREA {
        return true;
    }
    if board.cells[index] != 0 {
        return fill_from(board, index + 1, order);
    }

    let mut candidates: Vec<u8> = (1..=9)
        .filter(|&value| !board.conflicts_at(index, value))
        .collect();
    if let CandidateOrder::Shuffled(rng) = order {
        candidates.shuffle(&mut **rng);
    }

    for value in candidates {
        board.cells[index] = value;
        if fill_from(board, index + 1, order) {
            return true;
        }
    }

    board.cells[index] = 0;
    false
}
