//! Deterministic Sudoku engine: seeded puzzle generation, rule checking,
//! and a backtracking solver behind a small mutable-board API.
//!
//! The same seed and clue quantity always produce the same puzzle, including
//! which cells are clues, so a puzzle is fully described by its seed.

mod board;
mod generator;
mod solver;

pub use board::{Board, PlayResult, SolveResult, BLOCK_SPAN, DEFAULT_CLUE_QTY, GRID_AREA, GRID_SPAN};
pub use generator::Generator;
