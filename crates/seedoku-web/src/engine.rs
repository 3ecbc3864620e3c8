//! The puzzle engine as the session sees it: an opaque capability set.

use seedoku_core::{Board, Generator, PlayResult, SolveResult, GRID_SPAN};

/// Everything the session controller may ask of a puzzle engine.
///
/// The controller is generic over this trait, never over `Board`, which
/// keeps the interaction state machine testable against a scripted engine.
/// All operations are synchronous and infallible for in-contract inputs;
/// failure is communicated through [`PlayResult`] and [`SolveResult`] only.
pub trait Engine {
    /// Grid side length; the cell view holds `span * span` entries.
    fn span(&self) -> usize;

    /// Current cell values, row-major, `0` meaning empty.
    ///
    /// The borrow ends with the call, so callers re-read this after `solve`
    /// or `reset` rather than holding on to stale contents.
    fn cells(&self) -> &[u8];

    /// True iff the cell at `index` was not a pre-filled clue.
    fn is_mutable(&self, index: usize) -> bool;

    /// Attempts to set a cell (`0` clears it); a non-`Ok` result means the
    /// stored grid is unchanged.
    fn play(&mut self, index: usize, value: u8) -> PlayResult;

    /// True iff every cell is filled and all placement rules hold.
    fn is_solved(&self) -> bool;

    /// Attempts to fill the whole grid; on `Unsolvable` the grid is
    /// unchanged.
    fn solve(&mut self) -> SolveResult;

    /// Reverts every mutable cell to empty.
    fn reset(&mut self);
}

impl Engine for Board {
    fn span(&self) -> usize {
        GRID_SPAN
    }

    fn cells(&self) -> &[u8] {
        Board::cells(self).as_slice()
    }

    fn is_mutable(&self, index: usize) -> bool {
        Board::is_mutable(self, index)
    }

    fn play(&mut self, index: usize, value: u8) -> PlayResult {
        Board::play(self, index, value)
    }

    fn is_solved(&self) -> bool {
        Board::is_solved(self)
    }

    fn solve(&mut self) -> SolveResult {
        Board::solve(self)
    }

    fn reset(&mut self) {
        Board::reset(self)
    }
}

/// Builds the engine from the raw location seed.
///
/// The seed manager hands the parameter through unparsed; its numeric
/// interpretation lives here. `None` means the parameter was malformed and
/// the session should fall back to the regenerate-and-reload path.
pub(crate) fn from_seed_param(raw: &str, clue_qty: usize) -> Option<Board> {
    let seed = raw.trim().parse::<u32>().ok()?;
    Some(Generator::from_seed(seed).generate(clue_qty))
}
