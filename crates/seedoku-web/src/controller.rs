//! Interaction state machine for a single puzzle session.
//!
//! This layer is DOM-free: it maps keystrokes and commands to engine calls
//! and tells the caller what to show, without touching any element itself.

use seedoku_core::{PlayResult, SolveResult};

use crate::engine::Engine;

/// Transient-state durations, in milliseconds.
pub const ERROR_PULSE_MS: i32 = 200;
pub const WARN_PULSE_MS: i32 = 200;
pub const SHAKE_PULSE_MS: i32 = 600;

/// What a keystroke on a cell amounted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Not an editing key (modifiers, arrows, function keys). The engine was
    /// not consulted.
    Ignored,
    /// A single character that is not a digit; the cell gets an error pulse.
    InvalidKey,
    /// The engine refused the move; the cell gets a warning pulse and keeps
    /// its displayed value.
    Rejected,
    /// The move stuck; the cell should now display `value` (blank for 0).
    Applied { value: u8 },
}

enum MappedKey {
    Ignored,
    Invalid,
    Value(u8),
}

/// Clear keys map to 0, single digit characters to their value, any other
/// single character is invalid, everything else is ignored outright.
fn map_key(key: &str) -> MappedKey {
    if key == "Backspace" || key == "Delete" {
        return MappedKey::Value(0);
    }
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => c
            .to_digit(10)
            .map_or(MappedKey::Invalid, |digit| MappedKey::Value(digit as u8)),
        _ => MappedKey::Ignored,
    }
}

/// Drives one puzzle session against an opaque engine.
///
/// The solved flag is sticky: once the grid has been observed solved it
/// stays set until [`SessionCore::reset`], the only transition back.
pub struct SessionCore<E: Engine> {
    engine: E,
    solved: bool,
}

impl<E: Engine> SessionCore<E> {
    pub fn new(engine: E) -> Self {
        // A clue-complete puzzle starts out solved.
        let solved = engine.is_solved();
        Self { engine, solved }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Feeds one keystroke on the cell at `index` through the validation
    /// pipeline, re-querying the solved state after every processed key.
    pub fn edit(&mut self, index: usize, key: &str) -> EditOutcome {
        let outcome = match map_key(key) {
            MappedKey::Ignored => return EditOutcome::Ignored,
            MappedKey::Invalid => EditOutcome::InvalidKey,
            MappedKey::Value(value) => match self.engine.play(index, value) {
                PlayResult::Ok => EditOutcome::Applied { value },
                PlayResult::InvalidValue
                | PlayResult::ImmutableCell
                | PlayResult::RuleViolation => EditOutcome::Rejected,
            },
        };
        if self.engine.is_solved() {
            self.solved = true;
        }
        outcome
    }

    pub fn solve(&mut self) -> SolveResult {
        let result = self.engine.solve();
        if result == SolveResult::Solved {
            self.solved = true;
        }
        result
    }

    /// Reverts the grid to its clues and clears the solved flag.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.solved = false;
    }
}
