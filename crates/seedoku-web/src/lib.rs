//! Browser front end for seeded Sudoku sessions.
//!
//! The puzzle itself lives in `seedoku-core`; this crate owns the mapping
//! between the engine, the DOM grid, and the player's keystrokes. A session
//! is pinned to the `seed` query parameter of the page location, so the same
//! URL always reproduces the same puzzle.

use wasm_bindgen::prelude::*;

mod controller;
mod engine;
mod feedback;
mod grid;
mod seed;
mod session;

// Browser tests require wasm-pack test to run
#[cfg(all(test, target_arch = "wasm32"))]
mod tests;

pub use controller::{EditOutcome, SessionCore};
pub use engine::Engine;

// Initialize panic hook for better error messages
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Handle that keeps the session's DOM callbacks alive for the page's
/// lifetime. Dropping it detaches nothing but invalidates the closures, so
/// the embedding script should hold on to it.
#[wasm_bindgen]
pub struct SudokuApp {
    _session: session::SessionHandle,
}

/// Starts a session against the current page.
///
/// Returns `None` when the location had no (or a malformed) `seed` parameter:
/// a fresh seed has been written into the query string and a reload is in
/// flight, so there is no session to run yet.
#[wasm_bindgen]
pub fn launch() -> Result<Option<SudokuApp>, JsValue> {
    Ok(session::bootstrap()?.map(|handle| SudokuApp { _session: handle }))
}
