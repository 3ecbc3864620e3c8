//! Session seed handling via the location query string.

use js_sys::Math;
use wasm_bindgen::JsValue;
use web_sys::{UrlSearchParams, Window};

pub(crate) const SEED_PARAM: &str = "seed";

/// Returns the raw `seed` query parameter, or writes a fresh one into the
/// location and returns `None`.
///
/// A `None` is terminal for the current session: the location assignment has
/// queued a reload and no further session code should run. The parameter is
/// returned unparsed; its numeric interpretation belongs to the engine
/// binding.
pub(crate) fn ensure_seed(window: &Window) -> Result<Option<String>, JsValue> {
    let params = current_params(window)?;
    match params.get(SEED_PARAM) {
        Some(raw) => Ok(Some(raw)),
        None => {
            regenerate(window)?;
            Ok(None)
        }
    }
}

/// Writes a uniformly random seed in `[0, 2^32 - 1]` into the query string,
/// reloading the page onto the new puzzle.
pub(crate) fn regenerate(window: &Window) -> Result<(), JsValue> {
    let params = current_params(window)?;
    let seed = (Math::random() * f64::from(u32::MAX)) as u32;
    params.set(SEED_PARAM, &seed.to_string());
    window
        .location()
        .set_search(&String::from(params.to_string()))
}

fn current_params(window: &Window) -> Result<UrlSearchParams, JsValue> {
    UrlSearchParams::new_with_str(&window.location().search()?)
}
