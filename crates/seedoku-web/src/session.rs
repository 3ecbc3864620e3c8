//! DOM wiring for a puzzle session: command buttons, the keystroke handler,
//! and the mapping from controller outcomes to visual effects.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent, Window};

use seedoku_core::{Board, SolveResult, DEFAULT_CLUE_QTY, GRID_SPAN};

use crate::controller::{EditOutcome, SessionCore, ERROR_PULSE_MS, SHAKE_PULSE_MS, WARN_PULSE_MS};
use crate::engine;
use crate::feedback::Feedback;
use crate::grid::{GridView, CELL_INDEX_ATTR};
use crate::seed;

const GRID_ID: &str = "sudoku-grid";
const GENERATE_BUTTON_ID: &str = "generate-button";
const SOLVE_BUTTON_ID: &str = "solve-button";
const RESET_BUTTON_ID: &str = "reset-button";
const HIDDEN_CLASS: &str = "hidden";
const CELL_ERROR_CLASS: &str = "sudoku-item-error";
const CELL_WARN_CLASS: &str = "sudoku-item-warn";
const BUTTON_SHAKE_CLASS: &str = "button-shake";

/// Keeps the session and its event closures alive.
pub(crate) struct SessionHandle {
    _session: Rc<Session>,
    _commands: Vec<Closure<dyn FnMut()>>,
}

struct Session {
    window: Window,
    core: RefCell<SessionCore<Board>>,
    grid: GridView,
    feedback: Feedback,
    solve_button: HtmlElement,
    // Shared by every cell; also needed to re-render after solve/reset.
    on_key: RefCell<Option<Closure<dyn FnMut(KeyboardEvent)>>>,
}

/// Builds the whole session against the current page, or triggers a reload
/// with a fresh seed and returns `None` when the location has no usable one.
pub(crate) fn bootstrap() -> Result<Option<SessionHandle>, JsValue> {
    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let Some(raw_seed) = seed::ensure_seed(&window)? else {
        return Ok(None);
    };
    let Some(board) = engine::from_seed_param(&raw_seed, DEFAULT_CLUE_QTY) else {
        // A malformed seed gets replaced exactly like a missing one.
        seed::regenerate(&window)?;
        return Ok(None);
    };

    let container = element_by_id(&document, GRID_ID)?;
    let grid = GridView::new(document.clone(), container, GRID_SPAN)?;
    let feedback = Feedback::new(window.clone());
    let generate_button = element_by_id(&document, GENERATE_BUTTON_ID)?;
    let solve_button = element_by_id(&document, SOLVE_BUTTON_ID)?;
    let reset_button = element_by_id(&document, RESET_BUTTON_ID)?;

    let session = Rc::new(Session {
        window,
        core: RefCell::new(SessionCore::new(board)),
        grid,
        feedback,
        solve_button: solve_button.clone(),
        on_key: RefCell::new(None),
    });

    let on_key = {
        let session = Rc::clone(&session);
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if let Err(err) = session.handle_cell_key(&event) {
                web_sys::console::error_2(&"cell keystroke failed".into(), &err);
            }
        })
    };
    session.on_key.replace(Some(on_key));

    let mut commands = Vec::with_capacity(3);
    commands.push(wire_button(&generate_button, {
        let session = Rc::clone(&session);
        move || session.handle_generate()
    })?);
    commands.push(wire_button(&solve_button, {
        let session = Rc::clone(&session);
        move || session.handle_solve()
    })?);
    commands.push(wire_button(&reset_button, {
        let session = Rc::clone(&session);
        move || session.handle_reset()
    })?);

    session.redraw()?;
    if session.core.borrow().is_solved() {
        // Clue-complete edge case: the fresh puzzle is already solved.
        session.grid.set_solved(true)?;
    }

    Ok(Some(SessionHandle {
        _session: session,
        _commands: commands,
    }))
}

impl Session {
    fn redraw(&self) -> Result<(), JsValue> {
        let on_key = self.on_key.borrow();
        let on_key = on_key.as_ref().ok_or("keystroke handler not wired")?;
        self.grid.render(self.core.borrow().engine(), on_key)
    }

    fn handle_cell_key(&self, event: &KeyboardEvent) -> Result<(), JsValue> {
        let Some(target) = event.target() else {
            return Ok(());
        };
        let Ok(cell) = target.dyn_into::<HtmlInputElement>() else {
            return Ok(());
        };
        let index = cell
            .get_attribute(CELL_INDEX_ATTR)
            .and_then(|raw| raw.parse::<usize>().ok())
            .ok_or("cell is missing its grid index")?;

        // The controller is authoritative for what the cell displays, so the
        // browser's own input handling is suppressed regardless of outcome.
        event.prevent_default();

        match self.core.borrow_mut().edit(index, &event.key()) {
            EditOutcome::Ignored => {}
            EditOutcome::InvalidKey => {
                self.feedback
                    .pulse(cell.as_ref(), CELL_ERROR_CLASS, ERROR_PULSE_MS)?;
            }
            EditOutcome::Rejected => {
                self.feedback
                    .pulse(cell.as_ref(), CELL_WARN_CLASS, WARN_PULSE_MS)?;
            }
            EditOutcome::Applied { value } => cell.set_value(&display_digit(value)),
        }

        if self.core.borrow().is_solved() {
            self.grid.set_solved(true)?;
        }
        Ok(())
    }

    fn handle_generate(&self) -> Result<(), JsValue> {
        seed::regenerate(&self.window)
    }

    fn handle_solve(&self) -> Result<(), JsValue> {
        let result = self.core.borrow_mut().solve();
        match result {
            SolveResult::Solved => {
                self.redraw()?;
                self.grid.set_solved(true)
            }
            SolveResult::Unsolvable => {
                self.feedback
                    .pulse(&self.solve_button, BUTTON_SHAKE_CLASS, SHAKE_PULSE_MS)
            }
        }
    }

    fn handle_reset(&self) -> Result<(), JsValue> {
        self.core.borrow_mut().reset();
        self.redraw()?;
        self.grid.set_solved(false)
    }
}

fn wire_button(
    button: &HtmlElement,
    mut action: impl FnMut() -> Result<(), JsValue> + 'static,
) -> Result<Closure<dyn FnMut()>, JsValue> {
    let handler = Closure::<dyn FnMut()>::new(move || {
        if let Err(err) = action() {
            web_sys::console::error_2(&"command failed".into(), &err);
        }
    });
    button.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
    // Each command becomes visible once its wiring is complete.
    button.class_list().remove_1(HIDDEN_CLASS)?;
    Ok(handler)
}

fn element_by_id(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HTML element")))
}

fn display_digit(value: u8) -> String {
    if value == 0 {
        String::new()
    } else {
        value.to_string()
    }
}
