//! The visual grid: one `<input>` element per engine cell.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, KeyboardEvent};

use crate::engine::Engine;

const CELL_CLASS: &str = "sudoku-item";
const SOLVED_CLASS: &str = "sudoku-grid-solved";
pub(crate) const CELL_INDEX_ATTR: &str = "data-index";

/// Renders the board into a CSS-grid container.
///
/// The view never assumes the engine's cell contents are stable across
/// engine calls: every [`GridView::render`] re-reads them from scratch.
pub(crate) struct GridView {
    document: Document,
    container: HtmlElement,
}

impl GridView {
    pub(crate) fn new(
        document: Document,
        container: HtmlElement,
        span: usize,
    ) -> Result<Self, JsValue> {
        let template = format!("repeat({span}, 1fr)");
        let style = container.style();
        style.set_property("grid-template-columns", &template)?;
        style.set_property("grid-template-rows", &template)?;
        Ok(Self { document, container })
    }

    /// Discards every cell element and rebuilds the grid from the engine's
    /// current values, in index order.
    ///
    /// Clue cells are read-only and dropped from tab navigation, but still
    /// get the keystroke handler: their rejections must surface as a warning
    /// pulse rather than silence. Called after construction, `reset`, and a
    /// successful `solve`; a successful single-cell play updates only the
    /// affected input instead.
    pub(crate) fn render<E: Engine>(
        &self,
        engine: &E,
        on_key: &Closure<dyn FnMut(KeyboardEvent)>,
    ) -> Result<(), JsValue> {
        self.container.set_inner_html("");
        for (index, &value) in engine.cells().iter().enumerate() {
            let cell: HtmlInputElement = self.document.create_element("input")?.dyn_into()?;
            cell.class_list().add_1(CELL_CLASS)?;
            cell.set_attribute(CELL_INDEX_ATTR, &index.to_string())?;
            if value != 0 {
                cell.set_value(&value.to_string());
            }
            if !engine.is_mutable(index) {
                cell.set_read_only(true);
                cell.set_tab_index(-1);
            }
            cell.add_event_listener_with_callback("keydown", on_key.as_ref().unchecked_ref())?;
            self.container.append_child(&cell)?;
        }
        Ok(())
    }

    /// Toggles the global solved marker on the grid container.
    pub(crate) fn set_solved(&self, solved: bool) -> Result<(), JsValue> {
        if solved {
            self.container.class_list().add_1(SOLVED_CLASS)
        } else {
            self.container.class_list().remove_1(SOLVED_CLASS)
        }
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn container(&self) -> &HtmlElement {
        &self.container
    }
}
