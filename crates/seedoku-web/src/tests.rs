//! Browser-side tests for the DOM layer.
//!
//! Run with `wasm-pack test --headless --chrome crates/seedoku-web`; the
//! DOM-free layers are covered by the native module tests instead.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{HtmlElement, HtmlInputElement, KeyboardEvent};

use seedoku_core::{Generator, GRID_AREA, GRID_SPAN};

use crate::engine::Engine;
use crate::feedback::Feedback;
use crate::grid::GridView;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

fn fresh_element() -> HtmlElement {
    document()
        .create_element("div")
        .unwrap()
        .dyn_into()
        .unwrap()
}

fn noop_key_handler() -> Closure<dyn FnMut(KeyboardEvent)> {
    Closure::new(|_: KeyboardEvent| {})
}

#[wasm_bindgen_test]
fn pulse_applies_the_class_immediately() {
    let feedback = Feedback::new(web_sys::window().unwrap());
    let target = fresh_element();

    feedback.pulse(&target, "sudoku-item-warn", 200).unwrap();
    assert!(target.class_list().contains("sudoku-item-warn"));
    assert_eq!(feedback.pending_len(), 1);
}

#[wasm_bindgen_test]
fn repulsing_the_same_pair_keeps_a_single_pending_timer() {
    let feedback = Feedback::new(web_sys::window().unwrap());
    let target = fresh_element();

    feedback.pulse(&target, "sudoku-item-error", 200).unwrap();
    feedback.pulse(&target, "sudoku-item-error", 200).unwrap();

    assert_eq!(feedback.pending_len(), 1);
    assert!(target.class_list().contains("sudoku-item-error"));
}

#[wasm_bindgen_test]
fn distinct_pairs_get_distinct_timers() {
    let feedback = Feedback::new(web_sys::window().unwrap());
    let first = fresh_element();
    let second = fresh_element();

    feedback.pulse(&first, "sudoku-item-error", 200).unwrap();
    feedback.pulse(&first, "sudoku-item-warn", 200).unwrap();
    feedback.pulse(&second, "sudoku-item-error", 200).unwrap();

    assert_eq!(feedback.pending_len(), 3);
}

#[wasm_bindgen_test]
fn render_builds_one_input_per_cell() {
    let board = Generator::from_seed(7).generate(25);
    let view = GridView::new(document(), fresh_element(), GRID_SPAN).unwrap();
    let on_key = noop_key_handler();

    view.render(&board, &on_key).unwrap();
    assert_eq!(view.container().child_element_count() as usize, GRID_AREA);

    let children = view.container().children();
    let mut read_only = 0;
    for index in 0..GRID_AREA {
        let cell: HtmlInputElement = children.item(index as u32).unwrap().dyn_into().unwrap();
        let value = board.cells()[index];
        assert_eq!(cell.value(), if value == 0 { String::new() } else { value.to_string() });
        if cell.read_only() {
            read_only += 1;
            assert_eq!(cell.tab_index(), -1);
            assert!(!Engine::is_mutable(&board, index));
        }
    }
    assert_eq!(read_only, 25);
}

#[wasm_bindgen_test]
fn render_is_idempotent() {
    let board = Generator::from_seed(11).generate(25);
    let view = GridView::new(document(), fresh_element(), GRID_SPAN).unwrap();
    let on_key = noop_key_handler();

    view.render(&board, &on_key).unwrap();
    view.render(&board, &on_key).unwrap();
    assert_eq!(view.container().child_element_count() as usize, GRID_AREA);
}
