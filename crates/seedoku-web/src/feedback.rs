//! Transient visual feedback: short-lived CSS classes with
//! cancel-and-restart semantics.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Window};

const PULSE_KEY_ATTR: &str = "data-pulse-key";

type PulseKey = (u32, &'static str);

struct PendingPulse {
    handle: i32,
    // Keeps the expiry callback alive until it fires or is cancelled.
    _expire: Closure<dyn FnMut()>,
}

/// Applies a named CSS class to an element and removes it after a duration.
///
/// At most one removal timer exists per (element, class) pair at any time:
/// re-pulsing an identical pair cancels the pending timer and restarts the
/// duration, so rapid repeated triggers never stack or leak timers. The
/// pending table is owned here; nothing else cancels or inspects it.
pub(crate) struct Feedback {
    window: Window,
    pending: Rc<RefCell<HashMap<PulseKey, PendingPulse>>>,
    next_key: Cell<u32>,
}

impl Feedback {
    pub(crate) fn new(window: Window) -> Self {
        Self {
            window,
            pending: Rc::new(RefCell::new(HashMap::new())),
            next_key: Cell::new(0),
        }
    }

    /// Applies `class` to `target` and schedules its removal `duration_ms`
    /// from now, replacing any pending removal for the same pair.
    pub(crate) fn pulse(
        &self,
        target: &HtmlElement,
        class: &'static str,
        duration_ms: i32,
    ) -> Result<(), JsValue> {
        let key = (self.target_key(target)?, class);

        if let Some(previous) = self.pending.borrow_mut().remove(&key) {
            self.window.clear_timeout_with_handle(previous.handle);
        }

        target.class_list().add_1(class)?;

        let expire = {
            let pending = Rc::clone(&self.pending);
            let target = target.clone();
            Closure::<dyn FnMut()>::new(move || {
                let _ = target.class_list().remove_1(class);
                pending.borrow_mut().remove(&key);
            })
        };
        let handle = self.window.set_timeout_with_callback_and_timeout_and_arguments_0(
            expire.as_ref().unchecked_ref(),
            duration_ms,
        )?;

        self.pending
            .borrow_mut()
            .insert(key, PendingPulse { handle, _expire: expire });
        Ok(())
    }

    /// Identity for a DOM node, assigned lazily and stored on the node so
    /// repeated pulses on the same element hit the same table slot.
    fn target_key(&self, target: &HtmlElement) -> Result<u32, JsValue> {
        if let Some(existing) = target
            .get_attribute(PULSE_KEY_ATTR)
            .and_then(|raw| raw.parse().ok())
        {
            return Ok(existing);
        }
        let key = self.next_key.get();
        self.next_key.set(key + 1);
        target.set_attribute(PULSE_KEY_ATTR, &key.to_string())?;
        Ok(key)
    }

    #[cfg(all(test, target_arch = "wasm32"))]
    pub(crate) fn pending_len(&self) -> usize {
        self.pending.borrow().len()
    }
}
