use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

/// Retrieve the global `window` object.
///
/// # Panics
/// Panics if executed outside of a browser context where `window` is unavailable.
#[must_use]
pub fn window() -> Window {
    web_sys::window().expect("`window` should be available in web context")
}

/// Retrieve the document object for DOM interactions.
///
/// # Panics
/// Panics when the document cannot be accessed from the current browser window.
#[must_use]
pub fn document() -> Document {
    window()
        .document()
        .expect("`document` should exist in browser context")
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Wall-clock milliseconds, as reported by the browser.
#[must_use]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// A browser interval that is cleared when dropped.
pub struct IntervalGuard {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl IntervalGuard {
    /// Run `tick` every `period_ms` until the guard is dropped.
    ///
    /// # Errors
    /// Returns the JavaScript error if the browser refuses to register the interval.
    pub fn start(period_ms: i32, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let id = window().set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms,
        )?;
        Ok(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for IntervalGuard {
    fn drop(&mut self) {
        if let Some(win) = web_sys::window() {
            win.clear_interval_with_handle(self.id);
        }
    }
}

/// A document-level `keydown` listener that is removed when dropped.
pub struct KeyListener {
    closure: Closure<dyn FnMut(web_sys::KeyboardEvent)>,
}

impl KeyListener {
    /// Call `handler` for every key pressed while the page has focus.
    ///
    /// # Errors
    /// Returns the JavaScript error if the listener cannot be attached.
    pub fn attach(handler: impl FnMut(web_sys::KeyboardEvent) + 'static) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::KeyboardEvent)>);
        document()
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        Ok(Self { closure })
    }
}

impl Drop for KeyListener {
    fn drop(&mut self) {
        if let Some(doc) = web_sys::window().and_then(|win| win.document()) {
            let _ = doc.remove_event_listener_with_callback(
                "keydown",
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}
