//! Browser rendering and timer
//!
//! The arena is a CSS grid; every snake segment and the power-up are grid
//! items positioned with `grid-area: row/column`.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};

use crate::session::{Renderer, TickTimer};
use crate::sim::{Arena, Snake};

const ARENA_ID: &str = "arena";
const OVERLAY_ID: &str = "overlay";
const SEGMENT_ID_PREFIX: &str = "snake-part";

/// Renders into `#arena` and shows `#overlay` on game over
pub struct DomRenderer {
    document: Document,
    arena: Option<Element>,
    power_up: Option<HtmlElement>,
}

impl DomRenderer {
    /// Configure the arena grid for `size` x `size` cells.
    /// Missing DOM elements are logged and turn drawing into a no-op.
    pub fn new(document: Document, size: i32) -> Self {
        let arena = document.get_element_by_id(ARENA_ID);
        let Some(arena_el) = arena.as_ref() else {
            log::error!("No #{} element, nothing will be drawn", ARENA_ID);
            return Self {
                document,
                arena: None,
                power_up: None,
            };
        };

        let _ = arena_el.set_attribute(
            "style",
            &format!("grid-template: repeat({size}, 1fr)/repeat({size}, 1fr);"),
        );

        let power_up = document
            .create_element("div")
            .ok()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(el) = power_up.as_ref() {
            let _ = el.style().set_css_text("display:none;");
            let _ = arena_el.append_child(el);
        }

        Self {
            document,
            arena,
            power_up,
        }
    }

    fn clear_segments(&self, arena: &Element) {
        let selector = format!("*[id^=\"{}\"]", SEGMENT_ID_PREFIX);
        if let Ok(parts) = arena.query_selector_all(&selector) {
            for i in 0..parts.length() {
                if let Some(part) = parts.get(i) {
                    let _ = arena.remove_child(&part);
                }
            }
        }
    }
}

impl Renderer for DomRenderer {
    fn draw(&mut self, snake: &Snake, arena: &Arena) {
        let Some(arena_el) = self.arena.as_ref() else {
            return;
        };

        self.clear_segments(arena_el);

        for (index, part) in snake.segments().iter().enumerate() {
            let Ok(el) = self.document.create_element("div") else {
                continue;
            };
            el.set_id(&format!("{}-{}", SEGMENT_ID_PREFIX, index));
            let _ = el.set_attribute(
                "style",
                &format!("background-color: green; grid-area: {}/{};", part.row, part.column),
            );
            let _ = arena_el.append_child(&el);
        }

        if let Some(el) = self.power_up.as_ref() {
            let _ = match arena.power_up {
                Some(loc) => el.style().set_css_text(&format!(
                    "background-color: red; grid-area: {}/{};",
                    loc.row, loc.column
                )),
                None => el.style().set_css_text("display:none;"),
            };
        }
    }

    fn show_game_over(&mut self) {
        let overlay = self
            .document
            .get_element_by_id(OVERLAY_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        match overlay {
            Some(el) => {
                let _ = el.style().set_property("display", "flex");
            }
            None => log::warn!("No #{} element to show", OVERLAY_ID),
        }
    }
}

/// A `setInterval` registration
pub struct IntervalTimer {
    handle: i32,
}

impl IntervalTimer {
    /// Call `callback` every `interval_ms` milliseconds. The closure is
    /// leaked for the lifetime of the page.
    pub fn start(interval_ms: u32, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms as i32,
        )?;
        closure.forget();
        Ok(Self { handle })
    }
}

impl TickTimer for IntervalTimer {
    fn cancel(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
            log::info!("Tick timer stopped");
        }
    }
}
