//! Browser implementation of [`Host`]: a 2D canvas, window keyboard
//! listeners, `requestAnimationFrame` and the page's clocks.

use crate::keys::key_event;
use fw_common::error::FwError;
use fw_platform::{Host, Keyboard};
use log::{debug, error};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, ImageData, KeyboardEvent, Window};

pub type FrameCallback = Box<dyn FnMut(f64)>;

type KeyClosure = Closure<dyn FnMut(KeyboardEvent)>;

struct KeyListeners {
    down: KeyClosure,
    up: KeyClosure,
}

pub struct WebHost {
    window: Window,
    document: Document,
    canvas_id: Option<String>,
    canvas: Option<HtmlCanvasElement>,
    context: Option<CanvasRenderingContext2d>,
    listeners: Option<KeyListeners>,
    frame_callback: Rc<RefCell<Option<FrameCallback>>>,
}

impl WebHost {
    /// Bind to the current page. With `canvas_id` an existing `<canvas>` is
    /// drawn into; otherwise one is created on first `create_canvas`.
    pub fn new(canvas_id: Option<String>) -> Result<Self, FwError> {
        let window = web_sys::window().ok_or_else(|| FwError::Host {
            message: "no global `window` exists".into(),
        })?;
        let document = window.document().ok_or_else(|| FwError::Host {
            message: "window has no document".into(),
        })?;
        Ok(Self {
            window,
            document,
            canvas_id,
            canvas: None,
            context: None,
            listeners: None,
            frame_callback: Rc::new(RefCell::new(None)),
        })
    }

    pub fn canvas(&self) -> Option<&HtmlCanvasElement> {
        self.canvas.as_ref()
    }

    /// Called with the rAF timestamp each time a requested frame fires.
    pub fn set_frame_callback(&mut self, callback: impl FnMut(f64) + 'static) {
        *self.frame_callback.borrow_mut() = Some(Box::new(callback));
    }

    fn find_or_create_canvas(&self) -> Result<HtmlCanvasElement, JsValue> {
        if let Some(id) = &self.canvas_id {
            if let Some(element) = self.document.get_element_by_id(id) {
                return Ok(element.dyn_into::<HtmlCanvasElement>()?);
            }
        }
        let canvas = self
            .document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        if let Some(id) = &self.canvas_id {
            canvas.set_id(id);
        }
        let body = self
            .document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        body.append_child(&canvas)?;
        Ok(canvas)
    }

    fn try_create_canvas(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        let canvas = match self.canvas.take() {
            Some(canvas) => canvas,
            None => self.find_or_create_canvas()?,
        };
        canvas.set_width(width);
        canvas.set_height(height);
        let context = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("No 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        self.canvas = Some(canvas);
        self.context = Some(context);
        Ok(())
    }

    fn try_upload(&self, pixels: &[u32], width: u32, height: u32) -> Result<(), JsValue> {
        let Some(context) = &self.context else {
            return Ok(());
        };
        if width == 0 || height == 0 {
            return Ok(());
        }
        let bytes: &[u8] = bytemuck::cast_slice(pixels);
        let image_data = ImageData::new_with_u8_clamped_array_and_sh(Clamped(bytes), width, height)?;
        context.put_image_data(&image_data, 0.0, 0.0)
    }
}

impl Host for WebHost {
    fn create_canvas(&mut self, width: u32, height: u32) {
        if let Err(err) = self.try_create_canvas(width, height) {
            error!("[hvid] cannot create canvas: {err:?}");
        }
    }

    fn set_title(&mut self, title: &str) {
        self.document.set_title(title);
    }

    fn add_key_listeners(&mut self, keyboard: Rc<Keyboard>) {
        self.remove_key_listeners();

        let kb = Rc::clone(&keyboard);
        let down = KeyClosure::new(move |event: KeyboardEvent| {
            if !kb.key_down(&key_event(&event)) {
                event.prevent_default();
            }
        });
        let kb = keyboard;
        let up = KeyClosure::new(move |event: KeyboardEvent| {
            if !kb.key_up(&key_event(&event)) {
                event.prevent_default();
            }
        });

        let added = self
            .window
            .add_event_listener_with_callback("keydown", down.as_ref().unchecked_ref())
            .and_then(|()| {
                self.window
                    .add_event_listener_with_callback("keyup", up.as_ref().unchecked_ref())
            });
        if let Err(err) = added {
            error!("[hvid] cannot add keyboard listeners: {err:?}");
        }
        debug!("[hvid] keyboard listeners installed");
        self.listeners = Some(KeyListeners { down, up });
    }

    fn remove_key_listeners(&mut self) {
        let Some(listeners) = self.listeners.take() else {
            return;
        };
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", listeners.down.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", listeners.up.as_ref().unchecked_ref());
        debug!("[hvid] keyboard listeners removed");
    }

    fn upload_pixels(&mut self, pixels: &[u32], width: u32, height: u32) {
        if let Err(err) = self.try_upload(pixels, width, height) {
            error!("[hvid] cannot upload pixels: {err:?}");
        }
    }

    fn request_animation_frame(&mut self) {
        let hook = Rc::clone(&self.frame_callback);
        // Freed by wasm-bindgen once the browser has invoked it.
        let callback = Closure::once_into_js(move |timestamp: f64| {
            // Take the callback out so it may replace itself while running.
            let taken = hook.borrow_mut().take();
            if let Some(mut callback) = taken {
                callback(timestamp);
                let mut slot = hook.borrow_mut();
                if slot.is_none() {
                    *slot = Some(callback);
                }
            }
        });
        if let Err(err) = self
            .window
            .request_animation_frame(callback.unchecked_ref())
        {
            error!("[hvid] cannot request animation frame: {err:?}");
        }
    }

    fn date_now(&self) -> f64 {
        js_sys::Date::now()
    }

    fn performance_now(&self) -> f64 {
        match self.window.performance() {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }
}

impl Drop for WebHost {
    fn drop(&mut self) {
        self.remove_key_listeners();
    }
}
