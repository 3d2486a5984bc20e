//! In-memory host that records every call made to it.

use crate::host::Host;
use crate::input::Keyboard;
use fw_keymap::KeyEvent;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    CreateCanvas(u32, u32),
    SetTitle(String),
    AddKeyListeners,
    RemoveKeyListeners,
    UploadPixels(u32, u32),
    RequestAnimationFrame,
}

#[derive(Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
    pub keyboard: Option<Rc<Keyboard>>,
    pub listener_installs: usize,
    pub last_frame: Vec<u32>,
    pub date: f64,
    pub perf: f64,
}

impl RecordingHost {
    /// Deliver a key-down the way a browser listener would.
    pub fn fire_key_down(&self, event: KeyEvent) -> Option<bool> {
        self.keyboard.as_ref().map(|kb| kb.key_down(&event))
    }

    pub fn fire_key_up(&self, event: KeyEvent) -> Option<bool> {
        self.keyboard.as_ref().map(|kb| kb.key_up(&event))
    }
}

impl Host for RecordingHost {
    fn create_canvas(&mut self, width: u32, height: u32) {
        self.calls.push(HostCall::CreateCanvas(width, height));
    }

    fn set_title(&mut self, title: &str) {
        self.calls.push(HostCall::SetTitle(title.to_string()));
    }

    fn add_key_listeners(&mut self, keyboard: Rc<Keyboard>) {
        self.calls.push(HostCall::AddKeyListeners);
        self.listener_installs += 1;
        self.keyboard = Some(keyboard);
    }

    fn remove_key_listeners(&mut self) {
        self.calls.push(HostCall::RemoveKeyListeners);
        self.keyboard = None;
    }

    fn upload_pixels(&mut self, pixels: &[u32], width: u32, height: u32) {
        self.calls.push(HostCall::UploadPixels(width, height));
        self.last_frame = pixels.to_vec();
    }

    fn request_animation_frame(&mut self) {
        self.calls.push(HostCall::RequestAnimationFrame);
    }

    fn date_now(&self) -> f64 {
        self.date
    }

    fn performance_now(&self) -> f64 {
        self.perf
    }
}
