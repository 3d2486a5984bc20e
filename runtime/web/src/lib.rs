//! FW web runtime — binds the library's video, keyboard and clock calls to
//! an HTML5 canvas through wasm-bindgen.

pub mod host;
pub mod keys;
pub mod logger;

use fw_common::config::RuntimeConfig;
use fw_common::error::{result_code, VERR_WINDOW};
use fw_common::keysym::KeySym;
use fw_common::video::VideoFlags;
use fw_platform::Platform;
use log::{error, info, warn};
use std::cell::RefCell;
use wasm_bindgen::prelude::*;

pub use host::WebHost;

thread_local! {
    static PLATFORM: RefCell<Option<Platform<WebHost>>> = const { RefCell::new(None) };
}

fn install(config: &RuntimeConfig) -> Result<(), fw_common::error::FwError> {
    logger::init(config.log_level);
    let host = WebHost::new(config.canvas_id.clone())?;
    PLATFORM.with(|state| {
        *state.borrow_mut() = Some(Platform::with_config(host, config));
    });
    info!("[hvid] web runtime initialized ({:?} key codes)", config.key_scheme);
    Ok(())
}

/// Access the platform mutably, initializing it with defaults on first use.
pub fn with_platform_mut<R>(f: impl FnOnce(&mut Platform<WebHost>) -> R) -> Option<R> {
    let ready = PLATFORM.with(|state| state.borrow().is_some());
    if !ready {
        warn!("[hvid] runtime used before fw_init, using default configuration");
        if let Err(err) = install(&RuntimeConfig::default()) {
            error!("[hvid] {err}");
            return None;
        }
    }
    PLATFORM.with(|state| state.borrow_mut().as_mut().map(f))
}

/// Read-only access to the platform, if it has been initialized.
pub fn with_platform<R>(f: impl FnOnce(&Platform<WebHost>) -> R) -> Option<R> {
    PLATFORM.with(|state| state.borrow().as_ref().map(f))
}

fn js_key_handler(callback: js_sys::Function) -> impl Fn(KeySym) + 'static {
    move |sym: KeySym| {
        if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from(sym.0)) {
            error!("[hkbd] key handler threw: {err:?}");
        }
    }
}

// ─── Runtime ───

/// Initialize from an optional configuration object.
#[wasm_bindgen]
pub fn fw_init(config: JsValue) -> Result<(), JsValue> {
    let config: RuntimeConfig = if config.is_undefined() || config.is_null() {
        RuntimeConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("invalid runtime config: {e}")))?
    };
    install(&config).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[wasm_bindgen]
pub fn fw_set_frame_callback(callback: js_sys::Function) {
    with_platform_mut(|p| {
        p.host_mut().set_frame_callback(move |timestamp| {
            if let Err(err) = callback.call1(&JsValue::NULL, &JsValue::from_f64(timestamp)) {
                error!("[hvid] frame callback threw: {err:?}");
            }
        });
    });
}

// ─── Video ───

/// Open the video context; returns a library result code.
#[wasm_bindgen]
pub fn fw_vid_open(title: &str, width: u32, height: u32, scale: u32, flags: u32) -> i32 {
    with_platform_mut(|p| result_code(&p.open(title, width, height, scale, VideoFlags(flags))))
        .unwrap_or(VERR_WINDOW)
}

#[wasm_bindgen]
pub fn fw_vid_blit() {
    with_platform_mut(|p| p.blit());
}

#[wasm_bindgen]
pub fn fw_vid_sync() {
    with_platform_mut(|p| p.sync());
}

#[wasm_bindgen]
pub fn fw_vid_width() -> u32 {
    with_platform(|p| p.info().width).unwrap_or(0)
}

#[wasm_bindgen]
pub fn fw_vid_height() -> u32 {
    with_platform(|p| p.info().height).unwrap_or(0)
}

#[wasm_bindgen]
pub fn fw_vid_pitch() -> u32 {
    with_platform(|p| p.info().pitch).unwrap_or(0)
}

#[wasm_bindgen]
pub fn fw_vid_bytespp() -> u32 {
    with_platform(|p| p.info().bytes_per_pixel).unwrap_or(0)
}

#[wasm_bindgen]
pub fn fw_vid_flags() -> u32 {
    with_platform(|p| p.info().flags.0).unwrap_or(0)
}

/// Address of the framebuffer in linear memory, null before a successful open.
///
/// Re-fetch after every `fw_vid_open`: reopening moves the buffer.
#[wasm_bindgen]
pub fn fw_vid_framebuffer() -> *mut u32 {
    with_platform_mut(|p| {
        let video = &mut p.info_mut().video;
        if video.is_empty() {
            std::ptr::null_mut()
        } else {
            video.as_mut_ptr()
        }
    })
    .unwrap_or(std::ptr::null_mut())
}

// ─── Keyboard ───

#[wasm_bindgen]
pub fn fw_sys_keybfunc(callback: js_sys::Function) {
    with_platform_mut(|p| p.set_key_down_handler(js_key_handler(callback)));
}

#[wasm_bindgen]
pub fn fw_sys_keybupfunc(callback: js_sys::Function) {
    with_platform_mut(|p| p.set_key_up_handler(js_key_handler(callback)));
}

// ─── Clock ───

#[wasm_bindgen]
pub fn fw_clk_init() {
    with_platform_mut(|p| p.clock_init());
}

/// Select the clock source. Invalid modes are logged and ignored.
#[wasm_bindgen]
pub fn fw_clk_mode(mode: i32) {
    with_platform_mut(|p| {
        let _ = p.set_clock_mode(mode);
    });
}

#[wasm_bindgen]
pub fn fw_clk_sample() -> f64 {
    with_platform_mut(|p| p.sample()).unwrap_or(0.0)
}

// ─── Window ───

#[wasm_bindgen]
pub fn fw_wnd_osm_handle() -> i32 {
    fw_platform::OSM_HANDLE
}

#[wasm_bindgen]
pub fn fw_wnd_term() {
    with_platform_mut(|p| p.terminate());
}
