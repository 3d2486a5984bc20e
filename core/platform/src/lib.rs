//! Platform context binding the library's video, keyboard and clock calls to
//! a [`Host`].
//!
//! A [`Platform`] owns exactly one display surface and one keyboard binding.
//! Embedders that need the classic single global keep one in a thread-local;
//! tests build as many as they like.

pub mod clock;
pub mod host;
pub mod input;
pub mod video;

#[cfg(test)]
mod test_host;

use clock::Clock;
use fw_common::clock::ClockMode;
use fw_common::config::{KeyScheme, RuntimeConfig};
use fw_common::error::FwError;
use fw_common::keysym::KeySym;
use fw_common::video::{VideoFlags, VideoInfo};
use fw_keymap::translator_for;
use log::{debug, info};
use std::rc::Rc;

pub use host::Host;
pub use input::Keyboard;
pub use video::VideoSurface;

/// Value returned by [`Platform::window_handle`].
pub const OSM_HANDLE: i32 = 1;

pub struct Platform<H: Host> {
    host: H,
    keyboard: Rc<Keyboard>,
    video: VideoSurface,
    clock: Clock,
}

impl<H: Host> Platform<H> {
    pub fn new(host: H, scheme: KeyScheme) -> Self {
        Self {
            host,
            keyboard: Rc::new(Keyboard::new(translator_for(scheme))),
            video: VideoSurface::new(),
            clock: Clock::default(),
        }
    }

    pub fn with_config(host: H, config: &RuntimeConfig) -> Self {
        let mut platform = Self::new(host, config.key_scheme);
        platform.clock = Clock::new(config.clock_mode);
        platform
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn keyboard(&self) -> &Rc<Keyboard> {
        &self.keyboard
    }

    // ─── Video ───

    /// Open the video context with the given title and resolution.
    ///
    /// The scale is accepted for interface compatibility; presentation scaling
    /// belongs to the host. Any [`VideoInfo`] reference obtained before this
    /// call is stale afterwards.
    pub fn open(
        &mut self,
        title: &str,
        width: u32,
        height: u32,
        _scale: u32,
        flags: VideoFlags,
    ) -> Result<(), FwError> {
        self.host.create_canvas(width, height);
        self.host.set_title(title);
        self.host.add_key_listeners(Rc::clone(&self.keyboard));

        self.video.allocate(width, height, flags)?;
        let info = self.video.info();
        info!("[hvid] creating HTML5 video context [{}x{}]", info.width, info.height);

        // refresh newly created display
        self.blit();
        self.sync();
        Ok(())
    }

    /// Convert the framebuffer to the host channel order and upload it.
    pub fn blit(&mut self) {
        self.video.convert();
        let info = self.video.info();
        self.host.upload_pixels(&info.video, info.width, info.height);
    }

    /// Schedule the next display refresh.
    pub fn sync(&mut self) {
        self.host.request_animation_frame();
    }

    pub fn info(&self) -> &VideoInfo {
        self.video.info()
    }

    pub fn info_mut(&mut self) -> &mut VideoInfo {
        self.video.info_mut()
    }

    // ─── Keyboard ───

    pub fn set_key_down_handler(&self, handler: impl Fn(KeySym) + 'static) {
        self.keyboard.set_down_handler(handler);
    }

    pub fn set_key_up_handler(&self, handler: impl Fn(KeySym) + 'static) {
        self.keyboard.set_up_handler(handler);
    }

    pub fn reset_key_handlers(&self) {
        self.keyboard.reset_handlers();
    }

    // ─── Clock ───

    pub fn clock_init(&mut self) {}

    pub fn clock_mode(&self) -> ClockMode {
        self.clock.mode()
    }

    pub fn set_clock_mode(&mut self, mode: i32) -> Result<ClockMode, FwError> {
        self.clock.set_mode(mode)
    }

    pub fn sample(&self) -> f64 {
        self.clock.sample(&self.host)
    }

    // ─── Window ───

    pub fn window_handle(&self) -> i32 {
        OSM_HANDLE
    }

    /// Stop receiving keyboard events. The framebuffer stays readable.
    pub fn terminate(&mut self) {
        debug!("[hvid] removing keyboard listeners");
        self.host.remove_key_listeners();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_host::{HostCall, RecordingHost};
    use fw_keymap::position::{DOM_PK_ARROW_UP, DOM_PK_F5};
    use fw_keymap::virtual_key::DOM_VK_NUMPAD7;
    use fw_keymap::KeyEvent;
    use std::cell::RefCell;

    fn platform() -> Platform<RecordingHost> {
        Platform::new(RecordingHost::default(), KeyScheme::Position)
    }

    #[test]
    fn test_open_sizes_framebuffer() {
        let mut p = platform();
        p.open("demo", 320, 240, 2, VideoFlags::NONE).unwrap();

        let info = p.info();
        assert_eq!(info.video.len(), 320 * 240);
        assert_eq!(info.pitch, 320 * 4);
        assert_eq!(info.bytes_per_pixel, 4);
    }

    #[test]
    fn test_open_host_call_order() {
        let mut p = platform();
        p.open("demo", 4, 3, 1, VideoFlags::NONE).unwrap();

        assert_eq!(
            p.host().calls,
            vec![
                HostCall::CreateCanvas(4, 3),
                HostCall::SetTitle("demo".into()),
                HostCall::AddKeyListeners,
                HostCall::UploadPixels(4, 3),
                HostCall::RequestAnimationFrame,
            ]
        );
    }

    #[test]
    fn test_open_blits_opaque_black() {
        let mut p = platform();
        p.open("demo", 2, 2, 1, VideoFlags::NONE).unwrap();

        assert_eq!(p.host().last_frame, vec![0xff00_0000; 4]);
        assert_eq!(p.info().video, vec![0xff00_0000; 4]);
    }

    #[test]
    fn test_reopen_resizes_and_keeps_one_listener_pair() {
        let mut p = platform();
        p.open("a", 64, 48, 1, VideoFlags::NONE).unwrap();
        p.open("b", 10, 7, 1, VideoFlags(1)).unwrap();

        let info = p.info();
        assert_eq!((info.width, info.height), (10, 7));
        assert_eq!(info.video.len(), 70);
        assert_eq!(info.flags, VideoFlags(1));
        assert_eq!(p.host().listener_installs, 2);
        assert!(p.host().keyboard.is_some());
    }

    #[test]
    fn test_open_out_of_memory() {
        let mut p = platform();
        p.open("a", 8, 8, 1, VideoFlags::NONE).unwrap();
        p.host_mut().calls.clear();

        let huge = (1 << 30) - 1;
        let err = p.open("big", huge, huge, 1, VideoFlags::NONE).unwrap_err();

        assert!(matches!(err, FwError::OutOfMemory { .. }));
        assert_eq!(fw_common::error::result_code(&Err::<(), _>(err)), fw_common::error::VERR_NOMEM);
        assert!(p.info().video.is_empty());
        assert!(!p.host().calls.contains(&HostCall::RequestAnimationFrame));
    }

    #[test]
    fn test_blit_converts_every_pixel() {
        let mut p = platform();
        p.open("demo", 3, 2, 1, VideoFlags::NONE).unwrap();
        p.info_mut().video.fill(0x1234_5678);

        p.blit();

        assert!(p.info().video.iter().all(|&px| px == 0xff78_5634));
        assert_eq!(p.host().last_frame, p.info().video);
    }

    #[test]
    fn test_blit_twice_restores_rgb() {
        let mut p = platform();
        p.open("demo", 2, 1, 1, VideoFlags::NONE).unwrap();
        p.info_mut().video.copy_from_slice(&[0x1234_5678, 0x00ab_cdef]);

        p.blit();
        p.blit();

        assert_eq!(p.info().video, vec![0xff34_5678, 0xffab_cdef]);
    }

    #[test]
    fn test_sync_only_schedules() {
        let mut p = platform();
        p.sync();
        assert_eq!(p.host().calls, vec![HostCall::RequestAnimationFrame]);
    }

    #[test]
    fn test_key_down_reaches_handler_once() {
        let mut p = platform();
        p.open("demo", 2, 2, 1, VideoFlags::NONE).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        p.set_key_down_handler(move |sym| sink.borrow_mut().push(sym));

        let allow = p.host().fire_key_down(KeyEvent {
            code: DOM_PK_ARROW_UP,
            ..KeyEvent::default()
        });

        assert_eq!(allow, Some(false));
        assert_eq!(*seen.borrow(), vec![KeySym::ARROW_UP]);
    }

    #[test]
    fn test_refresh_key_keeps_host_default() {
        let mut p = platform();
        p.open("demo", 2, 2, 1, VideoFlags::NONE).unwrap();

        let allow = p.host().fire_key_up(KeyEvent {
            key: 0x74,
            code: DOM_PK_F5,
            ..KeyEvent::default()
        });

        assert_eq!(allow, Some(true));
    }

    #[test]
    fn test_legacy_scheme_numpad() {
        let mut p = Platform::new(RecordingHost::default(), KeyScheme::Legacy);
        p.open("demo", 2, 2, 1, VideoFlags::NONE).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        p.set_key_down_handler(move |sym| sink.borrow_mut().push(sym));

        p.host().fire_key_down(KeyEvent {
            key_code: DOM_VK_NUMPAD7,
            ..KeyEvent::default()
        });

        assert_eq!(*seen.borrow(), vec![KeySym::from_char('7')]);
    }

    #[test]
    fn test_terminate_removes_listeners() {
        let mut p = platform();
        p.open("demo", 2, 2, 1, VideoFlags::NONE).unwrap();

        p.terminate();

        assert!(p.host().keyboard.is_none());
        assert_eq!(p.host().fire_key_down(KeyEvent::default()), None);
        assert_eq!(p.info().video.len(), 4);
    }

    #[test]
    fn test_clock_modes() {
        let mut p = platform();
        p.host_mut().date = 1_700_000_000_000.0;
        p.host_mut().perf = 12.5;

        assert_eq!(p.clock_mode(), ClockMode::LowRes);
        assert_eq!(p.sample(), 1_700_000_000_000.0);

        assert_eq!(p.set_clock_mode(1), Ok(ClockMode::HighRes));
        assert_eq!(p.sample(), 12.5);
    }

    #[test]
    fn test_invalid_clock_mode_keeps_previous() {
        let mut p = platform();
        p.host_mut().date = 1000.0;
        p.host_mut().perf = 2.25;
        p.set_clock_mode(1).unwrap();

        assert_eq!(p.set_clock_mode(9), Err(FwError::InvalidClockMode { mode: 9 }));
        assert_eq!(p.clock_mode(), ClockMode::HighRes);
        assert_eq!(p.sample(), 2.25);
    }

    #[test]
    fn test_every_sample_reads_host() {
        let mut p = platform();
        p.host_mut().date = 1.0;
        assert_eq!(p.sample(), 1.0);
        p.host_mut().date = 2.0;
        assert_eq!(p.sample(), 2.0);
    }

    #[test]
    fn test_with_config() {
        let config = RuntimeConfig {
            key_scheme: KeyScheme::Legacy,
            clock_mode: ClockMode::HighRes,
            ..RuntimeConfig::default()
        };
        let p = Platform::with_config(RecordingHost::default(), &config);
        assert_eq!(p.clock_mode(), ClockMode::HighRes);
        assert_eq!(p.keyboard().translator().scheme(), KeyScheme::Legacy);
        assert_eq!(p.window_handle(), OSM_HANDLE);
    }
}
