//! Owner of the one software framebuffer.

use fw_common::error::FwError;
use fw_common::video::{byte_align, calc_pitch, convert_pixels, VideoFlags, VideoInfo, BYTES_PER_PIXEL};
use log::error;

#[derive(Debug, Default)]
pub struct VideoSurface {
    info: VideoInfo,
}

impl VideoSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn info(&self) -> &VideoInfo {
        &self.info
    }

    pub fn info_mut(&mut self) -> &mut VideoInfo {
        &mut self.info
    }

    pub fn is_open(&self) -> bool {
        !self.info.video.is_empty()
    }

    /// (Re)allocate a zeroed framebuffer for a `width` x `height` surface.
    ///
    /// The previous buffer is released first. On failure the surface is left
    /// empty, with zero dimensions.
    pub fn allocate(&mut self, width: u32, height: u32, flags: VideoFlags) -> Result<(), FwError> {
        let bpp = BYTES_PER_PIXEL;
        let width = byte_align(width, bpp);
        let height = byte_align(height, bpp);

        self.release();
        self.info.flags = flags;
        self.info.bytes_per_pixel = bpp;

        let buffer = calc_pitch(width, bpp)
            .ok_or(FwError::OutOfMemory { requested: usize::MAX })
            .and_then(|pitch| alloc_zeroed(width, height).map(|video| (pitch, video)));

        match buffer {
            Ok((pitch, video)) => {
                self.info.width = width;
                self.info.height = height;
                self.info.pitch = pitch;
                self.info.video = video;
                Ok(())
            }
            Err(err) => {
                error!("[hvid] framebuffer allocation failed for {width}x{height}: {err}");
                Err(err)
            }
        }
    }

    /// Free the framebuffer and zero the dimensions.
    pub fn release(&mut self) {
        self.info.video = Vec::new();
        self.info.width = 0;
        self.info.height = 0;
        self.info.pitch = 0;
    }

    /// Swap red/blue and force opaque alpha over the whole framebuffer.
    pub fn convert(&mut self) {
        convert_pixels(&mut self.info.video);
    }
}

fn alloc_zeroed(width: u32, height: u32) -> Result<Vec<u32>, FwError> {
    let len = (width as usize)
        .checked_mul(height as usize)
        .ok_or(FwError::OutOfMemory { requested: usize::MAX })?;
    let requested = len.saturating_mul(std::mem::size_of::<u32>());

    let mut video = Vec::new();
    video
        .try_reserve_exact(len)
        .map_err(|_| FwError::OutOfMemory { requested })?;
    video.resize(len, 0);
    Ok(video)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_sizes_buffer() {
        let mut surface = VideoSurface::new();
        surface.allocate(320, 200, VideoFlags(3)).unwrap();

        let info = surface.info();
        assert_eq!(info.width, 320);
        assert_eq!(info.height, 200);
        assert_eq!(info.bytes_per_pixel, 4);
        assert_eq!(info.pitch, 1280);
        assert_eq!(info.flags, VideoFlags(3));
        assert_eq!(info.video.len(), 320 * 200);
        assert_eq!(info.size_in_bytes(), 320 * 200 * 4);
        assert!(info.video.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_reallocate_replaces_buffer() {
        let mut surface = VideoSurface::new();
        surface.allocate(64, 64, VideoFlags::NONE).unwrap();
        surface.info_mut().video.fill(0xdead_beef);

        surface.allocate(17, 9, VideoFlags::NONE).unwrap();

        let info = surface.info();
        assert_eq!((info.width, info.height), (17, 9));
        assert_eq!(info.video.len(), 17 * 9);
        assert_eq!(info.pitch, 17 * 4);
        assert!(info.video.iter().all(|&p| p == 0));
    }

    #[test]
    fn test_failed_allocation_leaves_surface_empty() {
        let mut surface = VideoSurface::new();
        surface.allocate(8, 8, VideoFlags::NONE).unwrap();

        let huge = (1 << 30) - 1;
        let err = surface.allocate(huge, huge, VideoFlags::NONE).unwrap_err();

        assert!(matches!(err, FwError::OutOfMemory { .. }));
        assert!(!surface.is_open());
        assert_eq!(surface.info().pixel_count(), 0);
    }

    #[test]
    fn test_pitch_overflow_is_out_of_memory() {
        let mut surface = VideoSurface::new();
        let err = surface.allocate(u32::MAX, 1, VideoFlags::NONE).unwrap_err();
        assert!(matches!(err, FwError::OutOfMemory { .. }));
    }

    #[test]
    fn test_convert_whole_buffer() {
        let mut surface = VideoSurface::new();
        surface.allocate(4, 2, VideoFlags::NONE).unwrap();
        surface.info_mut().video.fill(0x1234_5678);

        surface.convert();

        assert!(surface.info().video.iter().all(|&p| p == 0xff78_5634));
    }
}
