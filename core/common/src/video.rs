//! Software framebuffer description shared between the surface manager and
//! library clients.
//!
//! Pixels are stored top-left origin, row-major, one `u32` per pixel in
//! `0xAARRGGBB` order.

use serde::{Deserialize, Serialize};

/// Every surface this adapter opens is 32-bit.
pub const BYTES_PER_PIXEL: u32 = 4;

/// Opaque bitset handed to `open` and stored alongside the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VideoFlags(pub u32);

impl VideoFlags {
    pub const NONE: VideoFlags = VideoFlags(0);

    pub fn contains(self, other: VideoFlags) -> bool {
        self.0 & other.0 == other.0
    }
}

/// Description of the live surface plus the pixels themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoInfo {
    pub width: u32,
    pub height: u32,
    pub bytes_per_pixel: u32,
    pub pitch: u32,
    pub flags: VideoFlags,
    pub video: Vec<u32>,
}

impl VideoInfo {
    /// Number of pixels `width * height` describes.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the framebuffer in bytes.
    pub fn size_in_bytes(&self) -> usize {
        self.video.len() * std::mem::size_of::<u32>()
    }

    /// Row `y` of the framebuffer, or `None` past the last row.
    pub fn row_mut(&mut self, y: u32) -> Option<&mut [u32]> {
        if y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        self.video.get_mut(start..start + width)
    }
}

/// Round `n` pixels up so that a row of them fills a whole number of 32-bit
/// words. The identity for 4-byte pixels.
pub fn byte_align(n: u32, bpp: u32) -> u32 {
    if bpp == 0 {
        return n;
    }
    let bytes = (n as u64 * bpp as u64 + 3) & !3;
    (bytes / bpp as u64) as u32
}

/// Bytes per row, or `None` if it does not fit in 32 bits.
pub fn calc_pitch(width: u32, bpp: u32) -> Option<u32> {
    width.checked_mul(bpp)
}

/// Swap the red and blue channels and force full opacity.
#[inline]
pub fn convert_pixel(pixel: u32) -> u32 {
    ((pixel & 0x00ff_0000) >> 16) | (pixel & 0x0000_ff00) | ((pixel & 0x0000_00ff) << 16) | 0xff00_0000
}

/// Apply [`convert_pixel`] to every pixel in place.
pub fn convert_pixels(pixels: &mut [u32]) {
    for pixel in pixels.iter_mut() {
        *pixel = convert_pixel(*pixel);
    }
}
