// Still capture of the canvas.
// Visual: writes exactly what's on the canvas (no cursor) to an image file.

use crate::error::Result;
use crate::raster::channels;
use crate::types::FrameBuffer;
use image::{ImageFormat, Rgb, RgbImage};
use std::path::Path;

/// Convert 0x00RRGGBB pixels into an 8-bit RGB image.
pub fn to_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let (r, g, b) = channels(fb.pixels[y as usize * fb.width + x as usize]);
        Rgb([r, g, b])
    })
}

/// Encode `fb` in `format` and write it to `path`, replacing any existing file.
pub fn save(fb: &FrameBuffer, path: &Path, format: ImageFormat) -> Result<()> {
    to_image(fb).save_with_format(path, format)?;
    Ok(())
}
