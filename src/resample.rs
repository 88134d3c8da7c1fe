//! Dimension changes: nearest-pixel resize with a quantized scale ratio, and
//! top-left cropping.
//!
//! Both functions return a freshly allocated buffer; callers replace their
//! old buffer with it rather than resizing in place.
//!
//! Resize ratio
//! - Per axis, `ratio = target / source` rounded *up* to two decimals
//!   (`ceil(ratio * 100) / 100`) before any pixel is mapped.
//! - Target pixel `i` reads source pixel `floor(i / ratio)`, clamped into
//!   the source extent. Channels are copied unchanged.
//! - The quantization is part of the output: a 3→7 resize uses 2.34, not
//!   2.333…, which shifts which source column feeds some target columns.
use crate::error::{Error, Result};
use crate::image::PixelBuffer;
use log::debug;

/// Scale ratio `target / source`, rounded up to the next multiple of 0.01.
#[inline]
pub fn quantized_ratio(target: usize, source: usize) -> f64 {
    (target as f64 / source as f64 * 100.0).ceil() / 100.0
}

#[inline]
fn source_coord(i: usize, ratio: f64, extent: usize) -> usize {
    ((i as f64 / ratio).floor() as usize).min(extent - 1)
}

/// Resize `source` to exactly `target_width × target_height` by
/// nearest-pixel lookup through the quantized ratio.
pub fn resample(
    source: &PixelBuffer,
    target_width: usize,
    target_height: usize,
) -> Result<PixelBuffer> {
    let (w, h) = source.dimensions();
    if w == 0 || h == 0 {
        return Err(Error::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    let rx = quantized_ratio(target_width, w);
    let ry = quantized_ratio(target_height, h);
    debug!("resample {w}x{h} -> {target_width}x{target_height} (rx={rx:.2}, ry={ry:.2})");

    let src_x: Vec<usize> = (0..target_width).map(|i| source_coord(i, rx, w)).collect();
    let mut out = PixelBuffer::new(target_width, target_height);
    for j in 0..target_height {
        let sy = source_coord(j, ry, h);
        for (i, &sx) in src_x.iter().enumerate() {
            out.set_pixel(i, j, source.pixel(sx, sy));
        }
    }
    Ok(out)
}

/// Keep the top-left `width × height` region of `source`.
///
/// The region must be non-empty and fit inside the source.
pub fn crop(source: &PixelBuffer, width: usize, height: usize) -> Result<PixelBuffer> {
    if width == 0 || height == 0 || width > source.width() || height > source.height() {
        return Err(Error::InvalidDimensions { width, height });
    }
    debug!(
        "crop {}x{} -> {width}x{height}",
        source.width(),
        source.height()
    );
    Ok(PixelBuffer::from_fn(width, height, |x, y| source.pixel(x, y)))
}
