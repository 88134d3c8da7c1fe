//! Two-image compositing and single-image recolouring.
//!
//! - [`reconcile`] brings two buffers to a common extent, either by
//!   resampling both up to the larger extent or cropping both down to the
//!   smaller one.
//! - [`merge`] averages two equally sized buffers channel by channel;
//!   [`merge_into`] reconciles first and keeps the target on failure.
//! - [`purple_tint`] lifts red and blue by a fixed amount.
use crate::error::{Error, Result};
use crate::image::{ImageViewMut, PixelBuffer, BLUE, RED};
use crate::resample::{crop, resample};
use crate::tone::clamp_channel;
use log::debug;
use serde::{Deserialize, Serialize};

/// Amount added to the red and blue channels by [`purple_tint`].
pub const PURPLE_BOOST: u8 = 50;

/// How two differently sized buffers are brought to one extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReconcileMode {
    /// Resample both to `(max width, max height)`.
    GrowToMax,
    /// Crop both to `(min width, min height)` from the top-left corner.
    ShrinkToMin,
}

fn target_extent(a: &PixelBuffer, b: &PixelBuffer, mode: ReconcileMode) -> (usize, usize) {
    match mode {
        ReconcileMode::GrowToMax => (a.width().max(b.width()), a.height().max(b.height())),
        ReconcileMode::ShrinkToMin => (a.width().min(b.width()), a.height().min(b.height())),
    }
}

fn fit(buf: &PixelBuffer, w: usize, h: usize, mode: ReconcileMode) -> Result<PixelBuffer> {
    match mode {
        ReconcileMode::GrowToMax => resample(buf, w, h),
        ReconcileMode::ShrinkToMin => crop(buf, w, h),
    }
}

/// Return `a` and `b` rebuilt at a shared extent chosen by `mode`.
///
/// Buffers that already have the target extent are passed through.
pub fn reconcile(
    a: PixelBuffer,
    b: PixelBuffer,
    mode: ReconcileMode,
) -> Result<(PixelBuffer, PixelBuffer)> {
    let (w, h) = target_extent(&a, &b, mode);
    debug!(
        "reconcile {}x{} and {}x{} -> {w}x{h} ({mode:?})",
        a.width(),
        a.height(),
        b.width(),
        b.height()
    );
    let pass_or_fit = |buf: PixelBuffer| -> Result<PixelBuffer> {
        if buf.dimensions() == (w, h) && !buf.is_empty() {
            return Ok(buf);
        }
        fit(&buf, w, h, mode)
    };
    Ok((pass_or_fit(a)?, pass_or_fit(b)?))
}

/// Average `b` into `a`: every sample becomes `(a + b) / 2`, truncated.
pub fn merge(a: &mut PixelBuffer, b: &PixelBuffer) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(Error::InvalidDimensions {
            width: b.width(),
            height: b.height(),
        });
    }
    let (w, h) = a.dimensions();
    debug!("merge {w}x{h}");
    for y in 0..h {
        for x in 0..w {
            let pa = a.pixel(x, y);
            let pb = b.pixel(x, y);
            let avg = std::array::from_fn(|c| ((u16::from(pa[c]) + u16::from(pb[c])) / 2) as u8);
            a.set_pixel(x, y, avg);
        }
    }
    Ok(())
}

/// Reconcile `a` and `b` with `mode`, then merge. `b` is consumed.
pub fn merge_with(a: PixelBuffer, b: PixelBuffer, mode: ReconcileMode) -> Result<PixelBuffer> {
    let (mut a, b) = reconcile(a, b, mode)?;
    merge(&mut a, &b)?;
    Ok(a)
}

/// Reconcile `other` with `image` and average it in place.
///
/// Both inputs are checked before anything is rebuilt, so on error `image`
/// still holds its previous contents.
pub fn merge_into(image: &mut PixelBuffer, other: PixelBuffer, mode: ReconcileMode) -> Result<()> {
    for buf in [&*image, &other] {
        if buf.is_empty() {
            return Err(Error::InvalidDimensions {
                width: buf.width(),
                height: buf.height(),
            });
        }
    }
    let (w, h) = target_extent(image, &other, mode);
    debug!(
        "merge {}x{} into {}x{} -> {w}x{h} ({mode:?})",
        other.width(),
        other.height(),
        image.width(),
        image.height()
    );
    let other = if other.dimensions() == (w, h) {
        other
    } else {
        fit(&other, w, h, mode)?
    };
    if image.dimensions() != (w, h) {
        *image = fit(image, w, h, mode)?;
    }
    merge(image, &other)
}

/// Add [`PURPLE_BOOST`] to red and blue, saturating at 255. Green is kept.
pub fn purple_tint(buffer: &mut PixelBuffer) {
    debug!("purple tint {}x{}", buffer.width(), buffer.height());
    buffer.for_each_pixel_mut(|px| {
        for c in [RED, BLUE] {
            px[c] = clamp_channel(i64::from(px[c]) + i64::from(PURPLE_BOOST));
        }
    });
}
