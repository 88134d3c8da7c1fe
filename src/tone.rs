//! Per-pixel tone operations: channel-average grayscale and linear
//! brightness scaling.
use crate::error::{Error, Result};
use crate::image::{ImageViewMut, PixelBuffer};
use log::debug;
use serde::{Deserialize, Serialize};

/// Replace every channel of every pixel with the truncated channel mean.
pub fn grayscale(buffer: &mut PixelBuffer) {
    debug!("grayscale {}x{}", buffer.width(), buffer.height());
    buffer.for_each_pixel_mut(|px| {
        let sum: u32 = px.iter().map(|&v| u32::from(v)).sum();
        px.fill((sum / 3) as u8);
    });
}

/// Multiply every channel value by `multiplier`, truncate, and clamp to
/// `[0, 255]`. The clamped value is always written back.
pub fn scale_brightness(buffer: &mut PixelBuffer, multiplier: f64) -> Result<()> {
    if !multiplier.is_finite() || multiplier < 0.0 {
        return Err(Error::InvalidMultiplier(multiplier));
    }
    debug!(
        "scale brightness x{multiplier} on {}x{}",
        buffer.width(),
        buffer.height()
    );
    buffer.for_each_pixel_mut(|px| {
        for v in px.iter_mut() {
            *v = clamp_channel((f64::from(*v) * multiplier).trunc() as i64);
        }
    });
    Ok(())
}

#[inline]
pub(crate) fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Brighten,
    Darken,
}

/// A user-facing brightness change: brighten or darken by a whole percent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adjustment {
    pub direction: Direction,
    pub percent: u8,
}

impl Adjustment {
    /// Validate `percent` against `[0, 100]`.
    pub fn new(direction: Direction, percent: i64) -> Result<Self> {
        if !(0..=100).contains(&percent) {
            return Err(Error::InvalidPercent(percent));
        }
        Ok(Self {
            direction,
            percent: percent as u8,
        })
    }

    /// `1 + p/100` when brightening, `p/100` when darkening.
    pub fn multiplier(&self) -> f64 {
        let fraction = f64::from(self.percent) / 100.0;
        match self.direction {
            Direction::Brighten => 1.0 + fraction,
            Direction::Darken => fraction,
        }
    }

    pub fn apply(&self, buffer: &mut PixelBuffer) -> Result<()> {
        if self.percent > 100 {
            return Err(Error::InvalidPercent(i64::from(self.percent)));
        }
        scale_brightness(buffer, self.multiplier())
    }
}
