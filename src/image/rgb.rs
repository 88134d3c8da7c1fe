//! Owned interleaved RGB buffer (`u8` per channel, row-major, no padding).
//!
//! The backing store always holds exactly `width * height * CHANNELS`
//! samples. Operations that change the extent build a new buffer and the
//! caller replaces the old one; nothing here resizes a live buffer.
use crate::error::{Error, Result};

/// Samples per pixel: red, green, blue.
pub const CHANNELS: usize = 3;

pub const RED: usize = 0;
pub const GREEN: usize = 1;
pub const BLUE: usize = 2;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Construct a zero-filled (black) buffer of size `width × height`.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![0; width * height * CHANNELS],
        }
    }

    /// Wrap raw interleaved RGB samples; the length must match the extent.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        if data.len() != width * height * CHANNELS {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> [u8; CHANNELS],
    {
        let mut out = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                out.set_pixel(x, y, f(x, y));
            }
        }
        out
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    #[inline]
    fn idx(&self, x: usize, y: usize, channel: usize) -> usize {
        assert!(
            x < self.width && y < self.height && channel < CHANNELS,
            "pixel ({x}, {y}, channel {channel}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        (y * self.width + x) * CHANNELS + channel
    }

    /// Sample at `(x, y, channel)`. Panics when the address is out of range.
    #[inline]
    pub fn get(&self, x: usize, y: usize, channel: usize) -> u8 {
        self.data[self.idx(x, y, channel)]
    }

    /// Store `value` at `(x, y, channel)`. Panics when the address is out of range.
    ///
    /// Callers clamp before storing; this never saturates on its own.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, channel: usize, value: u8) {
        let i = self.idx(x, y, channel);
        self.data[i] = value;
    }

    /// Like [`get`](Self::get) but reports a bad address instead of panicking.
    pub fn try_get(&self, x: usize, y: usize, channel: usize) -> Result<u8> {
        if x >= self.width || y >= self.height || channel >= CHANNELS {
            return Err(Error::OutOfBounds {
                x,
                y,
                channel,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.get(x, y, channel))
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; CHANNELS] {
        let i = self.idx(x, y, RED);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, rgb: [u8; CHANNELS]) {
        let i = self.idx(x, y, RED);
        self.data[i..i + CHANNELS].copy_from_slice(&rgb);
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }
}

impl crate::image::traits::ImageView for PixelBuffer {
    type Sample = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn channels(&self) -> usize {
        CHANNELS
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let len = self.width * CHANNELS;
        let start = y * len;
        &self.data[start..start + len]
    }
}

impl crate::image::traits::ImageViewMut for PixelBuffer {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [u8] {
        let len = self.width * CHANNELS;
        let start = y * len;
        &mut self.data[start..start + len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::{ImageView, ImageViewMut};

    #[test]
    fn new_buffer_is_zero_filled_with_exact_length() {
        let buf = PixelBuffer::new(4, 3);
        assert_eq!(buf.as_raw().len(), 4 * 3 * CHANNELS);
        assert!(buf.as_raw().iter().all(|&v| v == 0));
        assert!(PixelBuffer::default().is_empty());
    }

    #[test]
    fn set_and_get_address_the_same_slot() {
        let mut buf = PixelBuffer::new(3, 2);
        buf.set(2, 1, BLUE, 77);
        assert_eq!(buf.get(2, 1, BLUE), 77);
        assert_eq!(buf.as_raw()[5 * CHANNELS + BLUE], 77);
        assert_eq!(buf.pixel(2, 1), [0, 0, 77]);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_outside_extent_panics() {
        let buf = PixelBuffer::new(2, 2);
        buf.get(2, 0, RED);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn channel_past_blue_panics() {
        let mut buf = PixelBuffer::new(2, 2);
        buf.set(0, 0, 3, 1);
    }

    #[test]
    fn try_get_reports_out_of_bounds() {
        let buf = PixelBuffer::new(2, 2);
        assert!(matches!(
            buf.try_get(0, 5, GREEN),
            Err(Error::OutOfBounds { y: 5, height: 2, .. })
        ));
        assert_eq!(buf.try_get(1, 1, GREEN).unwrap(), 0);
    }

    #[test]
    fn from_raw_rejects_wrong_length() {
        assert!(matches!(
            PixelBuffer::from_raw(2, 2, vec![0; 11]),
            Err(Error::InvalidDimensions {
                width: 2,
                height: 2
            })
        ));
        assert!(PixelBuffer::from_raw(2, 2, vec![0; 12]).is_ok());
    }

    #[test]
    fn rows_cover_every_pixel() {
        let mut buf = PixelBuffer::from_fn(3, 2, |x, y| [x as u8, y as u8, 9]);
        assert_eq!(buf.rows().count(), 2);
        assert_eq!(buf.row(1), &[0, 1, 9, 1, 1, 9, 2, 1, 9]);
        assert_eq!(buf.pixel_samples(2, 0), &[2, 0, 9]);

        buf.for_each_pixel_mut(|px| px[GREEN] = 5);
        assert!(buf.rows().all(|row| row.chunks_exact(3).all(|p| p[1] == 5)));
    }
}
