//! 3×3 Sobel response on the luminance channel of an RGB buffer.
//!
//! Kernels are indexed `[row][col]` with row = y offset −1..=1 and
//! col = x offset −1..=1. The vertical kernel is positive on the row above
//! the pixel, so `gy > 0` means the image gets darker going down.
use crate::image::{PixelBuffer, RED};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[1, 2, 1], [0, 0, 0], [-1, -2, -1]];

/// Horizontal and vertical derivative at one pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SobelResponse {
    pub gx: i32,
    pub gy: i32,
}

impl SobelResponse {
    /// Euclidean magnitude `sqrt(gx² + gy²)`.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        let gx = f64::from(self.gx);
        let gy = f64::from(self.gy);
        (gx * gx + gy * gy).sqrt()
    }
}

/// Sobel response at interior pixel `(x, y)`, reading luminance from the
/// red channel. Requires `1 <= x < width-1` and `1 <= y < height-1`.
pub fn sobel_at(luma: &PixelBuffer, x: usize, y: usize) -> SobelResponse {
    let mut gx = 0;
    let mut gy = 0;
    for (ky, yy) in (y - 1..=y + 1).enumerate() {
        for (kx, xx) in (x - 1..=x + 1).enumerate() {
            let sample = i32::from(luma.get(xx, yy, RED));
            gx += sample * SOBEL_KERNEL_X[ky][kx];
            gy += sample * SOBEL_KERNEL_Y[ky][kx];
        }
    }
    SobelResponse { gx, gy }
}
