//! Binary edge map from a thresholded Sobel magnitude.
//!
//! Steps
//! - The input is converted to grayscale in place, so every channel holds
//!   the luminance proxy.
//! - Interior pixels get the Sobel magnitude of their 3×3 neighbourhood;
//!   a magnitude above [`EDGE_THRESHOLD`] marks an edge.
//! - The output is a separate buffer: edges are black (0), everything
//!   else white (255). The one-pixel border has no full neighbourhood and
//!   stays black.
//!
//! Reads only come from the grayscale input and writes only go to the
//! output, so no pixel sees a neighbour that was already rewritten.

pub mod sobel;

pub use sobel::{sobel_at, SobelResponse};

use crate::image::PixelBuffer;
use crate::tone::grayscale;
use log::debug;

/// Gradient magnitude strictly above this value is an edge.
pub const EDGE_THRESHOLD: f64 = 200.0;

pub const EDGE: u8 = 0;
pub const BACKGROUND: u8 = 255;

/// Grayscale `buffer` in place and return its black-on-white edge map.
///
/// Buffers narrower or shorter than three pixels have no interior and
/// produce an all-black map of the same size.
pub fn detect_edges(buffer: &mut PixelBuffer) -> PixelBuffer {
    grayscale(buffer);
    let (w, h) = buffer.dimensions();
    let mut out = PixelBuffer::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    let mut edge_count = 0usize;
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let is_edge = sobel_at(buffer, x, y).magnitude() > EDGE_THRESHOLD;
            edge_count += usize::from(is_edge);
            let v = if is_edge { EDGE } else { BACKGROUND };
            out.set_pixel(x, y, [v, v, v]);
        }
    }
    debug!("edge detect {w}x{h}: {edge_count} edge pixels");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step_image(w: usize, h: usize, split_x: usize) -> PixelBuffer {
        PixelBuffer::from_fn(w, h, |x, _| if x < split_x { [0, 0, 0] } else { [255, 255, 255] })
    }

    #[test]
    fn flat_image_is_white_inside_black_border() {
        let mut img = PixelBuffer::from_fn(5, 4, |_, _| [120, 30, 200]);
        let out = detect_edges(&mut img);
        for y in 0..4 {
            for x in 0..5 {
                let border = x == 0 || y == 0 || x == 4 || y == 3;
                let expected = if border { EDGE } else { BACKGROUND };
                assert_eq!(out.pixel(x, y), [expected; 3], "at ({x}, {y})");
            }
        }
    }

    #[test]
    fn step_edge_is_black_line() {
        let mut img = step_image(8, 6, 4);
        let out = detect_edges(&mut img);
        for y in 1..5 {
            assert_eq!(out.get(3, y, 0), EDGE);
            assert_eq!(out.get(4, y, 0), EDGE);
            assert_eq!(out.get(1, y, 0), BACKGROUND);
            assert_eq!(out.get(6, y, 0), BACKGROUND);
        }
    }

    #[test]
    fn output_is_binary() {
        let mut img = PixelBuffer::from_fn(12, 9, |x, y| {
            let v = ((x * 53) ^ (y * 29)) as u8;
            [v, v.wrapping_add(40), v / 2]
        });
        let out = detect_edges(&mut img);
        assert!(out.as_raw().iter().all(|&v| v == EDGE || v == BACKGROUND));
    }

    #[test]
    fn input_is_left_grayscale() {
        let mut img = PixelBuffer::from_fn(3, 3, |_, _| [30, 60, 90]);
        detect_edges(&mut img);
        assert_eq!(img.pixel(1, 1), [60, 60, 60]);
    }

    #[test]
    fn tiny_buffers_are_all_black() {
        let mut img = PixelBuffer::from_fn(2, 5, |_, _| [255, 255, 255]);
        let out = detect_edges(&mut img);
        assert_eq!(out.dimensions(), (2, 5));
        assert!(out.as_raw().iter().all(|&v| v == EDGE));
    }

    #[test]
    fn threshold_is_strict() {
        // Column step of 50: gx = 4 * 50 = 200, not above the threshold.
        let mut img = PixelBuffer::from_fn(3, 3, |x, _| if x == 2 { [50; 3] } else { [0; 3] });
        assert_eq!(detect_edges(&mut img).get(1, 1, 0), BACKGROUND);

        let mut img = PixelBuffer::from_fn(3, 3, |x, _| if x == 2 { [51; 3] } else { [0; 3] });
        assert_eq!(detect_edges(&mut img).get(1, 1, 0), EDGE);
    }
}
