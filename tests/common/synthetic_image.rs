use mini_photoshop::PixelBuffer;

/// Generates a high-contrast RGB checkerboard.
pub fn checkerboard_rgb(width: usize, height: usize, cell: usize) -> PixelBuffer {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(cell > 0, "cell size must be positive");

    PixelBuffer::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) & 1 == 0 {
            [32, 40, 48]
        } else {
            [220, 210, 200]
        }
    })
}

/// Deterministic pseudo-random RGB noise covering the whole 0..=255 range.
pub fn noise_rgb(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.wrapping_mul(2_654_435_761).wrapping_add(1);
    PixelBuffer::from_fn(width, height, |_, _| {
        let mut next = || {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            (state >> 24) as u8
        };
        [next(), next(), next()]
    })
}

pub fn solid_rgb(width: usize, height: usize, rgb: [u8; 3]) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |_, _| rgb)
}
