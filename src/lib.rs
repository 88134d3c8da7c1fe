#![doc = include_str!("../README.md")]

// Pixel engine
pub mod composite;
pub mod edges;
pub mod error;
pub mod image;
pub mod resample;
pub mod tone;

// Operation dispatch, configuration and the interactive front end.
pub mod config;
pub mod filter;
pub mod pipeline;
pub mod shell;

// --- High-level re-exports -------------------------------------------------

pub use crate::composite::{merge, merge_into, merge_with, purple_tint, reconcile, ReconcileMode};
pub use crate::edges::detect_edges;
pub use crate::error::{Error, Result};
pub use crate::filter::Filter;
pub use crate::image::{FileStore, ImageStore, PixelBuffer};
pub use crate::pipeline::{run_pipeline, PipelineSummary};
pub use crate::resample::{crop, resample};
pub use crate::tone::{grayscale, scale_brightness, Adjustment, Direction};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use mini_photoshop::prelude::*;
///
/// let mut img = PixelBuffer::from_fn(4, 4, |x, _| [x as u8 * 60, 10, 200]);
/// purple_tint(&mut img);
/// assert_eq!(img.pixel(0, 0), [50, 10, 250]);
///
/// let other = PixelBuffer::new(2, 6);
/// let merged = merge_with(img, other, ReconcileMode::ShrinkToMin).unwrap();
/// assert_eq!(merged.dimensions(), (2, 4));
/// ```
pub mod prelude {
    pub use crate::composite::{merge_with, purple_tint, ReconcileMode};
    pub use crate::edges::detect_edges;
    pub use crate::filter::Filter;
    pub use crate::image::PixelBuffer;
    pub use crate::tone::{grayscale, Adjustment, Direction};
}
