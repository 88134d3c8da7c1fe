//! The selectable operations and a single entry point that runs one of them
//! on the current image.
use crate::composite::{merge_into, purple_tint, ReconcileMode};
use crate::edges::detect_edges;
use crate::error::Result;
use crate::image::{ImageStore, PixelBuffer};
use crate::tone::{grayscale, Adjustment};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One filter with the inputs it needs, as chosen from the menu or listed
/// in a pipeline config.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Filter {
    Grayscale,
    Brightness(Adjustment),
    EdgeDetect,
    /// Average with a second image, named as the [`ImageStore`] expects.
    Merge { with: String, mode: ReconcileMode },
    Purple,
}

impl Filter {
    /// Run the filter on `image`. The result replaces `image`; merge pulls
    /// its second input from `store` and drops it afterwards.
    pub fn apply<S>(&self, image: &mut PixelBuffer, store: &mut S) -> Result<()>
    where
        S: ImageStore + ?Sized,
    {
        match self {
            Filter::Grayscale => grayscale(image),
            Filter::Brightness(adjustment) => adjustment.apply(image)?,
            Filter::EdgeDetect => *image = detect_edges(image),
            Filter::Merge { with, mode } => {
                let second = store.load(with)?;
                merge_into(image, second, *mode)?;
            }
            Filter::Purple => purple_tint(image),
        }
        Ok(())
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Grayscale => write!(f, "grayscale"),
            Filter::Brightness(a) => write!(f, "{:?} {}%", a.direction, a.percent),
            Filter::EdgeDetect => write!(f, "edge detect"),
            Filter::Merge { with, mode } => write!(f, "merge with {with} ({mode:?})"),
            Filter::Purple => write!(f, "purple"),
        }
    }
}
