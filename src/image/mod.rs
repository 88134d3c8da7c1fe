pub mod io;
pub mod rgb;
pub mod traits;

pub use self::io::{FileStore, ImageStore};
pub use self::rgb::{PixelBuffer, BLUE, CHANNELS, GREEN, RED};
pub use self::traits::{ImageView, ImageViewMut, Rows, RowsMut};
