/// Read access to an interleaved, row-major image.
///
/// A row is `width() * channels()` samples long; pixel `x` of a row occupies
/// samples `x * channels() .. (x + 1) * channels()`.
pub trait ImageView {
    type Sample: Copy;

    fn width(&self) -> usize;
    fn height(&self) -> usize;
    fn channels(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Sample];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    /// All samples of the pixel at `(x, y)`.
    fn pixel_samples(&self, x: usize, y: usize) -> &[Self::Sample] {
        let c = self.channels();
        &self.row(y)[x * c..(x + 1) * c]
    }
}

pub trait ImageViewMut: ImageView {
    fn row_mut(&mut self, y: usize) -> &mut [Self::Sample];

    fn rows_mut(&mut self) -> RowsMut<'_, Self>
    where
        Self: Sized,
    {
        RowsMut { image: self, y: 0 }
    }

    /// Apply `f` to every pixel's samples, row by row.
    fn for_each_pixel_mut<F>(&mut self, mut f: F)
    where
        Self: Sized,
        F: FnMut(&mut [Self::Sample]),
    {
        let c = self.channels();
        if c == 0 {
            return;
        }
        for row in self.rows_mut() {
            row.chunks_exact_mut(c).for_each(&mut f);
        }
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Sample];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}

pub struct RowsMut<'a, I: ?Sized + ImageViewMut> {
    image: &'a mut I,
    y: usize,
}

impl<'a, I: ImageViewMut> Iterator for RowsMut<'a, I> {
    type Item = &'a mut [I::Sample];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        let ptr = self.image as *mut I;
        // SAFETY: Each row y is returned at most once and rows do not alias.
        Some(unsafe { (&mut *ptr).row_mut(y) })
    }
}
