/// Active-photo index over a fixed number of photos.
///
/// Starts at 0. `select` clamps to the last photo instead of failing, and
/// `next`/`previous` stop at the ends. With no photos the index stays 0 and
/// there is nothing to show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhotoCarousel {
    len: usize,
    active: usize,
}

impl PhotoCarousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn select(&mut self, index: usize) {
        self.active = index.min(self.len.saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.select(self.active.saturating_add(1));
    }

    pub fn previous(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Change the photo count, keeping the current index if it still fits
    pub fn resize(&mut self, len: usize) {
        self.len = len;
        self.select(self.active);
    }
}
