//! Circular image index for the room detail gallery.

#[cfg(test)]
#[path = "carousel_test.rs"]
mod carousel_test;

/// Zero-based position in a fixed-length image sequence.
///
/// The index is always `< len` (or `0` for an empty sequence); every
/// transition wraps with modulo arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move to the next image, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Move to the previous image, wrapping to the last from the first.
    pub fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = if self.index == 0 { self.len - 1 } else { self.index - 1 };
    }

    /// Jump to a thumbnail. Out-of-range positions wrap.
    pub fn select(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = index % self.len;
    }

    /// The image at the current index.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
