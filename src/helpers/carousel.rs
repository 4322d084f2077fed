//! Carousel cursor for paged content
//!
//! A cursor over `len` items that wraps in both directions.

/// Cursor into a fixed-length list of slides
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    /// Create a cursor over `len` items, starting at the first
    ///
    /// An empty carousel stays at index 0 and ignores every move.
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    /// Current index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Move forward, wrapping from the last item to the first
    pub fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Move back, wrapping from the first item to the last
    pub fn retreat(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Jump to an item, clamping past-the-end requests to the last item
    pub fn jump(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        self.index = index.min(self.len - 1);
    }

    /// Check whether `index` is the current item
    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && self.index == index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_item_scenario() {
        let mut carousel = Carousel::new(3);
        assert_eq!(carousel.index(), 0);
        carousel.retreat();
        assert_eq!(carousel.index(), 2);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_wraparound_for_any_length() {
        for len in 1..8 {
            let mut carousel = Carousel::new(len);
            carousel.jump(len - 1);
            carousel.advance();
            assert_eq!(carousel.index(), 0, "advance past last, len {len}");
            carousel.retreat();
            assert_eq!(carousel.index(), len - 1, "retreat past first, len {len}");
        }
    }

    #[test]
    fn test_full_cycle_returns_home() {
        let mut carousel = Carousel::new(5);
        carousel.jump(2);
        for _ in 0..5 {
            carousel.advance();
        }
        assert_eq!(carousel.index(), 2);
        for _ in 0..5 {
            carousel.retreat();
        }
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_jump_clamps() {
        let mut carousel = Carousel::new(3);
        carousel.jump(1);
        assert_eq!(carousel.index(), 1);
        assert!(carousel.is_active(1));
        carousel.jump(42);
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_empty_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        carousel.jump(3);
        assert_eq!(carousel.index(), 0);
        assert!(carousel.is_empty());
        assert!(!carousel.is_active(0));
    }
}
