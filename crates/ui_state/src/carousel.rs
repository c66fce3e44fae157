//! Carousel cursor over a fixed, non-empty image sequence.

use std::num::NonZeroUsize;

/// Cursor into an ordered, non-empty sequence of slides.
///
/// The cursor always stays in `[0, len)`; wrap-around is handled by the
/// advance/retreat operations, so there is no error path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    cursor: usize,
    len: NonZeroUsize,
}

impl Carousel {
    /// New carousel over `len` slides, starting at slide 0.
    pub fn new(len: NonZeroUsize) -> Self {
        Self { cursor: 0, len }
    }

    /// Current slide index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of slides.
    pub fn len(&self) -> usize {
        self.len.get()
    }

    /// Move to the next slide, wrapping past the end.
    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.len.get();
    }

    /// Move to the previous slide, wrapping past the start.
    pub fn retreat(&mut self) {
        self.cursor = (self.cursor + self.len.get() - 1) % self.len.get();
    }

    /// Jump straight to `idx`. Out-of-range indices are ignored.
    pub fn jump(&mut self, idx: usize) {
        if idx < self.len.get() {
            self.cursor = idx;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn carousel(len: usize) -> Carousel {
        Carousel::new(NonZeroUsize::new(len).unwrap())
    }

    #[test]
    fn test_starts_at_zero() {
        assert_eq!(carousel(3).cursor(), 0);
    }

    #[test]
    fn test_advance_then_retreat_is_identity() {
        let mut c = carousel(3);
        c.jump(1);
        let before = c.cursor();
        c.advance();
        c.retreat();
        assert_eq!(c.cursor(), before);

        c.retreat();
        c.advance();
        assert_eq!(c.cursor(), before);
    }

    #[test]
    fn test_three_advances_wrap_to_start() {
        let mut c = carousel(3);
        c.advance();
        c.advance();
        c.advance();
        assert_eq!(c.cursor(), 0);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_end() {
        let mut c = carousel(3);
        c.retreat();
        assert_eq!(c.cursor(), 2);
    }

    #[test]
    fn test_cursor_stays_in_bounds_under_arbitrary_sequences() {
        let mut c = carousel(3);
        // Mix of moves long enough to wrap both directions several times.
        for step in 0..100 {
            if step % 3 == 0 {
                c.retreat();
            } else {
                c.advance();
            }
            assert!(c.cursor() < c.len());
        }
    }

    #[test]
    fn test_jump_ignores_out_of_range() {
        let mut c = carousel(3);
        c.jump(2);
        assert_eq!(c.cursor(), 2);
        c.jump(3);
        assert_eq!(c.cursor(), 2);
        c.jump(usize::MAX);
        assert_eq!(c.cursor(), 2);
    }

    #[test]
    fn test_single_slide_carousel_never_moves() {
        let mut c = carousel(1);
        c.advance();
        c.retreat();
        assert_eq!(c.cursor(), 0);
    }
}
