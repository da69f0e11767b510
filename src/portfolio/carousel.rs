// src/portfolio/carousel.rs
use crate::core::prelude::*;

/// `(i + 1) mod n`. Callers guarantee `n > 0`.
pub fn next_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "carousel length must be positive");
    (index + 1) % len
}

/// `(i - 1 + n) mod n`, computed as `(i + n - 1) mod n` to stay unsigned.
pub fn prev_index(index: usize, len: usize) -> usize {
    debug_assert!(len > 0, "carousel length must be positive");
    (index + len - 1) % len
}

/// Position in a fixed, non-empty list of projects. Wraps at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    index: usize,
    len: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(AppError::Validation(
                "Carousel needs at least one item".to_string(),
            ));
        }
        Ok(Self { index: 0, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.len
    }

    pub fn next(&mut self) -> usize {
        self.index = next_index(self.index, self.len);
        self.index
    }

    pub fn prev(&mut self) -> usize {
        self.index = prev_index(self.index, self.len);
        self.index
    }

    /// Jumps to `index`; out-of-range requests are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.len {
            self.index = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_items_wrap_both_ways() {
        let mut carousel = Carousel::new(3).expect("non-empty");
        assert_eq!(carousel.prev(), 2);
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.next(), 1);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        for len in 1..=7 {
            for start in 0..len {
                let mut forward = Carousel::new(len).expect("non-empty");
                forward.select(start);
                let mut backward = forward;
                for _ in 0..len {
                    forward.next();
                    backward.prev();
                }
                assert_eq!(forward.index(), start);
                assert_eq!(backward.index(), start);
            }
        }
    }

    #[test]
    fn test_single_item_stays_put() {
        let mut carousel = Carousel::new(1).expect("non-empty");
        assert_eq!(carousel.next(), 0);
        assert_eq!(carousel.prev(), 0);
    }

    #[test]
    fn test_empty_is_rejected() {
        assert!(Carousel::new(0).is_err());
    }

    #[test]
    fn test_select_ignores_out_of_range() {
        let mut carousel = Carousel::new(3).expect("non-empty");
        assert!(carousel.select(2));
        assert!(!carousel.select(3));
        assert_eq!(carousel.index(), 2);
    }

    #[test]
    fn test_index_functions() {
        assert_eq!(next_index(2, 3), 0);
        assert_eq!(prev_index(0, 3), 2);
        assert_eq!(prev_index(1, 3), 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "carousel length must be positive")]
    fn test_next_index_rejects_empty() {
        next_index(0, 0);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "carousel length must be positive")]
    fn test_prev_index_rejects_empty() {
        prev_index(0, 0);
    }
}
