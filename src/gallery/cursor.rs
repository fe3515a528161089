//! Wraparound index arithmetic shared by the lightbox and the testimonial
//! carousel.

/// An index into a sequence of `len` elements that wraps at both ends.
///
/// Construction refuses an empty sequence or an out-of-range index, so every
/// step below is a plain modulo over a non-zero length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WrapCursor {
    index: usize,
    len: usize,
}

impl WrapCursor {
    pub fn new(index: usize, len: usize) -> Option<Self> {
        (index < len).then_some(Self { index, len })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Steps forward, from the last element back to the first.
    pub fn next(self) -> Self {
        Self {
            index: (self.index + 1) % self.len,
            ..self
        }
    }

    /// Steps backward, from the first element to the last.
    pub fn prev(self) -> Self {
        Self {
            index: (self.index + self.len - 1) % self.len,
            ..self
        }
    }

    /// Indices of `count` consecutive elements starting at the cursor,
    /// wrapping past the end. Never yields more than `len` indices.
    pub fn window(&self, count: usize) -> impl Iterator<Item = usize> + '_ {
        (0..count.min(self.len)).map(move |offset| (self.index + offset) % self.len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_out_of_range() {
        assert_eq!(WrapCursor::new(0, 0), None);
        assert_eq!(WrapCursor::new(3, 3), None);
        assert!(WrapCursor::new(2, 3).is_some());
    }

    #[test]
    fn next_wraps_to_first() {
        let cursor = WrapCursor::new(2, 3).unwrap();
        assert_eq!(cursor.next().index(), 0);
    }

    #[test]
    fn prev_wraps_to_last() {
        let cursor = WrapCursor::new(0, 3).unwrap();
        assert_eq!(cursor.prev().index(), 2);
    }

    #[test]
    fn single_element_stays_put() {
        let cursor = WrapCursor::new(0, 1).unwrap();
        assert_eq!(cursor.next(), cursor);
        assert_eq!(cursor.prev(), cursor);
    }

    #[test]
    fn full_lap_returns_to_start() {
        for len in 1..8 {
            for start in 0..len {
                let origin = WrapCursor::new(start, len).unwrap();
                let forward = (0..len).fold(origin, |c, _| c.next());
                let backward = (0..len).fold(origin, |c, _| c.prev());
                assert_eq!(forward, origin);
                assert_eq!(backward, origin);
            }
        }
    }

    #[test]
    fn window_wraps_and_is_capped() {
        let cursor = WrapCursor::new(4, 5).unwrap();
        assert_eq!(cursor.window(3).collect::<Vec<_>>(), vec![4, 0, 1]);

        let short = WrapCursor::new(1, 2).unwrap();
        assert_eq!(short.window(3).collect::<Vec<_>>(), vec![1, 0]);
    }
}
