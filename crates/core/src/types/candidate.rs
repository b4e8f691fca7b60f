/// A contiguous run of segments `[start, start + len)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub start: usize,
    pub len: usize,
}

impl Candidate {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn touches_end(&self, total: usize) -> bool {
        self.end() == total
    }

    pub fn is_leaf(&self, total: usize) -> bool {
        self.len == 1 && self.touches_end(total)
    }

    /// Grow the run one segment to the left
    pub fn extend_left(self) -> Self {
        Self {
            start: self.start.saturating_sub(1),
            len: self.len + 1,
        }
    }

    /// Every candidate of a path with `total` segments, in search order:
    /// shorter runs first, and for equal lengths the run closest to the end.
    pub fn search_order(total: usize) -> impl Iterator<Item = Candidate> {
        (1..=total).flat_map(move |len| (0..=total - len).rev().map(move |start| Candidate { start, len }))
    }
}
