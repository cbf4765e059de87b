//! Signed cell coordinates on the unbounded plane.

/// Position of a cell. Any `i64` pair is valid; there is no origin offset.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Coord {
    pub x: i64,
    pub y: i64,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Shift by a signed offset. Wraps at the `i64` extremes.
    pub const fn offset(self, dx: i64, dy: i64) -> Self {
        Self {
            x: self.x.wrapping_add(dx),
            y: self.y.wrapping_add(dy),
        }
    }

    /// Moore neighborhood: the 8 cells at Chebyshev distance 1.
    pub fn neighbors(self) -> [Coord; 8] {
        [
            self.offset(-1, -1),
            self.offset(-1, 0),
            self.offset(-1, 1),
            self.offset(0, -1),
            self.offset(0, 1),
            self.offset(1, -1),
            self.offset(1, 0),
            self.offset(1, 1),
        ]
    }
}

impl From<(i64, i64)> for Coord {
    fn from((x, y): (i64, i64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_neighbors_are_eight_distinct() {
        let c = Coord::new(3, -7);
        let set: HashSet<_> = c.neighbors().into_iter().collect();
        assert_eq!(set.len(), 8);
        assert!(!set.contains(&c));
    }

    #[test]
    fn test_neighbors_within_chebyshev_one() {
        let c = Coord::new(-5, 12);
        for n in c.neighbors() {
            let dx = (n.x - c.x).abs();
            let dy = (n.y - c.y).abs();
            assert_eq!(dx.max(dy), 1);
        }
    }

    #[test]
    fn test_neighbors_at_extremes_do_not_panic() {
        let c = Coord::new(i64::MAX, i64::MIN);
        assert_eq!(c.neighbors().len(), 8);
    }
}
