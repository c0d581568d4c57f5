//! Cardinal directions of a tile's sides.

/// One of the four sides of a tile.
///
/// `y` grows south, so `North` is the side at the tile's minimum `y`.
/// The discriminant doubles as the slot index in per-cell side caches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// The side facing decreasing `y`.
    North = 0,
    /// The side facing increasing `y`.
    South = 1,
    /// The side facing increasing `x`.
    East = 2,
    /// The side facing decreasing `x`.
    West = 3,
}

impl Direction {
    /// All directions in the order a tile's sides are visited during an
    /// edge sweep.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Slot index in `0..4`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Cell offset `(dx, dy)` of the neighbour across this side.
    pub const fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// `true` for sides whose edges run along the x axis.
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::North | Direction::South)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_dense() {
        let idx: Vec<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(idx, vec![0, 1, 2, 3]);
    }

    #[test]
    fn offsets_point_across_each_side() {
        let offsets: Vec<(i32, i32)> = Direction::ALL.iter().map(|d| d.offset()).collect();
        assert_eq!(offsets, vec![(0, -1), (0, 1), (1, 0), (-1, 0)]);
    }

    #[test]
    fn horizontal_sides() {
        assert!(Direction::North.is_horizontal());
        assert!(Direction::South.is_horizontal());
        assert!(!Direction::East.is_horizontal());
        assert!(!Direction::West.is_horizontal());
    }
}
