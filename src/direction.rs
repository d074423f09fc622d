use std::fmt;

/// One of the eight compass directions a word can be read in.
///
/// Rows grow downward and columns grow to the right, so `South` is `(1, 0)`
/// and `North` is `(-1, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
    North,
    NorthEast,
}

impl Direction {
    /// Every direction, in declaration order. Scanners iterate this, so it must
    /// hold each direction exactly once.
    pub const ALL: [Direction; 8] = [
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
    ];

    /// The four diagonal directions.
    pub const DIAGONALS: [Direction; 4] = [
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthEast,
        Direction::NorthWest,
    ];

    /// Unit step as `(row_delta, col_delta)`.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
        }
    }

    #[must_use]
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::SouthEast => Direction::NorthWest,
            Direction::South => Direction::North,
            Direction::SouthWest => Direction::NorthEast,
            Direction::West => Direction::East,
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::East => "EAST",
            Direction::SouthEast => "SOUTHEAST",
            Direction::South => "SOUTH",
            Direction::SouthWest => "SOUTHWEST",
            Direction::West => "WEST",
            Direction::NorthWest => "NORTHWEST",
            Direction::North => "NORTH",
            Direction::NorthEast => "NORTHEAST",
        }
    }

    /// Move one step from `(row, col)`. Returns `None` if the step would leave
    /// the non-negative quadrant; upper bounds are the grid's business.
    #[must_use]
    pub fn step(self, row: usize, col: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        Some((row.checked_add_signed(dr)?, col.checked_add_signed(dc)?))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
