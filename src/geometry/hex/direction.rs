use super::cube::Cube;

/// Direction in a hexagonal coordinate system
///
/// Assumes that the major orientation is horizontal: `East` and `West`
/// cross an edge, and `y` grows toward the north.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    East,
    Northeast,
    Northwest,
    West,
    Southwest,
    Southeast,
}

impl Direction {
    /// Iterate through all `Direction`s, counterclockwise from `East`.
    ///
    /// This is the order in which neighbors are listed.
    pub fn iter() -> impl Iterator<Item = Direction> {
        std::iter::successors(Some(Direction::East), |direction| {
            use Direction::*;

            match direction {
                East => Some(Northeast),
                Northeast => Some(Northwest),
                Northwest => Some(West),
                West => Some(Southwest),
                Southwest => Some(Southeast),
                Southeast => None,
            }
        })
    }

    /// Unit step in this direction.
    pub const fn delta(self) -> Cube {
        match self {
            Direction::East => Cube::new(1, -1, 0),
            Direction::Northeast => Cube::new(0, -1, 1),
            Direction::Northwest => Cube::new(-1, 0, 1),
            Direction::West => Cube::new(-1, 1, 0),
            Direction::Southwest => Cube::new(0, 1, -1),
            Direction::Southeast => Cube::new(1, 0, -1),
        }
    }

    pub const fn reverse(self) -> Direction {
        match self {
            Direction::East => Direction::West,
            Direction::Northeast => Direction::Southwest,
            Direction::Northwest => Direction::Southeast,
            Direction::West => Direction::East,
            Direction::Southwest => Direction::Northeast,
            Direction::Southeast => Direction::Northwest,
        }
    }
}
