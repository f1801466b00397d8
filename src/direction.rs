use std::fmt;

use crate::error::SimError;

#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq)]
pub enum Turn {
    Left,
    Right,
}

// Clockwise order; Right walks forward through it, Left walks back.
const HEADING_ORDER: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

impl Heading {
    pub const ALL: [Heading; 4] = HEADING_ORDER;

    fn index(&self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }

    pub fn rotated(&self, turn: Turn) -> Heading {
        let idx = self.index();
        match turn {
            Turn::Left => HEADING_ORDER[(idx + 3) % 4],
            Turn::Right => HEADING_ORDER[(idx + 1) % 4],
        }
    }

    /// Unit step on the grid; north is +y.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Heading::North => (0, 1),
            Heading::East => (1, 0),
            Heading::South => (0, -1),
            Heading::West => (-1, 0),
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }
}

impl TryFrom<char> for Heading {
    type Error = SimError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            'N' => Ok(Heading::North),
            'E' => Ok(Heading::East),
            'S' => Ok(Heading::South),
            'W' => Ok(Heading::West),
            other => Err(SimError::InvalidHeading(other)),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
