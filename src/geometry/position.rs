use std::fmt;

use crate::direction::Heading;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The cell one unit ahead, with no bounds check.
    pub fn step(&self, heading: Heading) -> Position {
        let (dx, dy) = heading.delta();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Position { x, y }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_uses_heading_delta() {
        let origin = Position::new(3, 3);
        assert_eq!(origin.step(Heading::North), Position::new(3, 4));
        assert_eq!(origin.step(Heading::East), Position::new(4, 3));
        assert_eq!(origin.step(Heading::South), Position::new(3, 2));
        assert_eq!(origin.step(Heading::West), Position::new(2, 3));
    }

    #[test]
    fn step_may_leave_the_grid() {
        assert_eq!(Position::new(0, 0).step(Heading::West), Position::new(-1, 0));
    }

    #[test]
    fn displays_space_separated() {
        assert_eq!(Position::new(5, 4).to_string(), "5 4");
    }
}
