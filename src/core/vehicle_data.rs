use crate::command::Command;
use crate::direction::{Heading, Turn};
use crate::geometry::{Grid, Position};
use tracing::trace;

/// What a single `apply_step` did to the vehicle.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    Blocked,
    Rotated,
    Idle,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: String,
    pub(crate) position: Position,
    pub(crate) heading: Heading,
    pub(crate) history: Vec<Position>,
}

impl Vehicle {
    pub fn new(id: impl Into<String>, position: Position, heading: Heading) -> Self {
        Vehicle {
            id: id.into(),
            position,
            heading,
            history: vec![position],
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pose(&self) -> (Position, Heading) {
        (self.position, self.heading)
    }

    /// One entry per completed step, starting with the initial placement.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    pub fn rotate(&mut self, turn: Turn) {
        self.heading = self.heading.rotated(turn);
    }

    pub fn next_position(&self) -> Position {
        self.position.step(self.heading)
    }

    /// Cell this vehicle would occupy after `command`, without touching its state.
    pub fn tentative_destination(&self, command: Option<Command>, grid: &Grid) -> Position {
        match command {
            Some(Command::Forward) => {
                let next = self.next_position();
                if grid.contains(&next) {
                    next
                } else {
                    self.position
                }
            }
            _ => self.position,
        }
    }

    pub fn apply_step(&mut self, command: Option<Command>, grid: &Grid) -> StepOutcome {
        let outcome = match command {
            None => StepOutcome::Idle,
            Some(Command::Forward) => {
                let next = self.next_position();
                if grid.contains(&next) {
                    self.position = next;
                    StepOutcome::Moved
                } else {
                    trace!(vehicle = %self.id, x = next.x, y = next.y, "forward move blocked by boundary");
                    StepOutcome::Blocked
                }
            }
            Some(cmd) => {
                if let Some(turn) = cmd.turn() {
                    self.rotate(turn);
                }
                StepOutcome::Rotated
            }
        };
        self.history.push(self.position);
        outcome
    }
}
