pub mod stepper;
pub mod vehicle_manager;

use std::fmt;

use crate::command::parse_commands;
use crate::constants::NO_COLLISION;
use crate::core::Collision;
use crate::direction::Heading;
use crate::error::SimError;
use crate::geometry::{Grid, Position};

pub use stepper::{Stepper, StepperState};
pub use vehicle_manager::VehicleManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationResult {
    NoCollision,
    Collision(Collision),
}

impl SimulationResult {
    pub fn collision(&self) -> Option<&Collision> {
        match self {
            SimulationResult::Collision(c) => Some(c),
            SimulationResult::NoCollision => None,
        }
    }
}

impl fmt::Display for SimulationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationResult::NoCollision => write!(f, "{}", NO_COLLISION),
            SimulationResult::Collision(c) => {
                write!(f, "{}\n{}\n{}", c.ids.join(" "), c.cell, c.step)
            }
        }
    }
}

/// Runs one vehicle through `commands` and returns its final pose.
pub fn simulate_single(
    width: i32,
    height: i32,
    x: i32,
    y: i32,
    heading: char,
    commands: &str,
) -> Result<(i32, i32, Heading), SimError> {
    let mut manager = VehicleManager::new(Grid::new(width, height)?);
    let heading = Heading::try_from(heading)?;
    manager.spawn_vehicle("car", Position::new(x, y), heading, parse_commands(commands)?)?;

    let mut stepper = Stepper::new(manager).with_force_sequential(true);
    stepper.run();

    let (position, heading) = stepper.vehicles()[0].pose();
    Ok((position.x, position.y, heading))
}

/// Runs every `(id, (x, y, heading), commands)` in lockstep until the
/// sequences run out or two vehicles claim the same cell.
pub fn simulate_multiple(
    width: i32,
    height: i32,
    vehicles: &[(&str, (i32, i32, char), &str)],
) -> Result<SimulationResult, SimError> {
    let mut manager = VehicleManager::new(Grid::new(width, height)?);
    for (id, pose, commands) in vehicles {
        manager.spawn_from_symbols(id, *pose, commands)?;
    }
    Ok(Stepper::new(manager).run())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_collision_on_three_lines() {
        let result = SimulationResult::Collision(Collision {
            ids: vec!["A".to_string(), "B".to_string()],
            cell: Position::new(5, 4),
            step: 7,
        });
        assert_eq!(result.to_string(), "A B\n5 4\n7");
        assert!(result.collision().is_some());
    }

    #[test]
    fn renders_no_collision_literal() {
        assert_eq!(SimulationResult::NoCollision.to_string(), "no collision");
        assert!(SimulationResult::NoCollision.collision().is_none());
    }

    #[test]
    fn single_rejects_bad_heading() {
        assert!(matches!(
            simulate_single(5, 5, 0, 0, 'X', "F"),
            Err(SimError::InvalidHeading('X'))
        ));
    }
}
