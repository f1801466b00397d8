use std::collections::HashSet;

use crate::command::{parse_commands, Command};
use crate::core::Vehicle;
use crate::direction::Heading;
use crate::error::SimError;
use crate::geometry::{Grid, Position};

/// Vehicle registry for one session, kept in registration order.
///
/// Registration order drives collision tie-breaking, so it never changes once set.
pub struct VehicleManager {
    grid: Grid,
    vehicles: Vec<Vehicle>,
    commands: Vec<Vec<Command>>,
    ids: HashSet<String>,
}

impl VehicleManager {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            vehicles: Vec::new(),
            commands: Vec::new(),
            ids: HashSet::new(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn spawn_vehicle(
        &mut self,
        id: &str,
        position: Position,
        heading: Heading,
        commands: Vec<Command>,
    ) -> Result<(), SimError> {
        if self.ids.contains(id) {
            return Err(SimError::DuplicateVehicleId(id.to_string()));
        }
        if !self.grid.contains(&position) {
            return Err(SimError::OutOfBoundsStart {
                id: id.to_string(),
                x: position.x,
                y: position.y,
                width: self.grid.width(),
                height: self.grid.height(),
            });
        }

        self.ids.insert(id.to_string());
        self.vehicles.push(Vehicle::new(id, position, heading));
        self.commands.push(commands);
        Ok(())
    }

    /// Parses `heading` and `commands` from their symbol form before spawning.
    pub fn spawn_from_symbols(
        &mut self,
        id: &str,
        (x, y, heading): (i32, i32, char),
        commands: &str,
    ) -> Result<(), SimError> {
        let heading = Heading::try_from(heading)?;
        let commands = parse_commands(commands)?;
        self.spawn_vehicle(id, Position::new(x, y), heading, commands)
    }

    /// Command for `step` (1-based); `None` once the vehicle's sequence is exhausted.
    pub fn command_at(&self, index: usize, step: usize) -> Option<Command> {
        if step == 0 {
            return None;
        }
        self.commands
            .get(index)
            .and_then(|seq| seq.get(step - 1))
            .copied()
    }

    pub fn max_steps(&self) -> usize {
        self.commands.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn get_vehicles(&self) -> &Vec<Vehicle> {
        &self.vehicles
    }

    pub(crate) fn vehicles_mut(&mut self) -> &mut Vec<Vehicle> {
        &mut self.vehicles
    }

    pub fn get_vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> VehicleManager {
        VehicleManager::new(Grid::new(10, 10).unwrap())
    }

    #[test]
    fn rejects_duplicate_ids() {
        let mut m = manager();
        m.spawn_from_symbols("A", (0, 0, 'N'), "F").unwrap();
        let err = m.spawn_from_symbols("A", (1, 1, 'N'), "F").unwrap_err();
        assert!(matches!(err, SimError::DuplicateVehicleId(id) if id == "A"));
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn rejects_start_outside_grid() {
        let mut m = manager();
        let err = m.spawn_from_symbols("A", (10, 0, 'N'), "").unwrap_err();
        assert!(matches!(err, SimError::OutOfBoundsStart { x: 10, y: 0, .. }));
        assert!(m.is_empty());
    }

    #[test]
    fn surfaces_symbol_errors() {
        let mut m = manager();
        assert!(matches!(
            m.spawn_from_symbols("A", (0, 0, 'Q'), "F"),
            Err(SimError::InvalidHeading('Q'))
        ));
        assert!(matches!(
            m.spawn_from_symbols("A", (0, 0, 'N'), "FB"),
            Err(SimError::InvalidCommand { symbol: 'B', index: 1 })
        ));
    }

    #[test]
    fn exhausted_sequences_yield_no_command() {
        let mut m = manager();
        m.spawn_from_symbols("A", (0, 0, 'N'), "FL").unwrap();
        m.spawn_from_symbols("B", (5, 5, 'N'), "FFFF").unwrap();
        assert_eq!(m.max_steps(), 4);
        assert_eq!(m.command_at(0, 1), Some(Command::Forward));
        assert_eq!(m.command_at(0, 2), Some(Command::Left));
        assert_eq!(m.command_at(0, 3), None);
        assert_eq!(m.command_at(1, 4), Some(Command::Forward));
        assert_eq!(m.command_at(1, 0), None);
    }
}
