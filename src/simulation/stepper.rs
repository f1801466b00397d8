use tracing::{debug, info};

use crate::command::Command;
use crate::core::{Collision, CollisionDetector, OccupancyMap, Vehicle};
use crate::parallel::map_slice;
use crate::simulation::vehicle_manager::VehicleManager;
use crate::simulation::SimulationResult;
use crate::statistics::Statistics;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepperState {
    /// Next step to evaluate; 0 is the initial placement check.
    Running(usize),
    CollisionFound(Collision),
    Completed,
}

/// Lockstep driver: every step previews all destinations, checks them, and
/// only then commits. No commit is visible to a preview of the same step.
pub struct Stepper {
    manager: VehicleManager,
    state: StepperState,
    statistics: Statistics,
    force_sequential: bool,
}

impl Stepper {
    pub fn new(manager: VehicleManager) -> Self {
        let statistics = Statistics::new(manager.len());
        Stepper {
            manager,
            state: StepperState::Running(0),
            statistics,
            force_sequential: false,
        }
    }

    /// Keep the preview phase on the calling thread even with `parallel` enabled.
    pub fn with_force_sequential(mut self, force_sequential: bool) -> Self {
        self.force_sequential = force_sequential;
        self
    }

    pub fn state(&self) -> &StepperState {
        &self.state
    }

    pub fn is_finished(&self) -> bool {
        !matches!(self.state, StepperState::Running(_))
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        self.manager.get_vehicles()
    }

    pub fn manager(&self) -> &VehicleManager {
        &self.manager
    }

    fn commands_for(&self, step: usize) -> Vec<Option<Command>> {
        (0..self.manager.len())
            .map(|index| self.manager.command_at(index, step))
            .collect()
    }

    /// Cell -> ids each vehicle would occupy after `step`, with no state touched.
    /// Step 0 yields the current placements.
    pub fn compute_tentative_destinations(&self, step: usize) -> OccupancyMap {
        let grid = *self.manager.grid();
        let vehicles = self.manager.get_vehicles();
        let commands = self.commands_for(step);
        let indices: Vec<usize> = (0..vehicles.len()).collect();

        let destinations = map_slice(
            &indices,
            |&i| vehicles[i].tentative_destination(commands[i], &grid),
            self.force_sequential,
        );

        vehicles
            .iter()
            .zip(destinations)
            .map(|(vehicle, cell)| (cell, vehicle.id.as_str()))
            .collect()
    }

    /// Applies every vehicle's command for `step`, in registration order.
    pub fn commit_step(&mut self, step: usize) {
        let grid = *self.manager.grid();
        let commands = self.commands_for(step);

        for (vehicle, command) in self.manager.vehicles_mut().iter_mut().zip(commands) {
            let outcome = vehicle.apply_step(command, &grid);
            self.statistics.record_outcome(outcome);
        }
        self.statistics.record_step();
    }

    /// Performs one state transition. Terminal states are left as they are.
    pub fn advance(&mut self) -> &StepperState {
        let step = match self.state {
            StepperState::Running(step) => step,
            _ => return &self.state,
        };

        if step > 0 && step > self.manager.max_steps() {
            info!(steps = self.statistics.steps_completed, "simulation completed without collision");
            self.state = StepperState::Completed;
            return &self.state;
        }

        let occupancy = self.compute_tentative_destinations(step);
        if let Some(collision) = CollisionDetector::detect(&occupancy, step) {
            info!(
                step,
                x = collision.cell.x,
                y = collision.cell.y,
                ids = %collision.ids.join(" "),
                "collision detected"
            );
            self.statistics.record_collision(&collision);
            self.state = StepperState::CollisionFound(collision);
            return &self.state;
        }

        if step > 0 {
            self.commit_step(step);
            debug!(step, occupied = occupancy.len(), "step committed");
        }
        self.state = StepperState::Running(step + 1);
        &self.state
    }

    pub fn run(&mut self) -> SimulationResult {
        while !self.is_finished() {
            self.advance();
        }
        match &self.state {
            StepperState::CollisionFound(collision) => SimulationResult::Collision(collision.clone()),
            _ => SimulationResult::NoCollision,
        }
    }
}
