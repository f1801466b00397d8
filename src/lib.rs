//! Lockstep simulation of autonomous vehicles on a bounded grid.
//!
//! Each vehicle follows its own `F`/`L`/`R` command string. All vehicles take
//! one command per step; destinations are previewed for the whole fleet before
//! anyone moves, and the run stops at the first cell claimed by two vehicles.

pub mod command;
pub mod constants;
pub mod core;
pub mod direction;
pub mod error;
pub mod geometry;
pub mod parallel;
pub mod scenario;
pub mod simulation;
pub mod statistics;

pub use command::{parse_commands, Command};
pub use crate::core::{Collision, OccupancyMap, StepOutcome, Vehicle};
pub use direction::{Heading, Turn};
pub use error::SimError;
pub use geometry::{Grid, Position};
pub use scenario::{RandomParams, Scenario, VehicleSpec};
pub use simulation::{
    simulate_multiple, simulate_single, SimulationResult, Stepper, StepperState, VehicleManager,
};
pub use statistics::Statistics;
