use std::fs;
use std::path::Path;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::COMMAND_SYMBOLS;
use crate::error::SimError;
use crate::geometry::Grid;
use crate::simulation::{Stepper, VehicleManager};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSpec {
    pub id: String,
    pub x: i32,
    pub y: i32,
    pub heading: char,
    #[serde(default)]
    pub commands: String,
}

/// A grid plus its fleet, as stored in a scenario file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub width: i32,
    pub height: i32,
    pub vehicles: Vec<VehicleSpec>,
}

#[derive(Debug, Clone, Copy)]
pub struct RandomParams {
    pub width: i32,
    pub height: i32,
    pub vehicles: usize,
    pub max_commands: usize,
}

impl Scenario {
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading scenario");
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Random fleet with ids `car0..`, in-bounds starts and `F/L/R` commands.
    /// Starting cells may coincide; that shows up as a step-0 collision.
    pub fn random<R: Rng>(rng: &mut R, params: RandomParams) -> Result<Self, SimError> {
        Grid::new(params.width, params.height)?;

        let vehicles = (0..params.vehicles)
            .map(|n| {
                let heading = match rng.gen_range(0..4) {
                    0 => 'N',
                    1 => 'E',
                    2 => 'S',
                    _ => 'W',
                };
                let len = rng.gen_range(0..=params.max_commands);
                let commands = (0..len)
                    .map(|_| COMMAND_SYMBOLS[rng.gen_range(0..COMMAND_SYMBOLS.len())])
                    .collect();
                VehicleSpec {
                    id: format!("car{}", n),
                    x: rng.gen_range(0..params.width),
                    y: rng.gen_range(0..params.height),
                    heading,
                    commands,
                }
            })
            .collect();

        Ok(Scenario {
            width: params.width,
            height: params.height,
            vehicles,
        })
    }

    /// Validates and registers every vehicle, in file order.
    pub fn build(&self) -> Result<Stepper, SimError> {
        let mut manager = VehicleManager::new(Grid::new(self.width, self.height)?);
        for spec in &self.vehicles {
            manager.spawn_from_symbols(&spec.id, (spec.x, spec.y, spec.heading), &spec.commands)?;
        }
        Ok(Stepper::new(manager))
    }
}
