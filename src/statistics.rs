use crate::core::{Collision, StepOutcome};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Statistics {
    pub vehicles_registered: usize,
    pub steps_completed: usize,
    pub forward_moves: u32,
    pub blocked_moves: u32,
    pub rotations: u32,
    pub idle_steps: u32,
    pub collision: Option<Collision>,
}

impl Statistics {
    pub fn new(vehicles_registered: usize) -> Self {
        Statistics {
            vehicles_registered,
            ..Default::default()
        }
    }

    pub fn record_outcome(&mut self, outcome: StepOutcome) {
        match outcome {
            StepOutcome::Moved => self.forward_moves += 1,
            StepOutcome::Blocked => self.blocked_moves += 1,
            StepOutcome::Rotated => self.rotations += 1,
            StepOutcome::Idle => self.idle_steps += 1,
        }
    }

    pub fn record_step(&mut self) {
        self.steps_completed += 1;
    }

    pub fn record_collision(&mut self, collision: &Collision) {
        self.collision = Some(collision.clone());
    }

    pub fn display(&self) {
        println!("\n╔══════════════════════════════════════════════╗");
        println!("║              SIMULATION SUMMARY              ║");
        println!("╠══════════════════════════════════════════════╣");
        println!("║ Vehicles Registered: {:<24}║", self.vehicles_registered);
        println!("║ Steps Completed:     {:<24}║", self.steps_completed);
        println!("╠══════════════════════════════════════════════╣");
        println!("║ Forward Moves:       {:<24}║", self.forward_moves);
        println!("║ Blocked Moves:       {:<24}║", self.blocked_moves);
        println!("║ Rotations:           {:<24}║", self.rotations);
        println!("║ Idle Steps:          {:<24}║", self.idle_steps);
        println!("╠══════════════════════════════════════════════╣");
        match &self.collision {
            Some(c) => {
                let summary = format!("{} at ({}, {}) step {}", c.ids.join("+"), c.cell.x, c.cell.y, c.step);
                println!("║ Collision: {:<34}║", summary);
            }
            None => println!("║ Collision: {:<34}║", "none"),
        }
        println!("╚══════════════════════════════════════════════╝");
    }
}
