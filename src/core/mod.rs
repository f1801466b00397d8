pub mod vehicle_data;
pub mod collision_detector;

pub use collision_detector::{Collision, CollisionDetector, OccupancyMap};
pub use vehicle_data::{StepOutcome, Vehicle};
