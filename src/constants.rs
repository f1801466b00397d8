/// Rendering of a session that ran to completion.
pub const NO_COLLISION: &str = "no collision";

pub const DEFAULT_GRID_WIDTH: i32 = 10;
pub const DEFAULT_GRID_HEIGHT: i32 = 10;

// Random scenario generation
pub const DEFAULT_RANDOM_VEHICLES: usize = 4;
pub const DEFAULT_RANDOM_STEPS: usize = 20;
pub const COMMAND_SYMBOLS: [char; 3] = ['F', 'L', 'R'];
