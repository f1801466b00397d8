use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid command '{symbol}' at index {index}")]
    InvalidCommand { symbol: char, index: usize },

    #[error("invalid heading '{0}', expected one of N, E, S, W")]
    InvalidHeading(char),

    #[error("vehicle '{id}' starts at ({x}, {y}) outside the {width}x{height} grid")]
    OutOfBoundsStart {
        id: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidGrid { width: i32, height: i32 },

    #[error("vehicle id '{0}' is already registered")]
    DuplicateVehicleId(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario error: {0}")]
    Scenario(#[from] serde_json::Error),
}
