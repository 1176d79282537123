use crate::robot::Position;

/// Errors produced while driving the robot.
///
/// Move rejections (`OutOfBounds`, `MalformedPlace`, `NotPlaced`) are ordinary
/// values inside the engine: the world logs them and carries on.
#[derive(Debug, thiserror::Error)]
pub enum RobotError {
    #[error("position {position} is off a {dimension}x{dimension} table")]
    OutOfBounds { position: Position, dimension: u32 },

    #[error("malformed PLACE instruction `{0}`")]
    MalformedPlace(String),

    #[error("robot has not been placed")]
    NotPlaced,

    #[error("table dimension must be between 1 and {max}, got {0}", max = i32::MAX)]
    InvalidDimension(u32),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RobotError {
    /// True for the errors that only mean "this move was not allowed".
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            RobotError::OutOfBounds { .. } | RobotError::MalformedPlace(_) | RobotError::NotPlaced
        )
    }
}

pub type Result<T> = std::result::Result<T, RobotError>;
