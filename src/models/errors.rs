use std::fmt;

/// Errors raised by the console front-end.
///
/// The game model itself never fails; these cover reading and
/// interpreting player input.
#[derive(Debug)]
pub enum GameError {
    /// Failed to parse user input
    ParseError(String),
    /// I/O error occurred
    IoError(std::io::Error),
}

/// Type alias for Results using GameError
pub type GameResult<T> = Result<T, GameError>;

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GameError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            GameError::IoError(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::IoError(err)
    }
}

impl From<std::num::ParseIntError> for GameError {
    fn from(err: std::num::ParseIntError) -> Self {
        GameError::ParseError(err.to_string())
    }
}
