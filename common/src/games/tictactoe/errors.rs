#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    IllegalMove { row: usize, col: usize },
    OutOfRange { row: usize, col: usize },
    NoMovesAvailable,
}

impl std::fmt::Display for GameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameError::IllegalMove { row, col } => {
                write!(f, "Cell ({}, {}) is already marked", row, col)
            }
            GameError::OutOfRange { row, col } => {
                write!(f, "Position ({}, {}) is out of bounds", row, col)
            }
            GameError::NoMovesAvailable => write!(f, "No moves available on a full board"),
        }
    }
}

impl std::error::Error for GameError {}
