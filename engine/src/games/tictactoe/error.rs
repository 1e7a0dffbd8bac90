use super::types::BOARD_SIZE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    InvalidBoardShape { len: usize },
    InvalidCell { character: char, position: usize },
    InvalidState(String),
    CellOccupied(usize),
    CellOutOfRange(usize),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidBoardShape { len } => {
                write!(f, "Invalid board shape: expected {} cells, got {}", BOARD_SIZE, len)
            }
            EngineError::InvalidCell { character, position } => {
                write!(f, "Invalid cell '{}' at position {}", character, position)
            }
            EngineError::InvalidState(reason) => write!(f, "Invalid state: {}", reason),
            EngineError::CellOccupied(index) => write!(f, "Cell {} is already marked", index),
            EngineError::CellOutOfRange(index) => {
                write!(f, "Cell {} is out of range 0..{}", index, BOARD_SIZE)
            }
        }
    }
}

impl std::error::Error for EngineError {}
