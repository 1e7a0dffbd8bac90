use serde::{Deserialize, Serialize};

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_SIZE: usize = BOARD_WIDTH * BOARD_WIDTH;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            '.' | '-' | '_' => Some(Mark::Empty),
            _ => None,
        }
    }
}

/// Row-major 3x3 grid: indices 0..=2 are the top row.
pub type Board = [Mark; BOARD_SIZE];

/// Three cell indices forming a row, column or diagonal.
pub type Line = [usize; 3];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn from_index(index: usize) -> Self {
        Self::new(index % BOARD_WIDTH, index / BOARD_WIDTH)
    }

    pub fn to_index(&self) -> usize {
        self.y * BOARD_WIDTH + self.x
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: Line,
}

impl WinningLine {
    pub fn new(mark: Mark, cells: Line) -> Self {
        Self { mark, cells }
    }

    pub fn start(&self) -> Position {
        Position::from_index(self.cells[0])
    }

    pub fn end(&self) -> Position {
        Position::from_index(self.cells[2])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        *self != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }
}
