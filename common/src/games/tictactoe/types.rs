use std::fmt;

use super::errors::GameError;

pub const BOARD_SIZE: usize = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Cell::Empty => '-',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Cell> {
        match symbol {
            "-" => Some(Cell::Empty),
            "X" => Some(Cell::X),
            "O" => Some(Cell::O),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    X,
    O,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    pub fn mark(&self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    pub fn symbol(&self) -> char {
        self.mark().symbol()
    }

    pub fn from_symbol(symbol: &str) -> Option<Player> {
        Cell::from_symbol(symbol).and_then(|cell| cell.player())
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Result<Self, GameError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(GameError::OutOfRange { row, col });
        }
        Ok(Self { row, col })
    }

    pub(crate) const fn new_unchecked(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE)
            .flat_map(|row| (0..BOARD_SIZE).map(move |col| Position::new_unchecked(row, col)))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Player),
    Draw,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "in progress"),
            Outcome::Win(player) => write!(f, "player {} wins", player),
            Outcome::Draw => write!(f, "draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub player: Player,
    pub cells: [Position; 3],
}

impl WinningLine {
    pub fn new(player: Player, cells: [Position; 3]) -> Self {
        Self { player, cells }
    }

    pub fn start(&self) -> Position {
        self.cells[0]
    }

    pub fn end(&self) -> Position {
        self.cells[2]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_out_of_range() {
        assert!(matches!(
            Position::new(3, 0),
            Err(GameError::OutOfRange { row: 3, col: 0 })
        ));
        assert!(matches!(
            Position::new(0, 7),
            Err(GameError::OutOfRange { row: 0, col: 7 })
        ));
        assert!(Position::new(2, 2).is_ok());
    }

    #[test]
    fn test_positions_are_row_major() {
        let all: Vec<(usize, usize)> = Position::all().map(|p| (p.row(), p.col())).collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], (0, 0));
        assert_eq!(all[1], (0, 1));
        assert_eq!(all[3], (1, 0));
        assert_eq!(all[8], (2, 2));
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Player::from_symbol("X"), Some(Player::X));
        assert_eq!(Player::from_symbol("O"), Some(Player::O));
        assert_eq!(Player::from_symbol("-"), None);
        assert_eq!(Player::from_symbol("x"), None);
        assert_eq!(Cell::from_symbol("-"), Some(Cell::Empty));
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.mark(), Cell::O);
    }
}
