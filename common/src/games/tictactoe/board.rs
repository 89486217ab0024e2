use std::fmt;

use super::errors::GameError;
use super::types::{BOARD_SIZE, Cell, Player, Position};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells: rows }
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    pub fn place(&mut self, position: Position, player: Player) -> Result<(), GameError> {
        let (row, col) = (position.row(), position.col());
        if self.cells[row][col] != Cell::Empty {
            return Err(GameError::IllegalMove { row, col });
        }
        self.cells[row][col] = player.mark();
        Ok(())
    }

    pub fn place_at(&mut self, row: usize, col: usize, player: Player) -> Result<(), GameError> {
        self.place(Position::new(row, col)?, player)
    }

    pub fn cell(&self, position: Position) -> Cell {
        self.cells[position.row()][position.col()]
    }

    pub fn cell_at(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        Ok(self.cell(Position::new(row, col)?))
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn is_empty(&self) -> bool {
        self.count(Cell::Empty) == BOARD_SIZE * BOARD_SIZE
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    pub fn available_moves(&self) -> Vec<Position> {
        Position::all()
            .filter(|&position| self.cell(position) == Cell::Empty)
            .collect()
    }

    // X moves first, so X is either level with O or one ahead.
    pub fn has_valid_mark_counts(&self) -> bool {
        self.player_to_move().is_some()
    }

    pub fn player_to_move(&self) -> Option<Player> {
        let x_count = self.count(Cell::X);
        let o_count = self.count(Cell::O);
        if x_count == o_count {
            Some(Player::X)
        } else if x_count == o_count + 1 {
            Some(Player::O)
        } else {
            None
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            let line: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
            write!(f, "{}", line.join(" "))?;
            if i + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    let symbols: Vec<&str> = layout.split_whitespace().filter(|s| *s != "/").collect();
    assert_eq!(symbols.len(), BOARD_SIZE * BOARD_SIZE, "bad test layout: {}", layout);
    for (i, symbol) in symbols.iter().enumerate() {
        rows[i / BOARD_SIZE][i % BOARD_SIZE] =
            Cell::from_symbol(symbol).unwrap_or_else(|| panic!("bad cell {}", symbol));
    }
    Board::from_rows(rows)
}

// Every board reachable from an empty one by alternating moves, stopping at wins.
#[cfg(test)]
pub(crate) fn reachable_boards() -> Vec<Board> {
    fn visit(board: Board, to_move: Player, seen: &mut std::collections::HashSet<Board>) {
        if !seen.insert(board) {
            return;
        }
        if super::win_detector::winner(&board).is_some() {
            return;
        }
        for position in board.available_moves() {
            let mut next = board;
            next.place(position, to_move).unwrap();
            visit(next, to_move.opponent(), seen);
        }
    }

    let mut seen = std::collections::HashSet::new();
    visit(Board::new(), Player::X, &mut seen);
    seen.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_sets_mark() {
        let mut board = Board::new();
        board.place_at(1, 2, Player::X).unwrap();
        assert_eq!(board.cell_at(1, 2).unwrap(), Cell::X);
        assert_eq!(board.count(Cell::X), 1);
        assert_eq!(board.count(Cell::Empty), 8);
    }

    #[test]
    fn test_place_on_occupied_cell_fails() {
        let mut board = Board::new();
        board.place_at(0, 0, Player::X).unwrap();
        let before = board;
        let result = board.place_at(0, 0, Player::O);
        assert_eq!(result, Err(GameError::IllegalMove { row: 0, col: 0 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = Board::new();
        assert_eq!(
            board.place_at(3, 1, Player::X),
            Err(GameError::OutOfRange { row: 3, col: 1 })
        );
        assert!(board.cell_at(0, 3).is_err());
        assert!(board.is_empty());
    }

    #[test]
    fn test_is_full() {
        let board = board_from_str("X O X / X O O / O X X");
        assert!(board.is_full());
        let board = board_from_str("X O X / X - O / O X X");
        assert!(!board.is_full());
        assert!(!Board::new().is_full());
    }

    #[test]
    fn test_clone_is_independent() {
        let mut board = board_from_str("X - - / - O - / - - -");
        let copy = board.clone();
        board.place_at(2, 2, Player::X).unwrap();
        assert_eq!(copy.cell_at(2, 2).unwrap(), Cell::Empty);
        assert_eq!(board.cell_at(2, 2).unwrap(), Cell::X);
    }

    #[test]
    fn test_available_moves_row_major() {
        let board = board_from_str("X - O / - X - / O - -");
        let moves: Vec<(usize, usize)> = board
            .available_moves()
            .iter()
            .map(|p| (p.row(), p.col()))
            .collect();
        assert_eq!(moves, vec![(0, 1), (1, 0), (1, 2), (2, 1), (2, 2)]);
    }

    #[test]
    fn test_mark_counts() {
        assert!(board_from_str("X - - / - - - / - - -").has_valid_mark_counts());
        assert!(board_from_str("X O - / - - - / - - -").has_valid_mark_counts());
        assert!(!board_from_str("O - - / - - - / - - -").has_valid_mark_counts());
        assert!(!board_from_str("X X - / - - - / - - -").has_valid_mark_counts());
    }

    #[test]
    fn test_player_to_move_follows_counts() {
        assert_eq!(Board::new().player_to_move(), Some(Player::X));
        assert_eq!(board_from_str("X - - / - - - / - - -").player_to_move(), Some(Player::O));
        assert_eq!(board_from_str("X O - / - - - / - - -").player_to_move(), Some(Player::X));
        assert_eq!(board_from_str("X X - / - - - / - - -").player_to_move(), None);
    }

    #[test]
    fn test_reachable_boards_count() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), 5478);
        assert!(boards.iter().all(|board| board.has_valid_mark_counts()));
    }

    #[test]
    fn test_display() {
        let board = board_from_str("X - O / - X - / O - -");
        assert_eq!(board.to_string(), "X - O\n- X -\nO - -");
    }
}
