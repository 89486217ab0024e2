use super::board::Board;
use super::types::{Outcome, Player, Position, WinningLine};

const fn pos(row: usize, col: usize) -> Position {
    Position::new_unchecked(row, col)
}

// Rows, then columns, then the main diagonal and the anti-diagonal.
pub const LINES: [[Position; 3]; 8] = [
    [pos(0, 0), pos(0, 1), pos(0, 2)],
    [pos(1, 0), pos(1, 1), pos(1, 2)],
    [pos(2, 0), pos(2, 1), pos(2, 2)],
    [pos(0, 0), pos(1, 0), pos(2, 0)],
    [pos(0, 1), pos(1, 1), pos(2, 1)],
    [pos(0, 2), pos(1, 2), pos(2, 2)],
    [pos(0, 0), pos(1, 1), pos(2, 2)],
    [pos(0, 2), pos(1, 1), pos(2, 0)],
];

pub fn winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|line| line.player)
}

pub fn winning_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|&line| {
        let player = board.cell(line[0]).player()?;
        if line.iter().all(|&p| board.cell(p) == player.mark()) {
            Some(WinningLine::new(player, line))
        } else {
            None
        }
    })
}

pub fn has_won(board: &Board, player: Player) -> bool {
    LINES
        .iter()
        .any(|line| line.iter().all(|&p| board.cell(p) == player.mark()))
}

pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winner(board).is_none()
}

pub fn outcome(board: &Board) -> Outcome {
    if let Some(player) = winner(board) {
        return Outcome::Win(player);
    }
    if board.is_full() {
        return Outcome::Draw;
    }
    Outcome::Ongoing
}
