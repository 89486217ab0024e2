use super::board::Board;
use super::errors::GameError;
use super::types::{Player, Position};
use super::win_detector::has_won;

const WIN_SCORE: i32 = 1;
const LOSS_SCORE: i32 = -1;
const DRAW_SCORE: i32 = 0;

// Ties go to the earliest empty cell in row-major order.
pub fn compute_computer_move(board: &Board, bot_mark: Player) -> Result<Position, GameError> {
    let available_moves = board.available_moves();
    if available_moves.is_empty() {
        return Err(GameError::NoMovesAvailable);
    }

    let mut best_move = available_moves[0];
    let mut best_score = i32::MIN;

    for position in available_moves {
        let mut next = *board;
        next.place(position, bot_mark)?;

        let score = minimax(next, false, bot_mark);
        if score > best_score {
            best_score = score;
            best_move = position;
        }
    }

    Ok(best_move)
}

fn minimax(board: Board, is_maximizing: bool, bot_mark: Player) -> i32 {
    let opponent_mark = bot_mark.opponent();
    if has_won(&board, bot_mark) {
        return WIN_SCORE;
    }
    if has_won(&board, opponent_mark) {
        return LOSS_SCORE;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    let to_move = if is_maximizing { bot_mark } else { opponent_mark };
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };
    for position in board.available_moves() {
        let mut next = board;
        if next.place(position, to_move).is_err() {
            continue;
        }
        let score = minimax(next, !is_maximizing, bot_mark);
        best_score = if is_maximizing {
            best_score.max(score)
        } else {
            best_score.min(score)
        };
    }
    best_score
}
