pub(crate) mod board;
mod bot_controller;
mod errors;
mod match_state;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::compute_computer_move;
pub use errors::GameError;
pub use match_state::{
    COMPUTER_MARK, DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME, MatchState, RoundListener,
    RoundResult, TurnReport, new_match, sanitize_player_name,
};
pub use types::{BOARD_SIZE, Cell, Outcome, Player, Position, WinningLine};
pub use win_detector::{LINES, has_won, is_draw, outcome, winner, winning_line};
