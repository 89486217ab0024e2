pub mod config;
pub mod games;
pub mod logger;
pub mod persistence;

pub use games::tictactoe::{
    Board, Cell, GameError, MatchState, Outcome, Player, Position, RoundListener, RoundResult,
    TurnReport, compute_computer_move, new_match,
};
pub use persistence::{
    SnapshotError, SnapshotStore, Theme, deserialize_game, deserialize_theme, serialize_game,
    serialize_theme,
};
