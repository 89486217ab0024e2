use crate::log;

use super::board::Board;
use super::bot_controller::compute_computer_move;
use super::errors::GameError;
use super::types::{Outcome, Player, Position};
use super::win_detector::outcome;

pub const DEFAULT_PLAYER_X_NAME: &str = "Player X";
pub const DEFAULT_PLAYER_O_NAME: &str = "Player O";
pub const COMPUTER_MARK: Player = Player::O;

// Emitted after scores are updated and before the board is cleared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    pub outcome: Outcome,
    pub final_board: Board,
    pub score_x: u32,
    pub score_o: u32,
}

pub trait RoundListener {
    fn round_finished(&mut self, result: &RoundResult);
}

impl RoundListener for () {
    fn round_finished(&mut self, _result: &RoundResult) {}
}

impl RoundListener for Vec<RoundResult> {
    fn round_finished(&mut self, result: &RoundResult) {
        self.push(result.clone());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player_move: Position,
    pub outcome: Outcome,
    pub computer_move: Option<Position>,
    pub computer_outcome: Option<Outcome>,
}

impl TurnReport {
    pub fn final_outcome(&self) -> Outcome {
        self.computer_outcome.unwrap_or(self.outcome)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchState {
    board: Board,
    current_player: Player,
    score_x: u32,
    score_o: u32,
    player_x_name: String,
    player_o_name: String,
    single_player: bool,
}

pub fn new_match(name_x: &str, name_o: &str, single_player: bool) -> MatchState {
    MatchState::new(name_x, name_o, single_player)
}

pub fn sanitize_player_name(name: &str, fallback: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| *c != ',' && *c != '\n' && *c != '\r')
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        fallback.to_string()
    } else {
        cleaned.to_string()
    }
}

impl MatchState {
    pub fn new(name_x: &str, name_o: &str, single_player: bool) -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            score_x: 0,
            score_o: 0,
            player_x_name: sanitize_player_name(name_x, DEFAULT_PLAYER_X_NAME),
            player_o_name: sanitize_player_name(name_o, DEFAULT_PLAYER_O_NAME),
            single_player,
        }
    }

    pub(crate) fn restore(
        board: Board,
        current_player: Player,
        score_x: u32,
        score_o: u32,
        player_x_name: &str,
        player_o_name: &str,
        single_player: bool,
    ) -> Self {
        Self {
            board,
            current_player,
            score_x,
            score_o,
            player_x_name: sanitize_player_name(player_x_name, DEFAULT_PLAYER_X_NAME),
            player_o_name: sanitize_player_name(player_o_name, DEFAULT_PLAYER_O_NAME),
            single_player,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn score_x(&self) -> u32 {
        self.score_x
    }

    pub fn score_o(&self) -> u32 {
        self.score_o
    }

    pub fn score(&self, player: Player) -> u32 {
        match player {
            Player::X => self.score_x,
            Player::O => self.score_o,
        }
    }

    pub fn player_x_name(&self) -> &str {
        &self.player_x_name
    }

    pub fn player_o_name(&self) -> &str {
        &self.player_o_name
    }

    pub fn player_name(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }

    pub fn is_single_player(&self) -> bool {
        self.single_player
    }

    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    pub fn is_computer_turn(&self) -> bool {
        self.single_player && self.current_player == COMPUTER_MARK
    }

    pub fn score_line(&self) -> String {
        format!(
            "{}: {} | {}: {}",
            self.player_x_name, self.score_x, self.player_o_name, self.score_o
        )
    }

    pub fn apply_move_at(
        &mut self,
        row: usize,
        col: usize,
        listener: &mut impl RoundListener,
    ) -> Result<TurnReport, GameError> {
        self.apply_move(Position::new(row, col)?, listener)
    }

    pub fn apply_move(
        &mut self,
        position: Position,
        listener: &mut impl RoundListener,
    ) -> Result<TurnReport, GameError> {
        let outcome = self.place_and_resolve(position, listener)?;

        let mut report = TurnReport {
            player_move: position,
            outcome,
            computer_move: None,
            computer_outcome: None,
        };

        if !outcome.is_terminal() && self.is_computer_turn() {
            let (computer_move, computer_outcome) = self.computer_turn(listener)?;
            report.computer_move = Some(computer_move);
            report.computer_outcome = Some(computer_outcome);
        }

        Ok(report)
    }

    pub fn play_computer_turn(
        &mut self,
        listener: &mut impl RoundListener,
    ) -> Result<Option<(Position, Outcome)>, GameError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        self.computer_turn(listener).map(Some)
    }

    fn computer_turn(
        &mut self,
        listener: &mut impl RoundListener,
    ) -> Result<(Position, Outcome), GameError> {
        let position = compute_computer_move(&self.board, self.current_player)?;
        log!("Computer ({}) plays {}", self.current_player, position);
        let outcome = self.place_and_resolve(position, listener)?;
        Ok((position, outcome))
    }

    fn place_and_resolve(
        &mut self,
        position: Position,
        listener: &mut impl RoundListener,
    ) -> Result<Outcome, GameError> {
        self.board.place(position, self.current_player)?;

        let outcome = outcome(&self.board);
        match outcome {
            Outcome::Win(player) => {
                match player {
                    Player::X => self.score_x = self.score_x.saturating_add(1),
                    Player::O => self.score_o = self.score_o.saturating_add(1),
                }
                self.finish_round(outcome, listener);
            }
            Outcome::Draw => self.finish_round(outcome, listener),
            Outcome::Ongoing => self.switch_player(),
        }

        Ok(outcome)
    }

    fn finish_round(&mut self, outcome: Outcome, listener: &mut impl RoundListener) {
        log!("Round finished: {}. {}", outcome, self.score_line());
        let result = RoundResult {
            outcome,
            final_board: self.board,
            score_x: self.score_x,
            score_o: self.score_o,
        };
        listener.round_finished(&result);
        self.reset_round();
    }

    pub fn reset_round(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::board_from_str;
    use crate::games::tictactoe::types::Cell;

    fn state_with_board(layout: &str, current_player: Player, single_player: bool) -> MatchState {
        MatchState::restore(
            board_from_str(layout),
            current_player,
            0,
            0,
            "Ann",
            "Bob",
            single_player,
        )
    }

    fn at(row: usize, col: usize) -> Position {
        Position::new(row, col).unwrap()
    }

    #[test]
    fn test_new_match_defaults() {
        let state = new_match("  ", "", true);
        assert_eq!(state.player_x_name(), DEFAULT_PLAYER_X_NAME);
        assert_eq!(state.player_o_name(), DEFAULT_PLAYER_O_NAME);
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.score_x(), 0);
        assert_eq!(state.score_o(), 0);
        assert!(state.board().is_empty());
        assert!(state.is_single_player());
    }

    #[test]
    fn test_names_are_sanitized() {
        let state = new_match(" Ann,Lee ", "Bo\nb", false);
        assert_eq!(state.player_x_name(), "AnnLee");
        assert_eq!(state.player_o_name(), "Bob");
        assert_eq!(state.score_line(), "AnnLee: 0 | Bob: 0");
    }

    #[test]
    fn test_two_player_move_switches_turn() {
        let mut state = new_match("Ann", "Bob", false);
        let report = state.apply_move(at(0, 0), &mut ()).unwrap();
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(report.computer_move, None);
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(state.board().cell(at(0, 0)), Cell::X);
    }

    #[test]
    fn test_occupied_cell_leaves_state_unchanged() {
        let mut state = new_match("Ann", "Bob", false);
        state.apply_move(at(1, 1), &mut ()).unwrap();
        let before = state.clone();
        let mut events: Vec<RoundResult> = Vec::new();
        let result = state.apply_move(at(1, 1), &mut events);
        assert_eq!(result, Err(GameError::IllegalMove { row: 1, col: 1 }));
        assert_eq!(state, before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_out_of_range_leaves_state_unchanged() {
        let mut state = new_match("Ann", "Bob", false);
        let before = state.clone();
        let result = state.apply_move_at(0, 3, &mut ());
        assert_eq!(result, Err(GameError::OutOfRange { row: 0, col: 3 }));
        assert_eq!(state, before);
    }

    #[test]
    fn test_completing_top_row_wins_and_resets() {
        let mut state = state_with_board("X X - / O O - / - - -", Player::X, false);
        let mut events: Vec<RoundResult> = Vec::new();
        let report = state.apply_move(at(0, 2), &mut events).unwrap();

        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert_eq!(state.score_x(), 1);
        assert_eq!(state.score_o(), 0);
        assert!(state.board().is_empty());
        assert_eq!(state.current_player(), Player::X);

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].outcome, Outcome::Win(Player::X));
        assert_eq!(events[0].final_board, board_from_str("X X X / O O - / - - -"));
        assert_eq!(events[0].score_x, 1);
    }

    #[test]
    fn test_win_at_max_score_does_not_overflow() {
        let mut state = state_with_board("O O - / X X - / - - -", Player::X, true);
        state.score_o = u32::MAX;
        let mut events: Vec<RoundResult> = Vec::new();
        let report = state.apply_move(at(2, 2), &mut events).unwrap();

        assert_eq!(report.final_outcome(), Outcome::Win(Player::O));
        assert_eq!(state.score_o(), u32::MAX);
        assert_eq!(events[0].score_o, u32::MAX);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_filling_board_is_draw_and_resets() {
        let mut state = state_with_board("X O X / X O O / O X -", Player::X, false);
        state.score_x = 2;
        state.score_o = 3;
        let mut events: Vec<RoundResult> = Vec::new();
        let report = state.apply_move(at(2, 2), &mut events).unwrap();

        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(state.score_x(), 2);
        assert_eq!(state.score_o(), 3);
        assert!(state.board().is_empty());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].outcome, Outcome::Draw);
    }

    #[test]
    fn test_single_player_computer_answers_center_with_corner() {
        let mut state = new_match("Ann", "", true);
        let report = state.apply_move(at(1, 1), &mut ()).unwrap();

        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(report.computer_move, Some(at(0, 0)));
        assert_eq!(report.computer_outcome, Some(Outcome::Ongoing));
        assert_eq!(report.final_outcome(), Outcome::Ongoing);
        assert_eq!(state.board().cell(at(0, 0)), Cell::O);
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_computer_win_is_scored() {
        let mut state = state_with_board("O O - / X X - / - - -", Player::X, true);
        let mut events: Vec<RoundResult> = Vec::new();
        let report = state.apply_move(at(2, 2), &mut events).unwrap();

        assert_eq!(report.computer_move, Some(at(0, 2)));
        assert_eq!(report.final_outcome(), Outcome::Win(Player::O));
        assert_eq!(state.score_o(), 1);
        assert!(state.board().is_empty());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn test_no_computer_move_after_round_ends() {
        let mut state = state_with_board("X X - / O O - / - - -", Player::X, true);
        let report = state.apply_move(at(0, 2), &mut ()).unwrap();
        assert_eq!(report.outcome, Outcome::Win(Player::X));
        assert_eq!(report.computer_move, None);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_play_computer_turn_after_restore() {
        let mut state = state_with_board("- - - / - X - / - - -", Player::O, true);
        let played = state.play_computer_turn(&mut ()).unwrap();
        assert_eq!(played, Some((at(0, 0), Outcome::Ongoing)));
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.play_computer_turn(&mut ()).unwrap(), None);
    }

    #[test]
    fn test_reset_round_keeps_scores() {
        let mut state = state_with_board("X O - / - - - / - - -", Player::X, false);
        state.score_o = 4;
        state.reset_round();
        assert!(state.board().is_empty());
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.score_o(), 4);
    }

    #[test]
    fn test_switch_player_toggles() {
        let mut state = new_match("Ann", "Bob", false);
        state.switch_player();
        assert_eq!(state.current_player(), Player::O);
        state.switch_player();
        assert_eq!(state.current_player(), Player::X);
    }
}
