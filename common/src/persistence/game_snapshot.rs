use crate::games::tictactoe::{BOARD_SIZE, Board, Cell, MatchState, Player};

use super::error::SnapshotError;

const SINGLE_PLAYER_FLAG: &str = "1";
const TWO_PLAYER_FLAG: &str = "0";

// Names, scores, current player, mode flag, then one `c,c,c,` line per row.
pub fn serialize_game(state: &MatchState) -> String {
    let flag = if state.is_single_player() {
        SINGLE_PLAYER_FLAG
    } else {
        TWO_PLAYER_FLAG
    };
    let mut text = format!(
        "{},{}\n{},{}\n{}\n{}\n",
        state.player_x_name(),
        state.player_o_name(),
        state.score_x(),
        state.score_o(),
        state.current_player().symbol(),
        flag
    );

    for row in state.board().rows() {
        for cell in row {
            text.push(cell.symbol());
            text.push(',');
        }
        text.push('\n');
    }
    text
}

pub fn deserialize_game(text: &str) -> Result<MatchState, SnapshotError> {
    let mut lines = text.lines();
    let mut next_line = |what: &str| {
        lines
            .next()
            .ok_or_else(|| corrupt(format!("missing {} line", what)))
    };

    let names = next_line("player names")?;
    let (player_x_name, player_o_name) = parse_pair(names, "player names")?;

    let scores = next_line("scores")?;
    let (score_x, score_o) = parse_pair(scores, "scores")?;
    let score_x = parse_score(score_x)?;
    let score_o = parse_score(score_o)?;

    let current = next_line("current player")?;
    let current_player = Player::from_symbol(current.trim())
        .ok_or_else(|| corrupt(format!("unknown player token '{}'", current.trim())))?;

    let flag = next_line("game mode")?;
    let single_player = match flag.trim() {
        SINGLE_PLAYER_FLAG => true,
        TWO_PLAYER_FLAG => false,
        other => return Err(corrupt(format!("unknown game mode flag '{}'", other))),
    };

    let mut rows = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
    for (index, row) in rows.iter_mut().enumerate() {
        let line = next_line(&format!("board row {}", index + 1))?;
        *row = parse_row(line, index)?;
    }

    let board = Board::from_rows(rows);
    let expected_player = board.player_to_move().ok_or_else(|| {
        corrupt(format!(
            "board has {} X and {} O marks",
            board.count(Cell::X),
            board.count(Cell::O)
        ))
    })?;
    if current_player != expected_player {
        return Err(corrupt(format!(
            "player {} cannot be on move with {} X and {} O marks",
            current_player,
            board.count(Cell::X),
            board.count(Cell::O)
        )));
    }

    let state = MatchState::restore(
        board,
        current_player,
        score_x,
        score_o,
        player_x_name,
        player_o_name,
        single_player,
    );
    if state.outcome().is_terminal() {
        return Err(corrupt("board is already finished".to_string()));
    }

    Ok(state)
}

fn corrupt(reason: String) -> SnapshotError {
    SnapshotError::CorruptSnapshot(reason)
}

fn parse_pair<'a>(line: &'a str, what: &str) -> Result<(&'a str, &'a str), SnapshotError> {
    let parts: Vec<&str> = line.split(',').collect();
    match parts.as_slice() {
        [first, second] => Ok((*first, *second)),
        _ => Err(corrupt(format!("expected two comma-separated {}, got '{}'", what, line))),
    }
}

fn parse_score(value: &str) -> Result<u32, SnapshotError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| corrupt(format!("invalid score '{}'", value.trim())))
}

fn parse_row(line: &str, index: usize) -> Result<[Cell; BOARD_SIZE], SnapshotError> {
    let line = line.trim();
    let line = line.strip_suffix(',').unwrap_or(line);
    let tokens: Vec<&str> = line.split(',').map(str::trim).collect();
    if tokens.len() != BOARD_SIZE {
        return Err(corrupt(format!(
            "board row {} has {} cells",
            index + 1,
            tokens.len()
        )));
    }

    let mut row = [Cell::Empty; BOARD_SIZE];
    for (cell, token) in row.iter_mut().zip(tokens) {
        *cell = Cell::from_symbol(token)
            .ok_or_else(|| corrupt(format!("unknown cell token '{}' in row {}", token, index + 1)))?;
    }
    Ok(row)
}
