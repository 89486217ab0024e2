use std::io::{self, BufRead, Write};

use common::config::ContentProvider;
use common::games::tictactoe::{MatchState, Outcome, RoundResult, TurnReport, winning_line};
use common::log;
use common::persistence::{SnapshotStore, Theme, ThemePreset};

const HELP: &str = "Commands:
  <row> <col>           place your mark (0-2 each)
  save | load           save or restore the game
  reset                 clear the board, keep the scores
  theme <classic|dark|light>
  font <name> <size>    change the board font
  show | help | quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move { row: usize, col: usize },
    Save,
    Load,
    Reset,
    Theme(ThemePreset),
    Font { name: String, size: String },
    Show,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [] => Err("Empty command".to_string()),
        ["save"] => Ok(Command::Save),
        ["load"] => Ok(Command::Load),
        ["reset"] | ["replay"] => Ok(Command::Reset),
        ["show"] => Ok(Command::Show),
        ["help"] | ["?"] => Ok(Command::Help),
        ["quit"] | ["exit"] => Ok(Command::Quit),
        ["theme", name @ ..] if !name.is_empty() => name.join(" ").parse().map(Command::Theme),
        ["font", rest @ .., size] if !rest.is_empty() => Ok(Command::Font {
            name: rest.join(" "),
            size: size.to_string(),
        }),
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| format!("Unknown command '{}'", line.trim()))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| format!("Unknown command '{}'", line.trim()))?;
            Ok(Command::Move { row, col })
        }
        _ => Err(format!("Unknown command '{}'", line.trim())),
    }
}

pub struct Shell<TContentProvider: ContentProvider> {
    state: MatchState,
    theme: Theme,
    store: SnapshotStore<TContentProvider>,
}

impl<TContentProvider: ContentProvider> Shell<TContentProvider> {
    pub fn new(state: MatchState, store: SnapshotStore<TContentProvider>) -> Self {
        let theme = store.load_theme();
        Self { state, theme, store }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn run(&mut self, input: impl BufRead, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "{}", HELP)?;
        self.render(output)?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match parse_command(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command, output)?,
                Err(e) => writeln!(output, "{}", e)?,
            }
        }
        Ok(())
    }

    pub fn execute(&mut self, command: Command, output: &mut impl Write) -> io::Result<()> {
        match command {
            Command::Move { row, col } => {
                let mut rounds: Vec<RoundResult> = Vec::new();
                match self.state.apply_move_at(row, col, &mut rounds) {
                    Ok(report) => {
                        self.report_turn(&report, output)?;
                        self.report_rounds(&rounds, output)?;
                        self.render(output)?;
                    }
                    Err(e) => writeln!(output, "{}", e)?,
                }
            }
            Command::Save => match self.store.save_game(&self.state) {
                Ok(()) => writeln!(output, "Game state saved successfully!")?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::Load => self.load(output)?,
            Command::Reset => {
                self.state.reset_round();
                self.render(output)?;
            }
            Command::Theme(preset) => {
                self.theme.apply_preset(preset);
                self.save_theme(output)?;
            }
            Command::Font { name, size } => match self.theme.customize_font(&name, &size) {
                Ok(()) => self.save_theme(output)?,
                Err(e) => writeln!(output, "{}", e)?,
            },
            Command::Show => self.render(output)?,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    pub fn load(&mut self, output: &mut impl Write) -> io::Result<()> {
        match self.store.load_game() {
            Ok(state) => {
                self.state = state;
                writeln!(output, "Game state loaded successfully!")?;
                self.resume_computer_turn(output)?;
                self.render(output)
            }
            Err(e) => {
                log!("Load failed: {}", e);
                writeln!(output, "No saved game found.")
            }
        }
    }

    fn resume_computer_turn(&mut self, output: &mut impl Write) -> io::Result<()> {
        let mut rounds: Vec<RoundResult> = Vec::new();
        match self.state.play_computer_turn(&mut rounds) {
            Ok(Some((position, _))) => {
                writeln!(output, "Computer plays {}", position)?;
                self.report_rounds(&rounds, output)
            }
            Ok(None) => Ok(()),
            Err(e) => writeln!(output, "{}", e),
        }
    }

    fn save_theme(&mut self, output: &mut impl Write) -> io::Result<()> {
        if let Err(e) = self.store.save_theme(&self.theme) {
            writeln!(output, "{}", e)?;
        }
        writeln!(output, "{}", describe_theme(&self.theme))
    }

    fn report_turn(&self, report: &TurnReport, output: &mut impl Write) -> io::Result<()> {
        if let Some(position) = report.computer_move {
            writeln!(output, "Computer plays {}", position)?;
        }
        Ok(())
    }

    fn report_rounds(&self, rounds: &[RoundResult], output: &mut impl Write) -> io::Result<()> {
        for round in rounds {
            writeln!(output, "{}", round.final_board)?;
            if let Some(line) = winning_line(&round.final_board) {
                writeln!(output, "Line {} to {}", line.start(), line.end())?;
            }
            match round.outcome {
                Outcome::Win(player) => writeln!(
                    output,
                    "Player {} ({}) wins!",
                    player,
                    self.state.player_name(player)
                )?,
                Outcome::Draw => writeln!(output, "It's a draw!")?,
                Outcome::Ongoing => {}
            }
        }
        Ok(())
    }

    fn render(&self, output: &mut impl Write) -> io::Result<()> {
        writeln!(output, "{}", self.state.board())?;
        writeln!(output, "{}", self.state.score_line())?;
        writeln!(
            output,
            "{} to move",
            self.state.player_name(self.state.current_player())
        )
    }
}

pub fn describe_theme(theme: &Theme) -> String {
    format!(
        "Theme: background #{:06X}, buttons #{:06X}, font {} {}",
        theme.background.packed(),
        theme.button.packed(),
        theme.font_name,
        theme.font_size
    )
}
