use std::path::PathBuf;

use crate::config::{ContentProvider, FileContentProvider};
use crate::games::tictactoe::MatchState;
use crate::log;

use super::error::SnapshotError;
use super::game_snapshot::{deserialize_game, serialize_game};
use super::theme::{Theme, deserialize_theme, serialize_theme};

pub const DEFAULT_GAME_STATE_FILE: &str = "gamestate.txt";
pub const DEFAULT_THEME_FILE: &str = "theme.txt";

pub struct SnapshotStore<TContentProvider: ContentProvider = FileContentProvider> {
    game: TContentProvider,
    theme: TContentProvider,
}

impl SnapshotStore<FileContentProvider> {
    pub fn from_files(game_path: impl Into<PathBuf>, theme_path: impl Into<PathBuf>) -> Self {
        Self::new(
            FileContentProvider::new(game_path),
            FileContentProvider::new(theme_path),
        )
    }
}

impl Default for SnapshotStore<FileContentProvider> {
    fn default() -> Self {
        Self::from_files(DEFAULT_GAME_STATE_FILE, DEFAULT_THEME_FILE)
    }
}

impl<TContentProvider: ContentProvider> SnapshotStore<TContentProvider> {
    pub fn new(game: TContentProvider, theme: TContentProvider) -> Self {
        Self { game, theme }
    }

    pub fn save_game(&self, state: &MatchState) -> Result<(), SnapshotError> {
        self.game.set_content(&serialize_game(state))?;
        log!("Game state saved");
        Ok(())
    }

    pub fn load_game(&self) -> Result<MatchState, SnapshotError> {
        let content = self.game.get_content()?.ok_or(SnapshotError::NoSavedGame)?;
        let state = deserialize_game(&content)?;
        log!("Game state loaded: {}", state.score_line());
        Ok(state)
    }

    pub fn save_theme(&self, theme: &Theme) -> Result<(), SnapshotError> {
        self.theme.set_content(&serialize_theme(theme))?;
        Ok(())
    }

    pub fn try_load_theme(&self) -> Result<Theme, SnapshotError> {
        let content = self.theme.get_content()?.ok_or_else(|| {
            SnapshotError::MissingPreferences("no theme preferences saved".to_string())
        })?;
        deserialize_theme(&content)
    }

    pub fn load_theme(&self) -> Theme {
        match self.try_load_theme() {
            Ok(theme) => theme,
            Err(e) => {
                log!("{}. Using default theme.", e);
                Theme::default()
            }
        }
    }
}
