use common::config::{ConfigManager, FileContentProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::{DEFAULT_PLAYER_O_NAME, DEFAULT_PLAYER_X_NAME};
use common::persistence::{DEFAULT_GAME_STATE_FILE, DEFAULT_THEME_FILE};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "tictactoe_client_config.yaml";

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    pub players: PlayersConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.storage.validate()?;
        self.players.validate()?;
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct StorageConfig {
    pub game_state_file: String,
    pub theme_file: String,
}

impl Validate for StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.game_state_file.trim().is_empty() {
            return Err("game_state_file must not be empty".to_string());
        }
        if self.theme_file.trim().is_empty() {
            return Err("theme_file must not be empty".to_string());
        }
        if self.game_state_file == self.theme_file {
            return Err("game_state_file and theme_file must be different files".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct PlayersConfig {
    pub name_x: String,
    pub name_o: String,
    pub single_player: bool,
}

impl Validate for PlayersConfig {
    fn validate(&self) -> Result<(), String> {
        if self.name_x.contains(',') || self.name_o.contains(',') {
            return Err("player names must not contain commas".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig {
                game_state_file: DEFAULT_GAME_STATE_FILE.to_string(),
                theme_file: DEFAULT_THEME_FILE.to_string(),
            },
            players: PlayersConfig {
                name_x: DEFAULT_PLAYER_X_NAME.to_string(),
                name_o: DEFAULT_PLAYER_O_NAME.to_string(),
                single_player: true,
            },
        }
    }
}
