mod error;
mod game_snapshot;
mod snapshot_store;
mod theme;

pub use error::SnapshotError;
pub use game_snapshot::{deserialize_game, serialize_game};
pub use snapshot_store::{DEFAULT_GAME_STATE_FILE, DEFAULT_THEME_FILE, SnapshotStore};
pub use theme::{Rgb, Theme, ThemePreset, deserialize_theme, serialize_theme};
