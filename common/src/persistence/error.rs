#[derive(Debug)]
pub enum SnapshotError {
    CorruptSnapshot(String),
    MissingPreferences(String),
    NoSavedGame,
    Io(std::io::Error),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::CorruptSnapshot(reason) => write!(f, "Corrupt game snapshot: {}", reason),
            SnapshotError::MissingPreferences(reason) => {
                write!(f, "Theme preferences unavailable: {}", reason)
            }
            SnapshotError::NoSavedGame => write!(f, "No saved game found."),
            SnapshotError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError::Io(e)
    }
}
