use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

// `Ok(None)` means the document does not exist yet.
pub trait ContentProvider {
    fn get_content(&self) -> Result<Option<String>, std::io::Error>;
    fn set_content(&self, content: &str) -> Result<(), std::io::Error>;
}

pub struct FileContentProvider {
    file_path: PathBuf,
}

impl FileContentProvider {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }
}

impl ContentProvider for FileContentProvider {
    fn get_content(&self) -> Result<Option<String>, std::io::Error> {
        match std::fs::read_to_string(&self.file_path) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn set_content(&self, content: &str) -> Result<(), std::io::Error> {
        std::fs::write(&self.file_path, content)
    }
}

#[derive(Default)]
pub struct MemoryContentProvider {
    content: Mutex<Option<String>>,
}

impl MemoryContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: &str) -> Self {
        Self {
            content: Mutex::new(Some(content.to_string())),
        }
    }
}

impl ContentProvider for MemoryContentProvider {
    fn get_content(&self) -> Result<Option<String>, std::io::Error> {
        let content = self
            .content
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        Ok(content.clone())
    }

    fn set_content(&self, content: &str) -> Result<(), std::io::Error> {
        let mut current = self
            .content
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        *current = Some(content.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn get_temp_file_path() -> PathBuf {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_content_{}.txt", random_number));
        path
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let provider = FileContentProvider::new("this_file_does_not_exist.txt");
        let result = provider.get_content();
        assert!(matches!(result, Ok(None)));
    }

    #[test]
    fn test_file_write_then_read() {
        let path = get_temp_file_path();
        let provider = FileContentProvider::new(path.clone());
        provider.set_content("hello\n").unwrap();
        assert_eq!(provider.get_content().unwrap(), Some("hello\n".to_string()));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_memory_provider() {
        let provider = MemoryContentProvider::new();
        assert_eq!(provider.get_content().unwrap(), None);
        provider.set_content("abc").unwrap();
        assert_eq!(provider.get_content().unwrap(), Some("abc".to_string()));
        let seeded = MemoryContentProvider::with_content("x");
        assert_eq!(seeded.get_content().unwrap(), Some("x".to_string()));
    }
}
