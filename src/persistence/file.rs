//! File-backed store for native builds

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{HighScoreStore, StoreError};

/// Keeps the score in a small JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileStore {
    fn load_raw(&mut self) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write to a sibling temp file, then rename over the old one
    fn save_raw(&mut self, value: &str) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("office-rush-test-{}-{}", std::process::id(), name))
            .join("highscore.json")
    }

    #[test]
    fn test_missing_file_reads_zero() {
        let mut store = FileStore::new(temp_path("missing"));
        assert_eq!(store.read_high_score(), 0.0);
    }

    #[test]
    fn test_write_then_read() {
        let path = temp_path("roundtrip");
        let mut store = FileStore::new(&path);
        assert_eq!(store.path(), path.as_path());
        store.write_high_score(512.5).expect("write high score");
        assert!(!path.with_extension("tmp").exists());
        assert_eq!(FileStore::new(&path).read_high_score(), 512.5);
        let _ = fs::remove_dir_all(path.parent().expect("parent dir"));
    }

    #[test]
    fn test_corrupt_file_reads_zero() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().expect("parent dir")).expect("mkdir");
        fs::write(&path, "\u{0}garbage").expect("write garbage");
        assert_eq!(FileStore::new(&path).read_high_score(), 0.0);
        let _ = fs::remove_dir_all(path.parent().expect("parent dir"));
    }
}
