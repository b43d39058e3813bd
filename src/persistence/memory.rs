//! In-memory store for tests and sessions without storage

use super::{HighScoreStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    value: Option<String>,
    writes: usize,
}

impl MemoryStore {
    /// Store pre-seeded with a raw value (possibly corrupt)
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            value: Some(raw.into()),
            writes: 0,
        }
    }

    /// Number of successful saves
    pub fn writes(&self) -> usize {
        self.writes
    }

    pub fn raw(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl HighScoreStore for MemoryStore {
    fn load_raw(&mut self) -> Result<Option<String>, StoreError> {
        Ok(self.value.clone())
    }

    fn save_raw(&mut self, value: &str) -> Result<(), StoreError> {
        self.value = Some(value.to_owned());
        self.writes += 1;
        Ok(())
    }
}
