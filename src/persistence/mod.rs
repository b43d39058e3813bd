//! High score persistence
//!
//! The only thing ever saved is one number, stored as a JSON value under a
//! single key. Backends move raw strings; parsing and the fallback-to-zero
//! rule live in the trait's provided methods so every backend behaves the
//! same when the stored value is missing or corrupt.

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;
pub use memory::MemoryStore;

use thiserror::Error;

/// Storage key used by key-value backends
pub const HIGH_SCORE_KEY: &str = "officeRushHighScore";

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend I/O failed
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Score could not be encoded
    #[error("failed to encode high score: {0}")]
    Encode(#[from] serde_json::Error),

    /// Backend is not reachable in this environment
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// A place the best score survives between launches
pub trait HighScoreStore {
    /// Raw stored value, `None` if nothing was ever saved
    fn load_raw(&mut self) -> Result<Option<String>, StoreError>;

    /// Replace the stored value
    fn save_raw(&mut self, value: &str) -> Result<(), StoreError>;

    /// Stored best score; missing, unreadable or corrupt values read as 0
    fn read_high_score(&mut self) -> f64 {
        match self.load_raw() {
            Ok(Some(raw)) => parse_high_score(&raw).unwrap_or_else(|| {
                log::warn!("Ignoring corrupt stored high score {:?}", raw);
                0.0
            }),
            Ok(None) => {
                log::info!("No stored high score, starting fresh");
                0.0
            }
            Err(err) => {
                log::warn!("Could not read high score: {}", err);
                0.0
            }
        }
    }

    /// Persist a new best score
    fn write_high_score(&mut self, score: f64) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&score)?;
        self.save_raw(&encoded)?;
        log::info!("High score saved ({:.0})", score);
        Ok(())
    }
}

/// Parse a stored score; `None` for anything that is not a finite,
/// non-negative number
pub fn parse_high_score(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let value = serde_json::from_str::<f64>(raw)
        .ok()
        .or_else(|| raw.parse::<f64>().ok())?;
    (value.is_finite() && value >= 0.0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_numbers() {
        assert_eq!(parse_high_score("204.5"), Some(204.5));
        assert_eq!(parse_high_score("  17\n"), Some(17.0));
        assert_eq!(parse_high_score("0"), Some(0.0));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_high_score(""), None);
        assert_eq!(parse_high_score("abc"), None);
        assert_eq!(parse_high_score("null"), None);
        assert_eq!(parse_high_score("NaN"), None);
        assert_eq!(parse_high_score("inf"), None);
        assert_eq!(parse_high_score("-5"), None);
        assert_eq!(parse_high_score("{\"score\": 3}"), None);
    }

    #[test]
    fn test_corrupt_value_reads_as_zero() {
        let mut store = MemoryStore::with_raw("not a number");
        assert_eq!(store.read_high_score(), 0.0);
    }

    #[test]
    fn test_round_trip_through_store() {
        let mut store = MemoryStore::default();
        assert_eq!(store.read_high_score(), 0.0);
        store.write_high_score(321.25).expect("memory write");
        assert_eq!(store.read_high_score(), 321.25);
        assert_eq!(store.writes(), 1);
    }
}
