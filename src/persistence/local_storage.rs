//! Browser LocalStorage store (WASM only)

use web_sys::Storage;

use super::{HIGH_SCORE_KEY, HighScoreStore, StoreError};

#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage() -> Result<Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| StoreError::Unavailable("localStorage not available".to_string()))
    }
}

impl HighScoreStore for LocalStorageStore {
    fn load_raw(&mut self) -> Result<Option<String>, StoreError> {
        Self::storage()?
            .get_item(HIGH_SCORE_KEY)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }

    fn save_raw(&mut self, value: &str) -> Result<(), StoreError> {
        Self::storage()?
            .set_item(HIGH_SCORE_KEY, value)
            .map_err(|e| StoreError::Unavailable(format!("{:?}", e)))
    }
}
