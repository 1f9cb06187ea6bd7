//! Browser `localStorage` backend

use agui_core::storage::KeyValueStore;
use agui_core::{CoreError, CoreResult, ThemeStore};
use std::rc::Rc;
use web_sys::Storage;

/// [`KeyValueStore`] over `window.localStorage`
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> CoreResult<Storage> {
        web_sys::window()
            .ok_or_else(|| CoreError::storage("No window available"))?
            .local_storage()
            .map_err(|e| CoreError::storage(format!("localStorage access denied: {e:?}")))?
            .ok_or_else(|| CoreError::storage("localStorage is not available"))
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> CoreResult<Option<String>> {
        Self::storage()?
            .get_item(key)
            .map_err(|e| CoreError::storage(format!("Failed to read {key}: {e:?}")))
    }

    fn set(&self, key: &str, value: &str) -> CoreResult<()> {
        Self::storage()?
            .set_item(key, value)
            .map_err(|e| CoreError::storage(format!("Failed to write {key}: {e:?}")))
    }

    fn remove(&self, key: &str) -> CoreResult<()> {
        Self::storage()?
            .remove_item(key)
            .map_err(|e| CoreError::storage(format!("Failed to remove {key}: {e:?}")))
    }
}

pub fn local_store() -> Rc<dyn KeyValueStore> {
    Rc::new(LocalStorage)
}

pub fn theme_store() -> ThemeStore {
    ThemeStore::new(local_store())
}
