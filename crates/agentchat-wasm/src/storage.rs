use agentchat_core::{SessionStorage, StorageError};
use wasm_bindgen::JsValue;

/// `window.sessionStorage`
pub struct BrowserSessionStorage {
    storage: web_sys::Storage,
}

impl BrowserSessionStorage {
    pub fn new() -> Result<Self, JsValue> {
        let storage = crate::window()?
            .session_storage()?
            .ok_or_else(|| JsValue::from_str("sessionStorage is not available"))?;
        Ok(Self { storage })
    }
}

fn backend_error(e: JsValue) -> StorageError {
    StorageError::Backend(format!("{:?}", e))
}

impl SessionStorage for BrowserSessionStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage.get_item(key).map_err(backend_error)
    }

    // Quota errors land here
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage.set_item(key, value).map_err(backend_error)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.storage.remove_item(key).map_err(backend_error)
    }
}
