use std::rc::Rc;

use crate::error::HistoryError;
use crate::record::{MessageRecord, Role};
use crate::storage::SessionStorage;

/// Ordered transcript persisted under a single session-storage key.
///
/// `load`, `append` and `clear` never fail from the caller's point of view:
/// storage and encoding errors are logged and the stored value is left as it
/// was. Use the `try_` variants to observe the error.
#[derive(Clone)]
pub struct HistoryStore {
    storage: Rc<dyn SessionStorage>,
    key: String,
}

impl HistoryStore {
    pub fn new(storage: Rc<dyn SessionStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// All persisted records in append order; empty when absent or unreadable
    pub fn load(&self) -> Vec<MessageRecord> {
        match self.try_load() {
            Ok(records) => records,
            Err(e) => {
                log::error!("Error loading chat history: {}", e);
                Vec::new()
            }
        }
    }

    /// Fails when the stored value is not a JSON array. Entries that do not
    /// decode as a record are skipped one by one.
    pub fn try_load(&self) -> Result<Vec<MessageRecord>, HistoryError> {
        let raw = match self.storage.get_item(&self.key)? {
            Some(raw) => raw,
            None => return Ok(Vec::new()),
        };

        let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)?;
        let records = entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(record) => Some(record),
                Err(e) => {
                    log::warn!("Skipping unreadable history entry {}: {}", index, e);
                    None
                }
            })
            .collect();
        Ok(records)
    }

    /// Append a record stamped now and write the whole sequence back
    pub fn append(&self, content: &str, role: Role) {
        if let Err(e) = self.try_append(content, role) {
            log::error!("Error saving chat history: {}", e);
        }
    }

    pub fn try_append(&self, content: &str, role: Role) -> Result<MessageRecord, HistoryError> {
        let mut records = self.try_load()?;
        let record = MessageRecord::new(content, role);
        records.push(record.clone());

        let encoded = serde_json::to_string(&records)?;
        self.storage.set_item(&self.key, &encoded)?;
        Ok(record)
    }

    /// Drop the key entirely
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove_item(&self.key) {
            log::error!("Error clearing chat history: {}", e);
        }
    }

    pub fn len(&self) -> usize {
        self.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
