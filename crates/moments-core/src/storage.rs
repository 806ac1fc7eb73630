//! Session-scoped key/value persistence seam.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::error::CoreError;

/// Key holding the serialized form data.
pub const FORM_DATA_KEY: &str = "momentsWriterFormData";
/// Key holding the current step number as decimal text.
pub const CURRENT_STEP_KEY: &str = "momentsWriterCurrentStep";

/// String-keyed storage that lives as long as one form session.
pub trait SessionStore: Send {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove_item(&mut self, key: &str) -> Result<(), CoreError>;
    fn clear(&mut self) -> Result<(), CoreError>;
}

/// In-memory store. Clones share the same entries, which lets a test keep a
/// handle while the state machine owns another.
#[derive(Debug, Clone, Default)]
pub struct MemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, CoreError> {
        self.entries
            .lock()
            .map_err(|_| CoreError::Storage("session store lock poisoned".into()))
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, CoreError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), CoreError> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<(), CoreError> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn clear(&mut self) -> Result<(), CoreError> {
        self.lock()?.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_entries() {
        let mut store = MemorySessionStore::new();
        let observer = store.clone();
        store.set_item(CURRENT_STEP_KEY, "3").unwrap();
        assert_eq!(observer.get_item(CURRENT_STEP_KEY).unwrap().as_deref(), Some("3"));
        store.remove_item(CURRENT_STEP_KEY).unwrap();
        assert!(observer.get_item(CURRENT_STEP_KEY).unwrap().is_none());
    }
}
