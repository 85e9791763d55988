//! Browser `localStorage` implementation of the history persistence port.
//!
//! SYSTEM CONTEXT
//! ==============
//! The workbench writes its whole snapshot log under one key after every
//! change. Outside the browser build there is no storage; loads report
//! nothing stored and writes succeed without effect.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use workbench::history::{HistoryStore, StoreError};

/// History store backed by `window.localStorage[key]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Result<web_sys::Storage, StoreError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StoreError::Unavailable)
}

impl HistoryStore for LocalStorageStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .get_item(&self.key)
                .map_err(|e| StoreError::Read(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(None)
        }
    }

    fn save(&self, raw: &str) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .set_item(&self.key, raw)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = raw;
            Ok(())
        }
    }

    fn clear(&self) -> Result<(), StoreError> {
        #[cfg(feature = "csr")]
        {
            local_storage()?
                .remove_item(&self.key)
                .map_err(|e| StoreError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "csr"))]
        {
            Ok(())
        }
    }
}
