use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::ports::Storage;

/// One entity collection persisted as a single JSON document.
///
/// Every mutation is a load-mutate-save of the whole document. A missing
/// document loads as an empty collection; an unreadable or unparsable one
/// is logged and also loads as empty. Failed writes are logged and
/// dropped. Persistence trouble never reaches the caller.
pub struct Collection<S, T> {
    storage: S,
    document: &'static str,
    _record: PhantomData<T>,
}

impl<S: Storage, T: Serialize + DeserializeOwned> Collection<S, T> {
    pub fn new(storage: S, document: &'static str) -> Self {
        Self {
            storage,
            document,
            _record: PhantomData,
        }
    }

    pub fn load(&self) -> BTreeMap<String, T> {
        let bytes = match self.storage.read(self.document) {
            Ok(Some(bytes)) => bytes,
            Ok(None) => return BTreeMap::new(),
            Err(err) => {
                tracing::error!("failed to read {}: {}", self.document, err);
                return BTreeMap::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                tracing::error!("failed to parse {}: {}", self.document, err);
                BTreeMap::new()
            }
        }
    }

    pub fn save(&self, records: &BTreeMap<String, T>) {
        let bytes = match serde_json::to_vec_pretty(records) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::error!("failed to serialize {}: {}", self.document, err);
                return;
            }
        };

        if let Err(err) = self.storage.write(self.document, &bytes) {
            tracing::error!("failed to write {}: {}", self.document, err);
        }
    }
}
