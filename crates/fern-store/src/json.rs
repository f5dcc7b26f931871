//! Typed JSON access on top of [`KvStore`].

use serde::{de::DeserializeOwned, Serialize};

use crate::KvStore;

/// JSON serialization helpers available on every [`KvStore`].
pub trait KvStoreExt: KvStore {
    /// Decode the JSON blob stored under `key`.
    ///
    /// A missing key yields `None`. A present but undecodable blob also
    /// yields `None` after logging a warning, so callers always start
    /// from a usable default instead of failing.
    fn get_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, %err, "discarding undecodable stored value");
                None
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`.
    ///
    /// A value that cannot be encoded is skipped with a warning; the
    /// previous blob, if any, stays in place.
    fn set_json<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(raw) => self.set(key, &raw),
            Err(err) => {
                tracing::warn!(key, %err, "skipping write of unencodable value");
            }
        }
    }
}

impl<S: KvStore + ?Sized> KvStoreExt for S {}
