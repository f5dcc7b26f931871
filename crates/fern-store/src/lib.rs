//! Best-effort key-value persistence for Fernwell storefront state.
//!
//! Models the browser's local storage contract: string keys, string
//! values, and no failure surface. Typed access goes through
//! [`KvStoreExt`], which layers JSON serialization on top of any
//! [`KvStore`] and treats corrupt data as absent.
//!
//! # Example
//!
//! ```
//! use fern_store::{KvStoreExt, MemoryStore};
//!
//! let store = MemoryStore::new();
//! store.set_json("recent", &vec!["turmeric-soap".to_string()]);
//!
//! let recent: Option<Vec<String>> = store.get_json("recent");
//! assert_eq!(recent, Some(vec!["turmeric-soap".to_string()]));
//! ```

mod json;
mod kv;

pub use json::KvStoreExt;
pub use kv::{KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{KvStore, KvStoreExt, MemoryStore};
}
