//! Wishlist with guest persistence and hosted-backend sync.
//!
//! Guests keep their wishlist in the key-value store; signed-in
//! shoppers keep it in the hosted backend. Toggles apply locally first
//! and roll back if the backend refuses the mirror write.

use fern_commerce::catalog::{products_by_style, Product};
use fern_commerce::ids::{ProductId, UserId};
use fern_store::{KvStore, KvStoreExt};

use crate::BackendError;

/// Storage key for the guest wishlist.
pub const WISHLIST_KEY: &str = "fernwell-wishlist";

/// Hosted-backend operations on a signed-in shopper's wishlist rows.
pub trait WishlistBackend {
    /// All wishlisted product ids for the user.
    fn fetch(&self, user: &UserId) -> Result<Vec<ProductId>, BackendError>;

    /// Add one row.
    fn insert(&self, user: &UserId, product: &ProductId) -> Result<(), BackendError>;

    /// Remove one row.
    fn delete(&self, user: &UserId, product: &ProductId) -> Result<(), BackendError>;

    /// Add many rows, ignoring those already present.
    fn upsert_many(&self, user: &UserId, products: &[ProductId]) -> Result<(), BackendError>;
}

impl<B: WishlistBackend + ?Sized> WishlistBackend for &B {
    fn fetch(&self, user: &UserId) -> Result<Vec<ProductId>, BackendError> {
        (**self).fetch(user)
    }

    fn insert(&self, user: &UserId, product: &ProductId) -> Result<(), BackendError> {
        (**self).insert(user, product)
    }

    fn delete(&self, user: &UserId, product: &ProductId) -> Result<(), BackendError> {
        (**self).delete(user, product)
    }

    fn upsert_many(&self, user: &UserId, products: &[ProductId]) -> Result<(), BackendError> {
        (**self).upsert_many(user, products)
    }
}

/// Outcome of a wishlist toggle, for the UI to toast on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WishlistToggle {
    /// The product was added.
    Added,
    /// The product was removed.
    Removed,
    /// The backend refused the change; local state was rolled back.
    Failed,
}

/// The shopper's wishlist, guest or signed-in.
pub struct WishlistService<S: KvStore, B: WishlistBackend> {
    store: S,
    backend: B,
    user: Option<UserId>,
    items: Vec<ProductId>,
}

impl<S: KvStore, B: WishlistBackend> WishlistService<S, B> {
    /// Start a guest wishlist from the persisted list, if any.
    ///
    /// A corrupt blob loads as an empty wishlist.
    pub fn open(store: S, backend: B) -> Self {
        let items = store.get_json(WISHLIST_KEY).unwrap_or_default();
        Self {
            store,
            backend,
            user: None,
            items,
        }
    }

    /// Flip a product in or out of the wishlist.
    ///
    /// The flip is applied in memory first. For a signed-in shopper it
    /// is then mirrored to the backend; if the backend refuses, the
    /// exact pre-toggle snapshot is replayed (not a recomputed inverse)
    /// and `Failed` is returned. Guests persist to the key-value store.
    pub fn toggle(&mut self, product_id: ProductId) -> WishlistToggle {
        let before = self.items.clone();
        let removing = self.items.contains(&product_id);

        if removing {
            self.items.retain(|id| id != &product_id);
        } else {
            self.items.push(product_id.clone());
        }

        match &self.user {
            Some(user) => {
                let result = if removing {
                    self.backend.delete(user, &product_id)
                } else {
                    self.backend.insert(user, &product_id)
                };
                match result {
                    Ok(()) if removing => WishlistToggle::Removed,
                    Ok(()) => WishlistToggle::Added,
                    Err(err) => {
                        tracing::warn!(%err, product = %product_id, "wishlist update refused");
                        self.items = before;
                        WishlistToggle::Failed
                    }
                }
            }
            None => {
                self.store.set_json(WISHLIST_KEY, &self.items);
                if removing {
                    WishlistToggle::Removed
                } else {
                    WishlistToggle::Added
                }
            }
        }
    }

    /// Switch to a signed-in shopper.
    ///
    /// Guest items collected before signing in are pushed up first and
    /// the guest slot is cleared; then the backend's list becomes the
    /// view. Either step failing is logged and swallowed, keeping the
    /// local view usable.
    pub fn sign_in(&mut self, user: UserId) {
        if !self.items.is_empty() {
            match self.backend.upsert_many(&user, &self.items) {
                Ok(()) => self.store.remove(WISHLIST_KEY),
                Err(err) => tracing::warn!(%err, "guest wishlist sync failed"),
            }
        }
        match self.backend.fetch(&user) {
            Ok(items) => self.items = items,
            Err(err) => tracing::warn!(%err, "wishlist load failed, keeping local view"),
        }
        self.user = Some(user);
    }

    /// Switch back to guest mode, reloading the guest slot.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.items = self.store.get_json(WISHLIST_KEY).unwrap_or_default();
    }

    /// Whether a product is wishlisted.
    pub fn is_wishlisted(&self, product_id: &ProductId) -> bool {
        self.items.contains(product_id)
    }

    /// The wishlisted product ids, in insertion order.
    pub fn items(&self) -> &[ProductId] {
        &self.items
    }

    /// Products from the catalog sharing a style with anything
    /// wishlisted, for the recommendation rail.
    pub fn style_recommendations(&self, catalog: &[Product]) -> Vec<Product> {
        let mut styles: Vec<String> = Vec::new();
        for id in &self.items {
            if let Some(product) = catalog.iter().find(|p| &p.id == id) {
                for style in &product.styles {
                    if !styles.contains(style) {
                        styles.push(style.clone());
                    }
                }
            }
        }
        products_by_style(&styles, catalog)
    }
}
