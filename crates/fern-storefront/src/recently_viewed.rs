//! Recently-viewed product trail.

use fern_commerce::catalog::Product;
use fern_store::{KvStore, KvStoreExt};

/// Storage key for the trail.
pub const RECENTLY_VIEWED_KEY: &str = "fernwell-recently-viewed";

/// Most products the trail remembers.
pub const RECENTLY_VIEWED_CAP: usize = 10;

/// The shopper's viewing trail, newest first.
pub struct RecentlyViewed<S: KvStore> {
    store: S,
    items: Vec<Product>,
}

impl<S: KvStore> RecentlyViewed<S> {
    /// Load the persisted trail; corrupt or missing data starts empty.
    pub fn open(store: S) -> Self {
        let items = store.get_json(RECENTLY_VIEWED_KEY).unwrap_or_default();
        Self { store, items }
    }

    /// Record a product view.
    ///
    /// A repeat view moves the product back to the front rather than
    /// duplicating it; the oldest entry falls off past the cap.
    pub fn record(&mut self, product: Product) {
        self.items.retain(|p| p.id != product.id);
        self.items.insert(0, product);
        self.items.truncate(RECENTLY_VIEWED_CAP);
        self.store.set_json(RECENTLY_VIEWED_KEY, &self.items);
    }

    /// Forget the whole trail.
    pub fn clear(&mut self) {
        self.items.clear();
        self.store.remove(RECENTLY_VIEWED_KEY);
    }

    /// The trail, newest first.
    pub fn items(&self) -> &[Product] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fern_commerce::money::{Currency, Money};
    use fern_store::MemoryStore;

    fn product(id: &str) -> Product {
        Product::new(
            id,
            format!("Product {id}"),
            Money::new(100_000, Currency::INR),
        )
    }

    #[test]
    fn test_record_keeps_newest_first() {
        let store = MemoryStore::new();
        let mut trail = RecentlyViewed::open(&store);
        trail.record(product("1"));
        trail.record(product("2"));

        let ids: Vec<&str> = trail.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_repeat_view_moves_to_front() {
        let store = MemoryStore::new();
        let mut trail = RecentlyViewed::open(&store);
        trail.record(product("1"));
        trail.record(product("2"));
        trail.record(product("1"));

        let ids: Vec<&str> = trail.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(trail.items().len(), 2);
    }

    #[test]
    fn test_trail_caps_at_ten() {
        let store = MemoryStore::new();
        let mut trail = RecentlyViewed::open(&store);
        for n in 0..12 {
            trail.record(product(&n.to_string()));
        }

        assert_eq!(trail.items().len(), RECENTLY_VIEWED_CAP);
        assert_eq!(trail.items()[0].id.as_str(), "11");
        assert_eq!(trail.items()[9].id.as_str(), "2");
    }

    #[test]
    fn test_trail_survives_reopen() {
        let store = MemoryStore::new();
        let mut trail = RecentlyViewed::open(&store);
        trail.record(product("1"));

        let reopened = RecentlyViewed::open(&store);
        assert_eq!(reopened.items().len(), 1);
    }

    #[test]
    fn test_clear_removes_the_key() {
        let store = MemoryStore::new();
        let mut trail = RecentlyViewed::open(&store);
        trail.record(product("1"));
        trail.clear();

        assert!(trail.items().is_empty());
        assert_eq!(store.get(RECENTLY_VIEWED_KEY), None);
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let store = MemoryStore::new();
        store.set(RECENTLY_VIEWED_KEY, "??");

        let trail = RecentlyViewed::open(&store);
        assert!(trail.items().is_empty());
    }
}
