//! Side-by-side product comparison tray.

use fern_commerce::catalog::Product;
use fern_commerce::ids::ProductId;
use fern_store::{KvStore, KvStoreExt};

/// Storage key for the tray.
pub const COMPARISON_KEY: &str = "fernwell-comparison";

/// Most products the tray holds at once.
pub const COMPARISON_CAP: usize = 3;

/// Products queued for side-by-side comparison.
pub struct ComparisonTray<S: KvStore> {
    store: S,
    items: Vec<Product>,
}

impl<S: KvStore> ComparisonTray<S> {
    /// Load the persisted tray; corrupt or missing data starts empty.
    pub fn open(store: S) -> Self {
        let items = store.get_json(COMPARISON_KEY).unwrap_or_default();
        Self { store, items }
    }

    /// Add a product to the tray.
    ///
    /// Returns false, leaving the tray unchanged, when the product is
    /// already queued or the tray is full.
    pub fn add(&mut self, product: Product) -> bool {
        if self.contains(&product.id) || !self.can_add() {
            return false;
        }
        self.items.push(product);
        self.store.set_json(COMPARISON_KEY, &self.items);
        true
    }

    /// Remove a product from the tray.
    pub fn remove(&mut self, id: &ProductId) {
        self.items.retain(|p| &p.id != id);
        self.store.set_json(COMPARISON_KEY, &self.items);
    }

    /// Empty the tray.
    pub fn clear(&mut self) {
        self.items.clear();
        self.store.remove(COMPARISON_KEY);
    }

    /// Whether a product is queued.
    pub fn contains(&self, id: &ProductId) -> bool {
        self.items.iter().any(|p| &p.id == id)
    }

    /// Whether there is room for another product.
    pub fn can_add(&self) -> bool {
        self.items.len() < COMPARISON_CAP
    }

    /// The queued products, in the order added.
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
    fn test_add_until_full() {
        let store = MemoryStore::new();
        let mut tray = ComparisonTray::open(&store);

        assert!(tray.add(product("1")));
        assert!(tray.add(product("2")));
        assert!(tray.can_add());
        assert!(tray.add(product("3")));

        assert!(!tray.can_add());
        assert!(!tray.add(product("4")));
        assert_eq!(tray.items().len(), 3);
    }

    #[test]
    fn test_duplicate_is_refused() {
        let store = MemoryStore::new();
        let mut tray = ComparisonTray::open(&store);

        assert!(tray.add(product("1")));
        assert!(!tray.add(product("1")));
        assert_eq!(tray.items().len(), 1);
    }

    #[test]
    fn test_remove_frees_a_slot() {
        let store = MemoryStore::new();
        let mut tray = ComparisonTray::open(&store);
        tray.add(product("1"));
        tray.add(product("2"));
        tray.add(product("3"));

        tray.remove(&ProductId::new("2"));
        assert!(!tray.contains(&ProductId::new("2")));
        assert!(tray.can_add());
    }

    #[test]
    fn test_tray_survives_reopen() {
        let store = MemoryStore::new();
        let mut tray = ComparisonTray::open(&store);
        tray.add(product("1"));
        tray.add(product("2"));

        let reopened = ComparisonTray::open(&store);
        let ids: Vec<&str> = reopened.items().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn test_clear_removes_the_key() {
        let store = MemoryStore::new();
        let mut tray = ComparisonTray::open(&store);
        tray.add(product("1"));
        tray.clear();

        assert!(tray.items().is_empty());
        assert_eq!(store.get(COMPARISON_KEY), None);
    }
}
