//! Cart session: the reducer bound to write-through persistence.

use fern_commerce::cart::{lookup_promo, CartAction, CartSnapshot, CartState, CartTotals};
use fern_commerce::catalog::Product;
use fern_commerce::ids::LineItemId;
use fern_store::{KvStore, KvStoreExt};

/// Storage key for the persisted cart snapshot.
pub const CART_KEY: &str = "fernwell-cart";

/// A live cart bound to a persistence slot.
///
/// Mutations go through the pure reducer; any action that can change
/// line items or promotion fields is written through to the store as a
/// [`CartSnapshot`]. Drawer visibility is session-only and never hits
/// the store.
pub struct CartSession<S: KvStore> {
    store: S,
    state: CartState,
}

impl<S: KvStore> CartSession<S> {
    /// Restore the persisted cart, or start empty.
    ///
    /// The drawer always starts closed. A corrupt snapshot is treated
    /// as no prior cart.
    pub fn open(store: S) -> Self {
        let state = match store.get_json::<CartSnapshot>(CART_KEY) {
            Some(snapshot) => {
                let state = snapshot.into_state();
                tracing::debug!(lines = state.items.len(), "restored persisted cart");
                state
            }
            None => CartState::default(),
        };
        Self { store, state }
    }

    /// The current cart state.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Run an action through the reducer, persisting the snapshot when
    /// the action can change items or promotion fields.
    pub fn dispatch(&mut self, action: CartAction) {
        let persist = !matches!(action, CartAction::ToggleCart | CartAction::SetCartOpen(_));
        self.state = std::mem::take(&mut self.state).apply(action);
        if persist {
            self.store.set_json(CART_KEY, &CartSnapshot::of(&self.state));
        }
    }

    /// Add a product/variant selection to the cart.
    pub fn add_item(&mut self, product: Product, quantity: i64, variant: Option<String>) {
        self.dispatch(CartAction::AddItem {
            product,
            quantity,
            variant,
        });
    }

    /// Remove a line from the cart.
    pub fn remove_item(&mut self, id: impl Into<LineItemId>) {
        self.dispatch(CartAction::RemoveItem { id: id.into() });
    }

    /// Set a line's quantity; zero or less removes the line.
    pub fn update_quantity(&mut self, id: impl Into<LineItemId>, quantity: i64) {
        self.dispatch(CartAction::UpdateQuantity {
            id: id.into(),
            quantity,
        });
    }

    /// Empty the cart and drop any promotion.
    pub fn clear(&mut self) {
        self.dispatch(CartAction::ClearCart);
    }

    /// Flip the drawer.
    pub fn toggle_drawer(&mut self) {
        self.dispatch(CartAction::ToggleCart);
    }

    /// Open or close the drawer.
    pub fn set_drawer_open(&mut self, open: bool) {
        self.dispatch(CartAction::SetCartOpen(open));
    }

    /// Validate a promo code against the fixed table and apply it.
    ///
    /// Returns false for an unknown code, leaving the state untouched.
    pub fn apply_promo_code(&mut self, code: &str) -> bool {
        match lookup_promo(code) {
            Some(discount) => {
                self.dispatch(CartAction::ApplyPromo {
                    code: code.to_string(),
                    discount,
                });
                true
            }
            None => false,
        }
    }

    /// Drop any applied promotion.
    pub fn remove_promo_code(&mut self) {
        self.dispatch(CartAction::RemovePromo);
    }

    /// Derived totals for the current state.
    pub fn totals(&self) -> CartTotals {
        self.state.totals()
    }
}
