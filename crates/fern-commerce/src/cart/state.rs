//! Cart state and the action reducer.

use serde::{Deserialize, Serialize};

use crate::catalog::Product;
use crate::ids::LineItemId;

/// A single cart line: a product/variant selection with a quantity.
///
/// The line carries a full product snapshot, so the cart renders and
/// prices without a catalog lookup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLineItem {
    /// Composite line identity (product + variant).
    pub id: LineItemId,
    /// Product snapshot at the time of adding.
    pub product: Product,
    /// Units of this selection.
    pub quantity: i64,
    /// Chosen variant label, if any.
    #[serde(default)]
    pub variant: Option<String>,
}

/// The full cart state: line items plus the drawer and promotion fields.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CartState {
    /// Lines in insertion order.
    pub items: Vec<CartLineItem>,
    /// Whether the cart drawer is open. Never persisted.
    pub is_open: bool,
    /// Applied promo code, empty when none.
    pub promo_code: String,
    /// Discount fraction in [0, 1) belonging to `promo_code`.
    pub promo_discount: f64,
}

/// State transitions understood by the cart reducer.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a product/variant selection, merging into an existing line.
    AddItem {
        product: Product,
        quantity: i64,
        variant: Option<String>,
    },
    /// Drop a line. Unknown ids are a no-op.
    RemoveItem { id: LineItemId },
    /// Set a line's quantity; zero or less removes the line.
    UpdateQuantity { id: LineItemId, quantity: i64 },
    /// Empty the cart and reset the promotion. The drawer is untouched.
    ClearCart,
    /// Flip the drawer.
    ToggleCart,
    /// Set the drawer.
    SetCartOpen(bool),
    /// Record an already-validated promotion.
    ApplyPromo { code: String, discount: f64 },
    /// Drop the promotion.
    RemovePromo,
    /// Wholesale state replacement; the restored drawer is forced closed.
    LoadCart(CartState),
}

impl CartState {
    /// Apply an action, producing the successor state.
    ///
    /// The reducer is total: every action yields a valid state, and no
    /// action performs I/O or fails.
    pub fn apply(mut self, action: CartAction) -> CartState {
        match action {
            CartAction::AddItem {
                product,
                quantity,
                variant,
            } => {
                let quantity = quantity.max(1);
                let id = LineItemId::for_selection(&product.id, variant.as_deref());
                match self.items.iter_mut().find(|item| item.id == id) {
                    Some(existing) => {
                        existing.quantity = existing.quantity.saturating_add(quantity);
                    }
                    None => self.items.push(CartLineItem {
                        id,
                        product,
                        quantity,
                        variant,
                    }),
                }
                self
            }
            CartAction::RemoveItem { id } => {
                self.items.retain(|item| item.id != id);
                self
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if quantity <= 0 {
                    self.items.retain(|item| item.id != id);
                } else if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
                    item.quantity = quantity;
                }
                self
            }
            CartAction::ClearCart => {
                self.items.clear();
                self.promo_code.clear();
                self.promo_discount = 0.0;
                self
            }
            CartAction::ToggleCart => {
                self.is_open = !self.is_open;
                self
            }
            CartAction::SetCartOpen(open) => {
                self.is_open = open;
                self
            }
            CartAction::ApplyPromo { code, discount } => {
                self.promo_code = code;
                self.promo_discount = discount;
                self
            }
            CartAction::RemovePromo => {
                self.promo_code.clear();
                self.promo_discount = 0.0;
                self
            }
            CartAction::LoadCart(state) => CartState {
                is_open: false,
                ..state
            },
        }
    }

    /// Whether any promotion is applied.
    pub fn has_promo(&self) -> bool {
        !self.promo_code.is_empty()
    }
}

/// The subset of cart state that survives between sessions.
///
/// The drawer flag deliberately never round-trips; every field defaults
/// so partial blobs restore leniently.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CartSnapshot {
    #[serde(default)]
    pub items: Vec<CartLineItem>,
    #[serde(default)]
    pub promo_code: String,
    #[serde(default)]
    pub promo_discount: f64,
}

impl CartSnapshot {
    /// Capture the persistable parts of a cart state.
    pub fn of(state: &CartState) -> Self {
        Self {
            items: state.items.clone(),
            promo_code: state.promo_code.clone(),
            promo_discount: state.promo_discount,
        }
    }

    /// Rebuild a cart state from the snapshot, drawer closed.
    pub fn into_state(self) -> CartState {
        CartState {
            items: self.items,
            is_open: false,
            promo_code: self.promo_code,
            promo_discount: self.promo_discount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn product(id: &str, price_minor: i64) -> Product {
        Product::new(id, format!("Product {id}"), Money::new(price_minor, Currency::INR))
    }

    fn add(state: CartState, id: &str, quantity: i64, variant: Option<&str>) -> CartState {
        state.apply(CartAction::AddItem {
            product: product(id, 1000),
            quantity,
            variant: variant.map(str::to_string),
        })
    }

    #[test]
    fn test_add_item_merges_same_selection() {
        let state = add(CartState::default(), "1", 1, None);
        let state = add(state, "1", 2, None);

        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].quantity, 3);
        assert_eq!(state.items[0].id.as_str(), "1-default");
    }

    #[test]
    fn test_add_item_distinct_variants_get_distinct_lines() {
        let state = add(CartState::default(), "1", 1, Some("250ml"));
        let state = add(state, "1", 1, Some("500ml"));

        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].id.as_str(), "1-250ml");
        assert_eq!(state.items[1].id.as_str(), "1-500ml");
    }

    #[test]
    fn test_add_item_clamps_non_positive_quantity() {
        let state = add(CartState::default(), "1", 0, None);
        assert_eq!(state.items[0].quantity, 1);

        let state = add(CartState::default(), "1", -4, None);
        assert_eq!(state.items[0].quantity, 1);
    }

    #[test]
    fn test_remove_item() {
        let state = add(CartState::default(), "1", 1, None);
        let state = state.apply(CartAction::RemoveItem {
            id: LineItemId::new("1-default"),
        });
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let state = add(CartState::default(), "1", 1, None);
        let state = state.apply(CartAction::RemoveItem {
            id: LineItemId::new("404-default"),
        });
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_update_quantity_sets() {
        let state = add(CartState::default(), "1", 1, None);
        let state = state.apply(CartAction::UpdateQuantity {
            id: LineItemId::new("1-default"),
            quantity: 5,
        });
        assert_eq!(state.items[0].quantity, 5);
    }

    #[test]
    fn test_update_quantity_zero_removes() {
        let state = add(CartState::default(), "1", 3, None);
        let state = state.apply(CartAction::UpdateQuantity {
            id: LineItemId::new("1-default"),
            quantity: 0,
        });
        assert!(state.items.is_empty());
    }

    #[test]
    fn test_clear_resets_promo_but_not_drawer() {
        let state = add(CartState::default(), "1", 1, None)
            .apply(CartAction::SetCartOpen(true))
            .apply(CartAction::ApplyPromo {
                code: "WELCOME10".to_string(),
                discount: 0.10,
            })
            .apply(CartAction::ClearCart);

        assert!(state.items.is_empty());
        assert_eq!(state.promo_code, "");
        assert_eq!(state.promo_discount, 0.0);
        assert!(state.is_open);
    }

    #[test]
    fn test_toggle_and_set_drawer() {
        let state = CartState::default().apply(CartAction::ToggleCart);
        assert!(state.is_open);
        let state = state.apply(CartAction::SetCartOpen(false));
        assert!(!state.is_open);
    }

    #[test]
    fn test_load_cart_forces_drawer_closed() {
        let mut prior = add(CartState::default(), "1", 2, None);
        prior.is_open = true;

        let state = CartState::default().apply(CartAction::LoadCart(prior));
        assert!(!state.is_open);
        assert_eq!(state.items.len(), 1);
    }

    #[test]
    fn test_remove_promo() {
        let state = CartState::default()
            .apply(CartAction::ApplyPromo {
                code: "SAVE20".to_string(),
                discount: 0.20,
            })
            .apply(CartAction::RemovePromo);

        assert!(!state.has_promo());
        assert_eq!(state.promo_discount, 0.0);
    }

    #[test]
    fn test_snapshot_excludes_drawer_flag() {
        let mut state = add(CartState::default(), "1", 1, None);
        state.is_open = true;

        let value = serde_json::to_value(CartSnapshot::of(&state)).unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("items"));
        assert!(object.contains_key("promo_code"));
        assert!(object.contains_key("promo_discount"));
        assert!(!object.contains_key("is_open"));
    }

    #[test]
    fn test_snapshot_partial_blob_defaults() {
        let snapshot: CartSnapshot = serde_json::from_str(r#"{"promo_code":"SAVE20"}"#).unwrap();
        let state = snapshot.into_state();

        assert!(state.items.is_empty());
        assert_eq!(state.promo_code, "SAVE20");
        assert_eq!(state.promo_discount, 0.0);
        assert!(!state.is_open);
    }

    #[test]
    fn test_snapshot_round_trip_closes_drawer() {
        let mut state = add(CartState::default(), "1", 2, Some("250ml"));
        state.is_open = true;
        state.promo_code = "WELCOME10".to_string();
        state.promo_discount = 0.10;

        let json = serde_json::to_string(&CartSnapshot::of(&state)).unwrap();
        let restored: CartSnapshot = serde_json::from_str(&json).unwrap();
        let restored = restored.into_state();

        assert!(!restored.is_open);
        assert_eq!(restored.items, state.items);
        assert_eq!(restored.promo_code, "WELCOME10");
    }
}
