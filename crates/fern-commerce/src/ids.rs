//! Newtype IDs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up different ID types,
//! e.g., passing a ProductId where a VariantId is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype ID structs.
macro_rules! define_id {
    ($name:ident) => {
        /// A unique identifier.
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from a string.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Get the ID as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define all ID types
define_id!(ProductId);
define_id!(VariantId);
define_id!(LineItemId);
define_id!(UserId);

impl LineItemId {
    /// Build the cart line identity for a product/variant selection.
    ///
    /// Two selections of the same product and variant always collapse to
    /// the same line; a missing variant uses the literal "default".
    pub fn for_selection(product_id: &ProductId, variant: Option<&str>) -> Self {
        Self(format!(
            "{}-{}",
            product_id.as_str(),
            variant.unwrap_or("default")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_creation() {
        let id = ProductId::new("prod-123");
        assert_eq!(id.as_str(), "prod-123");
    }

    #[test]
    fn test_id_from_string() {
        let id: ProductId = "prod-456".into();
        assert_eq!(id.as_str(), "prod-456");
    }

    #[test]
    fn test_id_display() {
        let id = ProductId::new("prod-789");
        assert_eq!(format!("{}", id), "prod-789");
    }

    #[test]
    fn test_line_item_id_default_variant() {
        let id = LineItemId::for_selection(&ProductId::new("7"), None);
        assert_eq!(id.as_str(), "7-default");
    }

    #[test]
    fn test_line_item_id_with_variant() {
        let id = LineItemId::for_selection(&ProductId::new("7"), Some("250ml"));
        assert_eq!(id.as_str(), "7-250ml");
    }

    #[test]
    fn test_line_item_id_collapses_same_selection() {
        let a = LineItemId::for_selection(&ProductId::new("7"), Some("250ml"));
        let b = LineItemId::for_selection(&ProductId::new("7"), Some("250ml"));
        assert_eq!(a, b);
    }
}
