//! Product catalog types.

use serde::{Deserialize, Serialize};

use crate::ids::{ProductId, VariantId};
use crate::money::Money;

/// A catalog product as the storefront presents it.
///
/// `room` is the department shelf the product sits on ("Bath & Body",
/// "Skincare", "Hair Care", "Wellness"); `styles` are the mood tags the
/// quiz and filters work over.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Default purchasable variant, used for checkout handoff.
    #[serde(default)]
    pub variant_id: Option<VariantId>,
    /// Display name.
    pub name: String,
    /// Current price.
    pub price: Money,
    /// Compare-at price when the product is marked down.
    #[serde(default)]
    pub original_price: Option<Money>,
    /// Primary image URL.
    pub image: String,
    /// Additional image URLs.
    #[serde(default)]
    pub images: Vec<String>,
    /// Merchandising category (e.g., "Skincare").
    pub category: String,
    /// Department shelf.
    pub room: String,
    /// Mood/style tags.
    pub styles: Vec<String>,
    /// Long description.
    pub description: String,
    /// Average review rating.
    pub rating: f64,
    /// Number of reviews behind the rating.
    pub review_count: i64,
    /// Whether the product can currently be purchased.
    pub in_stock: bool,
    /// New-arrival marker.
    #[serde(default)]
    pub is_new: bool,
    /// Bestseller marker.
    #[serde(default)]
    pub is_bestseller: bool,
}

impl Product {
    /// Create a product with the given identity and price.
    ///
    /// Everything else starts empty or defaulted; fill in with the
    /// `with_*` builders.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            variant_id: None,
            name: name.into(),
            price,
            original_price: None,
            image: String::new(),
            images: Vec::new(),
            category: String::new(),
            room: String::new(),
            styles: Vec::new(),
            description: String::new(),
            rating: 0.0,
            review_count: 0,
            in_stock: true,
            is_new: false,
            is_bestseller: false,
        }
    }

    /// Set the default purchasable variant.
    pub fn with_variant_id(mut self, variant_id: impl Into<VariantId>) -> Self {
        self.variant_id = Some(variant_id.into());
        self
    }

    /// Set the compare-at price.
    pub fn with_original_price(mut self, original_price: Money) -> Self {
        self.original_price = Some(original_price);
        self
    }

    /// Set the primary image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Set the merchandising category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Set the department shelf.
    pub fn with_room(mut self, room: impl Into<String>) -> Self {
        self.room = room.into();
        self
    }

    /// Set the style tags.
    pub fn with_styles<I, S>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    /// Set the long description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the review aggregate.
    pub fn with_rating(mut self, rating: f64, review_count: i64) -> Self {
        self.rating = rating;
        self.review_count = review_count;
        self
    }

    /// Mark the product out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// Mark the product as a new arrival.
    pub fn new_arrival(mut self) -> Self {
        self.is_new = true;
        self
    }

    /// Mark the product as a bestseller.
    pub fn bestseller(mut self) -> Self {
        self.is_bestseller = true;
        self
    }

    /// Check whether the product is marked down from a compare-at price.
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|original| original.amount_minor > self.price.amount_minor)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale, rounded to a whole percent.
    pub fn discount_percentage(&self) -> Option<u32> {
        self.original_price.and_then(|original| {
            if original.amount_minor > self.price.amount_minor {
                let savings = original.amount_minor - self.price.amount_minor;
                let percent = (savings as f64 / original.amount_minor as f64) * 100.0;
                Some(percent.round() as u32)
            } else {
                None
            }
        })
    }
}

/// Products whose style tags intersect the given styles, order preserved.
pub fn products_by_style(styles: &[String], products: &[Product]) -> Vec<Product> {
    products
        .iter()
        .filter(|product| product.styles.iter().any(|style| styles.contains(style)))
        .cloned()
        .collect()
}
