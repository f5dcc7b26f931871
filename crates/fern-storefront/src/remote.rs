//! Serde model of the hosted commerce API's catalog payload.
//!
//! The storefront talks to its commerce backend over GraphQL. This module
//! owns the request body for the products query and the mapping from the
//! remote node shape into catalog [`Product`]s. Transport is left to the
//! caller; everything here is pure string-in, value-out.

use fern_commerce::catalog::Product;
use fern_commerce::money::{Currency, Money};
use serde::Deserialize;

use crate::error::CatalogError;

/// Rating shown for remote products until live review data arrives.
pub const DEFAULT_RATING: f64 = 5.0;
/// Review count shown for remote products until live review data arrives.
pub const DEFAULT_REVIEW_COUNT: i64 = 2;

/// GraphQL query for the product catalog.
pub const CATALOG_QUERY: &str = r#"
  query GetProducts($first: Int!) {
    products(first: $first) {
      edges {
        node {
          id
          title
          description
          handle
          productType
          vendor
          tags
          priceRange {
            minVariantPrice {
              amount
              currencyCode
            }
          }
          images(first: 5) {
            edges {
              node {
                url
                altText
              }
            }
          }
          variants(first: 10) {
            edges {
              node {
                id
                title
                price {
                  amount
                  currencyCode
                }
                availableForSale
                selectedOptions {
                  name
                  value
                }
              }
            }
          }
          options {
            name
            values
          }
        }
      }
    }
  }
"#;

/// Build the JSON request body for a catalog fetch of up to `first` products.
pub fn catalog_request(first: u32) -> String {
    serde_json::json!({
        "query": CATALOG_QUERY,
        "variables": { "first": first },
    })
    .to_string()
}

/// A paginated edge list, the shape the GraphQL API gives every list field.
#[derive(Debug, Clone, Deserialize)]
pub struct Connection<T> {
    pub edges: Vec<Edge<T>>,
}

// Deriving Default would require T: Default; an empty edge list does not.
impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { edges: Vec::new() }
    }
}

/// One entry in a [`Connection`].
#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub node: T,
}

/// An error entry in a GraphQL response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphqlError {
    pub message: String,
}

/// A product node as the catalog query returns it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteProduct {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub handle: String,
    #[serde(default)]
    pub product_type: String,
    #[serde(default)]
    pub vendor: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub price_range: PriceRange,
    #[serde(default)]
    pub images: Connection<RemoteImage>,
    #[serde(default)]
    pub variants: Connection<RemoteVariant>,
    #[serde(default)]
    pub options: Vec<RemoteOption>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceRange {
    pub min_variant_price: RemotePrice,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePrice {
    /// Decimal amount as a string, e.g. `"519.00"`.
    pub amount: String,
    pub currency_code: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteImage {
    pub url: String,
    #[serde(default)]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteVariant {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub price: RemotePrice,
    #[serde(default)]
    pub available_for_sale: bool,
    #[serde(default)]
    pub selected_options: Vec<RemoteOptionChoice>,
}

/// A selected option on a variant, e.g. `Size: 100ml`.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteOptionChoice {
    pub name: String,
    pub value: String,
}

/// An option axis declared on a product.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteOption {
    pub name: String,
    pub values: Vec<String>,
}

impl RemoteProduct {
    /// Convert the remote node into a catalog [`Product`].
    ///
    /// The numeric id is the last segment of the GraphQL gid, falling back
    /// to the handle. Shelf and styles are derived from the product type and
    /// tags; products with no recognizable style tag are filed under
    /// "Effective". Ratings default until review aggregation overlays real
    /// figures.
    pub fn into_product(self) -> Product {
        let id = match self.id.rsplit('/').next() {
            Some(tail) if !tail.is_empty() => tail.to_owned(),
            _ => self.handle.clone(),
        };

        let min_price = &self.price_range.min_variant_price;
        let price = match min_price.amount.parse::<f64>() {
            Ok(amount) => Money::from_major(
                amount,
                Currency::from_code(&min_price.currency_code).unwrap_or_default(),
            ),
            Err(_) => Money::zero(Currency::default()),
        };

        let kind = self.product_type.to_lowercase();
        let room = if kind.contains("hair") {
            "Hair Care"
        } else if kind.contains("skin") {
            "Skincare"
        } else if kind.contains("wellness") {
            "Wellness"
        } else {
            "Bath & Body"
        };

        let mut styles: Vec<String> = Vec::new();
        for tag in &self.tags {
            let tag = tag.to_lowercase();
            if tag.contains("natural") || tag.contains("herbal") {
                push_unique(&mut styles, "Natural");
            }
            if tag.contains("ayurvedic") {
                push_unique(&mut styles, "Relaxing");
            }
            if tag.contains("anti-aging") || tag.contains("repair") {
                push_unique(&mut styles, "Clinical");
            }
        }
        if styles.is_empty() {
            styles.push("Effective".to_owned());
        }

        let category = if self.product_type.is_empty() {
            "Body Care".to_owned()
        } else {
            self.product_type.clone()
        };

        let image = self
            .images
            .edges
            .first()
            .map(|edge| edge.node.url.clone())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| "/placeholder.svg".to_owned());

        let in_stock = self
            .variants
            .edges
            .iter()
            .any(|edge| edge.node.available_for_sale);
        let variant_id = self.variants.edges.first().map(|edge| edge.node.id.clone());
        let is_new = self.tags.iter().any(|tag| tag == "new");
        let is_bestseller = self.tags.iter().any(|tag| tag == "bestseller");

        let mut product = Product::new(id, self.title, price)
            .with_image(image)
            .with_category(category)
            .with_room(room)
            .with_styles(styles)
            .with_description(self.description)
            .with_rating(DEFAULT_RATING, DEFAULT_REVIEW_COUNT);

        if let Some(variant_id) = variant_id {
            product = product.with_variant_id(variant_id);
        }
        if !in_stock {
            product = product.out_of_stock();
        }
        if is_new {
            product = product.new_arrival();
        }
        if is_bestseller {
            product = product.bestseller();
        }

        product
    }
}

fn push_unique(styles: &mut Vec<String>, style: &str) {
    if !styles.iter().any(|s| s == style) {
        styles.push(style.to_owned());
    }
}

#[derive(Debug, Deserialize)]
struct CatalogResponse {
    data: Option<CatalogData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
struct CatalogData {
    products: Option<Connection<RemoteProduct>>,
}

/// Parse a catalog query response into products.
///
/// GraphQL-level `errors` become [`CatalogError::Remote`]; a response with
/// no `data` is an empty catalog, not an error.
pub fn parse_catalog_response(body: &str) -> Result<Vec<Product>, CatalogError> {
    let response: CatalogResponse = serde_json::from_str(body)?;

    if !response.errors.is_empty() {
        let joined = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(CatalogError::Remote(joined));
    }

    let products = match response.data.and_then(|data| data.products) {
        Some(connection) => connection,
        None => return Ok(Vec::new()),
    };

    let catalog: Vec<Product> = products
        .edges
        .into_iter()
        .map(|edge| edge.node.into_product())
        .collect();
    tracing::debug!(count = catalog.len(), "parsed remote catalog");
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(overrides: serde_json::Value) -> RemoteProduct {
        let mut base = json!({
            "id": "gid://shop/Product/42",
            "title": "Neem Face Wash",
            "description": "Gentle daily cleanser.",
            "handle": "neem-face-wash",
            "productType": "Skincare",
            "vendor": "Fernwell",
            "tags": [],
            "priceRange": {
                "minVariantPrice": { "amount": "519.00", "currencyCode": "INR" }
            },
            "images": {
                "edges": [ { "node": { "url": "/images/neem.jpg", "altText": null } } ]
            },
            "variants": {
                "edges": [ { "node": {
                    "id": "gid://shop/ProductVariant/420",
                    "title": "100ml",
                    "price": { "amount": "519.00", "currencyCode": "INR" },
                    "availableForSale": true,
                    "selectedOptions": [ { "name": "Size", "value": "100ml" } ]
                } } ]
            },
            "options": [ { "name": "Size", "values": ["100ml"] } ]
        });
        if let (Some(map), Some(extra)) = (base.as_object_mut(), overrides.as_object()) {
            for (key, value) in extra {
                map.insert(key.clone(), value.clone());
            }
        }
        serde_json::from_value(base).unwrap()
    }

    #[test]
    fn test_catalog_request_embeds_limit() {
        let body: serde_json::Value =
            serde_json::from_str(&catalog_request(12)).unwrap();
        assert_eq!(body["variables"]["first"], 12);
        let query = body["query"].as_str().unwrap();
        assert!(query.contains("GetProducts"));
        assert!(query.contains("availableForSale"));
    }

    #[test]
    fn test_product_id_is_gid_tail() {
        let product = node(json!({})).into_product();
        assert_eq!(product.id.as_str(), "42");
    }

    #[test]
    fn test_empty_gid_falls_back_to_handle() {
        let product = node(json!({ "id": "gid://shop/Product/" })).into_product();
        assert_eq!(product.id.as_str(), "neem-face-wash");
    }

    #[test]
    fn test_price_parses_amount_and_currency() {
        let product = node(json!({})).into_product();
        assert_eq!(product.price, Money::new(51_900, Currency::INR));

        let product = node(json!({
            "priceRange": { "minVariantPrice": { "amount": "not a number", "currencyCode": "INR" } }
        }))
        .into_product();
        assert!(product.price.is_zero());
    }

    #[test]
    fn test_unknown_currency_defaults_to_inr() {
        let product = node(json!({
            "priceRange": { "minVariantPrice": { "amount": "10.00", "currencyCode": "XYZ" } }
        }))
        .into_product();
        assert_eq!(product.price.currency, Currency::INR);
    }

    #[test]
    fn test_room_derived_from_product_type() {
        let cases = [
            ("Hair Oils", "Hair Care"),
            ("Skincare Serums", "Skincare"),
            ("Wellness Kits", "Wellness"),
            ("Soap", "Bath & Body"),
            ("", "Bath & Body"),
        ];
        for (product_type, room) in cases {
            let product = node(json!({ "productType": product_type })).into_product();
            assert_eq!(product.room, room, "productType {product_type:?}");
        }
    }

    #[test]
    fn test_empty_product_type_gets_default_category() {
        let product = node(json!({ "productType": "" })).into_product();
        assert_eq!(product.category, "Body Care");
    }

    #[test]
    fn test_styles_from_tags_without_duplicates() {
        let product = node(json!({
            "tags": ["natural-oils", "herbal-blend", "ayurvedic"]
        }))
        .into_product();
        assert_eq!(product.styles, vec!["Natural", "Relaxing"]);
    }

    #[test]
    fn test_unstyled_product_is_effective() {
        let product = node(json!({ "tags": ["vegan"] })).into_product();
        assert_eq!(product.styles, vec!["Effective"]);
    }

    #[test]
    fn test_missing_image_uses_placeholder() {
        let product = node(json!({ "images": { "edges": [] } })).into_product();
        assert_eq!(product.image, "/placeholder.svg");

        let product = node(json!({
            "images": { "edges": [ { "node": { "url": "", "altText": null } } ] }
        }))
        .into_product();
        assert_eq!(product.image, "/placeholder.svg");
    }

    #[test]
    fn test_stock_and_marker_tags() {
        let product = node(json!({ "tags": ["new", "bestseller"] })).into_product();
        assert!(product.is_new);
        assert!(product.is_bestseller);

        // Marker tags match exactly, not by substring.
        let product = node(json!({ "tags": ["newest", "bestsellers"] })).into_product();
        assert!(!product.is_new);
        assert!(!product.is_bestseller);

        let product = node(json!({ "variants": { "edges": [ { "node": {
            "id": "gid://shop/ProductVariant/420",
            "availableForSale": false
        } } ] } }))
        .into_product();
        assert!(!product.in_stock);
    }

    #[test]
    fn test_first_variant_becomes_default() {
        let product = node(json!({})).into_product();
        assert_eq!(
            product.variant_id.as_ref().map(|v| v.as_str()),
            Some("gid://shop/ProductVariant/420")
        );
    }

    #[test]
    fn test_parse_response_returns_products() {
        let body = json!({
            "data": { "products": { "edges": [ { "node": {
                "id": "gid://shop/Product/7",
                "title": "Rose Mist",
                "handle": "rose-mist",
                "priceRange": {
                    "minVariantPrice": { "amount": "15.99", "currencyCode": "INR" }
                }
            } } ] } }
        })
        .to_string();

        let products = parse_catalog_response(&body).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id.as_str(), "7");
        assert_eq!(products[0].name, "Rose Mist");
        // Fields left out of the payload take their defaults.
        assert_eq!(products[0].image, "/placeholder.svg");
        assert!(!products[0].in_stock);
    }

    #[test]
    fn test_parse_response_surfaces_graphql_errors() {
        let body = json!({
            "errors": [
                { "message": "Throttled" },
                { "message": "Field deprecated" }
            ]
        })
        .to_string();

        let err = parse_catalog_response(&body).unwrap_err();
        assert!(matches!(err, CatalogError::Remote(_)));
        assert_eq!(
            err.to_string(),
            "Remote catalog error: Throttled, Field deprecated"
        );
    }

    #[test]
    fn test_parse_response_without_data_is_empty() {
        assert_eq!(parse_catalog_response("{}").unwrap(), Vec::new());
        assert_eq!(
            parse_catalog_response(r#"{"data": null}"#).unwrap(),
            Vec::new()
        );
        assert_eq!(
            parse_catalog_response(r#"{"data": {}}"#).unwrap(),
            Vec::new()
        );
    }

    #[test]
    fn test_parse_response_rejects_malformed_json() {
        let err = parse_catalog_response("not json").unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));
    }
}
