//! Checkout handoff to the hosted commerce API.
//!
//! The cart itself never leaves the client; checkout sends the line items to
//! the commerce backend, which answers with a hosted checkout URL the shopper
//! is redirected to. As with the catalog, transport stays with the caller.

use fern_commerce::cart::CartState;
use serde::{Deserialize, Serialize};

use crate::error::StorefrontError;
use crate::remote::GraphqlError;

/// Prefix for synthesizing a variant gid from a bare product id.
const VARIANT_GID_PREFIX: &str = "gid://shop/ProductVariant/";

/// GraphQL mutation that opens a checkout session for a set of lines.
pub const CHECKOUT_MUTATION: &str = r#"
  mutation CreateCart($lines: [CartLineInput!]!) {
    cartCreate(input: { lines: $lines }) {
      cart {
        id
        checkoutUrl
      }
      userErrors {
        field
        message
      }
    }
  }
"#;

/// One line of the checkout payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutLine {
    pub merchandise_id: String,
    pub quantity: i64,
}

/// Project the cart onto checkout lines.
///
/// Each line carries the product's stored default variant id; products that
/// arrived without one get a gid synthesized from their numeric id. An empty
/// cart is refused before any request is built.
pub fn checkout_lines(cart: &CartState) -> Result<Vec<CheckoutLine>, StorefrontError> {
    if cart.items.is_empty() {
        return Err(StorefrontError::EmptyCart);
    }

    let lines = cart
        .items
        .iter()
        .map(|item| {
            let merchandise_id = match &item.product.variant_id {
                Some(variant_id) => variant_id.as_str().to_owned(),
                None => format!("{VARIANT_GID_PREFIX}{}", item.product.id),
            };
            CheckoutLine {
                merchandise_id,
                quantity: item.quantity,
            }
        })
        .collect();
    tracing::debug!(lines = cart.items.len(), "prepared checkout lines");
    Ok(lines)
}

/// Build the JSON request body for the cart creation mutation.
pub fn checkout_request(lines: &[CheckoutLine]) -> String {
    serde_json::json!({
        "query": CHECKOUT_MUTATION,
        "variables": { "lines": lines },
    })
    .to_string()
}

#[derive(Debug, Deserialize)]
struct CheckoutResponse {
    data: Option<CheckoutData>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckoutData {
    cart_create: Option<CartCreatePayload>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartCreatePayload {
    cart: Option<RemoteCart>,
    #[serde(default)]
    user_errors: Vec<UserError>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteCart {
    checkout_url: String,
}

#[derive(Debug, Deserialize)]
struct UserError {
    message: String,
}

/// Extract the hosted checkout URL from a cart creation response.
///
/// Backend messages, whether GraphQL errors or mutation-level user errors,
/// come back verbatim in the error so the UI can show them.
pub fn parse_checkout_response(body: &str) -> Result<String, StorefrontError> {
    let response: CheckoutResponse =
        serde_json::from_str(body).map_err(|e| StorefrontError::Checkout(e.to_string()))?;

    if !response.errors.is_empty() {
        let joined = response
            .errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(StorefrontError::Checkout(joined));
    }

    let payload = response
        .data
        .and_then(|data| data.cart_create)
        .ok_or_else(|| StorefrontError::Checkout("response carried no cart".to_owned()))?;

    if !payload.user_errors.is_empty() {
        let joined = payload
            .user_errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return Err(StorefrontError::Checkout(joined));
    }

    let cart = payload
        .cart
        .ok_or_else(|| StorefrontError::Checkout("response carried no cart".to_owned()))?;
    if cart.checkout_url.is_empty() {
        return Err(StorefrontError::Checkout(
            "response carried no checkout URL".to_owned(),
        ));
    }

    tracing::debug!(url = %cart.checkout_url, "checkout session created");
    Ok(cart.checkout_url)
}
