//! The fixed promotional code table.

/// Recognized promo codes and their discount fractions. Case-sensitive.
pub const PROMO_CODES: [(&str, f64); 3] = [
    ("WELCOME10", 0.10),
    ("SAVE20", 0.20),
    ("NEWCUSTOMER", 0.15),
];

/// Look up a promo code, returning its discount fraction.
pub fn lookup_promo(code: &str) -> Option<f64> {
    PROMO_CODES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, discount)| *discount)
}
