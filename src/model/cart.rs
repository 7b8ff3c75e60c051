use super::product::{Product, ProductId};
use serde::{Deserialize, Deserializer, Serialize};

/// One line in the cart.
///
/// Name and price are snapshotted from the catalog when the line is created.
/// Quantity is at least 1, also for lines read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    #[serde(rename = "id")]
    pub product_id: ProductId,
    pub name: String,
    pub price: u64,
    #[serde(rename = "qty", deserialize_with = "at_least_one")]
    pub quantity: u32,
}

impl CartLine {
    /// Creates a line for `product` with a quantity of 1.
    pub fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.to_string(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Price × quantity, saturating at `u64::MAX`.
    pub fn subtotal(&self) -> u64 {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

fn at_least_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(u32::deserialize(deserializer)?.max(1))
}

/// Result of a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub lines: Vec<CartLine>,
    pub total: u64,
}

/// The cart as rendered: lines plus the derived total and badge count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CartView {
    pub lines: Vec<CartLine>,
    pub total: u64,
    pub count: u64,
}

impl CartView {
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            total: cart_total(&lines),
            count: cart_count(&lines),
            lines,
        }
    }
}

/// Sum of price × quantity over all lines.
pub fn cart_total(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(CartLine::subtotal)
        .fold(0, u64::saturating_add)
}

/// Number of units in the cart, as shown on the cart badge.
pub fn cart_count(lines: &[CartLine]) -> u64 {
    lines
        .iter()
        .map(|l| u64::from(l.quantity))
        .fold(0, u64::saturating_add)
}

/// Parses a quantity typed into the cart.
///
/// Accepts a leading integer and ignores trailing garbage (`"3 items"` is 3).
/// Anything that does not yield a quantity of at least 1 becomes 1.
pub fn parse_quantity(input: &str) -> u32 {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());

    match digits[..end].parse::<u32>() {
        Ok(n) if n >= 1 && !negative => n,
        _ => 1,
    }
}
