//! # Cart
//!
//! A cart is an ordered list of lines, each a catalog item with a positive
//! quantity. Carts are values: every operation borrows the current cart and
//! returns a new one, so a snapshot handed to a renderer stays valid while the
//! next one is built.
//!
//! Totals are never stored. [`Cart::totals`] derives them on every call:
//!
//! ```text
//! subtotal = Σ price × quantity
//! shipping = $99 (flat)
//! tax      = subtotal × 8%   (rounded half-up to the cent)
//! total    = subtotal + shipping + tax
//! ```

use crate::model::{image_or_placeholder, Money, Statue};
use serde::{Deserialize, Serialize};

/// Flat shipping charge per order.
pub const SHIPPING: Money = Money::from_cents(99_00);

/// Sales tax in basis points (8%).
pub const TAX_RATE_BP: u64 = 800;

/// The purchasable item a cart line wraps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub price: Money,
    #[serde(default)]
    pub image: Option<String>,
    pub material: String,
    pub size: String,
}

impl CartItem {
    pub fn image(&self) -> &str {
        image_or_placeholder(self.image.as_deref())
    }
}

impl From<&Statue> for CartItem {
    fn from(statue: &Statue) -> Self {
        Self {
            id: statue.id.to_string(),
            name: statue.title.clone(),
            artist: statue.artist.clone(),
            price: statue.price,
            image: statue.image.clone(),
            material: statue.material.clone(),
            size: statue.height.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: CartItem,
    pub quantity: u32,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.item.price.times(self.quantity)
    }
}

/// Derived order totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub subtotal: Money,
    pub shipping: Money,
    pub tax: Money,
    pub total: Money,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Builds a cart, dropping lines whose quantity is zero.
    pub fn new(lines: Vec<CartLine>) -> Self {
        Self {
            lines: lines.into_iter().filter(|l| l.quantity > 0).collect(),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Number of units across all lines.
    pub fn unit_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    pub fn line(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.item.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.line(id).is_some()
    }

    /// Sets a line's quantity.
    ///
    /// Zero removes the line; negative values clamp to 1. An unknown id leaves
    /// the cart unchanged.
    pub fn set_quantity(&self, id: &str, quantity: i64) -> Cart {
        if quantity == 0 {
            return self.remove_line(id);
        }
        let quantity = u32::try_from(quantity.max(1)).unwrap_or(u32::MAX);

        Cart {
            lines: self
                .lines
                .iter()
                .map(|l| {
                    if l.item.id == id {
                        CartLine {
                            item: l.item.clone(),
                            quantity,
                        }
                    } else {
                        l.clone()
                    }
                })
                .collect(),
        }
    }

    /// Adjusts a line's quantity by `delta` (the +/- buttons).
    ///
    /// Stepping a single unit down to zero removes the line.
    pub fn step(&self, id: &str, delta: i64) -> Cart {
        match self.line(id) {
            Some(line) => self.set_quantity(id, i64::from(line.quantity) + delta),
            None => self.clone(),
        }
    }

    /// Removes a line regardless of its quantity.
    pub fn remove_line(&self, id: &str) -> Cart {
        Cart {
            lines: self
                .lines
                .iter()
                .filter(|l| l.item.id != id)
                .cloned()
                .collect(),
        }
    }

    /// Adds units of an item, merging with an existing line of the same id.
    ///
    /// A zero quantity adds one unit.
    pub fn add(&self, item: CartItem, quantity: u32) -> Cart {
        let quantity = quantity.max(1);
        match self.line(&item.id) {
            Some(existing) => {
                let merged = i64::from(existing.quantity) + i64::from(quantity);
                self.set_quantity(&item.id, merged)
            }
            None => {
                let mut lines = self.lines.clone();
                lines.push(CartLine { item, quantity });
                Cart { lines }
            }
        }
    }

    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn totals(&self) -> Totals {
        let subtotal = self.subtotal();
        let tax = subtotal.percent_bp(TAX_RATE_BP);
        Totals {
            subtotal,
            shipping: SHIPPING,
            tax,
            total: subtotal + SHIPPING + tax,
        }
    }
}

/// Parses a free-typed quantity.
///
/// Reads an optional sign and the leading digits (`"3 pcs"` is 3, `"2.5"` is
/// 2). Anything that yields no number, or zero, becomes 1. Negative values are
/// passed through for [`Cart::set_quantity`] to clamp.
pub fn parse_quantity(input: &str) -> i64 {
    let trimmed = input.trim_start();
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1, &trimmed[1..]),
        Some(b'+') => (1, &trimmed[1..]),
        _ => (1, trimmed),
    };
    let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();

    match digits.parse::<i64>() {
        Ok(0) | Err(_) => 1,
        Ok(n) => sign * n,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::fixtures::cart_item;

    fn two_line_cart() -> Cart {
        Cart::new(vec![
            CartLine {
                item: cart_item("1", "Venus de Milo", 2499),
                quantity: 1,
            },
            CartLine {
                item: cart_item("2", "The Thinker", 2899),
                quantity: 1,
            },
        ])
    }

    #[test]
    fn maxed_quantities_on_every_line_do_not_overflow() {
        let cart = two_line_cart()
            .set_quantity("1", i64::MAX)
            .set_quantity("2", i64::from(u32::MAX));
        assert_eq!(cart.line("1").unwrap().quantity, u32::MAX);
        assert_eq!(cart.unit_count(), 2 * u64::from(u32::MAX));

        let totals = cart.totals();
        assert_eq!(
            totals.subtotal,
            Money::from_dollars(2499 + 2899).times(u32::MAX)
        );
        assert_eq!(totals.total, totals.subtotal + SHIPPING + totals.tax);
    }

    #[test]
    fn set_quantity_zero_removes_line() {
        let cart = two_line_cart();
        let updated = cart.set_quantity("1", 0);
        assert!(!updated.contains("1"));
        assert_eq!(updated.len(), 1);
        assert_eq!(updated.totals().subtotal, Money::from_dollars(2899));
    }

    #[test]
    fn set_quantity_replaces_and_keeps_order() {
        let cart = two_line_cart();
        let updated = cart.set_quantity("1", 3);
        assert_eq!(updated.lines()[0].item.id, "1");
        assert_eq!(updated.lines()[0].quantity, 3);
        assert_eq!(updated.lines()[1].quantity, 1);
    }

    #[test]
    fn negative_quantity_clamps_to_one() {
        let cart = two_line_cart().set_quantity("2", 4);
        let updated = cart.set_quantity("2", -5);
        assert_eq!(updated.line("2").unwrap().quantity, 1);
    }

    #[test]
    fn updates_leave_previous_snapshot_untouched() {
        let cart = two_line_cart();
        let _ = cart.set_quantity("1", 5).remove_line("2");
        assert_eq!(cart, two_line_cart());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let cart = two_line_cart();
        assert_eq!(cart.set_quantity("99", 4), cart);
        assert_eq!(cart.remove_line("99"), cart);
        assert_eq!(cart.step("99", 1), cart);
    }

    #[test]
    fn remove_line_ignores_quantity() {
        let cart = two_line_cart().set_quantity("1", 7);
        let updated = cart.remove_line("1");
        assert_eq!(updated.len(), 1);
        assert!(!updated.contains("1"));
    }

    #[test]
    fn step_down_from_one_removes() {
        let cart = two_line_cart();
        assert!(!cart.step("1", -1).contains("1"));
        assert_eq!(cart.step("1", 1).line("1").unwrap().quantity, 2);
    }

    #[test]
    fn add_merges_existing_lines() {
        let cart = two_line_cart();
        let updated = cart.add(cart_item("1", "Venus de Milo", 2499), 2);
        assert_eq!(updated.len(), 2);
        assert_eq!(updated.line("1").unwrap().quantity, 3);

        let updated = cart.add(cart_item("9", "Wild Horse", 3599), 0);
        assert_eq!(updated.len(), 3);
        assert_eq!(updated.lines()[2].quantity, 1);
    }

    #[test]
    fn totals_follow_the_formula() {
        let cart = two_line_cart();
        let totals = cart.totals();
        // S = 5398, C = 99, tax = 431.84
        assert_eq!(totals.subtotal, Money::from_dollars(5398));
        assert_eq!(totals.shipping, Money::from_dollars(99));
        assert_eq!(totals.tax, Money::from_cents(43_184));
        assert_eq!(totals.total, Money::from_cents(5398_00 + 99_00 + 431_84));
        assert_eq!(totals.total.exact(), "$5,928.84");
    }

    #[test]
    fn total_matches_float_formula_to_the_cent() {
        for quantity in 1..=5 {
            let cart = two_line_cart().set_quantity("2", quantity);
            let s = cart.subtotal().as_dollars();
            let expected = s + 99.0 + s * 0.08;
            let actual = cart.totals().total.as_dollars();
            assert!((expected - actual).abs() < 0.005, "{} vs {}", expected, actual);
        }
    }

    #[test]
    fn empty_cart_still_charges_shipping() {
        let cart = Cart::default();
        let totals = cart.totals();
        assert_eq!(totals.subtotal, Money::ZERO);
        assert_eq!(totals.total, SHIPPING);
    }

    #[test]
    fn new_drops_zero_quantity_lines() {
        let cart = Cart::new(vec![CartLine {
            item: cart_item("1", "Venus", 10),
            quantity: 0,
        }]);
        assert!(cart.is_empty());
    }

    #[test]
    fn parse_quantity_falls_back_to_one() {
        assert_eq!(parse_quantity("3"), 3);
        assert_eq!(parse_quantity(" 12 pcs"), 12);
        assert_eq!(parse_quantity("2.5"), 2);
        assert_eq!(parse_quantity(""), 1);
        assert_eq!(parse_quantity("abc"), 1);
        assert_eq!(parse_quantity("0"), 1);
        assert_eq!(parse_quantity("-4"), -4);
    }
}
