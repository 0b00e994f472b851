use crate::cart::{Cart, CartItem, CartLine, Totals};
use crate::catalog::Catalog;
use crate::commands::{CmdMessage, CmdResult, Page};
use crate::error::{Result, StoreError};
use serde::Serialize;

/// One edit to the cart, applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOp {
    /// Add units of a gallery statue.
    Add { statue_id: u32, quantity: u32 },
    /// Set a line's quantity; 0 removes it.
    Set { line_id: String, quantity: i64 },
    /// The +/- buttons.
    Step { line_id: String, delta: i64 },
    Remove { line_id: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct CartPage {
    pub lines: Vec<CartLine>,
    pub units: u64,
    pub totals: Totals,
}

impl From<&Cart> for CartPage {
    fn from(cart: &Cart) -> Self {
        Self {
            lines: cart.lines().to_vec(),
            units: cart.unit_count(),
            totals: cart.totals(),
        }
    }
}

pub fn run(catalog: &Catalog, ops: &[CartOp]) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let mut cart = Cart::new(catalog.cart_seed().to_vec());

    for op in ops {
        cart = apply(catalog, &cart, op, &mut result)?;
    }

    if cart.is_empty() {
        result.add_message(CmdMessage::info("Your cart is empty."));
    }

    Ok(result.with_page(Page::Cart(CartPage::from(&cart))))
}

fn apply(catalog: &Catalog, cart: &Cart, op: &CartOp, result: &mut CmdResult) -> Result<Cart> {
    match op {
        CartOp::Add {
            statue_id,
            quantity,
        } => match catalog.statue(*statue_id) {
            Ok(statue) => {
                let next = cart.add(CartItem::from(statue), *quantity);
                result.add_message(CmdMessage::success(format!(
                    "Added {} x{} to cart",
                    statue.title,
                    (*quantity).max(1)
                )));
                Ok(next)
            }
            Err(StoreError::StatueNotFound(id)) => {
                result.add_message(CmdMessage::warning(format!("Statue not found: {}", id)));
                Ok(cart.clone())
            }
            Err(e) => Err(e),
        },
        CartOp::Set { line_id, quantity } => {
            if !known_line(cart, line_id, result) {
                return Ok(cart.clone());
            }
            Ok(cart.set_quantity(line_id, *quantity))
        }
        CartOp::Step { line_id, delta } => {
            if !known_line(cart, line_id, result) {
                return Ok(cart.clone());
            }
            Ok(cart.step(line_id, *delta))
        }
        CartOp::Remove { line_id } => {
            if !known_line(cart, line_id, result) {
                return Ok(cart.clone());
            }
            if let Some(line) = cart.line(line_id) {
                result.add_message(CmdMessage::success(format!(
                    "Removed {} from cart",
                    line.item.name
                )));
            }
            Ok(cart.remove_line(line_id))
        }
    }
}

fn known_line(cart: &Cart, line_id: &str, result: &mut CmdResult) -> bool {
    if cart.contains(line_id) {
        return true;
    }
    log::warn!("cart has no line '{}'", line_id);
    result.add_message(CmdMessage::warning(format!(
        "No cart line with id '{}'",
        line_id
    )));
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::BuiltinCatalog;
    use crate::commands::MessageLevel;
    use crate::model::Money;

    fn cart(ops: &[CartOp]) -> (CartPage, CmdResult) {
        let catalog = Catalog::load(&BuiltinCatalog).unwrap();
        let mut result = run(&catalog, ops).unwrap();
        match result.page.take() {
            Some(Page::Cart(page)) => (page, result),
            other => panic!("unexpected page {:?}", other),
        }
    }

    #[test]
    fn seeded_cart_totals() {
        let (page, _) = cart(&[]);
        assert_eq!(page.lines.len(), 2);
        assert_eq!(page.totals.subtotal, Money::from_dollars(5398));
        assert_eq!(page.totals.total.exact(), "$5,928.84");
    }

    #[test]
    fn ops_apply_in_order() {
        let (page, result) = cart(&[
            CartOp::Add {
                statue_id: 8,
                quantity: 2,
            },
            CartOp::Set {
                line_id: "2".into(),
                quantity: 0,
            },
            CartOp::Step {
                line_id: "1".into(),
                delta: 1,
            },
        ]);
        let ids: Vec<&str> = page.lines.iter().map(|l| l.item.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "8"]);
        assert_eq!(page.lines[0].quantity, 2);
        assert_eq!(page.lines[1].quantity, 2);
        assert_eq!(page.units, 4);
        assert_eq!(result.messages[0].content, "Added Wild Horse x2 to cart");
    }

    #[test]
    fn unknown_ids_warn_without_changing_the_cart() {
        let (page, result) = cart(&[
            CartOp::Remove {
                line_id: "42".into(),
            },
            CartOp::Add {
                statue_id: 99,
                quantity: 1,
            },
        ]);
        assert_eq!(page.lines.len(), 2);
        assert_eq!(result.messages.len(), 2);
        assert!(result.messages.iter().all(|m| m.level == MessageLevel::Warning));
    }

    #[test]
    fn removing_everything_reports_empty_cart() {
        let (page, result) = cart(&[
            CartOp::Remove {
                line_id: "1".into(),
            },
            CartOp::Step {
                line_id: "2".into(),
                delta: -1,
            },
        ]);
        assert!(page.lines.is_empty());
        assert_eq!(page.totals.total, Money::from_dollars(99));
        assert_eq!(result.messages.last().unwrap().content, "Your cart is empty.");
    }
}
