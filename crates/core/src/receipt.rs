//! Bill Receipt

use std::io;

use tabled::{
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Columns},
};
use thiserror::Error;

use crate::{cart::Cart, coupons::Coupon, pricing::BillTotals};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error while writing the rendered bill.
    #[error("IO error")]
    Io(#[from] io::Error),
}

/// Write the bill-details table for a cart to `out`.
///
/// One row per cart line, followed by the item total, taxes, an optional
/// coupon line, the delivery fee and the payable total. Mirrors the bill
/// panel shown at checkout.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if writing to `out` fails.
pub fn write_bill(
    mut out: impl io::Write,
    cart: &Cart,
    totals: &BillTotals,
    coupon: Option<&Coupon>,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    builder.push_record(["Item", "Qty", "Amount"]);

    for line in cart.lines() {
        builder.push_record([
            line.item.name.clone(),
            line.quantity.to_string(),
            rupees(line.line_total()),
        ]);
    }

    builder.push_record([
        String::from("Item Total"),
        String::new(),
        rupees(totals.item_subtotal),
    ]);
    builder.push_record([
        String::from("GST & Taxes (5%)"),
        String::new(),
        rupees(totals.taxes),
    ]);

    if let Some(coupon) = coupon {
        builder.push_record([
            format!("Coupon ({})", coupon.code),
            String::new(),
            format!("-{}", rupees(totals.discount)),
        ]);
    }

    builder.push_record([
        String::from("Delivery Fee"),
        String::new(),
        if totals.delivery_fee == 0 {
            String::from("FREE")
        } else {
            rupees(totals.delivery_fee)
        },
    ]);
    builder.push_record([
        String::from("Grand Total"),
        String::new(),
        rupees(totals.final_total),
    ]);

    let mut table = builder.build();
    table.with(Style::modern_rounded());
    table.with(Modify::new(Columns::last()).with(Alignment::right()));

    writeln!(out, "{table}")?;

    Ok(())
}

fn rupees(amount: i64) -> String {
    format!("₹{amount}")
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::{coupons::CouponRule, fixtures, menu::MenuItem};

    use super::*;

    #[test]
    fn bill_contains_lines_and_totals() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(MenuItem::new("c1", "Paneer Feast Combo", 449));

        let coupon = fixtures::coupon("NEW50", CouponRule::Flat, 50, 0, 0);
        let totals = BillTotals::compute(cart.item_subtotal(), Some(&coupon));

        let mut out = Vec::new();
        write_bill(&mut out, &cart, &totals, Some(&coupon))?;

        let rendered = String::from_utf8(out)?;

        assert!(rendered.contains("Paneer Feast Combo"));
        assert!(rendered.contains("₹449"));
        assert!(rendered.contains("GST & Taxes (5%)"));
        assert!(rendered.contains("₹22"));
        assert!(rendered.contains("Coupon (NEW50)"));
        assert!(rendered.contains("-₹50"));
        assert!(rendered.contains("FREE"));
        assert!(rendered.contains("₹421"));

        Ok(())
    }

    #[test]
    fn bill_without_coupon_has_no_coupon_row() -> TestResult {
        let mut cart = Cart::new();
        cart.add_item(MenuItem::new("b1", "Butter Naan", 60));

        let totals = BillTotals::compute(cart.item_subtotal(), None);

        let mut out = Vec::new();
        write_bill(&mut out, &cart, &totals, None)?;

        let rendered = String::from_utf8(out)?;

        assert!(!rendered.contains("Coupon"));

        Ok(())
    }
}
