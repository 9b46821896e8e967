//! Outer-scope mutation exercise
//!
//! Bug class: variable shadowing. In the source-language version, an inner
//! helper's parameter shadowed the enclosing `total` and the helper was
//! called for effect only, so the tax silently never applied. Rust's
//! lexical scoping removes the dynamic-scope footgun, but the same defect
//! survives as a discarded return value - shown here verbatim.

use crate::common::Result;
use crate::report;

/// Flat 10% tax applied to every order
pub const TAX_RATE: f64 = 0.10;

/// Total price of `prices` with tax applied. Empty input totals 0.0.
///
/// Fixed by capturing the helper's return value instead of calling it for
/// effect.
pub fn total_with_tax(prices: &[f64]) -> f64 {
    let mut total = 0.0;
    for &price in prices {
        total += price;
    }

    let apply_tax = |subtotal: f64| subtotal * (1.0 + TAX_RATE);

    total = apply_tax(total);
    total
}

/// Same contract, as a single expression with no helper to misuse.
pub fn total_with_tax_simple(prices: &[f64]) -> f64 {
    prices.iter().sum::<f64>() * (1.0 + TAX_RATE)
}

/// Same contract, with the mutation made explicit.
///
/// When the helper really should update the caller's accumulator, pass it
/// as `&mut` so the write is visible in the signature.
pub fn total_with_tax_in_place(prices: &[f64]) -> f64 {
    fn apply_tax(total: &mut f64) {
        *total *= 1.0 + TAX_RATE;
    }

    let mut total: f64 = prices.iter().sum();
    apply_tax(&mut total);
    total
}

/// Same contract as [`total_with_tax`], with the seeded defect.
///
/// BUG: the closure's `total` parameter shadows the enclosing binding, and
/// the call result is discarded, so the enclosing `total` never picks up
/// the tax. Returns the raw subtotal with no error raised.
pub fn total_with_tax_buggy(prices: &[f64]) -> f64 {
    let mut total = 0.0;
    for &price in prices {
        total += price;
    }

    let apply_tax = |total: f64| total * (1.0 + TAX_RATE);

    apply_tax(total);

    total
}

/// Demonstration harness: shows the silent shortfall and checks that all
/// fixed variants agree.
pub fn demo() -> Result<()> {
    report::heading("outer-scope mutation", "bug class: variable shadowing");

    let prices = [10.00, 20.00, 30.00];
    let expected = 66.00;

    report::section("Buggy variant");
    let actual = total_with_tax_buggy(&prices);
    report::comparison(
        "total with 10% tax",
        format!("${expected:.2}"),
        format!("${actual:.2}"),
    );
    report::note("the helper's result was discarded, so the tax never applied");

    report::section("Fixed variants");
    let captured = total_with_tax(&prices);
    let simple = total_with_tax_simple(&prices);
    let in_place = total_with_tax_in_place(&prices);
    report::comparison(
        "total with 10% tax",
        format!("${expected:.2}"),
        format!("${captured:.2}"),
    );
    report::comparison(
        "all fixed variants agree",
        true,
        captured == simple && simple == in_place,
    );

    Ok(())
}
