//! Plain-text order summary.

use std::fmt::Write;

use crate::cart::CartPricing;
use crate::money::PriceFormat;

/// Render the order summary sent to the merchant.
///
/// One numbered line per cart line (name, quantity, unit price, subtotal),
/// then the total. Every amount goes through the same `format`, so the
/// figures in the message add up exactly as printed.
pub(crate) fn render_order_message(
    pricing: &CartPricing,
    format: &PriceFormat,
    greeting: Option<&str>,
) -> String {
    let mut out = String::new();

    if let Some(greeting) = greeting.map(str::trim).filter(|g| !g.is_empty()) {
        out.push_str(greeting);
        out.push_str("\n\n");
    }

    for (i, line) in pricing.lines.iter().enumerate() {
        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "{}. {} x{} @ {} = {}",
            i + 1,
            line.name,
            line.quantity,
            format.format(&line.unit_price),
            format.format(&line.subtotal),
        );
    }

    let _ = write!(
        out,
        "\nItems: {}\nTotal: {}",
        pricing.total_items,
        format.format(&pricing.total)
    );
    out
}
