//! Checkout command.

use anyhow::Result;
use chatshop_commerce::prelude::*;

use super::CheckoutArgs;
use crate::commands::cart::report_save_failure;
use crate::context::Context;

/// Run the checkout command.
pub fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut store = CartStore::restore(&catalog, ctx.open_cache()?);

    let encoder = ctx.encoder(args.to)?;

    // Buying a single product never touches the cart.
    let keep = args.keep || args.product.is_some();
    let checkout = match args.product {
        Some(id) => store.buy_now(id, args.quantity, &encoder)?,
        None if keep => encoder.encode(store.cart())?,
        None => store.checkout(&encoder)?,
    };

    if ctx.output.is_json() {
        ctx.output.json(&checkout);
    } else {
        ctx.output.header("Order message");
        ctx.output.raw(&checkout.message);
        ctx.output.header("Link");
        ctx.output.raw(&checkout.link);
        ctx.output.info("");
    }

    if encoder.settings().destination.is_none() {
        ctx.output
            .info("No destination configured; the messaging app will ask who to send it to");
    }

    if args.open {
        match open_link(&checkout.link) {
            Ok(()) => ctx.output.success("Opened messaging app"),
            Err(e) => ctx
                .output
                .warn(&format!("Could not open link: {e}. Copy it from above instead")),
        }
    }

    if keep {
        ctx.output.info("Cart kept");
    } else {
        report_save_failure(&store, ctx);
        ctx.output.success("Order ready; cart cleared");
    }

    Ok(())
}

/// Hand the link to the platform's default handler.
fn open_link(link: &str) -> std::io::Result<()> {
    webbrowser::open(link)?;
    tracing::debug!(link_len = link.len(), "opened link");
    Ok(())
}
