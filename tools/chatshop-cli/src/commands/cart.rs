//! Cart commands.

use anyhow::Result;
use chatshop_cache::KvStore;
use chatshop_commerce::prelude::*;
use dialoguer::Confirm;

use super::{CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let mut store = CartStore::restore(&catalog, ctx.open_cache()?);

    match args.command.unwrap_or(CartCommand::Show) {
        CartCommand::Show => {}
        CartCommand::Add { id, quantity } => {
            store.add_by_id(id, quantity)?;
            let line = store.line(id).map(|l| l.quantity()).unwrap_or_default();
            ctx.output
                .success(&format!("Added product {id} (now x{line} in cart)"));
        }
        CartCommand::Set { id, quantity } => {
            if store.line(id).is_none() {
                ctx.output.warn(&format!("Product {id} is not in the cart"));
                return Ok(());
            }
            store.update_quantity(id, quantity);
            if quantity <= 0 {
                ctx.output.success(&format!("Removed product {id}"));
            } else {
                ctx.output.success(&format!("Set product {id} to x{quantity}"));
            }
        }
        CartCommand::Remove { id } => {
            if store.line(id).is_none() {
                ctx.output.warn(&format!("Product {id} is not in the cart"));
                return Ok(());
            }
            store.remove_from_cart(id);
            ctx.output.success(&format!("Removed product {id}"));
        }
        CartCommand::Clear { yes } => {
            if store.is_empty() {
                ctx.output.info("Cart is already empty");
                return Ok(());
            }
            if !yes && !ctx.output.is_json() {
                let confirmed = Confirm::new()
                    .with_prompt(format!("Remove all {} items?", store.total_items()))
                    .default(false)
                    .interact()?;

                if !confirmed {
                    ctx.output.warn("Clear cancelled");
                    return Ok(());
                }
            }
            store.clear_cart();
            ctx.output.success("Cart cleared");
        }
    }

    report_save_failure(&store, ctx);
    show_cart(&store, ctx)
}

/// Warn when the last change only lives in memory.
pub fn report_save_failure<S: KvStore>(store: &CartStore<'_, S>, ctx: &Context) {
    if store.last_save_failed() {
        ctx.output
            .warn("Could not save the cart; this change will be lost when the command exits");
    }
}

fn show_cart<S: KvStore>(store: &CartStore<'_, S>, ctx: &Context) -> Result<()> {
    let pricing = store.pricing()?;

    if ctx.output.is_json() {
        ctx.output.json(&pricing);
        return Ok(());
    }

    if pricing.is_empty() {
        ctx.output.info("Your cart is empty");
        return Ok(());
    }

    let format = ctx.price_format()?;
    ctx.output.header("Cart");

    let widths = [4, 28, 5, 14, 14];
    ctx.output
        .table_row(&["ID", "NAME", "QTY", "UNIT", "SUBTOTAL"], &widths);
    for line in &pricing.lines {
        ctx.output.table_row(
            &[
                &line.product_id.to_string(),
                &line.name,
                &line.quantity.to_string(),
                &format.format(&line.unit_price),
                &format.format(&line.subtotal),
            ],
            &widths,
        );
    }

    ctx.output.info("");
    ctx.output.kv("items", &pricing.total_items.to_string());
    ctx.output.kv("total", &format.format(&pricing.total));

    Ok(())
}
