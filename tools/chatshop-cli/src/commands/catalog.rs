//! Catalog browsing commands.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chatshop_commerce::prelude::*;

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;

    match args.command.unwrap_or(CatalogCommand::List {
        category: None,
        min: None,
        max: None,
        featured: false,
        search: None,
    }) {
        CatalogCommand::List {
            category,
            min,
            max,
            featured,
            search,
        } => {
            let mut filter = ProductFilter::new();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            let currency = catalog.currency();
            let min = min.map(|p| Money::parse(&p, currency)).transpose()?;
            let max = max.map(|p| Money::parse(&p, currency)).transpose()?;
            filter = filter.price_range(min, max);
            if featured {
                filter = filter.featured();
            }
            if let Some(text) = search {
                filter = filter.text(text);
            }
            list_products(&catalog.search(&filter), ctx)
        }
        CatalogCommand::Show { id } => show_product(&catalog, id, ctx),
        CatalogCommand::Categories => list_categories(&catalog, ctx),
    }
}

fn list_products(products: &[Arc<Product>], ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        let products: Vec<&Product> = products.iter().map(Arc::as_ref).collect();
        ctx.output.json(&products);
        return Ok(());
    }

    if products.is_empty() {
        ctx.output.info("No products match");
        return Ok(());
    }

    let format = ctx.price_format()?;
    ctx.output.header("Products");

    let widths = [4, 28, 14, 14, 8];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "CATEGORY", "FEATURED"], &widths);
    for product in products {
        ctx.output.table_row(
            &[
                &product.id.to_string(),
                &product.name,
                &format.format(&product.price),
                &product.category,
                if product.featured { "★" } else { "" },
            ],
            &widths,
        );
    }

    Ok(())
}

fn show_product(catalog: &ProductCatalog, id: ProductId, ctx: &Context) -> Result<()> {
    let product = catalog
        .get(id)
        .ok_or_else(|| anyhow!(CommerceError::ProductNotFound(id)))?;

    if ctx.output.is_json() {
        ctx.output.json(product.as_ref());
        return Ok(());
    }

    let format = ctx.price_format()?;
    ctx.output.header(&product.name);
    ctx.output.kv("id", &product.id.to_string());
    ctx.output.kv("price", &format.format(&product.price));
    ctx.output.kv("category", &product.category);
    ctx.output.kv("featured", &product.featured.to_string());
    ctx.output.kv("image", &product.image_url);
    ctx.output.info("");
    ctx.output.raw(&product.description);

    Ok(())
}

fn list_categories(catalog: &ProductCatalog, ctx: &Context) -> Result<()> {
    let categories = catalog.categories();

    if ctx.output.is_json() {
        ctx.output.json(&categories);
        return Ok(());
    }

    ctx.output.header("Categories");
    for category in &categories {
        let count = catalog.by_category(category).len();
        ctx.output.list_item(&format!("{category} ({count})"));
    }

    Ok(())
}
