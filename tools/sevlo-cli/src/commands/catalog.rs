//! List catalog products.

use anyhow::{bail, Result};
use serde::Serialize;
use sevlo_commerce::prelude::*;

use super::CatalogArgs;
use crate::context::Context;

#[derive(Serialize)]
struct CatalogReport<'a> {
    filter: &'a CategoryFilter,
    categories: &'a [String],
    items: Vec<&'a CatalogItem>,
}

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let products = &ctx.config.products;
    let filter = resolve_filter(args.category.as_deref(), &ctx.catalog, &products.all_label)?;
    let items: Vec<&CatalogItem> = ctx.catalog.filter(&filter).collect();

    if ctx.output.is_json() {
        ctx.output.json(&CatalogReport {
            filter: &filter,
            categories: ctx.catalog.categories(),
            items,
        });
        return Ok(());
    }

    ctx.output.header(&format!(
        "{} - {}",
        ctx.config.site.brand_name,
        filter.label(&products.all_label)
    ));

    if items.is_empty() {
        ctx.output.info("No products in this category");
        return Ok(());
    }

    let widths = [4, 36, 20, 10];
    ctx.output.table_row(&["ID", "PRODUCT", "CATEGORY", "PRICE"], &widths);
    for item in &items {
        ctx.output.table_row(
            &[&item.id.to_string(), &item.name, &item.category, &item.price.to_string()],
            &widths,
        );
    }

    println!();
    ctx.output.kv("Store", &ctx.source.to_string());
    ctx.output.kv("Products", &items.len().to_string());
    ctx.output.kv(
        "Categories",
        &ctx.catalog
            .filters()
            .iter()
            .map(|f| f.label(&products.all_label))
            .collect::<Vec<_>>()
            .join(", "),
    );

    Ok(())
}

/// Map a category label from the command line to a filter.
///
/// Matching is case-insensitive. The "all" label selects every product.
fn resolve_filter(label: Option<&str>, catalog: &Catalog, all_label: &str) -> Result<CategoryFilter> {
    let Some(label) = label.map(str::trim) else {
        return Ok(CategoryFilter::All);
    };

    if label.eq_ignore_ascii_case(all_label) || label.eq_ignore_ascii_case("all") {
        return Ok(CategoryFilter::All);
    }

    match catalog
        .categories()
        .iter()
        .find(|category| category.to_lowercase() == label.to_lowercase())
    {
        Some(category) => Ok(CategoryFilter::category(category.as_str())),
        None => bail!(
            "Unknown category '{}'. Available: {}",
            label,
            catalog.categories().join(", ")
        ),
    }
}
