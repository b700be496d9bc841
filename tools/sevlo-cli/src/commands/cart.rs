//! Run cart operations and show the result.

use anyhow::{Context as _, Result};
use serde::Serialize;
use sevlo_commerce::prelude::*;
use tracing::debug;

use super::{print_cart, CartArgs};
use crate::context::Context;

#[derive(Debug, Serialize)]
struct CartReport {
    lines: Vec<LineTotal>,
    totals: CartTotals,
    #[serde(skip_serializing_if = "Option::is_none")]
    checkout: Option<CheckoutReport>,
}

#[derive(Debug, Serialize)]
pub(crate) struct CheckoutReport {
    pub(crate) channel: String,
    pub(crate) message: String,
    pub(crate) link: String,
}

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let mut session = ShopSession::new(&ctx.catalog);

    for op in &args.ops {
        debug!(op = %op, "applying cart operation");
        op.apply(&mut session)
            .with_context(|| format!("Failed to apply '{}'", op))?;
    }

    let checkout = if args.checkout {
        Some(checkout_report(session.cart(), &ctx.config.checkout)?)
    } else {
        None
    };

    if ctx.output.is_json() {
        ctx.output.json(&CartReport {
            lines: session.cart().line_totals(),
            totals: session.totals(),
            checkout,
        });
        return Ok(());
    }

    ctx.output.header(&ctx.config.site.brand_name);
    print_cart(&ctx.output, &ctx.config, session.cart());

    if let Some(checkout) = checkout {
        ctx.output.header(&format!("{} ({})", ctx.config.cart.checkout_text, checkout.channel));
        println!("{}", checkout.message);
        println!();
        ctx.output.success(&checkout.link);
    }

    Ok(())
}

/// Compose the order message and chat link for a cart.
pub(crate) fn checkout_report(cart: &Cart, config: &CheckoutConfig) -> Result<CheckoutReport> {
    let message = compose_order_message(cart, config).context("Cannot check out")?;
    let link = checkout_link(cart, config).context("Cannot build checkout link")?;

    Ok(CheckoutReport {
        channel: config.channel_label.clone(),
        message,
        link,
    })
}
