//! Interactive shopping session.

use anyhow::{bail, Result};
use dialoguer::{Confirm, Input, Select};
use sevlo_commerce::prelude::*;

use super::cart::{checkout_report, CheckoutReport};
use super::{print_cart, ShopArgs};
use crate::context::Context;

/// Main menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Add,
    ChangeQuantity,
    Remove,
    View,
    Checkout,
    Quit,
}

impl Action {
    const ALL: [Action; 6] = [
        Action::Add,
        Action::ChangeQuantity,
        Action::Remove,
        Action::View,
        Action::Checkout,
        Action::Quit,
    ];

    fn label(self, labels: &CartLabels) -> String {
        match self {
            Action::Add => "Add product".to_string(),
            Action::ChangeQuantity => "Change quantity".to_string(),
            Action::Remove => "Remove product".to_string(),
            Action::View => "View cart".to_string(),
            Action::Checkout => labels.checkout_text.clone(),
            Action::Quit => "Quit".to_string(),
        }
    }
}

/// Run the shop command.
pub fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive and does not support --json");
    }

    let mut session = ShopSession::new(&ctx.catalog);
    for id in args.add {
        session.add_product(id)?;
    }

    ctx.output.header(&ctx.config.site.title);
    let labels: Vec<String> = Action::ALL.iter().map(|a| a.label(&ctx.config.cart)).collect();

    loop {
        let totals = session.totals();
        let choice = Select::new()
            .with_prompt(format!(
                "{} ({} items, {})",
                ctx.config.site.brand_name,
                totals.count,
                totals.subtotal_display()
            ))
            .items(&labels)
            .default(0)
            .interact()?;

        let outcome = match Action::ALL[choice] {
            Action::Add => add_product(ctx, &mut session),
            Action::ChangeQuantity => change_quantity(ctx, &mut session),
            Action::Remove => remove_product(ctx, &mut session),
            Action::View => {
                print_cart(&ctx.output, &ctx.config, session.cart());
                Ok(())
            }
            Action::Checkout => match checkout(ctx, &session) {
                Ok(true) => return Ok(()),
                other => other.map(|_| ()),
            },
            Action::Quit => return Ok(()),
        };

        // Rejected operations leave the cart unchanged; report and keep going.
        if let Err(e) = outcome {
            if !is_rejection(&e) {
                return Err(e);
            }
            ctx.output.warn(&format!("{:#}", e));
        }
    }
}

fn add_product(ctx: &Context, session: &mut ShopSession<'_>) -> Result<()> {
    let products = &ctx.config.products;
    let filters = ctx.catalog.filters();
    let filter_labels: Vec<&str> = filters.iter().map(|f| f.label(&products.all_label)).collect();

    let Some(filter_index) = select_opt("Category", &filter_labels)? else {
        return Ok(());
    };
    let filter = &filters[filter_index];

    let items: Vec<&CatalogItem> = ctx.catalog.filter(filter).collect();
    let item_labels: Vec<String> = items
        .iter()
        .map(|item| format!("{} ({})", item.name, item.price))
        .collect();

    let Some(item_index) = select_opt(&products.add_to_cart_text, &item_labels)? else {
        return Ok(());
    };

    let item = session.add_product(items[item_index].id)?;
    ctx.output.success(&format!("{} {}", products.added_to_cart_text, item.name));
    Ok(())
}

fn change_quantity(ctx: &Context, session: &mut ShopSession<'_>) -> Result<()> {
    let Some(id) = pick_line(ctx, session.cart())? else {
        return Ok(());
    };

    let quantity: i64 = Input::new()
        .with_prompt("Quantity (0 removes)")
        .interact_text()?;

    session.set_quantity(id, quantity)?;
    Ok(())
}

fn remove_product(ctx: &Context, session: &mut ShopSession<'_>) -> Result<()> {
    if let Some(id) = pick_line(ctx, session.cart())? {
        session.remove(id);
    }
    Ok(())
}

/// Show the order and hand off to the chat channel. Returns true when the
/// customer confirmed the order.
fn checkout(ctx: &Context, session: &ShopSession<'_>) -> Result<bool> {
    let Some(report) = prepare_checkout(ctx, session)? else {
        return Ok(false);
    };

    println!();
    println!("{}", report.message);
    println!();

    let confirmed = Confirm::new()
        .with_prompt(format!("Send this order via {}?", report.channel))
        .default(true)
        .interact()?;

    if confirmed {
        ctx.output.success(&format!("Open this link to send the order: {}", report.link));
    } else {
        ctx.output.info(&ctx.config.cart.continue_shopping_text);
    }
    Ok(confirmed)
}

/// Build the checkout report, or `None` when the cart is empty.
fn prepare_checkout(ctx: &Context, session: &ShopSession<'_>) -> Result<Option<CheckoutReport>> {
    if session.cart().is_empty() {
        ctx.output.info(&ctx.config.cart.empty_text);
        return Ok(None);
    }
    checkout_report(session.cart(), &ctx.config.checkout).map(Some)
}

/// Whether an error is a rejected storefront operation rather than a
/// terminal or prompt failure.
fn is_rejection(err: &anyhow::Error) -> bool {
    err.downcast_ref::<CommerceError>().is_some()
}

/// Let the customer pick one of the cart lines.
fn pick_line(ctx: &Context, cart: &Cart) -> Result<Option<ProductId>> {
    if cart.is_empty() {
        ctx.output.info(&ctx.config.cart.empty_text);
        return Ok(None);
    }

    let labels: Vec<String> = cart
        .lines()
        .iter()
        .map(|line| format!("{} x {} ({})", line.quantity, line.name, line.unit_price))
        .collect();

    Ok(select_opt("Product", &labels)?.map(|index| cart.lines()[index].id))
}

/// Select prompt that treats Esc as "go back".
fn select_opt<T: ToString>(prompt: &str, items: &[T]) -> Result<Option<usize>> {
    let choice = Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact_opt()?;
    Ok(choice)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ConfigSource;
    use crate::output::Output;

    fn context_with_phone(phone: &str) -> Context {
        let mut config = StoreConfig::builtin().unwrap();
        config.checkout.phone = phone.to_string();
        let catalog = config.catalog().unwrap();
        Context {
            config,
            catalog,
            output: Output::new(true),
            source: ConfigSource::Builtin,
        }
    }

    #[test]
    fn test_checkout_with_bad_phone_keeps_session() {
        let ctx = context_with_phone("n/a");
        let mut session = ShopSession::new(&ctx.catalog);
        session.add_product(ProductId::new(1)).unwrap();

        let err = prepare_checkout(&ctx, &session).unwrap_err();
        assert!(is_rejection(&err));
        assert!(matches!(
            err.downcast_ref::<CommerceError>(),
            Some(CommerceError::Config(_))
        ));
        assert_eq!(session.totals().count, 1);
    }

    #[test]
    fn test_checkout_empty_cart_is_not_an_error() {
        let ctx = context_with_phone("+52 55 5172 5689");
        let session = ShopSession::new(&ctx.catalog);
        assert!(prepare_checkout(&ctx, &session).unwrap().is_none());
    }

    #[test]
    fn test_checkout_report_ready() {
        let ctx = context_with_phone("+52 55 5172 5689");
        let mut session = ShopSession::new(&ctx.catalog);
        session.add_product(ProductId::new(14)).unwrap();

        let report = prepare_checkout(&ctx, &session).unwrap().unwrap();
        assert!(report.message.ends_with("Subtotal: $30.00"));
    }

    #[test]
    fn test_rejections_vs_prompt_failures() {
        let rejected = anyhow::Error::from(CommerceError::InvalidQuantity(-1));
        assert!(is_rejection(&rejected));

        let closed = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "terminal closed");
        let prompt = anyhow::Error::from(dialoguer::Error::IO(closed));
        assert!(!is_rejection(&prompt));
    }
}
