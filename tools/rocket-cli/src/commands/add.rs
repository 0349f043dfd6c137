//! Add a product to the cart.

use anyhow::Result;

use super::{report_change, AddArgs};
use crate::context::Context;

/// Run the add command.
pub async fn run(args: AddArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let changes = cart.subscribe();

    cart.add_product(args.id).await;

    report_change(ctx, &cart, &changes, &format!("Added product {}", args.id))
}
