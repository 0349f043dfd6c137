//! Remove a product from the cart.

use anyhow::Result;

use super::{report_change, RemoveArgs};
use crate::context::Context;

/// Run the remove command.
pub async fn run(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let changes = cart.subscribe();

    cart.remove_product(args.id);

    report_change(ctx, &cart, &changes, &format!("Removed product {}", args.id))
}
