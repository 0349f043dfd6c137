//! Change a product's quantity.

use anyhow::Result;
use rocket_store::UpdateProductAmount;

use super::{report_change, UpdateArgs};
use crate::context::Context;

/// Run the update command.
pub async fn run(args: UpdateArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?;
    let changes = cart.subscribe();

    if args.amount <= 0 {
        ctx.output
            .warn(&format!("Ignoring non-positive amount {}", args.amount));
    }

    cart.update_product_amount(UpdateProductAmount {
        product_id: args.id,
        amount: args.amount,
    })
    .await;

    report_change(ctx, &cart, &changes, &format!("Updated product {}", args.id))
}
