//! Print the cart.

use anyhow::Result;

use super::ShowArgs;
use crate::context::Context;
use crate::output;

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let cart = ctx.open_cart()?.cart();
    let currency = ctx.config.display.currency;

    if args.summary && !ctx.output.is_json() {
        println!("{}", output::summary(&cart, currency));
        return Ok(());
    }

    ctx.output.header("Cart");
    ctx.output.cart(&cart, currency)?;
    Ok(())
}
