//! CLI command implementations.

pub mod add;
pub mod config;
pub mod remove;
pub mod show;
pub mod update;

use clap::{Args, Subcommand};
use rocket_commerce::ProductId;
use rocket_store::CartHandle;
use tokio::sync::watch;

use crate::context::Context;
use crate::output;

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the remove command.
#[derive(Args)]
pub struct RemoveArgs {
    /// Product ID.
    pub id: ProductId,
}

/// Arguments for the update command.
#[derive(Args)]
pub struct UpdateArgs {
    /// Product ID.
    pub id: ProductId,

    /// Requested quantity. Values of zero or less are ignored.
    #[arg(allow_negative_numbers = true)]
    pub amount: i64,
}

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    /// Print only the item count and total.
    #[arg(short, long)]
    pub summary: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: Option<ConfigCommand>,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}

/// Report the outcome of a cart mutation.
///
/// Failures were already shown by the notification sink, so only a change
/// gets a success line.
pub(crate) fn report_change(
    ctx: &Context,
    cart: &CartHandle,
    changes: &watch::Receiver<rocket_commerce::Cart>,
    done: &str,
) -> anyhow::Result<()> {
    let changed = changes.has_changed().unwrap_or(false);
    let snapshot = cart.cart();
    let currency = ctx.config.display.currency;

    if ctx.output.is_json() {
        ctx.output.cart(&snapshot, currency)?;
    } else if changed {
        ctx.output.success(&format!(
            "{} ({})",
            done,
            output::summary(&snapshot, currency)
        ));
    } else {
        ctx.output.debug("cart unchanged");
    }

    Ok(())
}
