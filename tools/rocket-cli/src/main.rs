//! Rocket CLI - shopping cart from the command line.
//!
//! Commands:
//! - `rocket add <id>` - Add one unit of a product
//! - `rocket remove <id>` - Remove a product from the cart
//! - `rocket update <id> <amount>` - Change a product's quantity
//! - `rocket show` - Print the cart
//! - `rocket config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AddArgs, ConfigArgs, RemoveArgs, ShowArgs, UpdateArgs};
use rocket_observability::{init_logging, LogFormat};

/// Rocket CLI - manage a RocketShoes shopping cart
#[derive(Parser)]
#[command(name = "rocket")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add one unit of a product to the cart
    Add(AddArgs),

    /// Remove a product from the cart
    Remove(RemoveArgs),

    /// Change a product's quantity
    Update(UpdateArgs),

    /// Show the cart contents
    Show(ShowArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose, cli.json);

    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let logging = &ctx.config.logging;
    let level = if cli.verbose {
        logging.level.more_verbose()
    } else {
        logging.level
    };
    let format = if cli.json { LogFormat::Json } else { logging.format };
    init_logging(format, level);

    let result = match cli.command {
        Commands::Add(args) => commands::add::run(args, &ctx).await,
        Commands::Remove(args) => commands::remove::run(args, &ctx).await,
        Commands::Update(args) => commands::update::run(args, &ctx).await,
        Commands::Show(args) => commands::show::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
