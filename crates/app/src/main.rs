//! RocketCart CLI

use std::{io, process::ExitCode, sync::Arc};

use clap::{Args, Parser, Subcommand};
use rocketcart_app::{
    config::AppConfig,
    context::AppContext,
    domain::{
        cart::models::{Cart, UpdateProductAmount},
        catalog::models::ProductId,
    },
    notifications::ErrorSink,
    observability,
};

#[derive(Debug, Parser)]
#[command(name = "rocketcart", about = "RocketShoes cart CLI", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: AppConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the cart
    List,

    /// Add one unit of a product
    Add(ProductArgs),

    /// Remove a product from the cart
    Remove(ProductArgs),

    /// Set the amount of a product already in the cart
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Catalog product id
    product_id: u64,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Catalog product id
    product_id: u64,

    /// New amount
    #[arg(allow_negative_numbers = true)]
    amount: i64,
}

/// Prints cart errors the way the storefront shows its toasts.
#[derive(Debug)]
struct StderrErrorSink;

impl ErrorSink for StderrErrorSink {
    fn error(&self, message: &str) {
        #[expect(clippy::print_stderr, reason = "the terminal is the toast surface")]
        {
            eprintln!("✖ {message}");
        }
    }
}

#[tokio::main]
pub async fn main() -> ExitCode {
    _ = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(error) = observability::init_subscriber(&cli.config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized, must use eprintln"
        )]
        {
            eprintln!("{error}");
        }

        return ExitCode::FAILURE;
    }

    match run(cli).await {
        Ok(code) => code,
        Err(error) => {
            tracing::error!("{error}");

            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, String> {
    let context = AppContext::from_config(&cli.config, Arc::new(StderrErrorSink))
        .await
        .map_err(|error| format!("failed to initialise cart: {error}"))?;

    let store = &context.cart;

    let outcome = match cli.command {
        Commands::List => Ok(store.cart()),
        Commands::Add(args) => store.add_product(ProductId::new(args.product_id)).await,
        Commands::Remove(args) => store.remove_product(ProductId::new(args.product_id)).await,
        Commands::Update(args) => {
            store
                .update_product_amount(UpdateProductAmount {
                    product: ProductId::new(args.product_id),
                    amount: args.amount,
                })
                .await
        }
    };

    // Failures were already reported through the error sink.
    let Ok(cart) = outcome else {
        return Ok(ExitCode::FAILURE);
    };

    print_cart(&cart).map_err(|error| format!("failed to print cart: {error}"))?;

    Ok(ExitCode::SUCCESS)
}

fn print_cart(cart: &Cart) -> io::Result<()> {
    cart.write_to(io::stdout().lock())
}
