//! RocketShoes cart CLI

use std::{
    io,
    process,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use clap::{Args, Parser, Subcommand};
use tracing::error;

use rocketshoes::{
    config::AppConfig,
    context::AppContext,
    domain::{
        carts::{UpdateProductAmount, summary},
        products::ProductId,
    },
    logging,
    notifications::{Notice, Notifier},
};

#[derive(Debug, Parser)]
#[command(name = "rocketshoes", about = "RocketShoes shopping cart", long_about = None)]
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

    /// Set the quantity of a product already in the cart
    Update(UpdateArgs),
}

#[derive(Debug, Args)]
struct ProductArgs {
    /// Product id
    id: u64,
}

#[derive(Debug, Args)]
struct UpdateArgs {
    /// Product id
    id: u64,

    /// New quantity
    #[arg(allow_negative_numbers = true)]
    amount: i64,
}

/// Prints notices to stderr and remembers that one was raised.
#[derive(Debug, Default)]
struct ConsoleNotifier {
    raised: AtomicBool,
}

impl ConsoleNotifier {
    fn raised(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}

impl Notifier for ConsoleNotifier {
    fn error(&self, notice: Notice) {
        self.raised.store(true, Ordering::Relaxed);

        #[expect(clippy::print_stderr, reason = "notices are the CLI's user-facing output")]
        {
            eprintln!("{notice}");
        }
    }
}

#[tokio::main]
pub async fn main() {
    let _env = dotenvy::dotenv();

    let cli = Cli::parse();

    if let Err(init_error) = logging::init_subscriber(&cli.config.logging) {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for setup errors"
        )]
        {
            eprintln!("failed to initialize logging: {init_error}");
        }

        process::exit(1);
    }

    let notifier = Arc::new(ConsoleNotifier::default());

    let app = match AppContext::from_config(&cli.config, notifier.clone()) {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    match cli.command {
        Commands::List => {
            let cart = app.cart.cart().await;

            if let Err(write_error) = summary::write_to(io::stdout().lock(), &cart) {
                error!("failed to print cart: {write_error}");

                process::exit(1);
            }
        }
        Commands::Add(ProductArgs { id }) => app.cart.add_product(ProductId::new(id)).await,
        Commands::Remove(ProductArgs { id }) => app.cart.remove_product(ProductId::new(id)).await,
        Commands::Update(UpdateArgs { id, amount }) => {
            app.cart
                .update_product_amount(UpdateProductAmount {
                    product_id: ProductId::new(id),
                    amount,
                })
                .await;
        }
    }

    if notifier.raised() {
        process::exit(1);
    }
}
