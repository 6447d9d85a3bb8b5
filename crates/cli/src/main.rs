//! APA CLI - Command-line access to the supermarket app data.
//!
//! # Usage
//!
//! ```bash
//! # Create the data file from the bundled template (or reset it)
//! apa seed
//! apa seed --force
//!
//! # Browse the catalog
//! apa catalog list
//! apa catalog search arroz
//!
//! # Manage saved carts
//! apa saved create "Compra semanal" --item 1=2 --item 5
//! apa saved share 1
//!
//! # Confirm a purchase and review it later
//! apa purchase confirm --item 2=3
//! apa purchase last
//! ```
//!
//! # Environment Variables
//!
//! See `apa_store::config` (`APA_DATA_DIR`, `APA_DATA_FILE`, `APA_SEED_PATH`,
//! `APA_IMAGE_DIR`). `RUST_LOG` controls log output.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use apa_core::{ProductId, SavedCartId};
use apa_store::{AsyncDataStore, DataStore, StoreConfig};
use clap::{Parser, Subcommand};

mod commands;
mod items;

use items::{ItemArg, parse_item};

#[derive(Parser)]
#[command(name = "apa")]
#[command(author, version, about = "APA supermarket data tools")]
struct Cli {
    /// Directory holding the data file (overrides `APA_DATA_DIR`)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed template file (overrides `APA_SEED_PATH`)
    #[arg(long, global = true)]
    seed: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data file from the seed template
    Seed {
        /// Overwrite an existing data file
        #[arg(long)]
        force: bool,
    },
    /// Browse the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Manage saved carts
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
    /// Confirm purchases and review the last one
    Purchase {
        #[command(subcommand)]
        action: PurchaseAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// List every product
    List,
    /// Find products by name
    Search {
        /// Case-insensitive text to look for
        query: String,
    },
    /// Show one product
    Show {
        /// Product ID
        id: String,
    },
}

#[derive(Subcommand)]
enum SavedAction {
    /// List saved carts
    List,
    /// Show the contents of a saved cart
    Show {
        /// Saved cart ID
        id: String,
    },
    /// Save a new cart
    Create {
        /// Cart name
        name: String,

        /// Product and quantity as `ID=QTY` (repeat for more products)
        #[arg(short, long = "item", value_parser = parse_item, required = true)]
        items: Vec<ItemArg>,
    },
    /// Replace the contents of a saved cart
    Update {
        /// Saved cart ID
        id: String,

        /// Product and quantity as `ID=QTY` (repeat for more products)
        #[arg(short, long = "item", value_parser = parse_item, required = true)]
        items: Vec<ItemArg>,
    },
    /// Delete a saved cart
    Delete {
        /// Saved cart ID
        id: String,
    },
    /// Print a saved cart as a shareable message
    Share {
        /// Saved cart ID
        id: String,
    },
}

#[derive(Subcommand)]
enum PurchaseAction {
    /// Show the last confirmed purchase
    Last,
    /// Record a purchase
    Confirm {
        /// Product and quantity as `ID=QTY` (repeat for more products)
        #[arg(short, long = "item", value_parser = parse_item, required = true)]
        items: Vec<ItemArg>,
    },
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "apa_store=info,apa=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    let mut config = StoreConfig::from_env()?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(seed) = cli.seed {
        config.seed_path = Some(seed);
    }

    let store = DataStore::from_config(&config);
    let data_path = store.path().to_path_buf();
    let handle = AsyncDataStore::new(store);

    match cli.command {
        Commands::Seed { force } => commands::seed::run(&handle, &data_path, force).await?,
        Commands::Catalog { action } => match action {
            CatalogAction::List => commands::catalog::list(&handle).await?,
            CatalogAction::Search { query } => commands::catalog::search(&handle, query).await?,
            CatalogAction::Show { id } => {
                commands::catalog::show(&handle, ProductId::new(id)).await?;
            }
        },
        Commands::Saved { action } => match action {
            SavedAction::List => commands::saved::list(&handle).await?,
            SavedAction::Show { id } => commands::saved::show(&handle, SavedCartId::new(id)).await?,
            SavedAction::Create { name, items } => {
                commands::saved::create(&handle, name, items).await?;
            }
            SavedAction::Update { id, items } => {
                commands::saved::update(&handle, SavedCartId::new(id), items).await?;
            }
            SavedAction::Delete { id } => {
                commands::saved::delete(&handle, SavedCartId::new(id)).await?;
            }
            SavedAction::Share { id } => {
                commands::saved::share(&handle, SavedCartId::new(id)).await?;
            }
        },
        Commands::Purchase { action } => match action {
            PurchaseAction::Last => commands::purchase::last(&handle).await?,
            PurchaseAction::Confirm { items } => {
                commands::purchase::confirm(&handle, items).await?;
            }
        },
    }
    Ok(())
}
