use clap::{Parser, Subcommand};
use dotenvy::dotenv;

mod commands;
mod config;
mod setup;

use config::{app_config::AppConfig, database_config};
use setup::dependency_injection::DependencyContainer;

/// Shopping list maintenance console
#[derive(Parser)]
#[command(name = "shopping-list")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,

    /// Show a company user's shopping list grants
    Permissions(commands::permissions::PermissionsArgs),

    /// Find or create the customer's default list
    DefaultList(commands::lists::CustomerListArgs),

    /// List the customer's shopping lists
    Lists(commands::lists::CustomerListArgs),

    /// Show one page of a list with its shares
    Overview(commands::lists::OverviewArgs),

    /// Add items to a list in one transaction
    AddItems(commands::items::AddItemsArgs),

    /// Delete every item of a list
    ClearList(commands::items::ClearListArgs),

    /// Delete a single item
    RemoveItem(commands::items::RemoveItemArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Load environment variables
    dotenv().ok();

    // 2. Initialize tracing with RUST_LOG env filter
    logger::init_tracing("info");

    // 3. Load configuration
    let cli = Cli::parse();
    let config = AppConfig::from_env();

    // 4. Initialize database
    let pool = database_config::init_database(&config).await?;
    if let Commands::Migrate = cli.command {
        database_config::migrate(&pool, &config).await?;
        tracing::info!(path = %config.migrations_path, "migrations applied");
        return Ok(());
    }

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool, &config);

    // 6. Run command
    match cli.command {
        Commands::Migrate => Ok(()),
        Commands::Permissions(args) => commands::permissions::execute(&container, args).await,
        Commands::DefaultList(args) => commands::lists::default_list(&container, args).await,
        Commands::Lists(args) => commands::lists::lists(&container, args).await,
        Commands::Overview(args) => {
            commands::lists::overview(&container, &config.default_list_name, args).await
        }
        Commands::AddItems(args) => commands::items::add_items(&container, args).await,
        Commands::ClearList(args) => commands::items::clear_list(&container, args).await,
        Commands::RemoveItem(args) => commands::items::remove_item(&container, args).await,
    }
}
