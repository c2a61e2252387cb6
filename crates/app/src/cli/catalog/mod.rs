use clap::{Args, Subcommand};
use storefront_app::{
    database::{self, Db},
    domain::products::PgProductsService,
};

mod list;
mod seed;
mod show;

#[derive(Debug, Args)]
pub(crate) struct CatalogCommand {
    #[command(subcommand)]
    command: CatalogSubcommand,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", global = true)]
    database_url: Option<String>,
}

#[derive(Debug, Subcommand)]
enum CatalogSubcommand {
    /// Insert the default products when the catalog is empty
    Seed,

    /// Print every product in the catalog
    List,

    /// Print a single product
    Show {
        /// Product id
        id: String,
    },
}

pub(crate) async fn run(command: CatalogCommand) -> Result<(), String> {
    let database_url = command
        .database_url
        .ok_or_else(|| "--database-url or DATABASE_URL is required".to_string())?;

    let pool = database::connect(&database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let service = PgProductsService::new(Db::new(pool));

    match command.command {
        CatalogSubcommand::Seed => seed::run(&service).await,
        CatalogSubcommand::List => list::run(&service).await,
        CatalogSubcommand::Show { id } => show::run(&service, id).await,
    }
}
