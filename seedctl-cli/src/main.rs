//! seedctl CLI - bootstrap, seed and query the example Postgres tables
//!
//! With no subcommand it runs the demonstration: bootstrap the schema, add
//! two users, print the first users, then add three example rows.
//!
//! Requires `DATABASE_URL` (from the environment, `./.env` or
//! `~/.seedctl/.env`).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use seedctl_core::{load_dotenv, Database, DbConfig, SeedctlConfig};

mod commands;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "seedctl",
    author,
    version,
    about = "Bootstrap, seed and query the users/example_table schema in Postgres"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Bootstrap, add demo users, print users, add demo rows (default)
    Demo,
    /// Create the tables if absent and insert the seed users
    Bootstrap,
    /// Add a user unless the email already exists
    AddUser(AddUserArgs),
    /// Add a row to example_table unless the name already exists
    AddRow(AddRowArgs),
    /// List users in ascending id order
    Users(ListArgs),
    /// List example_table rows in ascending id order
    Rows(ListArgs),
}

#[derive(Args, Debug)]
struct AddUserArgs {
    /// Email address (not validated; the table enforces uniqueness)
    email: String,
}

#[derive(Args, Debug)]
struct AddRowArgs {
    /// Unique row name
    name: String,

    /// Age stored with the row
    #[arg(allow_negative_numbers = true)]
    age: i32,
}

#[derive(Args, Debug)]
struct ListArgs {
    /// Maximum number of rows (passed to Postgres unchecked)
    #[arg(long, allow_negative_numbers = true)]
    limit: Option<i64>,

    /// Print a JSON array instead of one line per row
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env may carry RUST_LOG, so it is read before the subscriber exists
    let env_sources = load_dotenv();
    tracing_setup::init(&TracingConfig { debug: cli.debug })?;
    env_sources.log();

    let settings = SeedctlConfig::load();
    let db_config = DbConfig::from_env(&settings.database)
        .context("Cannot start without a database connection string")?;
    let db = Database::connect_lazy(&db_config).context("Invalid database connection string")?;

    let default_limit = settings.query.default_limit;
    let result = match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => commands::demo(&db, default_limit).await,
        Commands::Bootstrap => commands::bootstrap(&db).await,
        Commands::AddUser(args) => commands::add_user(&db, &args.email).await,
        Commands::AddRow(args) => commands::add_row(&db, &args.name, args.age).await,
        Commands::Users(args) => {
            commands::list_users(&db, args.limit.unwrap_or(default_limit), args.json).await
        }
        Commands::Rows(args) => {
            commands::list_rows(&db, args.limit.unwrap_or(default_limit), args.json).await
        }
    };

    db.close().await;
    result
}
