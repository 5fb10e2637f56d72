use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use favorites::favorites_auth::create_token_expiring_in;
use favorites::favorites_config::{JwtConfig, ServerConfig};
use favorites::favorites_db::{init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "favorites-cli")]
#[command(about = "Favorites CLI - Administrative tools for the Favorites API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a signed token for a user, for local testing
    IssueToken {
        /// User the token is issued for
        #[arg(short = 'u', long)]
        user_id: i64,

        /// Lifetime in seconds (defaults to JWT_EXPIRY)
        #[arg(short = 'e', long)]
        expiry: Option<i64>,
    },
    /// Apply pending database migrations
    Migrate,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::IssueToken { user_id, expiry } => handle_issue_token(user_id, expiry),
        Commands::Migrate => handle_migrate().await,
    }
}

fn handle_issue_token(user_id: i64, expiry: Option<i64>) -> anyhow::Result<()> {
    let jwt_config = JwtConfig::from_env();
    let expiry = expiry.unwrap_or(jwt_config.token_expiry);

    let token = create_token_expiring_in(user_id, expiry, &jwt_config)
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e.error))?;

    println!("{}", token);
    eprintln!(
        "Send it as a cookie: {}={}",
        jwt_config.cookie_name, token
    );
    Ok(())
}

async fn handle_migrate() -> anyhow::Result<()> {
    let server_config = ServerConfig::from_env();
    let database_url = server_config
        .database_url
        .as_deref()
        .context("DATABASE_URL must be set")?;

    let pool = init_db_pool(database_url, 1)
        .await
        .context("Failed to connect to database")?;

    run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    println!("✅ Migrations applied");
    Ok(())
}
