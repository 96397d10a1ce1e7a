use clap::Parser;
use pizzeria_api::{
    app,
    cli::{Cli, Commands, migrate, seed_database},
    config::Config,
    handlers::AppState,
};
use pizzeria_store::{DbPool, establish_pool};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let pool = establish_pool(&config.database_url, config.pool_size)?;

    match cli.command {
        Commands::Serve => {
            migrate(&pool)?;
            serve(config, pool).await
        }
        Commands::Migrate => {
            migrate(&pool)?;
            info!(database_url = %config.database_url, "migrations up to date");
            Ok(())
        }
        Commands::Seed => {
            seed_database(&pool)?;
            info!(database_url = %config.database_url, "database seeded");
            Ok(())
        }
    }
}

async fn serve(config: Config, pool: DbPool) -> Result<(), Box<dyn std::error::Error>> {
    let app = app(AppState::new(pool));

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("Pizzeria API listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
