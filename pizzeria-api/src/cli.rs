use clap::{Parser, Subcommand};
use pizzeria_store::{DbPool, StoreError, run_migrations, seed::seed};

#[derive(Parser, Debug)]
#[command(version, about = "Restaurants, pizzas and their prices over HTTP")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Apply pending migrations, then serve the HTTP API
    Serve,
    /// Apply pending migrations
    Migrate,
    /// Replace the database contents with sample restaurants and pizzas
    Seed,
}

pub fn migrate(pool: &DbPool) -> Result<(), StoreError> {
    let mut conn = pool.get()?;
    run_migrations(&mut conn)
}

/// Brings the schema up to date and replaces the data with the sample set.
pub fn seed_database(pool: &DbPool) -> Result<(), StoreError> {
    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;
    seed(&mut conn)
}
