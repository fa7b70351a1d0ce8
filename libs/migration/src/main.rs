//! Schema CLI for the users database, e.g. `cargo run -p migration -- up`.
//! Reads `DATABASE_URL` like the service does.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
