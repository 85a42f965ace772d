//! Administrative seeder: wipes the five collections and inserts the demo
//! dataset. Runs out-of-band, not on the request path.
//!
//! ```bash
//! cargo run --bin seed
//! ```

use octofit_backend::{ensure_collections, ensure_database_exists, reset_demo_data, AppConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("octofit_backend=info")),
        )
        .init();

    let config = AppConfig::from_env();
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(2)
        .connect(&config.database_url)
        .await?;
    ensure_collections(&pool).await?;

    let summary = reset_demo_data(&pool).await?;
    println!(
        "Database populated with test data! ({} teams, {} users, {} activities, {} leaderboard entries, {} workouts)",
        summary.teams, summary.users, summary.activities, summary.leaderboard, summary.workouts
    );
    Ok(())
}
