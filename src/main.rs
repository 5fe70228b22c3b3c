use color_eyre::eyre::Result;
use dotenv::dotenv;
use planner_api::config::ApiConfig;
use planner_db::{create_pool, schema::initialize_database};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration, including the character policy
    let config = ApiConfig::from_env()?;

    // Create database connection pool
    let pool = create_pool(&config.database_url).await?;

    // Tables are created idempotently on every start
    initialize_database(&pool).await?;

    // Start API server
    planner_api::start_server(config, pool).await?;

    Ok(())
}
