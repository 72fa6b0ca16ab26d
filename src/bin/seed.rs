use dotenvy::dotenv;

use mergington::config::AppConfig;
use mergington::database::{self, schema_repo};
use mergington::services::seed_service;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = AppConfig::from_env();
    let pool = database::connect(&config.database_url)
        .await
        .expect("cannot connect to database");

    if let Err(e) = schema_repo::ensure_schema(&pool).await {
        eprintln!("schema setup failed: {}", e);
        std::process::exit(1);
    }

    match seed_service::seed_initial_data(&pool).await {
        Ok(report) if report.skipped => {
            println!("seed: store already has activities, nothing to do");
        }
        Ok(report) => {
            println!(
                "seed: activities={}, participants={}, memberships={}",
                report.activities, report.participants, report.memberships
            );
        }
        Err(e) => {
            eprintln!("seed failed: {}", e);
            std::process::exit(1);
        }
    }
}
