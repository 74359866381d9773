use std::sync::Arc;

use trolley_api::{construct_router, db, state::State};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    tracing::info!("Starting Trolley Web Service");

    let config = config::Config::from_env()?;

    let db = db::connect(&config.database_url).await?;
    db::ensure_schema(&db).await?;
    tracing::info!("Database ready at {}", config.database_url);

    let receipts = match &config.receipts {
        Some(store_config) => {
            tracing::info!("Receipt uploads go to bucket {}", store_config.bucket);
            Some(store_config.build_store()?)
        }
        None => {
            tracing::warn!("S3_BUCKET not set, receipt uploads disabled");
            None
        }
    };

    let state = Arc::new(State::new(db, receipts, config.insert_delay));
    let app = construct_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
