// src/main.rs

use std::sync::Arc;
use std::time::Duration;

use sqlx::sqlite::SqlitePoolOptions;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use textguard::api::http::http_router;
use textguard::config::CONFIG;
use textguard::state::AppState;
use textguard::store::{run_migrations, RecordStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let level = CONFIG.log_level.parse().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting textguard classification gateway");
    info!("URL classifier: {}", CONFIG.url_classifier_cmd);
    info!("SMS classifier: {}", CONFIG.sms_classifier_cmd);

    // Connect to the database before serving
    let pool = SqlitePoolOptions::new()
        .max_connections(CONFIG.sqlite_max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&CONFIG.database_url)
        .await?;

    run_migrations(&pool).await?;

    let store = RecordStore::new(pool.clone());
    let state = Arc::new(AppState::new(store, &CONFIG));

    let app = http_router(state);

    let bind_address = format!("{}:{}", CONFIG.host, CONFIG.port);
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    pool.close().await;
    Ok(())
}
