//! fleet-server — bus-fleet back-office administration API
//!
//! Long-running service that:
//! - Authenticates employees and issues expiring JWTs
//! - Re-derives position permissions from current grants per request
//! - Serves CRUD for the organisation, fleet, network and schedules
//! - Computes tabular and chart reports from schedule data

use fleet_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fleet_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();

    tracing::info!("Starting fleet-server (env: {})", config.environment);

    // Initialize application state (database, migrations, seeding, JWT)
    let state = AppState::new(&config).await?;

    let app = api::create_router(state);

    let addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("fleet-server HTTP listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
