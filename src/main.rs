// src/main.rs

use dotenvy::dotenv;
use questionnaire_backend::config::Config;
use questionnaire_backend::routes;
use questionnaire_backend::state::AppState;
use questionnaire_backend::store::QuestionStore;
use std::net::SocketAddr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Load .env file (if present)
    dotenv().ok();

    // Load configuration from environment
    let config = Config::from_env();

    let file_appender = tracing_appender::rolling::daily("logs", "app.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let env_filter = EnvFilter::new(&config.rust_log);
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);
    let file_layer = fmt::layer().with_writer(non_blocking).with_ansi(false);

    // Initialize Tracing (Logging)
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer)
        .with(file_layer)
        .init();

    // Load the question dataset. A load failure is fatal: the server must
    // not start serving without its table.
    let store = match QuestionStore::load(&config.questions_csv) {
        Ok(store) => {
            tracing::info!(
                "CSV file loaded successfully ({} questions from {})",
                store.len(),
                config.questions_csv
            );
            store
        }
        Err(e) => {
            tracing::error!("Error loading CSV file: {}", e);
            panic!(
                "Failed to load question dataset from {}: {}",
                config.questions_csv, e
            );
        }
    };

    // Create AppState
    let port = config.port;
    let state = AppState::new(store, config);

    // Create the Axum application router
    let app = routes::create_router(state);

    // Bind to the listening address
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();

    // Start the server
    axum::serve(listener, app).await.unwrap();
}
