//! Prediction service (v1)
//!
//! Serves `POST /prediction`: a JSON body `{"X": [numbers]}` is answered with
//! `{"prediction": [numbers]}` computed by the installed predictor.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request          ┌──────────────────────────────────────────────┐
//!     ────────────────────────┼─▶ listener ─▶ request id ─▶ trace ─▶ timeout │
//!                             │                                   │          │
//!                             │                                   ▼          │
//!                             │                           prediction handler │
//!                             │                            parse → predict   │
//!     Client Response         │                                   │          │
//!     ◀───────────────────────┼──────────── JSON / error mapping ◀┘          │
//!                             │                                              │
//!                             │   config · lifecycle · observability         │
//!                             └──────────────────────────────────────────────┘
//! ```
//!
//! Try it with:
//!
//! ```text
//! curl http://localhost:5000/prediction \
//!     --request POST \
//!     --header "Content-Type: application/json" \
//!     --data '{"X": [1, 2]}'
//! ```

use std::path::PathBuf;

use clap::Parser;

use prediction_service::config::resolve_config;
use prediction_service::http::HttpServer;
use prediction_service::lifecycle::{bind_listener, shutdown_signal, Shutdown};
use prediction_service::observability::logging;

#[derive(Parser)]
#[command(name = "prediction-service")]
#[command(about = "HTTP prediction service", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address (e.g. 127.0.0.1:5000).
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = resolve_config(cli.config.as_deref(), cli.bind.as_deref())?;

    logging::init(&config.observability);

    tracing::info!("prediction-service v{} starting", env!("CARGO_PKG_VERSION"));

    let server = HttpServer::new(config);
    tracing::info!(
        bind_address = %server.config().listener.bind_address,
        request_timeout_secs = server.config().timeouts.request_secs,
        source = ?cli.config,
        "Configuration loaded"
    );

    let listener = bind_listener(&server.config().listener).await?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        shutdown_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
