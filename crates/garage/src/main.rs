mod app;
mod config;
mod handlers;
mod lambda;
mod state;
mod storage;

use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use listenfd::ListenFd;
use tokio::{net::TcpListener, signal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::{
    app::create_app,
    config::{Config, LogFormat},
    handlers::RouteHandler,
    state::{AppState, StorageBackend},
};

/// Garage - Register mechanics and users
#[derive(Parser, Debug)]
#[command(name = "garage")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Storage backend for both tables
    #[arg(long, global = true, value_enum, default_value = "dynamodb", env = "GARAGE_STORAGE")]
    storage: StorageBackend,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve one handler as an AWS Lambda function
    Lambda {
        /// Which handler this function runs
        #[arg(long, value_enum, env = "GARAGE_HANDLER")]
        handler: HandlerKind,
    },
    /// Serve both handlers over plain HTTP
    Serve {
        /// Host address to bind the server to
        #[arg(long, short = 'H', default_value = "0.0.0.0", env = "HOST")]
        host: String,

        /// Port to listen on
        #[arg(long, short, default_value = "3000", env = "PORT")]
        port: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HandlerKind {
    Mechanics,
    Users,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    init_tracing(config.log_format);

    let state = AppState::from_storage(cli.storage, &config).await?;

    match cli.command {
        Command::Lambda { handler: kind } => {
            tracing::info!(handler = ?kind, "Starting Lambda runtime");
            let handler: Arc<dyn RouteHandler> = match kind {
                HandlerKind::Mechanics => state.mechanics,
                HandlerKind::Users => state.users,
            };
            lambda::run(handler).await
        }
        Command::Serve { host, port } => serve(state, &config, &host, port).await,
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` overrides the default filter. JSON output is meant for
/// CloudWatch.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "garage=debug,tower_http=debug".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

async fn serve(state: AppState, config: &Config, host: &str, port: u16) -> Result<()> {
    let app = create_app(state, config.request_timeout());

    // Auto-reload support via listenfd
    let mut listenfd = ListenFd::from_env();
    let listener = match listenfd.take_tcp_listener(0)? {
        // If we are given a tcp listener on listen fd 0, use that one
        Some(listener) => {
            listener.set_nonblocking(true)?;
            TcpListener::from_std(listener)?
        }
        // Otherwise fall back to CLI-specified host:port
        None => {
            let addr = format!("{}:{}", host, port);
            TcpListener::bind(&addr).await?
        }
    };

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down...");
        }
    }
}
