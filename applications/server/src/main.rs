/// Roster Server - REST API over in-memory user records
use axum::{extract::Request, ServiceExt};
use clap::{Parser, Subcommand};
use roster_server::{config::ServerConfig, create_app, state::AppState};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management REST API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server (default)
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Port to listen on, overriding config and environment
        #[arg(short, long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "roster_server=info,roster_storage=info,tower_http=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Serve {
        config: None,
        port: None,
    }) {
        Commands::Serve { config, port } => {
            serve(config, port).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<PathBuf>, port: Option<u16>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path.as_deref())?.with_port_override(port);
    config.validate()?;

    let addr = config.socket_addr()?;

    // The store lives for the lifetime of the process
    let app = create_app(AppState::seeded());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    let port = listener.local_addr()?.port();

    tracing::info!("Server is running on port {}", port);
    tracing::info!("Health check: http://localhost:{}/health", port);
    tracing::info!("API endpoint: http://localhost:{}/api/users", port);

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on SIGINT or SIGTERM
#[cfg(unix)]
async fn shutdown_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let (Ok(mut sigterm), Ok(mut sigint)) = (
        signal(SignalKind::terminate()),
        signal(SignalKind::interrupt()),
    ) else {
        tracing::warn!("Failed to install signal handlers; graceful shutdown disabled");
        return std::future::pending().await;
    };

    tokio::select! {
        _ = sigterm.recv() => tracing::info!("Received SIGTERM"),
        _ = sigint.recv() => tracing::info!("Received SIGINT"),
    }
}

/// Resolves on Ctrl+C
#[cfg(not(unix))]
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::warn!("Failed to install Ctrl+C handler; graceful shutdown disabled");
        return std::future::pending().await;
    }
    tracing::info!("Received Ctrl+C");
}
