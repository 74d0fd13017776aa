use clap::Parser;
use reelbites::{
    cli::{Cli, Commands},
    config::Settings,
    gateway::GatewayClient,
    web::{handlers::AppState, routes},
    Error, Result,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    // Silently ignore if file doesn't exist
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,reelbites=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Load configuration
    let settings = Settings::from_env()?;
    settings.validate()?;

    // Handle commands
    match cli.command {
        Commands::Serve { port, host } => {
            serve(settings, port, host).await?;
        }
        Commands::Search { query, page } => {
            reelbites::cli::commands::search(&settings, &query, page).await?;
        }
        Commands::Recipe { id } => {
            reelbites::cli::commands::recipe(&settings, id).await?;
        }
    }

    Ok(())
}

async fn serve(mut settings: Settings, port: Option<u16>, host: Option<String>) -> Result<()> {
    // Override settings with CLI arguments
    if let Some(port) = port {
        settings.server.port = port;
    }
    if let Some(host) = host {
        settings.server.host = host;
    }

    info!("Starting Reelbites server");
    info!("Gateway: {}", settings.gateway.base_url);
    info!("Server: {}:{}", settings.server.host, settings.server.port);

    // Initialize the gateway client
    let gateway = Arc::new(GatewayClient::new(&settings.gateway)?);

    // Create application state
    let state = AppState {
        gateway,
        settings: settings.clone(),
    };

    // Create router with middleware
    let app = routes::create_router(state, &settings);

    // Start server
    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| Error::Internal(format!("Failed to bind to {addr}: {e}")))?;

    println!("\n========================================");
    println!("Reelbites");
    println!("========================================");
    println!("Status: Running");
    println!("Address: http://{addr}");
    println!("Gateway: {}", settings.gateway.base_url);
    println!("\nPages:");
    println!("  GET  /browse");
    println!("  GET  /recipes/:id");
    println!("  GET  /login");
    println!("\nPress Ctrl+C to stop");
    println!("========================================\n");

    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::Internal(format!("Server error: {e}")))?;

    info!("Shutting down...");
    Ok(())
}
