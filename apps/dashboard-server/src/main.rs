use anyhow::Result;
use clap::Parser;
use dashboard_server::app::{self, API_PREFIX, OPENAPI_PATH};
use dashboard_server::config::AppConfig;
use dashboard_server::logging;
use dashboard_service::DashboardServiceModule;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dashboard-server", version, about = "Display Dashboard API server")]
struct Cli {
    /// YAML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Listen port (overrides configuration)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    logging::init(&config.logging)?;
    tracing::info!(config = ?cli.config, "Configuration loaded");

    let module = DashboardServiceModule::default();
    module.init(config.dashboard.clone())?;

    let router = app::build_router(&module, &config.server)?;
    let listener = app::bind(&config.server).await?;
    let addr = listener.local_addr()?;

    tracing::info!(%addr, "Server listening");
    tracing::info!(
        "API documentation available at http://localhost:{}{OPENAPI_PATH}",
        addr.port()
    );
    tracing::info!("API served under {API_PREFIX}");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
