//! Lifestyle dashboard entry point.

use std::net::SocketAddr;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lifestyle_dashboard::api::create_app;
use lifestyle_dashboard::client::ApiClient;
use lifestyle_dashboard::config::{get_base_url, Config};
use lifestyle_dashboard::metrics;
use lifestyle_dashboard::ui::{ConnectivityPanel, Phase};
use lifestyle_dashboard::utils::shutdown_signal;

/// Lifestyle dashboard API service and connectivity checker.
#[derive(Parser, Debug)]
#[command(name = "lifestyle-dashboard")]
#[command(about = "Serve the dashboard API or check connectivity to it")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the API server (default).
    Serve {
        /// Port to bind; overrides PORT.
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one connectivity check against the API and print the result.
    Check {
        /// Base URL to check; overrides API_URL.
        #[arg(long)]
        url: Option<String>,
    },

    /// Check configuration validity.
    CheckConfig,
}

fn init_logging(verbose: bool, json: bool) {
    let filter = if verbose {
        EnvFilter::new("lifestyle_dashboard=debug,info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    init_logging(args.verbose, args.json);
    metrics::init_metrics();

    match args.command {
        Some(Command::Serve { port }) => cmd_serve(port).await,
        Some(Command::Check { url }) => cmd_check(url).await,
        Some(Command::CheckConfig) => cmd_check_config(),
        None => cmd_serve(None).await,
    }
}

fn load_config() -> anyhow::Result<Config> {
    let config = Config::load().map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    Ok(config)
}

/// Run the API server until a shutdown signal arrives.
async fn cmd_serve(port_override: Option<u16>) -> anyhow::Result<ExitCode> {
    info!("Loading configuration...");
    let mut config = load_config()?;
    if let Some(port) = port_override {
        config.port = port;
    }

    if config.metrics_enabled {
        metrics::install_exporter(config.metrics_port)?;
    }

    let app = create_app(&config)?;

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);
    info!("CORS origin: {}", config.frontend_url);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(ExitCode::SUCCESS)
}

/// Trigger one check through the dashboard panel and print each state.
async fn cmd_check(url_override: Option<String>) -> anyhow::Result<ExitCode> {
    let mut config = load_config()?;
    if let Some(url) = url_override {
        config.api_url = url;
    }

    let client = ApiClient::new(&config)?;
    let panel = ConnectivityPanel::new(Arc::new(client));

    let handle = panel.trigger();
    print!("{}", panel.render());
    handle.await?;
    println!("----------------------------------------------------------------------");
    print!("{}", panel.render());

    if panel.state().phase() == Phase::Success {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

/// Check configuration validity.
fn cmd_check_config() -> anyhow::Result<ExitCode> {
    println!("======================================================================");
    println!("LIFESTYLE DASHBOARD - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match Config::load() {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  API URL: {}", config.api_url);
    println!("  API URL (environment): {}", get_base_url());
    println!("  Port: {}", config.port);
    println!("  Frontend URL: {}", config.frontend_url);
    println!("  API Message: {}", config.api_message);
    println!(
        "  Metrics: {}",
        if config.metrics_enabled {
            format!("Enabled (port {})", config.metrics_port)
        } else {
            "Disabled".to_string()
        }
    );
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(ExitCode::SUCCESS)
}
