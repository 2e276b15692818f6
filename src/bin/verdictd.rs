//! verdictd - fake news prediction web form.
//!
//! Loads the classifier once, then serves the form over HTTP until killed.

use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use tracing::info;

use newsverdict::{Config, Error, Pipeline, Secrets};

/// Fake news prediction web server.
#[derive(Parser)]
#[command(name = "verdictd")]
#[command(version = newsverdict::version::version_str())]
#[command(about = "Fake news prediction web form")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Listen address, overriding the configured one.
    #[arg(short, long, env = "VERDICTD_ADDRESS")]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;

    let address = args.address.unwrap_or_else(|| config.server.address.clone());
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| Error::Configuration(format!("Invalid address {address:?}: {e}")))?;

    // Missing keys and model files abort here, before the listener binds.
    let pipeline = Pipeline::builder()
        .remote_services(&config, &secrets)?
        .local_classifier(&config)?
        .build()?;

    let app = newsverdict::server::router(Arc::new(pipeline));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(version = newsverdict::version_string(), %addr, "verdictd listening");

    axum::serve(listener, app).await?;

    Ok(())
}
