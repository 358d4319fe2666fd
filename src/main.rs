//! Billing Relay server binary.

use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use billing_relay::adapters::{app_router, AuthorizeNetConfig, AuthorizeNetGateway, BillingAppState};
use billing_relay::config::{AppConfig, LogFormat, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    // Logging is configured from the config, so failures here go to stderr
    let config = match AppConfig::load_validated() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("billing-relay: configuration error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.server);

    if let Err(err) = serve(config).await {
        tracing::error!(error = %err, "Server terminated");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn init_tracing(server: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&server.log_level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match server.log_format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

async fn serve(config: AppConfig) -> std::io::Result<()> {
    let addr = config
        .server
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let gateway = AuthorizeNetGateway::new(AuthorizeNetConfig::from_gateway_config(&config.gateway));
    let state = BillingAppState::new(Arc::new(gateway), config.hosted_page.to_settings());
    let app = app_router(state, &config.server);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        address = %listener.local_addr()?,
        gateway_environment = %config.gateway.environment,
        gateway_endpoint = config.gateway.endpoint_url(),
        "Server running"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
