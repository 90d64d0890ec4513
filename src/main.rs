// LangGraph Chat Relay - server entry point

use std::sync::Arc;

use tokio::signal;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use langgraph_relay::adapters::http::{api_router, cors_layer, ChatAppState};
use langgraph_relay::adapters::langgraph::{LangGraphClient, LangGraphConfig};
use langgraph_relay::config::RelayConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = RelayConfig::load()?;

    // RUST_LOG wins over the configured directive when set
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    config.validate()?;

    let state = match config.upstream_secrets() {
        Some((api_key, base_url)) => {
            let mut upstream = LangGraphConfig::new(api_key, base_url);
            if let Some(assistant_id) = &config.assistant_id {
                upstream = upstream.with_assistant_id(assistant_id);
            }
            ChatAppState::new(Arc::new(LangGraphClient::new(upstream)))
        }
        None => {
            warn!(
                "LANGGRAPH_API_KEY or LANGGRAPH_URL not set; \
                 /api/chat will answer 500 until the environment is completed"
            );
            ChatAppState::unconfigured()
        }
    };

    let app = api_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors_layer(&config.cors_origins_list()))
            .into_inner(),
    );

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Relay server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
