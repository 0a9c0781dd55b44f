pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;

use shared::config::{get_static_dir, load_config};
use shared::llm::{LlmProvider, OpenAiProvider};
use shared::state::AppState;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;

    let api_key = config.llm.api_key().unwrap_or_else(|| {
        tracing::error!(
            "{} is not set; chat requests will fail until it is provided",
            config.llm.api_key_env
        );
        String::new()
    });

    let provider = OpenAiProvider::new_with_endpoint(
        config.llm.api_base.clone(),
        api_key,
        config.llm.model.clone(),
        config.llm.temperature,
        config.llm.max_tokens,
    );
    tracing::info!(
        "LLM provider: {} at {} (model: {})",
        provider.provider_name(),
        config.llm.api_base,
        provider.model()
    );

    let state = AppState::new(Arc::new(provider), &config.llm.system_prompt);
    let static_dir = get_static_dir(&config);
    tracing::info!("Serving static files from {}", static_dir.display());

    let app = routes::configure_routes(state, &static_dir);

    let port = config.server.port;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server listening on http://{}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
