use anyhow::Context;
use clap::Parser;
use native_docs::cli::Cli;
use native_docs::server::{AppState, create_router};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    native_docs::tracing::init();

    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("Docs root {} is not accessible", cli.root.display()))?;

    tracing::info!("Serving native docs from {}", root.display());

    let state = AppState::new(root, cli.suggest_limit);
    let app = create_router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(cli.bind)
        .await
        .with_context(|| format!("Failed to bind {}", cli.bind))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install ctrl-c handler: {}", e);
        return;
    }
    tracing::info!("Shutting down");
}
