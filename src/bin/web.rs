use clap::Parser;
use term_stats::api::create_router;
use term_stats::api::handlers::AppState;
use term_stats::config::ServerArgs;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("term_stats=info,web=info,tower_http=info")),
        )
        .init();

    let args = ServerArgs::parse();
    let state = AppState::from(&args);
    tracing::info!(
        limit = state.analyzer.limit,
        word_class = ?state.analyzer.word_class,
        decoding = ?state.analyzer.decoding,
        max_upload_bytes = state.max_upload_bytes,
        static_dir = %state.static_dir.display(),
        "configuration loaded"
    );

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(args.addr).await?;
    tracing::info!("server listening on {} ...", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
