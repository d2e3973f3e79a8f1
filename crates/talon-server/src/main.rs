//! Talon HTTP server entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use talon::{Config, Corpus, EmbeddingCache, GenaiProvider, MatchEngine};
use talon_server::gateway::{AppState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        embedding_dim = config.embedding_dim,
        "Talon starting"
    );

    let provider = Arc::new(GenaiProvider::from_config(&config));
    let cache = Arc::new(EmbeddingCache::new(
        Arc::clone(&provider),
        config.embedding_dim,
    ));

    let cache_snapshot = config.cache_snapshot_path();
    if let Err(e) = cache.load(&cache_snapshot) {
        tracing::warn!(error = %e, "Failed to hydrate embedding cache, starting empty");
    }

    let corpus = Arc::new(
        Corpus::load_or_build(&config.corpus_snapshot_path(), &config.profiles_path, &cache).await,
    );
    tracing::info!(candidates = corpus.len(), "Corpus ready");

    // A fresh build may have added many embeddings; snapshot them now rather
    // than only at shutdown.
    if let Err(e) = cache.persist(&cache_snapshot) {
        tracing::warn!(error = %e, "Failed to persist embedding cache after startup");
    }

    let engine = Arc::new(MatchEngine::new(
        Arc::clone(&provider),
        Arc::clone(&cache),
        corpus,
        config.chat_top_k,
    ));

    let state = AppState::new(engine, config.recommend_top_k, config.max_session_turns);
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Persisting embedding cache before exit");
    if let Err(e) = cache.persist(&cache_snapshot) {
        tracing::error!(error = %e, "Failed to persist embedding cache");
    }

    tracing::info!("Talon shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("TALON_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/health", port);

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("failed to build runtime");

    rt.block_on(async {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
            .expect("failed to build client");

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
