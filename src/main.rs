mod cache;
mod config;
mod error;
mod extract;
mod handlers;
mod links;
mod metrics;
mod mock;
mod models;
mod rate_limit;
mod routes;
mod state;
mod thumbnail;
mod tools;

use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Args;
use crate::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // parse cli arguments
    let args = Args::parse();

    let state = match AppState::from_args(&args) {
        Ok(state) => Arc::new(state),
        Err(e) => {
            tracing::error!(error = %e, "failed to build HTTP client");
            std::process::exit(1);
        }
    };

    tokio::spawn(rate_limit::usage_pruner(
        state.limiter.store(),
        args.window(),
        args.prune_interval(),
    ));
    tokio::spawn(cache::cache_sweeper(
        Arc::clone(&state.thumbnails),
        args.cache_ttl().max(Duration::from_secs(60)),
    ));

    let app = routes::app(state.clone());

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind");

    tracing::info!(port = args.port, "toolbox-edge listening");
    tracing::info!(
        limit = state.limiter.limit(),
        window_secs = args.window_secs,
        "usage limit per tool and client IP"
    );
    tracing::info!(base = %args.thumbnail_base, cache_ttl_secs = args.cache_ttl, "thumbnail proxy");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Failed to start server");
}
