mod api;
mod middleware;
mod sink;

use std::sync::Arc;

use skureg_core::{executable_dir, resolve_out_root, DirectoryStore};
use tracing_subscriber::EnvFilter;

use crate::{api::build_app, api::AppState, sink::LoggingSink};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = skureg_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cwd = std::env::current_dir()?;
    let store = match resolve_out_root(
        config.out_root.as_deref(),
        &cwd,
        executable_dir().as_deref(),
    ) {
        Ok(root) => {
            tracing::info!(root = %root.display(), "serving description records");
            Some(DirectoryStore::new(root))
        }
        Err(e) => {
            tracing::warn!(error = %e, "description records disabled");
            None
        }
    };

    let state = AppState {
        store: store.map(|s| Arc::new(s) as api::SharedStore),
        sink: Arc::new(LoggingSink),
    };
    let app = build_app(state, config.static_dir.as_deref());

    tracing::info!(env = %config.env, addr = %config.bind_addr, "starting server");
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
