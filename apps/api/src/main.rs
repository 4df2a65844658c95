use calculator_api::{
    config::Config,
    infrastructure::{
        database::pool::connect_store,
        evaluator::meval_evaluator::MevalEvaluator,
        monitoring::{logging::init_tracing, metrics::init_metrics},
    },
    presentation::http::{routes::create_app, state::AppState},
};
use std::sync::Arc;
use std::time::{Duration, Instant};

const METRICS_UPKEEP_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let started_at = Instant::now();
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.log_format);

    let metrics = init_metrics()?;
    let upkeep_handle = metrics.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(METRICS_UPKEEP_INTERVAL);
        loop {
            interval.tick().await;
            upkeep_handle.run_upkeep();
        }
    });

    let store = connect_store(&config).await?;

    let state = AppState {
        config: config.clone(),
        store: store.clone(),
        evaluator: Arc::new(MevalEvaluator::new()),
        metrics,
        started_at,
    };

    let app = create_app(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(environment = %config.environment, "Calculator backend listening on {}", addr);
    tracing::info!("Health dashboard: http://{}/health-ui", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(store) = store {
        store.close().await;
        tracing::info!("Database connection closed");
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, shutting down");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, shutting down");
        }
    }
}
