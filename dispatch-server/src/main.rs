use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use dispatch_server::cache::RouteCache;
use dispatch_server::config::{ModelSelection, ServerConfig};
use dispatch_server::network::india_network;
use dispatch_server::risk::{DelayModel, DelayRiskModel, TrainedModel};
use dispatch_server::timetable::Timetable;
use dispatch_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("dispatch_server=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;

    let model = match &config.model {
        ModelSelection::RuleBased => DelayModel::default(),
        ModelSelection::Trained(path) => {
            let trained = TrainedModel::load(path)
                .with_context(|| format!("failed to load delay model from {}", path.display()))?;
            info!(
                path = %path.display(),
                examples = trained.examples(),
                "loaded trained delay model"
            );
            DelayModel::from(trained)
        }
    };

    let timetable = Timetable::load_or_sample(config.timetable_csv.as_deref())
        .context("failed to load timetable")?;

    let route_cache = config
        .route_cache
        .is_enabled()
        .then(|| RouteCache::new(&config.route_cache));

    let graph = india_network();
    info!(
        model = model.name(),
        stations = graph.len(),
        trains = timetable.len(),
        route_cache = route_cache.is_some(),
        rng = ?config.rng,
        "starting dispatch server"
    );

    let state = AppState::new(model, graph, route_cache, timetable, config.rng);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(addr = %config.bind_addr, "listening");
    info!("  GET  /               - Service banner");
    info!("  GET  /health         - Health check");
    info!("  POST /predict_delay  - Delay risk for a train");
    info!("  POST /reroute        - Action and path for a delayed train");
    info!("  GET  /trains         - Sample timetable");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}
