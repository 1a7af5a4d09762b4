use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryTrendStore};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use studio_desk::config::AppConfig;
use studio_desk::error::AppError;
use studio_desk::telemetry;
use studio_desk::workflows::trends::{TrendAggregationJob, TrendSampleImporter};
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryTrendStore::default());
    if let Some(path) = args.samples.take() {
        let samples = TrendSampleImporter::from_path(&path)?;
        info!(path = %path.display(), count = samples.len(), "loaded trend samples");
        store.load_samples(samples);
    }
    let job = Arc::new(TrendAggregationJob::new(
        store.clone(),
        store,
        config.trends.platforms.clone(),
    ));

    let app = with_workflow_routes(job)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "studio desk api ready");

    axum::serve(listener, app).await?;
    Ok(())
}
