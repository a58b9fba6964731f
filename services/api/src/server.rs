use crate::cli::ServeArgs;
use crate::infra::{AppState, InMemoryAdoptionStore, InMemoryReviewNotifier};
use crate::routes::with_adoption_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use shelter_hub::adoption::{load_sample_data, AdoptionService};
use shelter_hub::config::AppConfig;
use shelter_hub::error::AppError;
use shelter_hub::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry, config.environment)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let store = Arc::new(InMemoryAdoptionStore::default());
    let notifier = Arc::new(InMemoryReviewNotifier::default());
    let adoption_service = Arc::new(AdoptionService::new(store, notifier));

    if config.seed.demo_data {
        let summary = load_sample_data(&adoption_service)?;
        info!(
            shelters = summary.shelters.len(),
            pets = summary.pets.len(),
            application = %summary.application.id,
            "seeded demo adoption records"
        );
    }

    let app = with_adoption_routes(adoption_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "adoption service ready");

    axum::serve(listener, app).await?;
    Ok(())
}
