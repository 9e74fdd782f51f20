use crate::cli::ServeArgs;
use crate::infra::{build_service, AppState};
use crate::routes::with_referral_routes;
use axum::http::Method;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use hospital_referral::config::AppConfig;
use hospital_referral::error::AppError;
use hospital_referral::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
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

    let referral_service = Arc::new(build_service(&config.referral)?);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
        .allow_origin(Any);

    let app = with_referral_routes(referral_service)
        .layer(Extension(app_state))
        .layer(prometheus_layer)
        .layer(cors);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        hour_policy = ?config.referral.hour_policy,
        seeded = config.referral.snapshot_seed.is_some(),
        "hospital referral service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
