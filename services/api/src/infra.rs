use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use hospital_referral::config::ReferralConfig;
use hospital_referral::error::AppError;
use hospital_referral::referral::{
    FacilityRegistry, KeywordCatalog, ReferralEngine, ReferralService, ScoringConfig,
    SimulatedSnapshotProvider,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Engine over the standard roster, with the keyword catalog from config when set.
pub(crate) fn build_engine(config: &ReferralConfig) -> Result<ReferralEngine, AppError> {
    let catalog = match &config.keywords_path {
        Some(path) => {
            let catalog = KeywordCatalog::from_path(path)?;
            info!(path = %path.display(), "loaded triage keyword catalog");
            catalog
        }
        None => KeywordCatalog::standard(),
    };

    Ok(ReferralEngine::new(
        FacilityRegistry::standard(),
        catalog,
        ScoringConfig::standard(),
    ))
}

pub(crate) fn build_service(
    config: &ReferralConfig,
) -> Result<ReferralService<SimulatedSnapshotProvider>, AppError> {
    let engine = build_engine(config)?;
    let provider = Arc::new(SimulatedSnapshotProvider::new(config.snapshot_seed));
    Ok(ReferralService::new(engine, provider, config.hour_policy))
}
