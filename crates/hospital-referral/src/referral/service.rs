use std::sync::Arc;

use chrono::{Local, Timelike, Utc};

use super::facility::Facility;
use super::hour::{HourError, HourOfDay, HourPolicy};
use super::overview::NetworkOverview;
use super::provider::{ProviderError, SnapshotProvider};
use super::recommend::{RecommendationReport, ReferralEngine, ReferralRequest};
use super::snapshot::{FacilitySnapshot, SnapshotError};
use super::triage::SeverityResult;

/// Service composing the engine with a live snapshot source.
pub struct ReferralService<P> {
    engine: Arc<ReferralEngine>,
    provider: Arc<P>,
    hour_policy: HourPolicy,
}

impl<P> ReferralService<P>
where
    P: SnapshotProvider + 'static,
{
    pub fn new(engine: ReferralEngine, provider: Arc<P>, hour_policy: HourPolicy) -> Self {
        Self {
            engine: Arc::new(engine),
            provider,
            hour_policy,
        }
    }

    pub fn engine(&self) -> &ReferralEngine {
        &self.engine
    }

    /// Recommend facilities at the given hour, or the local wall-clock hour when absent.
    pub fn recommend(
        &self,
        request: &ReferralRequest,
        hour: Option<u32>,
    ) -> Result<RecommendationReport, ReferralServiceError> {
        let hour = match hour {
            Some(raw) => self.hour_policy.resolve(raw)?,
            None => current_hour(),
        };

        let snapshots = self.provider.snapshots(self.engine.registry())?;
        let report = self.engine.recommend(request, &snapshots, hour, Utc::now())?;
        Ok(report)
    }

    pub fn classify(&self, complaint: &str) -> SeverityResult {
        self.engine.classify(complaint)
    }

    pub fn hospitals(&self) -> &[Facility] {
        self.engine.registry().facilities()
    }

    /// Current snapshots for every registered facility, validated before they are served.
    pub fn snapshots(&self) -> Result<Vec<FacilitySnapshot>, ReferralServiceError> {
        let snapshots = self.provider.snapshots(self.engine.registry())?;
        for snapshot in &snapshots {
            snapshot.validate()?;
        }
        Ok(snapshots)
    }

    pub fn overview(&self) -> Result<NetworkOverview, ReferralServiceError> {
        let snapshots = self.provider.snapshots(self.engine.registry())?;
        Ok(NetworkOverview::from_snapshots(
            self.engine.registry(),
            &snapshots,
        ))
    }
}

fn current_hour() -> HourOfDay {
    HourOfDay::wrapping(Local::now().hour())
}

/// Error raised by the referral service.
#[derive(Debug, thiserror::Error)]
pub enum ReferralServiceError {
    #[error(transparent)]
    Hour(#[from] HourError),
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
    #[error(transparent)]
    Provider(#[from] ProviderError),
}
