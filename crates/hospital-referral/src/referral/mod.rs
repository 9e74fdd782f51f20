//! Hospital referral decision engine: complaint triage, facility scoring, and ranking.

pub mod facility;
pub mod hour;
pub mod overview;
pub mod provider;
pub mod recommend;
pub mod router;
pub mod scoring;
pub mod service;
pub mod snapshot;
pub mod triage;

#[cfg(test)]
mod tests;

pub use facility::{Facility, FacilityId, FacilityRegistry, FacilityTier};
pub use hour::{HourError, HourOfDay, HourPolicy};
pub use overview::{FacilityOccupancy, NetworkOverview};
pub use provider::{
    ProviderError, SimulatedSnapshotProvider, SnapshotProvider, StaticSnapshotProvider,
};
pub use recommend::{
    PatientEcho, RecommendationReport, ReferralEngine, ReferralRequest, ScoredRecommendation,
};
pub use router::referral_router;
pub use scoring::{
    FacilityScore, PriorityLabel, RecommendationDetails, ScoreComponent, ScoreFactor,
    ScoringConfig, ScoringEngine,
};
pub use service::{ReferralService, ReferralServiceError};
pub use snapshot::{
    BedCategory, BedCategorySnapshot, BedSnapshot, EmergencyRoomSnapshot, ErStatus,
    FacilitySnapshot, SnapshotError, StaffingSnapshot,
};
pub use triage::{
    CatalogError, KeywordCatalog, SeverityClassifier, SeverityResult, SeverityTier, TierKeywords,
};
