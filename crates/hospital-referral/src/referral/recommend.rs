use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::facility::{Facility, FacilityId, FacilityRegistry, FacilityTier};
use super::hour::HourOfDay;
use super::scoring::{
    PriorityLabel, RecommendationDetails, ScoreComponent, ScoringConfig, ScoringEngine,
};
use super::snapshot::{FacilitySnapshot, SnapshotError};
use super::triage::{KeywordCatalog, SeverityClassifier, SeverityResult, SeverityTier};

fn default_specialty() -> String {
    "Umum".to_string()
}

/// Patient details submitted by the referring clinician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferralRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub complaint: String,
    #[serde(default = "default_specialty")]
    pub specialty: String,
}

/// The request echoed back with the computed severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientEcho {
    pub name: String,
    pub age: u32,
    pub complaint: String,
    pub specialty: String,
    pub severity_code: SeverityTier,
    pub severity_label: &'static str,
}

/// One ranked candidate facility.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRecommendation {
    pub hospital_id: FacilityId,
    pub hospital_name: String,
    pub hospital_tier: FacilityTier,
    pub address: String,
    pub score: i16,
    pub priority: PriorityLabel,
    pub reasons: Vec<String>,
    pub components: Vec<ScoreComponent>,
    pub details: RecommendationDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationReport {
    pub patient: PatientEcho,
    pub recommendations: Vec<ScoredRecommendation>,
    pub timestamp: DateTime<Utc>,
}

impl RecommendationReport {
    pub fn best(&self) -> Option<&ScoredRecommendation> {
        self.recommendations.first()
    }
}

/// Classify, score every candidate, sort best-first.
#[derive(Debug, Clone)]
pub struct ReferralEngine {
    registry: FacilityRegistry,
    classifier: SeverityClassifier,
    scoring: ScoringEngine,
}

impl ReferralEngine {
    pub fn new(
        registry: FacilityRegistry,
        catalog: KeywordCatalog,
        scoring: ScoringConfig,
    ) -> Self {
        Self {
            registry,
            classifier: SeverityClassifier::new(catalog),
            scoring: ScoringEngine::new(scoring),
        }
    }

    /// Bandung roster with the built-in keyword catalog and rubric.
    pub fn standard() -> Self {
        Self::new(
            FacilityRegistry::standard(),
            KeywordCatalog::standard(),
            ScoringConfig::standard(),
        )
    }

    pub fn registry(&self) -> &FacilityRegistry {
        &self.registry
    }

    pub fn classifier(&self) -> &SeverityClassifier {
        &self.classifier
    }

    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    pub fn classify(&self, complaint: &str) -> SeverityResult {
        self.classifier.classify(complaint)
    }

    pub fn recommend(
        &self,
        request: &ReferralRequest,
        snapshots: &[FacilitySnapshot],
        hour: HourOfDay,
        generated_at: DateTime<Utc>,
    ) -> Result<RecommendationReport, SnapshotError> {
        let severity = self.classify(&request.complaint);
        let recommendations = self.rank(snapshots, hour)?;

        info!(
            severity = severity.tier.code(),
            candidates = recommendations.len(),
            best = recommendations
                .first()
                .map(|best| best.hospital_id.as_str())
                .unwrap_or("none"),
            "referral recommendation assembled"
        );

        Ok(RecommendationReport {
            patient: PatientEcho {
                name: request.name.clone(),
                age: request.age,
                complaint: request.complaint.clone(),
                specialty: request.specialty.clone(),
                severity_code: severity.tier,
                severity_label: severity.label,
            },
            recommendations,
            timestamp: generated_at,
        })
    }

    /// Scores and orders every snapshot. Equal scores fall back to ascending facility id.
    ///
    /// Only facilities with a snapshot are candidates: a registered facility missing from
    /// `snapshots` is left out of the ranking rather than rejected. Callers that need the
    /// whole network covered get that guarantee from their `SnapshotProvider`, as
    /// `StaticSnapshotProvider` does with `ProviderError::Missing`.
    pub fn rank(
        &self,
        snapshots: &[FacilitySnapshot],
        hour: HourOfDay,
    ) -> Result<Vec<ScoredRecommendation>, SnapshotError> {
        let facilities = self.validate(snapshots)?;

        let mut recommendations: Vec<ScoredRecommendation> = snapshots
            .iter()
            .zip(facilities)
            .map(|(snapshot, facility)| {
                let scored = self.scoring.score(snapshot, hour);
                ScoredRecommendation {
                    hospital_id: facility.id.clone(),
                    hospital_name: facility.name.clone(),
                    hospital_tier: facility.tier,
                    address: facility.address.clone(),
                    score: scored.total,
                    priority: self.scoring.priority(scored.total),
                    reasons: scored.reasons,
                    components: scored.components,
                    details: scored.details,
                }
            })
            .collect();

        recommendations.sort_by(|left, right| {
            right
                .score
                .cmp(&left.score)
                .then_with(|| left.hospital_id.cmp(&right.hospital_id))
        });

        Ok(recommendations)
    }

    fn validate<'a>(
        &'a self,
        snapshots: &[FacilitySnapshot],
    ) -> Result<Vec<&'a Facility>, SnapshotError> {
        let mut seen = BTreeSet::new();
        let mut facilities = Vec::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let facility = self.registry.get(&snapshot.facility_id).ok_or_else(|| {
                SnapshotError::UnknownFacility {
                    facility: snapshot.facility_id.clone(),
                }
            })?;
            if !seen.insert(&snapshot.facility_id) {
                return Err(SnapshotError::DuplicateFacility {
                    facility: snapshot.facility_id.clone(),
                });
            }
            snapshot.validate()?;
            facilities.push(facility);
        }

        Ok(facilities)
    }
}

impl Default for ReferralEngine {
    fn default() -> Self {
        Self::standard()
    }
}
