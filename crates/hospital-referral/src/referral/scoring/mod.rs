mod config;
mod policy;
mod rules;

pub use config::ScoringConfig;
pub use policy::PriorityLabel;

use super::hour::HourOfDay;
use super::snapshot::FacilitySnapshot;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Stateless evaluator that applies the suitability rubric to a snapshot.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    pub fn score(&self, snapshot: &FacilitySnapshot, hour: HourOfDay) -> FacilityScore {
        let sheet = rules::score_snapshot(snapshot, hour, &self.config);

        debug!(
            facility = %snapshot.facility_id,
            %hour,
            total = sheet.total,
            "scored facility snapshot"
        );

        FacilityScore {
            total: sheet.total,
            reasons: sheet
                .components
                .iter()
                .map(|component| component.notes.clone())
                .collect(),
            components: sheet.components,
            details: sheet.details,
        }
    }

    pub fn priority(&self, score: i16) -> PriorityLabel {
        policy::assign_priority(score, &self.config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    BedAvailability,
    EmergencyRoom,
    Staffing,
    HourlyTraffic,
    OccupancyPenalty,
}

/// Discrete contribution to a facility score, kept for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub score: i16,
    pub notes: String,
}

/// Snapshot figures echoed back alongside a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDetails {
    pub beds_available: u32,
    pub er_waiting: u32,
    pub doctors_on_duty: u32,
    pub specialists_available: u32,
    /// General-ward occupancy in percent, one decimal.
    pub occupancy_rate: f64,
    pub current_traffic: u32,
    pub estimated_wait_minutes: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityScore {
    pub total: i16,
    pub reasons: Vec<String>,
    pub components: Vec<ScoreComponent>,
    pub details: RecommendationDetails,
}

impl FacilityScore {
    /// Sum of the non-penalty factors.
    pub fn additive_total(&self) -> i16 {
        self.components
            .iter()
            .filter(|component| component.factor != ScoreFactor::OccupancyPenalty)
            .map(|component| component.score)
            .sum()
    }
}
