use serde::{Deserialize, Serialize};

/// Thresholds and weights of the facility suitability rubric.
///
/// Bed and traffic thresholds are exclusive: a facility with exactly
/// `beds_plentiful_above` free beds lands in the sufficient tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub beds_plentiful_above: u32,
    pub beds_plentiful_points: i16,
    pub beds_sufficient_above: u32,
    pub beds_sufficient_points: i16,
    pub beds_limited_points: i16,
    pub er_normal_points: i16,
    pub er_crowded_points: i16,
    pub staffing_high_ratio: f64,
    pub staffing_high_points: i16,
    pub staffing_mid_ratio: f64,
    pub staffing_mid_points: i16,
    pub staffing_low_points: i16,
    pub traffic_quiet_below: u32,
    pub traffic_quiet_points: i16,
    pub traffic_moderate_below: u32,
    pub traffic_moderate_points: i16,
    pub traffic_busy_points: i16,
    /// General-ward occupancy percentage above which the penalty applies.
    pub occupancy_penalty_above_pct: f64,
    pub occupancy_penalty_points: i16,
    pub highly_recommended_min: i16,
    pub recommended_min: i16,
}

impl ScoringConfig {
    pub fn standard() -> Self {
        Self {
            beds_plentiful_above: 50,
            beds_plentiful_points: 30,
            beds_sufficient_above: 20,
            beds_sufficient_points: 20,
            beds_limited_points: 10,
            er_normal_points: 25,
            er_crowded_points: 10,
            staffing_high_ratio: 0.5,
            staffing_high_points: 25,
            staffing_mid_ratio: 0.3,
            staffing_mid_points: 15,
            staffing_low_points: 5,
            traffic_quiet_below: 15,
            traffic_quiet_points: 20,
            traffic_moderate_below: 25,
            traffic_moderate_points: 10,
            traffic_busy_points: 0,
            occupancy_penalty_above_pct: 85.0,
            occupancy_penalty_points: 10,
            highly_recommended_min: 80,
            recommended_min: 60,
        }
    }

    /// Upper bound of the additive factors, before any penalty.
    pub fn max_additive(&self) -> i16 {
        self.beds_plentiful_points
            .max(self.beds_sufficient_points)
            .max(self.beds_limited_points)
            + self.er_normal_points.max(self.er_crowded_points)
            + self
                .staffing_high_points
                .max(self.staffing_mid_points)
                .max(self.staffing_low_points)
            + self
                .traffic_quiet_points
                .max(self.traffic_moderate_points)
                .max(self.traffic_busy_points)
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::standard()
    }
}
