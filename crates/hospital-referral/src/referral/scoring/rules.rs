use super::super::hour::HourOfDay;
use super::super::snapshot::{ErStatus, FacilitySnapshot};
use super::config::ScoringConfig;
use super::{RecommendationDetails, ScoreComponent, ScoreFactor};

pub(crate) struct ScoreSheet {
    pub components: Vec<ScoreComponent>,
    pub total: i16,
    pub details: RecommendationDetails,
}

impl ScoreSheet {
    fn push(&mut self, factor: ScoreFactor, score: i16, notes: String) {
        self.total += score;
        self.components.push(ScoreComponent {
            factor,
            score,
            notes,
        });
    }
}

pub(crate) fn score_snapshot(
    snapshot: &FacilitySnapshot,
    hour: HourOfDay,
    config: &ScoringConfig,
) -> ScoreSheet {
    let beds_available = snapshot.beds.general_available();
    let current_traffic = snapshot.traffic_at(hour);
    let occupancy_pct = snapshot.beds.general().occupancy_pct();

    let mut sheet = ScoreSheet {
        components: Vec::with_capacity(5),
        total: 0,
        details: RecommendationDetails {
            beds_available,
            er_waiting: snapshot.emergency.waiting,
            doctors_on_duty: snapshot.staffing.doctors_on_duty,
            specialists_available: snapshot.staffing.specialists_available,
            occupancy_rate: occupancy_pct.map(round_one_decimal).unwrap_or(0.0),
            current_traffic,
            estimated_wait_minutes: snapshot.emergency.avg_wait_minutes,
        },
    };

    if beds_available > config.beds_plentiful_above {
        sheet.push(
            ScoreFactor::BedAvailability,
            config.beds_plentiful_points,
            format!("beds available: {beds_available}"),
        );
    } else if beds_available > config.beds_sufficient_above {
        sheet.push(
            ScoreFactor::BedAvailability,
            config.beds_sufficient_points,
            format!("beds sufficient: {beds_available}"),
        );
    } else {
        sheet.push(
            ScoreFactor::BedAvailability,
            config.beds_limited_points,
            format!("beds limited: {beds_available}"),
        );
    }

    match snapshot.emergency.status {
        ErStatus::Normal => sheet.push(
            ScoreFactor::EmergencyRoom,
            config.er_normal_points,
            "ER not crowded".to_string(),
        ),
        ErStatus::Crowded => sheet.push(
            ScoreFactor::EmergencyRoom,
            config.er_crowded_points,
            "ER crowded".to_string(),
        ),
    }

    // An empty roster has no ratio and falls through to the lowest tier.
    let on_duty = snapshot.staffing.doctors_on_duty;
    match snapshot.staffing.doctor_ratio() {
        Some(ratio) if ratio > config.staffing_high_ratio => sheet.push(
            ScoreFactor::Staffing,
            config.staffing_high_points,
            format!("doctors available: {on_duty} on duty"),
        ),
        Some(ratio) if ratio > config.staffing_mid_ratio => sheet.push(
            ScoreFactor::Staffing,
            config.staffing_mid_points,
            format!("doctors sufficient: {on_duty} on duty"),
        ),
        _ => sheet.push(
            ScoreFactor::Staffing,
            config.staffing_low_points,
            format!("doctors limited: {on_duty} on duty"),
        ),
    }

    if current_traffic < config.traffic_quiet_below {
        sheet.push(
            ScoreFactor::HourlyTraffic,
            config.traffic_quiet_points,
            "quiet hour".to_string(),
        );
    } else if current_traffic < config.traffic_moderate_below {
        sheet.push(
            ScoreFactor::HourlyTraffic,
            config.traffic_moderate_points,
            "moderately quiet hour".to_string(),
        );
    } else {
        sheet.push(
            ScoreFactor::HourlyTraffic,
            config.traffic_busy_points,
            "busy hour".to_string(),
        );
    }

    if let Some(pct) = occupancy_pct {
        if pct > config.occupancy_penalty_above_pct {
            sheet.push(
                ScoreFactor::OccupancyPenalty,
                -config.occupancy_penalty_points,
                format!("warning: high occupancy ({:.1}%)", pct),
            );
        }
    }

    sheet
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
