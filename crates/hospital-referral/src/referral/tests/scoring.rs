use super::common::*;
use crate::referral::{ErStatus, ScoreFactor, ScoringConfig, ScoringEngine};

fn bed_points(engine: &ScoringEngine, available_regular: u32) -> i16 {
    let snapshot = with_beds(snapshot("RS001"), (0, 0), (100, 100 - available_regular));
    engine
        .score(&snapshot, hour(3))
        .components
        .iter()
        .find(|component| component.factor == ScoreFactor::BedAvailability)
        .map(|component| component.score)
        .expect("bed component present")
}

#[test]
fn baseline_snapshot_scores_every_factor() {
    let engine = ScoringEngine::default();

    let scored = engine.score(&snapshot("RS001"), hour(3));

    assert_eq!(scored.total, 80);
    assert_eq!(
        scored.reasons,
        vec![
            "beds sufficient: 40".to_string(),
            "ER not crowded".to_string(),
            "doctors sufficient: 20 on duty".to_string(),
            "quiet hour".to_string(),
        ]
    );
    assert_eq!(scored.details.beds_available, 40);
    assert_eq!(scored.details.er_waiting, 8);
    assert_eq!(scored.details.doctors_on_duty, 20);
    assert_eq!(scored.details.specialists_available, 9);
    assert_eq!(scored.details.occupancy_rate, 66.7);
    assert_eq!(scored.details.current_traffic, 10);
    assert_eq!(scored.details.estimated_wait_minutes, 35);
}

#[test]
fn bed_thresholds_are_exclusive() {
    let engine = ScoringEngine::default();

    assert_eq!(bed_points(&engine, 51), 30);
    assert_eq!(bed_points(&engine, 50), 20);
    assert_eq!(bed_points(&engine, 21), 20);
    assert_eq!(bed_points(&engine, 20), 10);
}

#[test]
fn bed_score_never_decreases_with_more_beds() {
    let engine = ScoringEngine::default();

    let points: Vec<i16> = (15..=55).map(|beds| bed_points(&engine, beds)).collect();

    assert!(points.windows(2).all(|pair| pair[0] <= pair[1]));
    assert!(points.first() < points.last());
}

#[test]
fn crowded_er_earns_reduced_points() {
    let engine = ScoringEngine::default();
    let mut crowded = snapshot("RS001");
    crowded.emergency.status = ErStatus::Crowded;

    let scored = engine.score(&crowded, hour(3));

    assert_eq!(scored.total, 65);
    assert!(scored.reasons.contains(&"ER crowded".to_string()));
}

#[test]
fn staffing_tiers_follow_duty_ratio() {
    let engine = ScoringEngine::default();
    let staffing = |on_duty, total| {
        let scored = engine.score(&with_doctors(snapshot("RS001"), on_duty, total), hour(3));
        let component = scored
            .components
            .into_iter()
            .find(|component| component.factor == ScoreFactor::Staffing)
            .expect("staffing component present");
        (component.score, component.notes)
    };

    assert_eq!(
        staffing(31, 60),
        (25, "doctors available: 31 on duty".to_string())
    );
    assert_eq!(
        staffing(30, 60),
        (15, "doctors sufficient: 30 on duty".to_string())
    );
    assert_eq!(
        staffing(3, 10),
        (5, "doctors limited: 3 on duty".to_string())
    );
}

#[test]
fn empty_roster_falls_to_lowest_staffing_tier() {
    let engine = ScoringEngine::default();

    let scored = engine.score(&with_doctors(snapshot("RS001"), 0, 0), hour(3));

    assert_eq!(scored.total, 70);
    assert!(scored
        .reasons
        .contains(&"doctors limited: 0 on duty".to_string()));
}

#[test]
fn traffic_is_read_at_the_requested_hour() {
    let engine = ScoringEngine::default();
    let mut busy_morning = snapshot("RS001");
    busy_morning.hourly_traffic[3] = 14;
    busy_morning.hourly_traffic[9] = 30;
    busy_morning.hourly_traffic[12] = 15;
    busy_morning.hourly_traffic[13] = 24;
    busy_morning.hourly_traffic[14] = 25;

    let traffic = |at: u8| {
        let scored = engine.score(&busy_morning, hour(at));
        let component = scored
            .components
            .into_iter()
            .find(|component| component.factor == ScoreFactor::HourlyTraffic)
            .expect("traffic component present");
        (component.score, component.notes, scored.details.current_traffic)
    };

    assert_eq!(traffic(3), (20, "quiet hour".to_string(), 14));
    assert_eq!(traffic(9), (0, "busy hour".to_string(), 30));
    assert_eq!(traffic(12), (10, "moderately quiet hour".to_string(), 15));
    assert_eq!(traffic(13), (10, "moderately quiet hour".to_string(), 24));
    assert_eq!(traffic(14), (0, "busy hour".to_string(), 25));
}

#[test]
fn high_occupancy_subtracts_penalty_without_floor() {
    let engine = ScoringEngine::default();
    let mut strained = with_beds(snapshot("RS001"), (20, 19), (100, 90));
    strained.emergency.status = ErStatus::Crowded;
    strained.hourly_traffic = vec![40; 24];
    let strained = with_doctors(strained, 0, 0);

    let scored = engine.score(&strained, hour(3));

    assert_eq!(scored.additive_total(), 25);
    assert_eq!(scored.total, 15);
    assert_eq!(scored.details.occupancy_rate, 90.8);
    let warning = scored.reasons.last().expect("warning reason");
    assert!(warning.starts_with("warning: high occupancy"));
    assert!(scored
        .components
        .iter()
        .any(|component| component.factor == ScoreFactor::OccupancyPenalty
            && component.score == -10));
}

#[test]
fn occupancy_at_threshold_is_not_penalised() {
    let engine = ScoringEngine::default();
    let at_threshold = with_beds(snapshot("RS001"), (0, 0), (100, 85));

    let scored = engine.score(&at_threshold, hour(3));

    assert!(scored
        .components
        .iter()
        .all(|component| component.factor != ScoreFactor::OccupancyPenalty));
}

#[test]
fn wards_without_capacity_skip_the_penalty() {
    let engine = ScoringEngine::default();
    let closed = with_beds(snapshot("RS001"), (0, 0), (0, 0));

    let scored = engine.score(&closed, hour(3));

    assert_eq!(scored.details.beds_available, 0);
    assert_eq!(scored.details.occupancy_rate, 0.0);
    assert_eq!(scored.total, scored.additive_total());
    assert_eq!(scored.reasons[0], "beds limited: 0");
}

#[test]
fn additive_factors_never_exceed_one_hundred() {
    let config = ScoringConfig::standard();
    assert_eq!(config.max_additive(), 100);

    let engine = ScoringEngine::new(config);
    let ideal = with_doctors(with_beds(snapshot("RS001"), (50, 10), (200, 100)), 40, 50);
    let scored = engine.score(&ideal, hour(3));

    assert_eq!(scored.total, 100);
    assert!(scored.additive_total() <= 100);
    assert!(scored.total >= scored.additive_total() - 10);
}

#[test]
fn scoring_is_idempotent() {
    let engine = ScoringEngine::default();
    let subject = with_beds(snapshot("RS004"), (30, 29), (150, 140));

    let first = engine.score(&subject, hour(17));
    let second = engine.score(&subject, hour(17));

    assert_eq!(first, second);
}
