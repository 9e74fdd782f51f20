use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::response::Response;
use serde_json::Value;

use crate::referral::{
    BedCategorySnapshot, BedSnapshot, EmergencyRoomSnapshot, ErStatus, FacilityId,
    FacilitySnapshot, FacilityRegistry, HourOfDay, HourPolicy, ReferralEngine, ReferralRequest,
    ReferralService, StaffingSnapshot, StaticSnapshotProvider,
};

/// Baseline facility scoring 80: 40 free beds, calm ER, 20 of 60 doctors, quiet traffic.
pub(super) fn snapshot(id: &str) -> FacilitySnapshot {
    FacilitySnapshot {
        facility_id: FacilityId::new(id),
        beds: BedSnapshot {
            icu: BedCategorySnapshot::new(20, 10),
            regular: BedCategorySnapshot::new(100, 70),
            isolation: BedCategorySnapshot::new(15, 5),
        },
        emergency: EmergencyRoomSnapshot {
            waiting: 8,
            in_treatment: 12,
            avg_wait_minutes: 35,
            status: ErStatus::Normal,
        },
        staffing: StaffingSnapshot {
            doctors_on_duty: 20,
            doctors_total: 60,
            specialists_available: 9,
        },
        hourly_traffic: vec![10; 24],
    }
}

pub(super) fn with_beds(
    mut snapshot: FacilitySnapshot,
    icu: (u32, u32),
    regular: (u32, u32),
) -> FacilitySnapshot {
    snapshot.beds.icu = BedCategorySnapshot::new(icu.0, icu.1);
    snapshot.beds.regular = BedCategorySnapshot::new(regular.0, regular.1);
    snapshot
}

pub(super) fn with_doctors(
    mut snapshot: FacilitySnapshot,
    on_duty: u32,
    total: u32,
) -> FacilitySnapshot {
    snapshot.staffing.doctors_on_duty = on_duty;
    snapshot.staffing.doctors_total = total;
    snapshot
}

pub(super) fn hour(value: u8) -> HourOfDay {
    HourOfDay::new(value).expect("valid hour")
}

pub(super) fn standard_snapshots() -> Vec<FacilitySnapshot> {
    FacilityRegistry::standard()
        .facilities()
        .iter()
        .map(|facility| snapshot(facility.id.as_str()))
        .collect()
}

pub(super) fn request(complaint: &str) -> ReferralRequest {
    ReferralRequest {
        name: "Siti Rahma".to_string(),
        age: 54,
        complaint: complaint.to_string(),
        specialty: "Jantung".to_string(),
    }
}

pub(super) fn static_service(
    snapshots: Vec<FacilitySnapshot>,
) -> Arc<ReferralService<StaticSnapshotProvider>> {
    Arc::new(ReferralService::new(
        ReferralEngine::standard(),
        Arc::new(StaticSnapshotProvider::new(snapshots)),
        HourPolicy::Strict,
    ))
}

pub(super) async fn json_body(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body collected");
    serde_json::from_slice(&bytes).expect("json body")
}

pub(super) fn json_request(method: &str, uri: &str, body: Value) -> axum::http::Request<Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds")
}
