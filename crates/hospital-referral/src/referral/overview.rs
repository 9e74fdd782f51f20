use serde::Serialize;

use super::facility::{FacilityId, FacilityRegistry};
use super::snapshot::FacilitySnapshot;

/// Occupancy of one facility across all ward categories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FacilityOccupancy {
    pub hospital_id: FacilityId,
    pub hospital_name: String,
    pub occupancy_rate: f64,
}

/// Network-wide capacity summary for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NetworkOverview {
    pub total_hospitals: usize,
    pub total_beds: u64,
    pub occupied_beds: u64,
    pub available_beds: u64,
    pub occupancy_rate: f64,
    pub total_er_patients: u64,
    pub by_hospital: Vec<FacilityOccupancy>,
}

impl NetworkOverview {
    /// Snapshots for facilities missing from the registry are skipped.
    pub fn from_snapshots(registry: &FacilityRegistry, snapshots: &[FacilitySnapshot]) -> Self {
        let mut total_beds = 0u64;
        let mut occupied_beds = 0u64;
        let mut total_er_patients = 0u64;
        let mut by_hospital = Vec::with_capacity(snapshots.len());

        for snapshot in snapshots {
            let Some(facility) = registry.get(&snapshot.facility_id) else {
                continue;
            };

            let combined = snapshot.beds.combined();
            total_beds += u64::from(combined.total);
            occupied_beds += u64::from(combined.occupied);
            total_er_patients += u64::from(snapshot.emergency.waiting)
                + u64::from(snapshot.emergency.in_treatment);

            by_hospital.push(FacilityOccupancy {
                hospital_id: facility.id.clone(),
                hospital_name: facility.name.clone(),
                occupancy_rate: percent(combined.occupied.into(), combined.total.into()),
            });
        }

        Self {
            total_hospitals: registry.len(),
            total_beds,
            occupied_beds,
            available_beds: total_beds.saturating_sub(occupied_beds),
            occupancy_rate: percent(occupied_beds, total_beds),
            total_er_patients,
            by_hospital,
        }
    }
}

fn percent(occupied: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = occupied as f64 * 100.0 / total as f64;
    (pct * 10.0).round() / 10.0
}
