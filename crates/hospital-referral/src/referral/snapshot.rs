use serde::{Deserialize, Serialize};

use super::facility::FacilityId;
use super::hour::HourOfDay;

/// Capacity of one ward category at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedCategorySnapshot {
    pub total: u32,
    pub occupied: u32,
}

impl BedCategorySnapshot {
    pub fn new(total: u32, occupied: u32) -> Self {
        Self { total, occupied }
    }

    pub fn available(&self) -> u32 {
        self.total.saturating_sub(self.occupied)
    }

    /// Occupied share of capacity in `[0, 1]`; `None` for a ward with no beds.
    pub fn occupancy_rate(&self) -> Option<f64> {
        ratio(self.occupied, self.total)
    }

    /// Occupancy as a percentage; `None` for a ward with no beds.
    pub fn occupancy_pct(&self) -> Option<f64> {
        if self.total == 0 {
            None
        } else {
            Some(f64::from(self.occupied) * 100.0 / f64::from(self.total))
        }
    }
}

/// Ward categories reported in a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BedCategory {
    Icu,
    Regular,
    Isolation,
}

impl BedCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BedCategory::Icu => "icu",
            BedCategory::Regular => "regular",
            BedCategory::Isolation => "isolation",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedSnapshot {
    pub icu: BedCategorySnapshot,
    pub regular: BedCategorySnapshot,
    pub isolation: BedCategorySnapshot,
}

impl BedSnapshot {
    pub fn category(&self, category: BedCategory) -> &BedCategorySnapshot {
        match category {
            BedCategory::Icu => &self.icu,
            BedCategory::Regular => &self.regular,
            BedCategory::Isolation => &self.isolation,
        }
    }

    /// ICU plus regular wards; isolation capacity is not offered to referrals.
    ///
    /// Sums saturate at `u32::MAX`. `FacilitySnapshot::validate` rejects snapshots
    /// whose combined capacity does not fit.
    pub fn general(&self) -> BedCategorySnapshot {
        BedCategorySnapshot {
            total: self.icu.total.saturating_add(self.regular.total),
            occupied: self.icu.occupied.saturating_add(self.regular.occupied),
        }
    }

    pub fn combined(&self) -> BedCategorySnapshot {
        let general = self.general();
        BedCategorySnapshot {
            total: general.total.saturating_add(self.isolation.total),
            occupied: general.occupied.saturating_add(self.isolation.occupied),
        }
    }

    /// Free ICU and regular beds.
    pub fn general_available(&self) -> u32 {
        self.icu.available().saturating_add(self.regular.available())
    }

    fn checked_capacity(&self) -> Option<u32> {
        self.icu
            .total
            .checked_add(self.regular.total)?
            .checked_add(self.isolation.total)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErStatus {
    Normal,
    Crowded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyRoomSnapshot {
    pub waiting: u32,
    pub in_treatment: u32,
    pub avg_wait_minutes: u32,
    pub status: ErStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaffingSnapshot {
    pub doctors_on_duty: u32,
    pub doctors_total: u32,
    pub specialists_available: u32,
}

impl StaffingSnapshot {
    /// On-duty share of the roster; `None` when no doctors are rostered.
    pub fn doctor_ratio(&self) -> Option<f64> {
        ratio(self.doctors_on_duty, self.doctors_total)
    }
}

/// Operational state of one facility, read by the scoring engine and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilitySnapshot {
    pub facility_id: FacilityId,
    pub beds: BedSnapshot,
    pub emergency: EmergencyRoomSnapshot,
    pub staffing: StaffingSnapshot,
    /// Patients arriving per hour of the day, indexed `0..24`.
    pub hourly_traffic: Vec<u32>,
}

impl FacilitySnapshot {
    pub fn traffic_at(&self, hour: HourOfDay) -> u32 {
        self.hourly_traffic
            .get(hour.index())
            .copied()
            .unwrap_or_default()
    }

    /// Checks the invariants the scoring engine relies on.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        for category in [BedCategory::Icu, BedCategory::Regular, BedCategory::Isolation] {
            let ward = self.beds.category(category);
            if ward.occupied > ward.total {
                return Err(SnapshotError::OccupancyExceedsCapacity {
                    facility: self.facility_id.clone(),
                    category,
                    occupied: ward.occupied,
                    total: ward.total,
                });
            }
        }

        if self.beds.checked_capacity().is_none() {
            return Err(SnapshotError::CapacityOverflow {
                facility: self.facility_id.clone(),
            });
        }

        if self.staffing.doctors_on_duty > self.staffing.doctors_total {
            return Err(SnapshotError::DoctorsExceedTotal {
                facility: self.facility_id.clone(),
                on_duty: self.staffing.doctors_on_duty,
                total: self.staffing.doctors_total,
            });
        }

        if self.hourly_traffic.len() != HourOfDay::HOURS {
            return Err(SnapshotError::TrafficProfileLength {
                facility: self.facility_id.clone(),
                len: self.hourly_traffic.len(),
            });
        }

        Ok(())
    }
}

/// Contract violation in the snapshots handed to the engine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot references unknown facility {facility}")]
    UnknownFacility { facility: FacilityId },
    #[error("facility {facility} has more than one snapshot")]
    DuplicateFacility { facility: FacilityId },
    #[error(
        "facility {facility}: {} occupied {occupied} exceeds total {total}",
        .category.label()
    )]
    OccupancyExceedsCapacity {
        facility: FacilityId,
        category: BedCategory,
        occupied: u32,
        total: u32,
    },
    #[error("facility {facility}: combined bed capacity does not fit in u32")]
    CapacityOverflow { facility: FacilityId },
    #[error("facility {facility}: {on_duty} doctors on duty exceeds roster of {total}")]
    DoctorsExceedTotal {
        facility: FacilityId,
        on_duty: u32,
        total: u32,
    },
    #[error("facility {facility}: hourly traffic has {len} entries, expected 24")]
    TrafficProfileLength { facility: FacilityId, len: usize },
}

impl SnapshotError {
    pub fn facility(&self) -> &FacilityId {
        match self {
            SnapshotError::UnknownFacility { facility }
            | SnapshotError::DuplicateFacility { facility }
            | SnapshotError::OccupancyExceedsCapacity { facility, .. }
            | SnapshotError::CapacityOverflow { facility }
            | SnapshotError::DoctorsExceedTotal { facility, .. }
            | SnapshotError::TrafficProfileLength { facility, .. } => facility,
        }
    }

    pub fn field(&self) -> &'static str {
        match self {
            SnapshotError::UnknownFacility { .. } | SnapshotError::DuplicateFacility { .. } => {
                "facility_id"
            }
            SnapshotError::OccupancyExceedsCapacity { category, .. } => match category {
                BedCategory::Icu => "beds.icu",
                BedCategory::Regular => "beds.regular",
                BedCategory::Isolation => "beds.isolation",
            },
            SnapshotError::CapacityOverflow { .. } => "beds",
            SnapshotError::DoctorsExceedTotal { .. } => "staffing.doctors_on_duty",
            SnapshotError::TrafficProfileLength { .. } => "hourly_traffic",
        }
    }
}

fn ratio(numerator: u32, denominator: u32) -> Option<f64> {
    if denominator == 0 {
        None
    } else {
        Some(f64::from(numerator) / f64::from(denominator))
    }
}
