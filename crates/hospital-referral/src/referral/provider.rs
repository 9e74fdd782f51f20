use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::facility::{FacilityId, FacilityRegistry};
use super::snapshot::{
    BedCategorySnapshot, BedSnapshot, EmergencyRoomSnapshot, ErStatus, FacilitySnapshot,
    StaffingSnapshot,
};

/// Source of live operational snapshots for the registered facilities.
pub trait SnapshotProvider: Send + Sync {
    fn snapshots(&self, registry: &FacilityRegistry)
        -> Result<Vec<FacilitySnapshot>, ProviderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("no snapshot available for facility {0}")]
    Missing(FacilityId),
    #[error("snapshot source unavailable: {0}")]
    Unavailable(String),
}

/// Synthetic snapshots drawn from ranges observed across the Bandung network.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSnapshotProvider {
    seed: Option<u64>,
}

impl SimulatedSnapshotProvider {
    /// A fixed seed yields the same snapshots on every call.
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Some(seed))
    }

    fn generate(rng: &mut ChaCha8Rng, facility_id: &FacilityId) -> FacilitySnapshot {
        let icu = ward(rng, 20..=50, 10);
        let regular = ward(rng, 100..=300, 50);
        let isolation = ward(rng, 15..=40, 5);

        let waiting = rng.gen_range(5..=30);
        let emergency = EmergencyRoomSnapshot {
            waiting,
            in_treatment: rng.gen_range(10..=25),
            avg_wait_minutes: rng.gen_range(15..=90),
            status: if waiting < 20 {
                ErStatus::Normal
            } else {
                ErStatus::Crowded
            },
        };

        let doctors_total = rng.gen_range(50..=100);
        let staffing = StaffingSnapshot {
            doctors_on_duty: rng.gen_range(15..=40),
            doctors_total,
            specialists_available: rng.gen_range(8..=20),
        };

        let hourly_traffic = (0..24u32)
            .map(|hour| match hour {
                7..=11 => rng.gen_range(15..=35),
                15..=20 => rng.gen_range(20..=40),
                0..=5 => rng.gen_range(5..=15),
                _ => rng.gen_range(10..=25),
            })
            .collect();

        FacilitySnapshot {
            facility_id: facility_id.clone(),
            beds: BedSnapshot {
                icu,
                regular,
                isolation,
            },
            emergency,
            staffing,
            hourly_traffic,
        }
    }
}

fn ward(
    rng: &mut ChaCha8Rng,
    total: std::ops::RangeInclusive<u32>,
    min_occupied: u32,
) -> BedCategorySnapshot {
    let total = rng.gen_range(total);
    let occupied = rng.gen_range(min_occupied..=total);
    BedCategorySnapshot::new(total, occupied)
}

impl SnapshotProvider for SimulatedSnapshotProvider {
    fn snapshots(
        &self,
        registry: &FacilityRegistry,
    ) -> Result<Vec<FacilitySnapshot>, ProviderError> {
        let seed = self.seed.unwrap_or_else(rand::random);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        Ok(registry
            .facilities()
            .iter()
            .map(|facility| Self::generate(&mut rng, &facility.id))
            .collect())
    }
}

/// Serves a fixed set of snapshots, matched to the registry by facility id.
#[derive(Debug, Clone, Default)]
pub struct StaticSnapshotProvider {
    snapshots: Vec<FacilitySnapshot>,
}

impl StaticSnapshotProvider {
    pub fn new(snapshots: Vec<FacilitySnapshot>) -> Self {
        Self { snapshots }
    }
}

impl SnapshotProvider for StaticSnapshotProvider {
    fn snapshots(
        &self,
        registry: &FacilityRegistry,
    ) -> Result<Vec<FacilitySnapshot>, ProviderError> {
        registry
            .facilities()
            .iter()
            .map(|facility| {
                self.snapshots
                    .iter()
                    .find(|snapshot| snapshot.facility_id == facility.id)
                    .cloned()
                    .ok_or_else(|| ProviderError::Missing(facility.id.clone()))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_provider_is_reproducible() {
        let registry = FacilityRegistry::standard();
        let provider = SimulatedSnapshotProvider::seeded(7);
        let first = provider.snapshots(&registry).expect("snapshots");
        let second = provider.snapshots(&registry).expect("snapshots");
        assert_eq!(first, second);
        assert_eq!(first.len(), registry.len());
    }

    #[test]
    fn simulated_snapshots_satisfy_contract() {
        let registry = FacilityRegistry::standard();
        for seed in 0..16 {
            let snapshots = SimulatedSnapshotProvider::seeded(seed)
                .snapshots(&registry)
                .expect("snapshots");
            for snapshot in &snapshots {
                snapshot.validate().expect("simulated snapshot valid");
                let expected = if snapshot.emergency.waiting < 20 {
                    ErStatus::Normal
                } else {
                    ErStatus::Crowded
                };
                assert_eq!(snapshot.emergency.status, expected);
                assert!(snapshot.hourly_traffic[..6]
                    .iter()
                    .all(|count| (5..=15).contains(count)));
            }
        }
    }

    #[test]
    fn static_provider_reports_missing_facility() {
        let registry = FacilityRegistry::standard();
        let provider = StaticSnapshotProvider::default();
        let err = provider.snapshots(&registry).expect_err("missing snapshot");
        assert!(matches!(err, ProviderError::Missing(ref id) if id.as_str() == "RS001"));
    }
}
