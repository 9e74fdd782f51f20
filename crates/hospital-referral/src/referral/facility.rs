use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a hospital in the referral network.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub String);

impl FacilityId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FacilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Hospital class, ordered from the most comprehensive (A) downwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum FacilityTier {
    A,
    B,
    C,
}

impl FacilityTier {
    pub fn label(&self) -> &'static str {
        match self {
            FacilityTier::A => "Tipe A",
            FacilityTier::B => "Tipe B",
            FacilityTier::C => "Tipe C",
        }
    }
}

/// Reference record for a facility that can receive referrals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub tier: FacilityTier,
    pub address: String,
}

impl Facility {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        tier: FacilityTier,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id: FacilityId::new(id),
            name: name.into(),
            tier,
            address: address.into(),
        }
    }
}

/// Immutable table of candidate facilities, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct FacilityRegistry {
    facilities: Vec<Facility>,
    index: BTreeMap<FacilityId, usize>,
}

impl FacilityRegistry {
    /// Builds a registry, keeping the first record when ids repeat.
    pub fn new(facilities: impl IntoIterator<Item = Facility>) -> Self {
        let mut registry = Self::default();
        for facility in facilities {
            if registry.index.contains_key(&facility.id) {
                continue;
            }
            registry
                .index
                .insert(facility.id.clone(), registry.facilities.len());
            registry.facilities.push(facility);
        }
        registry
    }

    /// The eight Bandung hospitals served by the referral desk.
    pub fn standard() -> Self {
        Self::new([
            Facility::new(
                "RS001",
                "RSUP Dr. Hasan Sadikin Bandung",
                FacilityTier::A,
                "Jl. Pasteur No.38, Pasteur, Kec. Sukajadi, Kota Bandung",
            ),
            Facility::new(
                "RS002",
                "RSUD Kota Bandung",
                FacilityTier::A,
                "Jl. Rumah Sakit No.22, Cicendo, Kec. Bandung Kidul, Kota Bandung",
            ),
            Facility::new(
                "RS003",
                "RS Advent Bandung",
                FacilityTier::B,
                "Jl. Cihampelas No.161, Cipaganti, Kec. Coblong, Kota Bandung",
            ),
            Facility::new(
                "RS004",
                "RS Santo Borromeus Bandung",
                FacilityTier::B,
                "Jl. Ir. H. Juanda No.100, Lebakgede, Kec. Coblong, Kota Bandung",
            ),
            Facility::new(
                "RS005",
                "RS Al Islam Bandung",
                FacilityTier::B,
                "Jl. Soekarno Hatta No.644, Cipagalo, Kec. Bojongsoang, Kab. Bandung",
            ),
            Facility::new(
                "RS006",
                "RSUD Ujung Berung",
                FacilityTier::C,
                "Jl. AH Nasution No.50, Ujungberung, Kec. Ujung Berung, Kota Bandung",
            ),
            Facility::new(
                "RS007",
                "RSIA Limijati Bandung",
                FacilityTier::C,
                "Jl. Soekarno Hatta No.467, Sekejati, Kec. Buahbatu, Kota Bandung",
            ),
            Facility::new(
                "RS008",
                "RS Khusus Paru Rotinsulu Bandung",
                FacilityTier::C,
                "Jl. Buah Batu No.29, Turangga, Kec. Lengkong, Kota Bandung",
            ),
        ])
    }

    pub fn get(&self, id: &FacilityId) -> Option<&Facility> {
        self.index.get(id).map(|&position| &self.facilities[position])
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_registry_lists_bandung_hospitals() {
        let registry = FacilityRegistry::standard();
        assert_eq!(registry.len(), 8);
        let hasan = registry
            .get(&FacilityId::new("RS001"))
            .expect("RS001 registered");
        assert_eq!(hasan.tier, FacilityTier::A);
        assert_eq!(hasan.tier.label(), "Tipe A");
        assert!(registry.get(&FacilityId::new("RS999")).is_none());
    }

    #[test]
    fn duplicate_ids_keep_first_record() {
        let registry = FacilityRegistry::new([
            Facility::new("X1", "First", FacilityTier::B, "addr"),
            Facility::new("X1", "Second", FacilityTier::C, "addr"),
        ]);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.facilities()[0].name, "First");
    }
}
