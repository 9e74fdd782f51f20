//! Keyword triage of free-text complaints.

mod catalog;

pub use catalog::{CatalogError, KeywordCatalog, TierKeywords};

use serde::{Deserialize, Serialize};

/// Triage tier, declared most severe first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SeverityTier {
    Critical,
    Urgent,
    SemiUrgent,
    NonUrgent,
}

impl SeverityTier {
    pub fn code(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "critical",
            SeverityTier::Urgent => "urgent",
            SeverityTier::SemiUrgent => "semi_urgent",
            SeverityTier::NonUrgent => "non_urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SeverityTier::Critical => "Critical",
            SeverityTier::Urgent => "Urgent",
            SeverityTier::SemiUrgent => "Semi-Urgent",
            SeverityTier::NonUrgent => "Non-Urgent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeverityResult {
    pub tier: SeverityTier,
    pub label: &'static str,
}

impl From<SeverityTier> for SeverityResult {
    fn from(tier: SeverityTier) -> Self {
        Self {
            tier,
            label: tier.label(),
        }
    }
}

/// Maps complaint text onto a [`SeverityTier`] using a [`KeywordCatalog`].
#[derive(Debug, Clone, Default)]
pub struct SeverityClassifier {
    catalog: KeywordCatalog,
}

impl SeverityClassifier {
    pub fn new(catalog: KeywordCatalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &KeywordCatalog {
        &self.catalog
    }

    /// The first tier with any keyword contained in the complaint wins.
    pub fn classify(&self, complaint: &str) -> SeverityResult {
        let complaint = complaint.to_lowercase();

        let tier = self
            .catalog
            .tiers()
            .iter()
            .find(|entry| {
                entry
                    .keywords
                    .iter()
                    .any(|keyword| complaint.contains(keyword.as_str()))
            })
            .map(|entry| entry.tier)
            .unwrap_or(SeverityTier::NonUrgent);

        SeverityResult::from(tier)
    }
}
