use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::SeverityTier;

/// Keywords that place a complaint into one severity tier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierKeywords {
    pub tier: SeverityTier,
    pub keywords: Vec<String>,
}

/// Ordered keyword table consulted most-severe tier first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordCatalog {
    tiers: Vec<TierKeywords>,
}

impl KeywordCatalog {
    /// Builds a catalog from arbitrary tier entries; entries are reordered by severity.
    pub fn new(tiers: Vec<TierKeywords>) -> Result<Self, CatalogError> {
        let mut tiers: Vec<TierKeywords> = tiers
            .into_iter()
            .map(|entry| TierKeywords {
                tier: entry.tier,
                keywords: normalize(entry.keywords),
            })
            .collect();

        if tiers.iter().any(|entry| entry.tier == SeverityTier::NonUrgent) {
            return Err(CatalogError::DefaultTierKeywords);
        }

        tiers.sort_by_key(|entry| entry.tier);
        Ok(Self { tiers })
    }

    /// Built-in Indonesian complaint vocabulary used by the referral desk.
    pub fn standard() -> Self {
        let tiers = vec![
            TierKeywords {
                tier: SeverityTier::Critical,
                keywords: owned(&[
                    "sesak",
                    "napas",
                    "dada sakit",
                    "nyeri dada",
                    "pingsan",
                    "tidak sadar",
                    "kejang",
                    "darah muntah",
                    "stroke",
                    "jantung",
                    "serangan jantung",
                    "kecelakaan",
                    "luka parah",
                    "pendarahan hebat",
                    "trauma kepala",
                    "koma",
                ]),
            },
            TierKeywords {
                tier: SeverityTier::Urgent,
                keywords: owned(&[
                    "demam tinggi",
                    "muntah terus",
                    "diare parah",
                    "nyeri perut",
                    "sakit perut hebat",
                    "luka bakar",
                    "patah tulang",
                    "cedera",
                    "alergi parah",
                    "sesak ringan",
                    "pusing hebat",
                    "keracunan",
                ]),
            },
            TierKeywords {
                tier: SeverityTier::SemiUrgent,
                keywords: owned(&[
                    "demam",
                    "batuk",
                    "flu",
                    "sakit kepala",
                    "mual",
                    "muntah",
                    "diare",
                    "nyeri",
                    "bengkak",
                    "luka",
                    "infeksi",
                    "gatal",
                ]),
            },
        ];

        Self { tiers }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let file = File::open(path.as_ref()).map_err(|source| CatalogError::Io {
            path: path.as_ref().display().to_string(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let raw: Vec<TierKeywords> = serde_json::from_reader(reader)?;
        Self::new(raw)
    }

    /// Adds keywords to a tier, creating the tier entry when absent.
    pub fn extend_tier(
        &mut self,
        tier: SeverityTier,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), CatalogError> {
        if tier == SeverityTier::NonUrgent {
            return Err(CatalogError::DefaultTierKeywords);
        }

        let additions = normalize(keywords.into_iter().map(Into::into).collect());
        match self.tiers.iter_mut().find(|entry| entry.tier == tier) {
            Some(entry) => entry.keywords.extend(additions),
            None => {
                self.tiers.push(TierKeywords {
                    tier,
                    keywords: additions,
                });
                self.tiers.sort_by_key(|entry| entry.tier);
            }
        }
        Ok(())
    }

    pub fn tiers(&self) -> &[TierKeywords] {
        &self.tiers
    }
}

impl Default for KeywordCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

fn owned(keywords: &[&str]) -> Vec<String> {
    keywords.iter().map(|keyword| keyword.to_string()).collect()
}

fn normalize(keywords: Vec<String>) -> Vec<String> {
    keywords
        .into_iter()
        .map(|keyword| keyword.trim().to_lowercase())
        .filter(|keyword| !keyword.is_empty())
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("unable to read keyword catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed keyword catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("non_urgent is the fallback tier and cannot carry keywords")]
    DefaultTierKeywords,
}
