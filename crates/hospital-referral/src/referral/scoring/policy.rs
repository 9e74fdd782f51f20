use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;

/// Display tier derived from a facility's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriorityLabel {
    #[serde(rename = "Highly Recommended")]
    HighlyRecommended,
    #[serde(rename = "Recommended")]
    Recommended,
    #[serde(rename = "Alternative")]
    Alternative,
}

impl PriorityLabel {
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLabel::HighlyRecommended => "Highly Recommended",
            PriorityLabel::Recommended => "Recommended",
            PriorityLabel::Alternative => "Alternative",
        }
    }
}

pub(crate) fn assign_priority(score: i16, config: &ScoringConfig) -> PriorityLabel {
    if score >= config.highly_recommended_min {
        PriorityLabel::HighlyRecommended
    } else if score >= config.recommended_min {
        PriorityLabel::Recommended
    } else {
        PriorityLabel::Alternative
    }
}
