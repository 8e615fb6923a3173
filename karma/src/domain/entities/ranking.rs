//! Ranking entries

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Which end of the leaderboard to list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankDirection {
    /// Highest total first
    #[default]
    Best,
    /// Lowest total first
    Worst,
}

impl RankDirection {
    /// Order two entries for this direction; ties fall back to name ascending
    pub fn compare(self, a: &RankedTerm, b: &RankedTerm) -> Ordering {
        let by_score = match self {
            RankDirection::Best => b.total_score.cmp(&a.total_score),
            RankDirection::Worst => a.total_score.cmp(&b.total_score),
        };
        by_score.then_with(|| a.term.cmp(&b.term))
    }
}

impl std::fmt::Display for RankDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RankDirection::Best => write!(f, "best"),
            RankDirection::Worst => write!(f, "worst"),
        }
    }
}

impl std::str::FromStr for RankDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "best" | "top" => Ok(RankDirection::Best),
            "worst" | "bottom" => Ok(RankDirection::Worst),
            _ => Err(format!("Unknown rank direction: {}", s)),
        }
    }
}

/// A term and its aggregated total in a ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedTerm {
    pub term: String,
    pub total_score: i64,
}
