mod rules;

pub use rules::ScoringRule;

use super::domain::Receipt;
use serde::{Deserialize, Serialize};

/// Points awarded to a receipt.
///
/// Never fails: a total, price, date or time that does not parse only
/// disables the rules reading it.
pub fn score(receipt: &Receipt) -> u64 {
    score_breakdown(receipt).total
}

/// Applies every rule and keeps the individual contributions for audits.
///
/// The total saturates at `u64::MAX`.
pub fn score_breakdown(receipt: &Receipt) -> PointsBreakdown {
    let components = rules::score_receipt(receipt);
    let total = components
        .iter()
        .map(|component| component.points)
        .fold(0, u64::saturating_add);

    PointsBreakdown { components, total }
}

/// Discrete contribution of a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: ScoringRule,
    pub points: u64,
    pub notes: String,
}

/// Per-rule contributions plus their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub components: Vec<ScoreComponent>,
    pub total: u64,
}

impl PointsBreakdown {
    pub fn points_for(&self, rule: ScoringRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .fold(0, u64::saturating_add)
    }
}
