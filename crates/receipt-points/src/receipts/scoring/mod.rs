mod calendar;
mod rules;

use serde::{Deserialize, Serialize};

use super::domain::Receipt;

/// The fixed rules that contribute to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointsRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    ItemDescriptions,
    OddPurchaseDay,
    AfternoonPurchase,
}

impl PointsRule {
    pub fn label(&self) -> &'static str {
        match self {
            PointsRule::RetailerName => "Retailer name",
            PointsRule::RoundDollarTotal => "Round dollar total",
            PointsRule::QuarterMultipleTotal => "Quarter multiple total",
            PointsRule::ItemPairs => "Item pairs",
            PointsRule::ItemDescriptions => "Item descriptions",
            PointsRule::OddPurchaseDay => "Odd purchase day",
            PointsRule::AfternoonPurchase => "Afternoon purchase",
        }
    }
}

/// Discrete contribution of one rule, kept for audits and the CLI breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub rule: PointsRule,
    pub points: u64,
    pub notes: String,
}

impl ScoreComponent {
    fn new(rule: PointsRule, points: u64, notes: String) -> Self {
        Self {
            rule,
            points,
            notes,
        }
    }
}

/// Points awarded to a receipt along with the per-rule trail that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsOutcome {
    pub total: u64,
    pub components: Vec<ScoreComponent>,
}

impl PointsOutcome {
    pub fn points_for(&self, rule: PointsRule) -> u64 {
        self.components
            .iter()
            .filter(|component| component.rule == rule)
            .map(|component| component.points)
            .sum()
    }
}

/// Score a receipt, keeping the contribution of every rule.
///
/// Malformed amounts, dates, and times never abort scoring; they only disable (or zero out)
/// the rules that read them.
pub fn evaluate(receipt: &Receipt) -> PointsOutcome {
    let components = rules::score_receipt(receipt);
    let total = components
        .iter()
        .fold(0u64, |total, component| total.saturating_add(component.points));

    PointsOutcome { total, components }
}

/// Points awarded to a receipt.
pub fn score(receipt: &Receipt) -> u64 {
    evaluate(receipt).total
}
