use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::super::domain::{Item, Receipt};
use super::ScoreComponent;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const ITEM_PAIR_POINTS: u64 = 5;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;
const MINIMUM_TOTAL_POINTS: u64 = 5;
const MINIMUM_TOTAL_THRESHOLD: f64 = 10.00;

/// The eight rules contributing to a receipt's points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringRule {
    RetailerName,
    RoundDollarTotal,
    QuarterMultipleTotal,
    ItemPairs,
    DescriptionLength,
    OddPurchaseDay,
    AfternoonPurchase,
    MinimumTotal,
}

impl ScoringRule {
    /// Rules in the order they are applied and reported.
    pub const ALL: [ScoringRule; 8] = [
        ScoringRule::RetailerName,
        ScoringRule::RoundDollarTotal,
        ScoringRule::QuarterMultipleTotal,
        ScoringRule::ItemPairs,
        ScoringRule::DescriptionLength,
        ScoringRule::OddPurchaseDay,
        ScoringRule::AfternoonPurchase,
        ScoringRule::MinimumTotal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ScoringRule::RetailerName => "retailer name",
            ScoringRule::RoundDollarTotal => "round dollar total",
            ScoringRule::QuarterMultipleTotal => "quarter multiple total",
            ScoringRule::ItemPairs => "item pairs",
            ScoringRule::DescriptionLength => "description length",
            ScoringRule::OddPurchaseDay => "odd purchase day",
            ScoringRule::AfternoonPurchase => "afternoon purchase",
            ScoringRule::MinimumTotal => "minimum total",
        }
    }
}

pub(crate) fn score_receipt(receipt: &Receipt) -> Vec<ScoreComponent> {
    let total = parse_amount(&receipt.total);

    vec![
        retailer_name(&receipt.retailer),
        round_dollar_total(total),
        quarter_multiple_total(total),
        item_pairs(&receipt.items),
        description_length(&receipt.items),
        odd_purchase_day(&receipt.purchase_date),
        afternoon_purchase(&receipt.purchase_time),
        minimum_total(total),
    ]
}

/// Parses a textual amount; anything unparseable or non-finite is `None`.
pub(crate) fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Day of month, or 0 when the date does not parse.
pub(crate) fn purchase_day(raw: &str) -> u32 {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.day())
        .unwrap_or(0)
}

/// Hour of day, or 0 when the time does not parse.
pub(crate) fn purchase_hour(raw: &str) -> u32 {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map(|time| time.hour())
        .unwrap_or(0)
}

fn retailer_name(retailer: &str) -> ScoreComponent {
    let count = retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    ScoreComponent {
        rule: ScoringRule::RetailerName,
        points: count,
        notes: format!("{count} alphanumeric character(s) in '{retailer}'"),
    }
}

fn round_dollar_total(total: Option<f64>) -> ScoreComponent {
    let (points, notes) = match total {
        Some(value) if value == value.trunc() => {
            (ROUND_DOLLAR_POINTS, format!("total {value:.2} has no cents"))
        }
        Some(value) => (0, format!("total {value:.2} has cents")),
        None => (0, "total is not a number".to_string()),
    };

    ScoreComponent {
        rule: ScoringRule::RoundDollarTotal,
        points,
        notes,
    }
}

fn quarter_multiple_total(total: Option<f64>) -> ScoreComponent {
    // f64 remainder, matching previously issued scores.
    let (points, notes) = match total {
        Some(value) if (value * 100.0) % 25.0 == 0.0 => (
            QUARTER_MULTIPLE_POINTS,
            format!("total {value:.2} is a multiple of 0.25"),
        ),
        Some(value) => (0, format!("total {value:.2} is not a multiple of 0.25")),
        None => (0, "total is not a number".to_string()),
    };

    ScoreComponent {
        rule: ScoringRule::QuarterMultipleTotal,
        points,
        notes,
    }
}

fn item_pairs(items: &[Item]) -> ScoreComponent {
    let pairs = (items.len() / 2) as u64;

    ScoreComponent {
        rule: ScoringRule::ItemPairs,
        points: pairs.saturating_mul(ITEM_PAIR_POINTS),
        notes: format!("{pairs} pair(s) across {} item(s)", items.len()),
    }
}

fn description_length(items: &[Item]) -> ScoreComponent {
    let mut points: u64 = 0;
    let mut qualifying = 0;

    for item in items {
        // Byte length of the trimmed description; an empty description qualifies.
        if item.short_description.trim().len() % 3 != 0 {
            continue;
        }
        qualifying += 1;
        points = description_bonus(&item.price).saturating_add(points);
    }

    ScoreComponent {
        rule: ScoringRule::DescriptionLength,
        points,
        notes: format!("{qualifying} item(s) with a description length divisible by 3"),
    }
}

fn description_bonus(price: &str) -> u64 {
    parse_amount(price)
        .map(|value| (value * DESCRIPTION_PRICE_MULTIPLIER).ceil())
        .filter(|bonus| *bonus > 0.0)
        .map(|bonus| bonus as u64)
        .unwrap_or(0)
}

fn odd_purchase_day(purchase_date: &str) -> ScoreComponent {
    let day = purchase_day(purchase_date);
    let points = if day % 2 == 1 { ODD_DAY_POINTS } else { 0 };

    ScoreComponent {
        rule: ScoringRule::OddPurchaseDay,
        points,
        notes: if day == 0 {
            format!("purchase date '{purchase_date}' is not YYYY-MM-DD")
        } else {
            format!("purchased on day {day}")
        },
    }
}

fn afternoon_purchase(purchase_time: &str) -> ScoreComponent {
    let hour = purchase_hour(purchase_time);
    let points = if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    };

    ScoreComponent {
        rule: ScoringRule::AfternoonPurchase,
        points,
        notes: format!("purchased during hour {hour:02}"),
    }
}

fn minimum_total(total: Option<f64>) -> ScoreComponent {
    let value = total.unwrap_or(0.0);
    let points = if value > MINIMUM_TOTAL_THRESHOLD {
        MINIMUM_TOTAL_POINTS
    } else {
        0
    };

    ScoreComponent {
        rule: ScoringRule::MinimumTotal,
        points,
        notes: format!("total {value:.2} against threshold {MINIMUM_TOTAL_THRESHOLD:.2}"),
    }
}
