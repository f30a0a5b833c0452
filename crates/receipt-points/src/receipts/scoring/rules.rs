use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use super::calendar::{in_hour, is_odd_day, parse_purchase_date, parse_purchase_time};
use super::{PointsRule, ScoreComponent};
use crate::receipts::domain::{Item, Receipt};
use crate::receipts::money::{canonical, parse_amount, to_cents, try_parse_amount};

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER_CENTS: i128 = 25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_MULTIPLE: usize = 3;
// 0.2
const DESCRIPTION_PRICE_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_HOUR: u32 = 14;
const AFTERNOON_POINTS: u64 = 10;

pub(crate) fn score_receipt(receipt: &Receipt) -> Vec<ScoreComponent> {
    vec![
        retailer_name(&receipt.retailer),
        round_dollar_total(&receipt.total),
        quarter_multiple_total(&receipt.total),
        item_pairs(&receipt.items),
        item_descriptions(&receipt.items),
        odd_purchase_day(&receipt.purchase_date),
        afternoon_purchase(&receipt.purchase_time),
    ]
}

fn retailer_name(retailer: &str) -> ScoreComponent {
    let count = retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count() as u64;

    ScoreComponent::new(
        PointsRule::RetailerName,
        count,
        format!("{count} alphanumeric character(s) in retailer name"),
    )
}

fn round_dollar_total(total: &str) -> ScoreComponent {
    let Some(amount) = try_parse_amount(total) else {
        return ScoreComponent::new(
            PointsRule::RoundDollarTotal,
            0,
            format!("total '{total}' is not a valid amount"),
        );
    };

    let normalized = canonical(amount);
    if normalized.ends_with(".00") {
        ScoreComponent::new(
            PointsRule::RoundDollarTotal,
            ROUND_DOLLAR_POINTS,
            format!("total {normalized} is a round dollar amount"),
        )
    } else {
        ScoreComponent::new(
            PointsRule::RoundDollarTotal,
            0,
            format!("total {normalized} includes cents"),
        )
    }
}

fn quarter_multiple_total(total: &str) -> ScoreComponent {
    match to_cents(parse_amount(total)) {
        Some(cents) if cents % QUARTER_CENTS == 0 => ScoreComponent::new(
            PointsRule::QuarterMultipleTotal,
            QUARTER_MULTIPLE_POINTS,
            format!("{cents} cent(s) is a multiple of 0.25"),
        ),
        Some(cents) => ScoreComponent::new(
            PointsRule::QuarterMultipleTotal,
            0,
            format!("{cents} cent(s) is not a multiple of 0.25"),
        ),
        None => ScoreComponent::new(
            PointsRule::QuarterMultipleTotal,
            0,
            format!("total '{total}' is out of range"),
        ),
    }
}

fn item_pairs(items: &[Item]) -> ScoreComponent {
    let pairs = (items.len() / 2) as u64;

    ScoreComponent::new(
        PointsRule::ItemPairs,
        pairs.saturating_mul(POINTS_PER_ITEM_PAIR),
        format!("{pairs} pair(s) across {} item(s)", items.len()),
    )
}

fn item_descriptions(items: &[Item]) -> ScoreComponent {
    let mut points = 0u64;
    let mut qualifying = 0usize;

    for item in items {
        let length = item.short_description.trim().chars().count();
        if length == 0 || length % DESCRIPTION_LENGTH_MULTIPLE != 0 {
            continue;
        }

        qualifying += 1;
        points = points.saturating_add(description_bonus(&item.price));
    }

    ScoreComponent::new(
        PointsRule::ItemDescriptions,
        points,
        format!("{qualifying} item description(s) with length a multiple of 3"),
    )
}

/// `ceil(price * 0.2)`, never below zero.
fn description_bonus(price: &str) -> u64 {
    parse_amount(price)
        .checked_mul(DESCRIPTION_PRICE_RATE)
        .and_then(|scaled| scaled.ceil().to_u64())
        .unwrap_or(0)
}

fn odd_purchase_day(purchase_date: &str) -> ScoreComponent {
    match parse_purchase_date(purchase_date) {
        Some(date) if is_odd_day(date) => ScoreComponent::new(
            PointsRule::OddPurchaseDay,
            ODD_DAY_POINTS,
            format!("purchased on odd day {date}"),
        ),
        Some(date) => ScoreComponent::new(
            PointsRule::OddPurchaseDay,
            0,
            format!("purchased on even day {date}"),
        ),
        None => ScoreComponent::new(
            PointsRule::OddPurchaseDay,
            0,
            format!("purchase date '{purchase_date}' is not YYYY-MM-DD"),
        ),
    }
}

fn afternoon_purchase(purchase_time: &str) -> ScoreComponent {
    match parse_purchase_time(purchase_time) {
        Some(time) if in_hour(time, AFTERNOON_HOUR) => ScoreComponent::new(
            PointsRule::AfternoonPurchase,
            AFTERNOON_POINTS,
            format!("purchased at {} during the 2pm hour", time.format("%H:%M")),
        ),
        Some(time) => ScoreComponent::new(
            PointsRule::AfternoonPurchase,
            0,
            format!("purchased at {} outside the 2pm hour", time.format("%H:%M")),
        ),
        None => ScoreComponent::new(
            PointsRule::AfternoonPurchase,
            0,
            format!("purchase time '{purchase_time}' is not HH:MM"),
        ),
    }
}
