use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to a processed receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReceiptId(pub String);

impl fmt::Display for ReceiptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Purchase receipt as submitted by a client.
///
/// Every field keeps its wire representation. Parsing into dates, times, and amounts happens
/// inside the individual scoring rules so a malformed field only disables the rules that
/// read it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub retailer: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub purchase_date: String,
    /// Local time of day, 24-hour `HH:MM`.
    pub purchase_time: String,
    pub items: Vec<Item>,
    pub total: String,
}

/// A single purchased line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub short_description: String,
    pub price: String,
}

impl Item {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}
