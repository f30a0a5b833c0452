//! Receipt intake, loyalty points scoring, and lookup.
//!
//! Scoring lives in [`scoring`] and is a pure function of the receipt. The service and
//! router layers assign identifiers, persist results through a [`ReceiptRepository`], and
//! expose them over HTTP.

pub mod domain;
pub mod money;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Item, Receipt, ReceiptId};
pub use repository::{
    IdGenerator, ReceiptRecord, ReceiptRepository, RepositoryError, SequentialIdGenerator,
    UuidIdGenerator,
};
pub use router::receipts_router;
pub use scoring::{evaluate, score, PointsOutcome, PointsRule, ScoreComponent};
pub use service::{ReceiptService, ReceiptServiceError};
