use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::domain::{Receipt, ReceiptId};
use super::scoring::PointsOutcome;

/// Stored receipt with the points it earned when it was processed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptRecord {
    pub id: ReceiptId,
    pub receipt: Receipt,
    pub outcome: PointsOutcome,
}

impl ReceiptRecord {
    pub fn points(&self) -> u64 {
        self.outcome.total
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait ReceiptRepository: Send + Sync {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError>;
    fn exists(&self, id: &ReceiptId) -> Result<bool, RepositoryError> {
        Ok(self.fetch(id)?.is_some())
    }
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Source of identifiers for newly processed receipts.
pub trait IdGenerator: Send + Sync {
    fn generate_id(&self) -> ReceiptId;
}

/// Random v4 UUIDs.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn generate_id(&self) -> ReceiptId {
        ReceiptId(Uuid::new_v4().to_string())
    }
}

/// Deterministic `receipt-000001`, `receipt-000002`, ... identifiers.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn generate_id(&self) -> ReceiptId {
        let id = self.next.fetch_add(1, Ordering::Relaxed);
        ReceiptId(format!("receipt-{id:06}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_ids_are_zero_padded_and_increasing() {
        let ids = SequentialIdGenerator::default();
        assert_eq!(ids.generate_id(), ReceiptId("receipt-000001".to_string()));
        assert_eq!(ids.generate_id(), ReceiptId("receipt-000002".to_string()));
    }

    #[test]
    fn uuid_ids_are_hyphenated_and_unique() {
        let first = UuidIdGenerator.generate_id();
        let second = UuidIdGenerator.generate_id();
        assert_eq!(first.0.len(), 36);
        assert!(Uuid::parse_str(&first.0).is_ok());
        assert_ne!(first, second);
    }
}
