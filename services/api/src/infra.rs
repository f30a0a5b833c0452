use metrics_exporter_prometheus::PrometheusHandle;
use receipt_points::receipts::{ReceiptId, ReceiptRecord, ReceiptRepository, RepositoryError};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-lifetime receipt storage shared across request handlers.
#[derive(Default, Clone)]
pub(crate) struct InMemoryReceiptRepository {
    records: Arc<Mutex<HashMap<ReceiptId, ReceiptRecord>>>,
}

impl InMemoryReceiptRepository {
    fn lock(&self) -> Result<MutexGuard<'_, HashMap<ReceiptId, ReceiptRecord>>, RepositoryError> {
        self.records
            .lock()
            .map_err(|_| RepositoryError::Unavailable("receipt store mutex poisoned".to_string()))
    }
}

impl ReceiptRepository for InMemoryReceiptRepository {
    fn insert(&self, record: ReceiptRecord) -> Result<ReceiptRecord, RepositoryError> {
        let mut guard = self.lock()?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.get(id).cloned())
    }

    fn exists(&self, id: &ReceiptId) -> Result<bool, RepositoryError> {
        let guard = self.lock()?;
        Ok(guard.contains_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt_points::receipts::{evaluate, Item, Receipt};

    fn record(id: &str) -> ReceiptRecord {
        let receipt = Receipt {
            retailer: "Walmart".to_string(),
            purchase_date: "2023-05-15".to_string(),
            purchase_time: "15:45".to_string(),
            items: vec![Item::new("Sparkling Water", "1.25")],
            total: "1.25".to_string(),
        };
        let outcome = evaluate(&receipt);
        ReceiptRecord {
            id: ReceiptId(id.to_string()),
            receipt,
            outcome,
        }
    }

    #[test]
    fn insert_then_fetch_round_trips_record() {
        let repository = InMemoryReceiptRepository::default();
        let stored = repository.insert(record("r-1")).expect("insert succeeds");

        let fetched = repository
            .fetch(&stored.id)
            .expect("fetch succeeds")
            .expect("record present");
        assert_eq!(fetched, stored);
        assert!(repository.exists(&stored.id).expect("exists succeeds"));
    }

    #[test]
    fn duplicate_ids_conflict() {
        let repository = InMemoryReceiptRepository::default();
        repository.insert(record("r-1")).expect("first insert");

        let err = repository.insert(record("r-1")).expect_err("duplicate rejected");
        assert!(matches!(err, RepositoryError::Conflict));
    }

    #[test]
    fn clones_share_storage() {
        let repository = InMemoryReceiptRepository::default();
        let handle = repository.clone();
        repository.insert(record("r-2")).expect("insert succeeds");

        assert!(handle
            .exists(&ReceiptId("r-2".to_string()))
            .expect("exists succeeds"));
        assert!(!handle
            .exists(&ReceiptId("r-3".to_string()))
            .expect("exists succeeds"));
    }
}
