use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{debug, error, info, warn};

use super::domain::{Receipt, ReceiptId};
use super::repository::{IdGenerator, ReceiptRecord, ReceiptRepository, RepositoryError};
use super::scoring;

const MAX_ID_ATTEMPTS: usize = 3;

/// Service composing identifier generation, scoring, and the receipt repository.
pub struct ReceiptService<R, G> {
    repository: Arc<R>,
    ids: Arc<G>,
}

impl<R, G> ReceiptService<R, G>
where
    R: ReceiptRepository + 'static,
    G: IdGenerator + 'static,
{
    pub fn new(repository: Arc<R>, ids: Arc<G>) -> Self {
        Self { repository, ids }
    }

    /// Score a receipt and store it under a freshly generated identifier.
    pub fn process(&self, receipt: Receipt) -> Result<ReceiptRecord, ReceiptServiceError> {
        let id = self.unused_id()?;
        let outcome = scoring::evaluate(&receipt);

        for component in &outcome.components {
            debug!(
                receipt_id = %id,
                rule = component.rule.label(),
                points = component.points,
                notes = %component.notes,
                "points rule evaluated"
            );
        }

        let stored = self
            .repository
            .insert(ReceiptRecord {
                id,
                receipt,
                outcome,
            })
            .map_err(|err| {
                error!(error = %err, "failed to store processed receipt");
                err
            })?;

        info!(receipt_id = %stored.id, points = stored.points(), "receipt processed");
        Ok(stored)
    }

    /// Points previously awarded to the receipt with this identifier.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        self.get(id).map(|record| record.points())
    }

    /// Fetch a stored receipt record.
    pub fn get(&self, id: &ReceiptId) -> Result<ReceiptRecord, ReceiptServiceError> {
        self.repository.fetch(id)?.ok_or_else(|| {
            debug!(receipt_id = %id, "receipt lookup missed");
            ReceiptServiceError::NotFound
        })
    }

    fn unused_id(&self) -> Result<ReceiptId, ReceiptServiceError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let id = self.ids.generate_id();
            if !self.repository.exists(&id)? {
                return Ok(id);
            }
            warn!(receipt_id = %id, "generated receipt id already in use");
        }

        Err(RepositoryError::Conflict.into())
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error("receipt not found")]
    NotFound,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl ReceiptServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReceiptServiceError::NotFound
            | ReceiptServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
            ReceiptServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
            ReceiptServiceError::Repository(RepositoryError::Unavailable(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}
