use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::domain::{Receipt, ReceiptId, ScoredReceipt};
use super::scoring;

/// In-memory registry of scored receipts keyed by their generated identifier.
///
/// Receipt, identifier and points live in one record behind a single lock,
/// so a lookup never observes a half-recorded submission.
#[derive(Debug, Default)]
pub struct ReceiptStore {
    records: Mutex<HashMap<ReceiptId, ScoredReceipt>>,
}

impl ReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scores the receipt, records it under a fresh identifier and returns the identifier.
    pub fn submit(&self, receipt: Receipt) -> ReceiptId {
        let points = scoring::score(&receipt);
        let mut records = self.records();

        let mut id = ReceiptId::generate();
        while records.contains_key(&id) {
            id = ReceiptId::generate();
        }

        debug!(receipt_id = %id, points, retailer = %receipt.retailer, "receipt scored");
        records.insert(
            id.clone(),
            ScoredReceipt {
                id: id.clone(),
                receipt,
                points,
            },
        );
        id
    }

    /// Points recorded for `id` at submission time.
    pub fn get_points(&self, id: &ReceiptId) -> Result<u64, StoreError> {
        self.get(id).map(|record| record.points)
    }

    /// Full record for `id`.
    pub fn get(&self, id: &ReceiptId) -> Result<ScoredReceipt, StoreError> {
        match self.records().get(id) {
            Some(record) => Ok(record.clone()),
            None => {
                debug!(receipt_id = %id, "receipt lookup missed");
                Err(StoreError::NotFound(id.clone()))
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // Records are inserted whole, so a poisoned map is still consistent.
    fn records(&self) -> MutexGuard<'_, HashMap<ReceiptId, ScoredReceipt>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Error raised by receipt lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("no receipt recorded for id {0}")]
    NotFound(ReceiptId),
}
