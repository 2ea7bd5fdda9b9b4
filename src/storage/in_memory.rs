//! In-memory implementation of BillStore for testing and development

use crate::core::bill::Bill;
use crate::core::store::{BillStore, ReceiptRef, ReceiptUpload, StoreError};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory bill store.
///
/// Uses RwLock for thread-safe access. Insertion order is preserved, so
/// `list()` order is deterministic; that matters because the loader's
/// stable sort makes store order observable for equal dates.
#[derive(Clone)]
pub struct InMemoryBillStore {
    bills: Arc<RwLock<IndexMap<Uuid, Bill>>>,
}

impl InMemoryBillStore {
    /// Create an empty in-memory store.
    pub fn new() -> Self {
        Self {
            bills: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store seeded with the given bills, in order.
    pub fn with_bills(bills: Vec<Bill>) -> Self {
        Self {
            bills: Arc::new(RwLock::new(
                bills.into_iter().map(|bill| (bill.id, bill)).collect(),
            )),
        }
    }
}

impl Default for InMemoryBillStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillStore for InMemoryBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        let bills = self
            .bills
            .read()
            .map_err(|e| StoreError::Other(format!("Failed to acquire read lock: {}", e)))?;

        Ok(bills.values().cloned().collect())
    }

    async fn update(&self, bill: Bill) -> Result<Bill, StoreError> {
        let mut bills = self
            .bills
            .write()
            .map_err(|e| StoreError::Other(format!("Failed to acquire write lock: {}", e)))?;

        bills.insert(bill.id, bill.clone());

        Ok(bill)
    }

    async fn create_receipt(&self, upload: ReceiptUpload) -> Result<ReceiptRef, StoreError> {
        // Allocates the key and hosted URL only; the record becomes visible
        // to list() when the submission's update() lands.
        let bill_id = Uuid::new_v4();
        Ok(ReceiptRef {
            bill_id,
            file_url: format!("https://billed.test/receipts/{}/{}", bill_id, upload.file_name),
        })
    }
}
