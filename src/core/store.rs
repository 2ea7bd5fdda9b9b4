//! Store collaborator seam: the remote persistence API the services call

use crate::core::bill::Bill;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Payload sent to the store when a receipt file is selected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptUpload {
    pub file_name: String,
    pub email: String,
}

/// Reference returned by the store for an uploaded receipt.
///
/// `bill_id` is the key the later [`BillStore::update`] call persists under;
/// `file_url` is where the store hosts the file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReceiptRef {
    pub bill_id: Uuid,
    pub file_url: String,
}

/// A store call rejection.
///
/// The `Display` form is the exact message surfaced to the user, in the
/// application's French convention. No retry policy exists anywhere: callers
/// surface the message and stop.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store does not know the requested resource.
    #[error("Erreur 404")]
    NotFound,

    /// The store failed internally.
    #[error("Erreur 500")]
    Internal,

    /// Any other rejection, message passed through verbatim.
    #[error("{0}")]
    Other(String),
}

/// External persistence collaborator.
///
/// Implementations are storage-agnostic: the services only rely on this
/// contract. All calls are asynchronous; the only ordering guarantee callers
/// get is that a result is observed after the call resolves.
#[async_trait]
pub trait BillStore: Send + Sync {
    /// Fetch the full bill collection, in store order.
    async fn list(&self) -> Result<Vec<Bill>, StoreError>;

    /// Persist a bill (upsert keyed by `bill.id`).
    async fn update(&self, bill: Bill) -> Result<Bill, StoreError>;

    /// Upload a receipt file, allocating the bill key and hosted URL the
    /// submission will complete.
    async fn create_receipt(&self, upload: ReceiptUpload) -> Result<ReceiptRef, StoreError>;
}
