//! Bill list loading: fetch the collection, order it, annotate for display

pub mod format;

use crate::core::bill::Bill;
use crate::core::error::BilledError;
use crate::core::store::BillStore;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info};

/// A bill annotated with its display forms for the list view.
#[derive(Clone, Debug, Serialize)]
pub struct BillView {
    #[serde(flatten)]
    pub bill: Bill,

    /// French short date, e.g. `4 Avr. 04`.
    pub formatted_date: String,

    /// French status label, e.g. `En attente`.
    pub status_label: &'static str,
}

/// Loads the bill collection from the store for display.
pub struct BillList {
    store: Arc<dyn BillStore>,
}

impl BillList {
    pub fn new(store: Arc<dyn BillStore>) -> Self {
        Self { store }
    }

    /// Fetch all bills, sorted by date descending (most recent first).
    ///
    /// The sort is stable: bills sharing a date keep the store's order. All
    /// other fields pass through untouched. Store failures propagate to the
    /// caller for display; there is no retry.
    pub async fn get_bills(&self) -> Result<Vec<Bill>, BilledError> {
        let mut bills = self.store.list().await.inspect_err(|err| {
            error!(%err, "failed to load bill list");
        })?;

        bills.sort_by(|a, b| b.date.cmp(&a.date));

        info!(count = bills.len(), "bill list loaded");
        Ok(bills)
    }

    /// Same ordering as [`get_bills`](Self::get_bills), each record annotated
    /// with the French display forms shown in the list view.
    pub async fn get_bill_views(&self) -> Result<Vec<BillView>, BilledError> {
        let views = self
            .get_bills()
            .await?
            .into_iter()
            .map(|bill| BillView {
                formatted_date: format::short_date_fr(bill.date),
                status_label: bill.status.label(),
                bill,
            })
            .collect();
        Ok(views)
    }
}
