//! New bill submission: receipt validation, assembly, persistence, navigation

use crate::core::bill::{Bill, BillStatus};
use crate::core::error::{BilledError, FormError};
use crate::core::navigation::{Navigator, RoutePath};
use crate::core::receipt::validate_receipt_name;
use crate::core::store::{BillStore, ReceiptRef, ReceiptUpload};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use tracing::{error, info, warn};
use validator::Validate;

/// Field values of the new-bill form.
#[derive(Clone, Debug, Serialize, Deserialize, Validate)]
pub struct NewBillForm {
    /// Expense category.
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "le type de dépense est requis"))]
    pub bill_type: String,

    #[validate(length(min = 1, message = "le nom de la dépense est requis"))]
    pub name: String,

    pub date: NaiveDate,

    #[validate(range(min = 0.0, message = "le montant doit être positif"))]
    pub amount: f64,

    #[validate(range(min = 0.0, message = "la TVA doit être positive"))]
    pub vat: f64,

    #[validate(range(max = 100, message = "le pourcentage ne doit pas dépasser 100"))]
    pub pct: u8,

    #[serde(default)]
    pub commentary: String,
}

/// Receipt retained between file selection and submission.
#[derive(Clone, Debug)]
struct PendingReceipt {
    reference: ReceiptRef,
    file_name: String,
}

/// Drives the new-bill flow for one employee session.
///
/// Two phases, mirroring the form: [`attach_receipt`](Self::attach_receipt)
/// when a file is selected, [`submit`](Self::submit) when the form is sent.
pub struct NewBill {
    store: Arc<dyn BillStore>,
    navigator: Arc<dyn Navigator>,
    email: String,
    receipt: Mutex<Option<PendingReceipt>>,
}

impl NewBill {
    pub fn new(store: Arc<dyn BillStore>, navigator: Arc<dyn Navigator>, email: String) -> Self {
        Self {
            store,
            navigator,
            email,
            receipt: Mutex::new(None),
        }
    }

    /// Validate and upload a selected receipt file.
    ///
    /// A new selection always replaces the previous one: on rejection the
    /// pending receipt is cleared (the form ends up with no file attached,
    /// as the UI resets the file input) and no store call is made. On
    /// acceptance the file is uploaded and the returned reference retained
    /// for [`submit`](Self::submit).
    pub async fn attach_receipt(&self, file_name: &str) -> Result<ReceiptRef, BilledError> {
        self.set_receipt(None)?;

        if let Err(err) = validate_receipt_name(file_name) {
            warn!(file_name, "receipt file rejected");
            return Err(err.into());
        }

        let reference = self
            .store
            .create_receipt(ReceiptUpload {
                file_name: file_name.to_string(),
                email: self.email.clone(),
            })
            .await
            .inspect_err(|err| error!(%err, file_name, "receipt upload failed"))?;

        self.set_receipt(Some(PendingReceipt {
            reference: reference.clone(),
            file_name: file_name.to_string(),
        }))?;

        info!(file_name, bill_id = %reference.bill_id, "receipt attached");
        Ok(reference)
    }

    /// The currently attached receipt reference, if any.
    pub fn attached_receipt(&self) -> Option<ReceiptRef> {
        self.receipt
            .lock()
            .ok()
            .and_then(|guard| guard.as_ref().map(|pending| pending.reference.clone()))
    }

    /// Assemble and persist the bill, then navigate to the list view.
    ///
    /// Requires an attached receipt. Calls the store's `update` exactly once;
    /// on success navigates to [`RoutePath::Bills`] exactly once. On failure
    /// the error is logged and returned, and no navigation happens. No retry.
    pub async fn submit(&self, form: NewBillForm) -> Result<Bill, BilledError> {
        form.validate()?;

        let pending = self
            .pending_receipt()?
            .ok_or(FormError::MissingReceipt)?;

        let bill = Bill {
            id: pending.reference.bill_id,
            email: self.email.clone(),
            bill_type: form.bill_type,
            name: form.name,
            date: form.date,
            amount: form.amount,
            vat: form.vat,
            pct: form.pct,
            commentary: form.commentary,
            file_url: pending.reference.file_url,
            file_name: pending.file_name,
            status: BillStatus::Pending,
        };

        match self.store.update(bill).await {
            Ok(stored) => {
                info!(bill_id = %stored.id, name = %stored.name, "bill submitted");
                self.navigator.navigate(RoutePath::Bills);
                Ok(stored)
            }
            Err(err) => {
                error!(%err, "bill submission failed");
                Err(err.into())
            }
        }
    }

    fn pending_receipt(&self) -> Result<Option<PendingReceipt>, BilledError> {
        Ok(self
            .receipt
            .lock()
            .map_err(|_| BilledError::Internal("receipt lock poisoned".to_string()))?
            .clone())
    }

    fn set_receipt(&self, value: Option<PendingReceipt>) -> Result<(), BilledError> {
        *self
            .receipt
            .lock()
            .map_err(|_| BilledError::Internal("receipt lock poisoned".to_string()))? = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigation::NullNavigator;
    use crate::storage::InMemoryBillStore;

    fn form() -> NewBillForm {
        NewBillForm {
            bill_type: "Restaurants et bars".to_string(),
            name: "Déjeuner client".to_string(),
            date: "2022-06-14".parse().unwrap(),
            amount: 56.0,
            vat: 11.2,
            pct: 20,
            commentary: String::new(),
        }
    }

    fn service() -> NewBill {
        NewBill::new(
            Arc::new(InMemoryBillStore::new()),
            Arc::new(NullNavigator),
            "employee@test.tld".to_string(),
        )
    }

    #[tokio::test]
    async fn test_attach_then_submit_persists_pending_bill() {
        let service = service();
        let reference = service.attach_receipt("ticket.jpg").await.unwrap();

        let bill = service.submit(form()).await.unwrap();
        assert_eq!(bill.id, reference.bill_id);
        assert_eq!(bill.file_url, reference.file_url);
        assert_eq!(bill.file_name, "ticket.jpg");
        assert_eq!(bill.status, BillStatus::Pending);
        assert_eq!(bill.email, "employee@test.tld");
    }

    #[tokio::test]
    async fn test_rejected_file_clears_previous_receipt() {
        let service = service();
        service.attach_receipt("ticket.png").await.unwrap();
        assert!(service.attached_receipt().is_some());

        let err = service.attach_receipt("ticket.pdf").await.unwrap_err();
        assert_eq!(err.error_code(), "RECEIPT_REJECTED");
        assert!(service.attached_receipt().is_none());
    }

    #[tokio::test]
    async fn test_submit_without_receipt_is_rejected() {
        let service = service();
        let err = service.submit(form()).await.unwrap_err();
        assert_eq!(err.error_code(), "MISSING_RECEIPT");
    }

    #[tokio::test]
    async fn test_invalid_form_is_rejected_before_store_call() {
        let service = service();
        service.attach_receipt("ticket.jpg").await.unwrap();

        let mut invalid = form();
        invalid.name = String::new();
        let err = service.submit(invalid).await.unwrap_err();
        assert_eq!(err.error_code(), "FORM_INVALID");
    }
}
