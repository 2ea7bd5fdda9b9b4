//! Shared test harness for the bill services
//!
//! Provides bill builders, the four-record sample collection the mock store
//! of the original application ships, and the store/navigator test doubles.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod support;
//! use support::*;
//! ```

#![allow(dead_code)]

use async_trait::async_trait;
use billed::prelude::*;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

// ---------------------------------------------------------------------------
// Bill builders
// ---------------------------------------------------------------------------

/// Build a bill with sensible defaults.
pub fn bill(name: &str, date: &str) -> Bill {
    Bill {
        id: Uuid::new_v4(),
        email: "employee@test.tld".to_string(),
        bill_type: "Transports".to_string(),
        name: name.to_string(),
        date: date.parse::<NaiveDate>().expect("valid test date"),
        amount: 100.0,
        vat: 20.0,
        pct: 20,
        commentary: String::new(),
        file_url: format!("https://billed.test/receipts/{name}.jpg"),
        file_name: format!("{name}.jpg"),
        status: BillStatus::Pending,
    }
}

/// The four sample bills, mirroring the mock store of the host application.
/// Deliberately not in date order.
pub fn sample_bills() -> Vec<Bill> {
    let mut encore = bill("encore", "2004-04-04");
    encore.bill_type = "Hôtel et logement".to_string();
    encore.amount = 400.0;

    let mut test1 = bill("test1", "2001-01-01");
    test1.status = BillStatus::Refused;

    let mut test3 = bill("test3", "2003-03-03");
    test3.bill_type = "Services en ligne".to_string();
    test3.status = BillStatus::Accepted;

    let mut test2 = bill("test2", "2002-02-02");
    test2.bill_type = "Restaurants et bars".to_string();
    test2.status = BillStatus::Refused;

    vec![encore, test1, test3, test2]
}

/// A seeded in-memory store behind the trait object the services expect.
pub fn seeded_store() -> Arc<dyn BillStore> {
    Arc::new(InMemoryBillStore::with_bills(sample_bills()))
}

// ---------------------------------------------------------------------------
// Store doubles
// ---------------------------------------------------------------------------

/// Store whose every call rejects with a fixed error.
pub struct FailingBillStore {
    pub error: StoreError,
}

impl FailingBillStore {
    pub fn new(error: StoreError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl BillStore for FailingBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        Err(self.error.clone())
    }

    async fn update(&self, _bill: Bill) -> Result<Bill, StoreError> {
        Err(self.error.clone())
    }

    async fn create_receipt(&self, _upload: ReceiptUpload) -> Result<ReceiptRef, StoreError> {
        Err(self.error.clone())
    }
}

/// Delegating store that counts calls, for "exactly once" assertions.
pub struct CountingBillStore {
    inner: InMemoryBillStore,
    pub list_calls: AtomicUsize,
    pub update_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    /// When set, `update` rejects with this error (after counting).
    pub update_error: Option<StoreError>,
}

impl CountingBillStore {
    pub fn new() -> Self {
        Self {
            inner: InMemoryBillStore::new(),
            list_calls: AtomicUsize::new(0),
            update_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            update_error: None,
        }
    }

    pub fn failing_updates(error: StoreError) -> Self {
        Self {
            update_error: Some(error),
            ..Self::new()
        }
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BillStore for CountingBillStore {
    async fn list(&self) -> Result<Vec<Bill>, StoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.list().await
    }

    async fn update(&self, bill: Bill) -> Result<Bill, StoreError> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = &self.update_error {
            return Err(error.clone());
        }
        self.inner.update(bill).await
    }

    async fn create_receipt(&self, upload: ReceiptUpload) -> Result<ReceiptRef, StoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.create_receipt(upload).await
    }
}

// ---------------------------------------------------------------------------
// Navigator double
// ---------------------------------------------------------------------------

/// Navigator that records every route it is asked to visit.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<RoutePath>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<RoutePath> {
        self.routes.lock().expect("navigator lock").clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, route: RoutePath) {
        self.routes.lock().expect("navigator lock").push(route);
    }
}

// ---------------------------------------------------------------------------
// Assertion helpers
// ---------------------------------------------------------------------------

/// Assert that bill dates are non-increasing.
pub fn assert_sorted_descending(bills: &[Bill]) {
    for window in bills.windows(2) {
        assert!(
            window[0].date >= window[1].date,
            "bills out of order: {} ({}) before {} ({})",
            window[0].name,
            window[0].date,
            window[1].name,
            window[1].date
        );
    }
}
