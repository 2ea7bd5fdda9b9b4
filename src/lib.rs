//! # Billed
//!
//! Core services of a small employee expense-report application:
//!
//! - **Bill list loading**: fetch the collection from a store collaborator
//!   and return it sorted by date descending, optionally annotated with the
//!   French display forms.
//! - **New bill submission**: validate an uploaded receipt's file extension
//!   ({png, jpg, jpeg}, case-insensitive), assemble the bill from the form
//!   fields, persist it through the store, and navigate to the list view.
//!
//! The store and the navigation surface are traits, so the services run the
//! same against the bundled in-memory store, a remote API client, or test
//! doubles. Store failures carry a user-facing message (`Erreur 404`,
//! `Erreur 500`) that is surfaced without retry.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use billed::prelude::*;
//!
//! let store: Arc<dyn BillStore> = Arc::new(InMemoryBillStore::new());
//!
//! // List, most recent first
//! let bills = BillList::new(store.clone()).get_bills().await?;
//!
//! // Submit a new expense
//! let new_bill = NewBill::new(store, Arc::new(NullNavigator), "employee@acme.fr".into());
//! new_bill.attach_receipt("ticket.jpg").await?;
//! new_bill.submit(form).await?;
//! ```
//!
//! A REST surface over the same services lives in [`server`], runnable via
//! the `server` example.

pub mod bills;
pub mod config;
pub mod core;
pub mod newbill;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core types and seams ===
    pub use crate::core::{
        bill::{Bill, BillStatus},
        error::{BilledError, ErrorResponse, FormError},
        navigation::{Navigator, NullNavigator, RoutePath},
        receipt::{ALLOWED_EXTENSIONS, ReceiptError, validate_receipt_name},
        store::{BillStore, ReceiptRef, ReceiptUpload, StoreError},
    };

    // === Services ===
    pub use crate::bills::{BillList, BillView};
    pub use crate::newbill::{NewBill, NewBillForm};

    // === Storage ===
    pub use crate::storage::InMemoryBillStore;

    // === Config ===
    pub use crate::config::AppConfig;

    // === Server ===
    pub use crate::server::Builder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
