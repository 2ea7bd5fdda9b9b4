//! Core module containing the bill domain types and collaborator seams

pub mod bill;
pub mod error;
pub mod navigation;
pub mod receipt;
pub mod store;

pub use bill::{Bill, BillStatus};
pub use error::{BilledError, ErrorResponse, FormError};
pub use navigation::{Navigator, NullNavigator, RoutePath};
pub use receipt::{ALLOWED_EXTENSIONS, ReceiptError, validate_receipt_name};
pub use store::{BillStore, ReceiptRef, ReceiptUpload, StoreError};
