//! The expense-report record and its lifecycle status

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a bill, set by the back office after review.
///
/// Serialized lowercase (`pending` / `accepted` / `refused`) to match the
/// store's wire format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// Label shown in the employee-facing list (the application is French).
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

/// An expense-report record.
///
/// Created client-side when an employee submits the new-bill form, persisted
/// by the store, read back as a list for display. Not mutated in-process
/// after creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: Uuid,

    /// Email of the employee who filed the expense.
    pub email: String,

    /// Expense category (e.g. "Transports", "Hôtel et logement").
    #[serde(rename = "type")]
    pub bill_type: String,

    /// Free-form name given by the employee.
    pub name: String,

    /// Expense date. ISO `%Y-%m-%d` string on the wire; validity of the
    /// calendar date is enforced by the type.
    pub date: NaiveDate,

    /// Amount in currency units.
    pub amount: f64,

    /// VAT amount.
    pub vat: f64,

    /// VAT percentage.
    pub pct: u8,

    /// Free-form commentary.
    pub commentary: String,

    /// URL of the hosted receipt file.
    pub file_url: String,

    /// Original name of the uploaded receipt file.
    pub file_name: String,

    pub status: BillStatus,
}
