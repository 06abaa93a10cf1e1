//! Invoice model for invoicing-core.

use crate::currency::Currency;
use crate::error::AppError;
use crate::models::LineItem;
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Persisted payment state of an invoice.
///
/// `Overdue` and `Paid` survive only as legacy stored values; urgency is
/// always recomputed from the due date at read time and the stored value is
/// never authoritative (see [`crate::classify`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum InvoiceStatus {
    #[default]
    Pending,
    Completed,
    /// Legacy spelling of `Completed` still present in older documents.
    Paid,
    /// Legacy stored urgency flag; ignored by classification.
    Overdue,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Completed => "completed",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "completed" => InvoiceStatus::Completed,
            "paid" => InvoiceStatus::Paid,
            "overdue" => InvoiceStatus::Overdue,
            _ => InvoiceStatus::Pending,
        }
    }

    /// Whether the invoice has been settled, under either spelling.
    pub fn is_paid(&self) -> bool {
        matches!(self, InvoiceStatus::Completed | InvoiceStatus::Paid)
    }
}

impl From<String> for InvoiceStatus {
    fn from(s: String) -> Self {
        InvoiceStatus::from_string(&s)
    }
}

/// Recurrence cadence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurringFrequency {
    Weekly,
    Monthly,
    Quarterly,
    Yearly,
}

impl RecurringFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecurringFrequency::Weekly => "weekly",
            RecurringFrequency::Monthly => "monthly",
            RecurringFrequency::Quarterly => "quarterly",
            RecurringFrequency::Yearly => "yearly",
        }
    }
}

/// Recurrence descriptor attached at creation.
///
/// Captured as data only: no generator materializes the repeat invoices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecurringSchedule {
    pub frequency: RecurringFrequency,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub occurrences: Option<u32>,
}

/// Invoice document.
///
/// Monetary fields are frozen at creation by the aggregator; the only
/// permitted mutation afterwards is the pending -> completed payment
/// transition. Missing fields on stored documents fill with defaults at the
/// read boundary (currency -> USD, status -> pending, items -> empty).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: Uuid,
    /// Client snapshot taken at creation; not a live reference.
    #[serde(default)]
    pub client_id: Option<Uuid>,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub client_email: String,
    /// Insertion order preserved for display; computation is order-free.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub total_tax: Decimal,
    /// Flat currency amount, applied once to the whole invoice.
    #[serde(default)]
    pub discount: Decimal,
    /// `subtotal + total_tax - discount`; may be negative, never clamped.
    #[serde(default)]
    pub total: Decimal,
    #[serde(default)]
    pub currency: Currency,
    /// Absent means "no due date" and disables urgency classification.
    #[serde(default, deserialize_with = "lenient_date")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub status: InvoiceStatus,
    /// Informational label ("Net 30"); never fed into computation.
    #[serde(default)]
    pub payment_terms: String,
    #[serde(default)]
    pub paid_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub recurring: Option<RecurringSchedule>,
}

impl Invoice {
    /// Short human-facing invoice number derived from the storage id.
    pub fn invoice_number(&self) -> String {
        let id = self.invoice_id.simple().to_string();
        format!("INV-{}", id[id.len() - 8..].to_uppercase())
    }

    /// Normalize a loose storage document into a typed invoice, filling
    /// defaults for any missing fields. Only a missing id is fatal.
    pub fn from_document(doc: serde_json::Value) -> Result<Self, AppError> {
        serde_json::from_value(doc)
            .map_err(|e| AppError::StorageError(anyhow::anyhow!("malformed invoice document: {e}")))
    }
}

/// An invalid stored date means "no due date", not an error.
fn lenient_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|s| s.parse::<NaiveDate>().ok()))
}

/// Input assembled by the creation flow, before totals are computed.
#[derive(Debug, Clone)]
pub struct InvoiceDraft {
    pub client_id: Uuid,
    pub line_items: Vec<LineItem>,
    pub discount: Decimal,
    pub currency: Currency,
    pub due_date: Option<NaiveDate>,
    pub payment_terms: String,
    pub recurring: Option<RecurringSchedule>,
}

/// Input for persisting a new invoice; the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct CreateInvoice {
    pub client_id: Option<Uuid>,
    pub client_name: String,
    pub client_email: String,
    pub line_items: Vec<LineItem>,
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    pub discount: Decimal,
    pub total: Decimal,
    pub currency: Currency,
    pub due_date: Option<NaiveDate>,
    pub status: InvoiceStatus,
    pub payment_terms: String,
    pub recurring: Option<RecurringSchedule>,
}

/// Partial update recorded by the payment-completion transition.
#[derive(Debug, Clone)]
pub struct PaymentUpdate {
    pub paid_at: DateTime<Utc>,
    pub payment_method: String,
}
