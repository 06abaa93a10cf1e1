//! Shared fixtures for invoicing-core tests.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use invoicing_core::clock::FixedClock;
use invoicing_core::currency::Currency;
use invoicing_core::models::{Client, CreateClient, Invoice, InvoiceDraft, InvoiceStatus, LineItem};
use invoicing_core::services::{InvoicingService, MemoryStore};
use rust_decimal::Decimal;

/// Decimal literal helper.
pub fn dec(s: &str) -> Decimal {
    s.parse().expect("valid decimal literal")
}

pub fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid date literal")
}

/// The frozen "now" every test runs at: mid-day, so due-date ceilings are
/// exercised against a fractional day remainder.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

pub fn test_service() -> InvoicingService<MemoryStore, FixedClock> {
    init_tracing();
    InvoicingService::new(MemoryStore::new(), FixedClock(test_now()))
}

/// Best-effort subscriber install so RUST_LOG surfaces service logs in
/// failing tests.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub async fn seed_client(
    service: &InvoicingService<MemoryStore, FixedClock>,
    name: &str,
) -> Client {
    service
        .create_client(CreateClient {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
            company: None,
            phone: None,
        })
        .await
        .expect("Failed to create client")
}

pub fn line(description: &str, quantity: &str, unit_price: &str, tax_rate: &str) -> LineItem {
    LineItem::new(description, dec(quantity), dec(unit_price), dec(tax_rate))
}

/// Minimal invoice for classification and report tests.
pub fn bare_invoice(status: InvoiceStatus, due_date: Option<NaiveDate>) -> Invoice {
    Invoice {
        invoice_id: uuid::Uuid::new_v4(),
        client_id: None,
        client_name: "Acme Corp".to_string(),
        client_email: "billing@acme.example".to_string(),
        line_items: Vec::new(),
        subtotal: Decimal::ZERO,
        total_tax: Decimal::ZERO,
        discount: Decimal::ZERO,
        total: Decimal::ZERO,
        currency: Currency::Usd,
        due_date,
        created_at: test_now(),
        status,
        payment_terms: "Net 30".to_string(),
        paid_at: None,
        payment_method: None,
        recurring: None,
    }
}

pub fn draft(client: &Client, line_items: Vec<LineItem>, discount: &str) -> InvoiceDraft {
    InvoiceDraft {
        client_id: client.client_id,
        line_items,
        discount: dec(discount),
        currency: Currency::Usd,
        due_date: None,
        payment_terms: "Net 30".to_string(),
        recurring: None,
    }
}
