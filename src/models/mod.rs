//! Domain models for invoicing-core.

mod client;
mod invoice;
mod line_item;

pub use client::{Client, CreateClient};
pub use invoice::{
    CreateInvoice, Invoice, InvoiceDraft, InvoiceStatus, PaymentUpdate, RecurringFrequency,
    RecurringSchedule,
};
pub use line_item::LineItem;
