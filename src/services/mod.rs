//! Services module for invoicing-core.

pub mod invoicing;
pub mod memory;
pub mod store;

pub use invoicing::{InvoiceSummary, InvoicingService};
pub use memory::MemoryStore;
pub use store::InvoiceStore;
