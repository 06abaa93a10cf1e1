//! Storage interface for invoicing-core.
//!
//! Persistence lives in an external document store; this trait is the
//! injected seam the service layer talks to. All consistency and retry
//! policy belongs to the implementation, not to the computation core.

use crate::error::AppError;
use crate::models::{Client, CreateClient, CreateInvoice, Invoice, PaymentUpdate};
use async_trait::async_trait;
use uuid::Uuid;

#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Persist a new invoice. The store assigns `invoice_id` and
    /// `created_at`; monetary fields arrive pre-computed and are stored
    /// verbatim.
    async fn create_invoice(&self, input: &CreateInvoice) -> Result<Invoice, AppError>;

    async fn get_invoice(&self, invoice_id: Uuid) -> Result<Option<Invoice>, AppError>;

    /// Read all invoices, newest first.
    async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError>;

    /// Apply the payment-completion partial update
    /// `{status: completed, paid_at, payment_method}`.
    async fn record_payment(
        &self,
        invoice_id: Uuid,
        update: &PaymentUpdate,
    ) -> Result<Invoice, AppError>;

    async fn create_client(&self, input: &CreateClient) -> Result<Client, AppError>;

    async fn get_client(&self, client_id: Uuid) -> Result<Option<Client>, AppError>;

    async fn list_clients(&self) -> Result<Vec<Client>, AppError>;
}
