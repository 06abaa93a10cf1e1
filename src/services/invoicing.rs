//! Invoicing service: orchestrates validation, aggregation, and the payment
//! lifecycle over an injected store and clock.

use crate::classify::{classify, UrgencyFilter, UrgencyLabel};
use crate::clock::Clock;
use crate::error::AppError;
use crate::models::{
    Client, CreateClient, CreateInvoice, Invoice, InvoiceDraft, InvoiceStatus, PaymentUpdate,
};
use crate::services::store::InvoiceStore;
use crate::totals::validate_and_aggregate;
use tracing::{info, instrument};
use uuid::Uuid;

/// An invoice paired with its freshly computed urgency label, as list views
/// render it.
#[derive(Debug, Clone)]
pub struct InvoiceSummary {
    pub invoice: Invoice,
    pub label: UrgencyLabel,
}

/// Service facade over a storage backend and a clock.
///
/// Monetary fields are computed once at creation and frozen; there is no
/// edit-and-recompute path. Correcting a mistake means issuing a fresh
/// invoice.
pub struct InvoicingService<S, C> {
    store: S,
    clock: C,
}

impl<S: InvoiceStore, C: Clock> InvoicingService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Create an invoice from a draft: validate the line items and discount,
    /// aggregate totals, snapshot the client, and persist.
    ///
    /// The client snapshot is copied by value; later edits to the client
    /// record leave this invoice untouched.
    #[instrument(skip(self, draft), fields(client_id = %draft.client_id))]
    pub async fn create_invoice(&self, draft: InvoiceDraft) -> Result<Invoice, AppError> {
        let totals = validate_and_aggregate(&draft.line_items, draft.discount)?;

        let client = self
            .store
            .get_client(draft.client_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(anyhow::anyhow!("client {} not found", draft.client_id))
            })?;

        let invoice = self
            .store
            .create_invoice(&CreateInvoice {
                client_id: Some(client.client_id),
                client_name: client.name,
                client_email: client.email,
                line_items: draft.line_items,
                subtotal: totals.subtotal,
                total_tax: totals.total_tax,
                discount: draft.discount,
                total: totals.total,
                currency: draft.currency,
                due_date: draft.due_date,
                status: InvoiceStatus::Pending,
                payment_terms: draft.payment_terms,
                recurring: draft.recurring,
            })
            .await?;

        info!(
            invoice_id = %invoice.invoice_id,
            subtotal = %invoice.subtotal,
            total = %invoice.total,
            "Invoice created"
        );

        Ok(invoice)
    }

    pub async fn get_invoice(&self, invoice_id: Uuid) -> Result<Option<Invoice>, AppError> {
        self.store.get_invoice(invoice_id).await
    }

    /// Mark a pending invoice as paid, recording when and how.
    ///
    /// The only permitted status transition: anything other than
    /// pending -> completed is rejected.
    #[instrument(skip(self), fields(invoice_id = %invoice_id))]
    pub async fn complete_payment(
        &self,
        invoice_id: Uuid,
        payment_method: &str,
    ) -> Result<Invoice, AppError> {
        let invoice = self.store.get_invoice(invoice_id).await?.ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("invoice {invoice_id} not found"))
        })?;

        if invoice.status != InvoiceStatus::Pending {
            return Err(AppError::Conflict(anyhow::anyhow!(
                "invoice {} is {}, only pending invoices can be completed",
                invoice_id,
                invoice.status.as_str()
            )));
        }

        let paid = self
            .store
            .record_payment(
                invoice_id,
                &PaymentUpdate {
                    paid_at: self.clock.now(),
                    payment_method: payment_method.to_string(),
                },
            )
            .await?;

        info!(invoice_id = %invoice_id, payment_method, "Invoice marked completed");

        Ok(paid)
    }

    /// Read invoices with their urgency recomputed at the current clock
    /// reading, filtered by classification bucket.
    #[instrument(skip(self))]
    pub async fn list_invoices(
        &self,
        filter: UrgencyFilter,
    ) -> Result<Vec<InvoiceSummary>, AppError> {
        let now = self.clock.now();
        let summaries = self
            .store
            .list_invoices()
            .await?
            .into_iter()
            .map(|invoice| InvoiceSummary {
                label: classify(&invoice, now),
                invoice,
            })
            .filter(|summary| filter.matches(summary.label))
            .collect();
        Ok(summaries)
    }

    pub async fn create_client(&self, input: CreateClient) -> Result<Client, AppError> {
        if input.name.trim().is_empty() {
            return Err(AppError::validation("name", "client name is required"));
        }
        if input.email.trim().is_empty() {
            return Err(AppError::validation("email", "client email is required"));
        }
        self.store.create_client(&input).await
    }

    pub async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        self.store.list_clients().await
    }
}
