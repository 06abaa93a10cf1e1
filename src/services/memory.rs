//! In-memory document store.
//!
//! Invoices are held as loose JSON documents, the way the hosted document
//! database hands them back, and normalized through
//! [`Invoice::from_document`] on every read. Sparse legacy documents can be
//! seeded directly to exercise the default-fill path.

use crate::error::AppError;
use crate::models::{Client, CreateClient, CreateInvoice, Invoice, PaymentUpdate};
use crate::services::store::InvoiceStore;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::{info, instrument};
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryStore {
    invoices: RwLock<HashMap<Uuid, serde_json::Value>>,
    clients: RwLock<HashMap<Uuid, Client>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a raw invoice document, bypassing the creation path. The
    /// document must carry an `invoice_id`; everything else may be absent
    /// and fills with defaults on read.
    pub fn seed_document(&self, doc: serde_json::Value) -> Result<Uuid, AppError> {
        let invoice = Invoice::from_document(doc.clone())?;
        self.invoices_mut()?.insert(invoice.invoice_id, doc);
        Ok(invoice.invoice_id)
    }

    fn invoices_mut(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, serde_json::Value>>, AppError> {
        self.invoices
            .write()
            .map_err(|_| AppError::StorageError(anyhow::anyhow!("invoice store lock poisoned")))
    }

    fn invoices_ref(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, serde_json::Value>>, AppError> {
        self.invoices
            .read()
            .map_err(|_| AppError::StorageError(anyhow::anyhow!("invoice store lock poisoned")))
    }

    fn clients_mut(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Client>>, AppError> {
        self.clients
            .write()
            .map_err(|_| AppError::StorageError(anyhow::anyhow!("client store lock poisoned")))
    }

    fn clients_ref(
        &self,
    ) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, Client>>, AppError> {
        self.clients
            .read()
            .map_err(|_| AppError::StorageError(anyhow::anyhow!("client store lock poisoned")))
    }
}

#[async_trait]
impl InvoiceStore for MemoryStore {
    #[instrument(skip(self, input))]
    async fn create_invoice(&self, input: &CreateInvoice) -> Result<Invoice, AppError> {
        let invoice = Invoice {
            invoice_id: Uuid::new_v4(),
            client_id: input.client_id,
            client_name: input.client_name.clone(),
            client_email: input.client_email.clone(),
            line_items: input.line_items.clone(),
            subtotal: input.subtotal,
            total_tax: input.total_tax,
            discount: input.discount,
            total: input.total,
            currency: input.currency,
            due_date: input.due_date,
            created_at: Utc::now(),
            status: input.status,
            payment_terms: input.payment_terms.clone(),
            paid_at: None,
            payment_method: None,
            recurring: input.recurring.clone(),
        };

        let doc = serde_json::to_value(&invoice)
            .map_err(|e| AppError::StorageError(anyhow::anyhow!("failed to encode invoice: {e}")))?;
        self.invoices_mut()?.insert(invoice.invoice_id, doc);

        info!(invoice_id = %invoice.invoice_id, total = %invoice.total, "Invoice created");

        Ok(invoice)
    }

    #[instrument(skip(self), fields(invoice_id = %invoice_id))]
    async fn get_invoice(&self, invoice_id: Uuid) -> Result<Option<Invoice>, AppError> {
        let docs = self.invoices_ref()?;
        docs.get(&invoice_id)
            .cloned()
            .map(Invoice::from_document)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        let docs = self.invoices_ref()?;
        let mut invoices = docs
            .values()
            .cloned()
            .map(Invoice::from_document)
            .collect::<Result<Vec<_>, _>>()?;
        invoices.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(invoices)
    }

    #[instrument(skip(self, update), fields(invoice_id = %invoice_id))]
    async fn record_payment(
        &self,
        invoice_id: Uuid,
        update: &PaymentUpdate,
    ) -> Result<Invoice, AppError> {
        let mut docs = self.invoices_mut()?;
        let doc = docs.get_mut(&invoice_id).ok_or_else(|| {
            AppError::NotFound(anyhow::anyhow!("invoice {invoice_id} not found"))
        })?;

        if let Some(fields) = doc.as_object_mut() {
            fields.insert("status".into(), json!("completed"));
            fields.insert("paid_at".into(), json!(update.paid_at));
            fields.insert("payment_method".into(), json!(update.payment_method));
        }

        let invoice = Invoice::from_document(doc.clone())?;

        info!(invoice_id = %invoice_id, payment_method = %update.payment_method, "Payment recorded");

        Ok(invoice)
    }

    #[instrument(skip(self, input))]
    async fn create_client(&self, input: &CreateClient) -> Result<Client, AppError> {
        let client = Client {
            client_id: Uuid::new_v4(),
            name: input.name.clone(),
            email: input.email.clone(),
            company: input.company.clone(),
            phone: input.phone.clone(),
        };
        self.clients_mut()?.insert(client.client_id, client.clone());

        info!(client_id = %client.client_id, name = %client.name, "Client created");

        Ok(client)
    }

    #[instrument(skip(self), fields(client_id = %client_id))]
    async fn get_client(&self, client_id: Uuid) -> Result<Option<Client>, AppError> {
        Ok(self.clients_ref()?.get(&client_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_clients(&self) -> Result<Vec<Client>, AppError> {
        let clients = self.clients_ref()?;
        let mut all: Vec<Client> = clients.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
