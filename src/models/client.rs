//! Client model for invoicing-core.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A billable client. Invoices snapshot `name` and `email` at creation time
/// rather than referencing this record, so later edits never rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub client_id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Input for creating a client.
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub phone: Option<String>,
}
