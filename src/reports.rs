//! Reporting over a set of invoices: per-client revenue rollups and the CSV
//! export consumed by the reports screen.

use crate::classify::classify;
use crate::models::Invoice;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Number of clients surfaced in the top-clients rollup.
const TOP_CLIENTS: usize = 5;

/// A client's rolled-up amount, keyed by the snapshotted client name.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientTotal {
    pub client: String,
    pub total: Decimal,
}

/// Revenue rollup across a set of invoices.
#[derive(Debug, Clone)]
pub struct RevenueReport {
    /// Sum of all invoice totals, settled or not.
    pub total_billed: Decimal,
    /// Sum of totals on settled invoices.
    pub total_collected: Decimal,
    /// Sum of totals still open.
    pub total_outstanding: Decimal,
    /// Top clients by billed amount, descending, at most five.
    pub top_clients: Vec<ClientTotal>,
    /// Open balances per client, descending, settled invoices skipped.
    pub outstanding_by_client: Vec<ClientTotal>,
}

fn client_key(invoice: &Invoice) -> String {
    if invoice.client_name.trim().is_empty() {
        "Unknown".to_string()
    } else {
        invoice.client_name.clone()
    }
}

fn sorted_totals(pairs: Vec<(String, Decimal)>) -> Vec<ClientTotal> {
    let mut totals: Vec<ClientTotal> = pairs
        .into_iter()
        .map(|(client, total)| ClientTotal { client, total })
        .collect();
    totals.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.client.cmp(&b.client)));
    totals
}

/// Roll up billed, collected, and outstanding amounts per client.
pub fn revenue_report(invoices: &[Invoice]) -> RevenueReport {
    let mut total_billed = Decimal::ZERO;
    let mut total_collected = Decimal::ZERO;
    let mut billed_by_client: Vec<(String, Decimal)> = Vec::new();
    let mut open_by_client: Vec<(String, Decimal)> = Vec::new();

    let mut bump = |entries: &mut Vec<(String, Decimal)>, key: &str, amount: Decimal| {
        match entries.iter_mut().find(|(client, _)| client == key) {
            Some((_, total)) => *total += amount,
            None => entries.push((key.to_string(), amount)),
        }
    };

    for invoice in invoices {
        let key = client_key(invoice);
        total_billed += invoice.total;
        bump(&mut billed_by_client, &key, invoice.total);

        if invoice.status.is_paid() {
            total_collected += invoice.total;
        } else {
            bump(&mut open_by_client, &key, invoice.total);
        }
    }

    let mut top_clients = sorted_totals(billed_by_client);
    top_clients.truncate(TOP_CLIENTS);

    RevenueReport {
        total_billed,
        total_collected,
        total_outstanding: total_billed - total_collected,
        top_clients,
        outstanding_by_client: sorted_totals(open_by_client),
    }
}

/// Render invoices as CSV: header row first, comma-separated columns, rows
/// newline-terminated. Column order and presence are the contract; amounts
/// are raw totals, not currency-formatted, and missing dates print as N/A.
pub fn export_csv(invoices: &[Invoice], now: DateTime<Utc>) -> String {
    let mut out = String::from("Invoice #,Client,Amount,Status,Created,Due Date\n");

    for invoice in invoices {
        let row = [
            invoice.invoice_number(),
            client_key(invoice),
            invoice.total.to_string(),
            classify(invoice, now).to_string(),
            invoice.created_at.date_naive().to_string(),
            invoice
                .due_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "N/A".to_string()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}
