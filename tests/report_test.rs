//! Reporting and CSV export tests for invoicing-core.

mod common;

use common::{bare_invoice, date, dec, test_now};
use invoicing_core::models::InvoiceStatus;
use invoicing_core::reports::{export_csv, revenue_report};
use rust_decimal::Decimal;

fn invoice_for(client: &str, total: &str, status: InvoiceStatus) -> invoicing_core::models::Invoice {
    let mut invoice = bare_invoice(status, None);
    invoice.client_name = client.to_string();
    invoice.total = dec(total);
    invoice
}

#[test]
fn revenue_report_splits_collected_and_outstanding() {
    let invoices = vec![
        invoice_for("Acme Corp", "1000", InvoiceStatus::Completed),
        invoice_for("Acme Corp", "500", InvoiceStatus::Pending),
        invoice_for("Globex", "250", InvoiceStatus::Paid),
    ];

    let report = revenue_report(&invoices);

    assert_eq!(report.total_billed, dec("1750"));
    assert_eq!(report.total_collected, dec("1250"));
    assert_eq!(report.total_outstanding, dec("500"));
}

#[test]
fn top_clients_sort_by_billed_amount_and_cap_at_five() {
    let invoices: Vec<_> = [
        ("A", "100"),
        ("B", "700"),
        ("C", "300"),
        ("D", "200"),
        ("E", "600"),
        ("F", "50"),
    ]
    .into_iter()
    .map(|(client, total)| invoice_for(client, total, InvoiceStatus::Pending))
    .collect();

    let report = revenue_report(&invoices);

    assert_eq!(report.top_clients.len(), 5);
    assert_eq!(report.top_clients[0].client, "B");
    assert_eq!(report.top_clients[0].total, dec("700"));
    assert_eq!(report.top_clients[1].client, "E");
    // "F" at 50 falls off the end.
    assert!(report.top_clients.iter().all(|entry| entry.client != "F"));
}

#[test]
fn outstanding_by_client_skips_settled_invoices() {
    let invoices = vec![
        invoice_for("Acme Corp", "1000", InvoiceStatus::Completed),
        invoice_for("Acme Corp", "400", InvoiceStatus::Pending),
        invoice_for("Globex", "250", InvoiceStatus::Paid),
    ];

    let report = revenue_report(&invoices);

    assert_eq!(report.outstanding_by_client.len(), 1);
    assert_eq!(report.outstanding_by_client[0].client, "Acme Corp");
    assert_eq!(report.outstanding_by_client[0].total, dec("400"));
}

#[test]
fn missing_client_name_rolls_up_under_unknown() {
    let invoice = invoice_for("", "100", InvoiceStatus::Pending);

    let report = revenue_report(&[invoice]);

    assert_eq!(report.top_clients[0].client, "Unknown");
}

#[test]
fn empty_report_is_all_zeroes() {
    let report = revenue_report(&[]);

    assert_eq!(report.total_billed, Decimal::ZERO);
    assert_eq!(report.total_collected, Decimal::ZERO);
    assert_eq!(report.total_outstanding, Decimal::ZERO);
    assert!(report.top_clients.is_empty());
    assert!(report.outstanding_by_client.is_empty());
}

#[test]
fn csv_header_row_comes_first_with_fixed_columns() {
    let csv = export_csv(&[], test_now());

    assert_eq!(csv, "Invoice #,Client,Amount,Status,Created,Due Date\n");
}

#[test]
fn csv_rows_carry_the_six_columns_in_order() {
    let mut invoice = invoice_for("Acme Corp", "250", InvoiceStatus::Pending);
    invoice.due_date = Some(date("2024-03-25"));

    let csv = export_csv(&[invoice.clone()], test_now());
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 2);
    let columns: Vec<&str> = lines[1].split(',').collect();
    assert_eq!(columns.len(), 6);
    assert_eq!(columns[0], invoice.invoice_number());
    assert_eq!(columns[1], "Acme Corp");
    assert_eq!(columns[2], "250");
    assert_eq!(columns[3], "On track");
    assert_eq!(columns[4], "2024-03-15");
    assert_eq!(columns[5], "2024-03-25");
}

#[test]
fn csv_status_column_is_the_derived_label() {
    let mut overdue = invoice_for("Acme Corp", "100", InvoiceStatus::Pending);
    overdue.due_date = Some(date("2024-03-01"));
    let paid = invoice_for("Globex", "200", InvoiceStatus::Completed);

    let csv = export_csv(&[overdue, paid], test_now());
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[1].contains(",Overdue,"));
    assert!(lines[2].contains(",Paid,"));
}

#[test]
fn csv_missing_due_date_prints_na() {
    let invoice = invoice_for("Acme Corp", "100", InvoiceStatus::Pending);

    let csv = export_csv(&[invoice], test_now());
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[1].ends_with(",N/A"));
}

#[test]
fn csv_preserves_raw_negative_totals() {
    // A discount larger than the invoice body stays visible in exports.
    let invoice = invoice_for("Acme Corp", "-40", InvoiceStatus::Pending);

    let csv = export_csv(&[invoice], test_now());
    let lines: Vec<&str> = csv.lines().collect();

    assert!(lines[1].contains(",-40,"));
}
