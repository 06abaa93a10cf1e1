//! Payment transition tests for invoicing-core.

mod common;

use common::{draft, line, seed_client, test_now, test_service};
use invoicing_core::classify::{classify, UrgencyLabel};
use invoicing_core::error::AppError;
use invoicing_core::models::InvoiceStatus;
use serde_json::json;
use uuid::Uuid;

#[tokio::test]
async fn complete_payment_records_when_and_how() {
    let service = test_service();
    let client = seed_client(&service, "Acme Corp").await;

    let invoice = service
        .create_invoice(draft(&client, vec![line("Work", "1", "100", "0")], "0"))
        .await
        .expect("Failed to create invoice");

    let paid = service
        .complete_payment(invoice.invoice_id, "Credit Card")
        .await
        .expect("Failed to complete payment");

    assert_eq!(paid.status, InvoiceStatus::Completed);
    assert_eq!(paid.paid_at, Some(test_now()));
    assert_eq!(paid.payment_method.as_deref(), Some("Credit Card"));
}

#[tokio::test]
async fn completed_invoice_classifies_as_paid_afterwards() {
    let service = test_service();
    let client = seed_client(&service, "Acme Corp").await;

    let mut past_due = draft(&client, vec![line("Work", "1", "100", "0")], "0");
    past_due.due_date = Some(common::date("2024-03-01"));

    let invoice = service
        .create_invoice(past_due)
        .await
        .expect("Failed to create invoice");
    assert_eq!(classify(&invoice, test_now()), UrgencyLabel::Overdue);

    let paid = service
        .complete_payment(invoice.invoice_id, "Bank Transfer")
        .await
        .expect("Failed to complete payment");

    assert_eq!(classify(&paid, test_now()), UrgencyLabel::Paid);
}

#[tokio::test]
async fn double_completion_is_rejected() {
    let service = test_service();
    let client = seed_client(&service, "Acme Corp").await;

    let invoice = service
        .create_invoice(draft(&client, vec![line("Work", "1", "100", "0")], "0"))
        .await
        .expect("Failed to create invoice");

    service
        .complete_payment(invoice.invoice_id, "Credit Card")
        .await
        .expect("Failed to complete payment");

    let second = service
        .complete_payment(invoice.invoice_id, "Credit Card")
        .await;

    assert!(matches!(second, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn completing_a_missing_invoice_fails() {
    let service = test_service();

    let result = service.complete_payment(Uuid::new_v4(), "Credit Card").await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn legacy_paid_document_cannot_be_completed_again() {
    let service = test_service();
    let invoice_id = Uuid::new_v4();

    service
        .store()
        .seed_document(json!({
            "invoice_id": invoice_id,
            "status": "paid",
        }))
        .expect("Failed to seed document");

    let result = service.complete_payment(invoice_id, "Credit Card").await;

    assert!(matches!(result, Err(AppError::Conflict(_))));
}

#[tokio::test]
async fn payment_leaves_monetary_fields_untouched() {
    let service = test_service();
    let client = seed_client(&service, "Acme Corp").await;

    let invoice = service
        .create_invoice(draft(
            &client,
            vec![line("Work", "2", "100", "10")],
            "20",
        ))
        .await
        .expect("Failed to create invoice");

    let paid = service
        .complete_payment(invoice.invoice_id, "Credit Card")
        .await
        .expect("Failed to complete payment");

    assert_eq!(paid.subtotal, invoice.subtotal);
    assert_eq!(paid.total_tax, invoice.total_tax);
    assert_eq!(paid.total, invoice.total);
    assert_eq!(paid.line_items, invoice.line_items);
}
