//! Due-date urgency classification.
//!
//! The label is derived from `(invoice, now)` on every read. A stored
//! `overdue` status is never trusted: an invoice left `pending` past its due
//! date classifies as overdue purely from date math, and settled invoices
//! short-circuit before any date logic runs.

use crate::models::Invoice;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;

/// Transient, user-facing urgency label. Distinct from the persisted status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyLabel {
    Paid,
    NoDueDate,
    Overdue,
    DueToday,
    DueTomorrow,
    DueInDays(i64),
    OnTrack,
}

impl UrgencyLabel {
    /// Badge color used by the invoice list views.
    pub fn color(&self) -> &'static str {
        match self {
            UrgencyLabel::Paid => "#28a745",
            UrgencyLabel::NoDueDate => "#6c757d",
            UrgencyLabel::Overdue => "#dc3545",
            UrgencyLabel::DueToday | UrgencyLabel::DueTomorrow | UrgencyLabel::DueInDays(_) => {
                "#ffc107"
            }
            UrgencyLabel::OnTrack => "#28a745",
        }
    }
}

impl fmt::Display for UrgencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyLabel::Paid => write!(f, "Paid"),
            UrgencyLabel::NoDueDate => write!(f, "No due date"),
            UrgencyLabel::Overdue => write!(f, "Overdue"),
            UrgencyLabel::DueToday => write!(f, "Due today"),
            UrgencyLabel::DueTomorrow => write!(f, "Due tomorrow"),
            UrgencyLabel::DueInDays(days) => write!(f, "Due in {days} days"),
            UrgencyLabel::OnTrack => write!(f, "On track"),
        }
    }
}

/// Whole days until the due date's midnight, rounded up.
///
/// Matches the list views' ceil of `(due - now) / 1 day`: any moment on the
/// due date itself yields 0, the first second past it yields a negative day
/// count.
pub fn days_until_due(due_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due = due_date.and_time(NaiveTime::MIN).and_utc();
    let secs = (due - now).num_seconds();
    secs.div_euclid(86_400) + i64::from(secs.rem_euclid(86_400) != 0)
}

/// Derive the urgency label for an invoice at `now`.
///
/// Precedence: settled invoices are `Paid` regardless of dates; a missing
/// due date disables date logic entirely; otherwise the day count picks the
/// band.
pub fn classify(invoice: &Invoice, now: DateTime<Utc>) -> UrgencyLabel {
    if invoice.status.is_paid() {
        return UrgencyLabel::Paid;
    }
    let Some(due_date) = invoice.due_date else {
        return UrgencyLabel::NoDueDate;
    };

    let days = days_until_due(due_date, now);
    if days < 0 {
        UrgencyLabel::Overdue
    } else if days == 0 {
        UrgencyLabel::DueToday
    } else if days == 1 {
        UrgencyLabel::DueTomorrow
    } else if days <= 7 {
        UrgencyLabel::DueInDays(days)
    } else {
        UrgencyLabel::OnTrack
    }
}

/// Classification bucket used by list-view filtering.
///
/// `DueSoon` matches exactly the `DueInDays` band (not due-today or
/// due-tomorrow), mirroring the list views' "Due in" filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UrgencyFilter {
    #[default]
    All,
    Overdue,
    DueSoon,
    OnTrack,
}

impl UrgencyFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyFilter::All => "all",
            UrgencyFilter::Overdue => "overdue",
            UrgencyFilter::DueSoon => "due-soon",
            UrgencyFilter::OnTrack => "on-track",
        }
    }

    pub fn from_string(s: &str) -> Self {
        match s {
            "overdue" => UrgencyFilter::Overdue,
            "due-soon" => UrgencyFilter::DueSoon,
            "on-track" => UrgencyFilter::OnTrack,
            _ => UrgencyFilter::All,
        }
    }

    pub fn matches(&self, label: UrgencyLabel) -> bool {
        match self {
            UrgencyFilter::All => true,
            UrgencyFilter::Overdue => label == UrgencyLabel::Overdue,
            UrgencyFilter::DueSoon => matches!(label, UrgencyLabel::DueInDays(_)),
            UrgencyFilter::OnTrack => label == UrgencyLabel::OnTrack,
        }
    }
}
