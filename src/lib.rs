//! invoicing-core: invoice computation and status classification for a
//! client-portal invoicing application.
//!
//! The crate owns the arithmetic and classification the screens agree on:
//! line-item aggregation into frozen monetary totals, due-date urgency
//! labels recomputed on every read, currency display formatting, and the
//! reporting/CSV rollups. Persistence and identity are external
//! collaborators behind the [`services::InvoiceStore`] trait.

pub mod classify;
pub mod clock;
pub mod currency;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod totals;

pub use classify::{classify, UrgencyFilter, UrgencyLabel};
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::AppError;
pub use totals::{aggregate, InvoiceTotals};
