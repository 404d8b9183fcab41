//! Cash-memo document model.
//!
//! This crate contains the editing-session state for a single cash memo,
//! implemented purely as deterministic domain logic (no IO, no rendering,
//! no storage). The document is an immutable-per-update value: every user
//! action is a [`DocumentCommand`] and [`InvoiceDocument::apply`] returns
//! the next document value.

pub mod document;
pub mod line_item;
pub mod validate;

pub use document::{DocumentCommand, InvoiceDocument, PaymentMode};
pub use line_item::{LineItem, LineItemField, parse_numeric};
pub use validate::{is_billable, is_export_ready};
