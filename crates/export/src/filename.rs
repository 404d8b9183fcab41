//! Deterministic export-filename derivation.

use chrono::{Local, NaiveDate};

use cashmemo_document::InvoiceDocument;

/// Derive the export filename for the given document and extension.
///
/// `{sanitized_customer}_{date}_Cash_Memo.{extension}`, deterministic for
/// a given document, so re-exporting an unedited memo names the same file
/// (and silently overwrites it; collisions are not checked).
pub fn export_file_name(document: &InvoiceDocument, extension: &str) -> String {
    file_name_with_fallback(document, extension, Local::now().date_naive())
}

/// Same derivation with an explicit fallback date for the empty-bill-date
/// case, so the composition stays testable.
pub(crate) fn file_name_with_fallback(
    document: &InvoiceDocument,
    extension: &str,
    fallback: NaiveDate,
) -> String {
    let name = sanitize_customer_name(document.customer_name());
    let date = if document.bill_date().is_empty() {
        fallback.format("%Y-%m-%d").to_string()
    } else {
        document.bill_date().to_string()
    };
    format!("{name}_{date}_Cash_Memo.{extension}")
}

/// Keep letters, digits and whitespace, then collapse whitespace runs into
/// single underscores. An empty result falls back to `Customer`.
fn sanitize_customer_name(raw: &str) -> String {
    let kept: String = raw
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();
    let joined = kept.split_whitespace().collect::<Vec<_>>().join("_");
    if joined.is_empty() {
        "Customer".to_string()
    } else {
        joined
    }
}
