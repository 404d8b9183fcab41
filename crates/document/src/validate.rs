//! Export-readiness checks.
//!
//! Pure functions, recomputed by the UI on every state change to drive the
//! export affordances; nothing here is cached.

use crate::document::InvoiceDocument;
use crate::line_item::LineItem;

/// A row counts toward export readiness when it has a real description and
/// strictly positive quantity and rate.
pub fn is_billable(item: &LineItem) -> bool {
    !item.description().trim().is_empty()
        && item.quantity_value() > 0.0
        && item.rate_value() > 0.0
}

/// Whether the memo can be exported.
///
/// Requires customer name (after trim), bill date, a payment mode, and at
/// least one billable row. Garbage rows are tolerated next to a valid one;
/// they simply do not count.
pub fn is_export_ready(document: &InvoiceDocument) -> bool {
    !document.customer_name().trim().is_empty()
        && !document.bill_date().is_empty()
        && document.payment_mode().is_some()
        && document.line_items().iter().any(is_billable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentCommand, PaymentMode};
    use crate::line_item::LineItemField;

    fn ready_document() -> InvoiceDocument {
        let mut doc = InvoiceDocument::new()
            .apply(&DocumentCommand::SetCustomerName("Ramesh Gupta".into()))
            .unwrap()
            .apply(&DocumentCommand::SetBillDate("2024-03-15".into()))
            .unwrap()
            .apply(&DocumentCommand::SetPaymentMode(PaymentMode::Cash))
            .unwrap();
        for (field, value) in [
            (LineItemField::Description, "Tiffin"),
            (LineItemField::Quantity, "20"),
            (LineItemField::Rate, "80"),
        ] {
            doc = doc
                .apply(&DocumentCommand::UpdateItemField {
                    index: 0,
                    field,
                    value: value.to_string(),
                })
                .unwrap();
        }
        doc
    }

    #[test]
    fn worked_example_is_ready_with_total_1600() {
        let doc = ready_document();
        assert!(is_export_ready(&doc));
        assert_eq!(doc.total(), 1600.0);
    }

    #[test]
    fn missing_metadata_blocks_export_regardless_of_items() {
        let doc = ready_document();

        let no_name = doc
            .apply(&DocumentCommand::SetCustomerName("   ".into()))
            .unwrap();
        assert!(!is_export_ready(&no_name));

        let no_date = doc
            .apply(&DocumentCommand::SetBillDate(String::new()))
            .unwrap();
        assert!(!is_export_ready(&no_date));

        let fresh = InvoiceDocument::new()
            .apply(&DocumentCommand::SetCustomerName("Ramesh Gupta".into()))
            .unwrap()
            .apply(&DocumentCommand::SetBillDate("2024-03-15".into()))
            .unwrap();
        // payment mode never set
        assert!(!is_export_ready(&fresh));
    }

    #[test]
    fn one_billable_row_carries_garbage_neighbours() {
        let doc = ready_document()
            .apply(&DocumentCommand::AddItem)
            .unwrap()
            .apply(&DocumentCommand::UpdateItemField {
                index: 1,
                field: LineItemField::Quantity,
                value: "abc".into(),
            })
            .unwrap();
        assert!(is_export_ready(&doc));
    }

    #[test]
    fn rows_without_positive_quantity_and_rate_do_not_count() {
        let doc = ready_document()
            .apply(&DocumentCommand::UpdateItemField {
                index: 0,
                field: LineItemField::Quantity,
                value: "0".into(),
            })
            .unwrap();
        assert!(!is_export_ready(&doc));

        let doc = ready_document()
            .apply(&DocumentCommand::UpdateItemField {
                index: 0,
                field: LineItemField::Rate,
                value: "-5".into(),
            })
            .unwrap();
        assert!(!is_export_ready(&doc));

        let doc = ready_document()
            .apply(&DocumentCommand::UpdateItemField {
                index: 0,
                field: LineItemField::Description,
                value: "   ".into(),
            })
            .unwrap();
        assert!(!is_export_ready(&doc));
    }
}
