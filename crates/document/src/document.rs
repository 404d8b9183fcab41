use serde::{Deserialize, Serialize};

use cashmemo_core::{DomainError, DomainResult};

use crate::line_item::{LineItem, LineItemField};

/// How the customer settles the memo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMode {
    Cash,
    Upi,
    Card,
    BankTransfer,
}

impl PaymentMode {
    /// Fixed set offered by the form, in display order.
    pub const ALL: [PaymentMode; 4] = [
        PaymentMode::Cash,
        PaymentMode::Upi,
        PaymentMode::Card,
        PaymentMode::BankTransfer,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMode::Cash => "Cash",
            PaymentMode::Upi => "UPI",
            PaymentMode::Card => "Card",
            PaymentMode::BankTransfer => "Bank Transfer",
        }
    }
}

impl core::fmt::Display for PaymentMode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A user action against the memo being edited.
///
/// The UI translates every field edit and button press into one of these;
/// [`InvoiceDocument::apply`] is the single reducer that produces the next
/// document value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DocumentCommand {
    SetCustomerName(String),
    /// Bill date as typed, expected in `YYYY-MM-DD` form.
    SetBillDate(String),
    SetPaymentMode(PaymentMode),
    UpdateItemField {
        index: usize,
        field: LineItemField,
        value: String,
    },
    AddItem,
    DeleteItem {
        index: usize,
    },
    /// Reset to a fresh memo. Irreversible; the UI gates this behind an
    /// explicit confirmation dialog.
    Clear,
}

/// The cash memo under edit: customer/date/payment metadata plus an ordered,
/// never-empty list of line items.
///
/// Lives only for the editing session; it is never persisted. Mutation goes
/// through [`InvoiceDocument::apply`], which returns a new value and leaves
/// `self` untouched, so observers never see a half-applied edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceDocument {
    customer_name: String,
    bill_date: String,
    payment_mode: Option<PaymentMode>,
    line_items: Vec<LineItem>,
}

impl Default for InvoiceDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl InvoiceDocument {
    /// A fresh memo: empty metadata, one blank line item.
    pub fn new() -> Self {
        Self {
            customer_name: String::new(),
            bill_date: String::new(),
            payment_mode: None,
            line_items: vec![LineItem::blank()],
        }
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn bill_date(&self) -> &str {
        &self.bill_date
    }

    pub fn payment_mode(&self) -> Option<PaymentMode> {
        self.payment_mode
    }

    pub fn line_items(&self) -> &[LineItem] {
        &self.line_items
    }

    /// Sum of the line-item amounts, zero for unparseable rows.
    pub fn total(&self) -> f64 {
        self.line_items.iter().map(LineItem::amount).sum()
    }

    /// Equal to [`total`](Self::total); the memo models no tax or discount.
    pub fn subtotal(&self) -> f64 {
        self.total()
    }

    /// Apply one user action and return the next document value.
    ///
    /// Failures leave the current value untouched.
    pub fn apply(&self, command: &DocumentCommand) -> DomainResult<InvoiceDocument> {
        match command {
            DocumentCommand::SetCustomerName(name) => {
                let mut next = self.clone();
                next.customer_name = name.clone();
                Ok(next)
            }
            DocumentCommand::SetBillDate(date) => {
                let mut next = self.clone();
                next.bill_date = date.clone();
                Ok(next)
            }
            DocumentCommand::SetPaymentMode(mode) => {
                let mut next = self.clone();
                next.payment_mode = Some(*mode);
                Ok(next)
            }
            DocumentCommand::UpdateItemField {
                index,
                field,
                value,
            } => {
                let item = self.item_at(*index)?;
                let mut next = self.clone();
                next.line_items[*index] = item.with_field(*field, value.clone());
                Ok(next)
            }
            DocumentCommand::AddItem => {
                let mut next = self.clone();
                next.line_items.push(LineItem::blank());
                Ok(next)
            }
            DocumentCommand::DeleteItem { index } => {
                self.item_at(*index)?;
                if self.line_items.len() <= 1 {
                    return Err(DomainError::MinimumItemsViolation);
                }
                let mut next = self.clone();
                next.line_items.remove(*index);
                Ok(next)
            }
            DocumentCommand::Clear => Ok(InvoiceDocument::new()),
        }
    }

    fn item_at(&self, index: usize) -> DomainResult<&LineItem> {
        self.line_items.get(index).ok_or_else(|| {
            DomainError::validation(format!(
                "line item index {index} out of bounds (len {})",
                self.line_items.len()
            ))
        })
    }
}
