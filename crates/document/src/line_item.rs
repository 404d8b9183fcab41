use serde::{Deserialize, Serialize};

/// Parse a numeric form field the way the memo form does.
///
/// Empty or unparseable text counts as zero. Negative values are accepted
/// as typed; there is no clamping (a known input-validation gap, kept).
pub fn parse_numeric(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

/// Editable field of a line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineItemField {
    Description,
    Quantity,
    Rate,
}

/// One billable row: description, quantity, rate, derived amount.
///
/// `quantity` and `rate` keep the raw text typed into the form. The derived
/// `amount` is recomputed on every quantity/rate edit and is never settable
/// on its own, so it can never go stale against the current pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    description: String,
    quantity: String,
    rate: String,
    amount: f64,
}

impl LineItem {
    /// A blank row: empty fields, amount zero.
    pub fn blank() -> Self {
        Self {
            description: String::new(),
            quantity: String::new(),
            rate: String::new(),
            amount: 0.0,
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn quantity(&self) -> &str {
        &self.quantity
    }

    pub fn rate(&self) -> &str {
        &self.rate
    }

    /// Derived `quantity * rate` as of the last edit.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Quantity parsed under the form's numeric rule.
    pub fn quantity_value(&self) -> f64 {
        parse_numeric(&self.quantity)
    }

    /// Rate parsed under the form's numeric rule.
    pub fn rate_value(&self) -> f64 {
        parse_numeric(&self.rate)
    }

    /// Return a copy with `field` set to `value`, recomputing the amount
    /// when the edit touches quantity or rate.
    pub fn with_field(&self, field: LineItemField, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        match field {
            LineItemField::Description => next.description = value.into(),
            LineItemField::Quantity => next.quantity = value.into(),
            LineItemField::Rate => next.rate = value.into(),
        }
        next.amount = parse_numeric(&next.quantity) * parse_numeric(&next.rate);
        next
    }
}
