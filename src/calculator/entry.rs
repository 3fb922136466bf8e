// src/calculator/entry.rs
use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// Labels containing this marker carry a parenthesised sub-category,
/// e.g. "Healthcare (Dental)".
pub const SUBCATEGORY_MARKER: &str = "Healthcare";

/// Suffix of the form key holding an entry's frequency.
pub const FREQUENCY_SUFFIX: &str = "_frequency";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Frequency {
    Monthly,
    Yearly,
}

impl Frequency {
    /// Only the exact string "Yearly" selects yearly; everything else counts as monthly.
    pub fn from_form(value: &str) -> Self {
        if value == "Yearly" {
            Frequency::Yearly
        } else {
            Frequency::Monthly
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub amount: f64,
    pub frequency: Frequency,
}

impl Entry {
    pub fn new(amount: f64, frequency: Frequency) -> Self {
        Self { amount, frequency }
    }

    /// Yearly entries contribute twelve times their amount.
    // NOTE: annualises instead of normalising to monthly; unit of the totals is unconfirmed.
    pub fn contribution(&self) -> f64 {
        match self.frequency {
            Frequency::Yearly => self.amount * 12.0,
            Frequency::Monthly => self.amount,
        }
    }
}

/// A single value from a submitted form map. Browsers send strings, API
/// clients sometimes send bare numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FormValue {
    Number(f64),
    Text(String),
}

impl FormValue {
    pub fn parse_amount(&self) -> Result<f64, CalcError> {
        match self {
            FormValue::Number(n) if n.is_finite() => Ok(*n),
            FormValue::Number(_) => Err(CalcError::InvalidNumber),
            FormValue::Text(s) => parse_amount(s),
        }
    }

    pub fn as_text(&self) -> String {
        match self {
            FormValue::Number(n) => n.to_string(),
            FormValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for FormValue {
    fn from(s: &str) -> Self {
        FormValue::Text(s.to_string())
    }
}

pub fn parse_amount(s: &str) -> Result<f64, CalcError> {
    let amount: f64 = s.trim().parse().map_err(|_| CalcError::InvalidNumber)?;
    if !amount.is_finite() {
        return Err(CalcError::InvalidNumber);
    }
    Ok(amount)
}

/// Splits a label into (category, sub-category).
///
/// "Healthcare (Dental)" -> ("Healthcare", "Dental"); "Rent" -> ("Rent", "").
/// A marker label must contain exactly one `" ("`, otherwise the form is
/// rejected as invalid input.
pub fn split_label(label: &str) -> Result<(String, String), CalcError> {
    if !label.contains(SUBCATEGORY_MARKER) {
        return Ok((label.to_string(), String::new()));
    }

    let parts: Vec<&str> = label.split(" (").collect();
    let [category, rest] = parts.as_slice() else {
        return Err(CalcError::InvalidNumber);
    };

    // The last character is the closing parenthesis.
    let mut sub = rest.chars();
    sub.next_back();
    Ok((category.to_string(), sub.as_str().to_string()))
}
