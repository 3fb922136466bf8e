// src/calculator/form.rs
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::entry::FormValue;

/// Amount and `<label>_frequency` keys for every expense label.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ExpensesForm {
    pub labels_expenses: Vec<String>,
    pub expenses_entries: HashMap<String, FormValue>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IncomeForm {
    pub labels_income: Vec<String>,
    pub income_entries: HashMap<String, FormValue>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BudgetRequest {
    #[serde(flatten)]
    pub income: IncomeForm,
    /// Taken as given, the expenses are not recomputed.
    pub total_expenses_entry: FormValue,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveRequest {
    #[serde(flatten)]
    pub expenses: ExpensesForm,
    #[serde(flatten)]
    pub income: IncomeForm,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportRequest {
    pub start_date: String,
    pub end_date: String,
}
