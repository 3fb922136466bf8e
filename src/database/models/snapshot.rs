use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;

/// One row of `financial_data`: the totals captured by a save request.
#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct FinancialSnapshot {
    pub id: i64,
    pub date: NaiveDate,
    pub total_salary: f64,
    pub earned_income_pension: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
}

/// Values for a snapshot that has not been written yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSnapshot {
    pub date: NaiveDate,
    pub total_salary: f64,
    pub earned_income_pension: f64,
    pub total_expenses: f64,
    pub total_savings: f64,
}
