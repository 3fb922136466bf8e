//! Income/expense aggregation.
//! - Reads (amount, frequency) entries out of submitted forms
//! - Groups expenses by category and sub-category
//! - Reduces entries to totals and stores snapshots

use std::collections::{BTreeMap, HashMap};
use std::convert::Infallible;

use chrono::NaiveDate;
use sqlx::{Pool, Sqlite};
use tracing::{debug, info, warn};

use crate::database::db::queries;
use crate::database::models::NewSnapshot;
use crate::error::{CalcError, Result};

pub mod entry;
pub mod form;

pub use entry::{split_label, Entry, FormValue, Frequency};
pub use form::{BudgetRequest, ExpensesForm, IncomeForm, ReportRequest, SaveRequest};

pub const TOTAL_SALARY_LABEL: &str = "Total Salary";
pub const EARNED_INCOME_LABEL: &str = "Earned Income & Pension";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// category -> sub-category -> entry
pub type GroupedExpenses = BTreeMap<String, BTreeMap<String, Entry>>;

/// Reads the amount under `label` and the frequency under `label_frequency`.
pub fn read_entry(entries: &HashMap<String, FormValue>, label: &str) -> Result<Entry> {
    let amount = entries
        .get(label)
        .ok_or_else(|| CalcError::MissingField(label.to_string()))?
        .parse_amount()?;

    let frequency_key = format!("{}{}", label, entry::FREQUENCY_SUFFIX);
    let frequency = entries
        .get(&frequency_key)
        .ok_or(CalcError::MissingField(frequency_key))?;

    Ok(Entry::new(amount, Frequency::from_form(&frequency.as_text())))
}

pub fn group_expenses(labels: &[String], entries: &HashMap<String, FormValue>) -> Result<GroupedExpenses> {
    let mut grouped = GroupedExpenses::new();
    for label in labels {
        let (category, sub_category) = split_label(label)?;
        let entry = read_entry(entries, label)?;
        grouped.entry(category).or_default().insert(sub_category, entry);
    }
    Ok(grouped)
}

/// Income is keyed by label only; a repeated label keeps its last entry.
pub fn collect_income(labels: &[String], entries: &HashMap<String, FormValue>) -> Result<BTreeMap<String, Entry>> {
    labels
        .iter()
        .map(|label| -> Result<(String, Entry)> { Ok((label.clone(), read_entry(entries, label)?)) })
        .collect()
}

pub fn sum_total<'a, I>(entries: I) -> f64
where
    I: IntoIterator<Item = &'a Entry>,
{
    entries.into_iter().map(Entry::contribution).sum()
}

pub fn sum_grouped(grouped: &GroupedExpenses) -> f64 {
    sum_total(grouped.values().flat_map(BTreeMap::values))
}

/// Totals can overflow even when every amount is finite.
fn finite_total(total: f64) -> Result<f64> {
    if total.is_finite() {
        Ok(total)
    } else {
        Err(CalcError::InvalidNumber)
    }
}

pub fn expenses_total(form: &ExpensesForm) -> Result<f64> {
    let grouped = group_expenses(&form.labels_expenses, &form.expenses_entries)?;
    finite_total(sum_grouped(&grouped))
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|_| CalcError::InvalidDate)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self {
            start: parse_date(start)?,
            end: parse_date(end)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavedSnapshot {
    pub id: i64,
    pub total_expenses: f64,
    pub total_savings: f64,
}

/// Owns the storage handle for the lifetime of the process. Each call checks
/// out its own pooled connection.
#[derive(Clone)]
pub struct FinancialCalculator {
    pool: Pool<Sqlite>,
}

impl FinancialCalculator {
    pub fn new(pool: Pool<Sqlite>) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    pub fn calculate_expenses(&self, form: &ExpensesForm) -> Result<f64> {
        let total = expenses_total(form).inspect_err(|e| warn!("calculate_expenses rejected: {}", e))?;
        info!("Total expenses for {} labels: {}", form.labels_expenses.len(), total);
        Ok(total)
    }

    pub fn calculate_budget(&self, request: &BudgetRequest) -> Result<f64> {
        let savings = Self::savings(&request.income, &request.total_expenses_entry)
            .inspect_err(|e| warn!("calculate_budget rejected: {}", e))?;
        info!("Total savings: {}", savings);
        Ok(savings)
    }

    fn savings(income: &IncomeForm, total_expenses: &FormValue) -> Result<f64> {
        let income = collect_income(&income.labels_income, &income.income_entries)?;
        let total_expenses = total_expenses.parse_amount()?;
        finite_total(sum_total(income.values()) - total_expenses)
    }

    /// Saves a snapshot dated today (local time).
    pub async fn save_data(&self, request: &SaveRequest) -> Result<SavedSnapshot> {
        self.save_data_on(request, chrono::Local::now().date_naive()).await
    }

    pub async fn save_data_on(&self, request: &SaveRequest, date: NaiveDate) -> Result<SavedSnapshot> {
        let snapshot = Self::build_snapshot(request, date).inspect_err(|e| warn!("save_data rejected: {}", e))?;

        let id = queries::insert_snapshot(&self.pool, &snapshot).await?;
        info!(
            "Saved snapshot {} for {}: expenses={} savings={}",
            id, date, snapshot.total_expenses, snapshot.total_savings
        );

        Ok(SavedSnapshot {
            id,
            total_expenses: snapshot.total_expenses,
            total_savings: snapshot.total_savings,
        })
    }

    fn build_snapshot(request: &SaveRequest, date: NaiveDate) -> Result<NewSnapshot> {
        let income = collect_income(&request.income.labels_income, &request.income.income_entries)?;
        let total_expenses = expenses_total(&request.expenses)?;
        let total_savings = finite_total(sum_total(income.values()) - total_expenses)?;

        let required = |label: &str| {
            income
                .get(label)
                .map(|entry| entry.amount)
                .ok_or_else(|| CalcError::MissingField(label.to_string()))
        };

        Ok(NewSnapshot {
            date,
            total_salary: required(TOTAL_SALARY_LABEL)?,
            earned_income_pension: required(EARNED_INCOME_LABEL)?,
            total_expenses,
            total_savings,
        })
    }

    /// Validates the requested range. There is no report format yet, so a
    /// valid range still ends in `ReportUnavailable`.
    pub fn generate_report(&self, request: &ReportRequest) -> Result<Infallible> {
        let range = DateRange::parse(&request.start_date, &request.end_date)
            .inspect_err(|e| warn!("generate_report rejected: {}", e))?;
        debug!("Report requested for {} to {}", range.start, range.end);
        Err(CalcError::ReportUnavailable)
    }
}
