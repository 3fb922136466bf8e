// src/backend/handlers.rs
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::backend::AppState;
use crate::calculator::{BudgetRequest, ExpensesForm, ReportRequest, SaveRequest};
use crate::error::Result;

const CALCULATOR_PAGE: &str = include_str!("../../templates/financial_calculator.html");

#[derive(Debug, Serialize, Deserialize)]
pub struct ExpensesResponse {
    pub success: bool,
    pub total_expenses: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BudgetResponse {
    pub success: bool,
    pub total_savings: f64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SaveResponse {
    pub success: bool,
    pub message: String,
    pub total_savings: f64,
}

pub async fn home() -> Html<&'static str> {
    Html(CALCULATOR_PAGE)
}

pub async fn calculate_expenses(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ExpensesForm>, JsonRejection>,
) -> Result<Json<ExpensesResponse>> {
    let Json(form) = payload?;
    let total_expenses = state.calculator.calculate_expenses(&form)?;

    Ok(Json(ExpensesResponse {
        success: true,
        total_expenses,
    }))
}

pub async fn calculate_budget(
    State(state): State<AppState>,
    payload: std::result::Result<Json<BudgetRequest>, JsonRejection>,
) -> Result<Json<BudgetResponse>> {
    let Json(request) = payload?;
    let total_savings = state.calculator.calculate_budget(&request)?;

    Ok(Json(BudgetResponse {
        success: true,
        total_savings,
    }))
}

pub async fn save_data(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>> {
    let Json(request) = payload?;
    let saved = state.calculator.save_data(&request).await?;

    Ok(Json(SaveResponse {
        success: true,
        message: "Data saved successfully!".to_string(),
        total_savings: saved.total_savings,
    }))
}

pub async fn generate_report(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ReportRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>> {
    let Json(request) = payload?;
    let never = state.calculator.generate_report(&request)?;
    match never {}
}
