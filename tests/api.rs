use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use financial_calculator::backend::{self, AppState};
use financial_calculator::database::db::{connection, migrate, queries};
use financial_calculator::FinancialCalculator;

async fn setup() -> (Router, FinancialCalculator) {
    let pool = connection::get_db_pool("sqlite::memory:", 1).await.unwrap();
    migrate::run_migrations(&pool).await.unwrap();
    let calculator = FinancialCalculator::new(pool);
    let app = backend::app(AppState {
        calculator: calculator.clone(),
    });
    (app, calculator)
}

async fn post_json(app: &Router, path: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn save_body() -> Value {
    json!({
        "labels_income": ["Total Salary", "Earned Income & Pension"],
        "income_entries": {
            "Total Salary": "2500",
            "Total Salary_frequency": "Monthly",
            "Earned Income & Pension": "100",
            "Earned Income & Pension_frequency": "Yearly"
        },
        "labels_expenses": ["Rent", "Healthcare (Dental)"],
        "expenses_entries": {
            "Rent": "900",
            "Rent_frequency": "Monthly",
            "Healthcare (Dental)": "25",
            "Healthcare (Dental)_frequency": "Yearly"
        }
    })
}

#[tokio::test]
async fn test_calculate_expenses_single_label() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/calculate_expenses",
        json!({
            "labels_expenses": ["Rent"],
            "expenses_entries": {"Rent": "100", "Rent_frequency": "Monthly"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "total_expenses": 100.0}));
}

#[tokio::test]
async fn test_calculate_expenses_yearly_and_numeric_amounts() {
    let (app, _) = setup().await;
    let (_, body) = post_json(
        &app,
        "/calculate_expenses",
        json!({
            "labels_expenses": ["Rent", "Insurance"],
            "expenses_entries": {
                "Rent": 100,
                "Rent_frequency": "Monthly",
                "Insurance": "10",
                "Insurance_frequency": "Yearly"
            }
        }),
    )
    .await;

    assert_eq!(body["success"], true);
    assert_eq!(body["total_expenses"], 220.0);
}

#[tokio::test]
async fn test_calculate_expenses_invalid_number() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/calculate_expenses",
        json!({
            "labels_expenses": ["Rent"],
            "expenses_entries": {"Rent": "abc", "Rent_frequency": "Monthly"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid input. Please enter valid numbers."})
    );
}

#[tokio::test]
async fn test_calculate_expenses_healthcare_without_subcategory() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/calculate_expenses",
        json!({
            "labels_expenses": ["Healthcare"],
            "expenses_entries": {"Healthcare": "10", "Healthcare_frequency": "Monthly"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid input. Please enter valid numbers."})
    );
}

#[tokio::test]
async fn test_calculate_expenses_overflowing_total() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/calculate_expenses",
        json!({
            "labels_expenses": ["Rent"],
            "expenses_entries": {"Rent": "1e308", "Rent_frequency": "Yearly"}
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"success": false, "message": "Invalid input. Please enter valid numbers."})
    );
}

#[tokio::test]
async fn test_save_data_overflowing_total_stores_nothing() {
    let (app, calculator) = setup().await;
    let mut request = save_body();
    request["expenses_entries"]["Rent"] = json!("1e308");
    request["expenses_entries"]["Rent_frequency"] = json!("Yearly");

    let (status, body) = post_json(&app, "/save_data", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Invalid input. Please enter valid numbers.");
    assert_eq!(queries::count_snapshots(calculator.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_calculate_budget() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/calculate_budget",
        json!({
            "labels_income": ["Total Salary"],
            "income_entries": {"Total Salary": "1000", "Total Salary_frequency": "Monthly"},
            "total_expenses_entry": "400"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"success": true, "total_savings": 600.0}));
}

#[tokio::test]
async fn test_save_data_inserts_one_row_matching_calculations() {
    let (app, calculator) = setup().await;
    let request = save_body();

    let (_, expenses) = post_json(&app, "/calculate_expenses", request.clone()).await;
    let total_expenses = expenses["total_expenses"].as_f64().unwrap();

    let mut budget_request = request.clone();
    budget_request["total_expenses_entry"] = json!(total_expenses.to_string());
    let (_, budget) = post_json(&app, "/calculate_budget", budget_request).await;
    let total_savings = budget["total_savings"].as_f64().unwrap();

    let before = chrono::Local::now().date_naive();
    let (status, body) = post_json(&app, "/save_data", request).await;
    let after = chrono::Local::now().date_naive();
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Data saved successfully!");
    assert_eq!(body["total_savings"].as_f64().unwrap(), total_savings);

    let rows = queries::list_snapshots(calculator.pool()).await.unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.total_expenses, total_expenses);
    assert_eq!(row.total_savings, total_savings);
    assert_eq!(row.total_salary, 2500.0);
    assert_eq!(row.earned_income_pension, 100.0);
    assert!(row.date == before || row.date == after);
}

#[tokio::test]
async fn test_save_data_missing_required_label() {
    let (app, calculator) = setup().await;
    let mut request = save_body();
    request["labels_income"] = json!(["Total Salary"]);

    let (status, body) = post_json(&app, "/save_data", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(
        body["message"],
        "Missing required field: Earned Income & Pension"
    );
    assert_eq!(queries::count_snapshots(calculator.pool()).await.unwrap(), 0);
}

#[tokio::test]
async fn test_generate_report_malformed_date() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/generate_report",
        json!({"start_date": "13/2024", "end_date": "2024-12-31"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "success": false,
            "message": "Invalid date format. Please use the format: yyyy-mm-dd."
        })
    );
}

#[tokio::test]
async fn test_generate_report_is_not_implemented() {
    let (app, _) = setup().await;
    let (status, body) = post_json(
        &app,
        "/generate_report",
        json!({"start_date": "2024-01-01", "end_date": "2024-12-31"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Report generation is not implemented.");
}

#[tokio::test]
async fn test_malformed_body_is_rejected_as_json() {
    let (app, _) = setup().await;
    let (status, body) = post_json(&app, "/calculate_budget", json!({"labels_income": "nope"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert!(body["message"].as_str().unwrap().starts_with("Malformed request"));
}

#[tokio::test]
async fn test_home_and_health() {
    let (app, _) = setup().await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert!(String::from_utf8_lossy(&bytes).contains("Financial Calculator"));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
