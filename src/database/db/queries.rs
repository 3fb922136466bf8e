use sqlx::{Pool, Sqlite};

use crate::database::models::{FinancialSnapshot, NewSnapshot};
/*
SQL for the `financial_data` table.
Rows are only ever inserted and read back; nothing here updates or deletes.
 */

// Insert snapshot, returns the new row id
pub async fn insert_snapshot(pool: &Pool<Sqlite>, snapshot: &NewSnapshot) -> Result<i64, sqlx::Error> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO financial_data (date, total_salary, earned_income_pension, total_expenses, total_savings)
        VALUES (?, ?, ?, ?, ?)
        RETURNING id
        "#,
    )
    .bind(snapshot.date)
    .bind(snapshot.total_salary)
    .bind(snapshot.earned_income_pension)
    .bind(snapshot.total_expenses)
    .bind(snapshot.total_savings)
    .fetch_one(pool)
    .await?;

    Ok(id)
}

// Get snapshot by id
pub async fn get_snapshot_by_id(pool: &Pool<Sqlite>, id: i64) -> Result<FinancialSnapshot, sqlx::Error> {
    sqlx::query_as::<_, FinancialSnapshot>(
        r#"
        SELECT id, date, total_salary, earned_income_pension, total_expenses, total_savings
        FROM financial_data
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

// All snapshots, oldest first
pub async fn list_snapshots(pool: &Pool<Sqlite>) -> Result<Vec<FinancialSnapshot>, sqlx::Error> {
    sqlx::query_as::<_, FinancialSnapshot>(
        r#"
        SELECT id, date, total_salary, earned_income_pension, total_expenses, total_savings
        FROM financial_data
        ORDER BY id ASC
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn count_snapshots(pool: &Pool<Sqlite>) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM financial_data")
        .fetch_one(pool)
        .await
}
