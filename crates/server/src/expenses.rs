//! Expense and category API endpoints.

use advisor::{Category, Expense};
use api_types::{
    Created,
    expense::{CategoryNew, ExpenseNew, MonthQuery},
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::header,
    response::IntoResponse,
};
use uuid::Uuid;

use crate::{ServerError, server::ServerState};

const DEFAULT_COLOR: &str = "#9CA3AF";
const DEFAULT_ICON: &str = "📊";

pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> Json<Vec<Expense>> {
    let book = state.book.read().await;
    let expenses = book
        .expenses_for_month(query.year, query.month)
        .into_iter()
        .cloned()
        .collect();
    Json(expenses)
}

pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseNew>,
) -> Result<Json<Created>, ServerError> {
    let mut book = state.book.write().await;
    let id = book.add_expense(
        payload.amount,
        payload.description.as_deref().unwrap_or(""),
        payload.category_id,
        payload.date,
    )?;
    tracing::debug!(%id, amount = payload.amount, "expense recorded");
    Ok(Json(Created { id }))
}

pub async fn remove(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<(), ServerError> {
    let mut book = state.book.write().await;
    book.delete_expense(id)?;
    Ok(())
}

pub async fn list_categories(State(state): State<ServerState>) -> Json<Vec<Category>> {
    let book = state.book.read().await;
    Json(book.categories().to_vec())
}

pub async fn create_category(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryNew>,
) -> Result<Json<Created>, ServerError> {
    let mut book = state.book.write().await;
    let id = book.add_category(
        &payload.name,
        payload.color.as_deref().unwrap_or(DEFAULT_COLOR),
        payload.icon.as_deref().unwrap_or(DEFAULT_ICON),
    )?;
    Ok(Json(Created { id }))
}

pub async fn remove_category(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
) -> Result<(), ServerError> {
    let mut book = state.book.write().await;
    book.delete_category(id)?;
    Ok(())
}

/// Downloads all expenses as CSV.
pub async fn export(
    State(state): State<ServerState>,
) -> Result<impl IntoResponse, ServerError> {
    let book = state.book.read().await;
    let csv = book.export_csv()?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"expenses.csv\"",
            ),
        ],
        csv,
    ))
}
