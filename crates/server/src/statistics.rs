//! Statistics API endpoints.

use advisor::MonthlySummary;
use api_types::expense::MonthQuery;
use axum::{
    Json,
    extract::{Query, State},
};

use crate::server::ServerState;

/// Handles requests for the per-month spending summary.
pub async fn get_stats(
    State(state): State<ServerState>,
    Query(query): Query<MonthQuery>,
) -> Json<MonthlySummary> {
    let book = state.book.read().await;
    Json(book.monthly_summary(query.year, query.month))
}
