//! Budget advisor endpoint.

use advisor::{BudgetPlan, BudgetSnapshot};
use api_types::advisor::PlanQuery;
use axum::{Json, extract::Query};
use chrono::Utc;

use crate::ServerError;

/// Runs one analysis over the submitted snapshot.
///
/// The computation is stateless; nothing is stored. An explicit `asOf` date
/// pins goal time-remaining for reproducible output.
pub async fn plan(
    Query(query): Query<PlanQuery>,
    Json(snapshot): Json<BudgetSnapshot>,
) -> Result<Json<BudgetPlan>, ServerError> {
    let today = query.as_of.unwrap_or_else(|| Utc::now().date_naive());
    let plan = advisor::compute_plan_at(&snapshot, today)?;
    tracing::debug!(
        health_score = plan.ratios.health_score,
        warnings = plan.warnings.len(),
        "analysis run"
    );
    Ok(Json(plan))
}
