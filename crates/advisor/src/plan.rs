//! Output side of the engine: the monthly allocation plan.
//!
//! A plan is freshly computed on every call; there is no hidden state. The
//! renderer is expected to display these fields verbatim (percentages,
//! currency-formatted amounts, ordered warning/recommendation lists).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Financial-health ratios derived from the snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ratios {
    /// Fraction of income consumed by minimum debt payments.
    pub debt_service_ratio: f64,
    /// Fraction of income left after fixed costs. Negative = overspending.
    pub free_cash_ratio: f64,
    /// Emergency fund vs. target, clamped to [0, 1].
    pub emergency_fund_ratio: f64,
    /// Fraction of income already routed to recurring savings.
    pub savings_ratio: f64,
    /// Composite 0-100 score blending the four ratios.
    pub health_score: f64,
}

/// Monthly payment plan for a single debt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtAllocation {
    pub id: Uuid,
    pub name: String,
    pub min_payment: f64,
    /// Extra payment on top of the minimum. Non-zero only for the
    /// highest-rate debt (avalanche method).
    pub extra_payment: f64,
    pub total_payment: f64,
    /// Projected months to payoff at `total_payment`. `None` when the
    /// payment does not cover the monthly interest, i.e. payoff is not
    /// achievable at the current payment.
    pub payoff_months: Option<u32>,
}

/// Monthly contribution plan for a single savings goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalAllocation {
    pub id: Uuid,
    pub name: String,
    /// Monthly amount needed to hit the target by its date.
    pub required_monthly: f64,
    pub allocated_monthly: f64,
    pub shortfall: f64,
    pub on_track: bool,
}

/// Where the available cash goes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocations {
    /// Ordered by descending annual rate (ties keep input order).
    pub debt_allocations: Vec<DebtAllocation>,
    pub emergency_fund_monthly: f64,
    pub emergency_fund_gap: f64,
    pub general_savings: f64,
    /// Ordered by descending priority (ties keep input order).
    pub goal_allocations: Vec<GoalAllocation>,
    pub discretionary_spending: f64,
}

/// The full result of one analysis run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetPlan {
    /// Cash left after fixed costs. May be negative (overspending); not
    /// clamped at this stage.
    pub available_for_allocation: f64,
    pub ratios: Ratios,
    pub allocations: Allocations,
    pub recommendations: Vec<String>,
    pub warnings: Vec<String>,
}
