//! Warning and recommendation generation.
//!
//! Deterministic, order-sensitive list construction from fixed thresholds.
//! The strings are displayed verbatim by the clients.

use crate::{DebtAllocation, GoalAllocation, Ratios, currency::format_amount};

pub(crate) fn build(
    ratios: &Ratios,
    debt_allocations: &[DebtAllocation],
    goal_allocations: &[GoalAllocation],
    emergency_target: f64,
    currency: &str,
) -> (Vec<String>, Vec<String>) {
    let mut recommendations = Vec::new();
    let mut warnings = Vec::new();

    if ratios.debt_service_ratio > 0.36 {
        warnings.push(format!(
            "High debt ratio ({:.1}%). Consider consolidation or boosting income.",
            ratios.debt_service_ratio * 100.0
        ));
    }
    if let Some(top) = debt_allocations.first() {
        recommendations.push(format!("Focus extra payment on \"{}\".", top.name));
    }
    for debt in debt_allocations {
        if debt.payoff_months.is_none() {
            warnings.push(format!(
                "Payment on \"{}\" does not cover interest; payoff not achievable at current payment.",
                debt.name
            ));
        }
    }

    if ratios.emergency_fund_ratio < 0.5 {
        warnings.push(format!(
            "Emergency fund critically low ({:.1}%).",
            ratios.emergency_fund_ratio * 100.0
        ));
    } else if ratios.emergency_fund_ratio < 1.0 {
        recommendations.push(format!(
            "Continue building emergency fund toward {}.",
            format_amount(currency, emergency_target)
        ));
    }

    for goal in goal_allocations {
        if !goal.on_track {
            warnings.push(format!(
                "\"{}\" underfunded by {:.0}%.",
                goal.name,
                goal.shortfall / goal.required_monthly * 100.0
            ));
        }
    }

    if ratios.free_cash_ratio < 0.1 {
        warnings.push("Very tight budget.".to_string());
    } else if ratios.free_cash_ratio > 0.4 {
        recommendations.push("Good cash flow; consider more investments.".to_string());
    }

    if ratios.savings_ratio < 0.1 {
        recommendations.push("Aim to save at least 10% of income.".to_string());
    }

    (recommendations, warnings)
}
