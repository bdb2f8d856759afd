//! The allocation routine.
//!
//! `compute_plan_at` is a single-pass pure transformation; each step feeds
//! the next and the order is load-bearing:
//!
//! 1. fixed-cost subtraction
//! 2. ratios
//! 3. health score
//! 4. emergency-fund contribution
//! 5. debt paydown (avalanche)
//! 6. savings-goal waterfall
//! 7. residual split
//! 8. narrative generation

use chrono::{NaiveDate, Utc};

use crate::{AdvisorError, Allocations, BudgetPlan, BudgetSnapshot, Ratios, ResultAdvisor};

mod debts;
mod goals;
mod narrative;
mod ratios;

/// Computes an allocation plan for `snapshot`, reading "now" from the wall
/// clock.
///
/// Goal time-remaining depends on the current date; for deterministic
/// results use [`compute_plan_at`].
pub fn compute_plan(snapshot: &BudgetSnapshot) -> ResultAdvisor<BudgetPlan> {
    compute_plan_at(snapshot, Utc::now().date_naive())
}

/// Computes an allocation plan for `snapshot` as of `today`.
///
/// Fails with [`AdvisorError::InvalidIncome`] when `income <= 0`; no partial
/// plan is returned. All other inputs propagate arithmetically.
pub fn compute_plan_at(snapshot: &BudgetSnapshot, today: NaiveDate) -> ResultAdvisor<BudgetPlan> {
    if snapshot.income <= 0.0 {
        return Err(AdvisorError::InvalidIncome(
            "income must be positive".to_string(),
        ));
    }

    // Step 1: cash left once fixed costs and recurring savings are covered.
    let total_min_payments: f64 = snapshot.debts.iter().map(|d| d.min_payment).sum();
    let fixed_expenses = snapshot.needs + total_min_payments;
    let available_for_allocation = snapshot.income - fixed_expenses - snapshot.current_savings;

    // Step 2: ratios.
    let debt_service_ratio = total_min_payments / snapshot.income;
    let free_cash_ratio = available_for_allocation / snapshot.income;
    let emergency_target = snapshot.needs * snapshot.emergency_target_months;
    let emergency_fund_ratio = if emergency_target > 0.0 {
        (snapshot.emergency_fund / emergency_target).min(1.0)
    } else {
        1.0
    };
    let savings_ratio = snapshot.current_savings / snapshot.income;

    // Step 3: composite health score.
    let health_score = ratios::health_score(
        free_cash_ratio,
        debt_service_ratio,
        emergency_fund_ratio,
        savings_ratio,
    );

    // Step 4: emergency-fund contribution. A negative available cash flows
    // through un-clamped here; overspending is surfaced by the warnings, not
    // hidden by the allocator.
    let emergency_fund_gap = (emergency_target - snapshot.emergency_fund).max(0.0);
    let emergency_fund_monthly = if emergency_fund_gap > 0.0 && emergency_fund_ratio < 1.0 {
        let urgency_factor = if emergency_fund_ratio < 0.25 { 0.4 } else { 0.2 };
        emergency_fund_gap.min(available_for_allocation * urgency_factor)
    } else {
        0.0
    };

    // Step 5: debt paydown, extra payment on the highest-rate debt only.
    let remaining_for_debt = (available_for_allocation - emergency_fund_monthly).max(0.0);
    let (debt_allocations, extra_debt_payment) =
        debts::allocate(&snapshot.debts, remaining_for_debt, debt_service_ratio);

    // Step 6: goal waterfall by descending priority.
    let remaining_after_debt = remaining_for_debt - extra_debt_payment;
    let (goal_allocations, remaining) =
        goals::allocate(&snapshot.savings_goals, remaining_after_debt, today);

    // Step 7: residual split.
    let general_savings = remaining * 0.3;
    let discretionary_spending = (remaining - general_savings).max(0.0);

    // Step 8: narrative.
    let ratios = Ratios {
        debt_service_ratio,
        free_cash_ratio,
        emergency_fund_ratio,
        savings_ratio,
        health_score,
    };
    let (recommendations, warnings) = narrative::build(
        &ratios,
        &debt_allocations,
        &goal_allocations,
        emergency_target,
        &snapshot.currency,
    );

    Ok(BudgetPlan {
        available_for_allocation,
        ratios,
        allocations: Allocations {
            debt_allocations,
            emergency_fund_monthly,
            emergency_fund_gap,
            general_savings,
            goal_allocations,
            discretionary_spending,
        },
        recommendations,
        warnings,
    })
}
