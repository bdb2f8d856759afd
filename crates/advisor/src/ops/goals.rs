//! Savings-goal allocation: a greedy waterfall by descending priority.

use chrono::{Datelike, NaiveDate};

use crate::{GoalAllocation, SavingsGoal};

/// Whole calendar months between two dates, ignoring the day of month.
///
/// Negative when `end` precedes `start`.
pub(crate) fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    (end.year() - start.year()) * 12 + (end.month() as i32 - start.month() as i32)
}

/// Walks the goals by descending priority (stable on ties), giving each up
/// to its required monthly amount while cash remains.
///
/// Every goal gets `required_monthly`, `shortfall`, and `on_track` computed
/// even after the cash is exhausted; only the dollar allocation is gated on
/// remaining funds.
///
/// Returns the allocations and the cash left over.
pub(crate) fn allocate(
    goals: &[SavingsGoal],
    remaining_after_debt: f64,
    today: NaiveDate,
) -> (Vec<GoalAllocation>, f64) {
    let mut ordered: Vec<&SavingsGoal> = goals.iter().collect();
    ordered.sort_by(|a, b| b.priority.cmp(&a.priority));

    let mut remaining = remaining_after_debt;
    let mut allocations = Vec::with_capacity(ordered.len());
    for goal in ordered {
        let needed = (goal.target_amount - goal.current_amount).max(0.0);
        let months_to_target = whole_months_between(today, goal.target_date).max(1) as f64;
        let required_monthly = needed / months_to_target;

        let give = if remaining > 0.0 {
            required_monthly.min(remaining)
        } else {
            0.0
        };
        remaining -= give;
        let shortfall = required_monthly - give;

        allocations.push(GoalAllocation {
            id: goal.id,
            name: goal.name.clone(),
            required_monthly,
            allocated_monthly: give,
            shortfall,
            on_track: shortfall <= 0.01,
        });
    }

    (allocations, remaining)
}
