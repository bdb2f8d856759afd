//! Core library for Prosper: the budget allocation engine plus the
//! expense-tracking and fund-allocation domain.
//!
//! The engine ([`compute_plan`]) is a pure function: it consumes a
//! [`BudgetSnapshot`] and deterministically produces a [`BudgetPlan`]. It
//! performs no I/O and keeps no state between calls, so it is safe to invoke
//! from any context (server handler, CLI, test).

pub use currency::format_amount;
pub use error::AdvisorError;
pub use expenses::{Category, CategorySummary, Expense, ExpenseBook, MonthlySummary};
pub use funds::{FundBoard, FundCategory};
pub use ops::{compute_plan, compute_plan_at};
pub use plan::{Allocations, BudgetPlan, DebtAllocation, GoalAllocation, Ratios};
pub use snapshot::{BudgetSnapshot, Debt, SavingsGoal};

mod currency;
mod error;
mod expenses;
mod funds;
mod ops;
mod plan;
mod snapshot;

type ResultAdvisor<T> = Result<T, AdvisorError>;
