//! Input side of the engine: one complete set of financial inputs submitted
//! for analysis.
//!
//! A snapshot is immutable per computation. Amounts are monthly figures in
//! the user's display currency; the `currency` field is a free-text symbol
//! used only for presentation and never enters the arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An outstanding debt with its contractual minimum payment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    pub id: Uuid,
    pub name: String,
    /// Outstanding principal, >= 0.
    pub principal: f64,
    /// Annual interest rate as a fraction (0.18 = 18%).
    pub annual_rate: f64,
    pub term_months: u32,
    /// Contractual minimum monthly payment, > 0.
    pub min_payment: f64,
}

/// A savings goal with a target date and a 1-5 priority (5 = most urgent).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsGoal {
    pub id: Uuid,
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub target_date: NaiveDate,
    pub priority: u8,
}

/// One complete set of financial inputs for [`compute_plan`].
///
/// Only `income` is validated (`> 0`); other values are deliberately
/// permissive and degrade arithmetically (zero debts produce an empty
/// allocation list, a zero emergency target forces the fund ratio to 1).
///
/// [`compute_plan`]: crate::compute_plan
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetSnapshot {
    /// Net monthly income. Must be > 0.
    pub income: f64,
    /// Fixed monthly spending; also feeds the emergency-fund target.
    pub needs: f64,
    /// Discretionary monthly spending (informational).
    pub wants: f64,
    #[serde(default)]
    pub debts: Vec<Debt>,
    /// Current emergency savings balance.
    pub emergency_fund: f64,
    /// Months of `needs` the emergency fund should cover.
    pub emergency_target_months: f64,
    /// Amount already routed to recurring savings each month.
    pub current_savings: f64,
    #[serde(default)]
    pub savings_goals: Vec<SavingsGoal>,
    /// Display symbol only; has no effect on arithmetic.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_currency() -> String {
    "$".to_string()
}
