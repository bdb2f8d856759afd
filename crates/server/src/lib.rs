use advisor::AdvisorError;
use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

pub use server::{ServerState, router, run_with_listener};

mod advice;
mod expenses;
mod funds;
mod server;
mod statistics;

pub mod types {
    pub mod advisor {
        pub use advisor::{BudgetPlan, BudgetSnapshot, Debt, SavingsGoal};
        pub use api_types::advisor::PlanQuery;
    }

    pub mod expense {
        pub use advisor::{Category, Expense, MonthlySummary};
        pub use api_types::expense::{CategoryNew, ExpenseNew, MonthQuery};
    }

    pub mod funds {
        pub use advisor::{FundBoard, FundCategory};
        pub use api_types::funds::{Deposit, FundCategoryNew, FundMove, FundRemoved};
    }
}

pub enum ServerError {
    Advisor(AdvisorError),
    Generic(String),
}

#[derive(Serialize)]
struct Error {
    error: String,
}

fn status_for_advisor_error(err: &AdvisorError) -> StatusCode {
    match err {
        AdvisorError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        AdvisorError::ExistingKey(_) | AdvisorError::CategoryInUse(_) => StatusCode::CONFLICT,
        AdvisorError::InvalidIncome(_)
        | AdvisorError::InvalidAmount(_)
        | AdvisorError::InsufficientFunds(_) => StatusCode::BAD_REQUEST,
        AdvisorError::Csv(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Advisor(err) => (status_for_advisor_error(&err), err.to_string()),
            ServerError::Generic(err) => (StatusCode::BAD_REQUEST, err),
        };
        (status, Json(Error { error: message })).into_response()
    }
}

impl From<AdvisorError> for ServerError {
    fn from(err: AdvisorError) -> Self {
        ServerError::Advisor(err)
    }
}
