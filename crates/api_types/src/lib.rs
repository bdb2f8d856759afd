//! Request/response DTOs shared between the server and its clients.
//!
//! Field names use camelCase on the wire, matching the JSON the web client
//! already speaks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic "created" response carrying the new entity id.
#[derive(Debug, Serialize, Deserialize)]
pub struct Created {
    pub id: Uuid,
}

pub mod advisor {
    use super::*;

    /// Query parameters for `POST /advisor/plan`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct PlanQuery {
        /// Date to treat as "today" for goal time-remaining. Defaults to the
        /// current date; pass it explicitly for reproducible results.
        pub as_of: Option<NaiveDate>,
    }
}

pub mod expense {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct ExpenseNew {
        pub amount: f64,
        #[serde(default)]
        pub description: Option<String>,
        pub category_id: Uuid,
        pub date: NaiveDate,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct CategoryNew {
        pub name: String,
        #[serde(default)]
        pub color: Option<String>,
        #[serde(default)]
        pub icon: Option<String>,
    }

    /// Calendar-month selector used by expense listing and statistics.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct MonthQuery {
        pub year: i32,
        pub month: u32,
    }
}

pub mod funds {
    use super::*;

    /// Signed adjustment of the available-funds pool.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Deposit {
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FundCategoryNew {
        pub name: String,
    }

    /// Moves cash between the available pool and a bucket; used by both
    /// allocate and withdraw.
    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FundMove {
        pub category_id: Uuid,
        pub amount: f64,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct FundRemoved {
        /// Amount returned to the available pool.
        pub released: f64,
    }
}
