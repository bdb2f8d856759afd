//! Investment/budget fund allocation: a pool of available funds split into
//! named buckets.
//!
//! Cash moves between the available pool and the buckets; it is never
//! created or destroyed by an allocation, so
//! `available + total_allocated()` is invariant across
//! allocate/withdraw/remove.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AdvisorError, ResultAdvisor};

/// One allocation bucket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundCategory {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
    /// Share of the allocated total, rounded to one decimal.
    pub percentage: f64,
}

/// Available funds plus the allocation buckets.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundBoard {
    available: f64,
    categories: Vec<FundCategory>,
}

impl FundBoard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn available(&self) -> f64 {
        self.available
    }

    pub fn categories(&self) -> &[FundCategory] {
        &self.categories
    }

    pub fn total_allocated(&self) -> f64 {
        self.categories.iter().map(|c| c.amount).sum()
    }

    /// Adjusts the available pool by `delta` (signed). Returns the new
    /// balance.
    pub fn deposit(&mut self, delta: f64) -> f64 {
        self.available += delta;
        self.available
    }

    /// Adds an empty bucket. Names must be non-empty and unique.
    pub fn add_category(&mut self, name: &str) -> ResultAdvisor<Uuid> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdvisorError::InvalidAmount(
                "category name must not be empty".to_string(),
            ));
        }
        if self.categories.iter().any(|c| c.name == name) {
            return Err(AdvisorError::ExistingKey(name.to_string()));
        }

        let id = Uuid::new_v4();
        self.categories.push(FundCategory {
            id,
            name: name.to_string(),
            amount: 0.0,
            percentage: 0.0,
        });
        self.recompute_percentages();
        Ok(id)
    }

    /// Removes a bucket, releasing its balance back to the available pool.
    /// Returns the released amount.
    pub fn remove_category(&mut self, id: Uuid) -> ResultAdvisor<f64> {
        let Some(index) = self.categories.iter().position(|c| c.id == id) else {
            return Err(AdvisorError::KeyNotFound("category not exists".to_string()));
        };
        let released = self.categories.remove(index).amount;
        self.available += released;
        self.recompute_percentages();
        Ok(released)
    }

    /// Moves `amount` from the available pool into a bucket.
    pub fn allocate(&mut self, id: Uuid, amount: f64) -> ResultAdvisor<()> {
        if amount <= 0.0 {
            return Err(AdvisorError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        if amount > self.available {
            return Err(AdvisorError::InsufficientFunds(
                "not enough available funds".to_string(),
            ));
        }
        let category = self.category_mut(id)?;
        category.amount += amount;
        self.available -= amount;
        self.recompute_percentages();
        Ok(())
    }

    /// Moves `amount` from a bucket back to the available pool.
    pub fn withdraw(&mut self, id: Uuid, amount: f64) -> ResultAdvisor<()> {
        if amount <= 0.0 {
            return Err(AdvisorError::InvalidAmount(
                "amount must be > 0".to_string(),
            ));
        }
        let category = self.category_mut(id)?;
        if amount > category.amount {
            return Err(AdvisorError::InsufficientFunds(
                "cannot withdraw more than the category holds".to_string(),
            ));
        }
        category.amount -= amount;
        self.available += amount;
        self.recompute_percentages();
        Ok(())
    }

    fn category_mut(&mut self, id: Uuid) -> ResultAdvisor<&mut FundCategory> {
        self.categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AdvisorError::KeyNotFound("category not exists".to_string()))
    }

    fn recompute_percentages(&mut self) {
        let total = self.total_allocated();
        for category in &mut self.categories {
            category.percentage = if total > 0.0 {
                (category.amount / total * 1000.0).round() / 10.0
            } else {
                0.0
            };
        }
    }
}
