//! Expense tracking: categories, individual expenses, and monthly summaries.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{AdvisorError, ResultAdvisor};

/// A spending category with its display metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    /// Hex color for charts.
    pub color: String,
    pub icon: String,
}

/// A single recorded expense.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub description: String,
    pub category_id: Uuid,
    pub date: NaiveDate,
}

/// Per-category slice of a monthly summary.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub name: String,
    pub color: String,
    pub icon: String,
    pub total: f64,
    /// Share of the month total, rounded to one decimal.
    pub percentage: f64,
}

/// Totals for one calendar month.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySummary {
    pub total: f64,
    pub by_category: Vec<CategorySummary>,
}

/// Owns the categories and expenses of one user.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseBook {
    categories: Vec<Category>,
    expenses: Vec<Expense>,
}

impl ExpenseBook {
    /// Creates an empty book.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a book seeded with the default category set.
    #[must_use]
    pub fn with_default_categories() -> Self {
        let defaults = [
            ("Food", "#FF6384", "🍔"),
            ("Housing", "#36A2EB", "🏠"),
            ("Transport", "#FFCE56", "🚗"),
            ("Utilities", "#4BC0C0", "💡"),
            ("Entertainment", "#9966FF", "🎬"),
            ("Health", "#FF6B6B", "💊"),
            ("Clothing", "#4B5563", "👕"),
        ];
        let categories = defaults
            .into_iter()
            .map(|(name, color, icon)| Category {
                id: Uuid::new_v4(),
                name: name.to_string(),
                color: color.to_string(),
                icon: icon.to_string(),
            })
            .collect();
        Self {
            categories,
            expenses: Vec::new(),
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    /// Adds a category. Names must be non-empty and unique.
    pub fn add_category(&mut self, name: &str, color: &str, icon: &str) -> ResultAdvisor<Uuid> {
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
        self.categories.push(Category {
            id,
            name: name.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        });
        Ok(id)
    }

    /// Records an expense against an existing category.
    pub fn add_expense(
        &mut self,
        amount: f64,
        description: &str,
        category_id: Uuid,
        date: NaiveDate,
    ) -> ResultAdvisor<Uuid> {
        if amount <= 0.0 {
            return Err(AdvisorError::InvalidAmount(
                "expense amount must be > 0".to_string(),
            ));
        }
        if !self.categories.iter().any(|c| c.id == category_id) {
            return Err(AdvisorError::KeyNotFound("category not exists".to_string()));
        }

        let id = Uuid::new_v4();
        self.expenses.push(Expense {
            id,
            amount,
            description: description.trim().to_string(),
            category_id,
            date,
        });
        Ok(id)
    }

    pub fn delete_expense(&mut self, id: Uuid) -> ResultAdvisor<()> {
        let before = self.expenses.len();
        self.expenses.retain(|e| e.id != id);
        if self.expenses.len() == before {
            return Err(AdvisorError::KeyNotFound("expense not exists".to_string()));
        }
        Ok(())
    }

    /// Removes a category. Rejected while expenses still reference it.
    pub fn delete_category(&mut self, id: Uuid) -> ResultAdvisor<()> {
        let Some(category) = self.categories.iter().find(|c| c.id == id) else {
            return Err(AdvisorError::KeyNotFound("category not exists".to_string()));
        };
        if self.expenses.iter().any(|e| e.category_id == id) {
            return Err(AdvisorError::CategoryInUse(category.name.clone()));
        }
        self.categories.retain(|c| c.id != id);
        Ok(())
    }

    /// Expenses recorded in the given calendar month.
    pub fn expenses_for_month(&self, year: i32, month: u32) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|e| e.date.year() == year && e.date.month() == month)
            .collect()
    }

    /// Month total plus a per-category breakdown.
    ///
    /// Percentages are each category's share of the month total, rounded to
    /// one decimal; a zero total yields zero percentages.
    pub fn monthly_summary(&self, year: i32, month: u32) -> MonthlySummary {
        let monthly = self.expenses_for_month(year, month);
        let total: f64 = monthly.iter().map(|e| e.amount).sum();

        let by_category = self
            .categories
            .iter()
            .map(|category| {
                let category_total: f64 = monthly
                    .iter()
                    .filter(|e| e.category_id == category.id)
                    .map(|e| e.amount)
                    .sum();
                let percentage = if total > 0.0 {
                    (category_total / total * 1000.0).round() / 10.0
                } else {
                    0.0
                };
                CategorySummary {
                    name: category.name.clone(),
                    color: category.color.clone(),
                    icon: category.icon.clone(),
                    total: category_total,
                    percentage,
                }
            })
            .collect();

        MonthlySummary { total, by_category }
    }

    /// Exports all expenses as CSV (date, category, description, amount).
    pub fn export_csv(&self) -> ResultAdvisor<String> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer.write_record(["date", "category", "description", "amount"])?;
        for expense in &self.expenses {
            let category_name = self
                .categories
                .iter()
                .find(|c| c.id == expense.category_id)
                .map(|c| c.name.as_str())
                .unwrap_or("");
            writer.write_record([
                expense.date.to_string().as_str(),
                category_name,
                expense.description.as_str(),
                format!("{:.2}", expense.amount).as_str(),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|err| AdvisorError::InvalidAmount(err.to_string()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_categories_are_seeded() {
        let book = ExpenseBook::with_default_categories();
        assert_eq!(book.categories().len(), 7);
    }

    #[test]
    fn duplicate_category_name_is_rejected() {
        let mut book = ExpenseBook::new();
        book.add_category("Food", "#FF6384", "🍔").unwrap();
        let err = book.add_category("Food", "#000000", "🍕").unwrap_err();
        assert_eq!(err, AdvisorError::ExistingKey("Food".to_string()));
    }

    #[test]
    fn expense_requires_existing_category_and_positive_amount() {
        let mut book = ExpenseBook::new();
        let food = book.add_category("Food", "#FF6384", "🍔").unwrap();

        assert!(book.add_expense(12.5, "lunch", food, date(2026, 5, 2)).is_ok());
        assert!(matches!(
            book.add_expense(0.0, "free", food, date(2026, 5, 2)),
            Err(AdvisorError::InvalidAmount(_))
        ));
        assert!(matches!(
            book.add_expense(5.0, "?", Uuid::new_v4(), date(2026, 5, 2)),
            Err(AdvisorError::KeyNotFound(_))
        ));
    }

    #[test]
    fn monthly_summary_filters_by_month_and_computes_shares() {
        let mut book = ExpenseBook::new();
        let food = book.add_category("Food", "#FF6384", "🍔").unwrap();
        let rent = book.add_category("Housing", "#36A2EB", "🏠").unwrap();

        book.add_expense(300.0, "groceries", food, date(2026, 5, 3)).unwrap();
        book.add_expense(900.0, "rent", rent, date(2026, 5, 1)).unwrap();
        book.add_expense(50.0, "april", food, date(2026, 4, 28)).unwrap();

        let summary = book.monthly_summary(2026, 5);
        assert_eq!(summary.total, 1_200.0);
        assert_eq!(summary.by_category[0].total, 300.0);
        assert_eq!(summary.by_category[0].percentage, 25.0);
        assert_eq!(summary.by_category[1].percentage, 75.0);
    }

    #[test]
    fn empty_month_has_zero_percentages() {
        let mut book = ExpenseBook::new();
        book.add_category("Food", "#FF6384", "🍔").unwrap();
        let summary = book.monthly_summary(2026, 1);
        assert_eq!(summary.total, 0.0);
        assert_eq!(summary.by_category[0].percentage, 0.0);
    }

    #[test]
    fn category_with_expenses_cannot_be_deleted() {
        let mut book = ExpenseBook::new();
        let food = book.add_category("Food", "#FF6384", "🍔").unwrap();
        book.add_expense(10.0, "snack", food, date(2026, 5, 2)).unwrap();

        assert!(matches!(
            book.delete_category(food),
            Err(AdvisorError::CategoryInUse(_))
        ));

        let expense_id = book.expenses()[0].id;
        book.delete_expense(expense_id).unwrap();
        assert!(book.delete_category(food).is_ok());
    }

    #[test]
    fn csv_export_has_header_and_rows() {
        let mut book = ExpenseBook::new();
        let food = book.add_category("Food", "#FF6384", "🍔").unwrap();
        book.add_expense(12.5, "lunch", food, date(2026, 5, 2)).unwrap();

        let csv = book.export_csv().unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("date,category,description,amount"));
        assert_eq!(lines.next(), Some("2026-05-02,Food,lunch,12.50"));
    }
}
