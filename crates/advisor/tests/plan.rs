use advisor::{AdvisorError, BudgetSnapshot, Debt, SavingsGoal, compute_plan_at};
use chrono::NaiveDate;
use uuid::Uuid;

const EPS: f64 = 1e-9;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn today() -> NaiveDate {
    date(2026, 1, 15)
}

fn snapshot() -> BudgetSnapshot {
    BudgetSnapshot {
        income: 10_000.0,
        needs: 4_000.0,
        wants: 2_000.0,
        debts: Vec::new(),
        emergency_fund: 0.0,
        emergency_target_months: 3.0,
        current_savings: 0.0,
        savings_goals: Vec::new(),
        currency: "$".to_string(),
    }
}

fn debt(name: &str, principal: f64, annual_rate: f64, min_payment: f64) -> Debt {
    Debt {
        id: Uuid::new_v4(),
        name: name.to_string(),
        principal,
        annual_rate,
        term_months: 24,
        min_payment,
    }
}

fn goal(name: &str, target: f64, target_date: NaiveDate, priority: u8) -> SavingsGoal {
    SavingsGoal {
        id: Uuid::new_v4(),
        name: name.to_string(),
        target_amount: target,
        current_amount: 0.0,
        target_date,
        priority,
    }
}

#[test]
fn zero_income_fails_validation() {
    let mut s = snapshot();
    s.income = 0.0;
    assert!(matches!(
        compute_plan_at(&s, today()),
        Err(AdvisorError::InvalidIncome(_))
    ));
}

#[test]
fn baseline_scenario_allocates_emergency_fund_first() {
    let plan = compute_plan_at(&snapshot(), today()).unwrap();

    assert_eq!(plan.available_for_allocation, 6_000.0);
    assert_eq!(plan.ratios.debt_service_ratio, 0.0);
    assert_eq!(plan.ratios.emergency_fund_ratio, 0.0);
    assert_eq!(plan.allocations.emergency_fund_gap, 12_000.0);
    // Ratio below 0.25 uses the 0.4 urgency factor: min(12000, 6000 * 0.4).
    assert_eq!(plan.allocations.emergency_fund_monthly, 2_400.0);
}

#[test]
fn identical_inputs_produce_identical_plans() {
    let s = snapshot();
    let a = compute_plan_at(&s, today()).unwrap();
    let b = compute_plan_at(&s, today()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn plan_never_allocates_more_than_available() {
    let mut s = snapshot();
    s.debts = vec![
        debt("card", 8_000.0, 0.22, 240.0),
        debt("car", 12_000.0, 0.06, 350.0),
    ];
    s.savings_goals = vec![
        goal("vacation", 3_000.0, date(2026, 7, 1), 4),
        goal("laptop", 2_000.0, date(2026, 4, 1), 2),
    ];
    s.emergency_fund = 2_000.0;
    s.current_savings = 500.0;

    let plan = compute_plan_at(&s, today()).unwrap();
    let a = &plan.allocations;

    let extra_debt: f64 = a.debt_allocations.iter().map(|d| d.extra_payment).sum();
    let goals_total: f64 = a.goal_allocations.iter().map(|g| g.allocated_monthly).sum();
    let committed = a.emergency_fund_monthly
        + extra_debt
        + goals_total
        + a.general_savings
        + a.discretionary_spending;

    assert!(committed <= plan.available_for_allocation + EPS);
}

#[test]
fn extra_payment_goes_to_the_highest_rate_debt_only() {
    let mut s = snapshot();
    s.debts = vec![
        debt("a", 5_000.0, 0.20, 150.0),
        debt("b", 5_000.0, 0.05, 150.0),
        debt("c", 5_000.0, 0.15, 150.0),
    ];
    let plan = compute_plan_at(&s, today()).unwrap();
    let allocations = &plan.allocations.debt_allocations;

    assert_eq!(allocations.len(), 3);
    assert_eq!(allocations[0].name, "a");
    assert!(allocations[0].extra_payment > 0.0);
    assert_eq!(allocations[1].extra_payment, 0.0);
    assert_eq!(allocations[2].extra_payment, 0.0);
}

#[test]
fn every_debt_and_goal_appears_exactly_once() {
    let mut s = snapshot();
    s.debts = vec![
        debt("a", 5_000.0, 0.20, 150.0),
        debt("b", 5_000.0, 0.05, 150.0),
    ];
    s.savings_goals = vec![
        goal("x", 1_000.0, date(2026, 6, 1), 3),
        goal("y", 1_000.0, date(2026, 6, 1), 5),
    ];
    let plan = compute_plan_at(&s, today()).unwrap();

    for d in &s.debts {
        assert_eq!(
            plan.allocations
                .debt_allocations
                .iter()
                .filter(|a| a.id == d.id)
                .count(),
            1
        );
    }
    for g in &s.savings_goals {
        assert_eq!(
            plan.allocations
                .goal_allocations
                .iter()
                .filter(|a| a.id == g.id)
                .count(),
            1
        );
    }
}

#[test]
fn zero_rate_debt_uses_the_simple_division_branch() {
    let mut s = snapshot();
    // High needs so no free cash boosts the payment.
    s.needs = 9_500.0;
    s.emergency_fund = 30_000.0;
    s.debts = vec![debt("loan", 10_000.0, 0.0, 500.0)];

    let plan = compute_plan_at(&s, today()).unwrap();
    assert_eq!(plan.allocations.debt_allocations[0].payoff_months, Some(20));
}

#[test]
fn underwater_debt_is_flagged_not_nan() {
    let mut s = snapshot();
    // No free cash, so the minimum payment is also the total payment.
    s.needs = 9_600.0;
    s.emergency_fund = 30_000.0;
    // 20_000 * 0.30 / 12 = 500/month interest; 400 never covers it.
    s.debts = vec![debt("payday", 20_000.0, 0.30, 400.0)];

    let plan = compute_plan_at(&s, today()).unwrap();
    assert_eq!(plan.allocations.debt_allocations[0].payoff_months, None);
    assert!(
        plan.warnings
            .iter()
            .any(|w| w.contains("payoff not achievable"))
    );
}

#[test]
fn goal_priority_waterfall() {
    let mut s = snapshot();
    // Inputs chosen so exactly 100 reaches the waterfall: available = 100,
    // emergency fully funded, no debts.
    s.income = 5_000.0;
    s.needs = 4_000.0;
    s.emergency_fund = 12_000.0;
    s.current_savings = 900.0;
    s.savings_goals = vec![
        goal("low", 100.0, date(2026, 2, 1), 1),
        goal("high", 100.0, date(2026, 2, 1), 5),
    ];

    let plan = compute_plan_at(&s, today()).unwrap();
    let goals = &plan.allocations.goal_allocations;

    assert_eq!(goals[0].name, "high");
    assert_eq!(goals[0].allocated_monthly, 100.0);
    assert!(goals[0].on_track);
    assert_eq!(goals[1].name, "low");
    assert_eq!(goals[1].allocated_monthly, 0.0);
    assert!(!goals[1].on_track);
}

#[test]
fn health_score_and_emergency_ratio_stay_in_bounds() {
    let cases = [
        (1_000.0, 5_000.0, 0.0, 0.0, 0.0),
        (10_000.0, 0.0, 50_000.0, 0.0, 5_000.0),
        (10_000.0, 4_000.0, 0.0, 3.0, 0.0),
        (500.0, 2_000.0, 100.0, 6.0, 400.0),
    ];
    for (income, needs, emergency_fund, months, current_savings) in cases {
        let mut s = snapshot();
        s.income = income;
        s.needs = needs;
        s.emergency_fund = emergency_fund;
        s.emergency_target_months = months;
        s.current_savings = current_savings;

        let plan = compute_plan_at(&s, today()).unwrap();
        assert!((0.0..=100.0).contains(&plan.ratios.health_score));
        assert!((0.0..=1.0).contains(&plan.ratios.emergency_fund_ratio));
    }
}

#[test]
fn zero_emergency_target_forces_full_ratio() {
    let mut s = snapshot();
    s.emergency_target_months = 0.0;
    let plan = compute_plan_at(&s, today()).unwrap();
    assert_eq!(plan.ratios.emergency_fund_ratio, 1.0);
    assert_eq!(plan.allocations.emergency_fund_gap, 0.0);
    assert_eq!(plan.allocations.emergency_fund_monthly, 0.0);
}

#[test]
fn overspending_propagates_negative_cash_and_warns() {
    let mut s = snapshot();
    s.income = 3_000.0;
    s.needs = 4_000.0;

    let plan = compute_plan_at(&s, today()).unwrap();
    assert_eq!(plan.available_for_allocation, -1_000.0);
    // The underfunded emergency fund still takes its cut of the (negative)
    // available cash; overspending is surfaced, not clamped away.
    assert_eq!(plan.allocations.emergency_fund_monthly, -400.0);
    assert!(plan.warnings.iter().any(|w| w == "Very tight budget."));
}

#[test]
fn narrative_thresholds_fire_in_order() {
    let mut s = snapshot();
    s.income = 5_000.0;
    s.needs = 2_000.0;
    s.debts = vec![debt("card", 30_000.0, 0.24, 2_000.0)];
    s.emergency_fund = 0.0;

    let plan = compute_plan_at(&s, today()).unwrap();

    // debt ratio 0.4 > 0.36
    assert!(plan.warnings[0].starts_with("High debt ratio (40.0%)"));
    assert!(plan.recommendations[0].contains("\"card\""));
    assert!(
        plan.warnings
            .iter()
            .any(|w| w.starts_with("Emergency fund critically low"))
    );
    assert!(
        plan.recommendations
            .iter()
            .any(|r| r == "Aim to save at least 10% of income.")
    );
}

#[test]
fn healthy_snapshot_gets_investment_recommendation() {
    let mut s = snapshot();
    s.needs = 3_000.0;
    s.emergency_fund = 12_000.0;
    s.current_savings = 2_000.0;

    let plan = compute_plan_at(&s, today()).unwrap();
    // free cash ratio 0.5 > 0.4
    assert!(
        plan.recommendations
            .iter()
            .any(|r| r == "Good cash flow; consider more investments.")
    );
    assert!(plan.warnings.is_empty());
    assert_eq!(plan.ratios.health_score, 100.0);
}

#[test]
fn partially_funded_emergency_recommendation_formats_the_target() {
    let mut s = snapshot();
    s.emergency_fund = 9_000.0; // ratio 0.75 against a 12,000 target

    let plan = compute_plan_at(&s, today()).unwrap();
    assert!(
        plan.recommendations
            .iter()
            .any(|r| r == "Continue building emergency fund toward $12,000.")
    );
}

#[test]
fn residual_splits_thirty_seventy() {
    let mut s = snapshot();
    s.emergency_fund = 12_000.0; // fully funded, no debts, no goals

    let plan = compute_plan_at(&s, today()).unwrap();
    // Whole 6000 reaches the residual split.
    assert!((plan.allocations.general_savings - 1_800.0).abs() < EPS);
    assert!((plan.allocations.discretionary_spending - 4_200.0).abs() < EPS);
}

#[test]
fn snapshot_round_trips_through_json() {
    let mut s = snapshot();
    s.debts = vec![debt("card", 8_000.0, 0.22, 240.0)];
    s.savings_goals = vec![goal("vacation", 3_000.0, date(2026, 7, 1), 4)];

    let json = serde_json::to_string(&s).unwrap();
    assert!(json.contains("\"annualRate\""));
    assert!(json.contains("\"targetDate\""));
    let back: BudgetSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(back, s);
}
