use std::{error::Error, fs, path::PathBuf};

use advisor::{BudgetPlan, BudgetSnapshot, format_amount};
use chrono::{NaiveDate, Utc};
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "prosper_cli")]
#[command(about = "Run a budget analysis from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute an allocation plan from a snapshot file.
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
struct PlanArgs {
    /// Path to a JSON-encoded budget snapshot.
    #[arg(long)]
    input: PathBuf,
    /// Date to treat as "today" (YYYY-MM-DD). Defaults to the current date.
    #[arg(long)]
    as_of: Option<NaiveDate>,
    /// Emit the raw plan as JSON instead of a report.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Plan(args) => {
            let raw = fs::read_to_string(&args.input)?;
            let snapshot: BudgetSnapshot = serde_json::from_str(&raw)?;
            let today = args.as_of.unwrap_or_else(|| Utc::now().date_naive());
            let plan = advisor::compute_plan_at(&snapshot, today)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_report(&snapshot, &plan);
            }
        }
    }

    Ok(())
}

fn print_report(snapshot: &BudgetSnapshot, plan: &BudgetPlan) {
    let symbol = snapshot.currency.as_str();

    println!("Health score: {:.0}/100", plan.ratios.health_score);
    println!(
        "Available for allocation: {}",
        format_amount(symbol, plan.available_for_allocation)
    );
    println!(
        "Ratios: debt service {:.1}%, free cash {:.1}%, emergency fund {:.1}%, savings {:.1}%",
        plan.ratios.debt_service_ratio * 100.0,
        plan.ratios.free_cash_ratio * 100.0,
        plan.ratios.emergency_fund_ratio * 100.0,
        plan.ratios.savings_ratio * 100.0,
    );

    if plan.allocations.emergency_fund_gap > 0.0 {
        println!(
            "Emergency fund: contribute {} this month (gap {})",
            format_amount(symbol, plan.allocations.emergency_fund_monthly),
            format_amount(symbol, plan.allocations.emergency_fund_gap),
        );
    }

    if !plan.allocations.debt_allocations.is_empty() {
        println!("Debts (avalanche order):");
        for debt in &plan.allocations.debt_allocations {
            let payoff = match debt.payoff_months {
                Some(months) => format!("{months} months"),
                None => "not achievable at current payment".to_string(),
            };
            println!(
                "  {}: pay {} (min {} + extra {}), payoff in {}",
                debt.name,
                format_amount(symbol, debt.total_payment),
                format_amount(symbol, debt.min_payment),
                format_amount(symbol, debt.extra_payment),
                payoff,
            );
        }
    }

    if !plan.allocations.goal_allocations.is_empty() {
        println!("Savings goals:");
        for goal in &plan.allocations.goal_allocations {
            let status = if goal.on_track { "on track" } else { "behind" };
            println!(
                "  {}: {} of {} needed monthly ({status})",
                goal.name,
                format_amount(symbol, goal.allocated_monthly),
                format_amount(symbol, goal.required_monthly),
            );
        }
    }

    println!(
        "General savings: {}, discretionary: {}",
        format_amount(symbol, plan.allocations.general_savings),
        format_amount(symbol, plan.allocations.discretionary_spending),
    );

    for warning in &plan.warnings {
        println!("! {warning}");
    }
    for recommendation in &plan.recommendations {
        println!("> {recommendation}");
    }
}
