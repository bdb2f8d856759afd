//! Debt paydown: avalanche ordering and amortization.

use std::cmp::Ordering;

use crate::{Debt, DebtAllocation};

/// Projected whole months to pay off `principal` at a flat monthly
/// `payment` and the given annual rate.
///
/// Returns `None` when the payment can never retire the debt: non-positive
/// payment, or a payment that does not cover the monthly interest
/// (`payment <= principal * rate / 12`, where the amortization logarithm is
/// undefined).
pub(crate) fn payoff_months(principal: f64, payment: f64, annual_rate: f64) -> Option<u32> {
    if payment <= 0.0 {
        return None;
    }
    if principal <= 0.0 {
        return Some(0);
    }
    if annual_rate == 0.0 {
        return Some((principal / payment).ceil() as u32);
    }

    let r = annual_rate / 12.0;
    let arg = 1.0 - principal * r / payment;
    if arg <= 0.0 {
        // Interest accrues faster than the payment retires principal.
        return None;
    }
    Some((-arg.ln() / (1.0 + r).ln()).ceil() as u32)
}

/// Builds the per-debt payment plan: every debt gets its minimum payment,
/// and the single highest-rate debt additionally receives
/// `remaining_for_debt * factor` (avalanche method).
///
/// Returns the allocations ordered by descending rate (stable on ties) and
/// the extra payment amount.
pub(crate) fn allocate(
    debts: &[Debt],
    remaining_for_debt: f64,
    debt_service_ratio: f64,
) -> (Vec<DebtAllocation>, f64) {
    let mut ordered: Vec<&Debt> = debts.iter().collect();
    ordered.sort_by(|a, b| {
        b.annual_rate
            .partial_cmp(&a.annual_rate)
            .unwrap_or(Ordering::Equal)
    });

    let mut allocations: Vec<DebtAllocation> = ordered
        .iter()
        .map(|d| DebtAllocation {
            id: d.id,
            name: d.name.clone(),
            min_payment: d.min_payment,
            extra_payment: 0.0,
            total_payment: d.min_payment,
            payoff_months: payoff_months(d.principal, d.min_payment, d.annual_rate),
        })
        .collect();

    let mut extra = 0.0;
    if let Some(top) = allocations.first_mut() {
        let factor = if debt_service_ratio > 0.36 { 0.6 } else { 0.3 };
        extra = remaining_for_debt * factor;
        top.extra_payment = extra;
        top.total_payment = top.min_payment + extra;
        // Payoff time improves with the boosted payment.
        let source = ordered[0];
        top.payoff_months = payoff_months(source.principal, top.total_payment, source.annual_rate);
    }

    (allocations, extra)
}
