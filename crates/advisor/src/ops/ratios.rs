//! Health-score computation.

/// Composite 0-100 score, sum of four components each capped at 25.
///
/// The cash and savings components are not floored individually (a negative
/// free-cash ratio drags the score down); only the final sum is clamped to
/// [0, 100].
pub(crate) fn health_score(
    free_cash_ratio: f64,
    debt_service_ratio: f64,
    emergency_fund_ratio: f64,
    savings_ratio: f64,
) -> f64 {
    let cash = if free_cash_ratio >= 0.2 {
        25.0
    } else {
        free_cash_ratio * 125.0
    };
    let debt = if debt_service_ratio <= 0.36 {
        25.0
    } else {
        (25.0 - (debt_service_ratio - 0.36) * 100.0).max(0.0)
    };
    let emergency = emergency_fund_ratio * 25.0;
    let savings = if savings_ratio >= 0.2 {
        25.0
    } else {
        savings_ratio * 125.0
    };

    (cash + debt + emergency + savings).clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn perfect_inputs_score_100() {
        assert_eq!(health_score(0.2, 0.0, 1.0, 0.2), 100.0);
    }

    #[test]
    fn score_is_clamped_at_zero() {
        assert_eq!(health_score(-2.0, 0.9, 0.0, 0.0), 0.0);
    }

    #[test]
    fn debt_component_decays_past_threshold() {
        // 0.46 ratio: 25 - (0.10 * 100) = 15 from the debt component.
        let score = health_score(0.0, 0.46, 0.0, 0.0);
        assert!((score - 15.0).abs() < 1e-9);
    }

    #[test]
    fn partial_components_add_up() {
        // cash 12.5, debt 25, emergency 12.5, savings 12.5
        let score = health_score(0.1, 0.2, 0.5, 0.1);
        assert!((score - 62.5).abs() < 1e-9);
    }
}
