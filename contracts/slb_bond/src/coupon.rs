use crate::storage::{BondTerms, KpiVector, RATE_DENOMINATOR};

/// A measurement meets the KPI when every value reaches its target
pub fn kpi_met(values: &KpiVector, targets: &KpiVector) -> bool {
    values.0 >= targets.0 && values.1 >= targets.1 && values.2 >= targets.2
}

/// Select the coupon rate for a reviewed period
///
/// Base rate only when the verifier accepted the report and the KPI is met;
/// a rejected report or a missed target steps the coupon up.
pub fn coupon_rate(terms: &BondTerms, accepted: bool, met: bool) -> i128 {
    if accepted && met {
        terms.base_coupon
    } else {
        terms.step_up_coupon
    }
}

/// Coupon owed for a holding
///
/// `rate` is one period's rate, or the sum of rates over the periods the
/// holding was unchanged.
///
/// Formula: units × unit_price × rate / RATE_DENOMINATOR
///
/// Example:
/// - units: 20, unit_price: 50, rate: 10%
/// - coupon: 20 × 50 × 10 / 100 = 100
pub fn calculate_coupon(units: i128, unit_price: i128, rate: i128) -> Option<i128> {
    units
        .checked_mul(unit_price)?
        .checked_mul(rate)?
        .checked_div(RATE_DENOMINATOR)
}

/// Currency due at mint
pub fn calculate_mint_cost(quantity: i128, unit_price: i128) -> Option<i128> {
    quantity.checked_mul(unit_price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::{Env, String};

    fn terms(env: &Env) -> BondTerms {
        BondTerms {
            description: String::from_str(env, "Bond 1, KPI: Greenhouse gas emissions"),
            kpi_targets: (1, 0, 0),
            total_units: 100,
            base_coupon: 1,
            step_up_coupon: 10,
            unit_price: 5,
            min_funding: 100,
            sale_end: 1_000,
            activation_deadline: 2_000,
            maturity: 3_000,
        }
    }

    #[test]
    fn test_kpi_met_requires_every_target() {
        assert!(kpi_met(&(1, 2, 3), &(1, 0, 0)));
        assert!(kpi_met(&(1, 0, 0), &(1, 0, 0)));
        assert!(!kpi_met(&(0, 2, 3), &(1, 0, 0)));
        assert!(!kpi_met(&(5, 5, -1), &(1, 0, 0)));
    }

    #[test]
    fn test_coupon_rate_selection() {
        let env = Env::default();
        let terms = terms(&env);

        assert_eq!(coupon_rate(&terms, true, true), 1);
        assert_eq!(coupon_rate(&terms, true, false), 10);
        // Rejected report pays the step-up even if the numbers look fine
        assert_eq!(coupon_rate(&terms, false, true), 10);
    }

    #[test]
    fn test_calculate_coupon() {
        assert_eq!(calculate_coupon(20, 50, 10), Some(100));
        assert_eq!(calculate_coupon(15, 5, 1), Some(0));
        assert_eq!(calculate_coupon(0, 50, 10), Some(0));
    }

    #[test]
    fn test_calculate_coupon_overflow() {
        assert_eq!(calculate_coupon(i128::MAX, 2, 1), None);
        assert_eq!(calculate_mint_cost(i128::MAX, 2), None);
    }
}
