use crate::error::Error;
use crate::storage::BondTerms;

/// Check issuance parameters before they become immutable
///
/// Timestamps must satisfy sale_end <= activation_deadline <= maturity.
/// Equal timestamps are accepted so compressed schedules stay valid.
pub fn validate_terms(terms: &BondTerms) -> Result<(), Error> {
    if terms.total_units <= 0 {
        return Err(Error::InvalidTerms);
    }

    if terms.unit_price < 0
        || terms.base_coupon < 0
        || terms.step_up_coupon < 0
        || terms.min_funding < 0
    {
        return Err(Error::InvalidTerms);
    }

    if terms.sale_end > terms.activation_deadline || terms.activation_deadline > terms.maturity {
        return Err(Error::InvalidTimestamp);
    }

    Ok(())
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
            sale_end: 10,
            activation_deadline: 11,
            maturity: 12,
        }
    }

    #[test]
    fn test_valid_terms() {
        let env = Env::default();
        assert_eq!(validate_terms(&terms(&env)), Ok(()));
    }

    #[test]
    fn test_equal_timestamps_accepted() {
        let env = Env::default();
        let mut t = terms(&env);
        t.activation_deadline = t.sale_end;
        t.maturity = t.sale_end;
        assert_eq!(validate_terms(&t), Ok(()));
    }

    #[test]
    fn test_misordered_timestamps() {
        let env = Env::default();
        let mut t = terms(&env);
        t.sale_end = 20;
        assert_eq!(validate_terms(&t), Err(Error::InvalidTimestamp));

        let mut t = terms(&env);
        t.maturity = 5;
        assert_eq!(validate_terms(&t), Err(Error::InvalidTimestamp));
    }

    #[test]
    fn test_invalid_amounts() {
        let env = Env::default();
        let mut t = terms(&env);
        t.total_units = 0;
        assert_eq!(validate_terms(&t), Err(Error::InvalidTerms));

        let mut t = terms(&env);
        t.step_up_coupon = -1;
        assert_eq!(validate_terms(&t), Err(Error::InvalidTerms));
    }
}
