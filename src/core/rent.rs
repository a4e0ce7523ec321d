use super::error::{InputError, check_non_negative, check_range};
use super::types::{RentInput, RentResult};

const LIFE_EXPECTANCY: f64 = 100.0;

impl RentInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check_range("age", self.age, 0.0, 120.0)?;
        check_non_negative("rentPrice", self.rent_price)?;
        check_non_negative("condoFee", self.condo_fee)?;
        check_non_negative("renewalFee", self.renewal_fee)?;
        Ok(())
    }
}

/// Monthly and lifetime cost of renting until age 100. The renewal fee is
/// charged once per remaining year.
pub fn run_rent_simulation(input: &RentInput) -> RentResult {
    let years_to_live = LIFE_EXPECTANCY - input.age;
    let monthly_cost = input.rent_price + input.condo_fee;
    let all_paying_cost = (monthly_cost * 12.0 + input.renewal_fee) * years_to_live;

    RentResult {
        monthly_cost,
        all_paying_cost,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};

    #[test]
    fn default_rent_until_one_hundred() {
        let input = RentInput {
            age: 30.0,
            rent_price: 50_000.0,
            condo_fee: 10_000.0,
            renewal_fee: 50_000.0,
        };
        let result = run_rent_simulation(&input);

        assert_eq!(result.monthly_cost, 60_000.0);
        assert_eq!(result.all_paying_cost, 53_900_000.0);
    }

    #[test]
    fn no_cost_remains_at_one_hundred() {
        let input = RentInput {
            age: 100.0,
            rent_price: 80_000.0,
            condo_fee: 5_000.0,
            renewal_fee: 80_000.0,
        };
        let result = run_rent_simulation(&input);

        assert_eq!(result.monthly_cost, 85_000.0);
        assert_eq!(result.all_paying_cost, 0.0);
    }

    #[test]
    fn validate_rejects_negative_fees() {
        let input = RentInput {
            age: 30.0,
            rent_price: 50_000.0,
            condo_fee: -1.0,
            renewal_fee: 0.0,
        };
        assert_eq!(
            input.validate(),
            Err(InputError::Negative { field: "condoFee" })
        );
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(64))]

        #[test]
        fn prop_total_splits_into_monthly_and_renewal_parts(
            age in 0u32..=100,
            rent_price in 0u32..500_000,
            condo_fee in 0u32..50_000,
            renewal_fee in 0u32..500_000
        ) {
            let input = RentInput {
                age: age as f64,
                rent_price: rent_price as f64,
                condo_fee: condo_fee as f64,
                renewal_fee: renewal_fee as f64,
            };
            prop_assert!(input.validate().is_ok());
            let result = run_rent_simulation(&input);

            let years = (100 - age) as f64;
            let expected = (rent_price as f64 + condo_fee as f64) * 12.0 * years
                + renewal_fee as f64 * years;
            prop_assert_eq!(result.all_paying_cost, expected);
            prop_assert_eq!(run_rent_simulation(&input), result);
        }
    }
}
