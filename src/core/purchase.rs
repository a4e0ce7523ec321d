use super::error::{InputError, check_non_negative};
use super::loan::run_loan_simulation;
use super::round_half_up;
use super::types::{Property, PurchaseInput, PurchaseResult};

const INITIAL_COST_RATE: f64 = 0.07;
/// Average building cost in units of 10,000; the rest of the price is land.
const AVERAGE_BUILDING_PRICE: f64 = 3454.0;

impl PurchaseInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check_non_negative("housePrice", self.house_price)?;
        match self.property {
            Property::Apartment { management_fee } => {
                check_non_negative("managementFee", management_fee)?
            }
            Property::DetachedHouse { maintenance_cost } => {
                check_non_negative("maintenanceCost", maintenance_cost)?
            }
        }
        self.loan_input().validate()
    }
}

/// Loan simulation plus the one-off costs of buying: purchase fees, down
/// payment and lifetime maintenance of a detached house.
pub fn run_purchase_simulation(input: &PurchaseInput) -> PurchaseResult {
    let loan = run_loan_simulation(&input.loan_input());

    let initial_cost = round_half_up(input.loan_price * INITIAL_COST_RATE);
    let down_payment = input.house_price - input.loan_price;
    let total_cost = loan.all_paying_cost
        + initial_cost * 10_000.0
        + input.property.maintenance_cost() * 10_000.0;
    let remaining_asset_value = (input.house_price - AVERAGE_BUILDING_PRICE).max(0.0);
    tracing::debug!(initial_cost, down_payment, total_cost, "purchase totals");

    PurchaseResult {
        loan,
        initial_cost,
        down_payment,
        total_cost,
        remaining_asset_value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::DeductionTier;

    fn sample_input(property: Property) -> PurchaseInput {
        PurchaseInput {
            house_price: 3000.0,
            property,
            age: 30.0,
            loan_years: 35,
            loan_price: 3000.0,
            interest_rate: 1.0,
            bonus_price: 0.0,
            salary: 500.0,
            is_tax_deduction: false,
            is_child_future_aid: false,
            deduction_tier: DeductionTier::Zeh,
        }
    }

    #[test]
    fn apartment_pays_management_fee_monthly() {
        let input = sample_input(Property::Apartment {
            management_fee: 20_000.0,
        });
        let result = run_purchase_simulation(&input);

        assert_eq!(result.loan.monthly_cost, 104_686.0);
        assert_eq!(result.initial_cost, 210.0);
        assert_eq!(result.down_payment, 0.0);
        assert_eq!(result.total_cost, result.loan.all_paying_cost + 2_100_000.0);
        assert_eq!(result.remaining_asset_value, 0.0);
    }

    #[test]
    fn detached_house_adds_maintenance_to_total() {
        let input = sample_input(Property::DetachedHouse {
            maintenance_cost: 500.0,
        });
        let result = run_purchase_simulation(&input);

        assert_eq!(result.loan.monthly_cost, result.loan.monthly_returning_price);
        assert_eq!(
            result.total_cost,
            result.loan.all_paying_cost + 2_100_000.0 + 5_000_000.0
        );
    }

    #[test]
    fn land_value_and_down_payment_follow_house_price() {
        let mut input = sample_input(Property::Apartment {
            management_fee: 0.0,
        });
        input.house_price = 5000.0;
        input.loan_price = 4000.0;
        let result = run_purchase_simulation(&input);

        assert_eq!(result.down_payment, 1000.0);
        assert_eq!(result.initial_cost, 280.0);
        assert_eq!(result.remaining_asset_value, 1546.0);
    }

    #[test]
    fn validate_checks_property_and_loan_fields() {
        let input = sample_input(Property::DetachedHouse {
            maintenance_cost: -1.0,
        });
        assert_eq!(
            input.validate(),
            Err(InputError::Negative {
                field: "maintenanceCost"
            })
        );

        let mut input = sample_input(Property::Apartment {
            management_fee: 0.0,
        });
        input.loan_years = 0;
        assert_eq!(input.validate(), Err(InputError::ZeroLoanTerm));
    }
}
