use super::error::{InputError, check_non_negative, check_range};
use super::round_half_up;
use super::types::{DeductionTier, LoanInput, LoanResult};

const RETIREMENT_AGE: f64 = 65.0;
const LIFE_EXPECTANCY: f64 = 100.0;
const CHILD_FUTURE_AID: f64 = 100.0 * 10_000.0;
const DEDUCTION_SALARY_LIMIT: f64 = 2000.0;
const DEDUCTION_MAX_YEARS: u32 = 13;
const DEDUCTION_RATE: f64 = 0.7 / 100.0;

impl LoanInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check_range("age", self.age, 0.0, 120.0)?;
        if self.loan_years == 0 {
            return Err(InputError::ZeroLoanTerm);
        }
        check_non_negative("loanPrice", self.loan_price)?;
        check_range("interestRate", self.interest_rate, 0.0, 100.0)?;
        check_non_negative("bonusPrice", self.bonus_price)?;
        check_non_negative("otherFee", self.other_fee)?;
        check_non_negative("salary", self.salary)?;
        Ok(())
    }
}

/// Level payment that amortizes `principal` over `periods` at `rate` per
/// period. A zero rate spreads the principal evenly.
fn amortized_payment(principal: f64, rate: f64, periods: f64) -> f64 {
    if rate == 0.0 {
        return principal / periods;
    }
    let growth = (1.0 + rate).powf(periods);
    principal * rate * growth / (growth - 1.0)
}

struct DeductionParams {
    loan_price: f64,
    loan_years: u32,
    monthly_returning_price: f64,
    bonus_month_returning_price: f64,
    salary: f64,
    tier: DeductionTier,
}

/// Total housing-loan tax deduction over the applicable years. Each year
/// deducts a share of the principal still outstanding at its start; once the
/// assumed repayments exceed the loan that share turns negative.
fn housing_loan_deduction(params: &DeductionParams) -> f64 {
    if params.salary > DEDUCTION_SALARY_LIMIT {
        return 0.0;
    }

    let apply_years = params.loan_years.min(DEDUCTION_MAX_YEARS);
    let limit = params.tier.principal_limit();
    let yearly_returning_price =
        params.monthly_returning_price * 10.0 + params.bonus_month_returning_price * 2.0;

    let mut remain_loan_price = params.loan_price;
    let mut total = 0.0;
    for year in 0..apply_years {
        let yearly_deduction = round_half_up(remain_loan_price.min(limit) * DEDUCTION_RATE);
        tracing::debug!(year, remain_loan_price, yearly_deduction, "housing loan deduction");
        total += yearly_deduction;
        remain_loan_price -= yearly_returning_price;
    }
    total
}

/// Monthly and lifetime cost of a fixed-rate loan with optional bonus-month
/// repayments. Recurring fees are assumed to run until age 100.
///
/// Inputs are not checked here; call [`LoanInput::validate`] first. A zero
/// `loan_years` yields non-finite figures.
pub fn run_loan_simulation(input: &LoanInput) -> LoanResult {
    let loan_price = input.loan_price * 10_000.0;
    let bonus_price = input.bonus_price * 10_000.0;
    let loan_years = input.loan_years as f64;

    let returning_count = loan_years * 12.0;
    let monthly_rate = input.interest_rate / 100.0 / 12.0;

    // Bonus repayments stop at retirement.
    let bonus_all_return_price =
        (bonus_price * 2.0 * (RETIREMENT_AGE - input.age)).min(loan_price);
    let loan_all_price_without_bonus = loan_price - bonus_all_return_price;
    tracing::debug!(
        loan_price,
        returning_count,
        monthly_rate,
        bonus_all_return_price,
        loan_all_price_without_bonus,
        "loan principal split"
    );

    let monthly_returning_price =
        amortized_payment(loan_all_price_without_bonus, monthly_rate, returning_count);
    let bonus_month_returning_price = monthly_returning_price + bonus_price;
    let all_loan_plus_debt_price =
        monthly_returning_price * 12.0 * loan_years + bonus_all_return_price;

    let monthly_cost = monthly_returning_price + input.other_fee;
    let bonus_month_cost = bonus_month_returning_price + input.other_fee;

    // Fees keep running after the loan is repaid.
    let months_to_live = (LIFE_EXPECTANCY - input.age) * 12.0;
    let mut all_paying_cost = all_loan_plus_debt_price + input.other_fee * months_to_live;
    if input.is_child_future_aid {
        all_paying_cost -= CHILD_FUTURE_AID;
    }
    tracing::debug!(
        monthly_returning_price,
        bonus_month_returning_price,
        all_loan_plus_debt_price,
        all_paying_cost,
        "loan payments"
    );

    if !input.is_tax_deduction {
        return LoanResult {
            monthly_returning_price: round_half_up(monthly_returning_price),
            bonus_month_returning_price: round_half_up(bonus_month_returning_price),
            monthly_cost: round_half_up(monthly_cost),
            bonus_month_cost: round_half_up(bonus_month_cost),
            all_loan_plus_debt_price: round_half_up(all_loan_plus_debt_price),
            all_paying_cost: round_half_up(all_paying_cost),
        };
    }

    let all_deduction_price = housing_loan_deduction(&DeductionParams {
        loan_price,
        loan_years: input.loan_years,
        monthly_returning_price,
        bonus_month_returning_price,
        salary: input.salary,
        tier: input.deduction_tier,
    });
    let monthly_deduction_price = all_deduction_price / returning_count;
    tracing::debug!(all_deduction_price, monthly_deduction_price, "loan tax deduction");

    let monthly_net = |value: f64| round_half_up(value - monthly_deduction_price).max(0.0);
    LoanResult {
        monthly_returning_price: monthly_net(monthly_returning_price),
        bonus_month_returning_price: monthly_net(bonus_month_returning_price),
        monthly_cost: monthly_net(monthly_cost),
        bonus_month_cost: monthly_net(bonus_month_cost),
        all_loan_plus_debt_price: round_half_up(all_loan_plus_debt_price - all_deduction_price),
        all_paying_cost: round_half_up(all_paying_cost - all_deduction_price),
    }
}
