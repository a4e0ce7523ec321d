use serde::Serialize;

use super::error::InputError;

/// Upper limit on deductible loan principal, by certification of the home.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeductionTier {
    Certificated,
    #[default]
    Zeh,
    Eco,
    Other,
}

impl DeductionTier {
    /// Deductible principal cap in base currency.
    pub fn principal_limit(self) -> f64 {
        match self {
            DeductionTier::Certificated => 4500.0 * 10_000.0,
            DeductionTier::Zeh => 3500.0 * 10_000.0,
            DeductionTier::Eco => 3000.0 * 10_000.0,
            DeductionTier::Other => 2000.0 * 10_000.0,
        }
    }
}

/// Fixed-rate loan scenario. `loan_price`, `bonus_price` and `salary` are in
/// units of 10,000; `other_fee` is a monthly amount in base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanInput {
    pub age: f64,
    pub loan_years: u32,
    pub loan_price: f64,
    pub interest_rate: f64,
    pub bonus_price: f64,
    pub other_fee: f64,
    pub salary: f64,
    pub is_tax_deduction: bool,
    pub is_child_future_aid: bool,
    pub deduction_tier: DeductionTier,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanResult {
    pub monthly_returning_price: f64,
    pub bonus_month_returning_price: f64,
    pub monthly_cost: f64,
    pub bonus_month_cost: f64,
    pub all_loan_plus_debt_price: f64,
    pub all_paying_cost: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RentInput {
    pub age: f64,
    pub rent_price: f64,
    pub condo_fee: f64,
    pub renewal_fee: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentResult {
    pub monthly_cost: f64,
    pub all_paying_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildInfo {
    pub is_private_school: bool,
    pub lessons_cost: f64,
}

impl ChildInfo {
    /// Builds a child entry from the raw form value of the monthly lessons
    /// cost. A blank field counts as zero.
    pub fn from_form(is_private_school: bool, lessons_cost: &str) -> Result<Self, InputError> {
        Ok(Self {
            is_private_school,
            lessons_cost: parse_amount(lessons_cost)?,
        })
    }
}

/// Parses a numeric form field. Blank input is zero.
pub fn parse_amount(raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| InputError::InvalidAmount {
            value: raw.to_string(),
        })
}

/// Household plan up to retirement. Salaries are annual in units of 10,000,
/// every other amount is monthly in base currency.
#[derive(Debug, Clone, PartialEq)]
pub struct LifeInput {
    pub monthly_rent_price: f64,
    pub age: f64,
    pub salary: f64,
    pub partner_salary: f64,
    pub partner_age: f64,
    pub living_expenses: f64,
    pub utilities_cost: f64,
    pub insurance: f64,
    pub hobby_cost: f64,
    pub entertainment_cost: f64,
    pub other_cost: f64,
    pub saving_cost: f64,
    pub saving_cost_rate: f64,
    pub children: Vec<ChildInfo>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeResult {
    pub monthly_cost: f64,
    pub monthly_income: f64,
    pub all_paying_cost: f64,
    pub all_income: f64,
    pub all_saving_cost: f64,
    pub all_balance: f64,
}

impl LifeResult {
    pub fn monthly_balance(&self) -> f64 {
        self.monthly_income - self.monthly_cost
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Property {
    /// Monthly management and repair-reserve fee in base currency.
    #[serde(rename_all = "camelCase")]
    Apartment { management_fee: f64 },
    /// Lifetime maintenance budget in units of 10,000.
    #[serde(rename_all = "camelCase")]
    DetachedHouse { maintenance_cost: f64 },
}

impl Property {
    pub fn monthly_fee(self) -> f64 {
        match self {
            Property::Apartment { management_fee } => management_fee,
            Property::DetachedHouse { .. } => 0.0,
        }
    }

    pub fn maintenance_cost(self) -> f64 {
        match self {
            Property::Apartment { .. } => 0.0,
            Property::DetachedHouse { maintenance_cost } => maintenance_cost,
        }
    }
}

/// Home purchase financed by a loan. Prices are in units of 10,000.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseInput {
    pub house_price: f64,
    pub property: Property,
    pub age: f64,
    pub loan_years: u32,
    pub loan_price: f64,
    pub interest_rate: f64,
    pub bonus_price: f64,
    pub salary: f64,
    pub is_tax_deduction: bool,
    pub is_child_future_aid: bool,
    pub deduction_tier: DeductionTier,
}

impl PurchaseInput {
    pub fn loan_input(&self) -> LoanInput {
        LoanInput {
            age: self.age,
            loan_years: self.loan_years,
            loan_price: self.loan_price,
            interest_rate: self.interest_rate,
            bonus_price: self.bonus_price,
            other_fee: self.property.monthly_fee(),
            salary: self.salary,
            is_tax_deduction: self.is_tax_deduction,
            is_child_future_aid: self.is_child_future_aid,
            deduction_tier: self.deduction_tier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseResult {
    pub loan: LoanResult,
    /// Units of 10,000.
    pub initial_cost: f64,
    /// Units of 10,000; negative when borrowing more than the price.
    pub down_payment: f64,
    /// Base currency, loan costs plus initial and maintenance costs.
    pub total_cost: f64,
    /// Units of 10,000.
    pub remaining_asset_value: f64,
}
