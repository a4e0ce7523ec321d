use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::core::{
    ChildInfo, DeductionTier, LifeInput, LoanInput, Property, PurchaseInput, RentInput,
};

#[derive(Parser, Debug)]
#[command(
    name = "homesim",
    about = "Home loan, rent and life plan cost simulator"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the JSON API over HTTP
    Serve {
        #[arg(default_value_t = 8080)]
        port: u16,
    },
    /// Monthly and lifetime cost of a fixed-rate home loan
    Loan(LoanArgs),
    /// Home purchase: loan plus initial, down payment and maintenance costs
    Purchase(PurchaseArgs),
    /// Lifetime cost of renting until 100
    Rent(RentArgs),
    /// Household income, spending and savings until retirement
    Life(LifeArgs),
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliDeductionTier {
    Certificated,
    Zeh,
    Eco,
    Other,
}

impl From<CliDeductionTier> for DeductionTier {
    fn from(value: CliDeductionTier) -> Self {
        match value {
            CliDeductionTier::Certificated => DeductionTier::Certificated,
            CliDeductionTier::Zeh => DeductionTier::Zeh,
            CliDeductionTier::Eco => DeductionTier::Eco,
            CliDeductionTier::Other => DeductionTier::Other,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum CliPropertyKind {
    Apartment,
    DetachedHouse,
}

#[derive(Args, Debug, Clone)]
pub struct LoanTermsArgs {
    #[arg(long, default_value_t = 30.0)]
    pub age: f64,
    #[arg(long, default_value_t = 35)]
    pub loan_years: u32,
    #[arg(long, default_value_t = 3000.0, help = "Loan amount in units of 10,000")]
    pub loan_price: f64,
    #[arg(long, default_value_t = 1.0, help = "Annual interest rate in percent")]
    pub interest_rate: f64,
    #[arg(
        long,
        default_value_t = 0.0,
        help = "Extra repayment in each of the two bonus months, in units of 10,000"
    )]
    pub bonus_price: f64,
    #[arg(long, default_value_t = 500.0, help = "Annual salary in units of 10,000")]
    pub salary: f64,
    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        help = "Apply the housing loan tax deduction"
    )]
    pub tax_deduction: bool,
    #[arg(long, help = "Apply the one-off child future housing subsidy")]
    pub child_future_aid: bool,
    #[arg(
        long,
        value_enum,
        default_value_t = CliDeductionTier::Zeh,
        help = "Home certification that sets the deductible principal limit"
    )]
    pub deduction_tier: CliDeductionTier,
}

#[derive(Args, Debug, Clone)]
pub struct LoanArgs {
    #[command(flatten)]
    pub terms: LoanTermsArgs,
    #[arg(
        long,
        default_value_t = 20000.0,
        help = "Monthly management or other recurring fee"
    )]
    pub other_fee: f64,
}

#[derive(Args, Debug, Clone)]
pub struct PurchaseArgs {
    #[command(flatten)]
    pub terms: LoanTermsArgs,
    #[arg(long, default_value_t = 3000.0, help = "House price in units of 10,000")]
    pub house_price: f64,
    #[arg(long, value_enum, default_value_t = CliPropertyKind::Apartment)]
    pub property: CliPropertyKind,
    #[arg(
        long,
        default_value_t = 20000.0,
        help = "Monthly management and repair-reserve fee of an apartment"
    )]
    pub management_fee: f64,
    #[arg(
        long,
        default_value_t = 500.0,
        help = "Lifetime maintenance budget of a detached house, in units of 10,000"
    )]
    pub maintenance_cost: f64,
}

#[derive(Args, Debug, Clone)]
pub struct RentArgs {
    #[arg(long, default_value_t = 30.0)]
    pub age: f64,
    #[arg(long, default_value_t = 50000.0, help = "Monthly rent")]
    pub rent_price: f64,
    #[arg(long, default_value_t = 10000.0, help = "Monthly common-area fee")]
    pub condo_fee: f64,
    #[arg(long, help = "Yearly renewal fee, defaults to one month of rent")]
    pub renewal_fee: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct LifeArgs {
    #[arg(long, default_value_t = 50000.0)]
    pub monthly_rent_price: f64,
    #[arg(long, default_value_t = 30.0)]
    pub age: f64,
    #[arg(long, default_value_t = 500.0, help = "Annual salary in units of 10,000")]
    pub salary: f64,
    #[arg(long, help = "Count the partner's salary as household income")]
    pub working_partner: bool,
    #[arg(
        long,
        default_value_t = 500.0,
        help = "Partner's annual salary in units of 10,000"
    )]
    pub partner_salary: f64,
    #[arg(long, default_value_t = 30.0)]
    pub partner_age: f64,
    #[arg(long, default_value_t = 50000.0)]
    pub living_expenses: f64,
    #[arg(long, default_value_t = 10000.0)]
    pub utilities_cost: f64,
    #[arg(long, default_value_t = 3000.0)]
    pub insurance: f64,
    #[arg(long, default_value_t = 20000.0)]
    pub hobby_cost: f64,
    #[arg(long, default_value_t = 10000.0)]
    pub entertainment_cost: f64,
    #[arg(long, default_value_t = 30000.0)]
    pub other_cost: f64,
    #[arg(long, default_value_t = 30000.0)]
    pub saving_cost: f64,
    #[arg(
        long,
        default_value_t = 1.0,
        help = "Return on total savings in percent"
    )]
    pub saving_cost_rate: f64,
    #[arg(
        long = "child",
        value_parser = parse_child_arg,
        help = "Child as private:<monthly lessons> or public:<monthly lessons>; repeat per child"
    )]
    pub children: Vec<ChildInfo>,
}

fn parse_child_arg(raw: &str) -> Result<ChildInfo, String> {
    let (school, lessons) = raw.split_once(':').unwrap_or((raw, ""));
    let is_private_school = match school.trim() {
        "private" => true,
        "public" => false,
        other => return Err(format!("unknown school kind {other:?}, expected private or public")),
    };
    ChildInfo::from_form(is_private_school, lessons).map_err(|e| e.to_string())
}

fn loan_input_from_terms(terms: &LoanTermsArgs, other_fee: f64) -> LoanInput {
    LoanInput {
        age: terms.age,
        loan_years: terms.loan_years,
        loan_price: terms.loan_price,
        interest_rate: terms.interest_rate,
        bonus_price: terms.bonus_price,
        other_fee,
        salary: terms.salary,
        is_tax_deduction: terms.tax_deduction,
        is_child_future_aid: terms.child_future_aid,
        deduction_tier: terms.deduction_tier.into(),
    }
}

pub fn build_loan_input(args: LoanArgs) -> Result<LoanInput, String> {
    let input = loan_input_from_terms(&args.terms, args.other_fee);
    input.validate().map_err(|e| e.to_string())?;
    Ok(input)
}

pub fn build_purchase_input(args: PurchaseArgs) -> Result<PurchaseInput, String> {
    let property = match args.property {
        CliPropertyKind::Apartment => Property::Apartment {
            management_fee: args.management_fee,
        },
        CliPropertyKind::DetachedHouse => Property::DetachedHouse {
            maintenance_cost: args.maintenance_cost,
        },
    };
    let terms = &args.terms;
    let input = PurchaseInput {
        house_price: args.house_price,
        property,
        age: terms.age,
        loan_years: terms.loan_years,
        loan_price: terms.loan_price,
        interest_rate: terms.interest_rate,
        bonus_price: terms.bonus_price,
        salary: terms.salary,
        is_tax_deduction: terms.tax_deduction,
        is_child_future_aid: terms.child_future_aid,
        deduction_tier: terms.deduction_tier.into(),
    };
    input.validate().map_err(|e| e.to_string())?;
    Ok(input)
}

pub fn build_rent_input(args: RentArgs) -> Result<RentInput, String> {
    let input = RentInput {
        age: args.age,
        rent_price: args.rent_price,
        condo_fee: args.condo_fee,
        renewal_fee: args.renewal_fee.unwrap_or(args.rent_price),
    };
    input.validate().map_err(|e| e.to_string())?;
    Ok(input)
}

pub fn build_life_input(args: LifeArgs) -> Result<LifeInput, String> {
    let input = LifeInput {
        monthly_rent_price: args.monthly_rent_price,
        age: args.age,
        salary: args.salary,
        partner_salary: if args.working_partner {
            args.partner_salary
        } else {
            0.0
        },
        partner_age: args.partner_age,
        living_expenses: args.living_expenses,
        utilities_cost: args.utilities_cost,
        insurance: args.insurance,
        hobby_cost: args.hobby_cost,
        entertainment_cost: args.entertainment_cost,
        other_cost: args.other_cost,
        saving_cost: args.saving_cost,
        saving_cost_rate: args.saving_cost_rate,
        children: args.children,
    };
    input.validate().map_err(|e| e.to_string())?;
    Ok(input)
}

pub fn default_loan_terms() -> LoanTermsArgs {
    LoanTermsArgs {
        age: 30.0,
        loan_years: 35,
        loan_price: 3000.0,
        interest_rate: 1.0,
        bonus_price: 0.0,
        salary: 500.0,
        tax_deduction: true,
        child_future_aid: false,
        deduction_tier: CliDeductionTier::Zeh,
    }
}

pub fn default_loan_args() -> LoanArgs {
    LoanArgs {
        terms: default_loan_terms(),
        other_fee: 20_000.0,
    }
}

pub fn default_purchase_args() -> PurchaseArgs {
    PurchaseArgs {
        terms: default_loan_terms(),
        house_price: 3000.0,
        property: CliPropertyKind::Apartment,
        management_fee: 20_000.0,
        maintenance_cost: 500.0,
    }
}

pub fn default_rent_args() -> RentArgs {
    RentArgs {
        age: 30.0,
        rent_price: 50_000.0,
        condo_fee: 10_000.0,
        renewal_fee: None,
    }
}

pub fn default_life_args() -> LifeArgs {
    LifeArgs {
        monthly_rent_price: 50_000.0,
        age: 30.0,
        salary: 500.0,
        working_partner: false,
        partner_salary: 500.0,
        partner_age: 30.0,
        living_expenses: 50_000.0,
        utilities_cost: 10_000.0,
        insurance: 3_000.0,
        hobby_cost: 20_000.0,
        entertainment_cost: 10_000.0,
        other_cost: 30_000.0,
        saving_cost: 30_000.0,
        saving_cost_rate: 1.0,
        children: Vec::new(),
    }
}
