use super::error::{InputError, check_finite, check_non_negative, check_range};
use super::round_half_up;
use super::tables::{ADDON_PRIVATE_SCHOOL_COST, CHILD_GROWING_COST, lifetime_total};
use super::types::{ChildInfo, LifeInput, LifeResult};

const RETIREMENT_AGE: f64 = 65.0;
const LESSON_YEARS: f64 = 15.0;

impl LifeInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check_range("age", self.age, 0.0, 120.0)?;
        if self.age >= RETIREMENT_AGE {
            return Err(InputError::RetirementAgePassed { field: "age" });
        }
        check_range("partnerAge", self.partner_age, 0.0, 120.0)?;
        check_non_negative("salary", self.salary)?;
        check_non_negative("partnerSalary", self.partner_salary)?;
        for (field, value) in [
            ("monthlyRentPrice", self.monthly_rent_price),
            ("livingExpenses", self.living_expenses),
            ("utilitiesCost", self.utilities_cost),
            ("insurance", self.insurance),
            ("hobbyCost", self.hobby_cost),
            ("entertainmentCost", self.entertainment_cost),
            ("otherCost", self.other_cost),
            ("savingCost", self.saving_cost),
        ] {
            check_non_negative(field, value)?;
        }
        check_finite("savingCostRate", self.saving_cost_rate)?;
        for child in &self.children {
            check_non_negative("lessonsCost", child.lessons_cost)?;
        }
        Ok(())
    }
}

fn child_cost(child: &ChildInfo, one_child_all_cost: f64, addon_all_private_school_cost: f64) -> f64 {
    let private_school = if child.is_private_school {
        addon_all_private_school_cost
    } else {
        0.0
    };
    one_child_all_cost + child.lessons_cost * 12.0 * LESSON_YEARS + private_school
}

/// Lifetime income, spending and savings of a household until retirement.
/// Child-rearing costs are spread evenly over the remaining working months.
///
/// Inputs are not checked here; call [`LifeInput::validate`] first. An age of
/// 65 or more yields non-finite or negative figures.
pub fn run_life_simulation(input: &LifeInput) -> LifeResult {
    let salary = input.salary * 10_000.0;
    let partner_salary = input.partner_salary * 10_000.0;

    let remain_work_age = RETIREMENT_AGE - input.age;
    let remain_partner_work_age = RETIREMENT_AGE - input.partner_age;

    let all_income = salary * remain_work_age + partner_salary * remain_partner_work_age;
    let monthly_income = round_half_up((salary + partner_salary) / 12.0);

    let one_child_all_cost = lifetime_total(&CHILD_GROWING_COST);
    let addon_all_private_school_cost = lifetime_total(&ADDON_PRIVATE_SCHOOL_COST);
    let all_children_cost: f64 = input
        .children
        .iter()
        .map(|child| child_cost(child, one_child_all_cost, addon_all_private_school_cost))
        .sum();
    let monthly_child_cost = if input.children.is_empty() {
        0.0
    } else {
        round_half_up(all_children_cost / (remain_work_age * 12.0))
    };
    tracing::debug!(
        children = input.children.len(),
        all_children_cost,
        monthly_child_cost,
        "child costs"
    );

    let monthly_cost = input.monthly_rent_price
        + input.living_expenses
        + input.utilities_cost
        + input.insurance
        + input.hobby_cost
        + input.entertainment_cost
        + input.other_cost
        + input.saving_cost
        + monthly_child_cost;
    let all_paying_cost = monthly_cost * 12.0 * remain_work_age;

    // One-off uplift on the total saved, not compounded.
    let all_saving_cost =
        input.saving_cost * 12.0 * remain_work_age * (1.0 + input.saving_cost_rate / 100.0);
    let all_balance = all_income - all_paying_cost;
    tracing::debug!(monthly_cost, all_paying_cost, all_income, "life totals");

    LifeResult {
        monthly_cost,
        monthly_income,
        all_paying_cost,
        all_income,
        all_saving_cost,
        all_balance,
    }
}
