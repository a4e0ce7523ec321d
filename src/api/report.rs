use std::fmt::Write;

use crate::core::{LifeResult, LoanResult, PurchaseResult, RentResult};
use crate::format::{big_price, group_thousands, yen};

fn push_line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "{label:<28}{value}");
}

fn push_total(out: &mut String, label: &str, value: f64) {
    push_line(out, label, &format!("~{} ({})", big_price(value), yen(value)));
}

fn push_loan(out: &mut String, result: &LoanResult) {
    push_line(out, "Monthly cost", &yen(result.monthly_cost));
    if result.bonus_month_cost != result.monthly_cost {
        push_line(out, "Bonus month cost", &yen(result.bonus_month_cost));
    }
    push_line(out, "Monthly repayment", &yen(result.monthly_returning_price));
    if result.bonus_month_returning_price != result.monthly_returning_price {
        push_line(
            out,
            "Bonus month repayment",
            &yen(result.bonus_month_returning_price),
        );
    }
    push_total(out, "Total repayment", result.all_loan_plus_debt_price);
}

pub fn loan_report(result: &LoanResult) -> String {
    let mut out = String::new();
    push_loan(&mut out, result);
    push_total(&mut out, "Total cost", result.all_paying_cost);
    out
}

pub fn purchase_report(result: &PurchaseResult) -> String {
    let mut out = String::new();
    push_loan(&mut out, &result.loan);
    push_total(&mut out, "Total cost", result.total_cost);
    push_line(
        &mut out,
        "Initial cost",
        &format!("{} 万円", group_thousands(result.initial_cost)),
    );
    push_line(
        &mut out,
        "Down payment",
        &format!("{} 万円", group_thousands(result.down_payment)),
    );
    push_line(
        &mut out,
        "Remaining land value",
        &format!("~{} 万円", group_thousands(result.remaining_asset_value)),
    );
    out
}

pub fn rent_report(result: &RentResult) -> String {
    let mut out = String::new();
    push_line(&mut out, "Monthly cost", &yen(result.monthly_cost));
    push_total(&mut out, "Total cost", result.all_paying_cost);
    out
}

pub fn life_report(result: &LifeResult) -> String {
    let mut out = String::new();
    push_line(&mut out, "Average monthly spending", &yen(result.monthly_cost));
    push_line(&mut out, "Average monthly income", &yen(result.monthly_income));
    push_line(
        &mut out,
        "Average monthly balance",
        &yen(result.monthly_balance()),
    );
    push_total(&mut out, "Total spending", result.all_paying_cost);
    push_total(&mut out, "Total income", result.all_income);
    push_total(&mut out, "Total savings", result.all_saving_cost);
    push_total(&mut out, "Total balance", result.all_balance);
    out
}
