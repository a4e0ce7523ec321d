use crate::core::{LifeResult, LoanResult, PurchaseResult, RentResult, round_half_up};
use serde::Serialize;

const HUNDRED_MILLION: f64 = 100_000_000.0;

/// Renders `value` with comma separators and at most three fractional
/// digits.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else if value > 0.0 {
            "∞".to_string()
        } else {
            "-∞".to_string()
        };
    }

    let rendered = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac_part.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac_part}")
    }
}

pub fn yen(value: f64) -> String {
    format!("{}円", group_thousands(value))
}

/// Approximate large amount: hundred-million units with one decimal above
/// 100,000,000, otherwise whole ten-thousand units.
pub fn big_price(value: f64) -> String {
    if value.abs() > HUNDRED_MILLION {
        let oku = round_half_up(value / 10_000_000.0) / 10.0;
        format!("{} 億円", group_thousands(oku))
    } else {
        format!("{} 万円", group_thousands(round_half_up(value / 10_000.0)))
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanDisplay {
    pub monthly_cost: String,
    pub bonus_month_cost: String,
    pub all_loan_plus_debt_price: String,
    pub all_paying_cost: String,
}

impl From<&LoanResult> for LoanDisplay {
    fn from(result: &LoanResult) -> Self {
        Self {
            monthly_cost: yen(result.monthly_cost),
            bonus_month_cost: yen(result.bonus_month_cost),
            all_loan_plus_debt_price: big_price(result.all_loan_plus_debt_price),
            all_paying_cost: big_price(result.all_paying_cost),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentDisplay {
    pub monthly_cost: String,
    pub all_paying_cost: String,
}

impl From<&RentResult> for RentDisplay {
    fn from(result: &RentResult) -> Self {
        Self {
            monthly_cost: yen(result.monthly_cost),
            all_paying_cost: big_price(result.all_paying_cost),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LifeDisplay {
    pub monthly_cost: String,
    pub monthly_income: String,
    pub monthly_balance: String,
    pub all_paying_cost: String,
    pub all_income: String,
    pub all_saving_cost: String,
    pub all_balance: String,
}

impl From<&LifeResult> for LifeDisplay {
    fn from(result: &LifeResult) -> Self {
        Self {
            monthly_cost: yen(result.monthly_cost),
            monthly_income: yen(result.monthly_income),
            monthly_balance: yen(result.monthly_balance()),
            all_paying_cost: big_price(result.all_paying_cost),
            all_income: big_price(result.all_income),
            all_saving_cost: big_price(result.all_saving_cost),
            all_balance: big_price(result.all_balance),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseDisplay {
    pub loan: LoanDisplay,
    pub initial_cost: String,
    pub down_payment: String,
    pub total_cost: String,
    pub remaining_asset_value: String,
}

impl From<&PurchaseResult> for PurchaseDisplay {
    fn from(result: &PurchaseResult) -> Self {
        Self {
            loan: LoanDisplay::from(&result.loan),
            initial_cost: format!("{} 万円", group_thousands(result.initial_cost)),
            down_payment: format!("{} 万円", group_thousands(result.down_payment)),
            total_cost: big_price(result.total_cost),
            remaining_asset_value: format!(
                "{} 万円",
                group_thousands(result.remaining_asset_value)
            ),
        }
    }
}
