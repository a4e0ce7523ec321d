mod error;
mod life;
mod loan;
mod purchase;
mod rent;
mod tables;
mod types;

pub use error::InputError;
pub use life::run_life_simulation;
pub use loan::run_loan_simulation;
pub use purchase::run_purchase_simulation;
pub use rent::run_rent_simulation;
pub use tables::{ADDON_PRIVATE_SCHOOL_COST, CHILD_GROWING_COST};
pub use types::{
    ChildInfo, DeductionTier, LifeInput, LifeResult, LoanInput, LoanResult, Property,
    PurchaseInput, PurchaseResult, RentInput, RentResult, parse_amount,
};

/// Rounds to the nearest integer with halves going up, so -2.5 becomes -2.
pub(crate) fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}
