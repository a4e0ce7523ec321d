use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    #[error("{field} must be >= 0")]
    Negative { field: &'static str },

    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },

    #[error("loanYears must be > 0")]
    ZeroLoanTerm,

    #[error("{field} must be below the retirement age of 65")]
    RetirementAgePassed { field: &'static str },

    #[error("invalid amount: {value:?}")]
    InvalidAmount { value: String },
}

pub(crate) fn check_finite(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(InputError::NonFinite { field })
    }
}

pub(crate) fn check_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    check_finite(field, value)?;
    if value < 0.0 {
        return Err(InputError::Negative { field });
    }
    Ok(())
}

pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), InputError> {
    check_finite(field, value)?;
    if !(min..=max).contains(&value) {
        return Err(InputError::OutOfRange { field, min, max });
    }
    Ok(())
}
