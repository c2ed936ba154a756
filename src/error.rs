use miette::Diagnostic;
use std::fmt;
use thiserror::Error;

/// The four values collected from the user, in prompt order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Principal,
    Years,
    InterestRate,
    PaymentPeriod,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Principal => "principal",
            Field::Years => "years",
            Field::InterestRate => "interest rate",
            Field::PaymentPeriod => "payment period",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum MortgageError {
    #[error("input ended before the {field} was provided")]
    #[diagnostic(
        code(mortgage::input_exhausted),
        help("every prompt needs an answer; nothing was computed")
    )]
    InputExhausted { field: Field },
    #[error("IO error: {0}")]
    #[diagnostic(code(mortgage::io))]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    #[diagnostic(code(mortgage::json))]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MortgageError>;
