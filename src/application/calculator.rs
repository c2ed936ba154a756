use crate::domain::loan::{LoanTerms, MortgageQuote};

/// Grows `principal` by compound interest at `annual_rate`, compounded
/// `payments_per_year` times a year, over `years`.
///
/// This is `P * (1 + r/n)^(Y*n)`. The exponent is formed in floating point so
/// that very long terms saturate to infinity instead of overflowing an integer.
pub fn total_repayment(principal: u64, annual_rate: f64, years: u64, payments_per_year: u32) -> f64 {
    let n = f64::from(payments_per_year);
    let exponent = years as f64 * n;
    principal as f64 * (1.0 + annual_rate / n).powf(exponent)
}

/// Computes the quote for a set of validated terms.
///
/// The periodic payment is the total repayment split evenly across one
/// year's worth of payments. No rounding happens here.
pub fn quote(terms: &LoanTerms) -> MortgageQuote {
    let payments_per_year = terms.period.payments_per_year();
    let total = total_repayment(
        terms.principal,
        terms.interest_rate,
        terms.years,
        payments_per_year,
    );

    MortgageQuote {
        terms: *terms,
        payments_per_year,
        total_repayment: total,
        periodic_payment: total / f64::from(payments_per_year),
    }
}
