//! Line-level validation rules for the console prompts.
//!
//! Each rule accepts one line of text, surrounding whitespace and the line
//! terminator included, and either yields a value or explains why the line
//! was rejected. A number must span the whole trimmed line.

use super::loan::PaymentPeriod;
use super::ports::InputRule;
use std::num::IntErrorKind;
use thiserror::Error;

/// Why a single line of input was not accepted.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Rejection {
    #[error("input is not a number")]
    NotANumber,
    #[error("input has unexpected characters after the number")]
    TrailingCharacters,
    #[error("input is too small or too large")]
    OutOfRange,
    #[error("input must be greater than zero")]
    NotPositive,
    #[error("input is not one of the listed options")]
    NotAnOption,
}

/// A positive whole number, such as the principal or the term in years.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveInteger;

/// A positive, finite real number, such as an interest rate.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositiveDecimal;

/// A selection from the payment period menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct PeriodSelection;

impl InputRule for PositiveInteger {
    type Value = u64;

    fn parse(&self, line: &str) -> Result<u64, Rejection> {
        let value = parse_integer(line)?;
        if value < 1 {
            return Err(Rejection::NotPositive);
        }
        u64::try_from(value).map_err(|_| Rejection::OutOfRange)
    }
}

impl InputRule for PositiveDecimal {
    type Value = f64;

    fn parse(&self, line: &str) -> Result<f64, Rejection> {
        let literal = decimal_literal(line)?;
        let value: f64 = literal
            .text
            .parse()
            .map_err(|_| Rejection::NotANumber)?;

        if value.is_infinite() {
            return Err(Rejection::OutOfRange);
        }
        // A non-zero literal that lands on zero or a subnormal has underflowed.
        if literal.has_nonzero_digit && (value == 0.0 || value.is_subnormal()) {
            return Err(Rejection::OutOfRange);
        }
        if value <= 0.0 {
            return Err(Rejection::NotPositive);
        }
        Ok(value)
    }
}

impl InputRule for PeriodSelection {
    type Value = PaymentPeriod;

    fn parse(&self, line: &str) -> Result<PaymentPeriod, Rejection> {
        let selection = parse_integer(line)?;
        PaymentPeriod::from_selection(selection).ok_or(Rejection::NotAnOption)
    }
}

fn sign_len(text: &str) -> usize {
    usize::from(text.starts_with(['+', '-']))
}

fn digits_len(text: &str) -> usize {
    text.bytes().take_while(u8::is_ascii_digit).count()
}

fn parse_integer(line: &str) -> Result<i64, Rejection> {
    let text = line.trim();
    let sign = sign_len(text);
    let digits = digits_len(&text[sign..]);
    if digits == 0 {
        return Err(Rejection::NotANumber);
    }
    if sign + digits < text.len() {
        return Err(Rejection::TrailingCharacters);
    }

    text.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Rejection::OutOfRange,
        _ => Rejection::NotANumber,
    })
}

struct DecimalLiteral<'a> {
    text: &'a str,
    has_nonzero_digit: bool,
}

/// Scans `[sign] digits [. digits] [e [sign] digits]` over the trimmed line.
///
/// Textual forms such as `inf` or `nan` are not numbers here, even though
/// `f64::from_str` would accept them.
fn decimal_literal(line: &str) -> Result<DecimalLiteral<'_>, Rejection> {
    let text = line.trim();
    let bytes = text.as_bytes();
    let nonzero = |digits: &str| digits.bytes().any(|b| b != b'0');

    let mut end = sign_len(text);
    let int_digits = digits_len(&text[end..]);
    let mut has_nonzero_digit = nonzero(&text[end..end + int_digits]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        frac_digits = digits_len(&text[frac_start..]);
        has_nonzero_digit |= nonzero(&text[frac_start..frac_start + frac_digits]);
        end = frac_start + frac_digits;
    }

    if int_digits + frac_digits == 0 {
        return Err(Rejection::NotANumber);
    }

    // An exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let exp_start = end + 1;
        let exp_sign = sign_len(&text[exp_start..]);
        let exp_digits = digits_len(&text[exp_start + exp_sign..]);
        if exp_digits > 0 {
            end = exp_start + exp_sign + exp_digits;
        }
    }

    if end < text.len() {
        return Err(Rejection::TrailingCharacters);
    }

    Ok(DecimalLiteral {
        text,
        has_nonzero_digit,
    })
}
