use crate::application::calculator;
use crate::domain::input::{PeriodSelection, PositiveDecimal, PositiveInteger};
use crate::domain::loan::{LoanTerms, MortgageQuote, PaymentPeriod};
use crate::error::{Field, Result};
use crate::interfaces::console::{OutputFormat, Prompter, QuoteWriter};
use log::info;
use std::io::{BufRead, Write};

pub const PRINCIPAL_PROMPT: &str = "Please enter the principal (no decimal): ";
pub const YEARS_PROMPT: &str = "Please enter the years for the mortgage: ";
pub const INTEREST_INTRO: &str = "Please enter the interest as a decimal";
pub const INTEREST_PROMPT: &str = "(for example, enter 5% as 0.05): ";

/// The payment period menu, shown again on every attempt.
pub fn period_menu() -> String {
    let mut menu = String::from("Please select one of these three payment periods:\n");
    for (index, period) in PaymentPeriod::ALL.iter().enumerate() {
        menu.push_str(&format!(
            "{}. {} ({} per annum)\n",
            index + 1,
            period.label(),
            period.payments_per_year()
        ));
    }
    menu.push_str("> ");
    menu
}

/// Collects the four loan terms, in order, through a `Prompter`.
pub struct MortgageSession<R: BufRead, W: Write> {
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> MortgageSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            prompter: Prompter::new(input, output),
        }
    }

    /// Runs every prompt and returns the validated terms.
    ///
    /// Stops at the first prompt whose input runs out; later prompts are
    /// never shown.
    pub fn collect_terms(&mut self) -> Result<LoanTerms> {
        let principal = self
            .prompter
            .ask(Field::Principal, PRINCIPAL_PROMPT, &PositiveInteger)?;
        let years = self
            .prompter
            .ask(Field::Years, YEARS_PROMPT, &PositiveInteger)?;

        self.prompter.say(INTEREST_INTRO)?;
        let interest_rate = self
            .prompter
            .ask(Field::InterestRate, INTEREST_PROMPT, &PositiveDecimal)?;

        let period = self
            .prompter
            .ask(Field::PaymentPeriod, &period_menu(), &PeriodSelection)?;

        Ok(LoanTerms {
            principal,
            years,
            interest_rate,
            period,
        })
    }

    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

/// Runs a full calculation: prompts on `prompts`, reads answers from `input`,
/// and writes the report to `report`.
///
/// Nothing is written to `report` unless every prompt was answered.
pub fn run<R, P, O>(input: R, prompts: P, report: O, format: OutputFormat) -> Result<MortgageQuote>
where
    R: BufRead,
    P: Write,
    O: Write,
{
    let mut session = MortgageSession::new(input, prompts);
    let terms = session.collect_terms()?;
    // Release the prompt sink before reporting; both may be stdout.
    drop(session);

    let quote = calculator::quote(&terms);
    info!(
        "principal {} over {} years at {} paid {}: total {:.2}, per payment {:.2}",
        terms.principal,
        terms.years,
        terms.interest_rate,
        terms.period.label(),
        quote.total_repayment,
        quote.periodic_payment
    );

    QuoteWriter::new(report).write_quote(&quote, format)?;
    Ok(quote)
}
