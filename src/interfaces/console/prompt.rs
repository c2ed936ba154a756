use crate::domain::ports::InputRule;
use crate::error::{Field, MortgageError, Result};
use log::{debug, warn};
use std::io::{BufRead, Write};

/// Asks questions on a line-oriented console and retries until it gets a
/// valid answer.
///
/// `Prompter` works over any `BufRead` / `Write` pair, so the same loop serves
/// stdin/stdout, a scripted input file, or in-memory buffers in tests.
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
    line: Vec<u8>,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            line: Vec::new(),
        }
    }

    /// Writes a line of text that is not itself a prompt.
    pub fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Shows `prompt` and reads lines until `rule` accepts one.
    ///
    /// Every rejected line is answered with a `Sorry, ...` message and the
    /// prompt is shown again. Running out of input is the only way out
    /// without a value and is reported as `InputExhausted` for `field`.
    pub fn ask<Rule: InputRule>(
        &mut self,
        field: Field,
        prompt: &str,
        rule: &Rule,
    ) -> Result<Rule::Value> {
        loop {
            write!(self.output, "{prompt}")?;
            self.output.flush()?;

            self.line.clear();
            if self.input.read_until(b'\n', &mut self.line)? == 0 {
                warn!("input ended at the {field} prompt");
                return Err(MortgageError::InputExhausted { field });
            }

            // Invalid UTF-8 is decoded lossily and then fails to parse.
            let text = String::from_utf8_lossy(&self.line);
            match rule.parse(&text) {
                Ok(value) => {
                    debug!("accepted {field}");
                    return Ok(value);
                }
                Err(rejection) => {
                    debug!("rejected {field}: {rejection}");
                    writeln!(self.output, "Sorry, {rejection}.")?;
                }
            }
        }
    }

    /// Returns the output sink, consuming the prompter.
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::input::{PeriodSelection, PositiveDecimal, PositiveInteger};
    use crate::domain::loan::PaymentPeriod;

    fn prompter(input: &str) -> Prompter<&[u8], Vec<u8>> {
        Prompter::new(input.as_bytes(), Vec::new())
    }

    fn output(prompter: Prompter<&[u8], Vec<u8>>) -> String {
        String::from_utf8(prompter.into_output()).unwrap()
    }

    #[test]
    fn test_valid_line_needs_no_retry() {
        let mut p = prompter("250000\n");
        let value = p.ask(Field::Principal, "principal: ", &PositiveInteger).unwrap();

        assert_eq!(value, 250000);
        assert_eq!(output(p), "principal: ");
    }

    #[test]
    fn test_retries_until_valid() {
        let mut p = prompter("abc\n0\n-3\n12x\n15\n");
        let value = p.ask(Field::Years, "years: ", &PositiveInteger).unwrap();

        assert_eq!(value, 15);
        let out = output(p);
        assert_eq!(out.matches("years: ").count(), 5);
        assert_eq!(out.matches("Sorry, ").count(), 4);
        assert!(out.contains("Sorry, input is not a number."));
        assert!(out.contains("Sorry, input must be greater than zero."));
        assert!(out.contains("Sorry, input has unexpected characters after the number."));
    }

    #[test]
    fn test_out_of_range_message() {
        let mut p = prompter("99999999999999999999\n1\n");
        p.ask(Field::Principal, "> ", &PositiveInteger).unwrap();

        assert!(output(p).contains("Sorry, input is too small or too large.\n"));
    }

    #[test]
    fn test_last_line_without_terminator() {
        let mut p = prompter("0.05");
        let value = p.ask(Field::InterestRate, "> ", &PositiveDecimal).unwrap();
        assert_eq!(value, 0.05);
    }

    #[test]
    fn test_empty_input_is_exhausted() {
        let mut p = prompter("");
        let result = p.ask(Field::Principal, "> ", &PositiveInteger);

        assert!(matches!(
            result,
            Err(MortgageError::InputExhausted {
                field: Field::Principal
            })
        ));
    }

    #[test]
    fn test_exhausted_after_rejections() {
        let mut p = prompter("nope\n-1\n");
        let result = p.ask(Field::Years, "> ", &PositiveInteger);

        assert!(matches!(
            result,
            Err(MortgageError::InputExhausted { field: Field::Years })
        ));
    }

    #[test]
    fn test_period_prompt_reports_exhaustion() {
        // The period prompt signals end of input like the numeric prompts do,
        // rather than falling back to a monthly default.
        let mut p = prompter("7\n");
        let result = p.ask(Field::PaymentPeriod, "> ", &PeriodSelection);

        assert!(matches!(
            result,
            Err(MortgageError::InputExhausted {
                field: Field::PaymentPeriod
            })
        ));
    }

    #[test]
    fn test_period_prompt_loops_on_unknown_option() {
        let mut p = prompter("4\nweekly\n2\n");
        let value = p.ask(Field::PaymentPeriod, "> ", &PeriodSelection).unwrap();

        assert_eq!(value, PaymentPeriod::Weekly);
        assert!(output(p).contains("Sorry, input is not one of the listed options."));
    }

    #[test]
    fn test_invalid_utf8_is_rejected_not_fatal() {
        let input: &[u8] = b"\xff\xfe\n42\n";
        let mut p = Prompter::new(input, Vec::new());
        let value = p.ask(Field::Principal, "> ", &PositiveInteger).unwrap();

        assert_eq!(value, 42);
    }

    #[test]
    fn test_say_writes_a_full_line() {
        let mut p = prompter("");
        p.say("Please enter the interest as a decimal").unwrap();
        assert_eq!(output(p), "Please enter the interest as a decimal\n");
    }
}
