use crate::domain::loan::MortgageQuote;
use crate::error::Result;
use clap::ValueEnum;
use std::io::Write;

/// How the final quote is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// The human-readable summary.
    #[default]
    Text,
    /// A single pretty-printed JSON object.
    Json,
}

/// Writes a computed quote to any `Write` sink.
pub struct QuoteWriter<W: Write> {
    writer: W,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_quote(&mut self, quote: &MortgageQuote, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Text => self.write_text(quote)?,
            OutputFormat::Json => self.write_json(quote)?,
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Echoes the inputs, then the two results rounded to cents.
    fn write_text(&mut self, quote: &MortgageQuote) -> Result<()> {
        let terms = &quote.terms;
        writeln!(self.writer, "principal: {}", terms.principal)?;
        writeln!(self.writer, "years: {}", terms.years)?;
        writeln!(self.writer, "interest: {:.6}", terms.interest_rate)?;
        writeln!(
            self.writer,
            "period of payments (per annum): {}",
            quote.payments_per_year
        )?;
        writeln!(self.writer, "Final Loan Worth: {:.2}", quote.total_repayment)?;
        writeln!(self.writer, "Periodic Payment: {:.2}", quote.periodic_payment)?;
        Ok(())
    }

    fn write_json(&mut self, quote: &MortgageQuote) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, quote)?;
        writeln!(self.writer)?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::loan::{LoanTerms, PaymentPeriod};
    use approx::assert_relative_eq;

    fn sample_quote() -> MortgageQuote {
        MortgageQuote {
            terms: LoanTerms {
                principal: 100000,
                years: 30,
                interest_rate: 0.05,
                period: PaymentPeriod::Monthly,
            },
            payments_per_year: 12,
            total_repayment: 446774.4314006109,
            periodic_payment: 37231.20261671757,
        }
    }

    #[test]
    fn test_text_report() {
        let mut writer = QuoteWriter::new(Vec::new());
        writer
            .write_quote(&sample_quote(), OutputFormat::Text)
            .unwrap();
        let text = String::from_utf8(writer.into_inner()).unwrap();

        assert_eq!(
            text,
            "principal: 100000\n\
             years: 30\n\
             interest: 0.050000\n\
             period of payments (per annum): 12\n\
             Final Loan Worth: 446774.43\n\
             Periodic Payment: 37231.20\n"
        );
    }

    #[test]
    fn test_json_report() {
        let mut writer = QuoteWriter::new(Vec::new());
        writer
            .write_quote(&sample_quote(), OutputFormat::Json)
            .unwrap();
        let bytes = writer.into_inner();

        assert_eq!(bytes.last(), Some(&b'\n'));
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value["principal"], 100000);
        assert_eq!(value["years"], 30);
        assert_relative_eq!(value["interest_rate"].as_f64().unwrap(), 0.05);
        assert_eq!(value["period"], "monthly");
        assert_eq!(value["payments_per_year"], 12);
        assert_relative_eq!(
            value["total_repayment"].as_f64().unwrap(),
            446774.4314006109,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            value["periodic_payment"].as_f64().unwrap(),
            37231.20261671757,
            max_relative = 1e-12
        );
    }
}
