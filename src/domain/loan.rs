use serde::Serialize;

/// How often a payment falls due.
///
/// Each period maps to a fixed number of payments per year. Weekly is
/// counted as 48 payments (four per month), not 52.
#[derive(Debug, Serialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PaymentPeriod {
    Monthly,
    Weekly,
    Daily,
}

impl PaymentPeriod {
    /// All periods in menu order.
    pub const ALL: [PaymentPeriod; 3] = [
        PaymentPeriod::Monthly,
        PaymentPeriod::Weekly,
        PaymentPeriod::Daily,
    ];

    /// Maps a 1-based menu selection to its period.
    pub fn from_selection(selection: i64) -> Option<Self> {
        match selection {
            1 => Some(PaymentPeriod::Monthly),
            2 => Some(PaymentPeriod::Weekly),
            3 => Some(PaymentPeriod::Daily),
            _ => None,
        }
    }

    pub fn payments_per_year(&self) -> u32 {
        match self {
            PaymentPeriod::Monthly => 12,
            PaymentPeriod::Weekly => 48,
            PaymentPeriod::Daily => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentPeriod::Monthly => "monthly",
            PaymentPeriod::Weekly => "weekly",
            PaymentPeriod::Daily => "daily",
        }
    }
}

/// The validated inputs of a single calculation.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct LoanTerms {
    /// Loan amount in whole currency units.
    pub principal: u64,
    /// Loan term in years.
    pub years: u64,
    /// Annual rate as a decimal fraction (0.05 for 5%).
    pub interest_rate: f64,
    pub period: PaymentPeriod,
}

/// The result of a calculation, together with the terms it was computed from.
#[derive(Debug, Serialize, PartialEq, Clone, Copy)]
pub struct MortgageQuote {
    #[serde(flatten)]
    pub terms: LoanTerms,
    pub payments_per_year: u32,
    /// Principal grown by compound interest over the full term.
    pub total_repayment: f64,
    /// `total_repayment` divided by the number of payments per year.
    pub periodic_payment: f64,
}
