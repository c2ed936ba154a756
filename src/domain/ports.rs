use super::input::Rejection;

/// A validation rule applied to one line of user input.
///
/// The prompt loop owns the retrying; a rule only decides whether a single
/// line is acceptable and what value it carries.
pub trait InputRule {
    type Value;

    fn parse(&self, line: &str) -> Result<Self::Value, Rejection>;
}
