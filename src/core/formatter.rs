use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Upper bound on configurable fraction digits.
pub const MAX_DECIMAL_DIGITS: u32 = 16;

/// Converts raw numeric values into display labels.
///
/// Every series owns its formatter by value, so formatting defaults need no
/// shared global state. Rounding is half-away-from-zero over a decimal
/// representation, keeping labels stable across platforms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormatter {
    decimal_digits: u32,
    prefix: String,
    suffix: String,
}

impl ValueFormatter {
    #[must_use]
    pub fn new(decimal_digits: u32) -> Self {
        Self {
            decimal_digits: decimal_digits.min(MAX_DECIMAL_DIGITS),
            prefix: String::new(),
            suffix: String::new(),
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    #[must_use]
    pub fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    pub fn set_decimal_digits(&mut self, decimal_digits: u32) {
        self.decimal_digits = decimal_digits.min(MAX_DECIMAL_DIGITS);
    }

    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Formats `value` with the configured fraction digits and decorations.
    ///
    /// Total over all inputs: non-finite values fall back to their plain
    /// float rendering instead of erroring.
    #[must_use]
    pub fn format(&self, value: f64) -> String {
        let digits = self.decimal_digits;
        let body = match Decimal::from_f64(value) {
            Some(decimal) => {
                let rounded =
                    decimal.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
                format!("{rounded:.prec$}", prec = digits as usize)
            }
            None => value.to_string(),
        };
        format!("{}{}{}", self.prefix, body, self.suffix)
    }
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_half_away_from_zero() {
        let formatter = ValueFormatter::new(0);
        assert_eq!(formatter.format(2.5), "3");
        assert_eq!(formatter.format(-2.5), "-3");
    }

    #[test]
    fn pads_to_fixed_fraction_digits() {
        let formatter = ValueFormatter::new(2);
        assert_eq!(formatter.format(4.0), "4.00");
        assert_eq!(formatter.format(1.125), "1.13");
    }

    #[test]
    fn decorations_wrap_the_number() {
        let formatter = ValueFormatter::new(1).with_prefix("~").with_suffix(" m/s");
        assert_eq!(formatter.format(12.34), "~12.3 m/s");
    }

    #[test]
    fn non_finite_values_do_not_panic() {
        let formatter = ValueFormatter::new(2);
        assert_eq!(formatter.format(f64::NAN), "NaN");
        assert_eq!(formatter.format(f64::INFINITY), "inf");
    }

    #[test]
    fn digits_are_clamped() {
        let formatter = ValueFormatter::new(99);
        assert_eq!(formatter.decimal_digits(), MAX_DECIMAL_DIGITS);
    }
}
