//! Monetary display formatting.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Default currency glyph for displayed amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use billing_core::money::round_half_up;
///
/// assert_eq!(round_half_up(dec!(5.004)), dec!(5.00));
/// assert_eq!(round_half_up(dec!(5.005)), dec!(5.01));
/// assert_eq!(round_half_up(dec!(-5.005)), dec!(-5.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Currency glyph used to prefix displayed amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub symbol: String,
}

impl Default for Currency {
    fn default() -> Self {
        Self::new(DEFAULT_CURRENCY_SYMBOL)
    }
}

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    /// Formats `value` as the currency glyph followed by exactly two
    /// decimal places.
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use billing_core::money::Currency;
    ///
    /// let inr = Currency::default();
    /// assert_eq!(inr.format(dec!(5)), "₹5.00");
    /// assert_eq!(inr.format(dec!(5.005)), "₹5.01");
    /// ```
    pub fn format(
        &self,
        value: Decimal,
    ) -> String {
        format!("{}{:.2}", self.symbol, round_half_up(value))
    }
}

impl fmt::Display for Currency {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn format_pads_whole_numbers_to_two_places() {
        assert_eq!(Currency::default().format(dec!(5)), "₹5.00");
        assert_eq!(Currency::default().format(dec!(100)), "₹100.00");
    }

    #[test]
    fn format_rounds_midpoint_up() {
        assert_eq!(Currency::default().format(dec!(5.005)), "₹5.01");
    }

    #[test]
    fn format_rounds_below_midpoint_down() {
        assert_eq!(Currency::default().format(dec!(5.004)), "₹5.00");
    }

    #[test]
    fn format_pads_single_decimal() {
        assert_eq!(Currency::default().format(dec!(0.5)), "₹0.50");
    }

    #[test]
    fn format_uses_configured_symbol() {
        let usd = Currency::new("$");

        assert_eq!(usd.format(dec!(1234.567)), "$1234.57");
    }

    #[test]
    fn round_half_up_keeps_high_precision_inputs_to_two_places() {
        assert_eq!(round_half_up(dec!(18.0000001)), dec!(18.00));
        assert_eq!(round_half_up(dec!(0.125)), dec!(0.13));
    }
}
