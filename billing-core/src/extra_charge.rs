//! Caller-owned state for the editable extra-charge line.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::parse::{parse_decimal_prefix, parse_float};

/// Returns `true` when raw amount text parses to a value strictly greater
/// than zero.
///
/// Parse failures compare as "not greater than zero", so non-numeric text
/// hides whatever depends on this.
pub fn is_positive_amount(raw: &str) -> bool {
    parse_float(raw).is_some_and(|v| v > 0.0)
}

/// An optional additional line item (e.g. a delivery fee).
///
/// `amount` is the raw text of the amount field and may be empty or only
/// partially typed. The description is kept even while hidden.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraCharge {
    pub amount: String,
    pub description: String,
}

impl ExtraCharge {
    pub fn new(
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            amount: amount.into(),
            description: description.into(),
        }
    }

    pub fn set_amount(
        &mut self,
        amount: String,
    ) {
        self.amount = amount;
    }

    pub fn set_description(
        &mut self,
        description: String,
    ) {
        self.description = description;
    }

    /// Whether a description field accompanies the current amount.
    pub fn shows_description(&self) -> bool {
        is_positive_amount(&self.amount)
    }

    /// The amount to add to a bill total.
    ///
    /// Empty, non-numeric, unrepresentable, and negative text all count as
    /// zero. Scientific values beyond `Decimal`'s range or precision (such
    /// as `1e400` or `1e-40`) still show the description field but also
    /// count as zero.
    pub fn charge(&self) -> Decimal {
        parse_decimal_prefix(&self.amount)
            .filter(|v| v.is_sign_positive())
            .unwrap_or(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn positive_amount_shows_description() {
        assert!(is_positive_amount("10"));
        assert!(is_positive_amount("0.01"));
        assert!(is_positive_amount("10abc"));
    }

    #[test]
    fn zero_empty_negative_and_text_hide_description() {
        assert!(!is_positive_amount("0"));
        assert!(!is_positive_amount(""));
        assert!(!is_positive_amount("-5"));
        assert!(!is_positive_amount("abc"));
        assert!(!is_positive_amount("0.00"));
    }

    #[test]
    fn hidden_description_is_preserved() {
        let mut extra = ExtraCharge::new("25", "Delivery");
        assert!(extra.shows_description());

        extra.set_amount(String::new());

        assert!(!extra.shows_description());
        assert_eq!(extra.description, "Delivery");
    }

    #[test]
    fn charge_parses_amount() {
        assert_eq!(ExtraCharge::new("25.50", "").charge(), dec!(25.50));
        assert_eq!(ExtraCharge::new("40 flat", "").charge(), dec!(40));
    }

    #[test]
    fn out_of_range_scientific_amounts_show_description_but_charge_nothing() {
        for amount in ["1e400", "1e-40", "1e-29"] {
            let extra = ExtraCharge::new(amount, "");

            assert!(extra.shows_description(), "amount {amount:?}");
            assert_eq!(extra.charge(), Decimal::ZERO, "amount {amount:?}");
        }
    }

    #[test]
    fn charge_treats_unusable_amounts_as_zero() {
        assert_eq!(ExtraCharge::new("", "").charge(), Decimal::ZERO);
        assert_eq!(ExtraCharge::new("abc", "").charge(), Decimal::ZERO);
        assert_eq!(ExtraCharge::new("-5", "").charge(), Decimal::ZERO);
        assert_eq!(ExtraCharge::new("Infinity", "").charge(), Decimal::ZERO);
    }
}
