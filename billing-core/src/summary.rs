//! Price summary component.
//!
//! A stateless view over a bill: subtotal, GST, an editable extra-charge
//! line, and the total. Every figure comes from a caller-supplied
//! calculator and every edit goes back out through a caller-supplied
//! setter, so the parent stays the single owner of the state.
//!
//! Rendering produces a [`SummaryView`], a plain description of what to
//! draw. UI hosts lay that out with their own widgets and route field
//! edits back through [`PriceSummary::input_extra_charge`] and
//! [`PriceSummary::input_description`].
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//!
//! use rust_decimal_macros::dec;
//! use billing_core::money::Currency;
//! use billing_core::summary::{PriceSummary, PriceSummaryProps};
//!
//! let props = PriceSummaryProps {
//!     calculate_subtotal: Rc::new(|| dec!(100)),
//!     calculate_total_gst: Rc::new(|| dec!(18)),
//!     calculate_total: Rc::new(|| dec!(118)),
//!     include_gst: true,
//!     extra_charge: "0".to_string(),
//!     set_extra_charge: Rc::new(|_: String| {}),
//!     extra_charge_description: String::new(),
//!     set_extra_charge_description: Rc::new(|_: String| {}),
//! };
//!
//! let view = PriceSummary::new(props, Currency::default()).render();
//!
//! assert_eq!(view.subtotal.to_string(), "Subtotal (excl. GST): ₹100.00");
//! assert_eq!(view.gst.to_string(), "GST: ₹18.00");
//! assert!(view.extra_charge.description.is_none());
//! assert_eq!(view.total.to_string(), "Total: ₹118.00");
//! ```

use std::fmt;
use std::rc::Rc;

use rust_decimal::Decimal;
use tracing::debug;

use crate::extra_charge::is_positive_amount;
use crate::money::{Currency, round_half_up};
use crate::parse::parse_decimal_prefix;

pub const SUBTOTAL_LABEL: &str = "Subtotal";
pub const GST_EXCLUSIVE_SUFFIX: &str = " (excl. GST)";
pub const GST_LABEL: &str = "GST";
pub const EXTRA_CHARGE_LABEL: &str = "Extra charge";
pub const DESCRIPTION_LABEL: &str = "Description";
pub const DESCRIPTION_PLACEHOLDER: &str = "What is this charge for?";
pub const TOTAL_LABEL: &str = "Total";

/// Zero-argument function producing one of the displayed figures.
pub type Calculator = Rc<dyn Fn() -> Decimal>;

/// Receives the full current text of an edited field.
pub type Setter = Rc<dyn Fn(String)>;

/// Inputs to [`PriceSummary`].
///
/// The calculators are invoked once per render. The setters are invoked
/// once per edit with the field's complete text.
#[derive(Clone)]
pub struct PriceSummaryProps {
    pub calculate_subtotal: Calculator,
    pub calculate_total_gst: Calculator,
    pub calculate_total: Calculator,
    /// Appends " (excl. GST)" to the subtotal label when set.
    pub include_gst: bool,
    /// Raw amount text; may be empty or partially typed.
    pub extra_charge: String,
    pub set_extra_charge: Setter,
    pub extra_charge_description: String,
    pub set_extra_charge_description: Setter,
}

impl fmt::Debug for PriceSummaryProps {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.debug_struct("PriceSummaryProps")
            .field("include_gst", &self.include_gst)
            .field("extra_charge", &self.extra_charge)
            .field("extra_charge_description", &self.extra_charge_description)
            .finish_non_exhaustive()
    }
}

/// A labelled figure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub label: String,
    pub value: String,
    pub emphasized: bool,
}

impl fmt::Display for SummaryRow {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Direction of a spinner step on the amount field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Up,
    Down,
}

/// The editable numeric amount field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountField {
    pub label: &'static str,
    /// Raw text, shown exactly as the caller supplied it.
    pub value: String,
    pub min: Decimal,
    pub step: Decimal,
}

impl AmountField {
    /// Text the field holds after one spinner step.
    ///
    /// Unparseable text steps from zero. The result never goes below `min`,
    /// and a step past the representable range leaves the value as is.
    pub fn stepped(
        &self,
        direction: StepDirection,
    ) -> String {
        let current = parse_decimal_prefix(&self.value).unwrap_or(Decimal::ZERO);
        let next = match direction {
            StepDirection::Up => current.checked_add(self.step),
            StepDirection::Down => current.checked_sub(self.step),
        }
        .unwrap_or(current);
        format!("{:.2}", round_half_up(next.max(self.min)))
    }
}

/// The free-text description field shown beside a positive extra charge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionField {
    pub label: &'static str,
    pub value: String,
    pub placeholder: &'static str,
}

/// The editable sub-section of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtraChargeSection {
    pub amount: AmountField,
    /// `None` while the amount is not strictly positive.
    pub description: Option<DescriptionField>,
}

/// Everything a host needs to draw one frame of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryView {
    pub subtotal: SummaryRow,
    pub gst: SummaryRow,
    pub extra_charge: ExtraChargeSection,
    pub total: SummaryRow,
}

impl fmt::Display for SummaryView {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{}", self.subtotal)?;
        writeln!(f, "{}", self.gst)?;
        writeln!(
            f,
            "{}: {}",
            self.extra_charge.amount.label, self.extra_charge.amount.value
        )?;
        if let Some(description) = &self.extra_charge.description {
            writeln!(f, "{}: {}", description.label, description.value)?;
        }
        write!(f, "{}", self.total)
    }
}

/// The price summary component for a single render pass.
#[derive(Debug, Clone)]
pub struct PriceSummary {
    props: PriceSummaryProps,
    currency: Currency,
}

impl PriceSummary {
    pub fn new(
        props: PriceSummaryProps,
        currency: Currency,
    ) -> Self {
        Self { props, currency }
    }

    pub fn props(&self) -> &PriceSummaryProps {
        &self.props
    }

    /// Whether the description field is part of the current render.
    ///
    /// Derived from the amount text every time it is asked.
    pub fn shows_description(&self) -> bool {
        is_positive_amount(&self.props.extra_charge)
    }

    /// Renders the summary. Each calculator is called exactly once.
    pub fn render(&self) -> SummaryView {
        let props = &self.props;

        let subtotal_label = if props.include_gst {
            format!("{SUBTOTAL_LABEL}{GST_EXCLUSIVE_SUFFIX}")
        } else {
            SUBTOTAL_LABEL.to_string()
        };

        let subtotal = self.row(subtotal_label, (props.calculate_subtotal)(), false);
        let gst = self.row(GST_LABEL, (props.calculate_total_gst)(), false);

        let description = self.shows_description().then(|| DescriptionField {
            label: DESCRIPTION_LABEL,
            value: props.extra_charge_description.clone(),
            placeholder: DESCRIPTION_PLACEHOLDER,
        });

        let extra_charge = ExtraChargeSection {
            amount: AmountField {
                label: EXTRA_CHARGE_LABEL,
                value: props.extra_charge.clone(),
                min: Decimal::ZERO,
                step: Decimal::new(1, 2),
            },
            description,
        };

        let total = self.row(TOTAL_LABEL, (props.calculate_total)(), true);

        SummaryView {
            subtotal,
            gst,
            extra_charge,
            total,
        }
    }

    /// Forwards the amount field's full current text, unmodified.
    pub fn input_extra_charge(
        &self,
        text: impl Into<String>,
    ) {
        let text = text.into();
        debug!(amount = %text, "extra charge edited");
        (self.props.set_extra_charge)(text);
    }

    /// Forwards the description field's full current text.
    ///
    /// Returns `false` without forwarding when the field is hidden.
    pub fn input_description(
        &self,
        text: impl Into<String>,
    ) -> bool {
        if !self.shows_description() {
            debug!("description edit ignored while field is hidden");
            return false;
        }
        let text = text.into();
        debug!(description = %text, "extra charge description edited");
        (self.props.set_extra_charge_description)(text);
        true
    }

    /// Forwards the amount text only when it differs from the current
    /// `extra_charge`. Returns whether anything was forwarded.
    ///
    /// Hosts whose input widgets echo a programmatic value change back as an
    /// edit use this so each edit reaches the setter once.
    pub fn sync_extra_charge(
        &self,
        text: impl Into<String>,
    ) -> bool {
        let text = text.into();
        if text == self.props.extra_charge {
            return false;
        }
        self.input_extra_charge(text);
        true
    }

    /// Like [`PriceSummary::input_description`], but skips text equal to the
    /// current description.
    pub fn sync_description(
        &self,
        text: impl Into<String>,
    ) -> bool {
        let text = text.into();
        if text == self.props.extra_charge_description {
            return false;
        }
        self.input_description(text)
    }

    fn row(
        &self,
        label: impl Into<String>,
        value: Decimal,
        emphasized: bool,
    ) -> SummaryRow {
        SummaryRow {
            label: label.into(),
            value: self.currency.format(value),
            emphasized,
        }
    }
}
