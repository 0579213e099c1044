//! Host-side bill controller.
//!
//! [`BillDraft`] is the parent that owns the editable extra-charge state and
//! supplies the three calculations the price summary displays. The
//! arithmetic is a flat GST rate over the line items plus the extra charge.

use std::cell::RefCell;
use std::rc::Rc;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::SummaryConfig;
use crate::extra_charge::ExtraCharge;
use crate::money::round_half_up;
use crate::summary::PriceSummaryProps;

/// One billed product line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl LineItem {
    pub fn new(
        name: impl Into<String>,
        quantity: u32,
        unit_price: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price,
        }
    }

    /// Unit price times quantity, saturating at [`Decimal::MAX`].
    pub fn line_total(&self) -> Decimal {
        saturate(
            self.unit_price.checked_mul(Decimal::from(self.quantity)),
            "line total",
        )
    }
}

/// An in-progress bill.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillDraft {
    pub line_items: Vec<LineItem>,
    pub include_gst: bool,
    pub gst_rate: Decimal,
    pub extra_charge: ExtraCharge,
}

impl BillDraft {
    pub fn new(
        line_items: Vec<LineItem>,
        config: &SummaryConfig,
    ) -> Self {
        Self {
            line_items,
            include_gst: config.include_gst,
            gst_rate: config.gst_rate,
            extra_charge: ExtraCharge::default(),
        }
    }

    /// Sum of the line totals, saturating at [`Decimal::MAX`].
    pub fn subtotal(&self) -> Decimal {
        let sum = self
            .line_items
            .iter()
            .try_fold(Decimal::ZERO, |acc, item| acc.checked_add(item.line_total()));
        saturate(sum, "subtotal")
    }

    /// GST on the subtotal, or zero when GST is not applied.
    pub fn total_gst(&self) -> Decimal {
        if self.include_gst {
            round_half_up(saturate(
                self.subtotal().checked_mul(self.gst_rate),
                "GST",
            ))
        } else {
            Decimal::ZERO
        }
    }

    /// Subtotal plus GST plus the extra charge.
    ///
    /// An extra charge too large to add is left out, the same as any other
    /// unusable amount.
    pub fn total(&self) -> Decimal {
        let base = saturate(
            self.subtotal().checked_add(self.total_gst()),
            "total before extra charge",
        );
        let charge = self.extra_charge.charge();
        base.checked_add(charge).unwrap_or_else(|| {
            warn!(%charge, "extra charge overflows the total; not added");
            base
        })
    }

    pub fn set_include_gst(
        &mut self,
        include_gst: bool,
    ) {
        debug!(include_gst, "GST toggled");
        self.include_gst = include_gst;
    }
}

fn saturate(
    value: Option<Decimal>,
    what: &'static str,
) -> Decimal {
    value.unwrap_or_else(|| {
        warn!(what, "amount overflow; capped at the largest representable value");
        Decimal::MAX
    })
}

/// Wires a shared draft into the price summary's inputs.
///
/// The calculators read the draft when called; the setters write the
/// extra-charge state back into it. Neither holds a borrow between calls.
pub fn summary_props(draft: &Rc<RefCell<BillDraft>>) -> PriceSummaryProps {
    let current = draft.borrow();
    let include_gst = current.include_gst;
    let extra_charge = current.extra_charge.amount.clone();
    let extra_charge_description = current.extra_charge.description.clone();
    drop(current);

    let subtotal = Rc::clone(draft);
    let gst = Rc::clone(draft);
    let total = Rc::clone(draft);
    let amount = Rc::clone(draft);
    let description = Rc::clone(draft);

    PriceSummaryProps {
        calculate_subtotal: Rc::new(move || subtotal.borrow().subtotal()),
        calculate_total_gst: Rc::new(move || gst.borrow().total_gst()),
        calculate_total: Rc::new(move || total.borrow().total()),
        include_gst,
        extra_charge,
        set_extra_charge: Rc::new(move |value: String| {
            amount.borrow_mut().extra_charge.set_amount(value)
        }),
        extra_charge_description,
        set_extra_charge_description: Rc::new(move |value: String| {
            description.borrow_mut().extra_charge.set_description(value)
        }),
    }
}
