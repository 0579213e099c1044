//! End-to-end scenarios: a parent bill owns the state, the price summary is
//! rebuilt on every "frame", and edits flow back through the setters.

use std::cell::RefCell;
use std::rc::Rc;

use billing_core::{
    BillDraft, Currency, LineItem, PriceSummary, PriceSummaryProps, StepDirection, SummaryConfig,
    summary_props,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Rebuilds the component the way a host does on each re-render.
fn frame(draft: &Rc<RefCell<BillDraft>>) -> PriceSummary {
    PriceSummary::new(summary_props(draft), Currency::default())
}

fn shared_bill() -> Rc<RefCell<BillDraft>> {
    Rc::new(RefCell::new(BillDraft::new(
        vec![
            LineItem::new("Notebook", 4, dec!(20.00)),
            LineItem::new("Pen", 2, dec!(10.00)),
        ],
        &SummaryConfig::default(),
    )))
}

#[test]
fn test_fixed_calculators_render_expected_lines() {
    let props = PriceSummaryProps {
        calculate_subtotal: Rc::new(|| dec!(100)),
        calculate_total_gst: Rc::new(|| dec!(18)),
        calculate_total: Rc::new(|| dec!(118)),
        include_gst: true,
        extra_charge: "0".to_string(),
        set_extra_charge: Rc::new(|_: String| {}),
        extra_charge_description: String::new(),
        set_extra_charge_description: Rc::new(|_: String| {}),
    };

    let view = PriceSummary::new(props, Currency::default()).render();
    let text = view.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(
        lines,
        vec![
            "Subtotal (excl. GST): ₹100.00",
            "GST: ₹18.00",
            "Extra charge: 0",
            "Total: ₹118.00",
        ]
    );
    assert!(view.extra_charge.description.is_none());
}

#[test]
fn test_typing_an_extra_charge_reveals_description() {
    let _guard = init_test_tracing();
    let bill = shared_bill();

    assert!(frame(&bill).render().extra_charge.description.is_none());

    // Each keystroke sends the whole field text, then the parent re-renders.
    for text in ["2", "25", "25."] {
        frame(&bill).input_extra_charge(text);
    }

    let view = frame(&bill).render();
    assert_eq!(view.extra_charge.amount.value, "25.");
    assert!(view.extra_charge.description.is_some());
    assert_eq!(view.total.value, "₹143.00");

    for text in ["D", "De", "Del"] {
        assert!(frame(&bill).input_description(text));
    }
    assert_eq!(bill.borrow().extra_charge.description, "Del");
}

#[test]
fn test_clearing_amount_hides_but_keeps_description() {
    let bill = shared_bill();
    frame(&bill).input_extra_charge("15");
    frame(&bill).input_description("Packing");

    frame(&bill).input_extra_charge("");
    let view = frame(&bill).render();

    assert!(view.extra_charge.description.is_none());
    assert_eq!(bill.borrow().extra_charge.description, "Packing");

    frame(&bill).input_extra_charge("5");
    let view = frame(&bill).render();
    assert_eq!(
        view.extra_charge.description.map(|d| d.value),
        Some("Packing".to_string())
    );
}

#[test]
fn test_toggling_gst_changes_label_and_totals() {
    let bill = shared_bill();

    let with_gst = frame(&bill).render();
    bill.borrow_mut().set_include_gst(false);
    let without_gst = frame(&bill).render();

    assert_eq!(with_gst.subtotal.to_string(), "Subtotal (excl. GST): ₹100.00");
    assert_eq!(with_gst.gst.value, "₹18.00");
    assert_eq!(without_gst.subtotal.to_string(), "Subtotal: ₹100.00");
    assert_eq!(without_gst.gst.value, "₹0.00");
    assert_eq!(without_gst.total.value, "₹100.00");
}

#[test]
fn test_spinner_steps_go_through_setter() {
    let bill = shared_bill();

    let summary = frame(&bill);
    let next = summary.render().extra_charge.amount.stepped(StepDirection::Up);
    summary.input_extra_charge(next);

    assert_eq!(bill.borrow().extra_charge.amount, "0.01");
    assert!(frame(&bill).render().extra_charge.description.is_some());
}

#[test]
fn test_oversized_extra_charge_renders_without_adding_it() {
    let bill = shared_bill();

    frame(&bill).input_extra_charge("79228162514264337593543950335");
    let view = frame(&bill).render();

    assert!(view.extra_charge.description.is_some());
    assert_eq!(view.total.value, "₹118.00");
}
