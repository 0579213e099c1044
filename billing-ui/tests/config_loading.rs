//! Integration tests that load the on-disk sample config and drive a bill
//! built from it through the price summary.

use std::{cell::RefCell, path::Path, rc::Rc};

use billing_core::{BillDraft, PriceSummary, summary_props};
use billing_ui::config::{AppConfig, AppConfigError};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

/// Path to the sample config shipped with the test fixtures.
fn fixture_path() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("billing.toml")
        .leak() // test-only, runs once
}

#[test]
fn test_load_fixture_file_succeeds() {
    let config = AppConfig::load(fixture_path()).expect("fixture config should load");

    assert_eq!(config.line_items.len(), 2);
    assert_eq!(config.window.title, "Kirana counter");
    assert_eq!(config.window.width, 520.0);
    assert_eq!(config.summary.gst_rate, dec!(0.18));
    assert!(!config.logging.stdout);
    assert_eq!(config.logging.file, None);
}

#[test]
fn test_missing_file_reports_path() {
    let missing = Path::new("does/not/exist.toml");

    let error = AppConfig::load(missing).unwrap_err();

    assert!(matches!(error, AppConfigError::Read { .. }));
    assert!(error.to_string().contains("does/not/exist.toml"));
}

#[test]
fn test_fixture_bill_renders_summary() {
    let config = AppConfig::load(fixture_path()).unwrap();
    let draft = Rc::new(RefCell::new(BillDraft::new(
        config.line_items.clone(),
        &config.summary,
    )));

    let view = PriceSummary::new(summary_props(&draft), config.summary.currency()).render();

    // 2 × 425 + 3 × 150 = 1300; GST 18% = 234
    assert_eq!(view.subtotal.to_string(), "Subtotal (excl. GST): ₹1300.00");
    assert_eq!(view.gst.to_string(), "GST: ₹234.00");
    assert_eq!(view.total.to_string(), "Total: ₹1534.00");
    assert!(view.extra_charge.description.is_none());
}
