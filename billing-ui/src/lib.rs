pub mod components;
pub mod config;
pub mod gui;
pub mod logging;

use std::sync::atomic::{AtomicBool, Ordering};

use gpui::{App, actions};
pub use gui::{open_main_window, setup_app};
use tracing::{info, warn};

actions!(billing_ui, [Quit, ToggleVerboseLogging]);

static VERBOSE: AtomicBool = AtomicBool::new(false);

// Takes a reference to the action (often unused) and mutable app context
pub fn quit(
    _: &Quit,
    cx: &mut App,
) {
    info!("Executing quit handler");
    cx.quit();
}

/// Flips between trace output and the level the app started with.
pub fn toggle_verbose_logging(
    _: &ToggleVerboseLogging,
    _cx: &mut App,
) {
    let verbose = !VERBOSE.fetch_xor(true, Ordering::Relaxed);
    let result = if verbose {
        logging::set_log_level("trace")
    } else {
        logging::reset_log_level()
    };
    match result {
        Ok(()) => info!(verbose, "log level changed"),
        Err(error) => warn!(%error, "cannot change log level"),
    }
}
