//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

/// Crates whose debug output is useful while working on the form.
const FILTER: &str = "error,ui=debug,machine_form=debug,payloads=info";

/// Initialize logging. Calling it again after a remount is a no-op.
pub fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time() // std::time is not available in browsers
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    let installed = tracing_subscriber::registry()
        .with(EnvFilter::new(FILTER))
        .with(fmt_layer)
        .try_init();

    if installed.is_ok() {
        tracing::info!(filter = FILTER, "Initialized logs");
    }
}
