//! `metrics-entropy` plugin.
//!
//! Prints available entropy as a single Graphite plaintext line.

use chrono::Utc;
use entropy_check::{logging, plugin, plugin::METRICS_LABEL, MetricsArgs};

fn main() {
    logging::init();
    tracing::debug!("metrics-entropy v{}", entropy_check::VERSION);

    let outcome = match MetricsArgs::try_parse_env(std::env::args_os()) {
        Ok(args) => plugin::metrics(args, Utc::now),
        Err(e) if plugin::is_informational(&e) => e.exit(),
        Err(e) => plugin::argument_error(METRICS_LABEL, e),
    };

    outcome.exit()
}
