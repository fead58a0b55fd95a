//! `check-entropy` plugin.
//!
//! Classifies available entropy as OK, WARNING or CRITICAL, or with
//! `--metrics` prints it as a Graphite line instead.

use chrono::Utc;
use entropy_check::{analysis::CHECK_LABEL, logging, plugin, CheckArgs};

fn main() {
    logging::init();
    tracing::debug!("check-entropy v{}", entropy_check::VERSION);

    let outcome = match CheckArgs::try_parse_env(std::env::args_os()) {
        Ok(args) => plugin::check(args, Utc::now),
        Err(e) if plugin::is_informational(&e) => e.exit(),
        Err(e) => plugin::argument_error(CHECK_LABEL, e),
    };

    outcome.exit()
}
