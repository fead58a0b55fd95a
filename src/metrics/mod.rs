//! Plaintext metric output for entropy readings.
//!
//! Metrics are emitted in the Graphite plaintext line protocol:
//!
//! ```text
//! <scheme> <value> <unix_timestamp>\n
//! ```
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use entropy_check::metrics::format;
//!
//! let now = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
//! assert_eq!(format("host1.entropy", 88, now), "host1.entropy 88 1700000000\n");
//! ```

mod graphite;
mod scheme;

pub use graphite::{format, MetricRecord};
pub use scheme::{default_scheme, scheme_for_host, SCHEME_SUFFIX, UNKNOWN_HOST};
