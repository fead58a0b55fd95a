//! Entropy Check Library
//!
//! Monitoring plugins for the kernel's available entropy. A scheduler
//! runs one of the two binaries periodically and reads back an exit code
//! plus exactly one line on stdout.
//!
//! # Architecture
//!
//! ```text
//! config → source → analysis (check-entropy)
//!                 → metrics  (check-entropy --metrics, metrics-entropy)
//! ```
//!
//! Every run is stateless: configuration is resolved, the entropy value
//! is read once, and the result is reported. Any failure becomes an
//! UNKNOWN result rather than a crash.
//!
//! # Example
//!
//! ```no_run
//! use entropy_check::{
//!     analysis::{evaluate, ThresholdConfig},
//!     source::{EntropySource, ProcEntropy},
//! };
//!
//! let thresholds = ThresholdConfig::new(60, 30).unwrap();
//! let reading = ProcEntropy::new().read().unwrap();
//!
//! let result = evaluate(reading, &thresholds);
//! println!("{}", result.message);
//! std::process::exit(result.status.exit_code());
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod plugin;
pub mod source;

// Re-export commonly used types at crate root
pub use analysis::{evaluate, CheckResult, CheckStatus, ThresholdConfig};
pub use config::{CheckArgs, CheckConfig, ConfigError, MetricsArgs, MetricsConfig};
pub use metrics::{default_scheme, MetricRecord};
pub use plugin::Outcome;
pub use source::{EntropyReading, EntropySource, ProcEntropy, ReadError};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
