//! Kernel entropy input.
//!
//! This module reads the kernel's estimate of available entropy. The
//! value is read fresh on every invocation and never cached.

mod reader;

pub use reader::{EntropyReading, EntropySource, ProcEntropy, ReadError, ENTROPY_AVAIL_PATH};
