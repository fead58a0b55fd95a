//! Entropy source abstraction.
//!
//! Provides a trait over the place the entropy value comes from, so the
//! kernel pseudo-file can be swapped for a fixture in tests.

use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Kernel pseudo-file exposing the available entropy in bits.
pub const ENTROPY_AVAIL_PATH: &str = "/proc/sys/kernel/random/entropy_avail";

/// Errors that can occur while reading the entropy value.
#[derive(Debug, Error)]
pub enum ReadError {
    /// The source could not be read.
    #[error("{}: {source}", path.display())]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The source content is not a non-negative integer.
    #[error("failed to parse entropy value: {0}")]
    Parse(#[from] ParseIntError),
}

impl ReadError {
    /// Returns true if the source content was malformed rather than unreadable.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse(_))
    }
}

/// Available entropy at the moment it was read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct EntropyReading(u32);

impl EntropyReading {
    /// Wraps an already-known value.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    /// Parses the raw text of the entropy source.
    ///
    /// Surrounding whitespace (including the trailing newline the kernel
    /// emits) is ignored. Anything other than a base-10 non-negative
    /// integer is a [`ReadError::Parse`].
    pub fn parse(raw: &str) -> Result<Self, ReadError> {
        Ok(Self(raw.trim().parse()?))
    }

    /// Returns the entropy in bits.
    #[inline]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<EntropyReading> for i64 {
    fn from(reading: EntropyReading) -> Self {
        i64::from(reading.0)
    }
}

impl fmt::Display for EntropyReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Trait for entropy sources.
pub trait EntropySource {
    /// Reads the current entropy value. A single attempt, no retries.
    fn read(&self) -> Result<EntropyReading, ReadError>;
}

/// Entropy source backed by a file, normally the kernel pseudo-file.
#[derive(Debug, Clone)]
pub struct ProcEntropy {
    path: PathBuf,
}

impl ProcEntropy {
    /// Creates a source reading the kernel's `entropy_avail`.
    pub fn new() -> Self {
        Self::with_path(ENTROPY_AVAIL_PATH)
    }

    /// Creates a source reading from an arbitrary path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ProcEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for ProcEntropy {
    fn read(&self) -> Result<EntropyReading, ReadError> {
        let content = std::fs::read(&self.path).map_err(|source| ReadError::Io {
            path: self.path.clone(),
            source,
        })?;

        // Non-UTF-8 content is malformed, not unreadable.
        let reading = EntropyReading::parse(&String::from_utf8_lossy(&content))?;
        tracing::debug!(path = %self.path.display(), entropy = reading.value(), "Read entropy");
        Ok(reading)
    }
}
