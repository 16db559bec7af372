//! crates/logging/src/severity.rs
//! Ordered severity levels.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Diagnostic importance tier, ordered from least to most severe.
///
/// Comparison follows the declaration order, so `Severity::Verbose` is the
/// smallest value and `Severity::Error` the largest. A record is emitted when
/// its severity compares greater than or equal to the current threshold.
///
/// # Examples
///
/// ```
/// use logging::Severity;
///
/// assert!(Severity::Verbose < Severity::Debug);
/// assert!(Severity::Performance < Severity::Warning);
/// assert_eq!(Severity::ALL.iter().max(), Some(&Severity::Error));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Severity {
    /// Chatty tracing output.
    Verbose = 0,
    /// Developer diagnostics.
    Debug = 1,
    /// Normal operational messages.
    Info = 2,
    /// Performance observations.
    Performance = 3,
    /// Suspicious but recoverable conditions.
    Warning = 4,
    /// Failures.
    Error = 5,
}

impl Severity {
    /// Every severity in ascending order.
    pub const ALL: [Self; 6] = [
        Self::Verbose,
        Self::Debug,
        Self::Info,
        Self::Performance,
        Self::Warning,
        Self::Error,
    ];

    /// Threshold in effect before anything calls [`set_level`](crate::set_level).
    pub const DEFAULT_THRESHOLD: Self = Self::Debug;

    /// Returns the lowercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Verbose => "verbose",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Performance => "performance",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// Returns the one-letter tag written into emitted lines.
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// let tags: String = Severity::ALL.iter().map(|s| s.tag()).collect();
    /// assert_eq!(tags, "VDIPWE");
    /// ```
    #[must_use]
    pub const fn tag(self) -> char {
        match self {
            Self::Verbose => 'V',
            Self::Debug => 'D',
            Self::Info => 'I',
            Self::Performance => 'P',
            Self::Warning => 'W',
            Self::Error => 'E',
        }
    }

    /// Returns the ordinal used for comparisons.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Converts an ordinal back into a severity.
    #[must_use]
    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Verbose),
            1 => Some(Self::Debug),
            2 => Some(Self::Info),
            3 => Some(Self::Performance),
            4 => Some(Self::Warning),
            5 => Some(Self::Error),
            _ => None,
        }
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::DEFAULT_THRESHOLD
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no [`Severity`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity: {input:?}")]
pub struct ParseSeverityError {
    input: String,
}

impl ParseSeverityError {
    /// Returns the rejected input.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Severity {
    type Err = ParseSeverityError;

    /// Accepts the lowercase name, `warn`, `perf`, or the one-letter tag, in
    /// any case.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().as_str() {
            "verbose" | "v" => Ok(Self::Verbose),
            "debug" | "d" => Ok(Self::Debug),
            "info" | "i" => Ok(Self::Info),
            "performance" | "perf" | "p" => Ok(Self::Performance),
            "warning" | "warn" | "w" => Ok(Self::Warning),
            "error" | "e" => Ok(Self::Error),
            _ => Err(ParseSeverityError {
                input: input.to_owned(),
            }),
        }
    }
}
