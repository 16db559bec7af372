//! crates/logging/src/record.rs
//! Call-site locations and emitted records.

use std::fmt;
use std::panic::Location;

use super::severity::Severity;

/// Source location a log call originated from.
///
/// Macros fill in the enclosing function path; the plain [`log`](crate::log)
/// and [`logf`](crate::logf) functions only know the caller's file and line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CallSite {
    function: Option<&'static str>,
    file: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site with a known function path.
    #[must_use]
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self {
            function: Some(function),
            file,
            line,
        }
    }

    /// Creates a call site from a [`Location`], typically `Location::caller()`.
    #[must_use]
    pub fn from_location(location: &'static Location<'static>) -> Self {
        Self {
            function: None,
            file: location.file(),
            line: location.line(),
        }
    }

    /// Returns the enclosing function path, when known.
    #[must_use]
    pub const fn function(&self) -> Option<&'static str> {
        self.function
    }

    /// Returns the source file.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Returns the source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    /// Renders `function:line`, or `file:line` when the function is unknown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function.unwrap_or(self.file), self.line)
    }
}

/// One emitted diagnostic.
///
/// Records are what the dispatcher hands to a destination. The capture
/// destination stores them as-is; the stream destinations write
/// [`render`](Self::render)ed lines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    severity: Severity,
    call_site: String,
    message: String,
}

impl Record {
    /// Creates a record from an already rendered call site and message.
    #[must_use]
    pub fn new(
        severity: Severity,
        call_site: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            call_site: call_site.into(),
            message: message.into(),
        }
    }

    /// Returns the record's severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the rendered call site.
    #[must_use]
    pub fn call_site(&self) -> &str {
        &self.call_site
    }

    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Renders the output line: `<call-site> <tag> <message>`.
    ///
    /// ```
    /// use logging::{Record, Severity};
    ///
    /// let record = Record::new(Severity::Error, "app::db::open:42", "cannot open database");
    /// assert_eq!(record.render(), "app::db::open:42 E cannot open database");
    /// ```
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.call_site, self.severity.tag(), self.message)
    }
}
