//! crates/logging/src/config.rs
//! Logger configuration and process-wide installation.

use std::env;

use thiserror::Error;

use super::dispatch::{Destination, set_destination};
use super::severity::Severity;
use super::threshold::{set_debug_break_enabled, set_level};

/// Environment variable read by [`LogConfig::from_env`].
pub const ENV_VAR: &str = "LEVELED_LOG";

/// Syslog facility used when a directive names none.
pub const DEFAULT_SYSLOG_FACILITY: &str = "user";

/// Errors produced while building a [`LogConfig`].
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ConfigError {
    /// A directive matched no known form.
    #[error("unknown logging directive: {0:?}")]
    UnknownDirective(String),
    /// `syslog=<facility>` named a facility syslog does not define.
    #[error("unknown syslog facility: {0:?}")]
    UnknownFacility(String),
    /// The environment variable was set but is not valid UTF-8.
    #[error("{ENV_VAR} is not valid UTF-8: {0:?}")]
    InvalidEnvironment(String),
}

/// Settings installed process-wide by [`init`].
///
/// # Examples
///
/// ```
/// use logging::{Destination, LogConfig, Severity};
///
/// let config = LogConfig::parse("warning, syslog=local3, break")?;
/// assert_eq!(config.level, Severity::Warning);
/// assert_eq!(config.destination, Destination::Syslog);
/// assert_eq!(config.syslog_facility, "local3");
/// assert!(config.debug_break);
/// # Ok::<(), logging::ConfigError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LogConfig {
    /// Minimum severity emitted.
    pub level: Severity,
    /// Debug-break request flag.
    pub debug_break: bool,
    /// Output destination.
    pub destination: Destination,
    /// Facility used when the destination is syslog.
    pub syslog_facility: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Severity::DEFAULT_THRESHOLD,
            debug_break: false,
            destination: Destination::Stderr,
            syslog_facility: DEFAULT_SYSLOG_FACILITY.to_owned(),
        }
    }
}

impl LogConfig {
    /// Default settings routed to the thread-local capture buffer.
    #[must_use]
    pub fn capture() -> Self {
        Self::default().with_destination(Destination::Capture)
    }

    /// Returns the configuration with `level` as threshold.
    #[must_use]
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Returns the configuration with `destination` selected.
    #[must_use]
    pub fn with_destination(mut self, destination: Destination) -> Self {
        self.destination = destination;
        self
    }

    /// Returns the configuration with the debug-break flag set to `enabled`.
    #[must_use]
    pub fn with_debug_break(mut self, enabled: bool) -> Self {
        self.debug_break = enabled;
        self
    }

    /// Parses a comma-separated directive list on top of the defaults.
    ///
    /// Empty directives are skipped, so `""` yields the default
    /// configuration. See [`apply_directive`](Self::apply_directive) for the
    /// accepted forms.
    pub fn parse(directives: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for directive in directives.split(',') {
            config.apply_directive(directive)?;
        }
        Ok(config)
    }

    /// Reads [`ENV_VAR`]; an unset variable yields the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        match env::var(ENV_VAR) {
            Ok(value) => Self::parse(&value),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(raw)) => Err(ConfigError::InvalidEnvironment(
                raw.to_string_lossy().into_owned(),
            )),
        }
    }

    /// Applies a single directive (e.g., `"warn"`, `"level=info"`, `"syslog=local0"`).
    ///
    /// Accepted forms, case-insensitive and whitespace-trimmed:
    ///
    /// - a severity name, alias or tag letter, or `level=<severity>`
    /// - `break` / `nobreak`
    /// - `stderr`, `capture`, `syslog` or `syslog=<facility>`
    pub fn apply_directive(&mut self, directive: &str) -> Result<(), ConfigError> {
        let trimmed = directive.trim();
        if trimmed.is_empty() {
            return Ok(());
        }

        let lowered = trimmed.to_ascii_lowercase();
        if let Ok(level) = lowered.parse::<Severity>() {
            self.level = level;
            return Ok(());
        }

        if let Some((key, value)) = lowered.split_once('=') {
            let value = value.trim();
            match key.trim() {
                "level" => {
                    self.level = value
                        .parse()
                        .map_err(|_| ConfigError::UnknownDirective(trimmed.to_owned()))?;
                }
                "syslog" => {
                    check_facility(value)?;
                    self.destination = Destination::Syslog;
                    self.syslog_facility = value.to_owned();
                }
                _ => return Err(ConfigError::UnknownDirective(trimmed.to_owned())),
            }
            return Ok(());
        }

        match lowered.as_str() {
            "break" => self.debug_break = true,
            "nobreak" => self.debug_break = false,
            "stderr" => self.destination = Destination::Stderr,
            "capture" => self.destination = Destination::Capture,
            "syslog" => self.destination = Destination::Syslog,
            _ => return Err(ConfigError::UnknownDirective(trimmed.to_owned())),
        }
        Ok(())
    }
}

#[cfg(unix)]
fn check_facility(name: &str) -> Result<(), ConfigError> {
    logging_sink::syslog::SyslogFacility::from_name(name)
        .map(|_| ())
        .ok_or_else(|| ConfigError::UnknownFacility(name.to_owned()))
}

#[cfg(not(unix))]
fn check_facility(name: &str) -> Result<(), ConfigError> {
    if name.is_empty() {
        return Err(ConfigError::UnknownFacility(String::new()));
    }
    Ok(())
}

/// Installs `config` process-wide.
///
/// Sets the threshold, the debug-break flag and the destination, opening the
/// syslog connection first when it is selected. With the `tracing` feature
/// the first call also installs the bridging subscriber. Calling `init` again
/// replaces the settings; the syslog connection keeps the facility it was
/// opened with.
pub fn init(config: LogConfig) {
    #[cfg(feature = "tracing")]
    super::tracing_bridge::install();

    set_level(config.level);
    set_debug_break_enabled(config.debug_break);
    if config.destination == Destination::Syslog {
        open_syslog(&config.syslog_facility);
    }
    set_destination(config.destination);
}

#[cfg(unix)]
fn open_syslog(facility: &str) {
    use logging_sink::syslog::{DEFAULT_SYSLOG_TAG, SyslogConfig, SyslogFacility};

    let facility = SyslogFacility::from_name(facility).unwrap_or_default();
    logging_sink::syslog::open_once(&SyslogConfig::new(facility, DEFAULT_SYSLOG_TAG));
}

#[cfg(not(unix))]
fn open_syslog(_facility: &str) {}
