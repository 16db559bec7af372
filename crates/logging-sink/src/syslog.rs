//! crates/logging-sink/src/syslog.rs
//! Syslog destination over libc `openlog(3)`/`syslog(3)`.
//!
//! The connection is opened at most once per process with [`open_once`] and
//! stays open until exit.

use std::ffi::{CStr, CString};
use std::fmt;
use std::sync::OnceLock;

/// Syslog facility codes matching the POSIX syslog(3) constants.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogFacility {
    /// Kernel messages (LOG_KERN).
    Kern = libc::LOG_KERN,
    /// User-level messages (LOG_USER), the default for applications.
    #[default]
    User = libc::LOG_USER,
    /// Mail system (LOG_MAIL).
    Mail = libc::LOG_MAIL,
    /// System daemons (LOG_DAEMON).
    Daemon = libc::LOG_DAEMON,
    /// Security/authorization messages (LOG_AUTH).
    Auth = libc::LOG_AUTH,
    /// Messages generated internally by syslogd (LOG_SYSLOG).
    Syslog = libc::LOG_SYSLOG,
    /// Line printer subsystem (LOG_LPR).
    Lpr = libc::LOG_LPR,
    /// Network news subsystem (LOG_NEWS).
    News = libc::LOG_NEWS,
    /// UUCP subsystem (LOG_UUCP).
    Uucp = libc::LOG_UUCP,
    /// Clock daemon (LOG_CRON).
    Cron = libc::LOG_CRON,
    /// Reserved for local use (LOG_LOCAL0).
    Local0 = libc::LOG_LOCAL0,
    /// Reserved for local use (LOG_LOCAL1).
    Local1 = libc::LOG_LOCAL1,
    /// Reserved for local use (LOG_LOCAL2).
    Local2 = libc::LOG_LOCAL2,
    /// Reserved for local use (LOG_LOCAL3).
    Local3 = libc::LOG_LOCAL3,
    /// Reserved for local use (LOG_LOCAL4).
    Local4 = libc::LOG_LOCAL4,
    /// Reserved for local use (LOG_LOCAL5).
    Local5 = libc::LOG_LOCAL5,
    /// Reserved for local use (LOG_LOCAL6).
    Local6 = libc::LOG_LOCAL6,
    /// Reserved for local use (LOG_LOCAL7).
    Local7 = libc::LOG_LOCAL7,
}

impl SyslogFacility {
    /// Every facility, in `<syslog.h>` order.
    pub const ALL: [Self; 18] = [
        Self::Kern,
        Self::User,
        Self::Mail,
        Self::Daemon,
        Self::Auth,
        Self::Syslog,
        Self::Lpr,
        Self::News,
        Self::Uucp,
        Self::Cron,
        Self::Local0,
        Self::Local1,
        Self::Local2,
        Self::Local3,
        Self::Local4,
        Self::Local5,
        Self::Local6,
        Self::Local7,
    ];

    /// Parses a facility name such as `"user"` or `"LOCAL3"`.
    ///
    /// Matching is case-insensitive. Returns `None` for unknown names.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::syslog::SyslogFacility;
    ///
    /// assert_eq!(SyslogFacility::from_name("user"), Some(SyslogFacility::User));
    /// assert_eq!(SyslogFacility::from_name("LOCAL3"), Some(SyslogFacility::Local3));
    /// assert_eq!(SyslogFacility::from_name("local8"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|facility| facility.as_str().eq_ignore_ascii_case(name))
    }

    /// Returns the lowercase facility name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kern => "kern",
            Self::User => "user",
            Self::Mail => "mail",
            Self::Daemon => "daemon",
            Self::Auth => "auth",
            Self::Syslog => "syslog",
            Self::Lpr => "lpr",
            Self::News => "news",
            Self::Uucp => "uucp",
            Self::Cron => "cron",
            Self::Local0 => "local0",
            Self::Local1 => "local1",
            Self::Local2 => "local2",
            Self::Local3 => "local3",
            Self::Local4 => "local4",
            Self::Local5 => "local5",
            Self::Local6 => "local6",
            Self::Local7 => "local7",
        }
    }
}

impl fmt::Display for SyslogFacility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ident passed to `openlog(3)` when no tag is configured.
pub const DEFAULT_SYSLOG_TAG: &str = "leveled-log";

/// Facility and ident used when opening the syslog connection.
///
/// # Examples
///
/// ```
/// use logging_sink::syslog::{SyslogConfig, SyslogFacility};
///
/// let config = SyslogConfig::new(SyslogFacility::Local5, "inventory");
/// assert_eq!(config.facility(), SyslogFacility::Local5);
/// assert_eq!(config.tag(), "inventory");
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SyslogConfig {
    facility: SyslogFacility,
    tag: String,
}

impl SyslogConfig {
    /// Creates a configuration with the given facility and tag.
    pub fn new(facility: SyslogFacility, tag: impl Into<String>) -> Self {
        Self {
            facility,
            tag: tag.into(),
        }
    }

    /// Returns the configured facility.
    pub const fn facility(&self) -> SyslogFacility {
        self.facility
    }

    /// Returns the configured tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl Default for SyslogConfig {
    fn default() -> Self {
        Self::new(SyslogFacility::default(), DEFAULT_SYSLOG_TAG)
    }
}

/// Syslog priorities matching the POSIX syslog(3) severity constants.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(i32)]
pub enum SyslogPriority {
    /// Error conditions (LOG_ERR).
    Error = libc::LOG_ERR,
    /// Warning conditions (LOG_WARNING).
    Warning = libc::LOG_WARNING,
    /// Normal but significant condition (LOG_NOTICE).
    Notice = libc::LOG_NOTICE,
    /// Informational messages (LOG_INFO).
    Info = libc::LOG_INFO,
    /// Debug-level messages (LOG_DEBUG).
    Debug = libc::LOG_DEBUG,
}

// openlog(3) keeps the ident pointer, so the CString lives in a static.
static IDENT: OnceLock<CString> = OnceLock::new();

/// Opens the syslog connection unless a previous call already did.
///
/// Returns `true` when this call opened the connection and `false` when it
/// was already open, in which case `config` is ignored. A tag containing a
/// NUL byte falls back to [`DEFAULT_SYSLOG_TAG`].
pub fn open_once(config: &SyslogConfig) -> bool {
    let mut opened = false;
    IDENT.get_or_init(|| {
        let ident = CString::new(config.tag()).unwrap_or_else(|_| default_ident());
        // SAFETY: the ident buffer is heap-allocated and moves into the
        // static unchanged, so the pointer stays valid for the process
        // lifetime. OnceLock serialises concurrent initialisation.
        unsafe {
            libc::openlog(
                ident.as_ptr(),
                libc::LOG_PID,
                config.facility() as libc::c_int,
            );
        }
        opened = true;
        ident
    });
    opened
}

/// Reports whether [`open_once`] has opened the connection.
pub fn is_open() -> bool {
    IDENT.get().is_some()
}

/// Sends `message` to syslog(3) with the given priority.
///
/// Does nothing until [`open_once`] has run. Text after an embedded NUL byte
/// is dropped.
pub fn send(priority: SyslogPriority, message: &str) {
    if !is_open() {
        return;
    }

    let text = message.split('\0').next().unwrap_or_default();
    let Ok(c_message) = CString::new(text) else {
        return;
    };
    let format: &CStr = c"%s";

    // SAFETY: openlog has completed (checked above) and syslog is safe to call
    // concurrently afterwards. Both arguments are valid NUL-terminated strings
    // and the message is passed through "%s" so `%` in it is not interpreted.
    unsafe {
        libc::syslog(priority as libc::c_int, format.as_ptr(), c_message.as_ptr());
    }
}

fn default_ident() -> CString {
    CString::from(c"leveled-log")
}
