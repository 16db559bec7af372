//! crates/logging/src/tracing_bridge.rs
//! Delegation to the `tracing` ecosystem.
//!
//! With the `tracing` feature enabled every entry point of this crate becomes
//! a `tracing` event: the severity macros expand to the matching `tracing`
//! macro and [`log`](crate::log)/[`logf`](crate::logf) emit events carrying a
//! `call_site` field. [`init`](crate::init) installs a registry with two
//! layers:
//!
//! - a reloadable [`LevelFilter`] that [`set_level`](crate::set_level) keeps in
//!   step with the process-wide threshold
//! - [`RecordLayer`], which turns each event back into a [`Record`] and hands it
//!   to the configured destination
//!
//! Hosts that install their own subscriber can add [`RecordLayer`] to it
//! instead of calling `init`.
//!
//! # Severity mapping
//!
//! | tracing level                | severity                        |
//! |------------------------------|---------------------------------|
//! | `ERROR`                      | [`Severity::Error`]             |
//! | `WARN`                       | [`Severity::Warning`]           |
//! | `INFO`, target [`PERF_TARGET`] | [`Severity::Performance`]     |
//! | `INFO`                       | [`Severity::Info`]              |
//! | `DEBUG`                      | [`Severity::Debug`]             |
//! | `TRACE`                      | [`Severity::Verbose`]           |

use std::fmt;
use std::sync::OnceLock;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Metadata, Subscriber};
use tracing_subscriber::Registry;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::reload;

use super::dispatch::{deliver, render_message};
use super::record::{CallSite, Record};
use super::severity::Severity;
use super::threshold::{enabled, level};

/// Target carried by performance events, which `tracing` has no level for.
pub const PERF_TARGET: &str = "perf";

/// Name of the event field holding a pre-rendered call site.
const CALL_SITE_FIELD: &str = "call_site";

static FILTER_HANDLE: OnceLock<reload::Handle<LevelFilter, Registry>> = OnceLock::new();

/// A tracing layer that turns events into [`Record`]s.
///
/// Events below the process-wide threshold are dropped here as well, so
/// [`Severity::Performance`] filters `INFO` events correctly even though both
/// share a `tracing` level.
#[derive(Clone, Copy, Debug, Default)]
pub struct RecordLayer {
    _private: (),
}

impl RecordLayer {
    /// Creates the layer.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Maps event metadata to a severity.
    fn severity_of(metadata: &Metadata<'_>) -> Severity {
        match *metadata.level() {
            Level::ERROR => Severity::Error,
            Level::WARN => Severity::Warning,
            Level::INFO if metadata.target() == PERF_TARGET => Severity::Performance,
            Level::INFO => Severity::Info,
            Level::DEBUG => Severity::Debug,
            _ => Severity::Verbose,
        }
    }

    /// Call site used when the event carries no `call_site` field.
    fn fallback_call_site(metadata: &Metadata<'_>) -> String {
        let origin = metadata.module_path().unwrap_or_else(|| metadata.target());
        format!("{origin}:{}", metadata.line().unwrap_or(0))
    }
}

impl<S> Layer<S> for RecordLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_of(metadata);
        if !enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);

        let call_site = visitor
            .call_site
            .unwrap_or_else(|| Self::fallback_call_site(metadata));
        deliver(Record::new(
            severity,
            call_site,
            visitor.message.unwrap_or_default(),
        ));
    }
}

/// Collects the message and call-site fields of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
    call_site: Option<String>,
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        match field.name() {
            "message" => self.message = Some(render_message(format_args!("{value:?}"))),
            CALL_SITE_FIELD => self.call_site = Some(render_message(format_args!("{value:?}"))),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "message" => self.message = Some(value.to_owned()),
            CALL_SITE_FIELD => self.call_site = Some(value.to_owned()),
            _ => {}
        }
    }
}

/// Level filter that lets `level` and everything above it through.
pub(crate) const fn level_filter(level: Severity) -> LevelFilter {
    match level {
        Severity::Verbose => LevelFilter::TRACE,
        Severity::Debug => LevelFilter::DEBUG,
        Severity::Info | Severity::Performance => LevelFilter::INFO,
        Severity::Warning => LevelFilter::WARN,
        Severity::Error => LevelFilter::ERROR,
    }
}

/// Installs the bridging subscriber as the global default, once.
///
/// When another global subscriber is already installed the call leaves it in
/// place; events then reach [`RecordLayer`] only if the host added it.
pub(crate) fn install() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    FILTER_HANDLE.get_or_init(|| {
        let (filter, handle) = reload::Layer::new(level_filter(level()));
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(RecordLayer::new())
            .try_init();
        handle
    });
}

/// Points the installed level filter at `level`. No-op before [`install`].
pub(crate) fn retune(level: Severity) {
    if let Some(handle) = FILTER_HANDLE.get() {
        let _ = handle.modify(|filter| *filter = level_filter(level));
    }
}

/// Emits a `tracing` event for a record that already passed the threshold.
pub(crate) fn forward(level: Severity, call_site: &CallSite, args: fmt::Arguments<'_>) {
    match level {
        Severity::Error => tracing::error!(call_site = %call_site, "{args}"),
        Severity::Warning => tracing::warn!(call_site = %call_site, "{args}"),
        Severity::Performance => {
            tracing::info!(target: PERF_TARGET, call_site = %call_site, "{args}");
        }
        Severity::Info => tracing::info!(call_site = %call_site, "{args}"),
        Severity::Debug => tracing::debug!(call_site = %call_site, "{args}"),
        Severity::Verbose => tracing::trace!(call_site = %call_site, "{args}"),
    }
}
