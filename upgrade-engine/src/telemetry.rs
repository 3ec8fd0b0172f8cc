//! Tracing setup shared by the binaries that embed the engine.
//!
//! Engine events get their own compact layer with UTC timestamps and source
//! locations; everything else goes through a plain formatter. The binary picks
//! the global level through `RUST_LOG` (falling back to a default directive).

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{
    EnvFilter, Layer,
    filter::{self, Directive, ParseError},
    fmt::{self, format::Writer, time::FormatTime},
    layer::SubscriberExt,
    registry::LookupSpan,
    util::{SubscriberInitExt, TryInitError},
};

/// Target prefix of every event emitted by this crate.
pub const TARGET_PREFIX: &str = "upgrade_engine";

/// `2025-09-12T10:20:30Z` style timestamps.
#[derive(Clone, Debug, Default)]
struct UtcSeconds;

impl FormatTime for UtcSeconds {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        w.write_str(&now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true))
    }
}

fn is_engine_target(target: &str) -> bool {
    target.starts_with(TARGET_PREFIX)
}

/// Formatting layer that renders only engine events.
///
/// Span close events are included so `#[instrument]`ed pipeline steps report
/// their duration.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let format = fmt::format()
        .compact()
        .with_timer(UtcSeconds)
        .with_target(true)
        .with_source_location(true);

    fmt::layer()
        .event_format(format)
        .with_ansi(io::stdout().is_terminal())
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_filter(filter::filter_fn(|meta| is_engine_target(meta.target())))
}

/// Directive that sets the engine's own level, e.g. `upgrade_engine=debug`.
pub fn level_directive(level: Level) -> Result<Directive, ParseError> {
    format!("{TARGET_PREFIX}={}", level.as_str().to_lowercase()).parse()
}

/// `RUST_LOG` if set and valid, otherwise `default`.
///
/// The engine is pinned to `engine_level` unless the chosen directives already
/// name the engine target.
pub fn env_filter(default: &str, engine_level: Level) -> Result<EnvFilter, ParseError> {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty());

    match from_env.as_deref().map(|d| filter_for(d, engine_level)) {
        Some(Ok(filter)) => Ok(filter),
        _ => filter_for(default, engine_level),
    }
}

fn filter_for(directives: &str, engine_level: Level) -> Result<EnvFilter, ParseError> {
    let filter = EnvFilter::try_new(directives)?;
    if names_engine(directives) {
        return Ok(filter);
    }
    Ok(filter.add_directive(level_directive(engine_level)?))
}

fn names_engine(directives: &str) -> bool {
    directives
        .split(',')
        .any(|d| is_engine_target(d.trim()))
}

/// Errors from [`init`].
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    #[error("invalid log filter: {0}")]
    Filter(#[from] ParseError),
    #[error("global subscriber already installed: {0}")]
    Init(#[from] TryInitError),
}

/// Installs the global subscriber: engine layer plus a plain layer for the
/// rest of the process.
pub fn init(default: &str, engine_level: Level) -> Result<(), TelemetryError> {
    let others = fmt::layer()
        .with_target(false)
        .with_filter(filter::filter_fn(|meta| !is_engine_target(meta.target())));

    tracing_subscriber::registry()
        .with(env_filter(default, engine_level)?)
        .with(layer())
        .with(others)
        .try_init()?;

    Ok(())
}
