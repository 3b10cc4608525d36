//! Diagnostic trace written to a log file.
//!
//! The trace is a side channel: it never touches stdout and a failure to
//! open the file never changes the exit code.
//!
//! `RUST_LOG` takes precedence over the configured level:
//! ```bash
//! RUST_LOG=debug clicalc divide 50 2 5
//! ```

use std::fs::File;
use std::sync::Mutex;
use tracing::{Event, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::utils::config::{LoggingConfig, DEFAULT_LOG_LEVEL};
use crate::utils::error::{CalcError, CalcResult};

/// `<timestamp> - <target> - <LEVEL> - <message>`
struct DashFormat;

impl<S, N> FormatEvent<S, N> for DashFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        write!(
            writer,
            "{} - {} - {} - ",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S,%3f"),
            meta.target(),
            meta.level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Filter for the file sink, plus the error for an unusable level.
///
/// The level is either a bare level name (`debug`, `off`, ...) or a list of
/// `target=level` directives. Anything else falls back to `info`.
fn build_filter(config: &LoggingConfig) -> (EnvFilter, Option<CalcError>) {
    if std::env::var("RUST_LOG").is_ok() {
        return (EnvFilter::from_default_env(), None);
    }

    let level = config.level.trim();
    let parsed = if level.contains('=') || level.contains(',') {
        EnvFilter::try_new(level).map_err(|e| e.to_string())
    } else {
        level
            .parse::<LevelFilter>()
            .map(|filter| EnvFilter::default().add_directive(filter.into()))
            .map_err(|e| e.to_string())
    };

    match parsed {
        Ok(filter) => (filter, None),
        Err(reason) => (
            EnvFilter::new(DEFAULT_LOG_LEVEL),
            Some(CalcError::Logging(format!(
                "invalid log level '{}' ({}), using {}",
                config.level, reason, DEFAULT_LOG_LEVEL
            ))),
        ),
    }
}

/// Install the file sink described by `config`.
///
/// Does nothing when logging is disabled. The file is truncated on every
/// run. Only the first successful call in a process installs a subscriber.
/// An invalid level still installs the sink at `info` and is then reported
/// as an error.
pub fn init_with_config(config: &LoggingConfig) -> CalcResult<()> {
    if !config.enabled {
        return Ok(());
    }

    let file = File::create(&config.file).map_err(|e| {
        CalcError::Logging(format!("cannot open {}: {}", config.file.display(), e))
    })?;

    let (filter, level_error) = build_filter(config);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .event_format(DashFormat)
        .with_filter(filter);

    // A second init in the same process keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(file_layer).try_init();
    match level_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
