//! Tracing setup for the billing window.
//!
//! Records go to stdout (coloured on a terminal) and, once a path is
//! given, to a log file. The level can be changed while the app runs.

use anyhow::{Result, anyhow, bail};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal, Write},
    path::Path,
    sync::{Arc, Mutex, MutexGuard, OnceLock, PoisonError},
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext, MakeWriter,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

use crate::config::LoggingConfig;

// --- Formatter ---

/// `<local time> <LEVEL> <file:line> <fields>`
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
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
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            write!(writer, "\x1b[2m{timestamp}\x1b[0m ")?;
            let colour = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(writer, "\x1b[{colour}m{:>5}\x1b[0m ", meta.level())?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        let file = meta.file().map(|f| {
            f.strip_prefix("src/")
                .or_else(|| f.strip_prefix("src\\"))
                .unwrap_or(f)
        });
        if let (Some(file), Some(line)) = (file, meta.line()) {
            if ansi {
                write!(writer, "\x1b[36m{file}:{line}\x1b[0m ")?;
            } else {
                write!(writer, "{file}:{line} ")?;
            }
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Late-bound file writer ---

type SharedFile = Arc<Mutex<Option<File>>>;

fn lock_file(slot: &SharedFile) -> MutexGuard<'_, Option<File>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Writes to the log file once one is set; discards until then.
#[derive(Clone)]
struct FileSlot(SharedFile);

struct SlotWriter<'a>(MutexGuard<'a, Option<File>>);

impl Write for SlotWriter<'_> {
    fn write(
        &mut self,
        buf: &[u8],
    ) -> io::Result<usize> {
        match &mut *self.0 {
            Some(f) => f.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut *self.0 {
            Some(f) => f.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSlot {
    type Writer = SlotWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SlotWriter(lock_file(&self.0))
    }
}

// --- Runtime handles ---

type ReloadFn = Box<dyn Fn(EnvFilter) -> Result<()> + Send + Sync>;

struct Handles {
    level: ReloadFn,
    file: SharedFile,
    /// Directive chosen at startup, restored by [`reset_log_level`].
    initial: String,
}

static HANDLES: OnceLock<Handles> = OnceLock::new();

fn handles() -> Result<&'static Handles> {
    HANDLES
        .get()
        .ok_or_else(|| anyhow!("logging not yet initialized"))
}

fn reloader<S>(handle: reload::Handle<EnvFilter, S>) -> ReloadFn
where
    S: Subscriber + Send + Sync + 'static,
{
    Box::new(move |filter| {
        handle
            .reload(filter)
            .map_err(|e| anyhow!("filter reload failed: {e}"))
    })
}

fn stdout_gate(enabled: bool) -> EnvFilter {
    // "trace" lets everything through; the level filter is still the ceiling.
    EnvFilter::new(if enabled { "trace" } else { "off" })
}

/// Default directive when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_DIRECTIVE: &str = "info,billing_ui=debug,billing_core=debug";

/// `RUST_LOG` when it holds a usable directive, otherwise the configured
/// level.
fn initial_directive(
    env: Option<String>,
    configured: &str,
) -> String {
    env.filter(|directive| {
        !directive.trim().is_empty() && EnvFilter::try_new(directive).is_ok()
    })
    .unwrap_or_else(|| configured.to_string())
}

// --- Public API ---

/// Changes the active filter. Accepts a bare level or a full directive.
pub fn set_log_level(level: &str) -> Result<()> {
    let filter =
        EnvFilter::try_new(level).map_err(|e| anyhow!("invalid log level '{level}': {e}"))?;
    (handles()?.level)(filter)
}

/// Restores the filter that was active right after [`init_logging`].
pub fn reset_log_level() -> Result<()> {
    let handles = handles()?;
    let filter = EnvFilter::try_new(&handles.initial)
        .map_err(|e| anyhow!("invalid log level '{}': {e}", handles.initial))?;
    (handles.level)(filter)
}

/// Starts appending records to `path`, replacing any open log file.
/// The parent directory must already exist.
pub fn enable_file_logging(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| anyhow!("cannot open log file '{}': {e}", path.display()))?;
    *lock_file(&handles()?.file) = Some(file);
    Ok(())
}

/// Installs the global subscriber. Call once at startup.
///
/// `RUST_LOG` overrides `config.level` when set. Calling again after a
/// successful init is a no-op.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    if HANDLES.get().is_some() {
        return Ok(());
    }

    let directive = initial_directive(
        std::env::var(EnvFilter::DEFAULT_ENV).ok(),
        &config.level,
    );
    let initial = EnvFilter::try_new(&directive)
        .map_err(|e| anyhow!("invalid log level '{directive}': {e}"))?;

    let file: SharedFile = Arc::new(Mutex::new(None));
    let (level_filter, level_handle) = reload::Layer::new(initial);

    let stdout_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stdout().is_terminal())
        .with_filter(stdout_gate(config.stdout));

    let file_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(false)
        .with_writer(FileSlot(Arc::clone(&file)));

    tracing_subscriber::registry()
        .with(level_filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow!("cannot install tracing subscriber: {e}"))?;

    if HANDLES
        .set(Handles {
            level: reloader(level_handle),
            file,
            initial: directive,
        })
        .is_err()
    {
        bail!("logging initialized twice");
    }

    if let Some(path) = &config.file {
        enable_file_logging(path)?;
    }
    Ok(())
}
