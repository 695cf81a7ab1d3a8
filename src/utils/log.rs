use std::fs::File;
use std::io::stderr;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, OnceLock};

use chrono::Local;
use miette::{Context, IntoDiagnostic};
use tracing::level_filters::LevelFilter;
use tracing::{Level, debug, warn};
use tracing_appender::non_blocking;
use tracing_subscriber::reload;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, reload::Handle, util::SubscriberInitExt,
};

pub const DEFAULT_LOG_DIR: &str = "/tmp/chessrays_logs";

pub trait LogHandle: Send + Sync {
    fn set_filter(&self, new_filter: EnvFilter) -> miette::Result<()>;
}

impl<S> LogHandle for Handle<EnvFilter, S>
where
    S: tracing::Subscriber + Send + Sync + 'static,
{
    fn set_filter(&self, new_filter: EnvFilter) -> miette::Result<()> {
        self.modify(|current| *current = new_filter)
            .into_diagnostic()
    }
}

pub struct LogHandles {
    console_handle: Mutex<Box<dyn LogHandle>>,
    /// None when the log file couldn't be created
    file_handle: Option<Mutex<Box<dyn LogHandle>>>,
}

static LOG_DIR: OnceLock<PathBuf> = OnceLock::new();

static LOG_HANDLES: LazyLock<LogHandles> = LazyLock::new(|| {
    #[cfg(feature = "dev-tools")]
    color_backtrace::install();

    // Console Layer with its own reloadable filter
    let console_filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();
    let (console_filter, console_handle) = reload::Layer::new(console_filter);
    let console_layer = fmt::layer()
        .without_time()
        .with_writer(stderr)
        .with_filter(console_filter);

    // File Layer with its own reloadable filter (initially off)
    let file_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::OFF.into())
        .parse_lossy("");
    let (file_filter, file_handle) = reload::Layer::new(file_filter);

    let log_dir = LOG_DIR.get_or_init(|| PathBuf::from(DEFAULT_LOG_DIR));
    let file_layer = match open_log_file(log_dir) {
        Ok(log_file) => {
            let (non_blocking_writer, guard) = non_blocking(log_file);
            std::mem::forget(guard); // Keep the guard alive.
            Some(
                fmt::layer()
                    .with_writer(non_blocking_writer)
                    .with_ansi(false) // No colors in file
                    .with_filter(file_filter),
            )
        }
        Err(e) => {
            eprintln!("File logging unavailable: {e:?}");
            None
        }
    };
    let has_file = file_layer.is_some();

    // A second init (another subscriber already installed) is not an error
    // for a library.
    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();

    LogHandles {
        console_handle: Mutex::new(Box::new(console_handle)),
        file_handle: has_file.then(|| Mutex::new(Box::new(file_handle) as Box<dyn LogHandle>)),
    }
});

fn open_log_file(log_dir: &Path) -> miette::Result<File> {
    std::fs::create_dir_all(log_dir)
        .into_diagnostic()
        .with_context(|| format!("Failed to create log directory {}", log_dir.display()))?;
    let timestamp = Local::now().format("%Y-%m-%d_%H-%M-%S");
    let log_path = log_dir.join(format!("chessrays_{timestamp}.log"));
    File::create(&log_path)
        .into_diagnostic()
        .with_context(|| format!("Failed to create log file: {}", log_path.display()))
}

/// Directory for the log file. Only has an effect before the first [`init`].
pub fn set_log_dir(dir: impl Into<PathBuf>) {
    if LOG_DIR.set(dir.into()).is_err() {
        warn!("log directory already chosen, ignoring");
    }
}

pub fn set_log_level(level: Level) -> miette::Result<()> {
    let new_filter = EnvFilter::new(level.to_string());

    LOG_HANDLES
        .console_handle
        .lock()
        .map_err(|_| miette::miette!("console log handle poisoned"))?
        .set_filter(new_filter)
        .with_context(|| format!("Failed to modify log filter to level: {level}"))
}

pub fn toggle_file_logging(enable: bool) -> miette::Result<()> {
    let new_filter = if enable {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("off")
    };

    let handle = LOG_HANDLES
        .file_handle
        .as_ref()
        .context("File logging is unavailable")?;
    handle
        .lock()
        .map_err(|_| miette::miette!("file log handle poisoned"))?
        .set_filter(new_filter)
        .context("Failed to modify log filter")
}

/// Initialize tracing and backtrace
pub fn init() {
    LazyLock::force(&LOG_HANDLES);
    debug!("logging initialised");
}
