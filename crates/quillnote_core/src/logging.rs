//! Rolling file logging for the core.
//!
//! # Responsibility
//! - Start file-based rolling logs once per process, next to the data the
//!   session persists.
//! - Emit stable `event=... module=core` key-value lines from core code.
//!
//! # Invariants
//! - Initialization is idempotent for the same directory and rejected for
//!   a different one; the first caller wins.
//! - Initialization never panics; every failure is a typed error.

use flexi_logger::{Cleanup, Criterion, FileSpec, FlexiLoggerError, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const LOG_BASENAME: &str = "quillnote";
const ROTATE_SIZE_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_LOG_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    log_dir: PathBuf,
    _handle: LoggerHandle,
}

/// Logging bootstrap failure.
#[derive(Debug)]
pub enum LoggingError {
    /// A logger is already running against a different directory.
    AlreadyActive { active: PathBuf, requested: PathBuf },
    /// The log directory could not be created.
    CreateDir {
        dir: PathBuf,
        source: std::io::Error,
    },
    /// The logger backend rejected the spec or failed to start.
    Backend(FlexiLoggerError),
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyActive { active, requested } => write!(
                f,
                "logging already active at `{}`; refusing to switch to `{}`",
                active.display(),
                requested.display()
            ),
            Self::CreateDir { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(err) => write!(f, "logger backend failure: {err}"),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::AlreadyActive { .. } => None,
            Self::CreateDir { source, .. } => Some(source),
            Self::Backend(err) => Some(err),
        }
    }
}

/// Starts rolling file logging under `log_dir`.
///
/// `spec` is a `flexi_logger` level spec such as `"info"` or
/// `"debug,quillnote_core=trace"`; invalid specs surface as
/// [`LoggingError::Backend`]. Repeat calls with the same directory are
/// no-ops regardless of spec; the first initialization wins.
pub fn init_logging(spec: &str, log_dir: impl AsRef<Path>) -> Result<(), LoggingError> {
    let requested = log_dir.as_ref().to_path_buf();

    let active = ACTIVE.get_or_try_init(|| start_logger(spec, requested.clone()))?;
    if active.log_dir != requested {
        return Err(LoggingError::AlreadyActive {
            active: active.log_dir.clone(),
            requested,
        });
    }
    Ok(())
}

fn start_logger(spec: &str, log_dir: PathBuf) -> Result<ActiveLogging, LoggingError> {
    std::fs::create_dir_all(&log_dir).map_err(|source| LoggingError::CreateDir {
        dir: log_dir.clone(),
        source,
    })?;

    let handle = Logger::try_with_str(spec)
        .map_err(LoggingError::Backend)?
        .log_to_file(
            FileSpec::default()
                .directory(&log_dir)
                .basename(LOG_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        .start()
        .map_err(LoggingError::Backend)?;

    info!(
        "event=logging_init module=core status=ok spec={spec} log_dir={} version={}",
        log_dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        log_dir,
        _handle: handle,
    })
}
