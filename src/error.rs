//! Error types for GPU monitoring.

use std::string::FromUtf8Error;

use thiserror::Error;

/// Boxed error reported by a monitoring backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Everything that can go wrong while talking to the monitoring subsystem.
///
/// None of these ever escape [`GpuMonitor`](crate::GpuMonitor)'s sentinel
/// accessors; they surface only through the `try_*` forms.
#[derive(Debug, Error)]
pub enum Error {
    /// The monitoring client library could not be loaded.
    #[error("monitoring library not available: {0}")]
    LibraryUnavailable(#[source] BoxError),

    /// The library loaded but the subsystem refused to initialize.
    #[error("failed to initialize monitoring subsystem: {0}")]
    Init(#[source] BoxError),

    /// The subsystem initialized but enumerated no devices.
    #[error("no GPU devices found")]
    NoDevice,

    /// The monitor has no usable device, either from construction or after cleanup.
    #[error("GPU monitoring unavailable")]
    Unavailable,

    /// A per-call query failed after successful initialization.
    #[error("failed to {op}: {source}")]
    Query {
        op: &'static str,
        #[source]
        source: BoxError,
    },

    /// The device reported a name that is not valid UTF-8.
    #[error("device name is not valid UTF-8: {0}")]
    InvalidName(#[from] FromUtf8Error),

    /// The subsystem failed to shut down.
    #[error("failed to shut down monitoring subsystem: {0}")]
    Shutdown(#[source] BoxError),
}

impl Error {
    /// Wrap a backend error raised while performing `op`.
    pub fn query(op: &'static str, source: impl Into<BoxError>) -> Self {
        Error::Query {
            op,
            source: source.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
