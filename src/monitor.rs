//! First-device GPU monitor with sentinel fallbacks.

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::metrics::{GpuBackend, NvmlBackend};
use crate::types::{DeviceHandle, DeviceInfo};

/// Returned by [`GpuMonitor::gpu_info`] when no descriptor can be produced.
pub const UNKNOWN_GPU: &str = "Unknown GPU";

/// Returned by [`GpuMonitor::gpu_usage`] when no reading can be taken.
/// Means "no data", not "idle"; check [`GpuMonitor::is_available`].
pub const NO_USAGE: f64 = 0.0;

enum Session<B> {
    Unavailable,
    Available { backend: B, device: DeviceHandle },
    ShutDown,
}

/// Tracks utilization of the first GPU the monitoring subsystem enumerates.
///
/// Construction and every query are infallible: when the subsystem or the
/// device is missing, the sentinel accessors return [`NO_USAGE`] and
/// [`UNKNOWN_GPU`] and log a warning. Use [`try_usage`](Self::try_usage) and
/// [`try_info`](Self::try_info) to see why.
pub struct GpuMonitor<B: GpuBackend = NvmlBackend> {
    session: Session<B>,
}

impl GpuMonitor<NvmlBackend> {
    /// Monitor backed by NVML.
    pub fn new() -> Self {
        Self::with_backend(NvmlBackend::init)
    }
}

impl Default for GpuMonitor<NvmlBackend> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: GpuBackend> GpuMonitor<B> {
    /// Monitor over the backend produced by `init`.
    pub fn with_backend<F>(init: F) -> Self
    where
        F: FnOnce() -> Result<B>,
    {
        let session = match open_session(init) {
            Ok((backend, device)) => {
                debug!(device = device.index(), "GPU monitoring enabled");
                Session::Available { backend, device }
            }
            Err(e @ Error::LibraryUnavailable(_)) => {
                warn!(error = %e, "GPU monitoring disabled");
                Session::Unavailable
            }
            Err(e) => {
                warn!(error = %e, "GPU monitoring unavailable");
                Session::Unavailable
            }
        };
        Self { session }
    }

    /// Whether a device is being tracked.
    pub fn is_available(&self) -> bool {
        matches!(self.session, Session::Available { .. })
    }

    /// Instantaneous GPU-core utilization in percent.
    pub fn try_usage(&self) -> Result<f64> {
        let (backend, device) = self.device()?;
        let rates = backend.utilization(device)?;
        Ok(f64::from(rates.gpu))
    }

    /// Instantaneous GPU-core utilization in percent, or [`NO_USAGE`].
    pub fn gpu_usage(&self) -> f64 {
        match self.try_usage() {
            Ok(pct) => pct,
            Err(Error::Unavailable) => NO_USAGE,
            Err(e) => {
                warn!(error = %e, "Failed to get GPU usage");
                NO_USAGE
            }
        }
    }

    /// Name and total memory of the tracked device.
    pub fn try_info(&self) -> Result<DeviceInfo> {
        let (backend, device) = self.device()?;
        let name = backend.name(device)?.into_string()?;
        let memory_total = backend.memory_total(device)?;
        Ok(DeviceInfo { name, memory_total })
    }

    /// `"<name> (<size> GB)"`, or [`UNKNOWN_GPU`].
    pub fn gpu_info(&self) -> String {
        match self.try_info() {
            Ok(info) => info.to_string(),
            Err(Error::Unavailable) => UNKNOWN_GPU.to_string(),
            Err(e) => {
                warn!(error = %e, "Failed to get GPU info");
                UNKNOWN_GPU.to_string()
            }
        }
    }

    /// Shut the subsystem down. Safe to call any number of times; shutdown
    /// errors are discarded.
    pub fn cleanup(&mut self) {
        match std::mem::replace(&mut self.session, Session::ShutDown) {
            Session::Available { backend, .. } => {
                let _ = backend.shutdown();
            }
            Session::Unavailable => self.session = Session::Unavailable,
            Session::ShutDown => {}
        }
    }

    fn device(&self) -> Result<(&B, &DeviceHandle)> {
        match &self.session {
            Session::Available { backend, device } => Ok((backend, device)),
            Session::Unavailable | Session::ShutDown => Err(Error::Unavailable),
        }
    }
}

fn open_session<B, F>(init: F) -> Result<(B, DeviceHandle)>
where
    B: GpuBackend,
    F: FnOnce() -> Result<B>,
{
    let backend = init()?;
    let device = backend
        .device_count()
        .and_then(|count| match count {
            0 => Err(Error::NoDevice),
            _ => backend.device_handle(0),
        });
    match device {
        Ok(device) => Ok((backend, device)),
        Err(e) => {
            let _ = backend.shutdown();
            Err(e)
        }
    }
}
