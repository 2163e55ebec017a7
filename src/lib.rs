//! GPU utilization and device info for the first NVIDIA GPU, via NVML.
//!
//! Monitoring is auxiliary: when NVML or a device is missing, [`GpuMonitor`]
//! logs a warning and answers with sentinel values instead of failing.

pub mod error;
pub mod logging;
pub mod metrics;
pub mod monitor;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use metrics::{GpuBackend, NvmlBackend};
pub use monitor::{GpuMonitor, NO_USAGE, UNKNOWN_GPU};
pub use types::{DeviceHandle, DeviceInfo, DeviceName, Utilization};
