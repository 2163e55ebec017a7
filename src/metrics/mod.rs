//! Monitoring backends.
//!
//! A [`GpuBackend`] is the capability the monitor is constructed with. The
//! production one wraps NVML; tests substitute their own.

mod gpu;

pub use gpu::NvmlBackend;

use crate::error::Result;
use crate::types::{DeviceHandle, DeviceName, Utilization};

/// An initialized connection to a GPU monitoring subsystem.
///
/// Creating a value of this type is the subsystem's init step; dropping it
/// or calling [`shutdown`](GpuBackend::shutdown) ends the session.
pub trait GpuBackend {
    /// Number of devices the subsystem enumerates.
    fn device_count(&self) -> Result<u32>;

    /// Acquire a handle to the device at `index`.
    fn device_handle(&self, index: u32) -> Result<DeviceHandle>;

    fn utilization(&self, device: &DeviceHandle) -> Result<Utilization>;

    fn name(&self, device: &DeviceHandle) -> Result<DeviceName>;

    /// Total device memory in bytes.
    fn memory_total(&self, device: &DeviceHandle) -> Result<u64>;

    /// Release the subsystem.
    fn shutdown(self) -> Result<()>
    where
        Self: Sized;
}
