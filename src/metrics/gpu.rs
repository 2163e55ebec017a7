//! NVML backend (NVIDIA GPUs via nvml-wrapper).

use nvml_wrapper::error::NvmlError;
use nvml_wrapper::{Device, Nvml};
use tracing::debug;

use super::GpuBackend;
use crate::error::{Error, Result};
use crate::types::{DeviceHandle, DeviceName, Utilization};

// ============================================================================
// NVML Backend
// ============================================================================

/// GPU backend handle for NVML.
///
/// NVML reference-counts init and shutdown across the process, but only one
/// monitor per process should own the lifecycle. Dropping this without
/// [`shutdown`](GpuBackend::shutdown) still shuts NVML down.
pub struct NvmlBackend {
    nvml: Nvml,
}

impl NvmlBackend {
    /// Load the NVML shared library and initialize it.
    pub fn init() -> Result<Self> {
        let nvml = Nvml::init().map_err(map_init_error)?;
        debug!("NVML initialized");
        Ok(Self { nvml })
    }

    fn device(&self, handle: &DeviceHandle, op: &'static str) -> Result<Device<'_>> {
        self.nvml
            .device_by_index(handle.index())
            .map_err(|e| Error::query(op, e))
    }
}

/// Separate "no NVML on this host" from "NVML present but refused to start".
fn map_init_error(e: NvmlError) -> Error {
    if matches!(e, NvmlError::LibloadingError(_) | NvmlError::LibraryNotFound) {
        Error::LibraryUnavailable(e.into())
    } else {
        Error::Init(e.into())
    }
}

impl GpuBackend for NvmlBackend {
    fn device_count(&self) -> Result<u32> {
        self.nvml
            .device_count()
            .map_err(|e| Error::query("get device count", e))
    }

    fn device_handle(&self, index: u32) -> Result<DeviceHandle> {
        // NVML's Device borrows the Nvml instance, so keep only the index and
        // resolve it again per query.
        self.nvml
            .device_by_index(index)
            .map_err(|e| Error::query("get device handle", e))?;
        Ok(DeviceHandle::new(index))
    }

    fn utilization(&self, device: &DeviceHandle) -> Result<Utilization> {
        let op = "get utilization rates";
        let rates = self
            .device(device, op)?
            .utilization_rates()
            .map_err(|e| Error::query(op, e))?;
        Ok(Utilization { gpu: rates.gpu })
    }

    fn name(&self, device: &DeviceHandle) -> Result<DeviceName> {
        let op = "get device name";
        self.device(device, op)?
            .name()
            .map(DeviceName::Text)
            .map_err(|e| Error::query(op, e))
    }

    fn memory_total(&self, device: &DeviceHandle) -> Result<u64> {
        let op = "get memory info";
        self.device(device, op)?
            .memory_info()
            .map(|info| info.total)
            .map_err(|e| Error::query(op, e))
    }

    fn shutdown(self) -> Result<()> {
        self.nvml.shutdown().map_err(|e| Error::Shutdown(e.into()))
    }
}
