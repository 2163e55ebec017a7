//! Data types shared between the monitor and its backends.

use std::fmt;

use crate::error::Result;
use crate::utils::bytes_to_gib;

/// Opaque reference to one enumerated accelerator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeviceHandle {
    index: u32,
}

impl DeviceHandle {
    /// Handle for the device at `index`. Only backends should mint these.
    pub fn new(index: u32) -> Self {
        Self { index }
    }

    pub fn index(&self) -> u32 {
        self.index
    }
}

/// Utilization rate as reported by the subsystem, in percent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utilization {
    /// GPU-core utilization.
    pub gpu: u32,
}

/// A device name as the subsystem returned it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeviceName {
    Text(String),
    /// Raw, possibly NUL-padded, C string bytes.
    Bytes(Vec<u8>),
}

impl DeviceName {
    /// Decode to text. Trailing NULs are dropped; invalid UTF-8 is an error.
    pub fn into_string(self) -> Result<String> {
        match self {
            DeviceName::Text(name) => Ok(name),
            DeviceName::Bytes(mut bytes) => {
                while bytes.last() == Some(&0) {
                    bytes.pop();
                }
                Ok(String::from_utf8(bytes)?)
            }
        }
    }
}

impl From<String> for DeviceName {
    fn from(name: String) -> Self {
        DeviceName::Text(name)
    }
}

impl From<Vec<u8>> for DeviceName {
    fn from(bytes: Vec<u8>) -> Self {
        DeviceName::Bytes(bytes)
    }
}

/// Human-readable descriptor of the tracked device.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo {
    pub name: String,
    /// Total device memory in bytes.
    pub memory_total: u64,
}

impl DeviceInfo {
    pub fn memory_total_gib(&self) -> f64 {
        bytes_to_gib(self.memory_total)
    }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.1} GB)", self.name, self.memory_total_gib())
    }
}
