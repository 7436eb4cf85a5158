#[cfg(feature = "nvml")]
use nvml_wrapper::Nvml;

use crate::core::sysfs::SysRoot;
use crate::core::system_info::gpu::{GpuIdentity, GpuIdentityProvider};
use crate::error::{InsightError, Result};

/// NVIDIA GPU identity via NVML
pub struct NvidiaIdentityProvider {
    #[cfg(feature = "nvml")]
    nvml: Nvml,
    #[cfg_attr(not(feature = "nvml"), allow(dead_code))]
    device_index: u32,
}

impl NvidiaIdentityProvider {
    /// Create a new NVIDIA provider
    ///
    /// Initializes NVML and selects the first available GPU.
    pub fn new() -> Result<Self> {
        Self::with_device_index(0)
    }

    /// Create provider for a specific GPU index
    pub fn with_device_index(index: u32) -> Result<Self> {
        #[cfg(feature = "nvml")]
        {
            let nvml = Nvml::init().map_err(|e| {
                InsightError::gpu_not_available(format!("Failed to init NVML: {}", e))
            })?;

            // Verify device exists
            let _ = nvml.device_by_index(index).map_err(|e| {
                InsightError::gpu_not_available(format!("GPU {} not found: {}", index, e))
            })?;

            Ok(Self {
                nvml,
                device_index: index,
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            let _ = index;
            Err(InsightError::gpu_not_available(
                "NVIDIA GPU support not enabled",
            ))
        }
    }
}

impl GpuIdentityProvider for NvidiaIdentityProvider {
    fn name(&self) -> &'static str {
        "nvml"
    }

    fn identity(&self, _root: &SysRoot) -> Option<GpuIdentity> {
        #[cfg(feature = "nvml")]
        {
            let device = self.nvml.device_by_index(self.device_index).ok()?;
            Some(GpuIdentity {
                vendor: Some("NVIDIA Corporation".to_string()),
                model: device.name().ok(),
            })
        }
        #[cfg(not(feature = "nvml"))]
        {
            None
        }
    }
}
