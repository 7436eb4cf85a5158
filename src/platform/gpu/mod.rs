//! GPU-specific platform code.
//!
//! Supplies the identity providers used for the GPU card, in order of
//! preference: NVIDIA (via NVML), then plain sysfs.

mod nvidia;

pub use nvidia::NvidiaIdentityProvider;

use crate::core::system_info::gpu::{GpuIdentityProvider, SysfsIdentityProvider};

/// Providers available on this machine, best first.
///
/// NVML is only included when the library loads and reports a device.
pub fn identity_providers() -> Vec<Box<dyn GpuIdentityProvider>> {
    let mut providers: Vec<Box<dyn GpuIdentityProvider>> = Vec::new();

    match NvidiaIdentityProvider::new() {
        Ok(provider) => providers.push(Box::new(provider)),
        Err(e) => log::debug!("{}", e),
    }

    providers.push(Box::new(SysfsIdentityProvider));
    providers
}
