use chrono::Local;
use log::{debug, warn};

use crate::core::config::Config;
use crate::core::sensors::{build_sections, read_sensors};
use crate::core::sysfs::SysRoot;
use crate::core::system_info::gpu::{self, GpuIdentityProvider};
use crate::core::system_info::types::*;
use crate::core::system_info::{cpu, memory, motherboard, storage};

/// Runs every reader against one root. The GPU identity is read once on
/// construction; everything else is re-read by [`Collector::collect`].
pub struct Collector {
    root: SysRoot,
    gpu: GpuInfo,
    config: Config,
}

impl Collector {
    pub fn new(root: SysRoot, providers: &[Box<dyn GpuIdentityProvider>], config: Config) -> Self {
        let gpu = gpu::collect(&root, providers);
        debug!("GPU: {} {}", gpu.vendor, gpu.model);

        Self { root, gpu, config }
    }

    pub fn root(&self) -> &SysRoot {
        &self.root
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// One full refresh. Never fails; unreadable sources show up as `N/A`
    /// or as [`RamBanks::Unavailable`].
    pub fn collect(&self) -> Snapshot {
        let ram = match memory::read_memory_devices(&self.root) {
            Ok(banks) => RamBanks::Available(banks),
            Err(e) => {
                debug!("RAM banks unavailable: {}", e);
                RamBanks::Unavailable {
                    reason: e.to_string(),
                }
            }
        };

        let cpu_info = cpu::collect(&self.root);
        if cpu_info.core_speeds_mhz.is_empty() {
            warn!("No CPU clock speeds found in /proc/cpuinfo");
        }

        let sample = read_sensors(&self.root);
        let drm_temps = gpu::drm_temperatures(&self.root);

        Snapshot {
            collected_at: Local::now(),
            cpu: cpu_info,
            board: motherboard::collect_board(&self.root),
            bios: motherboard::collect_bios(&self.root),
            memory_summary: motherboard::collect_memory_summary(&self.root),
            ram,
            drives: storage::collect(&self.root),
            gpu: self.gpu.clone(),
            sensors: build_sections(&sample, &drm_temps, &self.config),
        }
    }
}
