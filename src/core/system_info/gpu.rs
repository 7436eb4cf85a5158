//! GPU identity from `/sys/class/drm`.
//!
//! Vendor and model strings come from a [`GpuIdentityProvider`]; the
//! platform layer plugs in NVML when it is available and falls back to
//! [`SysfsIdentityProvider`]. Subsystem vendor, VRAM and VBIOS are always
//! read from sysfs.

use std::collections::BTreeMap;

use pci_ids::{Device, FromId, Vendor};

use crate::core::sysfs::{format_bytes_gb, SysRoot, NOT_AVAILABLE};
use crate::core::system_info::types::GpuInfo;

const DRM: &str = "/sys/class/drm";

/// Channels probed per GPU hwmon device
const GPU_HWMON_CHANNELS: u32 = 10;

/// Vendor and model as reported by a driver or library
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GpuIdentity {
    pub vendor: Option<String>,
    pub model: Option<String>,
}

/// A source of GPU vendor/model strings
pub trait GpuIdentityProvider {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Identity of the primary GPU, `None` when this source cannot tell
    fn identity(&self, root: &SysRoot) -> Option<GpuIdentity>;
}

/// Reads `device/vendor` of the first DRM card. The model is
/// `device/product_name` when the driver exposes it, else the PCI database
/// name of `device/vendor` plus `device/device`.
pub struct SysfsIdentityProvider;

impl GpuIdentityProvider for SysfsIdentityProvider {
    fn name(&self) -> &'static str {
        "sysfs"
    }

    fn identity(&self, root: &SysRoot) -> Option<GpuIdentity> {
        let card = drm_cards(root).into_iter().next()?;
        let device = format!("{}/{}/device", DRM, card);

        let vendor_id = root.read_non_empty(format!("{}/vendor", device));
        let vendor = vendor_id
            .as_deref()
            .and_then(pci_vendor_name)
            .map(str::to_string);
        let model = root
            .read_non_empty(format!("{}/product_name", device))
            .or_else(|| {
                let device_id = root.read_non_empty(format!("{}/device", device))?;
                pci_device_name(vendor_id.as_deref()?, &device_id).map(str::to_string)
            });

        if vendor.is_none() && model.is_none() {
            return None;
        }
        Some(GpuIdentity { vendor, model })
    }
}

/// Primary DRM cards (`card0`, `card1`, ...), connectors excluded.
pub fn drm_cards(root: &SysRoot) -> Vec<String> {
    root.list_dir(DRM)
        .into_iter()
        .filter(|name| name.starts_with("card") && !name.contains('-'))
        .collect()
}

/// Parse a sysfs PCI id such as `0x1043` or `1043`.
fn parse_pci_id(id: &str) -> Option<u16> {
    let id = id.trim();
    let id = id.strip_prefix("0x").unwrap_or(id);
    u16::from_str_radix(id, 16).ok()
}

/// Vendor name from the PCI ID database.
pub fn pci_vendor_name(id: &str) -> Option<&'static str> {
    Vendor::from_id(parse_pci_id(id)?).map(|vendor| vendor.name())
}

/// Device name from the PCI ID database, e.g. `10de:1e87`.
pub fn pci_device_name(vendor_id: &str, device_id: &str) -> Option<&'static str> {
    Device::from_vid_pid(parse_pci_id(vendor_id)?, parse_pci_id(device_id)?)
        .map(|device| device.name())
}

/// Drop a parenthesised suffix, e.g. `"AMD Radeon RX 6800 (radeonsi, ...)"`.
pub fn strip_parenthesized(model: &str) -> String {
    match model.find('(') {
        Some(idx) => model[..idx].trim().to_string(),
        None => model.to_string(),
    }
}

/// Collect GPU identity, asking each provider in order for vendor/model.
pub fn collect(root: &SysRoot, providers: &[Box<dyn GpuIdentityProvider>]) -> GpuInfo {
    let identity = providers
        .iter()
        .find_map(|provider| {
            let identity = provider.identity(root);
            if identity.is_some() {
                log::debug!("GPU identity from {}", provider.name());
            }
            identity
        })
        .unwrap_or_default();

    let cards = drm_cards(root);

    // The last card reporting a value wins, matching a scan over all cards
    let mut subsystem_vendor = NOT_AVAILABLE.to_string();
    let mut vram = NOT_AVAILABLE.to_string();
    for card in &cards {
        let device = format!("{}/{}/device", DRM, card);
        if let Some(id) = root.read_non_empty(format!("{}/subsystem_vendor", device)) {
            subsystem_vendor = pci_vendor_name(&id).unwrap_or(NOT_AVAILABLE).to_string();
        }
        if let Some(bytes) = root.read_u64(format!("{}/mem_info_vram_total", device)) {
            vram = format_bytes_gb(bytes);
        }
    }

    let vbios = cards
        .first()
        .and_then(|card| root.read_non_empty(format!("{}/{}/device/vbios_version", DRM, card)))
        .unwrap_or_else(|| NOT_AVAILABLE.to_string());

    GpuInfo {
        vendor: identity.vendor.unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        subsystem_vendor,
        model: identity
            .model
            .map(|model| strip_parenthesized(&model))
            .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
        vram,
        vbios,
    }
}

/// Temperatures from `card*/device/hwmon/hwmon*/temp*_input`, keyed by the
/// channel label or `"cardN TempI"`. Zero readings are dropped.
pub fn drm_temperatures(root: &SysRoot) -> BTreeMap<String, f64> {
    let mut temps = BTreeMap::new();

    for card in drm_cards(root) {
        let hwmon_dir = format!("{}/{}/device/hwmon", DRM, card);
        for hwmon in root.list_dir(&hwmon_dir) {
            let base = format!("{}/{}", hwmon_dir, hwmon);
            for channel in 1..=GPU_HWMON_CHANNELS {
                let Some(milli) = root.read_f64(format!("{}/temp{}_input", base, channel)) else {
                    continue;
                };
                let celsius = milli / 1000.0;
                if celsius == 0.0 {
                    continue;
                }
                let label = root
                    .read_trimmed(format!("{}/temp{}_label", base, channel))
                    .unwrap_or_else(|| format!("{} Temp{}", card, channel));
                temps.insert(label, celsius);
            }
        }
    }

    temps
}
