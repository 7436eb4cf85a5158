//! Reads raw readings from `/sys/class/hwmon` and `/sys/class/thermal`.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::sysfs::SysRoot;

const HWMON: &str = "/sys/class/hwmon";
const THERMAL: &str = "/sys/class/thermal";

/// Channels probed per hwmon device and kind
pub const MAX_CHANNELS: u32 = 10;

/// One tick of sensor readings keyed by origin-qualified name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SensorSample {
    /// Degrees Celsius
    pub temperatures: BTreeMap<String, f64>,
    /// Revolutions per minute
    pub fan_speeds: BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Temp,
    Fan,
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelKind::Temp => write!(f, "Temp"),
            ChannelKind::Fan => write!(f, "Fan"),
        }
    }
}

/// Where a reading came from. The map key shown to the user is derived
/// from this, see [`SensorOrigin::key`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorOrigin {
    Hwmon {
        device: String,
        kind: ChannelKind,
        channel: u32,
        /// Kernel-provided `temp{i}_label`, if any
        label: Option<String>,
    },
    ThermalZone {
        zone: String,
    },
}

impl SensorOrigin {
    /// Temperatures prefer the kernel label; fans are always keyed
    /// `"{device} Fan{i}"`.
    pub fn key(&self) -> String {
        match self {
            SensorOrigin::Hwmon {
                label: Some(label),
                kind: ChannelKind::Temp,
                ..
            } => label.clone(),
            SensorOrigin::Hwmon {
                device,
                kind,
                channel,
                ..
            } => format!("{} {}{}", device, kind, channel),
            SensorOrigin::ThermalZone { zone } => zone.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SensorValue {
    Celsius(f64),
    Rpm(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SensorReading {
    pub origin: SensorOrigin,
    pub value: SensorValue,
}

/// Every readable channel in scan order: hwmon devices sorted by directory
/// name, then thermal zones.
pub fn scan_sensors(root: &SysRoot) -> Vec<SensorReading> {
    let mut readings = Vec::new();

    for entry in root.list_dir(HWMON) {
        if !entry.starts_with("hwmon") {
            continue;
        }
        let dir = format!("{}/{}", HWMON, entry);
        let device = root
            .read_trimmed(format!("{}/name", dir))
            .unwrap_or_else(|| entry.clone());

        for channel in 1..=MAX_CHANNELS {
            if let Some(milli) = root.read_f64(format!("{}/temp{}_input", dir, channel)) {
                readings.push(SensorReading {
                    origin: SensorOrigin::Hwmon {
                        device: device.clone(),
                        kind: ChannelKind::Temp,
                        channel,
                        label: root.read_trimmed(format!("{}/temp{}_label", dir, channel)),
                    },
                    value: SensorValue::Celsius(milli / 1000.0),
                });
            }
        }

        for channel in 1..=MAX_CHANNELS {
            let rpm = root
                .read_trimmed(format!("{}/fan{}_input", dir, channel))
                .and_then(|raw| raw.parse::<u32>().ok());
            if let Some(rpm) = rpm {
                readings.push(SensorReading {
                    origin: SensorOrigin::Hwmon {
                        device: device.clone(),
                        kind: ChannelKind::Fan,
                        channel,
                        label: None,
                    },
                    value: SensorValue::Rpm(rpm),
                });
            }
        }
    }

    for zone in root.list_dir(THERMAL) {
        if !zone.starts_with("thermal_zone") {
            continue;
        }
        if let Some(milli) = root.read_f64(format!("{}/{}/temp", THERMAL, zone)) {
            readings.push(SensorReading {
                origin: SensorOrigin::ThermalZone { zone },
                value: SensorValue::Celsius(milli / 1000.0),
            });
        }
    }

    readings
}

/// Flatten a scan into keyed maps. Later readings overwrite earlier ones
/// with the same key.
pub fn read_sensors(root: &SysRoot) -> SensorSample {
    let mut sample = SensorSample::default();

    for reading in scan_sensors(root) {
        let key = reading.origin.key();
        match reading.value {
            SensorValue::Celsius(celsius) => {
                sample.temperatures.insert(key, celsius);
            }
            SensorValue::Rpm(rpm) => {
                sample.fan_speeds.insert(key, rpm);
            }
        }
    }

    log::debug!(
        "Read {} temperatures, {} fans",
        sample.temperatures.len(),
        sample.fan_speeds.len()
    );
    sample
}
