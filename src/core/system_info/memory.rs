//! SMBIOS Type 17 (Memory Device) decoding.
//!
//! The kernel exposes every DMI structure as a raw blob under
//! `/sys/firmware/dmi/entries/<type>-<instance>/raw`. A Type 17 blob is a
//! formatted area of `length` bytes (byte 1) followed by a string table of
//! NUL-terminated strings ending in a double NUL. String fields in the
//! formatted area are 1-based indices into that table.
//!
//! Decoding is best effort: a malformed structure is skipped, a bad string
//! index reads as an empty string, and an unknown memory type code maps to
//! [`MemoryType::Unrecognized`].

use crate::core::sysfs::SysRoot;
use crate::core::system_info::types::{MemoryDevice, MemoryType};
use crate::error::{InsightError, Result};

const DMI_ENTRIES: &str = "/sys/firmware/dmi/entries";
const MEMORY_DEVICE_PREFIX: &str = "17-";

/// Shortest Type 17 structure we accept (SMBIOS 2.3 formatted area)
pub const TYPE17_MIN_LEN: usize = 0x1C;

const OFFSET_LENGTH: usize = 0x01;
const OFFSET_SIZE: usize = 0x0C;
const OFFSET_LOCATOR: usize = 0x10;
const OFFSET_BANK_LOCATOR: usize = 0x11;
const OFFSET_MEMORY_TYPE: usize = 0x12;
const OFFSET_SPEED: usize = 0x15;
const OFFSET_MANUFACTURER: usize = 0x17;
const OFFSET_EXTENDED_SIZE: usize = 0x1C;

const SIZE_NOT_INSTALLED: u16 = 0;
const SIZE_UNKNOWN: u16 = 0xFFFF;
const SIZE_USE_EXTENDED: u16 = 0x7FFF;
const SIZE_GRANULARITY_KB: u16 = 0x8000;

/// JEDEC manufacturer IDs as firmwares commonly report them
pub const MANUFACTURER_CODES: &[(&str, &str)] = &[
    ("029E", "Corsair"),
    ("80CE", "Kingston"),
    ("04CD", "Samsung"),
    ("049F", "Micron"),
    ("02C0", "Crucial"),
    ("0417", "ADATA"),
];

/// Read and decode every Type 17 structure the firmware exposes.
///
/// Fails only when no Type 17 entry could be read at all (no DMI support, or
/// the entries are root-only and we are not root).
pub fn read_memory_devices(root: &SysRoot) -> Result<Vec<MemoryDevice>> {
    let mut entries: Vec<String> = root
        .list_dir(DMI_ENTRIES)
        .into_iter()
        .filter(|name| name.starts_with(MEMORY_DEVICE_PREFIX))
        .collect();
    entries.sort_by_key(|name| {
        name[MEMORY_DEVICE_PREFIX.len()..]
            .parse::<u32>()
            .unwrap_or(u32::MAX)
    });

    let blobs: Vec<Vec<u8>> = entries
        .iter()
        .filter_map(|entry| root.read_bytes(format!("{}/{}/raw", DMI_ENTRIES, entry)))
        .collect();

    if blobs.is_empty() {
        return Err(InsightError::dmi_unavailable(if entries.is_empty() {
            "no memory device entries found"
        } else {
            "memory device entries are not readable"
        }));
    }

    log::debug!(
        "read {} of {} SMBIOS memory device entries",
        blobs.len(),
        entries.len()
    );

    Ok(decode_memory_devices(blobs.iter().map(Vec::as_slice)))
}

/// Decode a batch of raw structures, keeping input order and dropping
/// malformed or unpopulated slots.
pub fn decode_memory_devices<'a, I>(structures: I) -> Vec<MemoryDevice>
where
    I: IntoIterator<Item = &'a [u8]>,
{
    structures
        .into_iter()
        .filter_map(decode_memory_device)
        .collect()
}

/// Decode one raw Type 17 structure.
///
/// Returns `None` for structures that are too short, whose declared length
/// overruns the blob, or whose slot is empty or of unknown size.
pub fn decode_memory_device(raw: &[u8]) -> Option<MemoryDevice> {
    if raw.len() < TYPE17_MIN_LEN {
        log::debug!("skipping short Type 17 structure ({} bytes)", raw.len());
        return None;
    }

    let struct_len = raw[OFFSET_LENGTH] as usize;
    if struct_len > raw.len() {
        log::debug!(
            "skipping Type 17 structure: length {} exceeds {} bytes",
            struct_len,
            raw.len()
        );
        return None;
    }

    let (formatted, string_area) = raw.split_at(struct_len);
    let strings = parse_string_table(string_area);

    let size_mb = decode_size_mb(formatted)?;

    let memory_type = MemoryType::from_code(field_u8(formatted, OFFSET_MEMORY_TYPE));
    let speed_mhz = field_u16(formatted, OFFSET_SPEED);
    let locator = string_at(&strings, field_u8(formatted, OFFSET_LOCATOR)).trim();
    let bank_locator = string_at(&strings, field_u8(formatted, OFFSET_BANK_LOCATOR)).trim();
    let manufacturer = string_at(&strings, field_u8(formatted, OFFSET_MANUFACTURER)).trim();

    Some(MemoryDevice {
        locator: locator.to_string(),
        bank_locator: bank_locator.to_string(),
        size_mb,
        speed_mhz,
        memory_type,
        manufacturer: resolve_manufacturer(manufacturer),
    })
}

fn decode_size_mb(formatted: &[u8]) -> Option<u32> {
    let raw_size = field_u16(formatted, OFFSET_SIZE);
    if raw_size == SIZE_NOT_INSTALLED || raw_size == SIZE_UNKNOWN {
        return None;
    }

    let size_mb = if raw_size == SIZE_USE_EXTENDED {
        field_u32(formatted, OFFSET_EXTENDED_SIZE) & 0x7FFF_FFFF
    } else if raw_size & SIZE_GRANULARITY_KB != 0 {
        u32::from(raw_size & !SIZE_GRANULARITY_KB) / 1024
    } else {
        u32::from(raw_size)
    };

    (size_mb != 0).then_some(size_mb)
}

/// Split a DMI string table into its strings.
///
/// Only a NUL followed by another NUL (or by the end of the data) ends the
/// table; a lone NUL elsewhere yields an empty string. An unterminated
/// trailing fragment is not a string.
pub fn parse_string_table(data: &[u8]) -> Vec<String> {
    let mut strings = Vec::new();
    let mut start = 0;

    for (i, &byte) in data.iter().enumerate() {
        if byte != 0 {
            continue;
        }
        let terminator = data.get(i + 1).map_or(true, |&next| next == 0);
        if !terminator || i > start {
            strings.push(String::from_utf8_lossy(&data[start..i]).into_owned());
        }
        if terminator {
            break;
        }
        start = i + 1;
    }

    strings
}

/// Resolve a 1-based string index; 0 and out-of-range indices are empty.
pub fn string_at(strings: &[String], index: u8) -> &str {
    match index as usize {
        0 => "",
        i => strings.get(i - 1).map(String::as_str).unwrap_or(""),
    }
}

pub fn resolve_manufacturer(code: &str) -> String {
    resolve_manufacturer_with(MANUFACTURER_CODES, code)
}

/// Map a manufacturer code through `table`. Unknown codes pass through,
/// an empty code becomes `"Unknown"`.
pub fn resolve_manufacturer_with(table: &[(&str, &str)], code: &str) -> String {
    if let Some((_, name)) = table.iter().find(|(known, _)| *known == code) {
        return name.to_string();
    }
    if code.is_empty() {
        "Unknown".to_string()
    } else {
        code.to_string()
    }
}

// Fields past the formatted area (older SMBIOS revisions) read as zero.
fn field_u8(formatted: &[u8], offset: usize) -> u8 {
    formatted.get(offset).copied().unwrap_or(0)
}

fn field_u16(formatted: &[u8], offset: usize) -> u16 {
    match formatted.get(offset..offset + 2) {
        Some(bytes) => u16::from_le_bytes([bytes[0], bytes[1]]),
        None => 0,
    }
}

fn field_u32(formatted: &[u8], offset: usize) -> u32 {
    match formatted.get(offset..offset + 4) {
        Some(bytes) => u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
        None => 0,
    }
}
